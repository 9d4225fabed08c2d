// ============================================================================
// Domain Models Module
// Contains the measurement value object and run configuration
// ============================================================================

pub mod config;
pub mod measurement;

pub use config::RoundingConfig;
pub use measurement::Measurement;
