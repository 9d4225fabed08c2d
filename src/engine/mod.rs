// ============================================================================
// Engine Module
// Contains the rounding and averaging business logic
// ============================================================================

mod averager;
mod decimal_rounder;
mod float_api;

pub mod factory;

pub use averager::{AverageSteps, Averager};
pub use decimal_rounder::DecimalRounder;
pub use factory::{create_from_config, AveragerBuilder};
pub use float_api::{average, round_sig_figs};
