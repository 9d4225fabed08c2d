// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod event_handler;
mod rounding_primitive;

pub use event_handler::{
    AveragingEvent, EventHandler, LoggingEventHandler, NoOpEventHandler, RoundingStage,
};
pub use rounding_primitive::SigFigRounder;
