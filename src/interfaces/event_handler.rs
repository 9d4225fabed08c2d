// ============================================================================
// Event Handler Interface
// Defines the contract for observing averaging steps
// ============================================================================

use crate::numeric::NumericError;
use rust_decimal::Decimal;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which value a rounding step was applied to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingStage {
    FirstInput,
    SecondInput,
    Sum,
    Mean,
}

impl fmt::Display for RoundingStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundingStage::FirstInput => write!(f, "first input"),
            RoundingStage::SecondInput => write!(f, "second input"),
            RoundingStage::Sum => write!(f, "sum"),
            RoundingStage::Mean => write!(f, "mean"),
        }
    }
}

/// Events emitted by the averager
#[derive(Debug, Clone, PartialEq)]
pub enum AveragingEvent {
    /// A value was rounded before its next use
    StepRounded {
        stage: RoundingStage,
        raw: Decimal,
        rounded: Decimal,
    },

    /// Average computed
    AverageCompleted { result: Decimal },

    /// Average abandoned on error
    AverageRejected { error: NumericError },
}

/// Event handler trait for processing averaging events
/// Implementations can handle logging, tracing of worked examples, etc.
pub trait EventHandler: Send + Sync {
    /// Handle an averaging event
    fn on_event(&self, event: AveragingEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<AveragingEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: AveragingEvent) {
        // Do nothing
    }
}

/// Logging event handler
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: AveragingEvent) {
        match event {
            AveragingEvent::StepRounded {
                stage,
                raw,
                rounded,
            } => tracing::debug!(%stage, %raw, %rounded, "rounded"),
            AveragingEvent::AverageCompleted { result } => {
                tracing::debug!(%result, "average completed")
            },
            AveragingEvent::AverageRejected { error } => {
                tracing::warn!(%error, "average rejected")
            },
        }
    }
}
