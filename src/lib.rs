// ============================================================================
// Significant-Figure Averaging Library
// Averages measurements with rounding to significant figures at every step
// ============================================================================

//! # sigfig-average
//!
//! Averages two measurements the way a lab notebook does: every value is
//! rounded to a fixed number of significant figures before it is used.
//!
//! ## Features
//!
//! - **Exact decimal arithmetic** on `rust_decimal::Decimal`
//! - **Full `f64` range** for the one-call float functions
//! - **Configurable tie-break** (half away from zero, half even)
//! - **Pluggable rounding primitive** through the `SigFigRounder` trait
//! - **Step events** for tracing each intermediate value
//!
//! ## Example
//!
//! ```rust
//! use sigfig_average::prelude::*;
//! use std::sync::Arc;
//!
//! let averager = create_from_config(&RoundingConfig::classroom(), Arc::new(NoOpEventHandler))
//!     .unwrap();
//!
//! let first: Measurement = "5.74".parse().unwrap();
//! let second: Measurement = "5.72".parse().unwrap();
//!
//! // 5.74 -> 5.7, 5.72 -> 5.7, 11.4 -> 11, 5.5 -> 5.5
//! let steps = averager.average_with_steps(first, second).unwrap();
//! assert_eq!(steps.result.to_string(), "5.5");
//! println!("Sum: {} -> {}", steps.raw_sum, steps.sum);
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

pub use engine::{average, round_sig_figs};

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{Measurement, RoundingConfig};
    pub use crate::engine::{
        average, create_from_config, round_sig_figs, AverageSteps, Averager, AveragerBuilder,
        DecimalRounder,
    };
    pub use crate::interfaces::{
        AveragingEvent, EventHandler, LoggingEventHandler, NoOpEventHandler, RoundingStage,
        SigFigRounder,
    };
    pub use crate::numeric::{NumericError, NumericResult, SigFigs, TieBreak};
}
