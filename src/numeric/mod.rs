// ============================================================================
// Numeric Module
// Exact decimal rounding to a number of significant figures
// ============================================================================
//
// This module provides:
// - SigFigs: validated significant-figure count (1..=28)
// - TieBreak: midpoint rule selection
// - round_decimal: the significant-figure rounding primitive
// - Float boundary conversions (shortest round-trip decimal)
// - WideDecimal: unbounded exact decimal for the f64 API
// - NumericError: error types for all of the above
//
// Design principles:
// - Arithmetic happens on exact decimals, never on f64
// - All operations return Result (no panics)

mod errors;
mod significant;
mod wide_decimal;

pub use errors::{NumericError, NumericResult};
pub use significant::{decimal_from_f64, f64_from_decimal, round_decimal, SigFigs, TieBreak};
pub use wide_decimal::WideDecimal;
