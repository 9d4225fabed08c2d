// ============================================================================
// Significant Figures
// Validated precision, tie-break selection and decimal rounding
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of significant decimal digits kept by a rounding step.
///
/// Always within `1..=28`; the upper bound is the number of decimal digits
/// a `Decimal` mantissa can carry.
///
/// # Example
/// ```
/// use sigfig_average::numeric::SigFigs;
///
/// let two = SigFigs::new(2).unwrap();
/// assert_eq!(two.get(), 2);
/// assert!(SigFigs::new(0).is_err());
/// assert!(SigFigs::try_from(-3_i64).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct SigFigs(u32);

impl SigFigs {
    /// Smallest valid count
    pub const MIN: u32 = 1;

    /// Largest valid count
    pub const MAX: u32 = 28;

    /// Create a validated significant-figure count.
    ///
    /// # Errors
    /// Returns `InvalidPrecision` if `digits` is outside `1..=28`.
    #[inline]
    pub fn new(digits: u32) -> NumericResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&digits) {
            Ok(Self(digits))
        } else {
            Err(NumericError::InvalidPrecision)
        }
    }

    /// Get the digit count.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for SigFigs {
    type Error = NumericError;

    fn try_from(digits: u32) -> Result<Self, Self::Error> {
        Self::new(digits)
    }
}

impl TryFrom<i64> for SigFigs {
    type Error = NumericError;

    fn try_from(digits: i64) -> Result<Self, Self::Error> {
        let digits = u32::try_from(digits).map_err(|_| NumericError::InvalidPrecision)?;
        Self::new(digits)
    }
}

impl fmt::Display for SigFigs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Tie-Break Rule
// ============================================================================

/// Rule applied when a value lies exactly halfway between two candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TieBreak {
    /// 2.25 -> 2.3, -2.25 -> -2.3
    #[default]
    HalfAwayFromZero,

    /// 2.25 -> 2.2, 2.35 -> 2.4 (banker's rounding)
    HalfEven,
}

impl TieBreak {
    /// The `rust_decimal` strategy implementing this rule
    #[inline]
    pub const fn strategy(self) -> RoundingStrategy {
        match self {
            TieBreak::HalfAwayFromZero => RoundingStrategy::MidpointAwayFromZero,
            TieBreak::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TieBreak::HalfAwayFromZero => write!(f, "half-away-from-zero"),
            TieBreak::HalfEven => write!(f, "half-even"),
        }
    }
}

// ============================================================================
// Rounding
// ============================================================================

/// Round `value` to `sig_figs` significant figures.
///
/// Zero is returned unchanged for every precision. Trailing zeros are
/// stripped from the result, so `5.70` comes back as `5.7`.
///
/// # Errors
/// Returns `OutOfRange` if rounding carries the value past `Decimal::MAX`.
pub fn round_decimal(
    value: Decimal,
    sig_figs: SigFigs,
    tie_break: TieBreak,
) -> NumericResult<Decimal> {
    if value.is_zero() {
        return Ok(Decimal::ZERO);
    }

    value
        .round_sf_with_strategy(sig_figs.get(), tie_break.strategy())
        .map(|rounded| rounded.normalize())
        .ok_or(NumericError::OutOfRange)
}

// ============================================================================
// Float Boundary
// ============================================================================

/// Convert a float to the decimal it prints as.
///
/// Uses the shortest representation that reads back as the same float, so
/// `5.74_f64` becomes exactly `5.74` rather than its binary expansion.
///
/// Only for the `Decimal`-backed typed API; the `f64` functions go through
/// [`WideDecimal`](super::WideDecimal) and accept every finite float.
///
/// # Errors
/// - `NonFinite` for NaN and infinities
/// - `OutOfRange` if the magnitude is beyond `Decimal` range or needs more
///   than 28 fractional digits
pub fn decimal_from_f64(value: f64) -> NumericResult<Decimal> {
    if !value.is_finite() {
        return Err(NumericError::NonFinite);
    }

    Decimal::from_scientific(&format!("{value:e}")).map_err(|_| NumericError::OutOfRange)
}

/// Convert a decimal to the nearest float.
///
/// # Errors
/// Returns `OutOfRange` if the decimal text cannot be read back as a float.
pub fn f64_from_decimal(value: Decimal) -> NumericResult<f64> {
    value
        .to_string()
        .parse::<f64>()
        .map_err(|_| NumericError::OutOfRange)
}

// ============================================================================
// Tests
// ============================================================================
