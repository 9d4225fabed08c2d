// ============================================================================
// Measurement
// A single measured scalar value held as an exact decimal
// ============================================================================

use crate::numeric::{decimal_from_f64, f64_from_decimal, NumericError, NumericResult};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// A measured value such as a length in centimeters.
///
/// Held as a `Decimal` so that rounding to significant figures operates on
/// the digits the value was written with.
///
/// # Example
/// ```
/// use sigfig_average::domain::Measurement;
///
/// let m = Measurement::from_f64(5.74).unwrap();
/// assert_eq!(m.to_string(), "5.74");
///
/// let parsed: Measurement = "5.72".parse().unwrap();
/// assert!(parsed < m);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(transparent)]
pub struct Measurement(Decimal);

impl Measurement {
    /// Zero value
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Wrap an exact decimal.
    #[inline]
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Create from a float.
    ///
    /// # Errors
    /// - `NonFinite` for NaN and infinities
    /// - `OutOfRange` if the value does not fit a `Decimal`
    #[inline]
    pub fn from_f64(value: f64) -> NumericResult<Self> {
        decimal_from_f64(value).map(Self)
    }

    /// The underlying decimal.
    #[inline]
    pub const fn value(self) -> Decimal {
        self.0
    }

    /// Nearest float to this measurement.
    ///
    /// # Errors
    /// Returns `OutOfRange` if the conversion fails.
    #[inline]
    pub fn to_f64(self) -> NumericResult<f64> {
        f64_from_decimal(self.0)
    }

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }
}

impl From<Decimal> for Measurement {
    #[inline]
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl FromStr for Measurement {
    type Err = NumericError;

    /// Parse plain (`"5.74"`) or scientific (`"5.74e-3"`) decimal text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumericError::InvalidInput);
        }

        let parsed = if s.contains(['e', 'E']) {
            Decimal::from_scientific(s)
        } else {
            Decimal::from_str_exact(s)
        };

        parsed.map(Self).map_err(|_| NumericError::InvalidInput)
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
