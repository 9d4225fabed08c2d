// ============================================================================
// Wide Decimal
// Exact decimals covering the whole finite f64 range
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::significant::{SigFigs, TieBreak};
use num::bigint::{BigInt, BigUint, Sign};
use num::traits::Zero;
use num::Integer;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

/// Exact decimal `coefficient × 10^exponent`.
///
/// `Decimal` stops at 28 fractional digits and about 7.9e28; this type
/// holds every finite `f64` (5e-324 up to 1.8e308) and their exact sums.
///
/// Always normalized: the coefficient has no trailing zeros and zero is
/// stored with exponent 0, so derived equality compares values.
///
/// # Example
/// ```
/// use sigfig_average::numeric::{SigFigs, TieBreak, WideDecimal};
///
/// let electron_mass = WideDecimal::from_f64(9.1093837015e-31).unwrap();
/// let rounded = electron_mass.round_sig_figs(SigFigs::new(2).unwrap(), TieBreak::HalfAwayFromZero);
/// assert_eq!(rounded.to_string(), "91e-32");
/// assert_eq!(rounded.to_f64().unwrap(), 9.1e-31);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WideDecimal {
    coefficient: BigInt,
    exponent: i64,
}

/// 10^n
fn pow10(n: u32) -> BigUint {
    BigUint::from(10u32).pow(n)
}

/// Number of decimal digits in a non-zero magnitude
fn digit_count(magnitude: &BigUint) -> u32 {
    magnitude.to_str_radix(10).len() as u32
}

impl WideDecimal {
    /// Zero value
    pub fn zero() -> Self {
        Self {
            coefficient: BigInt::zero(),
            exponent: 0,
        }
    }

    /// Build from parts, stripping trailing zeros.
    fn from_parts(coefficient: BigInt, exponent: i64) -> Self {
        if coefficient.is_zero() {
            return Self::zero();
        }

        let digits = coefficient.magnitude().to_str_radix(10);
        let trailing = digits.len() - digits.trim_end_matches('0').len();
        if trailing == 0 {
            return Self {
                coefficient,
                exponent,
            };
        }

        Self {
            coefficient: coefficient / BigInt::from(pow10(trailing as u32)),
            exponent: exponent + trailing as i64,
        }
    }

    /// Create from a float, exactly as it prints.
    ///
    /// `5.74_f64` becomes `574e-2`, not its binary expansion.
    ///
    /// # Errors
    /// Returns `NonFinite` for NaN and infinities.
    pub fn from_f64(value: f64) -> NumericResult<Self> {
        if !value.is_finite() {
            return Err(NumericError::NonFinite);
        }

        // Shortest round-trip form, e.g. "-1.2345e-13"
        let text = format!("{value:e}");
        let (mantissa, exponent) = text.split_once('e').ok_or(NumericError::InvalidInput)?;
        let exponent: i64 = exponent.parse().map_err(|_| NumericError::InvalidInput)?;

        let (sign, mantissa) = match mantissa.strip_prefix('-') {
            Some(rest) => (Sign::Minus, rest),
            None => (Sign::Plus, mantissa),
        };
        let (int_digits, frac_digits) = mantissa.split_once('.').unwrap_or((mantissa, ""));

        let magnitude = BigUint::parse_bytes(format!("{int_digits}{frac_digits}").as_bytes(), 10)
            .ok_or(NumericError::InvalidInput)?;

        Ok(Self::from_parts(
            BigInt::from_biguint(sign, magnitude),
            exponent - frac_digits.len() as i64,
        ))
    }

    /// Nearest float to this value.
    ///
    /// # Errors
    /// Returns `OutOfRange` if the value is beyond `f64::MAX` in magnitude.
    pub fn to_f64(&self) -> NumericResult<f64> {
        let value: f64 = self
            .to_string()
            .parse()
            .map_err(|_| NumericError::OutOfRange)?;

        if value.is_finite() {
            Ok(value)
        } else {
            Err(NumericError::OutOfRange)
        }
    }

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }

    /// Round to `sig_figs` significant figures.
    ///
    /// The dropped digits are compared against half the divisor on an
    /// unbounded intermediate, so ties are detected exactly.
    pub fn round_sig_figs(&self, sig_figs: SigFigs, tie_break: TieBreak) -> Self {
        let magnitude = self.coefficient.magnitude();
        if magnitude.is_zero() {
            return Self::zero();
        }

        let digits = digit_count(magnitude);
        if digits <= sig_figs.get() {
            return self.clone();
        }

        let dropped = digits - sig_figs.get();
        let divisor = pow10(dropped);
        let (mut quotient, remainder) = magnitude.div_rem(&divisor);

        let round_up = match (remainder * 2u32).cmp(&divisor) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => match tie_break {
                TieBreak::HalfAwayFromZero => true,
                TieBreak::HalfEven => quotient.is_odd(),
            },
        };
        if round_up {
            quotient += 1u32;
        }

        Self::from_parts(
            BigInt::from_biguint(self.coefficient.sign(), quotient),
            self.exponent + i64::from(dropped),
        )
    }

    /// Exactly half of this value.
    pub fn half(&self) -> Self {
        // x / 2 == 5x / 10
        Self::from_parts(&self.coefficient * 5u32, self.exponent - 1)
    }
}

impl Default for WideDecimal {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for &WideDecimal {
    type Output = WideDecimal;

    /// Exact sum; aligns both coefficients to the smaller exponent.
    fn add(self, rhs: Self) -> Self::Output {
        if self.is_zero() {
            return rhs.clone();
        }
        if rhs.is_zero() {
            return self.clone();
        }

        let exponent = self.exponent.min(rhs.exponent);
        let align = |value: &WideDecimal| {
            &value.coefficient * BigInt::from(pow10((value.exponent - exponent) as u32))
        };

        WideDecimal::from_parts(align(self) + align(rhs), exponent)
    }
}

impl fmt::Display for WideDecimal {
    /// Scientific form with an integer coefficient, e.g. `574e-2`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}e{}", self.coefficient, self.exponent)
    }
}
