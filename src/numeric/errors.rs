// ============================================================================
// Numeric Errors
// Error types for significant-figure rounding and averaging
// ============================================================================

use std::fmt;

/// Errors that can occur while rounding or averaging measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Significant-figure count outside `1..=28`
    InvalidPrecision,
    /// Input is NaN or infinite
    NonFinite,
    /// Input string is not a decimal number
    InvalidInput,
    /// Result outside the range of the target numeric type
    OutOfRange,
}

impl NumericError {
    /// Whether the error was caused by a bad argument from the caller.
    ///
    /// `OutOfRange` is excluded: it reports a result the target type
    /// (`Decimal`, or `f64` past `f64::MAX`) cannot hold, not a malformed
    /// request.
    #[inline]
    pub const fn is_invalid_argument(self) -> bool {
        matches!(
            self,
            NumericError::InvalidPrecision | NumericError::NonFinite | NumericError::InvalidInput
        )
    }
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidPrecision => write!(
                f,
                "invalid argument: significant figures must be between 1 and 28"
            ),
            NumericError::NonFinite => {
                write!(f, "invalid argument: value must be a finite number")
            },
            NumericError::InvalidInput => {
                write!(f, "invalid argument: could not parse value")
            },
            NumericError::OutOfRange => {
                write!(f, "out of range: value exceeds the numeric type's range")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::InvalidPrecision.to_string(),
            "invalid argument: significant figures must be between 1 and 28"
        );
        assert_eq!(
            NumericError::NonFinite.to_string(),
            "invalid argument: value must be a finite number"
        );
        assert_eq!(
            NumericError::OutOfRange.to_string(),
            "out of range: value exceeds the numeric type's range"
        );
    }

    #[test]
    fn test_invalid_argument_classification() {
        assert!(NumericError::InvalidPrecision.is_invalid_argument());
        assert!(NumericError::NonFinite.is_invalid_argument());
        assert!(NumericError::InvalidInput.is_invalid_argument());
        assert!(!NumericError::OutOfRange.is_invalid_argument());
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(NumericError::NonFinite);
        assert!(err.to_string().starts_with("invalid argument"));
    }
}
