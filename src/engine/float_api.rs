// ============================================================================
// Float API
// One-call rounding and averaging on plain f64 values
// ============================================================================

use crate::numeric::{NumericResult, SigFigs, TieBreak, WideDecimal};

const FLOAT_TIE_BREAK: TieBreak = TieBreak::HalfAwayFromZero;

/// Round `value` to `sig_figs` significant figures, ties away from zero.
///
/// Works over the whole finite `f64` range, including values far outside
/// what a `Decimal` can hold.
///
/// # Errors
/// - `InvalidPrecision` if `sig_figs` is outside `1..=28`, whatever `value` is
/// - `NonFinite` for NaN and infinities
/// - `OutOfRange` if rounding carries past `f64::MAX` (e.g. `1.8e308` at 1 figure)
///
/// # Example
/// ```
/// use sigfig_average::round_sig_figs;
///
/// assert_eq!(round_sig_figs(5.74, 2).unwrap(), 5.7);
/// assert_eq!(round_sig_figs(1234.5, 2).unwrap(), 1200.0);
/// assert_eq!(round_sig_figs(1.2345678901234567e-13, 2).unwrap(), 1.2e-13);
/// assert!(round_sig_figs(5.74, 0).is_err());
/// ```
pub fn round_sig_figs(value: f64, sig_figs: i64) -> NumericResult<f64> {
    let sig_figs = SigFigs::try_from(sig_figs)?;
    WideDecimal::from_f64(value)?
        .round_sig_figs(sig_figs, FLOAT_TIE_BREAK)
        .to_f64()
}

/// Average two values, rounding each input, the sum and the mean to
/// `sig_figs` significant figures, ties away from zero.
///
/// Every step is exact decimal arithmetic; only the final result goes
/// back to `f64`.
///
/// # Errors
/// Same as [`round_sig_figs`]; the precision is checked before the inputs.
///
/// # Example
/// ```
/// use sigfig_average::average;
///
/// // 5.7 + 5.7 = 11.4 -> 11, 11 / 2 = 5.5
/// assert_eq!(average(5.74, 5.72, 2).unwrap(), 5.5);
/// ```
pub fn average(first: f64, second: f64, sig_figs: i64) -> NumericResult<f64> {
    let sig_figs = SigFigs::try_from(sig_figs)?;
    let first = WideDecimal::from_f64(first)?;
    let second = WideDecimal::from_f64(second)?;

    let round = |value: &WideDecimal| value.round_sig_figs(sig_figs, FLOAT_TIE_BREAK);

    let first = round(&first);
    let second = round(&second);
    let sum = round(&(&first + &second));
    let mean = round(&sum.half());

    tracing::trace!(%first, %second, %sum, %mean, %sig_figs, "averaged floats");

    mean.to_f64()
}
