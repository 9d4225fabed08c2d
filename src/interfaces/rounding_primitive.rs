// ============================================================================
// Rounding Primitive Interface
// Defines the contract for significant-figure rounding implementations
// ============================================================================

use crate::numeric::{NumericResult, SigFigs};
use rust_decimal::Decimal;

/// Strategy interface for the significant-figure rounding primitive.
/// Implementations: `DecimalRounder` (backed by `rust_decimal`), or any
/// hand-written rounder plugged into an `Averager`.
pub trait SigFigRounder: Send + Sync {
    /// Round a value to a number of significant figures
    ///
    /// # Arguments
    /// * `value` - The value to round
    /// * `sig_figs` - Significant figures to keep
    ///
    /// # Returns
    /// The nearest value representable with `sig_figs` significant digits.
    /// Zero must map to zero.
    fn round(&self, value: Decimal, sig_figs: SigFigs) -> NumericResult<Decimal>;

    /// Get the rounder name for logging
    fn name(&self) -> &str;
}
