// ============================================================================
// Decimal Rounder
// Library-backed significant-figure rounding on rust_decimal
// ============================================================================

use crate::interfaces::SigFigRounder;
use crate::numeric::{round_decimal, NumericResult, SigFigs, TieBreak};
use rust_decimal::Decimal;

/// Significant-figure rounding backed by `Decimal::round_sf_with_strategy`
///
/// # Example
/// ```text
/// 5.74  @ 2 sf -> 5.7
/// 11.4  @ 2 sf -> 11
/// 1250  @ 2 sf -> 1300 (half away from zero) / 1200 (half even)
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DecimalRounder {
    tie_break: TieBreak,
}

impl DecimalRounder {
    pub const fn new(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }

    pub const fn tie_break(&self) -> TieBreak {
        self.tie_break
    }
}

impl SigFigRounder for DecimalRounder {
    fn round(&self, value: Decimal, sig_figs: SigFigs) -> NumericResult<Decimal> {
        let rounded = round_decimal(value, sig_figs, self.tie_break)?;
        tracing::trace!(%value, %rounded, %sig_figs, tie_break = %self.tie_break, "rounded to significant figures");
        Ok(rounded)
    }

    fn name(&self) -> &str {
        match self.tie_break {
            TieBreak::HalfAwayFromZero => "DecimalHalfAwayFromZero",
            TieBreak::HalfEven => "DecimalHalfEven",
        }
    }
}
