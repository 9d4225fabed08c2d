// ============================================================================
// Rounding Configuration
// Precision and tie-break settings for an averaging run
// ============================================================================

use crate::numeric::{NumericResult, SigFigs, TieBreak};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for creating an averager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoundingConfig {
    /// Significant figures kept at every rounding step (1..=28)
    pub significant_figures: u32,

    /// Midpoint rule
    #[cfg_attr(feature = "serde", serde(default))]
    pub tie_break: TieBreak,
}

impl RoundingConfig {
    /// Create a new configuration with the default tie-break
    pub fn new(significant_figures: u32) -> Self {
        Self {
            significant_figures,
            tie_break: TieBreak::default(),
        }
    }

    /// Builder method: Set the tie-break rule
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Validate the configuration and return the checked precision
    ///
    /// # Errors
    /// Returns `InvalidPrecision` if `significant_figures` is outside `1..=28`.
    pub fn validate(&self) -> NumericResult<SigFigs> {
        SigFigs::new(self.significant_figures)
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl RoundingConfig {
    /// Lab-exercise configuration
    /// - Two significant figures
    /// - Ties rounded away from zero
    pub fn classroom() -> Self {
        Self::new(2)
    }

    /// Banker's rounding at the given precision
    pub fn half_even(significant_figures: u32) -> Self {
        Self::new(significant_figures).with_tie_break(TieBreak::HalfEven)
    }
}

impl Default for RoundingConfig {
    fn default() -> Self {
        Self::classroom()
    }
}
