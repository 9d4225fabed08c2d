// ============================================================================
// Averager Factory
// Creates averagers with proper configuration
// ============================================================================

use crate::domain::RoundingConfig;
use crate::engine::{Averager, DecimalRounder};
use crate::interfaces::{EventHandler, SigFigRounder};
use crate::numeric::{NumericResult, TieBreak};
use std::fmt;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates an averager from configuration
///
/// # Arguments
/// * `config` - Rounding configuration
/// * `event_handler` - Event handler for step events
///
/// # Returns
/// * `NumericResult<Averager>` - Configured averager or `InvalidPrecision`
///
/// # Example
/// ```
/// use sigfig_average::prelude::*;
/// use std::sync::Arc;
///
/// let config = RoundingConfig::classroom();
/// let averager = create_from_config(&config, Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(averager.sig_figs().get(), 2);
/// ```
pub fn create_from_config(
    config: &RoundingConfig,
    event_handler: Arc<dyn EventHandler>,
) -> NumericResult<Averager> {
    // Validate configuration first
    let sig_figs = config.validate()?;

    let rounder = Box::new(DecimalRounder::new(config.tie_break));

    Ok(Averager::new(sig_figs, rounder, event_handler))
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating averagers with fluent API
///
/// # Example
/// ```
/// use sigfig_average::prelude::*;
/// use std::sync::Arc;
///
/// let averager = AveragerBuilder::new(3)
///     .half_even()
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
///
/// let x: Measurement = "2.345".parse().unwrap();
/// assert_eq!(averager.round(x).unwrap().to_string(), "2.34");
/// ```
pub struct AveragerBuilder {
    config: RoundingConfig,
    rounder: Option<Box<dyn SigFigRounder>>,
}

impl AveragerBuilder {
    /// Create a new builder for the given precision
    pub fn new(significant_figures: u32) -> Self {
        Self {
            config: RoundingConfig::new(significant_figures),
            rounder: None,
        }
    }

    /// Start from an existing configuration
    pub fn from_config(config: RoundingConfig) -> Self {
        Self {
            config,
            rounder: None,
        }
    }

    // ========================================================================
    // Rounding Configuration
    // ========================================================================

    /// Set the tie-break rule
    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.config.tie_break = tie_break;
        self
    }

    /// Round ties half away from zero (default)
    pub fn half_away_from_zero(self) -> Self {
        self.tie_break(TieBreak::HalfAwayFromZero)
    }

    /// Round ties to even
    pub fn half_even(self) -> Self {
        self.tie_break(TieBreak::HalfEven)
    }

    /// Replace the rounding primitive.
    ///
    /// The tie-break setting is ignored once a custom rounder is supplied.
    pub fn with_rounder(mut self, rounder: Box<dyn SigFigRounder>) -> Self {
        self.rounder = Some(rounder);
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the averager
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> NumericResult<Averager> {
        match self.rounder {
            Some(rounder) => Ok(Averager::new(
                self.config.validate()?,
                rounder,
                event_handler,
            )),
            None => create_from_config(&self.config, event_handler),
        }
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &RoundingConfig {
        &self.config
    }
}

impl fmt::Debug for AveragerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AveragerBuilder")
            .field("config", &self.config)
            .field("rounder", &self.rounder.as_ref().map(|r| r.name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Measurement;
    use crate::interfaces::NoOpEventHandler;
    use crate::numeric::{NumericError, SigFigs};
    use rust_decimal::Decimal;

    /// Drops every digit past the requested count
    struct TruncatingRounder;

    impl SigFigRounder for TruncatingRounder {
        fn round(&self, value: Decimal, sig_figs: SigFigs) -> NumericResult<Decimal> {
            value
                .round_sf_with_strategy(sig_figs.get(), rust_decimal::RoundingStrategy::ToZero)
                .ok_or(NumericError::OutOfRange)
        }

        fn name(&self) -> &str {
            "Truncating"
        }
    }

    fn m(s: &str) -> Measurement {
        s.parse().unwrap()
    }

    #[test]
    fn test_create_classroom_averager() {
        let config = RoundingConfig::classroom();
        let averager = create_from_config(&config, Arc::new(NoOpEventHandler)).unwrap();
        assert_eq!(averager.sig_figs().get(), 2);
        assert_eq!(averager.rounder_name(), "DecimalHalfAwayFromZero");
    }

    #[test]
    fn test_create_half_even_averager() {
        let config = RoundingConfig::half_even(4);
        let averager = create_from_config(&config, Arc::new(NoOpEventHandler)).unwrap();
        assert_eq!(averager.rounder_name(), "DecimalHalfEven");
    }

    #[test]
    fn test_create_rejects_invalid_precision() {
        let config = RoundingConfig::new(0);
        let result = create_from_config(&config, Arc::new(NoOpEventHandler));
        assert_eq!(result.unwrap_err(), NumericError::InvalidPrecision);
    }

    #[test]
    fn test_builder_pattern() {
        let averager = AveragerBuilder::new(2)
            .half_even()
            .build(Arc::new(NoOpEventHandler))
            .unwrap();

        // 2.5 + 2.4 = 4.9, 4.9 / 2 = 2.45 -> 2.4
        assert_eq!(averager.average(m("2.5"), m("2.4")).unwrap(), m("2.4"));
    }

    #[test]
    fn test_builder_custom_rounder() {
        let averager = AveragerBuilder::new(2)
            .with_rounder(Box::new(TruncatingRounder))
            .build(Arc::new(NoOpEventHandler))
            .unwrap();

        assert_eq!(averager.rounder_name(), "Truncating");
        // 5.7 + 5.7 = 11.4 -> 11, 11 / 2 = 5.5
        assert_eq!(averager.average(m("5.79"), m("5.78")).unwrap(), m("5.5"));
    }

    #[test]
    fn test_builder_custom_rounder_still_validates() {
        let result = AveragerBuilder::new(30)
            .with_rounder(Box::new(TruncatingRounder))
            .build(Arc::new(NoOpEventHandler));
        assert_eq!(result.unwrap_err(), NumericError::InvalidPrecision);
    }

    #[test]
    fn test_builder_from_config() {
        let builder = AveragerBuilder::from_config(RoundingConfig::half_even(3)).half_away_from_zero();
        assert_eq!(builder.get_config(), &RoundingConfig::new(3));
    }
}
