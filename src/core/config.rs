//! Configuration for the comparison pipeline.

use serde::{Deserialize, Serialize};

use crate::core::errors::LayoutError;
use crate::utils::validation::validate_tolerance;

/// Default tolerance, in page pixels, for treating two box centers as
/// aligned along an axis.
pub const DEFAULT_ALIGN_TOLERANCE: f64 = 8.0;

/// Default tolerance, in page pixels, for treating two box edges as
/// sequential along an axis.
pub const DEFAULT_ADJ_TOLERANCE: f64 = 4.0;

/// Tolerances driving text block consolidation.
///
/// Both tolerances are expressed in page pixels: consolidation always runs
/// before coordinate normalization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsolidationConfig {
    /// Maximum center distance for two boxes to count as aligned.
    pub align_tolerance: f64,
    /// Maximum edge gap for two boxes to count as sequential.
    pub adj_tolerance: f64,
}

impl Default for ConsolidationConfig {
    fn default() -> Self {
        Self {
            align_tolerance: DEFAULT_ALIGN_TOLERANCE,
            adj_tolerance: DEFAULT_ADJ_TOLERANCE,
        }
    }
}

impl ConsolidationConfig {
    /// Validates the configured tolerances.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidConfig`] if either tolerance is
    /// negative or non-finite.
    pub fn validate(&self) -> Result<(), LayoutError> {
        validate_tolerance("align_tolerance", self.align_tolerance)?;
        validate_tolerance("adj_tolerance", self.adj_tolerance)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = ConsolidationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.align_tolerance, 8.0);
        assert_eq!(config.adj_tolerance, 4.0);
    }

    #[test]
    fn negative_tolerance_is_rejected() {
        let config = ConsolidationConfig {
            align_tolerance: -1.0,
            ..ConsolidationConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(LayoutError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn non_finite_tolerance_is_rejected() {
        let config = ConsolidationConfig {
            adj_tolerance: f64::NAN,
            ..ConsolidationConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
