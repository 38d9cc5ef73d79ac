//! Exhaustive 2-opt configuration.

use crate::construct::NearestNeighbourConfig;

/// Configuration for [`ExhaustiveRunner`](super::ExhaustiveRunner).
///
/// # Examples
///
/// ```
/// use u_tsp::exhaustive::ExhaustiveConfig;
///
/// let config = ExhaustiveConfig::default().with_max_passes(10);
/// assert_eq!(config.max_passes, 10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExhaustiveConfig {
    /// Maximum number of full passes over all edge pairs.
    pub max_passes: usize,
    /// Settings for the starting nearest-neighbour tour.
    pub construction: NearestNeighbourConfig,
}

impl Default for ExhaustiveConfig {
    fn default() -> Self {
        Self {
            max_passes: 5,
            construction: NearestNeighbourConfig::default(),
        }
    }
}

impl ExhaustiveConfig {
    /// Sets the pass cap.
    pub fn with_max_passes(mut self, n: usize) -> Self {
        self.max_passes = n;
        self
    }

    /// Sets the construction settings.
    pub fn with_construction(mut self, construction: NearestNeighbourConfig) -> Self {
        self.construction = construction;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_passes == 0 {
            return Err("max_passes must be at least 1".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExhaustiveConfig::default();
        assert_eq!(config.max_passes, 5);
        assert_eq!(config.construction, NearestNeighbourConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_passes() {
        let config = ExhaustiveConfig::default().with_max_passes(0);
        assert!(config.validate().is_err());
    }
}
