//! City generator configuration.

/// Configuration for [`generate_cities`](super::generate_cities).
///
/// # Examples
///
/// ```
/// use u_tsp::generate::GeneratorConfig;
///
/// let config = GeneratorConfig::default().with_size(500, 300).with_seed(42);
/// assert_eq!(config.width, 500);
/// assert_eq!(config.height, 300);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorConfig {
    /// Exclusive upper bound for `x`.
    pub width: u32,
    /// Exclusive upper bound for `y`.
    pub height: u32,
    /// Random seed (None seeds with the requested city count).
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 1000,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Sets the rectangle size.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "width and height must be positive, got {}x{}",
                self.width, self.height
            ));
        }
        Ok(())
    }
}
