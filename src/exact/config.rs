//! Exact solver configuration.

/// Configuration for [`brute_force`](super::brute_force).
///
/// # Examples
///
/// ```
/// use u_tsp::exact::ExactConfig;
///
/// let config = ExactConfig::default().with_max_cities(8);
/// assert_eq!(config.max_cities, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExactConfig {
    /// Largest instance the solver accepts.
    pub max_cities: usize,
}

impl Default for ExactConfig {
    fn default() -> Self {
        Self { max_cities: 10 }
    }
}

impl ExactConfig {
    /// Sets the instance size limit.
    pub fn with_max_cities(mut self, n: usize) -> Self {
        self.max_cities = n;
        self
    }
}
