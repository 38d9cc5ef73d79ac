//! Nearest-neighbour configuration.

/// Which city the nearest-neighbour tour starts from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StartCity {
    /// The lexicographically smallest city (smallest `x`, then smallest `y`).
    #[default]
    Smallest,

    /// The city at this position in the (sorted) city set.
    Index(usize),
}

/// Configuration for nearest-neighbour construction.
///
/// # Examples
///
/// ```
/// use u_tsp::construct::{NearestNeighbourConfig, StartCity};
///
/// let config = NearestNeighbourConfig::default().with_start(StartCity::Index(3));
/// assert_eq!(config.start, StartCity::Index(3));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NearestNeighbourConfig {
    /// Starting city rule.
    pub start: StartCity,
}

impl NearestNeighbourConfig {
    /// Sets the starting city rule.
    pub fn with_start(mut self, start: StartCity) -> Self {
        self.start = start;
        self
    }
}
