//! Strategy selection and per-strategy settings.

use std::fmt;

use crate::construct::NearestNeighbourConfig;
use crate::crossing::CrossingConfig;
use crate::exact::ExactConfig;
use crate::exhaustive::ExhaustiveConfig;

/// Tour strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Greedy nearest-neighbour construction only.
    NearestNeighbour,
    /// Nearest neighbour followed by crossing-detection 2-opt.
    TwoOpt,
    /// Nearest neighbour followed by exhaustive 2-opt.
    TwoOptExhaustive,
    /// Exact enumeration (tiny instances only).
    BruteForce,
}

impl Strategy {
    /// All strategies, cheapest first.
    pub const ALL: [Strategy; 4] = [
        Strategy::NearestNeighbour,
        Strategy::TwoOpt,
        Strategy::TwoOptExhaustive,
        Strategy::BruteForce,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::NearestNeighbour => "nearest_neighbour",
            Strategy::TwoOpt => "two_opt",
            Strategy::TwoOptExhaustive => "two_opt_e",
            Strategy::BruteForce => "brute_force",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Settings handed to whichever strategy runs.
///
/// # Examples
///
/// ```
/// use u_tsp::exhaustive::ExhaustiveConfig;
/// use u_tsp::solve::SolveConfig;
///
/// let config = SolveConfig::default()
///     .with_exhaustive(ExhaustiveConfig::default().with_max_passes(20));
/// assert_eq!(config.exhaustive.max_passes, 20);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveConfig {
    /// Used by [`Strategy::NearestNeighbour`].
    pub construction: NearestNeighbourConfig,
    /// Used by [`Strategy::TwoOpt`].
    pub crossing: CrossingConfig,
    /// Used by [`Strategy::TwoOptExhaustive`].
    pub exhaustive: ExhaustiveConfig,
    /// Used by [`Strategy::BruteForce`].
    pub exact: ExactConfig,
}

impl SolveConfig {
    pub fn with_construction(mut self, construction: NearestNeighbourConfig) -> Self {
        self.construction = construction;
        self
    }

    pub fn with_crossing(mut self, crossing: CrossingConfig) -> Self {
        self.crossing = crossing;
        self
    }

    pub fn with_exhaustive(mut self, exhaustive: ExhaustiveConfig) -> Self {
        self.exhaustive = exhaustive;
        self
    }

    pub fn with_exact(mut self, exact: ExactConfig) -> Self {
        self.exact = exact;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_names() {
        let names: Vec<String> = Strategy::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(
            names,
            vec!["nearest_neighbour", "two_opt", "two_opt_e", "brute_force"]
        );
    }

    #[test]
    fn test_default_config() {
        let config = SolveConfig::default();
        assert_eq!(config.exhaustive.max_passes, 5);
        assert_eq!(config.exact.max_cities, 10);
    }
}
