//! Timed strategy execution.

use std::time::{Duration, Instant};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::config::{SolveConfig, Strategy};
use crate::construct::nearest_neighbour_with;
use crate::crossing::CrossingRunner;
use crate::error::Result;
use crate::exact::brute_force;
use crate::exhaustive::ExhaustiveRunner;
use crate::geometry::CitySet;
use crate::tour::Tour;

/// Outcome of one strategy run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Strategy that produced the tour.
    pub strategy: Strategy,
    /// The tour.
    pub tour: Tour,
    /// Cyclic length of the tour.
    pub length: f64,
    /// Wall-clock time spent in the strategy.
    pub elapsed: Duration,
}

/// Runs `strategy` with default settings.
pub fn solve(cities: &CitySet, strategy: Strategy) -> Result<Solution> {
    solve_with(cities, strategy, &SolveConfig::default())
}

/// Runs `strategy` with explicit settings.
///
/// # Examples
///
/// ```
/// use u_tsp::geometry::CitySet;
/// use u_tsp::solve::{solve_with, SolveConfig, Strategy};
///
/// let cities = CitySet::from_coords(&[(0.0, 0.0), (10.0, 10.0), (0.0, 10.0), (10.0, 0.0)]).unwrap();
/// let solution = solve_with(&cities, Strategy::TwoOptExhaustive, &SolveConfig::default()).unwrap();
/// assert_eq!(solution.strategy, Strategy::TwoOptExhaustive);
/// assert!((solution.length - 40.0).abs() < 1e-9);
/// ```
pub fn solve_with(cities: &CitySet, strategy: Strategy, config: &SolveConfig) -> Result<Solution> {
    let started = Instant::now();
    let tour = match strategy {
        Strategy::NearestNeighbour => nearest_neighbour_with(cities, &config.construction)?,
        Strategy::TwoOpt => CrossingRunner::run(cities, &config.crossing)?.tour,
        Strategy::TwoOptExhaustive => ExhaustiveRunner::run(cities, &config.exhaustive)?.tour,
        Strategy::BruteForce => brute_force(cities, &config.exact)?,
    };
    let elapsed = started.elapsed();
    let length = tour.length();

    log::info!(
        "{} city tour with length {:.1} in {:.3} secs for {}",
        tour.len(),
        length,
        elapsed.as_secs_f64(),
        strategy
    );

    Ok(Solution {
        strategy,
        tour,
        length,
        elapsed,
    })
}

/// Runs every strategy in `strategies` over the same city set.
///
/// Results come back in the order of `strategies`. The first failure is
/// returned as the error.
pub fn solve_all(
    cities: &CitySet,
    strategies: &[Strategy],
    config: &SolveConfig,
) -> Result<Vec<Solution>> {
    #[cfg(feature = "parallel")]
    let solutions: Result<Vec<Solution>> = strategies
        .par_iter()
        .map(|&strategy| solve_with(cities, strategy, config))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let solutions: Result<Vec<Solution>> = strategies
        .iter()
        .map(|&strategy| solve_with(cities, strategy, config))
        .collect();

    solutions
}
