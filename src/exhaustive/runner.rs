//! Exhaustive 2-opt pass loop.
//!
//! # Algorithm
//!
//! 1. Build the starting tour (nearest neighbour)
//! 2. For every `i` and every `j` keeping `i + j + 2` in range, compare
//!    edges `(t[i], t[i+1])`, `(t[i+j+1], t[i+j+2])` with
//!    `(t[i], t[i+j+1])`, `(t[i+1], t[i+j+2])`
//! 3. If the replacement is strictly shorter, reverse `[i+1, i+j+1]` at once
//! 4. Stop after a pass without swaps or after `max_passes` passes
//!
//! Cities are unique, so the position of `t[i+1]` is always `i + 1`; no
//! value lookups are needed.

use super::config::ExhaustiveConfig;
use crate::construct::nearest_neighbour_with;
use crate::error::{Error, Result};
use crate::geometry::{distance, CitySet};
use crate::tour::{two_opt_swap, Tour};

/// Result of an exhaustive 2-opt run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExhaustiveResult {
    /// The improved tour.
    pub tour: Tour,
    /// Cyclic length of `tour`.
    pub length: f64,
    /// Cyclic length of the starting tour.
    pub initial_length: f64,
    /// Number of passes executed, including a final pass without swaps.
    pub passes: usize,
    /// Total number of swaps applied.
    pub swaps: usize,
    /// Whether the last pass made no swap (as opposed to hitting the cap).
    pub converged: bool,
    /// Tour length before the first pass and after each pass.
    pub length_history: Vec<f64>,
}

/// Exhaustive 2-opt runner.
pub struct ExhaustiveRunner;

impl ExhaustiveRunner {
    /// Builds a nearest-neighbour tour over `cities` and improves it.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::exhaustive::{ExhaustiveConfig, ExhaustiveRunner};
    /// use u_tsp::geometry::CitySet;
    ///
    /// let cities = CitySet::from_coords(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]).unwrap();
    /// let result = ExhaustiveRunner::run(&cities, &ExhaustiveConfig::default()).unwrap();
    /// assert!((result.length - 40.0).abs() < 1e-9);
    /// assert!(result.converged);
    /// ```
    pub fn run(cities: &CitySet, config: &ExhaustiveConfig) -> Result<ExhaustiveResult> {
        config.validate().map_err(Error::InvalidConfig)?;
        let tour = nearest_neighbour_with(cities, &config.construction)?;
        Self::improve(tour, config)
    }

    /// Improves an explicit starting tour.
    pub fn improve(tour: Tour, config: &ExhaustiveConfig) -> Result<ExhaustiveResult> {
        config.validate().map_err(Error::InvalidConfig)?;

        let n = tour.len();
        let initial_length = tour.length();
        let mut tour = tour;
        let mut passes = 0;
        let mut swaps = 0;
        let mut converged = false;
        let mut length_history = vec![initial_length];

        loop {
            let mut pass_swaps = 0;

            for i in 0..n.saturating_sub(1) {
                for j in 0..(n - i - 2) {
                    let (a, b) = (tour[i], tour[i + 1]);
                    let (c, d) = (tour[i + j + 1], tour[i + j + 2]);

                    let old_length = distance(a, b) + distance(c, d);
                    let new_length = distance(a, c) + distance(b, d);
                    if new_length < old_length {
                        tour = two_opt_swap(tour, i + 1, i + j + 1);
                        pass_swaps += 1;
                    }
                }
            }

            passes += 1;
            swaps += pass_swaps;
            length_history.push(tour.length());
            log::debug!(
                "two_opt_e: pass={passes} swaps={pass_swaps} length={:.3}",
                tour.length()
            );

            if pass_swaps == 0 {
                converged = true;
                break;
            }
            if passes >= config.max_passes {
                break;
            }
        }

        let length = tour.length();
        log::info!(
            "two_opt_e: n={n} passes={passes} swaps={swaps} converged={converged} length={length:.3}"
        );

        Ok(ExhaustiveResult {
            tour,
            length,
            initial_length,
            passes,
            swaps,
            converged,
            length_history,
        })
    }
}
