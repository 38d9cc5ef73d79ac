//! Euclidean travelling-salesman heuristics.
//!
//! Given a set of cities in the plane, builds a closed tour visiting each
//! city once and shortens it with local search:
//!
//! - **Nearest neighbour** ([`construct`]): greedy O(n²) construction that
//!   always extends the tour to the closest unvisited city.
//! - **Crossing-detection 2-opt** ([`crossing`]): finds intersecting edge
//!   pairs on the starting tour and applies one reversal per crossing.
//! - **Exhaustive 2-opt** ([`exhaustive`]): compares every pair of edges and
//!   reverses whenever that strictly shortens the tour, for a bounded number
//!   of passes.
//!
//! Both improvement strategies start from the nearest-neighbour tour and
//! are independent of each other. Supporting modules provide the geometry
//! ([`geometry`]), the tour type and 2-opt move ([`tour`]), seeded instance
//! generation ([`generate`]), an exact reference solver ([`exact`]), and a
//! timed strategy facade ([`solve`]).
//!
//! # Quick start
//!
//! ```
//! use u_tsp::geometry::CitySet;
//!
//! let cities = CitySet::from_coords(&[(0.0, 0.0), (10.0, 10.0), (0.0, 10.0), (10.0, 0.0)]).unwrap();
//! let tour = u_tsp::two_opt_e(&cities).unwrap();
//! assert!((u_tsp::tour_length(tour.as_slice()) - 40.0).abs() < 1e-9);
//! ```
//!
//! All routines are synchronous and single-threaded. A [`geometry::CitySet`]
//! is immutable and may be shared between concurrent runs.

pub mod construct;
pub mod crossing;
pub mod error;
pub mod exact;
pub mod exhaustive;
pub mod generate;
pub mod geometry;
pub mod solve;
pub mod tour;

pub use construct::nearest_neighbour;
pub use error::{Error, Result};
pub use tour::{tour_length, Tour};

use crossing::{CrossingConfig, CrossingRunner};
use exhaustive::{ExhaustiveConfig, ExhaustiveRunner};
use geometry::CitySet;

/// Nearest-neighbour tour improved by crossing-detection 2-opt.
///
/// Uses [`CrossingConfig::default`]. Fails with [`Error::InvalidInput`] on
/// an empty city set.
pub fn two_opt(cities: &CitySet) -> Result<Tour> {
    Ok(CrossingRunner::run(cities, &CrossingConfig::default())?.tour)
}

/// Nearest-neighbour tour improved by exhaustive 2-opt (at most 5 passes).
///
/// Fails with [`Error::InvalidInput`] on an empty city set.
pub fn two_opt_e(cities: &CitySet) -> Result<Tour> {
    Ok(ExhaustiveRunner::run(cities, &ExhaustiveConfig::default())?.tour)
}
