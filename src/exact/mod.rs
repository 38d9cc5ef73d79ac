//! Exact solver by exhaustive enumeration.
//!
//! Fixes the smallest city as the start and evaluates every ordering of the
//! rest, so the cost grows as `(n - 1)!`. Only useful for tiny instances,
//! mainly as an optimality reference for the heuristics.

mod config;

pub use config::ExactConfig;

use crate::error::{Error, Result};
use crate::geometry::{City, CitySet};
use crate::tour::{tour_length, Tour};

/// Returns a shortest tour over `cities`.
///
/// Fails with [`Error::InvalidInput`] for an empty set or one larger than
/// `config.max_cities`.
///
/// # Examples
///
/// ```
/// use u_tsp::exact::{brute_force, ExactConfig};
/// use u_tsp::geometry::CitySet;
///
/// let cities = CitySet::from_coords(&[(0.0, 0.0), (10.0, 10.0), (0.0, 10.0), (10.0, 0.0)]).unwrap();
/// let tour = brute_force(&cities, &ExactConfig::default()).unwrap();
/// assert!((tour.length() - 40.0).abs() < 1e-9);
/// ```
pub fn brute_force(cities: &CitySet, config: &ExactConfig) -> Result<Tour> {
    let n = cities.len();
    if n == 0 {
        return Err(Error::invalid_input(
            "cannot build a tour from an empty city set",
        ));
    }
    if n > config.max_cities {
        return Err(Error::invalid_input(format!(
            "brute force is limited to {} cities, got {n}",
            config.max_cities
        )));
    }

    let all = cities.as_slice();
    let mut rest: Vec<City> = all[1..].to_vec();
    let mut scratch: Vec<City> = all.to_vec();

    let mut best = scratch.clone();
    let mut best_length = tour_length(&best);

    // Heap's algorithm over everything after the fixed start.
    let m = rest.len();
    let mut counters = vec![0usize; m];
    let mut k = 1;
    while k < m {
        if counters[k] < k {
            if k % 2 == 0 {
                rest.swap(0, k);
            } else {
                rest.swap(counters[k], k);
            }
            scratch[1..].copy_from_slice(&rest);
            let length = tour_length(&scratch);
            if length < best_length {
                best_length = length;
                best.copy_from_slice(&scratch);
            }
            counters[k] += 1;
            k = 1;
        } else {
            counters[k] = 0;
            k += 1;
        }
    }

    log::debug!("brute_force: n={n} length={best_length:.3}");
    Ok(Tour::new(best))
}
