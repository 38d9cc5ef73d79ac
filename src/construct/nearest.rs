//! Greedy nearest-neighbour tour builder.

use super::config::{NearestNeighbourConfig, StartCity};
use crate::error::{Error, Result};
use crate::geometry::{distance, City, CitySet};
use crate::tour::Tour;

/// Builds a nearest-neighbour tour from the smallest city.
///
/// Fails with [`Error::InvalidInput`] on an empty city set.
pub fn nearest_neighbour(cities: &CitySet) -> Result<Tour> {
    nearest_neighbour_with(cities, &NearestNeighbourConfig::default())
}

/// Builds a nearest-neighbour tour with an explicit start rule.
///
/// Ties between equidistant candidates go to the one encountered first in
/// the set's lexicographic order.
///
/// # Examples
///
/// ```
/// use u_tsp::construct::nearest_neighbour;
/// use u_tsp::geometry::CitySet;
///
/// let cities = CitySet::from_coords(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]).unwrap();
/// let tour = nearest_neighbour(&cities).unwrap();
/// assert!((tour.length() - 40.0).abs() < 1e-9);
/// ```
pub fn nearest_neighbour_with(cities: &CitySet, config: &NearestNeighbourConfig) -> Result<Tour> {
    let n = cities.len();
    if n == 0 {
        return Err(Error::invalid_input(
            "cannot build a tour from an empty city set",
        ));
    }

    let start = match config.start {
        StartCity::Smallest => 0,
        StartCity::Index(k) if k < n => k,
        StartCity::Index(k) => {
            return Err(Error::invalid_input(format!(
                "start index {k} out of range for {n} cities"
            )))
        }
    };

    log::debug!("nearest_neighbour: start n={n} start={start}");

    // `remove` keeps the pool sorted so tie-breaking stays deterministic.
    let mut remaining: Vec<City> = cities.as_slice().to_vec();
    let mut last = remaining.remove(start);
    let mut tour = Vec::with_capacity(n);
    tour.push(last);

    while !remaining.is_empty() {
        let mut closest = 0;
        let mut closest_distance = f64::INFINITY;
        for (k, &city) in remaining.iter().enumerate() {
            let d = distance(last, city);
            if d < closest_distance {
                closest = k;
                closest_distance = d;
            }
        }
        last = remaining.remove(closest);
        tour.push(last);
    }

    let tour = Tour::new(tour);
    log::debug!("nearest_neighbour: done n={n} length={:.3}", tour.length());
    Ok(tour)
}
