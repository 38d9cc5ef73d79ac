//! Crossing detection and the single swap sweep.
//!
//! # Algorithm
//!
//! 1. Build the starting tour (nearest neighbour)
//! 2. Scan every ordered pair of edges `(i, i+1)`, `(j, j+1)`, skipping
//!    pairs that share an endpoint or are the same edge
//! 3. Record intersecting pairs, dropping a pair whose first edge is the
//!    second edge of an already recorded pair
//! 4. For each recorded crossing, in order, look up the current positions
//!    of `first.to` and `second.from` and reverse the span between them

use std::collections::HashSet;

use super::config::CrossingConfig;
use super::types::Crossing;
use crate::construct::nearest_neighbour_with;
use crate::error::Result;
use crate::geometry::{segments_intersect_with, CitySet, OnSegmentRule};
use crate::tour::{Edge, IndexedTour, Tour};

/// Result of a crossing-detection 2-opt run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrossingResult {
    /// The tour after every recorded crossing has been processed once.
    pub tour: Tour,
    /// Cyclic length of `tour`.
    pub length: f64,
    /// Cyclic length of the starting tour.
    pub initial_length: f64,
    /// Crossings detected on the starting tour, in processing order.
    pub crossings: Vec<Crossing>,
    /// Swaps that reversed a range. Equals `crossings.len()` for a tour of
    /// distinct cities, since a crossing's swap endpoints never coincide.
    pub swaps_applied: usize,
}

/// Detects the crossings of `tour`.
///
/// Only the edges between adjacent positions are scanned; the closing edge
/// from the last city back to the first is not. Both orderings of an
/// intersecting pair are met during the scan and the later one is dropped
/// because its first edge matches the earlier one's second edge.
pub fn find_crossings(tour: &Tour, rule: OnSegmentRule) -> Vec<Crossing> {
    let cities = tour.as_slice();
    let n = cities.len();
    let mut crossings = Vec::new();
    if n < 2 {
        return crossings;
    }

    let mut recorded_seconds: HashSet<Edge> = HashSet::new();

    for i in 0..n - 1 {
        let first = Edge::new(cities[i], cities[i + 1]);
        for j in 0..n - 1 {
            let second = Edge::new(cities[j], cities[j + 1]);

            if cities[i + 1] == cities[j] || cities[i] == cities[j + 1] || first == second {
                continue;
            }
            if !segments_intersect_with(first.segment(), second.segment(), rule) {
                continue;
            }
            if recorded_seconds.contains(&first) {
                continue;
            }

            recorded_seconds.insert(second);
            crossings.push(Crossing::new(first, second));
        }
    }

    crossings
}

/// Crossing-detection 2-opt runner.
pub struct CrossingRunner;

impl CrossingRunner {
    /// Builds a nearest-neighbour tour over `cities` and improves it.
    ///
    /// Fails only if construction fails (empty set, bad start index).
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::crossing::{CrossingConfig, CrossingRunner};
    /// use u_tsp::geometry::CitySet;
    ///
    /// let cities = CitySet::from_coords(&[(0.0, 0.0), (5.0, 1.0), (9.0, 7.0)]).unwrap();
    /// let result = CrossingRunner::run(&cities, &CrossingConfig::default()).unwrap();
    /// assert!(result.crossings.is_empty());
    /// assert_eq!(result.tour.len(), 3);
    /// ```
    pub fn run(cities: &CitySet, config: &CrossingConfig) -> Result<CrossingResult> {
        let tour = nearest_neighbour_with(cities, &config.construction)?;
        Ok(Self::improve(tour, config))
    }

    /// Improves an explicit starting tour.
    pub fn improve(tour: Tour, config: &CrossingConfig) -> CrossingResult {
        let initial_length = tour.length();
        let crossings = find_crossings(&tour, config.on_segment);
        log::info!(
            "two_opt: intersections={} n={}",
            crossings.len(),
            tour.len()
        );

        let mut indexed = IndexedTour::new(tour);
        let mut swaps_applied = 0;

        for crossing in &crossings {
            // Both cities come from the tour being indexed.
            let (Some(b), Some(c)) = (
                indexed.position_of(&crossing.first.to),
                indexed.position_of(&crossing.second.from),
            ) else {
                continue;
            };
            let (min_index, max_index) = (b.min(c), b.max(c));
            log::debug!("two_opt: solving crossing min={min_index} max={max_index}");

            if indexed.swap(min_index, max_index) {
                swaps_applied += 1;
            }
        }

        let tour = indexed.into_tour();
        let length = tour.length();
        log::debug!("two_opt: done applied={swaps_applied} length={length:.3}");

        CrossingResult {
            tour,
            length,
            initial_length,
            crossings,
            swaps_applied,
        }
    }
}
