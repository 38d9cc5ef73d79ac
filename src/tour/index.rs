//! Tour with a maintained city → position map.

use std::collections::HashMap;

use super::types::Tour;
use crate::geometry::City;

/// A tour plus a map from each city to its current position.
///
/// The map is patched for the reversed span only after each swap, so a
/// reversal of `[i, j]` costs `O(j - i)` and lookups stay `O(1)`.
#[derive(Debug, Clone)]
pub struct IndexedTour {
    tour: Tour,
    positions: HashMap<City, usize>,
}

impl IndexedTour {
    pub fn new(tour: Tour) -> Self {
        let positions = tour
            .as_slice()
            .iter()
            .enumerate()
            .map(|(pos, &city)| (city, pos))
            .collect();
        Self { tour, positions }
    }

    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    pub fn into_tour(self) -> Tour {
        self.tour
    }

    pub fn position_of(&self, city: &City) -> Option<usize> {
        self.positions.get(city).copied()
    }

    /// Applies the 2-opt swap over `[i, j]`.
    ///
    /// Returns `false` (and logs a warning) when the range is rejected; the
    /// tour is then left as it was.
    pub fn swap(&mut self, i: usize, j: usize) -> bool {
        match self.tour.reverse_range(i, j) {
            Ok(()) => {
                for (pos, city) in self.tour.as_slice()[i..=j].iter().enumerate() {
                    self.positions.insert(*city, i + pos);
                }
                true
            }
            Err(err) => {
                log::warn!("two_opt_swap: cannot swap reversed nodes, indexes {i}, {j} ({err})");
                false
            }
        }
    }
}
