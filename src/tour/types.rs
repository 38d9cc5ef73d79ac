//! Tour and edge types.

use std::ops::Index;

use crate::error::{Error, Result};
use crate::geometry::{distance, City, CitySet, Segment};

/// A directed adjacency between two consecutive cities of a tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub from: City,
    pub to: City,
}

impl Edge {
    pub const fn new(from: City, to: City) -> Self {
        Self { from, to }
    }

    pub fn segment(&self) -> Segment {
        Segment::new(self.from, self.to)
    }

    pub fn length(&self) -> f64 {
        distance(self.from, self.to)
    }

    /// Whether the two edges have a city in common.
    pub fn shares_endpoint(&self, other: &Edge) -> bool {
        self.from == other.from
            || self.from == other.to
            || self.to == other.from
            || self.to == other.to
    }
}

/// An ordered sequence of cities interpreted as a closed cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    cities: Vec<City>,
}

impl Tour {
    pub fn new(cities: Vec<City>) -> Self {
        Self { cities }
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn as_slice(&self) -> &[City] {
        &self.cities
    }

    pub fn into_cities(self) -> Vec<City> {
        self.cities
    }

    pub fn get(&self, position: usize) -> Option<City> {
        self.cities.get(position).copied()
    }

    /// Total cyclic length, closing edge included.
    pub fn length(&self) -> f64 {
        super::tour_length(&self.cities)
    }

    /// The edge leaving `position`, if `position + 1` is in range.
    ///
    /// The closing edge is not reachable through this accessor.
    pub fn edge(&self, position: usize) -> Option<Edge> {
        match (self.cities.get(position), self.cities.get(position + 1)) {
            (Some(&from), Some(&to)) => Some(Edge::new(from, to)),
            _ => None,
        }
    }

    /// Edges between adjacent positions, without the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.cities.windows(2).map(|w| Edge::new(w[0], w[1]))
    }

    /// All edges of the cycle, closing edge last.
    pub fn closed_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let closing = match (self.cities.last(), self.cities.first()) {
            (Some(&last), Some(&first)) if self.cities.len() > 1 => Some(Edge::new(last, first)),
            _ => None,
        };
        self.edges().chain(closing)
    }

    /// Linear search for a city's position.
    pub fn position_of(&self, city: &City) -> Option<usize> {
        self.cities.iter().position(|c| c == city)
    }

    /// Reverses the inclusive sub-range `[i, j]` in place.
    ///
    /// Requires `i < j < len`; anything else is rejected with
    /// [`Error::InvalidSwapRange`] and leaves the tour untouched.
    pub fn reverse_range(&mut self, i: usize, j: usize) -> Result<()> {
        let len = self.cities.len();
        if i >= j || j >= len {
            return Err(Error::InvalidSwapRange { i, j, len });
        }
        self.cities[i..=j].reverse();
        Ok(())
    }

    /// Whether this tour visits every city of `cities` exactly once.
    pub fn is_permutation_of(&self, cities: &CitySet) -> bool {
        if self.cities.len() != cities.len() {
            return false;
        }
        let mut sorted = self.cities.clone();
        sorted.sort_unstable();
        sorted.as_slice() == cities.as_slice()
    }
}

impl From<Vec<City>> for Tour {
    fn from(cities: Vec<City>) -> Self {
        Self::new(cities)
    }
}

impl Index<usize> for Tour {
    type Output = City;

    fn index(&self, position: usize) -> &City {
        &self.cities[position]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Tour {
        Tour::new(vec![
            City::new(0.0, 0.0),
            City::new(0.0, 10.0),
            City::new(10.0, 10.0),
            City::new(10.0, 0.0),
        ])
    }

    #[test]
    fn test_edges_exclude_closing_edge() {
        let tour = square();
        let edges: Vec<Edge> = tour.edges().collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[0], Edge::new(tour[0], tour[1]));
        assert_eq!(edges[2], Edge::new(tour[2], tour[3]));
    }

    #[test]
    fn test_closed_edges_include_closing_edge() {
        let tour = square();
        let edges: Vec<Edge> = tour.closed_edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3], Edge::new(tour[3], tour[0]));

        let single = Tour::new(vec![City::new(1.0, 1.0)]);
        assert_eq!(single.closed_edges().count(), 0);
    }

    #[test]
    fn test_edge_accessor_bounds() {
        let tour = square();
        assert!(tour.edge(2).is_some());
        assert!(tour.edge(3).is_none());
    }

    #[test]
    fn test_shares_endpoint() {
        let tour = square();
        let e0 = tour.edge(0).unwrap();
        let e1 = tour.edge(1).unwrap();
        let e2 = tour.edge(2).unwrap();
        assert!(e0.shares_endpoint(&e1));
        assert!(!e0.shares_endpoint(&e2));
    }

    #[test]
    fn test_reverse_range_rejects_bad_ranges() {
        let mut tour = square();
        let before = tour.clone();
        assert_eq!(
            tour.reverse_range(2, 2),
            Err(Error::InvalidSwapRange { i: 2, j: 2, len: 4 })
        );
        assert!(tour.reverse_range(3, 1).is_err());
        assert!(tour.reverse_range(1, 4).is_err());
        assert_eq!(tour, before);
    }

    #[test]
    fn test_is_permutation_of() {
        let tour = square();
        let set = CitySet::new(tour.as_slice().iter().copied()).unwrap();
        assert!(tour.is_permutation_of(&set));

        let short = Tour::new(tour.as_slice()[..3].to_vec());
        assert!(!short.is_permutation_of(&set));

        let mut dup = tour.clone().into_cities();
        dup[3] = dup[0];
        assert!(!Tour::new(dup).is_permutation_of(&set));
    }

    #[test]
    fn test_position_of() {
        let tour = square();
        assert_eq!(tour.position_of(&City::new(10.0, 10.0)), Some(2));
        assert_eq!(tour.position_of(&City::new(5.0, 5.0)), None);
    }
}
