//! Tour construction.
//!
//! The nearest-neighbour heuristic starts from one city and keeps
//! extending the tour to the closest city not yet visited. It runs in
//! O(n²) and produces the starting tour for both 2-opt strategies.
//!
//! # References
//!
//! - Rosenkrantz, Stearns & Lewis (1977), "An Analysis of Several Heuristics
//!   for the Traveling Salesman Problem", *SIAM J. Computing* 6(3), 563-581.

mod config;
mod nearest;

pub use config::{NearestNeighbourConfig, StartCity};
pub use nearest::{nearest_neighbour, nearest_neighbour_with};
