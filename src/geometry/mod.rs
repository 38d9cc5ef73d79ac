//! Planar geometry primitives.
//!
//! Cities are points in the plane; every intersection decision in the
//! crate is built from the three-point [`orientation`] test.
//!
//! # Key Types
//!
//! - [`City`]: an immutable point compared by value
//! - [`CitySet`]: a deduplicated, lexicographically ordered set of cities
//! - [`Segment`]: the straight line between two cities
//! - [`Orientation`]: sign of the cross product of three points
//! - [`OnSegmentRule`]: which containment predicate collinear overlap uses
//!
//! # References
//!
//! Cormen, Leiserson, Rivest & Stein (2009), *Introduction to Algorithms*,
//! §33.1 "Line-segment properties".

mod config;
mod primitives;
mod types;

pub use config::OnSegmentRule;
pub use primitives::{
    distance, on_segment, on_segment_with, orientation, segments_intersect,
    segments_intersect_with,
};
pub use types::{City, CitySet, Orientation, Segment};
