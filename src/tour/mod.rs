//! Tour representation and the 2-opt move.
//!
//! A [`Tour`] is an ordered permutation of a city set read as a cycle: the
//! edge from the last city back to the first is implicit. Improvement
//! routines only ever reorder a tour by reversing contiguous sub-ranges
//! ([`two_opt_swap`]); cities are never inserted or removed.
//!
//! [`IndexedTour`] pairs a tour with a city → position map that is patched
//! after each reversal, so value lookups stay O(1).

mod index;
mod ops;
mod types;

pub use index::IndexedTour;
pub use ops::{tour_length, two_opt_swap};
pub use types::{Edge, Tour};
