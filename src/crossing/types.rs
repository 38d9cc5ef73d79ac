//! Crossing type.

use crate::tour::Edge;

/// Two tour edges, sharing no endpoint, whose segments intersect.
///
/// `first` is the edge found at the lower scan position of the outer loop;
/// the swap that resolves the crossing spans from `first.to` to
/// `second.from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Crossing {
    pub first: Edge,
    pub second: Edge,
}

impl Crossing {
    pub const fn new(first: Edge, second: Edge) -> Self {
        Self { first, second }
    }
}
