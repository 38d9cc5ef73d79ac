//! Containment predicate selection.

/// Predicate used to decide whether a point collinear with a segment lies
/// on that segment.
///
/// The choice changes which collinear overlaps count as intersections and
/// therefore which crossings the crossing-detection 2-opt finds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OnSegmentRule {
    /// Standard bounding-box containment:
    /// `min(x1, x2) <= x <= max(x1, x2)` and the same for `y`.
    #[default]
    BoundingBox,

    /// The historical predicate, reproduced for behavioural parity:
    /// `x <= max(x1, x2) && x <= min(x1, x2) && y <= max(y1, y2) && y <= min(y1, y2)`.
    ///
    /// Only points at or below-left of the segment's lower corner pass, so
    /// most genuine collinear overlaps are missed.
    Reference,
}
