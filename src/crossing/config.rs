//! Crossing-detection 2-opt configuration.

use crate::construct::NearestNeighbourConfig;
use crate::geometry::OnSegmentRule;

/// Configuration for [`CrossingRunner`](super::CrossingRunner).
///
/// # Examples
///
/// ```
/// use u_tsp::crossing::CrossingConfig;
/// use u_tsp::geometry::OnSegmentRule;
///
/// let config = CrossingConfig::default().with_on_segment(OnSegmentRule::Reference);
/// assert_eq!(config.on_segment, OnSegmentRule::Reference);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrossingConfig {
    /// Containment predicate used for collinear overlaps.
    pub on_segment: OnSegmentRule,
    /// Settings for the starting nearest-neighbour tour.
    pub construction: NearestNeighbourConfig,
}

impl CrossingConfig {
    /// Sets the containment predicate.
    pub fn with_on_segment(mut self, rule: OnSegmentRule) -> Self {
        self.on_segment = rule;
        self
    }

    /// Sets the construction settings.
    pub fn with_construction(mut self, construction: NearestNeighbourConfig) -> Self {
        self.construction = construction;
        self
    }
}
