//! Distance, orientation and segment intersection.

use super::config::OnSegmentRule;
use super::types::{City, Orientation, Segment};

/// Euclidean distance between two cities.
pub fn distance(a: City, b: City) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Classifies the turn `a -> b -> c`.
///
/// Uses the sign of `(b.y - a.y) * (c.x - b.x) - (b.x - a.x) * (c.y - b.y)`:
/// zero is collinear, negative counter-clockwise, positive clockwise.
///
/// # Examples
///
/// ```
/// use u_tsp::geometry::{orientation, City, Orientation};
///
/// let a = City::new(0.0, 0.0);
/// let b = City::new(1.0, 0.0);
/// assert_eq!(orientation(a, b, City::new(1.0, 1.0)), Orientation::CounterClockwise);
/// assert_eq!(orientation(a, b, City::new(1.0, -1.0)), Orientation::Clockwise);
/// assert_eq!(orientation(a, b, City::new(2.0, 0.0)), Orientation::Collinear);
/// ```
pub fn orientation(a: City, b: City, c: City) -> Orientation {
    let val = (b.y - a.y) * (c.x - b.x) - (b.x - a.x) * (c.y - b.y);
    if val == 0.0 {
        Orientation::Collinear
    } else if val < 0.0 {
        Orientation::CounterClockwise
    } else {
        Orientation::Clockwise
    }
}

/// Whether `point` lies on `segment`, using [`OnSegmentRule::BoundingBox`].
pub fn on_segment(segment: Segment, point: City) -> bool {
    on_segment_with(segment, point, OnSegmentRule::BoundingBox)
}

/// Whether `point` is collinear with `segment` and passes the extent check
/// selected by `rule`.
pub fn on_segment_with(segment: Segment, point: City, rule: OnSegmentRule) -> bool {
    orientation(segment.start, segment.end, point) == Orientation::Collinear
        && within_extent(segment, point, rule)
}

// Collinearity is the caller's responsibility here.
fn within_extent(segment: Segment, point: City, rule: OnSegmentRule) -> bool {
    let (s, e) = (segment.start, segment.end);
    let (min_x, max_x) = (s.x.min(e.x), s.x.max(e.x));
    let (min_y, max_y) = (s.y.min(e.y), s.y.max(e.y));
    match rule {
        OnSegmentRule::BoundingBox => {
            min_x <= point.x && point.x <= max_x && min_y <= point.y && point.y <= max_y
        }
        OnSegmentRule::Reference => {
            point.x <= max_x && point.x <= min_x && point.y <= max_y && point.y <= min_y
        }
    }
}

/// Whether two segments intersect, using [`OnSegmentRule::BoundingBox`].
pub fn segments_intersect(first: Segment, second: Segment) -> bool {
    segments_intersect_with(first, second, OnSegmentRule::BoundingBox)
}

/// Orientation-based segment intersection test.
///
/// The general case requires the endpoints of each segment to straddle the
/// other (`o1 != o2 && o3 != o4`). Otherwise a zero orientation combined
/// with a positive containment check (per `rule`) counts as an
/// intersection. The result is symmetric in its two segments.
pub fn segments_intersect_with(first: Segment, second: Segment, rule: OnSegmentRule) -> bool {
    let o1 = orientation(first.start, first.end, second.start);
    let o2 = orientation(first.start, first.end, second.end);
    let o3 = orientation(second.start, second.end, first.start);
    let o4 = orientation(second.start, second.end, first.end);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    let collinear = Orientation::Collinear;
    (o1 == collinear && within_extent(first, second.start, rule))
        || (o2 == collinear && within_extent(first, second.end, rule))
        || (o3 == collinear && within_extent(second, first.start, rule))
        || (o4 == collinear && within_extent(second, first.end, rule))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn c(x: f64, y: f64) -> City {
        City::new(x, y)
    }

    fn seg(a: (f64, f64), b: (f64, f64)) -> Segment {
        Segment::new(c(a.0, a.1), c(b.0, b.1))
    }

    #[test]
    fn test_distance_pythagorean() {
        assert!((distance(c(0.0, 0.0), c(3.0, 4.0)) - 5.0).abs() < 1e-12);
        assert!((distance(c(-1.0, -1.0), c(-1.0, -1.0))).abs() < 1e-12);
    }

    #[test]
    fn test_orientation_collinear() {
        assert_eq!(
            orientation(c(0.0, 0.0), c(1.0, 1.0), c(2.0, 2.0)),
            Orientation::Collinear
        );
        // c between a and b still counts as collinear
        assert_eq!(
            orientation(c(0.0, 0.0), c(4.0, 0.0), c(2.0, 0.0)),
            Orientation::Collinear
        );
    }

    #[test]
    fn test_diagonals_of_square_intersect() {
        let d1 = seg((0.0, 0.0), (10.0, 10.0));
        let d2 = seg((0.0, 10.0), (10.0, 0.0));
        assert!(segments_intersect(d1, d2));
        assert!(segments_intersect_with(d1, d2, OnSegmentRule::Reference));
    }

    #[test]
    fn test_parallel_segments_do_not_intersect() {
        let s1 = seg((0.0, 0.0), (10.0, 0.0));
        let s2 = seg((0.0, 5.0), (10.0, 5.0));
        assert!(!segments_intersect(s1, s2));
    }

    #[test]
    fn test_disjoint_segments_do_not_intersect() {
        let s1 = seg((0.0, 0.0), (1.0, 1.0));
        let s2 = seg((5.0, 0.0), (6.0, -1.0));
        assert!(!segments_intersect(s1, s2));
    }

    #[test]
    fn test_t_junction_intersects() {
        let s1 = seg((0.0, 0.0), (10.0, 0.0));
        let s2 = seg((5.0, 0.0), (5.0, 5.0));
        assert!(segments_intersect(s1, s2));
    }

    #[test]
    fn test_on_segment_bounding_box() {
        let s = seg((0.0, 10.0), (10.0, 0.0));
        assert!(on_segment(s, c(5.0, 5.0)));
        assert!(on_segment(s, c(0.0, 10.0)));
        assert!(!on_segment(s, c(15.0, -5.0)));
        // inside the box but off the line
        assert!(!on_segment(s, c(2.0, 2.0)));
    }

    #[test]
    fn test_on_segment_reference_predicate() {
        let s = seg((0.0, 10.0), (10.0, 0.0));
        // the midpoint is rejected by the historical predicate
        assert!(!on_segment_with(s, c(5.0, 5.0), OnSegmentRule::Reference));

        let s = seg((5.0, 5.0), (6.0, 6.0));
        // a collinear point beyond the lower corner is accepted
        assert!(on_segment_with(s, c(0.0, 0.0), OnSegmentRule::Reference));
        assert!(!on_segment(s, c(0.0, 0.0)));
    }

    #[test]
    fn test_collinear_overlap_depends_on_rule() {
        // negative slope: no endpoint lies below-left of the other segment
        let s1 = seg((0.0, 10.0), (10.0, 0.0));
        let s2 = seg((5.0, 5.0), (15.0, -5.0));
        assert!(segments_intersect(s1, s2));
        assert!(!segments_intersect_with(s1, s2, OnSegmentRule::Reference));
    }

    #[test]
    fn test_collinear_disjoint_depends_on_rule() {
        let s1 = seg((0.0, 0.0), (1.0, 1.0));
        let s2 = seg((5.0, 5.0), (6.0, 6.0));
        assert!(!segments_intersect(s1, s2));
        assert!(segments_intersect_with(s1, s2, OnSegmentRule::Reference));
    }

    fn point() -> impl Strategy<Value = City> {
        (-1000i32..1000, -1000i32..1000).prop_map(|(x, y)| City::new(x as f64, y as f64))
    }

    fn rule() -> impl Strategy<Value = OnSegmentRule> {
        prop_oneof![Just(OnSegmentRule::BoundingBox), Just(OnSegmentRule::Reference)]
    }

    proptest! {
        #[test]
        fn prop_orientation_flips_on_pairwise_swap(a in point(), b in point(), c in point()) {
            let o = orientation(a, b, c);
            prop_assert_eq!(orientation(b, a, c), o.reversed());
            prop_assert_eq!(orientation(a, c, b), o.reversed());
            prop_assert_eq!(orientation(c, b, a), o.reversed());
        }

        #[test]
        fn prop_orientation_collinear_on_a_line(
            a in point(),
            dx in -20i32..20,
            dy in -20i32..20,
            t1 in -20i32..20,
            t2 in -20i32..20
        ) {
            let b = City::new(a.x + (t1 * dx) as f64, a.y + (t1 * dy) as f64);
            let c = City::new(a.x + (t2 * dx) as f64, a.y + (t2 * dy) as f64);
            prop_assert_eq!(orientation(a, b, c), Orientation::Collinear);
        }

        #[test]
        fn prop_orientation_off_the_line_is_not_collinear(
            a in point(),
            dx in -20i32..20,
            dy in -20i32..20
        ) {
            prop_assume!(dx != 0 || dy != 0);
            let b = City::new(a.x + dx as f64, a.y + dy as f64);
            // step perpendicular to a -> b
            let c = City::new(b.x - dy as f64, b.y + dx as f64);
            prop_assert_ne!(orientation(a, b, c), Orientation::Collinear);
        }

        #[test]
        fn prop_segments_intersect_symmetric(
            p1 in point(), p2 in point(), p3 in point(), p4 in point(), rule in rule()
        ) {
            let s1 = Segment::new(p1, p2);
            let s2 = Segment::new(p3, p4);
            prop_assert_eq!(
                segments_intersect_with(s1, s2, rule),
                segments_intersect_with(s2, s1, rule)
            );
        }
    }
}
