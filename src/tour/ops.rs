//! Tour length and the 2-opt swap.

use super::types::Tour;
use crate::geometry::{distance, City};

/// Cyclic length of a tour.
///
/// Sums `distance(tour[i], tour[i - 1])` over every position, with `i - 1`
/// wrapping to the last city, so the closing edge is included without a
/// special case. A single city yields `0.0`, as does an empty slice.
pub fn tour_length(tour: &[City]) -> f64 {
    let n = tour.len();
    (0..n)
        .map(|i| distance(tour[i], tour[(i + n - 1) % n]))
        .sum()
}

/// Reverses the inclusive sub-range `[i, j]` of `tour`.
///
/// This removes edges `(tour[i-1], tour[i])` and `(tour[j], tour[j+1])` and
/// replaces them with `(tour[i-1], tour[j])` and `(tour[i], tour[j+1])`.
/// When `i >= j` (or `j` is out of range) the tour is returned unchanged and
/// a warning is logged.
///
/// # Examples
///
/// ```
/// use u_tsp::geometry::City;
/// use u_tsp::tour::{two_opt_swap, Tour};
///
/// let [a, b, c, d, e] = [0.0, 1.0, 2.0, 3.0, 4.0].map(|x| City::new(x, 0.0));
/// let swapped = two_opt_swap(Tour::new(vec![a, b, c, d, e]), 1, 3);
/// assert_eq!(swapped.as_slice(), &[a, d, c, b, e]);
/// ```
pub fn two_opt_swap(mut tour: Tour, i: usize, j: usize) -> Tour {
    if let Err(err) = tour.reverse_range(i, j) {
        log::warn!("two_opt_swap: cannot swap reversed nodes, indexes {i}, {j} ({err})");
    }
    tour
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn line(n: usize) -> Vec<City> {
        (0..n).map(|k| City::new(k as f64, 0.0)).collect()
    }

    #[test]
    fn test_tour_length_square() {
        let tour = [
            City::new(0.0, 0.0),
            City::new(0.0, 10.0),
            City::new(10.0, 10.0),
            City::new(10.0, 0.0),
        ];
        assert!((tour_length(&tour) - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_tour_length_crossed_square() {
        let tour = [
            City::new(0.0, 0.0),
            City::new(10.0, 10.0),
            City::new(0.0, 10.0),
            City::new(10.0, 0.0),
        ];
        let expected = 20.0 + 20.0 * 2f64.sqrt();
        assert!((tour_length(&tour) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_tour_length_degenerate() {
        assert_eq!(tour_length(&[]), 0.0);
        assert_eq!(tour_length(&[City::new(3.0, 4.0)]), 0.0);
        // two cities: there and back
        assert!((tour_length(&[City::new(0.0, 0.0), City::new(3.0, 4.0)]) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_two_opt_swap_middle() {
        let cities = line(5);
        let swapped = two_opt_swap(Tour::new(cities.clone()), 1, 3);
        assert_eq!(
            swapped.as_slice(),
            &[cities[0], cities[3], cities[2], cities[1], cities[4]]
        );
    }

    #[test]
    fn test_two_opt_swap_whole_tour() {
        let cities = line(4);
        let swapped = two_opt_swap(Tour::new(cities.clone()), 0, 3);
        let mut reversed = cities;
        reversed.reverse();
        assert_eq!(swapped.as_slice(), reversed.as_slice());
    }

    #[test]
    fn test_two_opt_swap_invalid_is_noop() {
        let tour = Tour::new(line(5));
        assert_eq!(two_opt_swap(tour.clone(), 2, 2), tour);
        assert_eq!(two_opt_swap(tour.clone(), 3, 1), tour);
        assert_eq!(two_opt_swap(tour.clone(), 1, 9), tour);
    }

    fn cities(max: usize) -> impl Strategy<Value = Vec<City>> {
        prop::collection::hash_set((-500i32..500, -500i32..500), 1..max).prop_map(|set| {
            set.into_iter()
                .map(|(x, y)| City::new(x as f64, y as f64))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_length_invariant_under_rotation(tour in cities(30), k in 0usize..30) {
            let mut rotated = tour.clone();
            let shift = k % rotated.len();
            rotated.rotate_left(shift);
            let (a, b) = (tour_length(&tour), tour_length(&rotated));
            prop_assert!((a - b).abs() <= 1e-9 * a.max(1.0), "{} vs {}", a, b);
        }

        #[test]
        fn prop_length_invariant_under_reversal(tour in cities(30)) {
            let mut reversed = tour.clone();
            reversed.reverse();
            let (a, b) = (tour_length(&tour), tour_length(&reversed));
            prop_assert!((a - b).abs() <= 1e-9 * a.max(1.0), "{} vs {}", a, b);
        }

        #[test]
        fn prop_swap_reverses_only_the_range(
            tour in cities(30),
            a in 0usize..30,
            b in 0usize..30
        ) {
            let n = tour.len();
            let (i, j) = (a % n, b % n);
            let swapped = two_opt_swap(Tour::new(tour.clone()), i, j);
            let out = swapped.as_slice();
            prop_assert_eq!(out.len(), n);
            if i < j {
                for k in 0..n {
                    if k < i || k > j {
                        prop_assert_eq!(out[k], tour[k]);
                    } else {
                        prop_assert_eq!(out[k], tour[i + j - k]);
                    }
                }
            } else {
                prop_assert_eq!(out, tour.as_slice());
            }
        }
    }
}
