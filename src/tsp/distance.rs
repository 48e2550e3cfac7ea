//! Closed-loop tour cost.

use super::city::City;
use crate::error::{AnnealError, Result};

/// Total Euclidean length of the closed tour `order` over `cities`.
///
/// Sums consecutive legs and the closing leg from the last city back to the
/// first. Returns `0.0` when `order.len() != cities.len()`; use
/// [`tour_length_checked`] where a mismatch must be fatal.
///
/// # Panics
///
/// Panics if `order` contains an index `>= cities.len()`.
///
/// # Examples
///
/// ```
/// use u_anneal::tsp::{tour_length, City};
///
/// let cities = [
///     City::new(1.0, 0.0),
///     City::new(0.0, 1.0),
///     City::new(-1.0, 0.0),
///     City::new(0.0, -1.0),
/// ];
/// let len = tour_length(&[0, 1, 2, 3], &cities);
/// assert!((len - 4.0 * 2f64.sqrt()).abs() < 1e-12);
/// ```
pub fn tour_length(order: &[usize], cities: &[City]) -> f64 {
    if order.len() != cities.len() || order.is_empty() {
        return 0.0;
    }

    let open: f64 = order
        .windows(2)
        .map(|w| cities[w[0]].distance(&cities[w[1]]))
        .sum();
    let closing = cities[order[0]].distance(&cities[order[order.len() - 1]]);
    open + closing
}

/// Like [`tour_length`], but a length mismatch is a
/// [`AnnealError::ConfigurationMismatch`].
pub fn tour_length_checked(order: &[usize], cities: &[City]) -> Result<f64> {
    if order.len() != cities.len() {
        return Err(AnnealError::mismatch(cities.len(), order.len()));
    }
    Ok(tour_length(order, cities))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tsp::city::circle_cities;
    use proptest::prelude::*;

    fn square() -> Vec<City> {
        vec![
            City::new(1.0, 0.0),
            City::new(0.0, 1.0),
            City::new(-1.0, 0.0),
            City::new(0.0, -1.0),
        ]
    }

    #[test]
    fn test_square_tour() {
        let len = tour_length(&[0, 1, 2, 3], &square());
        assert!((len - 4.0 * 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_crossing_tour_is_longer() {
        // 0 -> 2 -> 1 -> 3 crosses the square twice through the origin.
        let crossing = tour_length(&[0, 2, 1, 3], &square());
        assert!((crossing - (4.0 + 2.0 * 2f64.sqrt())).abs() < 1e-12);
        assert!(crossing > tour_length(&[0, 1, 2, 3], &square()));
    }

    #[test]
    fn test_mismatch_returns_zero() {
        assert_eq!(tour_length(&[0, 1, 2], &square()), 0.0);
        assert_eq!(tour_length(&[], &square()), 0.0);
    }

    #[test]
    fn test_mismatch_checked_is_error() {
        let err = tour_length_checked(&[0, 1, 2], &square()).unwrap_err();
        assert!(err.is_mismatch());
        let ok = tour_length_checked(&[0, 1, 2, 3], &square()).unwrap();
        assert!((ok - 4.0 * 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_single_city_has_zero_length() {
        assert_eq!(tour_length(&[0], &[City::new(0.3, 0.4)]), 0.0);
    }

    #[test]
    fn test_angular_order_is_regular_polygon_perimeter() {
        let n = 1000;
        let order: Vec<usize> = (0..n).collect();
        let expected = 2.0 * n as f64 * (std::f64::consts::PI / n as f64).sin();
        assert!((tour_length(&order, &circle_cities(n)) - expected).abs() < 1e-9);
    }

    fn shuffled(n: usize) -> impl Strategy<Value = Vec<usize>> {
        Just((0..n).collect::<Vec<usize>>()).prop_shuffle()
    }

    proptest! {
        #[test]
        fn prop_non_negative(order in (1usize..40).prop_flat_map(shuffled)) {
            let cities = circle_cities(order.len());
            prop_assert!(tour_length(&order, &cities) >= 0.0);
        }

        #[test]
        fn prop_rotation_invariant(
            (order, k) in (1usize..40)
                .prop_flat_map(|n| (shuffled(n), 0..n))
        ) {
            let cities = circle_cities(order.len());
            let mut rotated = order.clone();
            rotated.rotate_left(k);
            let a = tour_length(&order, &cities);
            let b = tour_length(&rotated, &cities);
            prop_assert!((a - b).abs() < 1e-9);
        }

        #[test]
        fn prop_reflection_invariant(order in (1usize..40).prop_flat_map(shuffled)) {
            let cities = circle_cities(order.len());
            let mut reversed = order.clone();
            reversed.reverse();
            let a = tour_length(&order, &cities);
            let b = tour_length(&reversed, &cities);
            prop_assert!((a - b).abs() < 1e-9);
        }
    }
}
