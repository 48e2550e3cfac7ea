//! City coordinates and the unit-circle layout generator.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A fixed point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub x: f64,
    pub y: f64,
}

impl City {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &City) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Places `n` cities evenly on the unit circle, city `i` at angle `2πi/n`.
///
/// The layout is deterministic, so the optimal tour is the angular order
/// and can be checked by eye.
pub fn circle_cities(n: usize) -> Vec<City> {
    (0..n)
        .map(|i| {
            let angle = 2.0 * PI * i as f64 / n as f64;
            City::new(angle.cos(), angle.sin())
        })
        .collect()
}

/// Shuffles `order` by swapping each position with a uniformly drawn
/// position anywhere in the slice.
///
/// This is not Fisher-Yates: the draw range is `[0, n)` for every `i`, not
/// `[i, n)`, so the resulting permutations are not uniformly distributed.
/// Persisted runs depend on this exact sequence of draws.
pub fn biased_shuffle<T, R: Rng>(order: &mut [T], rng: &mut R) {
    let n = order.len();
    for i in 0..n {
        let r = rng.random_range(0..n);
        order.swap(i, r);
    }
}

/// Identity permutation of `0..n` passed through [`biased_shuffle`].
pub fn initial_tour<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut tour: Vec<usize> = (0..n).collect();
    biased_shuffle(&mut tour, rng);
    tour
}

/// Generates the circle layout together with a shuffled visiting order.
pub fn generate<R: Rng>(n: usize, rng: &mut R) -> (Vec<City>, Vec<usize>) {
    (circle_cities(n), initial_tour(n, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use crate::tsp::is_permutation;

    #[test]
    fn test_circle_cities_on_unit_circle() {
        let cities = circle_cities(12);
        assert_eq!(cities.len(), 12);
        for c in &cities {
            assert!((c.x * c.x + c.y * c.y - 1.0).abs() < 1e-12);
        }
        assert!((cities[0].x - 1.0).abs() < 1e-12);
        assert!(cities[0].y.abs() < 1e-12);
        assert!((cities[3].y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_circle_cities_evenly_spaced() {
        let cities = circle_cities(10);
        let first = cities[0].distance(&cities[1]);
        for i in 0..10 {
            let d = cities[i].distance(&cities[(i + 1) % 10]);
            assert!((d - first).abs() < 1e-12);
        }
    }

    #[test]
    fn test_circle_cities_empty() {
        assert!(circle_cities(0).is_empty());
    }

    #[test]
    fn test_distance() {
        let a = City::new(0.0, 0.0);
        let b = City::new(3.0, 4.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-12);
        assert!((b.distance(&a) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_initial_tour_is_permutation() {
        let mut rng = create_rng(42);
        for n in [1, 2, 5, 100, 1000] {
            let tour = initial_tour(n, &mut rng);
            assert!(is_permutation(&tour, n));
        }
    }

    #[test]
    fn test_initial_tour_deterministic_for_seed() {
        let a = initial_tour(50, &mut create_rng(9));
        let b = initial_tour(50, &mut create_rng(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_biased_shuffle_draws_once_per_position() {
        // Replaying the draws by hand must reproduce the shuffle exactly.
        let n = 20;
        let mut expected: Vec<usize> = (0..n).collect();
        let mut replay = create_rng(3);
        for i in 0..n {
            let r = replay.random_range(0..n);
            expected.swap(i, r);
        }

        let mut actual: Vec<usize> = (0..n).collect();
        biased_shuffle(&mut actual, &mut create_rng(3));
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_generate() {
        let (cities, tour) = generate(8, &mut create_rng(1));
        assert_eq!(cities, circle_cities(8));
        assert!(is_permutation(&tour, 8));
    }
}
