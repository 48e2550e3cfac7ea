//! Candidate solutions and the factory that perturbs them.

use super::city::{circle_cities, initial_tour, City};
use super::distance::tour_length;
use super::tour::validate_tour;
use crate::error::{AnnealError, Result};
use rand::Rng;
use std::cell::OnceCell;
use std::sync::Arc;

/// A visiting order over a shared city set, with its cost computed on
/// first access.
///
/// The tour is never mutated after construction; perturbation always
/// produces a new `Solution` through [`SolutionFactory::neighbor`].
#[derive(Debug, Clone)]
pub struct Solution {
    cities: Arc<[City]>,
    tour: Vec<usize>,
    cost: OnceCell<f64>,
}

impl Solution {
    /// Wraps `tour` after checking it is a permutation of the city indices.
    pub fn new(cities: Arc<[City]>, tour: Vec<usize>) -> Result<Self> {
        validate_tour(&tour, cities.len())?;
        Ok(Self::from_valid(cities, tour))
    }

    fn from_valid(cities: Arc<[City]>, tour: Vec<usize>) -> Self {
        Self {
            cities,
            tour,
            cost: OnceCell::new(),
        }
    }

    /// Closed-loop tour length, memoized.
    pub fn cost(&self) -> f64 {
        *self
            .cost
            .get_or_init(|| tour_length(&self.tour, &self.cities))
    }

    /// Whether [`cost`](Self::cost) has been evaluated yet.
    pub fn is_cost_computed(&self) -> bool {
        self.cost.get().is_some()
    }

    /// The visiting order.
    pub fn tour(&self) -> &[usize] {
        &self.tour
    }

    pub fn into_tour(self) -> Vec<usize> {
        self.tour
    }

    /// City coordinates indexed by city id.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Cities in visiting order, i.e. the polygon a renderer draws.
    pub fn points(&self) -> impl Iterator<Item = &City> + '_ {
        self.tour.iter().map(move |&i| &self.cities[i])
    }
}

/// Produces random solutions and swap neighbors over one fixed city set.
///
/// # Examples
///
/// ```
/// use u_anneal::random::create_rng;
/// use u_anneal::tsp::SolutionFactory;
///
/// let factory = SolutionFactory::new(100).unwrap();
/// let mut rng = create_rng(42);
/// let s = factory.random_solution(&mut rng);
/// let n = factory.neighbor(&s, &mut rng).unwrap();
/// assert_eq!(n.tour().len(), 100);
/// ```
#[derive(Debug, Clone)]
pub struct SolutionFactory {
    cities: Arc<[City]>,
}

impl SolutionFactory {
    /// Factory over `city_count` cities evenly spaced on the unit circle.
    pub fn new(city_count: usize) -> Result<Self> {
        Self::with_cities(circle_cities(city_count))
    }

    /// Factory over an explicit city set, e.g. one read back from CSV.
    pub fn with_cities(cities: Vec<City>) -> Result<Self> {
        if cities.is_empty() {
            return Err(AnnealError::InvalidConfig(
                "city count must be positive".into(),
            ));
        }
        Ok(Self {
            cities: cities.into(),
        })
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// A fresh solution with a shuffled visiting order.
    pub fn random_solution<R: Rng>(&self, rng: &mut R) -> Solution {
        let tour = initial_tour(self.city_count(), rng);
        Solution::from_valid(Arc::clone(&self.cities), tour)
    }

    /// Wraps an externally supplied tour, e.g. one restored from disk.
    pub fn solution_from_tour(&self, tour: Vec<usize>) -> Result<Solution> {
        Solution::new(Arc::clone(&self.cities), tour)
    }

    /// Copies `solution`'s tour and swaps two independently drawn positions.
    ///
    /// The positions may coincide, giving an unchanged tour. The cost of the
    /// returned solution is not evaluated.
    pub fn neighbor<R: Rng>(&self, solution: &Solution, rng: &mut R) -> Result<Solution> {
        self.check_len(solution)?;
        let n = self.city_count();
        let p1 = rng.random_range(0..n);
        let p2 = rng.random_range(0..n);
        self.swap_neighbor(solution, p1, p2)
    }

    /// Neighbor of `solution` with positions `p1` and `p2` swapped.
    pub fn swap_neighbor(&self, solution: &Solution, p1: usize, p2: usize) -> Result<Solution> {
        self.check_len(solution)?;
        let n = self.city_count();
        if p1 >= n || p2 >= n {
            return Err(AnnealError::InvalidTour {
                reason: format!("swap positions ({p1}, {p2}) out of range 0..{n}"),
            });
        }
        let mut tour = solution.tour.clone();
        tour.swap(p1, p2);
        Ok(Solution::from_valid(Arc::clone(&self.cities), tour))
    }

    fn check_len(&self, solution: &Solution) -> Result<()> {
        if solution.tour.len() != self.city_count() {
            return Err(AnnealError::mismatch(
                self.city_count(),
                solution.tour.len(),
            ));
        }
        Ok(())
    }
}
