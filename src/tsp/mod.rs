//! Euclidean tours over cities on the unit circle.
//!
//! N cities sit evenly spaced on the unit circle, so the optimal tour is
//! the angular order and any candidate can be judged by eye. A tour is a
//! permutation of `0..N`; its cost is the closed-loop Euclidean length.
//!
//! - [`circle_cities`] / [`initial_tour`]: layout and shuffled start order
//! - [`tour_length`]: cost model
//! - [`Solution`] / [`SolutionFactory`]: immutable candidates and swap
//!   neighbors

mod cities_csv;
mod city;
mod distance;
mod solution;
mod tour;

pub use cities_csv::{read_cities_csv, write_cities_csv};
pub use city::{biased_shuffle, circle_cities, generate, initial_tour, City};
pub use distance::{tour_length, tour_length_checked};
pub use solution::{Solution, SolutionFactory};
pub use tour::{is_permutation, validate_tour};

/// City count used when none is configured.
pub const DEFAULT_CITY_COUNT: usize = 1000;
