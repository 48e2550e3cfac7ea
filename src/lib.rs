//! Simulated annealing tour search over cities on a unit circle.
//!
//! Built to show the annealing process rather than to solve routing
//! problems: N cities sit evenly on the unit circle, so the optimal tour is
//! known and every intermediate tour can be judged by eye.
//!
//! - **tsp**: city layout, tour cost, immutable [`Solution`](tsp::Solution)s
//!   and the swap-neighbor [`SolutionFactory`](tsp::SolutionFactory).
//! - **sa**: the [`Annealer`](sa::Annealer), which runs fixed-temperature
//!   stages with the Metropolis criterion and records a per-step trace.
//! - **persist**: saving the current tour so the next invocation resumes
//!   from a perturbation of it.
//!
//! # Architecture
//!
//! Single-threaded and fully sequential. Every component that needs
//! randomness takes the RNG explicitly, so seeded runs are reproducible.

pub mod error;
pub mod persist;
pub mod random;
pub mod sa;
pub mod tsp;

pub use error::{AnnealError, Result};
