//! Simulated Annealing over circle-city tours.
//!
//! The [`Annealer`] holds one current solution. Each step draws a swap
//! neighbor, compares costs, and applies the Metropolis criterion: an
//! improving candidate always replaces the current one, a worsening one
//! with probability `exp(-ΔE / (kb·T))`. Every step is recorded as a
//! [`TraceEntry`].
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"
//! - Lundy & Mees (1986), "Convergence of an Annealing Algorithm"

mod config;
mod runner;
mod types;

pub use config::{AnnealConfig, CoolingSchedule, ScheduleConfig, BOLTZMANN};
pub use runner::{acceptance_probability, accepts, Annealer};
pub use types::TraceEntry;
