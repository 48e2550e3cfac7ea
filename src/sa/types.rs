//! Per-step run telemetry.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One recorded annealing step.
///
/// `tour` and `cost` describe the current solution *after* the step's
/// accept/reject decision. `time_per_step` is the run's average wall time
/// per step, identical for every entry of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEntry {
    /// 0-based index within the run.
    pub step: usize,

    /// Visiting order of the current solution.
    pub tour: Vec<usize>,

    /// Cost of the current solution.
    pub cost: f64,

    /// Temperature the step ran at.
    pub temperature: f64,

    /// Whether the candidate replaced the current solution.
    pub accepted: bool,

    pub time_per_step: Duration,
}

impl TraceEntry {
    /// Annotation text for the frame numbered `start + step`.
    ///
    /// ```
    /// use std::time::Duration;
    /// use u_anneal::sa::TraceEntry;
    ///
    /// let entry = TraceEntry {
    ///     step: 2,
    ///     tour: vec![0, 1, 2],
    ///     cost: 5.25,
    ///     temperature: 0.5,
    ///     accepted: true,
    ///     time_per_step: Duration::ZERO,
    /// };
    /// assert_eq!(entry.label(10), "Temperature:0.5\nCost:5.25\nN:12");
    /// ```
    pub fn label(&self, start: usize) -> String {
        format!(
            "Temperature:{}\nCost:{}\nN:{}",
            self.temperature,
            self.cost,
            start + self.step
        )
    }
}
