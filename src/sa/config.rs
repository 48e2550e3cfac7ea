//! Annealing configuration and cooling schedules.

use crate::error::{AnnealError, Result};
use crate::tsp::DEFAULT_CITY_COUNT;

/// Boltzmann constant used in the acceptance probability.
pub const BOLTZMANN: f64 = 1.0;

/// Configuration for a single fixed-temperature run.
///
/// # Examples
///
/// ```
/// use u_anneal::sa::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_city_count(200)
///     .with_temperature(0.5)
///     .with_steps(10)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct AnnealConfig {
    /// Number of cities on the unit circle.
    pub city_count: usize,

    /// Run temperature. Non-positive values make the run a no-op.
    pub temperature: f64,

    /// Number of neighbor evaluations in the run.
    pub steps: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            city_count: DEFAULT_CITY_COUNT,
            temperature: 0.5,
            steps: 10,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_city_count(mut self, n: usize) -> Self {
        self.city_count = n;
        self
    }

    pub fn with_temperature(mut self, t: f64) -> Self {
        self.temperature = t;
        self
    }

    pub fn with_steps(mut self, n: usize) -> Self {
        self.steps = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// A non-positive temperature or zero steps is accepted; the run is
    /// simply empty. NaN and infinite temperatures are rejected.
    pub fn validate(&self) -> Result<()> {
        if self.city_count == 0 {
            return Err(AnnealError::InvalidConfig(
                "city_count must be positive".into(),
            ));
        }
        if !self.temperature.is_finite() {
            return Err(AnnealError::InvalidConfig(format!(
                "temperature must be finite, got {}",
                self.temperature
            )));
        }
        Ok(())
    }
}

/// Cooling schedule for a multi-stage anneal.
///
/// # References
///
/// - Geometric: standard textbook approach
/// - Linear: fixed-duration cooling
/// - LundyMees: Lundy & Mees (1986), with convergence proof
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoolingSchedule {
    /// Temperature never changes; bound the run with `max_stages`.
    Constant,

    /// Geometric (exponential) cooling: `T_{k+1} = alpha * T_k`.
    Geometric {
        /// Cooling factor in (0, 1). Higher = slower cooling.
        alpha: f64,
    },

    /// Linear cooling from `T_0` to `T_min` over `max_stages` stages.
    Linear,

    /// Lundy-Mees cooling: `T_{k+1} = T_k / (1 + beta * T_k)`.
    LundyMees {
        /// Cooling parameter, positive.
        beta: f64,
    },
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Geometric { alpha: 0.95 }
    }
}

/// Configuration for [`Annealer::anneal`](super::Annealer::anneal): a
/// sequence of fixed-temperature stages.
///
/// # Examples
///
/// ```
/// use u_anneal::sa::{CoolingSchedule, ScheduleConfig};
///
/// let config = ScheduleConfig::default()
///     .with_initial_temperature(1.0)
///     .with_min_temperature(0.01)
///     .with_cooling(CoolingSchedule::Geometric { alpha: 0.9 })
///     .with_steps_per_temperature(500);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    /// Temperature of the first stage.
    pub initial_temperature: f64,

    /// Stop once the temperature is at or below this.
    pub min_temperature: f64,

    pub cooling: CoolingSchedule,

    /// Steps run at each temperature.
    pub steps_per_temperature: usize,

    /// Maximum number of stages. 0 = no limit.
    pub max_stages: usize,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1.0,
            min_temperature: 1e-3,
            cooling: CoolingSchedule::default(),
            steps_per_temperature: 100,
            max_stages: 0,
        }
    }
}

impl ScheduleConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_steps_per_temperature(mut self, n: usize) -> Self {
        self.steps_per_temperature = n;
        self
    }

    pub fn with_max_stages(mut self, n: usize) -> Self {
        self.max_stages = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(AnnealError::InvalidConfig(msg));

        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return invalid(format!(
                "initial_temperature must be positive, got {}",
                self.initial_temperature
            ));
        }
        if self.min_temperature.is_nan() || self.min_temperature <= 0.0 {
            return invalid("min_temperature must be positive".into());
        }
        if self.min_temperature >= self.initial_temperature {
            return invalid("min_temperature must be less than initial_temperature".into());
        }
        match self.cooling {
            CoolingSchedule::Geometric { alpha } => {
                if alpha <= 0.0 || alpha >= 1.0 {
                    return invalid(format!("geometric alpha must be in (0, 1), got {alpha}"));
                }
            }
            CoolingSchedule::LundyMees { beta } => {
                if beta <= 0.0 {
                    return invalid(format!("lundy-mees beta must be positive, got {beta}"));
                }
            }
            CoolingSchedule::Linear | CoolingSchedule::Constant => {
                if self.max_stages == 0 {
                    return invalid(format!(
                        "{:?} cooling needs a positive max_stages",
                        self.cooling
                    ));
                }
            }
        }
        Ok(())
    }

    /// Temperature after stage `stage` (0-based) ran at `temperature`.
    pub(crate) fn next_temperature(&self, temperature: f64, stage: usize) -> f64 {
        match self.cooling {
            CoolingSchedule::Constant => temperature,
            CoolingSchedule::Geometric { alpha } => temperature * alpha,
            CoolingSchedule::Linear => {
                let span = self.initial_temperature - self.min_temperature;
                let t = self.initial_temperature
                    - (stage + 1) as f64 * span / self.max_stages as f64;
                t.max(self.min_temperature)
            }
            CoolingSchedule::LundyMees { beta } => temperature / (1.0 + beta * temperature),
        }
    }
}
