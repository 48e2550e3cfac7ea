//! Annealing loop over tour solutions.

use super::config::{AnnealConfig, ScheduleConfig, BOLTZMANN};
use super::types::TraceEntry;
use crate::error::Result;
use crate::random::rng_from;
use crate::tsp::{Solution, SolutionFactory};
use rand::rngs::StdRng;
use rand::Rng;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Probability of accepting a move that changes the cost by `delta` at
/// temperature `temperature`.
///
/// Improving moves (`delta < 0`) are always accepted. Otherwise
/// `exp(-delta / (kb * t))` with `kb` = [`BOLTZMANN`].
pub fn acceptance_probability(delta: f64, temperature: f64) -> f64 {
    if delta < 0.0 {
        return 1.0;
    }
    (-delta / (BOLTZMANN * temperature)).exp()
}

/// Metropolis criterion for a uniform `draw` in `[0, 1)`.
///
/// The move is accepted iff it improves the cost or `draw` is strictly
/// less than [`acceptance_probability`].
pub fn accepts(delta: f64, temperature: f64, draw: f64) -> bool {
    delta < 0.0 || draw < acceptance_probability(delta, temperature)
}

/// Owns the current solution and advances it through fixed-temperature
/// runs.
///
/// # Examples
///
/// ```
/// use u_anneal::random::create_rng;
/// use u_anneal::sa::Annealer;
/// use u_anneal::tsp::SolutionFactory;
///
/// let factory = SolutionFactory::new(50).unwrap();
/// let mut annealer = Annealer::new(factory, None, create_rng(42)).unwrap();
/// let trace = annealer.run(0.5, 100).unwrap();
/// assert_eq!(trace.len(), 100);
/// assert_eq!(trace[99].cost, annealer.solution().cost());
/// ```
pub struct Annealer<R: Rng> {
    factory: SolutionFactory,
    current: Solution,
    best: Solution,
    rng: R,
}

impl Annealer<StdRng> {
    /// Builds an annealer over `config.city_count` circle cities, seeded from
    /// `config.seed`.
    pub fn from_config(config: &AnnealConfig, prior: Option<&Solution>) -> Result<Self> {
        config.validate()?;
        let factory = SolutionFactory::new(config.city_count)?;
        Self::new(factory, prior, rng_from(config.seed))
    }
}

impl<R: Rng> Annealer<R> {
    /// Creates an annealer.
    ///
    /// Without a prior, starts from a random solution. With one, starts from
    /// a single swap neighbor of it, so a resumed search continues near the
    /// previous run's end point. Fails if the prior's tour does not match the
    /// factory's city count.
    pub fn new(factory: SolutionFactory, prior: Option<&Solution>, mut rng: R) -> Result<Self> {
        let current = match prior {
            None => factory.random_solution(&mut rng),
            Some(prior) => factory.neighbor(prior, &mut rng)?,
        };
        Ok(Self {
            best: current.clone(),
            current,
            factory,
            rng,
        })
    }

    /// Runs `count` steps at `temperature` and returns one trace entry per
    /// step.
    ///
    /// A non-positive (or NaN) temperature or `count == 0` returns an empty
    /// trace without touching the current solution. If a step fails, the
    /// error is returned and no trace is produced.
    pub fn run(&mut self, temperature: f64, count: usize) -> Result<Vec<TraceEntry>> {
        if temperature.is_nan() || temperature <= 0.0 || count == 0 {
            warn!(temperature, count, "degenerate run requested, nothing to do");
            return Ok(Vec::new());
        }

        debug!(
            temperature,
            count,
            cost = self.current.cost(),
            "starting run"
        );

        let mut trace = Vec::with_capacity(count);
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let started = Instant::now();

        for step in 0..count {
            let candidate = self.factory.neighbor(&self.current, &mut self.rng)?;
            let delta = candidate.cost() - self.current.cost();

            // Only worsening moves consume a draw.
            let accepted = delta < 0.0 || accepts(delta, temperature, self.rng.random::<f64>());

            if accepted {
                accepted_moves += 1;
                if delta < 0.0 {
                    improving_moves += 1;
                }
                self.current = candidate;
                if self.current.cost() < self.best.cost() {
                    self.best = self.current.clone();
                }
            }

            trace.push(TraceEntry {
                step,
                tour: self.current.tour().to_vec(),
                cost: self.current.cost(),
                temperature,
                accepted,
                time_per_step: Duration::ZERO,
            });
        }

        let per_step = Duration::from_secs_f64(started.elapsed().as_secs_f64() / count as f64);
        for entry in &mut trace {
            entry.time_per_step = per_step;
        }

        info!(
            temperature,
            count,
            cost = self.current.cost(),
            best = self.best.cost(),
            accepted_moves,
            improving_moves,
            per_step_us = per_step.as_secs_f64() * 1e6,
            "run finished"
        );

        Ok(trace)
    }

    /// Runs successive stages, cooling between them per `schedule`.
    ///
    /// Stops before a stage whose temperature is at or below
    /// `min_temperature`, or after `max_stages` stages. Entry steps are
    /// numbered across the whole anneal.
    pub fn anneal(&mut self, schedule: &ScheduleConfig) -> Result<Vec<TraceEntry>> {
        schedule.validate()?;

        let mut trace: Vec<TraceEntry> = Vec::new();
        let mut temperature = schedule.initial_temperature;
        let mut stage = 0usize;

        while temperature > schedule.min_temperature {
            if schedule.max_stages > 0 && stage >= schedule.max_stages {
                break;
            }

            let offset = trace.len();
            let stage_trace = self.run(temperature, schedule.steps_per_temperature)?;
            trace.extend(stage_trace.into_iter().map(|mut entry| {
                entry.step += offset;
                entry
            }));

            temperature = schedule.next_temperature(temperature, stage);
            stage += 1;
        }

        debug!(stages = stage, steps = trace.len(), "anneal finished");
        Ok(trace)
    }

    /// The current solution.
    pub fn solution(&self) -> &Solution {
        &self.current
    }

    /// The lowest-cost solution seen since construction.
    pub fn best(&self) -> &Solution {
        &self.best
    }

    pub fn factory(&self) -> &SolutionFactory {
        &self.factory
    }

    pub fn into_solution(self) -> Solution {
        self.current
    }
}
