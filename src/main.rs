//! Command-line driver: resume from the saved tour, anneal, save, and
//! print one line per step.
//!
//! ```text
//! u-anneal 0.5 10 0
//! ```
//! runs 10 steps at temperature 0.5 and numbers the output frames from 0.

use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use u_anneal::persist::{JsonFileStore, SolutionStore};
use u_anneal::random::rng_from;
use u_anneal::sa::{AnnealConfig, Annealer, CoolingSchedule, ScheduleConfig, TraceEntry};
use u_anneal::tsp::{write_cities_csv, SolutionFactory, DEFAULT_CITY_COUNT};
use u_anneal::{AnnealError, Result};

#[derive(Parser, Debug)]
#[command(name = "u-anneal", version, about, allow_negative_numbers = true)]
struct Cli {
    /// Run temperature; non-positive values do nothing.
    temperature: f64,

    /// Steps per temperature.
    steps: usize,

    /// Number of the first output frame.
    #[arg(default_value_t = 0)]
    start: usize,

    /// Number of cities on the unit circle.
    #[arg(long, default_value_t = DEFAULT_CITY_COUNT)]
    cities: usize,

    #[arg(long)]
    seed: Option<u64>,

    /// File holding the tour carried between runs.
    #[arg(long, default_value = "Solution.json")]
    state: PathBuf,

    /// Write the full trace as JSON.
    #[arg(long)]
    trace: Option<PathBuf>,

    /// Write city coordinates as `x,y` CSV.
    #[arg(long)]
    cities_csv: Option<PathBuf>,

    /// Cool geometrically by this factor after every STEPS steps.
    #[arg(long)]
    cool: Option<f64>,

    /// Floor temperature when cooling.
    #[arg(long, default_value_t = 1e-3)]
    min_temperature: f64,
}

fn enable_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .try_init();
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| AnnealError::io(path, e))
}

fn print_trace(trace: &[TraceEntry], start: usize) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for entry in trace {
        writeln!(
            out,
            "{} {} {}",
            start + entry.step,
            entry.temperature,
            entry.cost
        )
        .map_err(|e| AnnealError::io("<stdout>", e))?;
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = AnnealConfig::default()
        .with_city_count(cli.cities)
        .with_temperature(cli.temperature)
        .with_steps(cli.steps);
    config.seed = cli.seed;
    config.validate()?;

    info!(
        temperature = config.temperature,
        steps = config.steps,
        start = cli.start,
        "configured"
    );

    let factory = SolutionFactory::new(config.city_count)?;
    let store = JsonFileStore::new(&cli.state);
    let prior = store.load_prior(&factory)?;

    if let Some(path) = &cli.cities_csv {
        write_cities_csv(create(path)?, factory.cities())?;
    }

    let mut annealer = Annealer::new(factory, prior.as_ref(), rng_from(config.seed))?;
    let trace = match cli.cool {
        None => annealer.run(config.temperature, config.steps)?,
        Some(alpha) => {
            let schedule = ScheduleConfig::default()
                .with_initial_temperature(config.temperature)
                .with_min_temperature(cli.min_temperature)
                .with_cooling(CoolingSchedule::Geometric { alpha })
                .with_steps_per_temperature(config.steps);
            annealer.anneal(&schedule)?
        }
    };
    store.save_prior(annealer.solution())?;

    print_trace(&trace, cli.start)?;

    if let Some(path) = &cli.trace {
        let mut writer = create(path)?;
        serde_json::to_writer(&mut writer, &trace)?;
        writer.flush().map_err(|e| AnnealError::io(path, e))?;
    }

    info!(
        cost = annealer.solution().cost(),
        best = annealer.best().cost(),
        state = %cli.state.display(),
        "done"
    );
    Ok(())
}

fn main() -> ExitCode {
    enable_tracing();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
