//! Labyrinth growth CLI.
//!
//! Runs many random labyrinths, averages the number of rooms discovered per
//! iteration and prints the linear trend of that curve.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use labyrinth_growth::core::{simulate, simulate_with_progress};
use labyrinth_growth::trials::SimulationConfig;
use labyrinth_growth::utils::load_json;
use labyrinth_growth::Result;

#[derive(Parser, Debug)]
#[command(name = "labyrinth-growth")]
#[command(author, version, about = "Average frontier growth of random grid labyrinths")]
struct Cli {
    /// Number of independent trials [default: 250]
    #[arg(long, env = "LABYRINTH_RERUNS")]
    reruns: Option<usize>,

    /// Maximum expansion iterations per trial [default: 100]
    #[arg(long, env = "LABYRINTH_MAX_ITER")]
    max_iter: Option<usize>,

    /// Master random seed
    #[arg(long, env = "LABYRINTH_SEED")]
    seed: Option<u64>,

    /// JSON config file; explicit flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Run trials one after another instead of on the thread pool
    #[arg(long, default_value_t = false)]
    sequential: bool,

    /// Write the report as JSON
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Render the averaged series and fit to a PNG
    #[cfg(feature = "viz")]
    #[arg(long)]
    plot: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long, default_value_t = false)]
    no_progress: bool,

    /// Enable verbose output
    #[arg(long, short)]
    verbose: bool,
}

impl Cli {
    fn simulation_config(&self) -> Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => load_json(path)?,
            None => SimulationConfig::default(),
        };
        if let Some(reruns) = self.reruns {
            config.reruns = reruns;
        }
        if let Some(max_iter) = self.max_iter {
            config.max_iter = max_iter;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.sequential {
            config.parallel = false;
        }
        Ok(config)
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.simulation_config()?;
    config.validate()?;

    let report = if cli.no_progress {
        simulate(&config)?
    } else {
        simulate_with_progress(&config)?
    };

    println!("{}", report);

    if let Some(path) = &cli.output {
        report.save(path)?;
        info!(path = %path.display(), "Report written");
    }

    #[cfg(feature = "viz")]
    if let Some(path) = &cli.plot {
        labyrinth_growth::report::plot::render_png(&report, path)?;
        info!(path = %path.display(), "Plot written");
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Simulation failed");
            ExitCode::FAILURE
        }
    }
}
