//! Command-line front end: search for a rook jumping maze and print it.

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use rook_maze::optimizer::{Acceptance, OptimizerConfig, OptimizerRunner};
use tracing_subscriber::EnvFilter;

/// Printed in place of a path length when no iteration reached the goal.
const NO_PATH_SENTINEL: u64 = 1_000_000;

#[derive(Parser, Debug)]
#[command(name = "rook-maze", about = "Search for short rook jumping mazes")]
struct Cli {
    /// Board size, clamped into [5, 10].
    #[arg(long, default_value_t = 5)]
    size: usize,

    /// Number of grids to generate.
    #[arg(long, short = 'i', default_value_t = 1000)]
    iterations: usize,

    #[arg(long, value_enum, default_value = "annealing")]
    policy: PolicyArg,

    /// Descent counter bound for `--policy restarts`.
    #[arg(long, default_value_t = 100)]
    restart_bound: usize,

    /// Uphill parameter in [0, 1] for `--policy uphill`.
    #[arg(long, default_value_t = 0.5)]
    uphill: f64,

    /// Initial temperature for `--policy annealing`.
    #[arg(long, short = 't', default_value_t = 100.0)]
    initial_temperature: f64,

    /// Decay rate for `--policy annealing`.
    #[arg(long, short = 'd', default_value_t = 0.95)]
    decay_rate: f64,

    #[arg(long)]
    seed: Option<u64>,

    /// Evaluate grids on the rayon thread pool.
    #[arg(long, default_value_t = false)]
    parallel: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PolicyArg {
    Descent,
    Restarts,
    Uphill,
    Annealing,
}

impl Cli {
    fn acceptance(&self) -> Acceptance {
        match self.policy {
            PolicyArg::Descent => Acceptance::Descent,
            PolicyArg::Restarts => Acceptance::RandomRestarts {
                restart_bound: self.restart_bound,
            },
            PolicyArg::Uphill => Acceptance::RandomUphill {
                uphill: self.uphill,
            },
            PolicyArg::Annealing => Acceptance::SimulatedAnnealing {
                initial_temperature: self.initial_temperature,
                decay_rate: self.decay_rate,
            },
        }
    }

    fn config(&self) -> OptimizerConfig {
        let mut config = OptimizerConfig::default()
            .with_size(self.size)
            .with_iterations(self.iterations)
            .with_acceptance(self.acceptance())
            .with_parallel(self.parallel);
        config.seed = self.seed;
        config
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = cli.config();
    if let Err(msg) = config.validate() {
        bail!("invalid configuration: {msg}");
    }

    let result = OptimizerRunner::run(&config);
    let Some(incumbent) = result.incumbent.as_ref() else {
        bail!("optimizer finished without evaluating a grid");
    };

    println!("{}", incumbent.grid);
    println!("Moves from start:");
    println!("{}", incumbent.depths);
    match result.path_length() {
        Some(len) => println!("{len}"),
        None => println!("{NO_PATH_SENTINEL}"),
    }
    Ok(())
}
