//! Experiment runner CLI: sweeps a grid of `(N, r)` random 3-SAT instances across
//! the three branching heuristics and prints PAR-10 results, one line per cell.

use std::time::Duration;

use clap::Parser;
use satstudy::{format_line, run_experiment, ExperimentConfig};
use tracing_subscriber::EnvFilter;

/// Run the static/random/2-clause branching heuristic comparison over a grid of
/// `(N, r)` random 3-SAT instances and print PAR-10 results, one line per cell.
#[derive(Debug, Parser)]
#[command(name = "experiment", version, about)]
struct Cli {
    /// Variable counts to sweep, e.g. `--n 85 --n 110`.
    #[arg(long = "n", num_args = 1, default_values_t = [85, 110])]
    n_values: Vec<u32>,

    /// Clause/variable ratios to sweep, e.g. `--ratio 3.0 --ratio 4.2`.
    #[arg(long = "ratio", num_args = 1, default_values_t = default_ratios())]
    ratios: Vec<f64>,

    /// Trials per `(N, r)` cell, all three modes sharing the same generated instance.
    #[arg(long, default_value_t = 100)]
    num_trials: u32,

    /// Per-solve wall-clock timeout, in seconds.
    #[arg(long, default_value_t = 2.0)]
    time_limit: f64,

    /// Base seed for deterministic per-trial seed derivation.
    #[arg(long, default_value_t = 12345)]
    base_seed: u64,
}

fn default_ratios() -> Vec<f64> {
    (30..62).step_by(2).map(|x| x as f64 / 10.0).collect()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = ExperimentConfig {
        n_values: cli.n_values,
        ratios: cli.ratios,
        num_trials: cli.num_trials,
        time_limit: Duration::from_secs_f64(cli.time_limit),
        base_seed: cli.base_seed,
    };

    for cell in run_experiment(&config) {
        println!("{}", format_line(&cell));
    }
}
