//! Experiment runner: trial loop, PAR-10 aggregation, ratio-sweep reporting. Callable
//! as a library function so both the `experiment` binary and the test suite can drive
//! it.

use std::time::Duration;

use crate::branch::BranchMode;
use crate::gen3sat::Random3Sat;
use crate::solver::{SolveConfig, Solver};

/// A grid of `(N, r)` cells to sweep, each run for `num_trials` trials.
#[derive(Debug, Clone)]
pub struct ExperimentConfig {
    pub n_values: Vec<u32>,
    pub ratios: Vec<f64>,
    pub num_trials: u32,
    pub time_limit: Duration,
    pub base_seed: u64,
}

/// PAR-10 mean and timeout rate for one heuristic mode over one `(N, r)` cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModeStats {
    pub par10_mean: f64,
    pub timeout_rate: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct CellResult {
    pub n: u32,
    pub r: f64,
    pub static_mode: ModeStats,
    pub random_mode: ModeStats,
    pub two_clause_mode: ModeStats,
}

/// PAR-10: a timeout at `time_limit` counts as `10 * time_limit`. Kept as a
/// standalone function since it is applied once per `(mode, trial)` pair.
pub fn par10_time(solve_time: Duration, time_limit: Duration) -> Duration {
    if solve_time >= time_limit {
        time_limit * 10
    } else {
        solve_time
    }
}

/// Deterministic per-trial seed derivation from `(N, r, trial, base_seed)`, so the
/// same cell always draws the same instances across reruns.
fn trial_seed(base_seed: u64, n: u32, r: f64, trial: u32) -> u64 {
    base_seed + (n as u64) * 10_000 + ((r * 100.0).round() as u64) * 1_000 + trial as u64
}

const MODES: [BranchMode; 3] = [BranchMode::Static, BranchMode::Random, BranchMode::TwoClause];

/// Run the full `(N, r)` grid, each cell solved once per mode per trial, all three
/// modes sharing the same generated instance within a trial.
pub fn run(config: &ExperimentConfig) -> Vec<CellResult> {
    config
        .n_values
        .iter()
        .flat_map(|&n| config.ratios.iter().map(move |&r| (n, r)))
        .map(|(n, r)| run_cell(config, n, r))
        .collect()
}

fn run_cell(config: &ExperimentConfig, n: u32, r: f64) -> CellResult {
    let num_clauses = ((n as f64) * r).floor() as u32;

    let mut times: [Vec<Duration>; 3] = [Vec::new(), Vec::new(), Vec::new()];

    for trial in 0..config.num_trials {
        let seed = trial_seed(config.base_seed, n, r, trial);
        let clauses = match Random3Sat::new(n, num_clauses.max(1), seed) {
            Ok(generator) => generator.generate(),
            Err(_) => continue,
        };

        for (slot, &mode) in times.iter_mut().zip(MODES.iter()) {
            let mut solver =
                Solver::new(clauses.clone(), n).expect("generator output is always well-formed");
            let outcome = solver.solve(&SolveConfig {
                time_limit: Some(config.time_limit),
                branch_mode: mode,
                seed,
            });
            let solve_time = if outcome.is_timeout() {
                config.time_limit
            } else {
                solver.stats().solve_time
            };
            slot.push(solve_time);
        }
    }

    let stats_for = |times: &[Duration]| -> ModeStats {
        if times.is_empty() {
            return ModeStats::default();
        }
        let par10_sum: f64 = times
            .iter()
            .map(|&t| par10_time(t, config.time_limit).as_secs_f64())
            .sum();
        let timeouts = times.iter().filter(|&&t| t >= config.time_limit).count();
        ModeStats {
            par10_mean: par10_sum / times.len() as f64,
            timeout_rate: timeouts as f64 / times.len() as f64,
        }
    };

    CellResult {
        n,
        r,
        static_mode: stats_for(&times[0]),
        random_mode: stats_for(&times[1]),
        two_clause_mode: stats_for(&times[2]),
    }
}

/// Format one result as a machine-parseable stdout line.
pub fn format_line(cell: &CellResult) -> String {
    format!(
        "N={} r={:.1} | PAR10 static={:.4} random={:.4} 2cl={:.4}",
        cell.n,
        cell.r,
        cell.static_mode.par10_mean,
        cell.random_mode.par10_mean,
        cell.two_clause_mode.par10_mean
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn par10_counts_timeout_as_ten_times_limit() {
        let limit = Duration::from_secs(5);
        assert_eq!(par10_time(Duration::from_secs(5), limit), Duration::from_secs(50));
        assert_eq!(par10_time(Duration::from_secs(1), limit), Duration::from_secs(1));
    }

    #[test]
    fn trial_seed_is_deterministic() {
        assert_eq!(trial_seed(1, 50, 4.2, 3), trial_seed(1, 50, 4.2, 3));
        assert_ne!(trial_seed(1, 50, 4.2, 3), trial_seed(1, 50, 4.2, 4));
    }

    #[test]
    fn format_line_matches_expected_shape() {
        let cell = CellResult {
            n: 50,
            r: 4.2,
            static_mode: ModeStats {
                par10_mean: 0.1234,
                timeout_rate: 0.0,
            },
            random_mode: ModeStats {
                par10_mean: 0.5,
                timeout_rate: 0.0,
            },
            two_clause_mode: ModeStats {
                par10_mean: 1.0,
                timeout_rate: 0.0,
            },
        };
        assert_eq!(
            format_line(&cell),
            "N=50 r=4.2 | PAR10 static=0.1234 random=0.5000 2cl=1.0000"
        );
    }

    #[test]
    fn small_grid_runs_end_to_end() {
        let config = ExperimentConfig {
            n_values: vec![20],
            ratios: vec![3.0],
            num_trials: 3,
            time_limit: Duration::from_secs(2),
            base_seed: 1,
        };
        let results = run(&config);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].n, 20);
    }
}
