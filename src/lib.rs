//! A DPLL-style SAT solver core with two-watched-literal unit propagation, plus an
//! experiment harness for studying branching heuristics on random 3-SAT instances
//! near the satisfiability phase transition.
//!
//! Scope: DPLL search with watched literals, pluggable branching heuristics,
//! timeout-bounded solving, a random 3-SAT generator, and a PAR-10 experiment runner.
//! Explicitly out of scope: CDCL, restarts, clause deletion, preprocessing, parallel
//! or incremental solving, unsatisfiability proofs.

mod branch;
mod clause;
mod data;
mod dimacs;
mod error;
mod experiment;
mod gen3sat;
mod log;
mod propagate;
mod solver;
mod trail;
mod util;
mod watch;

pub use branch::BranchMode;
pub use clause::{ClauseIdx, ClauseStore};
pub use data::{Lit, Var};
pub use dimacs::{parse as parse_dimacs, write as write_dimacs, DimacsCnf};
pub use error::ConfigError;
pub use experiment::{format_line, par10_time, run as run_experiment, CellResult, ExperimentConfig, ModeStats};
pub use gen3sat::Random3Sat;
pub use solver::{Model, SolveConfig, SolveOutcome, Solver, Stats};
pub use watch::WatchIndex;
