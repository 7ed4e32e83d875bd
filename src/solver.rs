//! Search driver and its public result types.

use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::branch::{BranchMode, Brancher};
use crate::clause::ClauseStore;
use crate::error::ConfigError;
use crate::log;
use crate::propagate::PropagateResult;
use crate::trail::{AssignResult, Trail};
use crate::watch::WatchIndex;
use crate::Lit;

/// How often (in main-loop iterations) the search driver samples the wall clock to
/// check `time_limit`.
const TIME_CHECK_INTERVAL: u64 = 1024;

/// Recognized solver configuration.
#[derive(Debug, Clone)]
pub struct SolveConfig {
    /// `None` disables the limit. `Some(Duration::ZERO)` is a real limit that is
    /// already exceeded at the first check.
    pub time_limit: Option<Duration>,
    pub branch_mode: BranchMode,
    /// RNG seed for `Random` mode; accepted (and ignored) by the others to keep calls
    /// uniform across modes.
    pub seed: u64,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            time_limit: None,
            branch_mode: BranchMode::Static,
            seed: 0,
        }
    }
}

/// Instrumentation collected for the last `solve` call.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stats {
    pub split_count: u64,
    pub solve_time: Duration,
}

/// A complete satisfying assignment, one bool per variable `1..=num_vars`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    assignment: Vec<bool>,
}

impl Model {
    pub fn num_vars(&self) -> usize {
        self.assignment.len()
    }

    /// Truth value of variable `var` (1-indexed).
    pub fn value(&self, var: u32) -> bool {
        self.assignment[var as usize - 1]
    }

    /// The model as DIMACS-style signed integers, one per variable in order.
    pub fn as_vec(&self) -> Vec<i32> {
        self.assignment
            .iter()
            .enumerate()
            .map(|(i, &v)| if v { i as i32 + 1 } else { -(i as i32 + 1) })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    Sat(Model),
    Unsat,
    Timeout,
}

impl SolveOutcome {
    pub fn is_sat(&self) -> bool {
        matches!(self, SolveOutcome::Sat(_))
    }

    pub fn is_unsat(&self) -> bool {
        matches!(self, SolveOutcome::Unsat)
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, SolveOutcome::Timeout)
    }

    pub fn unwrap_sat(self) -> Model {
        match self {
            SolveOutcome::Sat(model) => model,
            other => panic!("expected Sat, got {other:?}"),
        }
    }
}

/// One frame of the explicit decision stack.
struct DecisionFrame {
    branch_lit: Lit,
    trail_mark: usize,
    flipped: bool,
}

pub struct Solver {
    pub(crate) clause_db: ClauseStore,
    pub(crate) watches: WatchIndex,
    pub(crate) trail: Trail,
    pub(crate) propagation_cursor: usize,
    /// Set once at construction if the formula contains an empty clause.
    trivially_unsat: bool,
    stats: Stats,
}

impl Solver {
    /// Build a solver from a list of clauses and the declared number of variables.
    /// Rejects malformed input.
    pub fn new<I, C>(clauses: I, num_vars: u32) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = C>,
        C: IntoIterator<Item = i32>,
    {
        let clause_db = ClauseStore::new(clauses, num_vars)?;
        let watches = WatchIndex::build(&clause_db);
        let trivially_unsat = clause_db.has_empty_clause();

        let mut trail = Trail::new();
        if num_vars > 0 {
            trail.expand(crate::data::Var::new(num_vars as i32));
        }

        Ok(Self {
            clause_db,
            watches,
            trail,
            propagation_cursor: 0,
            trivially_unsat,
            stats: Stats::default(),
        })
    }

    pub fn num_vars(&self) -> u32 {
        self.clause_db.num_vars()
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Reset assignment, trail, propagation cursor, and run the search.
    pub fn solve(&mut self, config: &SolveConfig) -> SolveOutcome {
        let start = Instant::now();
        self.trail = Trail::new();
        if self.num_vars() > 0 {
            self.trail
                .expand(crate::data::Var::new(self.num_vars() as i32));
        }
        self.propagation_cursor = 0;
        self.stats = Stats::default();

        let outcome = self.solve_inner(config, start);
        self.stats.solve_time = start.elapsed();
        outcome
    }

    fn solve_inner(&mut self, config: &SolveConfig, start: Instant) -> SolveOutcome {
        if self.trivially_unsat {
            debug!("formula contains an empty clause, trivially UNSAT");
            return SolveOutcome::Unsat;
        }

        if self.seed_unit_clauses() == AssignResult::Conflict {
            debug!("contradictory unit clauses, trivially UNSAT");
            return SolveOutcome::Unsat;
        }

        let mut brancher = Brancher::new(&self.clause_db, config.branch_mode, config.seed);
        let mut decisions: Vec<DecisionFrame> = Vec::new();
        let mut iterations: u64 = 0;

        loop {
            iterations += 1;
            if iterations % TIME_CHECK_INTERVAL == 0 {
                if let Some(limit) = config.time_limit {
                    if start.elapsed() >= limit {
                        return SolveOutcome::Timeout;
                    }
                }
            }

            match self.propagate() {
                PropagateResult::Conflict => {
                    if !self.backtrack(&mut decisions) {
                        debug!("search space exhausted, UNSAT");
                        return SolveOutcome::Unsat;
                    }
                    continue;
                }
                PropagateResult::Ok => {}
            }

            trace!(trail = %log::fmt_trail(&self.trail), "propagation fixed point");

            if self.trail.assignment_complete() {
                let model = Model {
                    assignment: self.trail.model(),
                };
                debug_assert!(
                    self.check_assignment(&model),
                    "produced model does not satisfy the input formula"
                );
                return SolveOutcome::Sat(model);
            }

            match brancher.pick(&self.clause_db, &self.trail) {
                Some(lit) => {
                    debug!("new decision literal {lit}");
                    decisions.push(DecisionFrame {
                        branch_lit: lit,
                        trail_mark: self.trail.mark(),
                        flipped: false,
                    });
                    self.stats.split_count += 1;
                    let result = self.trail.assign(lit);
                    debug_assert_eq!(result, AssignResult::Ok);
                }
                None => {
                    // Every variable is already assigned; assignment_complete() above
                    // would have caught this.
                    unreachable!("no branching candidate but assignment is incomplete")
                }
            }
        }
    }

    /// Initial propagation of unit clauses. These are not registered in the watch
    /// index; they are simply forced true up front, and any further implications
    /// cascade through the normal `propagate` loop since the trail scan starts at
    /// position 0.
    fn seed_unit_clauses(&mut self) -> AssignResult {
        for idx in self.clause_db.indices() {
            let cls = self.clause_db.clause(idx);
            if cls.len() != 1 {
                continue;
            }
            let unit_lit = cls[0];
            if self.trail.assign(unit_lit) == AssignResult::Conflict {
                return AssignResult::Conflict;
            }
        }
        AssignResult::Ok
    }

    /// Pop the decision stack until an unflipped frame is found; flip it and assign
    /// the opposite polarity. Returns `false` if the stack is exhausted.
    fn backtrack(&mut self, decisions: &mut Vec<DecisionFrame>) -> bool {
        while let Some(frame) = decisions.last_mut() {
            if frame.flipped {
                decisions.pop();
                continue;
            }
            self.trail.undo_to(frame.trail_mark);
            self.propagation_cursor = frame.trail_mark;
            frame.flipped = true;
            let opposite = -frame.branch_lit;
            let result = self.trail.assign(opposite);
            debug_assert_eq!(result, AssignResult::Ok);
            return true;
        }
        false
    }

    fn check_assignment(&self, model: &Model) -> bool {
        self.clause_db.iter().all(|cls| {
            cls.iter().any(|&lit| {
                let v = model.value(lit.var().get());
                v == lit.is_pos()
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `time_limit = Some(Duration::ZERO)` is a real, already-exceeded limit, not a
    /// disabled one. Enough unconstrained variables guarantee more than
    /// `TIME_CHECK_INTERVAL` main-loop iterations before a verdict, so the first
    /// periodic check must fire.
    #[test]
    fn zero_time_limit_times_out() {
        let mut solver = Solver::new(Vec::<Vec<i32>>::new(), 2000).unwrap();
        let outcome = solver.solve(&SolveConfig {
            time_limit: Some(Duration::ZERO),
            branch_mode: BranchMode::Static,
            seed: 0,
        });
        assert!(outcome.is_timeout());
    }

    #[test]
    fn no_time_limit_runs_to_completion() {
        let mut solver = Solver::new(Vec::<Vec<i32>>::new(), 2000).unwrap();
        let outcome = solver.solve(&SolveConfig {
            time_limit: None,
            branch_mode: BranchMode::Static,
            seed: 0,
        });
        assert!(outcome.is_sat());
    }
}
