//! Configuration/input-format error taxonomy.
//!
//! Every error here is raised at construction time (clause store, DIMACS parsing, the
//! 3-SAT generator). Nothing on the solve path (propagation, search, heuristics) returns
//! a `Result`. `Sat`, `Unsat` and `Timeout` are normal outcomes. A runtime invariant
//! violation is a bug, surfaced via `debug_assert!`/`unreachable!`, not a caller-facing
//! error.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("literal {lit} references variable {var}, but only {num_vars} variables were declared")]
    VarOutOfRange { lit: i32, var: u32, num_vars: u32 },

    #[error("clause contains a zero literal, which is not a valid literal")]
    ZeroLiteral,

    #[error("random 3-SAT generator requires num_vars >= 3, got {0}")]
    TooFewVars(u32),

    #[error("random 3-SAT generator requires at least one clause (L >= 1), got {0}")]
    TooFewClauses(u32),

    #[error("DIMACS input is missing a `p cnf <vars> <clauses>` problem line")]
    MissingProblemLine,

    #[error("malformed DIMACS token {token:?}: {source}")]
    MalformedToken {
        token: String,
        #[source]
        source: std::num::ParseIntError,
    },
}
