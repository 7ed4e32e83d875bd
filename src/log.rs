//! Trace-level formatting helpers for the propagator and search driver. Plain text
//! only, no ANSI, no direct stdout writes.

use crate::data::Lit;
use crate::trail::Trail;

pub(crate) fn fmt_clause(clause: &[Lit]) -> String {
    clause
        .iter()
        .map(|lit| lit.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn fmt_trail(trail: &Trail) -> String {
    let lits: Vec<String> = (0..trail.len()).map(|pos| trail.lit_at(pos).to_string()).collect();
    format!("[{}]", lits.join(", "))
}
