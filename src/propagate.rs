//! Unit propagation.
//!
//! The propagation queue is not materialized separately: the trail itself is the
//! queue. Every entry at or past `propagation_cursor` represents one newly-assigned
//! literal; its negation is the "newly false" literal the algorithm dequeues next.

use tracing::debug;

use crate::log;
use crate::trail::{AssignResult, Value};
use crate::watch::Watch;
use crate::Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PropagateResult {
    Ok,
    Conflict,
}

impl Solver {
    /// Drive unit propagation to a fixed point, or report a conflict. Advances
    /// `propagation_cursor` to the trail length it last saw.
    pub(crate) fn propagate(&mut self) -> PropagateResult {
        let mut pos = self.propagation_cursor;

        while pos < self.trail.len() {
            let true_lit = self.trail.lit_at(pos);
            let false_lit = -true_lit;

            let mut conflict = false;
            let (watch_list, mut remaining) = self.watches.remaining(false_lit);
            let clause_db = &mut self.clause_db;
            let trail = &mut self.trail;

            watch_list.retain(|watch| {
                // Once a conflict is found we stop inspecting clauses but must leave
                // the rest of this watch list untouched (`retain` needs a decision for
                // every element).
                if conflict {
                    return true;
                }

                let cls_idx = watch.clause;
                let cls = clause_db.clause_mut(cls_idx);

                let false_pos = if cls[0] == false_lit {
                    0
                } else {
                    debug_assert_eq!(cls[1], false_lit);
                    1
                };
                let other = cls[1 - false_pos];

                if trail.is_satisfied(other) {
                    return true;
                }

                if let Some(k) = (2..cls.len()).find(|&k| !trail.is_falsified(cls[k])) {
                    let replacement = cls[k];
                    cls.swap(false_pos, k);
                    remaining[replacement].push(Watch { clause: cls_idx });
                    return false;
                }

                match trail.value(other) {
                    Value::False => {
                        debug!(clause = %log::fmt_clause(cls), "conflict");
                        conflict = true;
                        true
                    }
                    Value::Unassigned => {
                        let result = trail.assign(other);
                        debug_assert_eq!(result, AssignResult::Ok);
                        true
                    }
                    Value::True => unreachable!("already handled above"),
                }
            });

            if conflict {
                return PropagateResult::Conflict;
            }
            pos += 1;
        }

        self.propagation_cursor = pos;
        debug_assert_eq!(self.propagation_cursor, self.trail.len());
        PropagateResult::Ok
    }
}
