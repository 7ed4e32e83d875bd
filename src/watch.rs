//! Watched-literal index.
//!
//! Rather than keeping a separate `w1`/`w2` position array per clause, the two watched
//! literals of a clause of length >= 2 are always stored at positions `0` and `1` of
//! the clause's slice, and the propagator swaps literals into those positions as
//! watches move. This keeps the two watched positions distinct for any non-unit clause
//! without a separate index. Unit clauses (length 1) watch their single literal; empty
//! clauses have no watchers.

use crate::clause::{ClauseIdx, ClauseStore};
use crate::data::{Lit, LitVec, Remaining};

#[derive(Debug, Clone, Copy)]
pub struct Watch {
    pub clause: ClauseIdx,
}

pub struct WatchIndex {
    watchers: LitVec<Vec<Watch>>,
}

impl WatchIndex {
    /// Build the index once from a constructed clause store.
    pub fn build(store: &ClauseStore) -> Self {
        let mut watchers = LitVec::new();
        for v in 1..=store.num_vars() {
            let v = v as i32;
            watchers.expand(Lit::new(v), Vec::new());
            watchers.expand(Lit::new(-v), Vec::new());
        }

        let mut index = Self { watchers };
        for idx in store.indices() {
            let cls = store.clause(idx);
            match cls.len() {
                0 => {}
                1 => index.watchers[cls[0]].push(Watch { clause: idx }),
                _ => {
                    index.watchers[cls[0]].push(Watch { clause: idx });
                    index.watchers[cls[1]].push(Watch { clause: idx });
                }
            }
        }
        index
    }

    pub fn watchers(&self, lit: Lit) -> &[Watch] {
        &self.watchers[lit]
    }

    /// The watcher list for `lit`, plus a handle to push moved watches onto any other
    /// literal's list while `lit`'s list is being drained/mutated in place.
    pub fn remaining(&mut self, lit: Lit) -> (&mut Vec<Watch>, Remaining<'_, Vec<Watch>>) {
        self.watchers.remaining(lit)
    }
}
