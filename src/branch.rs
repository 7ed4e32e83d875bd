//! Branching heuristics.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::clause::ClauseStore;
use crate::data::{Lit, LitVec, Var};
use crate::trail::{Trail, Value};

/// Heuristic selected per `solve` call (the `branch_mode` configuration option).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchMode {
    Static,
    Random,
    TwoClause,
}

/// Immutable, precomputed literal-occurrence table built once at construction. No
/// decay, no updates during search.
struct OccurrenceTable {
    count: LitVec<u32>,
    /// Monotonically increasing "first seen" index; smaller means earlier. Used to
    /// break ties deterministically: earlier occurrence wins.
    first_seen: LitVec<u32>,
}

impl OccurrenceTable {
    fn build(store: &ClauseStore) -> Self {
        let mut count = LitVec::new();
        let mut first_seen = LitVec::new();
        for v in 1..=store.num_vars() {
            let v = v as i32;
            count.expand(Lit::new(v), 0);
            count.expand(Lit::new(-v), 0);
            first_seen.expand(Lit::new(v), u32::MAX);
            first_seen.expand(Lit::new(-v), u32::MAX);
        }

        let mut next_order = 0u32;
        for cls in store.iter() {
            for &lit in cls {
                count[lit] += 1;
                if first_seen[lit] == u32::MAX {
                    first_seen[lit] = next_order;
                    next_order += 1;
                }
            }
        }

        Self { count, first_seen }
    }

    /// Pick the literal with the highest occurrence count among `candidates`, breaking
    /// ties by first-occurrence order (earliest wins).
    fn best<I: IntoIterator<Item = Lit>>(&self, candidates: I) -> Option<Lit> {
        candidates
            .into_iter()
            .map(|lit| (lit, self.count[lit], self.first_seen[lit]))
            .min_by_key(|&(_, count, first_seen)| (std::cmp::Reverse(count), first_seen))
            .map(|(lit, _, _)| lit)
    }
}

pub struct Brancher {
    mode: BranchMode,
    table: OccurrenceTable,
    rng: SmallRng,
}

impl Brancher {
    pub fn new(store: &ClauseStore, mode: BranchMode, seed: u64) -> Self {
        Self {
            mode,
            table: OccurrenceTable::build(store),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn pick(&mut self, store: &ClauseStore, trail: &Trail) -> Option<Lit> {
        match self.mode {
            BranchMode::Static => self.pick_static(trail),
            BranchMode::Random => self.pick_random(trail),
            BranchMode::TwoClause => self
                .pick_two_clause(store, trail)
                .or_else(|| self.pick_static(trail)),
        }
    }

    fn pick_static(&self, trail: &Trail) -> Option<Lit> {
        let candidates = (1..=trail.num_vars() as i32)
            .filter_map(|v| {
                let pos = Lit::from(Var::new(v));
                trail.is_unassigned(pos).then_some([pos, -pos])
            })
            .flatten();
        self.table.best(candidates)
    }

    fn pick_random(&mut self, trail: &Trail) -> Option<Lit> {
        let unassigned: Vec<Var> = (1..=trail.num_vars() as i32)
            .map(Var::new)
            .filter(|&v| trail.is_unassigned(Lit::from(v)))
            .collect();

        let var = *unassigned.get(self.rng.gen_range(0..unassigned.len().max(1)))?;
        let positive = self.rng.gen_bool(0.5);
        let lit = Lit::from(var);
        Some(if positive { lit } else { -lit })
    }

    fn pick_two_clause(&self, store: &ClauseStore, trail: &Trail) -> Option<Lit> {
        let mut candidates = Vec::new();
        for cls in store.iter() {
            if trail.is_clause_satisfied(cls) {
                continue;
            }
            let mut unassigned = cls.iter().copied().filter(|&lit| trail.is_unassigned(lit));
            let (Some(a), Some(b), None) =
                (unassigned.next(), unassigned.next(), unassigned.next())
            else {
                continue;
            };
            candidates.push(a);
            candidates.push(b);
        }
        self.table.best(candidates)
    }
}
