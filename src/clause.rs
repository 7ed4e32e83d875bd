//! Flat clause store.
//!
//! Clauses are stored contiguously in a single buffer; `offsets[i]..offsets[i + 1]` is
//! clause `i`'s slice. Clauses are immutable in length after construction, but the
//! *order* of literals within a clause is mutated in place by the propagator as it moves
//! watched positions, hence `clause_mut`.

use crate::data::Lit;
use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClauseIdx(u32);

impl ClauseIdx {
    pub fn from_index(i: usize) -> Self {
        ClauseIdx(i as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Default)]
pub struct ClauseStore {
    lits: Vec<Lit>,
    offsets: Vec<u32>,
    num_vars: u32,
}

impl ClauseStore {
    /// Build the store from a list of clauses, each a sequence of nonzero signed
    /// integer literals. Rejects clauses referencing a variable outside `1..=num_vars`
    /// or containing a zero literal. Clauses of length zero are accepted (the caller,
    /// the `Solver`, treats their presence as immediate UNSAT).
    pub fn new<I, C>(clauses: I, num_vars: u32) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = C>,
        C: IntoIterator<Item = i32>,
    {
        let mut lits = Vec::new();
        let mut offsets = vec![0u32];

        for cls in clauses {
            for raw in cls {
                if raw == 0 {
                    return Err(ConfigError::ZeroLiteral);
                }
                let var = raw.unsigned_abs();
                if var > num_vars {
                    return Err(ConfigError::VarOutOfRange {
                        lit: raw,
                        var,
                        num_vars,
                    });
                }
                lits.push(Lit::new(raw));
            }
            offsets.push(lits.len() as u32);
        }

        Ok(Self {
            lits,
            offsets,
            num_vars,
        })
    }

    pub fn num_vars(&self) -> u32 {
        self.num_vars
    }

    pub fn num_clauses(&self) -> usize {
        self.offsets.len() - 1
    }

    pub fn clause(&self, idx: ClauseIdx) -> &[Lit] {
        let (start, end) = self.bounds(idx);
        &self.lits[start..end]
    }

    pub fn clause_mut(&mut self, idx: ClauseIdx) -> &mut [Lit] {
        let (start, end) = self.bounds(idx);
        &mut self.lits[start..end]
    }

    pub fn iter(&self) -> impl Iterator<Item = &[Lit]> + '_ {
        (0..self.num_clauses()).map(|i| self.clause(ClauseIdx(i as u32)))
    }

    pub fn indices(&self) -> impl Iterator<Item = ClauseIdx> {
        (0..self.num_clauses() as u32).map(ClauseIdx)
    }

    /// Any clause with no literals at all: the formula is trivially UNSAT.
    pub fn has_empty_clause(&self) -> bool {
        self.iter().any(|cls| cls.is_empty())
    }

    fn bounds(&self, idx: ClauseIdx) -> (usize, usize) {
        let i = idx.index();
        debug_assert!(i + 1 < self.offsets.len());
        (self.offsets[i] as usize, self.offsets[i + 1] as usize)
    }
}
