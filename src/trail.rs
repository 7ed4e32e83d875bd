//! Assignment and trail.

use crate::data::{Lit, Var, VarVec};

/// Tri-state value of a literal under the current assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    True,
    False,
    Unassigned,
}

/// Outcome of [`Trail::assign`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignResult {
    Ok,
    Conflict,
}

/// Per-variable tri-state assignment plus the ordered trail of assigned variables.
///
/// The trail doubles as the propagation queue: entries at or past the propagation
/// cursor (tracked by the caller, see `Solver::propagate`) are "newly assigned" and
/// their negated literal is the "newly false" literal the propagator must process.
#[derive(Default)]
pub struct Trail {
    assignment: VarVec<Option<bool>>,
    trail: Vec<Var>,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expand(&mut self, v: Var) {
        self.assignment.expand(v, None);
    }

    pub fn num_vars(&self) -> usize {
        self.assignment.len()
    }

    /// Number of variables currently assigned, also the current trail length.
    pub fn len(&self) -> usize {
        self.trail.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trail.is_empty()
    }

    /// Current trail length, usable later with [`Trail::undo_to`].
    pub fn mark(&self) -> usize {
        self.trail.len()
    }

    pub fn value(&self, lit: Lit) -> Value {
        match self.assignment[lit.var()] {
            None => Value::Unassigned,
            Some(sign) if sign == lit.is_pos() => Value::True,
            Some(_) => Value::False,
        }
    }

    pub fn is_satisfied(&self, lit: Lit) -> bool {
        self.value(lit) == Value::True
    }

    pub fn is_falsified(&self, lit: Lit) -> bool {
        self.value(lit) == Value::False
    }

    pub fn is_unassigned(&self, lit: Lit) -> bool {
        self.value(lit) == Value::Unassigned
    }

    pub fn is_clause_satisfied(&self, clause: &[Lit]) -> bool {
        clause.iter().any(|&lit| self.is_satisfied(lit))
    }

    /// Assign `lit` true. Returns `Conflict` if its variable is already assigned the
    /// opposite way; a lit already assigned consistently is a no-op `Ok`.
    pub fn assign(&mut self, lit: Lit) -> AssignResult {
        match self.assignment[lit.var()] {
            None => {
                self.assignment[lit.var()] = Some(lit.is_pos());
                self.trail.push(lit.var());
                AssignResult::Ok
            }
            Some(sign) if sign == lit.is_pos() => AssignResult::Ok,
            Some(_) => AssignResult::Conflict,
        }
    }

    /// The literal (signed) that was made true at trail position `pos`.
    pub fn lit_at(&self, pos: usize) -> Lit {
        let var = self.trail[pos];
        let sign = self.assignment[var].expect("trail entries are always assigned");
        if sign {
            Lit::from(var)
        } else {
            -Lit::from(var)
        }
    }

    /// Pop trail entries until the trail length equals `mark`, clearing each popped
    /// variable back to unassigned.
    pub fn undo_to(&mut self, mark: usize) {
        while self.trail.len() > mark {
            let var = self.trail.pop().expect("len checked above");
            self.assignment[var] = None;
        }
    }

    pub fn assignment_complete(&self) -> bool {
        self.trail.len() == self.assignment.len()
    }

    /// First unassigned variable in index order. Branching heuristics that need a
    /// different order scan the assignment themselves; this is only the trivial
    /// fallback used when no heuristic-specific candidate exists.
    pub fn find_unassigned_variable(&self) -> Option<Var> {
        self.assignment
            .iter_with_var()
            .find(|&(_, val)| val.is_none())
            .map(|(var, _)| var)
    }

    /// A complete model, one bool per variable `1..=num_vars`.
    pub fn model(&self) -> Vec<bool> {
        (1..=self.num_vars())
            .map(|v| {
                self.assignment[Var::new(v as i32)]
                    .expect("model requested before assignment is complete")
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trail_with_vars(n: i32) -> Trail {
        let mut t = Trail::new();
        t.expand(Var::new(n));
        t
    }

    #[test]
    fn assign_then_undo_clears_value() {
        let mut t = trail_with_vars(3);
        let mark = t.mark();
        assert_eq!(t.assign(Lit::new(2)), AssignResult::Ok);
        assert!(t.is_satisfied(Lit::new(2)));
        t.undo_to(mark);
        assert!(t.is_unassigned(Lit::new(2)));
    }

    #[test]
    fn reassigning_same_sign_is_ok_opposite_is_conflict() {
        let mut t = trail_with_vars(3);
        assert_eq!(t.assign(Lit::new(1)), AssignResult::Ok);
        assert_eq!(t.assign(Lit::new(1)), AssignResult::Ok);
        assert_eq!(t.assign(Lit::new(-1)), AssignResult::Conflict);
    }
}
