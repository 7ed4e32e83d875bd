//! Random 3-SAT generator: reproducible, parameterized by `(L, N, seed)`.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::ConfigError;

/// A reproducible random 3-SAT instance generator. Two instances built with the same
/// `(num_vars, num_clauses, seed)` produce identical clause lists.
pub struct Random3Sat {
    num_vars: u32,
    num_clauses: u32,
    seed: u64,
}

impl Random3Sat {
    pub fn new(num_vars: u32, num_clauses: u32, seed: u64) -> Result<Self, ConfigError> {
        if num_vars < 3 {
            return Err(ConfigError::TooFewVars(num_vars));
        }
        if num_clauses < 1 {
            return Err(ConfigError::TooFewClauses(num_clauses));
        }
        Ok(Self {
            num_vars,
            num_clauses,
            seed,
        })
    }

    /// Generate `num_clauses` clauses of 3 distinct variables each, sampled uniformly
    /// from `1..=num_vars` without replacement, each independently negated with
    /// probability 0.5.
    pub fn generate(&self) -> Vec<Vec<i32>> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        (0..self.num_clauses)
            .map(|_| {
                let vars = rand::seq::index::sample(&mut rng, self.num_vars as usize, 3);
                (0..3)
                    .map(|i| {
                        let var = vars.index(i) as i32 + 1;
                        if rng.gen_bool(0.5) {
                            var
                        } else {
                            -var
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_too_few_vars_or_clauses() {
        assert_eq!(
            Random3Sat::new(2, 10, 0).unwrap_err(),
            ConfigError::TooFewVars(2)
        );
        assert_eq!(
            Random3Sat::new(10, 0, 0).unwrap_err(),
            ConfigError::TooFewClauses(0)
        );
    }

    #[test]
    fn same_seed_is_deterministic() {
        let a = Random3Sat::new(50, 100, 12345).unwrap().generate();
        let b = Random3Sat::new(50, 100, 12345).unwrap().generate();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_usually_differ() {
        let a = Random3Sat::new(50, 100, 1).unwrap().generate();
        let b = Random3Sat::new(50, 100, 2).unwrap().generate();
        assert_ne!(a, b);
    }

    #[test]
    fn each_clause_has_three_distinct_variables() {
        let clauses = Random3Sat::new(10, 50, 7).unwrap().generate();
        for cls in clauses {
            assert_eq!(cls.len(), 3);
            let mut vars: Vec<i32> = cls.iter().map(|l| l.abs()).collect();
            vars.sort_unstable();
            vars.dedup();
            assert_eq!(vars.len(), 3);
        }
    }
}
