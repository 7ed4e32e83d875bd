//! Integration tests over DIMACS fixtures: named scenarios via `include_str!`, plus a
//! directory walk that sweeps every fixture under `cnf_examples/` through an
//! independent model-verifier.

use std::path::Path;

use satstudy::{parse_dimacs, BranchMode, SolveConfig, Solver};

fn solve_dimacs(text: &str, mode: BranchMode) -> (Solver, satstudy::SolveOutcome) {
    let cnf = parse_dimacs(text).unwrap();
    let mut solver = Solver::new(cnf.clauses, cnf.num_vars).unwrap();
    let outcome = solver.solve(&SolveConfig {
        time_limit: None,
        branch_mode: mode,
        seed: 0,
    });
    (solver, outcome)
}

fn assert_model_satisfies(text: &str, model: &satstudy::Model) {
    let cnf = parse_dimacs(text).unwrap();
    for cls in &cnf.clauses {
        assert!(
            cls.iter()
                .any(|&lit| model.value(lit.unsigned_abs()) == (lit > 0)),
            "clause {cls:?} is not satisfied by the returned model"
        );
    }
}

#[test]
fn tiny_sat_fixture_is_satisfiable() {
    let text = include_str!("cnf_examples/tiny_sat.dimacs");
    let (_, outcome) = solve_dimacs(text, BranchMode::Static);
    let model = outcome.unwrap_sat();
    assert_model_satisfies(text, &model);
}

#[test]
fn tiny_unsat_fixture_is_unsatisfiable() {
    let text = include_str!("cnf_examples/tiny_unsat.dimacs");
    let (_, outcome) = solve_dimacs(text, BranchMode::Static);
    assert!(outcome.is_unsat());
}

/// The Einstein five-houses puzzle's unique solution places the fish with the German.
#[test]
fn einstein_puzzle_places_fish_with_german() {
    let text = include_str!("cnf_examples/einstein.dimacs");
    let cnf = parse_dimacs(text).unwrap();
    assert_eq!(cnf.num_vars, 125);

    for mode in [BranchMode::Static, BranchMode::Random, BranchMode::TwoClause] {
        let (_, outcome) = solve_dimacs(text, mode);
        let model = outcome.unwrap_sat();
        assert_model_satisfies(text, &model);

        // Variable numbering follows `buildMap` in the original encoder: 5 categories
        // (colors, nationalities, drinks, cigars, pets) of 5 values x 5 houses each,
        // assigned contiguously. `german` is nationality (category 1) value 4; `fish`
        // is pets (category 4) value 3 (all 0-indexed).
        let german_house = find_true_house(&model, 1 * 25 + 4 * 5);
        let fish_house = find_true_house(&model, 4 * 25 + 3 * 5);
        assert_eq!(
            german_house, fish_house,
            "mode {mode:?}: German's house ({german_house}) should own the fish ({fish_house})"
        );
    }
}

/// Returns the (1-indexed) house for which the variable block starting at
/// `base_offset` (0-indexed into the 125-variable encoding) is true.
fn find_true_house(model: &satstudy::Model, base_offset: usize) -> usize {
    (1..=5)
        .find(|&house| model.value((base_offset + house) as u32))
        .expect("exactly one house should be true for a fully-determined category value")
}

/// Sweep every `.dimacs` fixture in `cnf_examples/` and verify that any `Sat` result
/// is an independently-checked satisfying model.
#[test]
fn all_fixtures_produce_verified_models() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/cnf_examples");
    let mut checked = 0;
    for entry in std::fs::read_dir(&dir).unwrap() {
        let path = entry.unwrap().path();
        if path.extension().and_then(|e| e.to_str()) != Some("dimacs") {
            continue;
        }
        let text = std::fs::read_to_string(&path).unwrap();
        let cnf = parse_dimacs(&text).unwrap();
        let mut solver = Solver::new(cnf.clauses, cnf.num_vars).unwrap();
        let outcome = solver.solve(&SolveConfig {
            time_limit: Some(std::time::Duration::from_secs(10)),
            branch_mode: BranchMode::TwoClause,
            seed: 0,
        });
        if let satstudy::SolveOutcome::Sat(model) = outcome {
            assert_model_satisfies(&text, &model);
        }
        checked += 1;
    }
    assert!(checked >= 3, "expected at least the three checked-in fixtures");
}

/// Re-running `solve` on the same instance with the same `(mode, seed)` reproduces
/// `split_count` and the model.
#[test]
fn same_mode_and_seed_reproduces_split_count_and_model() {
    let text = include_str!("cnf_examples/einstein.dimacs");
    let cnf = parse_dimacs(text).unwrap();

    for mode in [BranchMode::Static, BranchMode::Random, BranchMode::TwoClause] {
        let config = SolveConfig {
            time_limit: None,
            branch_mode: mode,
            seed: 7,
        };

        let mut solver_a = Solver::new(cnf.clauses.clone(), cnf.num_vars).unwrap();
        let outcome_a = solver_a.solve(&config);
        let stats_a = solver_a.stats();

        let mut solver_b = Solver::new(cnf.clauses.clone(), cnf.num_vars).unwrap();
        let outcome_b = solver_b.solve(&config);
        let stats_b = solver_b.stats();

        assert_eq!(stats_a.split_count, stats_b.split_count, "mode {mode:?}");
        assert_eq!(outcome_a, outcome_b, "mode {mode:?}");
    }
}

/// Completeness: brute-force check that a small `Unsat` formula truly has no
/// satisfying assignment.
#[test]
fn unsat_result_matches_brute_force_on_small_instance() {
    let clauses: Vec<Vec<i32>> = vec![
        vec![1, 2, 3],
        vec![1, 2, -3],
        vec![1, -2, 3],
        vec![1, -2, -3],
        vec![-1, 2, 3],
        vec![-1, 2, -3],
        vec![-1, -2, 3],
        vec![-1, -2, -3],
    ];
    let num_vars = 3u32;

    let mut solver = Solver::new(clauses.clone(), num_vars).unwrap();
    let outcome = solver.solve(&SolveConfig {
        time_limit: None,
        branch_mode: BranchMode::Static,
        seed: 0,
    });
    assert!(outcome.is_unsat());
    assert!(!brute_force_satisfiable(&clauses, num_vars));
}

fn brute_force_satisfiable(clauses: &[Vec<i32>], num_vars: u32) -> bool {
    let total = 1u32 << num_vars;
    (0..total).any(|bits| {
        let value = |v: u32| -> bool { (bits >> (v - 1)) & 1 == 1 };
        clauses.iter().all(|cls| {
            cls.iter()
                .any(|&lit| value(lit.unsigned_abs()) == (lit > 0))
        })
    })
}
