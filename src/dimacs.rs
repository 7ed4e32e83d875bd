//! Thin DIMACS CNF reader/writer. DIMACS parsing/serialization is an external
//! collaborator to the solver core, but the interface has to exist somewhere for the
//! core to be usable from a file, so it lives here.

use crate::data::Lit;
use crate::error::ConfigError;

/// A parsed DIMACS document: the declared (or inferred) variable count and the
/// clauses in file order, each a sequence of signed nonzero integer literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimacsCnf {
    pub num_vars: u32,
    pub clauses: Vec<Vec<i32>>,
}

/// Parse a DIMACS CNF document:
/// - `c` lines are comments, ignored.
/// - exactly one `p cnf <num_vars> <num_clauses>` problem line.
/// - clauses are whitespace-separated nonzero integers terminated by `0`; a clause
///   may span multiple lines; blank lines are ignored.
/// - if the declared `num_vars` is `0` or the problem line doesn't carry one, it is
///   inferred as the maximum `|literal|` seen.
pub fn parse(input: &str) -> Result<DimacsCnf, ConfigError> {
    let mut declared_vars: Option<u32> = None;
    let mut saw_problem_line = false;
    let mut tokens: Vec<i32> = Vec::new();

    for raw_line in input.lines() {
        let line = raw_line.trim_start();
        if line.is_empty() || line.starts_with('c') {
            continue;
        }
        if line.starts_with('p') {
            declared_vars = line
                .split_whitespace()
                .nth(2)
                .and_then(|tok| tok.parse::<u32>().ok());
            saw_problem_line = true;
            continue;
        }

        for tok in line.split_whitespace() {
            let n: i32 = tok
                .parse()
                .map_err(|source| ConfigError::MalformedToken {
                    token: tok.to_string(),
                    source,
                })?;
            tokens.push(n);
        }
    }

    if !saw_problem_line {
        return Err(ConfigError::MissingProblemLine);
    }

    let mut clauses = Vec::new();
    let mut current = Vec::new();
    let mut max_var = 0u32;
    for tok in tokens {
        if tok == 0 {
            clauses.push(std::mem::take(&mut current));
        } else {
            max_var = max_var.max(tok.unsigned_abs());
            current.push(tok);
        }
    }
    if !current.is_empty() {
        // Tolerate a final clause missing its terminating 0.
        clauses.push(current);
    }

    let num_vars = match declared_vars {
        Some(v) if v > 0 => v,
        _ => max_var,
    };

    Ok(DimacsCnf { num_vars, clauses })
}

/// Serialize clauses back to DIMACS text, one clause per line.
pub fn write<'a>(num_vars: u32, clauses: impl IntoIterator<Item = &'a [Lit]>) -> String {
    let clauses: Vec<&[Lit]> = clauses.into_iter().collect();
    let mut out = format!("p cnf {} {}\n", num_vars, clauses.len());
    for cls in clauses {
        for lit in cls {
            out.push_str(&lit.get().to_string());
            out.push(' ');
        }
        out.push_str("0\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comments_and_multiline_clauses() {
        let input = "\
        c a comment\n\
        p cnf 3 3\n\
        1 -2 -3 0\n\
        2 3\n\
        1 0\n\
        1 0\n\
        2 0\n";

        let cnf = parse(input).unwrap();
        assert_eq!(cnf.num_vars, 3);
        assert_eq!(
            cnf.clauses,
            vec![vec![1, -2, -3], vec![2, 3, 1], vec![1], vec![2]]
        );
    }

    #[test]
    fn infers_num_vars_when_declared_as_zero() {
        let input = "p cnf 0 2\n1 2 0\n-3 0\n";
        let cnf = parse(input).unwrap();
        assert_eq!(cnf.num_vars, 3);
    }

    #[test]
    fn missing_problem_line_is_an_error() {
        assert_eq!(parse("1 2 0\n").unwrap_err(), ConfigError::MissingProblemLine);
    }

    #[test]
    fn roundtrips_through_write_and_parse() {
        use crate::clause::{ClauseIdx, ClauseStore};

        let store = ClauseStore::new(vec![vec![1, 2, 3], vec![-1, -2]], 3).unwrap();
        let clauses: Vec<&[Lit]> = (0..store.num_clauses())
            .map(|i| store.clause(ClauseIdx::from_index(i)))
            .collect();
        let text = write(3, clauses);

        let reparsed = parse(&text).unwrap();
        assert_eq!(reparsed.num_vars, 3);
        assert_eq!(reparsed.clauses, vec![vec![1, 2, 3], vec![-1, -2]]);
    }
}
