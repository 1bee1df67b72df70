//! End-to-end solves of DIMACS formulas, with verdicts checked against
//! the formulas and satisfying valuations checked clause by clause.

use wren_sat::{config::Config, context::Context, reports::Report, types::err::BuildError};

fn context_on(dimacs: &str) -> Context {
    let mut ctx = Context::from_config(Config::default());
    assert!(ctx.read_dimacs(dimacs.as_bytes()).is_ok());
    ctx
}

/// Every clause holds some literal true on the context's valuation.
fn satisfies(clauses: &[Vec<i32>], ctx: &Context) -> bool {
    clauses.iter().all(|clause| {
        clause.iter().any(|int| {
            match ctx.value_of(int.unsigned_abs()) {
                Some(value) => value == (*int > 0),
                None => false,
            }
        })
    })
}

mod scenarios {
    use super::*;

    #[test]
    fn single_unit() {
        let mut ctx = context_on("p cnf 1 1\n1 0\n");
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert!(satisfies(&[vec![1]], &ctx));
    }

    #[test]
    fn opposed_units() {
        let mut ctx = Context::from_config(Config::default());
        assert_eq!(
            ctx.read_dimacs("p cnf 1 2\n1 0\n-1 0\n".as_bytes()),
            Err(BuildError::Unsatisfiable)
        );
        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn implication_chain() {
        let the_clauses = [vec![1, 2], vec![-1, 2], vec![-2, 3]];
        let mut ctx = context_on("p cnf 3 3\n1 2 0\n-1 2 0\n-2 3 0\n");
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert!(satisfies(&the_clauses, &ctx));
    }

    #[test]
    fn units_excluded_pairwise() {
        let mut ctx = context_on("p cnf 2 3\n1 0\n2 0\n-1 -2 0\n");
        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn unit_forces_conflict_through_chain() {
        // ¬3 settles 3, then 2, then 1, and the remaining clause
        // rejects the only valuation left.
        let mut ctx = context_on("p cnf 3 4\n1 2 3 0\n-1 2 0\n-2 3 0\n-3 0\n");
        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn unsatisfiable_block_beside_satisfiable_block() {
        // The four clauses over 1 and 2 are unsatisfiable on their own.
        let mut ctx = context_on(
            "p cnf 4 6\n1 2 0\n-1 2 0\n1 -2 0\n-1 -2 0\n3 4 0\n-3 -4 0\n",
        );
        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn comments_and_split_clauses() {
        let the_clauses = [vec![1, 2, 3], vec![-2, -3]];
        let mut ctx = context_on(
            "c A clause may end on a later line.\np cnf 3 2\n1 2\n3 0\nc Another comment.\n-2 -3 0\n",
        );
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert!(satisfies(&the_clauses, &ctx));
    }

    #[test]
    fn identical_runs_identical_valuations() {
        let dimacs = "p cnf 4 6\n1 2 0\n-1 3 0\n-3 -2 0\n2 4 0\n-4 1 0\n-1 -4 0\n";

        let mut first = context_on(dimacs);
        let first_report = first.solve();

        let mut second = context_on(dimacs);
        let second_report = second.solve();

        assert_eq!(first_report, second_report);
        assert_eq!(first.valuation_string(), second.valuation_string());
    }
}

mod malformed {
    use super::*;
    use wren_sat::types::err::ParseError;

    #[test]
    fn clause_before_header() {
        let mut ctx = Context::from_config(Config::default());
        assert_eq!(
            ctx.read_dimacs("1 2 0\n".as_bytes()),
            Err(BuildError::Parse(ParseError::MissingHeader))
        );
    }

    #[test]
    fn unterminated_clause() {
        let mut ctx = Context::from_config(Config::default());
        assert_eq!(
            ctx.read_dimacs("p cnf 2 1\n1 2\n".as_bytes()),
            Err(BuildError::Parse(ParseError::UnterminatedClause))
        );
    }

    #[test]
    fn unreadable_token() {
        let mut ctx = Context::from_config(Config::default());
        assert_eq!(
            ctx.read_dimacs("p cnf 2 1\n1 two 0\n".as_bytes()),
            Err(BuildError::Parse(ParseError::UnreadableToken))
        );
    }

    #[test]
    fn header_shape() {
        let mut ctx = Context::from_config(Config::default());
        assert_eq!(
            ctx.read_dimacs("p cnf two 1\n".as_bytes()),
            Err(BuildError::Parse(ParseError::MalformedHeader))
        );
    }
}
