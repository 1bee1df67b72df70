//! Search-level behaviour: clause learning under pressure from
//! restarts and database reduction, on pigeonhole formulas.
//!
//! Pigeonhole formulas place p pigeons in h holes, at most one pigeon
//! to a hole. With p > h every valuation fails, and short thresholds
//! force plenty of conflicts, restarts, and reductions on the way to
//! the verdict.

use wren_sat::{config::Config, context::Context, reports::Report, structures::literal::Literal};

/// Clauses placing each of `pigeons` in one of `holes`, no two to the
/// same hole. The atom for pigeon p and hole h is p·holes + h + 1.
fn pigeonhole(pigeons: usize, holes: usize) -> (u32, Vec<Vec<i32>>) {
    let atom = |p: usize, h: usize| (p * holes + h + 1) as i32;

    let mut clauses = Vec::new();
    for p in 0..pigeons {
        clauses.push((0..holes).map(|h| atom(p, h)).collect());
    }
    for h in 0..holes {
        for first in 0..pigeons {
            for second in first + 1..pigeons {
                clauses.push(vec![-atom(first, h), -atom(second, h)]);
            }
        }
    }
    ((pigeons * holes) as u32, clauses)
}

fn context_on(config: Config, atoms: u32, clauses: &[Vec<i32>]) -> Context {
    let mut ctx = Context::from_config(config);
    ctx.declare_atoms(atoms);
    for clause in clauses {
        let the_clause = clause.iter().map(|int| Literal::from_dimacs(*int)).collect();
        assert!(ctx.add_clause(the_clause).is_ok());
    }
    ctx
}

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

mod search {
    use super::*;

    #[test]
    fn pigeons_over_holes() {
        let (atoms, clauses) = pigeonhole(4, 3);
        let mut ctx = context_on(Config::default(), atoms, &clauses);

        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
        assert!(ctx.counters.conflicts > 0);
    }

    #[test]
    fn pigeons_matching_holes() {
        let (atoms, clauses) = pigeonhole(4, 4);
        let mut ctx = context_on(Config::default(), atoms, &clauses);

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert!(satisfies(&clauses, &ctx));
    }

    #[test]
    fn frequent_restarts() {
        let (atoms, clauses) = pigeonhole(4, 3);
        let config = Config {
            restart_initial: 2,
            ..Config::default()
        };
        let mut ctx = context_on(config, atoms, &clauses);

        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
        assert!(ctx.counters.restarts > 0);
    }

    #[test]
    fn frequent_reduction() {
        let (atoms, clauses) = pigeonhole(4, 3);
        let config = Config {
            reduction_interval: 5,
            ..Config::default()
        };
        let mut ctx = context_on(config, atoms, &clauses);

        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
        assert!(ctx.counters.reductions > 0);
    }

    #[test]
    fn restarts_and_reduction_together() {
        let (atoms, clauses) = pigeonhole(5, 4);
        let config = Config {
            restart_initial: 2,
            reduction_interval: 3,
            ..Config::default()
        };
        let mut ctx = context_on(config, atoms, &clauses);

        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn satisfiable_under_pressure() {
        let (atoms, clauses) = pigeonhole(5, 5);
        let config = Config {
            restart_initial: 2,
            reduction_interval: 3,
            ..Config::default()
        };
        let mut ctx = context_on(config, atoms, &clauses);

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert!(satisfies(&clauses, &ctx));
    }

    #[test]
    fn units_survive_restarts() {
        // The unit holds at level zero, which restarts do not touch.
        let (atoms, mut clauses) = pigeonhole(4, 3);
        clauses.push(vec![-1]);
        let config = Config {
            restart_initial: 2,
            ..Config::default()
        };
        let mut ctx = context_on(config, atoms, &clauses);

        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
        assert_eq!(ctx.value_of(1), Some(false));
    }

    #[test]
    fn conflict_counts_agree_across_runs() {
        let (atoms, clauses) = pigeonhole(4, 3);

        let mut first = context_on(Config::default(), atoms, &clauses);
        let first_report = first.solve();

        let mut second = context_on(Config::default(), atoms, &clauses);
        let second_report = second.solve();

        assert_eq!(first_report, second_report);
        assert_eq!(first.counters.conflicts, second.counters.conflicts);
        assert_eq!(first.counters.decisions, second.counters.decisions);
    }
}
