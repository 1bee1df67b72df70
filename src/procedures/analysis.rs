//! Analysis of a conflict.
//!
//! # Overview
//!
//! Given a clause unsatisfiable on the current valuation, analysis
//! derives a clause which *asserts* some literal at a lower decision
//! level, by resolution with the clauses used to derive the conflict.
//!
//! The working clause starts as the conflict clause. Walking the trail
//! backwards, whenever the complement of an assignment appears in the
//! working clause and the assignment was forced by some clause, the two
//! are resolved on the assignment's atom. Each resolution step trades
//! the complement for the remaining literals of the forcing clause.
//!
//! Resolution stops at the first point at which exactly one literal of
//! the working clause is from the current decision level: the first
//! unique implication point. Every path from the level's decision to
//! the conflict passes through the point's atom, and the derived clause
//! asserts its literal once the level is retracted.
//!
//! # Activity
//!
//! Analysis is also where activity is paid: each clause resolved with
//! (the conflict clause included) receives a bump, each atom of the
//! derived clause receives a bump, and afterwards every atom and every
//! learnt clause activity is scaled down. Repeatedly useful atoms and
//! clauses so hold high activity, and the rest decay.

use crate::{
    context::GenericContext,
    db::ClauseKey,
    misc::log::targets::{self},
    structures::clause::{CClause, Clause},
    types::err::ErrorKind,
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Resolves from the given conflict to a clause asserting at some
    /// lower level.
    ///
    /// To be called only with a conflict found above level zero.
    pub fn conflict_analysis(&mut self, conflict: ClauseKey) -> Result<CClause, ErrorKind> {
        let conflict_level = self.trail.level();
        debug_assert!(conflict_level > 0);
        log::trace!(target: targets::ANALYSIS, "Analysis of {conflict} at level {conflict_level}");

        self.clause_db
            .bump_activity(conflict, self.config.clause_bump);

        // Membership in the working clause, by literal index.
        // Resolved atoms stay marked: a resolved literal cannot recur,
        // as every literal of a reason was false before its assertion.
        let mut seen = vec![false; 2 * self.atom_db.atom_count() + 2];
        let mut resolvent: CClause = Vec::new();
        let mut conflict_level_count: usize = 0;

        let Some(conflict_clause) = self.clause_db.get(conflict) else {
            return Err(ErrorKind::MissingClause(conflict));
        };
        for literal in conflict_clause.literals() {
            if !seen[literal.index()] {
                seen[literal.index()] = true;
                if self.atom_db.decision_level_of(literal.atom()) == Some(conflict_level) {
                    conflict_level_count += 1;
                }
                resolvent.push(literal);
            }
        }

        let mut position = self.trail.assignments.len();
        while conflict_level_count > 1 && position > 0 {
            position -= 1;
            let trail_literal = self.trail.assignments[position];
            let complement = trail_literal.negate();

            if !seen[complement.index()] {
                continue;
            }

            let Some(reason_key) = self.atom_db.reason_of(trail_literal.atom()) else {
                // A decision, with nothing to resolve on.
                continue;
            };

            self.clause_db
                .bump_activity(reason_key, self.config.clause_bump);

            let Some(reason) = self.clause_db.get(reason_key) else {
                return Err(ErrorKind::MissingClause(reason_key));
            };
            for literal in reason.literals() {
                if literal == trail_literal || seen[literal.index()] {
                    continue;
                }
                seen[literal.index()] = true;
                if self.atom_db.decision_level_of(literal.atom()) == Some(conflict_level) {
                    conflict_level_count += 1;
                }
                resolvent.push(literal);
            }

            // Resolve on the trail atom: the complement leaves.
            let Some(complement_position) = resolvent.iter().position(|l| *l == complement) else {
                return Err(ErrorKind::NoAssertion);
            };
            if self.atom_db.decision_level_of(complement.atom()) == Some(conflict_level) {
                conflict_level_count -= 1;
            }
            resolvent.swap_remove(complement_position);
        }

        if conflict_level_count != 1 {
            return Err(ErrorKind::NoAssertion);
        }

        for literal in &resolvent {
            self.atom_db
                .bump_activity(literal.atom(), self.config.atom_bump);
        }
        self.atom_db.decay_activity(self.config.atom_decay);
        self.clause_db.decay_activity(self.config.clause_decay);

        log::trace!(target: targets::ANALYSIS, "Derived: {}", resolvent.as_dimacs());
        Ok(resolvent)
    }
}
