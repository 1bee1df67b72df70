//! Recovery from a conflict: retraction of decision levels, and the
//! installation of a clause derived by analysis.
//!
//! The backjump target of an asserting clause is the second highest
//! decision level among its literals, the deepest level on which the
//! clause is unit. After retraction the clause is stored with its
//! asserted literal in position zero (the position the locked check of
//! reduction inspects), and the assertion is queued for propagation.

use crate::{
    context::GenericContext,
    db::LevelIndex,
    misc::log::targets::{self},
    structures::clause::CClause,
    types::err::ErrorKind,
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Retracts every assignment above the target level.
    ///
    /// Retraction clears the value, level, and reason of each atom
    /// assigned above the target; saved phases are kept. A target at or
    /// above the current level retracts nothing.
    pub fn backjump(&mut self, target: LevelIndex) {
        log::trace!(target: targets::BACKJUMP, "Backjump from {} to {target}", self.trail.level());

        let Some(&cut) = self.trail.level_breaks.get(target as usize + 1) else {
            return;
        };
        for literal in self.trail.assignments.split_off(cut) {
            self.atom_db.drop_value(literal.atom());
        }
        self.trail.level_breaks.truncate(target as usize + 1);
        // Assignments below the cut which still await propagation keep
        // their place in the queue.
        self.trail.head = std::cmp::min(self.trail.head, cut);
    }

    /// Backjumps on an asserting clause, stores it, and queues its
    /// assertion.
    ///
    /// To be called with the clause derived by analysis: exactly one
    /// literal at the current level, every other literal at some lower
    /// level.
    pub fn install_assertion(&mut self, clause: CClause) -> Result<(), ErrorKind> {
        let conflict_level = self.trail.level();

        let mut asserted_position: Option<usize> = None;
        let mut second_level: LevelIndex = 0;
        for (position, literal) in clause.iter().enumerate() {
            let Some(level) = self.atom_db.decision_level_of(literal.atom()) else {
                return Err(ErrorKind::Backjump);
            };
            if level == conflict_level {
                asserted_position = Some(position);
            } else if level > second_level {
                second_level = level;
            }
        }
        let Some(asserted_position) = asserted_position else {
            return Err(ErrorKind::NoAssertion);
        };
        let asserted = clause[asserted_position];

        self.backjump(second_level);

        let mut clause = clause;
        clause.swap(0, asserted_position);
        let key = self.clause_db.store_addition(clause, &mut self.atom_db);

        self.atom_db.set_value(asserted, second_level, Some(key));
        self.trail.store(asserted);
        debug_assert_eq!(self.trail.head, self.trail.assignments.len() - 1);

        Ok(())
    }
}
