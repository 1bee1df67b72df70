//! Boolean constraint propagation.
//!
//! # Overview
//!
//! Propagation applies the unit rule exhaustively: whenever every
//! literal of a clause except one is false and the remaining literal
//! has no value, the remaining literal must hold, and its consequences
//! follow in turn.
//!
//! Detection rests on each clause watching two of its literals.
//! Nothing need be known about a clause until a *watched* literal is
//! falsified, so falsifying a literal requires inspecting only the
//! clauses watching its negation. For each such clause:
//!
//! - If the other watched literal is true, the clause is satisfied and
//!   is left alone.
//! - If some unwatched literal is not false, the falsified watch moves
//!   there, and the clause migrates to that literal's watch list.
//! - Otherwise every unwatched literal is false, and the clause either
//!   asserts the other watch (if unvalued) or conflicts with the
//!   valuation (if false).
//!
//! Assignments queued by propagation are appended to the trail and
//! propagated in turn when the frontier reaches them.
//!
//! # A note on the watch list borrow
//!
//! The list under iteration belongs to the atom database, and updating
//! a clause's watch may append to *other* watch lists of the same
//! database. The list under iteration is obtained through a pointer to
//! keep the borrow checker out of the way.
//!
//! This is sound: a moved watch lands on a literal which is not false
//! on the current valuation, while the list under iteration is for a
//! literal which *is* false, so no update touches the borrowed list.
//! Entries are removed only by the iteration itself, with a
//! swap-with-last-then-pop which never advances the cursor over the
//! swapped-in entry.

use crate::{
    context::GenericContext,
    db::clause::stored::WatchUpdate,
    misc::log::targets::{self},
    structures::literal::Literal,
    types::err::BCPError,
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Propagates every assignment on the trail which has not yet been
    /// propagated, including any queued along the way.
    ///
    /// On conflict the frontier is left where it is. The caller either
    /// concludes the solve or backjumps, and a backjump resets the
    /// frontier.
    pub fn propagate(&mut self) -> Result<(), BCPError> {
        while !self.trail.fully_propagated() {
            let literal = self.trail.assignments[self.trail.head];
            log::trace!(target: targets::PROPAGATION, "Propagating {literal}");
            self.bcp(literal)?;
            self.trail.head += 1;
            self.counters.propagations += 1;
        }
        Ok(())
    }

    /// Propagates a single assignment through the clauses watching its
    /// negation.
    pub fn bcp(&mut self, literal: Literal) -> Result<(), BCPError> {
        let falsified = literal.negate();

        // Safety: see the note on the watch list borrow above.
        let list = unsafe { &mut *self.atom_db.watch_list_ptr(falsified.index()) };

        let mut index = 0;
        let mut length = list.len();

        'watch_loop: while index < length {
            let key = list[index];

            let Some(clause) = self.clause_db.get_mut(key) else {
                log::error!(target: targets::PROPAGATION, "Watched clause {key} is not stored.");
                return Err(BCPError::CorruptWatch);
            };

            match clause.update_watch(falsified, &mut self.atom_db) {
                WatchUpdate::Satisfied => {}

                WatchUpdate::Moved => {
                    // The entry was replaced by the last entry of the
                    // list, so the cursor stays put.
                    list.swap_remove(index);
                    length -= 1;
                    continue 'watch_loop;
                }

                WatchUpdate::Asserting(consequence) => {
                    let level = self.trail.level();
                    log::trace!(target: targets::PROPAGATION, "{key} asserts {consequence} at level {level}");
                    self.atom_db.set_value(consequence, level, Some(key));
                    self.trail.store(consequence);
                }

                WatchUpdate::Conflict => {
                    log::trace!(target: targets::PROPAGATION, "Conflict with {key} on {literal}");
                    return Err(BCPError::Conflict(key));
                }
            }

            index += 1;
        }

        Ok(())
    }
}
