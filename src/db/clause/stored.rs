//! The representation of a stored clause.
//!
//! A stored clause holds its literals together with the positions of
//! its two watched literals. A unit clause watches its sole literal
//! from both positions.

use crate::{
    config::Activity,
    db::{atom::AtomDB, ClauseKey},
    structures::{clause::CClause, literal::Literal},
};

pub struct DbClause {
    key: ClauseKey,
    literals: CClause,
    watch_a: usize,
    watch_b: usize,
    activity: Activity,
}

/// The outcome of updating a watch after one of the watched literals
/// was falsified.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WatchUpdate {
    /// The other watched literal is true, so the clause is satisfied
    /// and the watches are left in place.
    Satisfied,

    /// The falsified watch was moved to a literal which is not false.
    /// The clause no longer watches the falsified literal.
    Moved,

    /// Every unwatched literal is false and the other watched literal
    /// has no value: the clause asserts it.
    Asserting(Literal),

    /// Every literal of the clause is false.
    Conflict,
}

impl DbClause {
    /// Stores a clause with watches on the first two positions, or on
    /// the sole literal of a unit clause.
    pub(super) fn new(key: ClauseKey, literals: CClause) -> Self {
        let watch_b = match literals.len() {
            1 => 0,
            _ => 1,
        };
        DbClause {
            key,
            literals,
            watch_a: 0,
            watch_b,
            activity: Activity::default(),
        }
    }

    pub const fn key(&self) -> ClauseKey {
        self.key
    }

    pub fn literal_at(&self, position: usize) -> Literal {
        self.literals[position]
    }

    /// The literals at the watched positions.
    pub fn watched_literals(&self) -> (Literal, Literal) {
        (self.literals[self.watch_a], self.literals[self.watch_b])
    }

    pub const fn activity(&self) -> Activity {
        self.activity
    }

    pub fn bump_activity(&mut self, bump: Activity) {
        self.activity += bump;
    }

    pub fn scale_activity(&mut self, factor: Activity) {
        self.activity *= factor;
    }

    /// Attempts to move the watch on `falsified` to some literal which
    /// is not false on the current valuation.
    ///
    /// When a move is made the clause is appended to the watch list of
    /// the fresh literal; removal from the watch list of `falsified` is
    /// left to the caller, which is mid-iteration over that list.
    pub fn update_watch(&mut self, falsified: Literal, atom_db: &mut AtomDB) -> WatchUpdate {
        let update_a = self.literals[self.watch_a] == falsified;
        debug_assert!(update_a || self.literals[self.watch_b] == falsified);

        let other_watch = match update_a {
            true => self.literals[self.watch_b],
            false => self.literals[self.watch_a],
        };

        if atom_db.value_of_literal(other_watch) == Some(true) {
            return WatchUpdate::Satisfied;
        }

        for position in 0..self.literals.len() {
            if position == self.watch_a || position == self.watch_b {
                continue;
            }
            let candidate = self.literals[position];
            if atom_db.value_of_literal(candidate) != Some(false) {
                match update_a {
                    true => self.watch_a = position,
                    false => self.watch_b = position,
                }
                atom_db.add_watch(candidate, self.key);
                return WatchUpdate::Moved;
            }
        }

        match atom_db.value_of_literal(other_watch) {
            None => WatchUpdate::Asserting(other_watch),
            Some(_) => WatchUpdate::Conflict,
        }
    }
}

impl std::ops::Deref for DbClause {
    type Target = [Literal];

    fn deref(&self) -> &Self::Target {
        &self.literals
    }
}

impl std::fmt::Display for DbClause {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", crate::structures::clause::Clause::as_dimacs(&self.literals))
    }
}
