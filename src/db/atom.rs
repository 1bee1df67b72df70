//! The atom database: the valuation and every table indexed by atom or
//! by literal.
//!
//! Specifically:
//! - The current (partial) valuation.
//! - The value each atom last held, for phase saving across backjumps
//!   and restarts.
//! - The decision level at which each atom was valued, and the clause
//!   which forced the value, if any.
//! - The activity of each atom, for decision ordering.
//! - The watch lists, indexed by literal.
//!
//! Every table is sized once, when the atom count of the problem is
//! fixed, and never reallocated afterwards.
//!
//! A note on ownership: watch lists hold clause *keys*. The clause
//! database owns every clause, and removal during reduction scrubs the
//! removed clause's keys from both of its watch lists, so a key read
//! from a watch list always resolves.

use crate::{
    config::Activity,
    db::{ClauseKey, LevelIndex},
    misc::log::targets::{self},
    structures::{atom::Atom, literal::Literal},
};

#[derive(Default)]
pub struct AtomDB {
    valuation: Vec<Option<bool>>,
    previous_value: Vec<Option<bool>>,
    decision_level: Vec<Option<LevelIndex>>,
    reason: Vec<Option<ClauseKey>>,
    activity: Vec<Activity>,
    watch_lists: Vec<Vec<ClauseKey>>,
}

impl AtomDB {
    /// Sizes every table for atoms 1..=count, with slot 0 unused.
    ///
    /// Fresh atoms are unvalued, at no decision level, with no reason,
    /// no saved phase, and unit activity.
    pub fn resize_to(&mut self, count: Atom) {
        let slots = count as usize + 1;
        self.valuation.resize(slots, None);
        self.previous_value.resize(slots, None);
        self.decision_level.resize(slots, None);
        self.reason.resize(slots, None);
        self.activity.resize(slots, 1.0);
        self.watch_lists.resize(2 * count as usize, Vec::default());
    }

    /// The count of atoms in the database.
    pub fn atom_count(&self) -> usize {
        self.valuation.len().saturating_sub(1)
    }

    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.valuation[atom as usize]
    }

    /// The value of a literal on the current valuation: true when the
    /// valuation matches the literal's polarity, false when it opposes
    /// it, and unknown (None) when the atom is unvalued.
    pub fn value_of_literal(&self, literal: Literal) -> Option<bool> {
        self.valuation[literal.atom() as usize].map(|value| value == literal.polarity())
    }

    pub fn previous_value_of(&self, atom: Atom) -> Option<bool> {
        self.previous_value[atom as usize]
    }

    pub fn decision_level_of(&self, atom: Atom) -> Option<LevelIndex> {
        self.decision_level[atom as usize]
    }

    pub fn reason_of(&self, atom: Atom) -> Option<ClauseKey> {
        self.reason[atom as usize]
    }

    /// Values the literal's atom to match the literal, at the given
    /// level, with the given reason, and saves the phase.
    pub fn set_value(&mut self, literal: Literal, level: LevelIndex, reason: Option<ClauseKey>) {
        let atom = literal.atom() as usize;
        debug_assert!(self.valuation[atom].is_none());
        self.valuation[atom] = Some(literal.polarity());
        self.previous_value[atom] = Some(literal.polarity());
        self.decision_level[atom] = Some(level);
        self.reason[atom] = reason;
    }

    /// Clears the value, level, and reason of an atom.
    /// The saved phase is kept.
    pub fn drop_value(&mut self, atom: Atom) {
        log::trace!(target: targets::VALUATION, "Cleared: {atom}");
        self.valuation[atom as usize] = None;
        self.decision_level[atom as usize] = None;
        self.reason[atom as usize] = None;
    }

    pub fn activity_of(&self, atom: Atom) -> Activity {
        self.activity[atom as usize]
    }

    pub fn bump_activity(&mut self, atom: Atom, bump: Activity) {
        self.activity[atom as usize] += bump;
    }

    /// Scales the activity of every atom by the given factor.
    pub fn decay_activity(&mut self, factor: Activity) {
        for activity in &mut self.activity {
            *activity *= factor;
        }
    }

    /// A pointer to the watch list of the given literal index, for use
    /// during propagation.
    ///
    /// # Safety
    /// The pointer is valid so long as the watch list vector is not
    /// reallocated, and the watch list vector is sized once.
    /// Mutation through the pointer while other watch lists are updated
    /// is sound only if those updates never touch *this* list. See the
    /// note in [bcp](crate::procedures::bcp).
    pub unsafe fn watch_list_ptr(&mut self, index: usize) -> *mut Vec<ClauseKey> {
        &mut self.watch_lists[index]
    }

    /// Appends the key to the watch list of the given literal.
    pub fn add_watch(&mut self, literal: Literal, key: ClauseKey) {
        self.watch_lists[literal.index()].push(key);
    }

    /// Removes the key from the watch list of the given literal, if
    /// present.
    pub fn remove_watch(&mut self, literal: Literal, key: ClauseKey) {
        let list = &mut self.watch_lists[literal.index()];
        if let Some(position) = list.iter().position(|element| *element == key) {
            list.swap_remove(position);
        }
    }
}
