//! The clause database.
//!
//! Clauses are split by source:
//! - *Original* clauses, read from the formula. These are never
//!   removed, and are stored in a plain vector.
//! - *Addition* clauses, learnt through conflict analysis. These may be
//!   removed during [reduction](ClauseDB::reduce), so each lives in an
//!   optional slot, with removal leaving a tombstone. Slots are reused
//!   under a fresh key token, so a key held to a removed clause cannot
//!   alias its replacement.
//!
//! The database is the unique owner of clause storage. Watch lists and
//! reasons refer to clauses by key. Reduction is the only removal
//! path, and scrubs the watch lists of each removed clause. Reasons need
//! no scrubbing, as a clause serving as a reason is never removed.

pub mod stored;

use crate::{
    config::Activity,
    db::{atom::AtomDB, clause::stored::DbClause, ClauseKey, FormulaIndex, KeyToken},
    misc::log::targets::{self},
    structures::clause::{CClause, Clause},
};

#[derive(Default)]
pub struct ClauseDB {
    original: Vec<DbClause>,
    addition: Vec<Option<DbClause>>,
    empty_keys: Vec<ClauseKey>,
    addition_count: usize,
}

impl ClauseDB {
    /// Stores an original clause of at least two literals, watching the
    /// first two positions.
    pub fn store_original(&mut self, clause: CClause, atom_db: &mut AtomDB) -> ClauseKey {
        debug_assert!(clause.len() >= 2);
        let key = ClauseKey::Original(self.original.len() as FormulaIndex);
        atom_db.add_watch(clause[0], key);
        atom_db.add_watch(clause[1], key);
        self.original.push(DbClause::new(key, clause));
        key
    }

    /// Stores a learnt clause whose asserted literal is at position
    /// zero, watching the first two positions (or the sole literal of a
    /// unit clause).
    ///
    /// Keeping the asserted literal at position zero is what the locked
    /// check of [reduce](ClauseDB::reduce) relies on.
    pub fn store_addition(&mut self, clause: CClause, atom_db: &mut AtomDB) -> ClauseKey {
        let (key, slot) = match self.empty_keys.pop() {
            Some(ClauseKey::Addition(index, token)) => {
                (ClauseKey::Addition(index, token + 1), index as usize)
            }
            Some(ClauseKey::Original(_)) => panic!("! Original key in the empty key list"),
            None => {
                self.addition.push(None);
                let index = self.addition.len() - 1;
                (ClauseKey::Addition(index as FormulaIndex, 0), index)
            }
        };
        log::trace!(target: targets::CLAUSE_DB, "Learnt {key}: {}", clause.as_dimacs());

        atom_db.add_watch(clause[0], key);
        if clause.len() > 1 {
            atom_db.add_watch(clause[1], key);
        }

        self.addition[slot] = Some(DbClause::new(key, clause));
        self.addition_count += 1;
        key
    }

    pub fn get(&self, key: ClauseKey) -> Option<&DbClause> {
        match key {
            ClauseKey::Original(index) => self.original.get(index as usize),
            ClauseKey::Addition(index, _) => match self.addition.get(index as usize) {
                Some(Some(clause)) if clause.key() == key => Some(clause),
                _ => None,
            },
        }
    }

    pub fn get_mut(&mut self, key: ClauseKey) -> Option<&mut DbClause> {
        match key {
            ClauseKey::Original(index) => self.original.get_mut(index as usize),
            ClauseKey::Addition(index, _) => match self.addition.get_mut(index as usize) {
                Some(Some(clause)) if clause.key() == key => Some(clause),
                _ => None,
            },
        }
    }

    pub fn original_count(&self) -> usize {
        self.original.len()
    }

    pub fn addition_count(&self) -> usize {
        self.addition_count
    }

    /// Bumps the activity of an addition clause.
    /// Original clauses carry no activity, so a bump of an original key
    /// does nothing.
    pub fn bump_activity(&mut self, key: ClauseKey, bump: Activity) {
        if let ClauseKey::Addition(_, _) = key {
            if let Some(clause) = self.get_mut(key) {
                clause.bump_activity(bump);
            }
        }
    }

    /// Scales the activity of every addition clause by the given
    /// factor.
    pub fn decay_activity(&mut self, factor: Activity) {
        for clause in self.addition.iter_mut().flatten() {
            clause.scale_activity(factor);
        }
    }

    /// Removes the least active half of the addition clauses, keeping
    /// any clause locked as the reason of a valued atom.
    ///
    /// Each removed clause is scrubbed from both of its watch lists
    /// before its slot is tombstoned, so no watch list holds a key to a
    /// removed clause.
    ///
    /// Returns the count of clauses removed.
    pub fn reduce(&mut self, atom_db: &mut AtomDB) -> usize {
        let mut candidates: Vec<(Activity, FormulaIndex)> = self
            .addition
            .iter()
            .flatten()
            .map(|clause| {
                let ClauseKey::Addition(index, _) = clause.key() else {
                    panic!("! Original key on an addition clause")
                };
                (clause.activity(), index)
            })
            .collect();

        // Ascending activity, with the slot index settling ties.
        candidates.sort_by(|a, b| {
            a.0.partial_cmp(&b.0)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.1.cmp(&b.1))
        });

        let limit = candidates.len() / 2;
        let mut removed = 0;

        for (_, index) in candidates.iter().take(limit) {
            let slot = *index as usize;
            let clause = match &self.addition[slot] {
                Some(clause) => clause,
                None => panic!("! Tombstone among reduction candidates"),
            };
            let key = clause.key();

            // A clause is locked when it is the reason its asserted
            // literal holds on the current valuation.
            if atom_db.reason_of(clause.literal_at(0).atom()) == Some(key) {
                continue;
            }

            let (watch_a, watch_b) = clause.watched_literals();
            atom_db.remove_watch(watch_a, key);
            if watch_b != watch_a {
                atom_db.remove_watch(watch_b, key);
            }

            self.addition[slot] = None;
            self.addition_count -= 1;
            if let ClauseKey::Addition(_, token) = key {
                if token < KeyToken::MAX {
                    self.empty_keys.push(key);
                }
            }
            removed += 1;
        }

        log::debug!(target: targets::REDUCTION, "Addition clauses reduced by {removed} to {}", self.addition_count);
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::literal::Literal;

    fn lit(int: i32) -> Literal {
        Literal::from_dimacs(int)
    }

    #[test]
    fn reduction_removes_the_less_active_half() {
        let mut atom_db = AtomDB::default();
        atom_db.resize_to(4);
        let mut clause_db = ClauseDB::default();

        let quiet = clause_db.store_addition(vec![lit(1), lit(2)], &mut atom_db);
        let busy = clause_db.store_addition(vec![lit(3), lit(4)], &mut atom_db);
        clause_db.bump_activity(busy, 1.0);

        assert_eq!(clause_db.reduce(&mut atom_db), 1);
        assert!(clause_db.get(quiet).is_none());
        assert!(clause_db.get(busy).is_some());
        assert_eq!(clause_db.addition_count(), 1);
    }

    #[test]
    fn reduction_keeps_locked_clauses() {
        let mut atom_db = AtomDB::default();
        atom_db.resize_to(4);
        let mut clause_db = ClauseDB::default();

        let locked = clause_db.store_addition(vec![lit(1), lit(2)], &mut atom_db);
        let busy = clause_db.store_addition(vec![lit(3), lit(4)], &mut atom_db);
        clause_db.bump_activity(busy, 1.0);

        // The quiet clause is the reason its asserted literal holds.
        atom_db.set_value(lit(1), 1, Some(locked));

        assert_eq!(clause_db.reduce(&mut atom_db), 0);
        assert!(clause_db.get(locked).is_some());
        assert!(clause_db.get(busy).is_some());
    }

    #[test]
    fn slot_reuse_retires_stale_keys() {
        let mut atom_db = AtomDB::default();
        atom_db.resize_to(4);
        let mut clause_db = ClauseDB::default();

        let quiet = clause_db.store_addition(vec![lit(1), lit(2)], &mut atom_db);
        let busy = clause_db.store_addition(vec![lit(3), lit(4)], &mut atom_db);
        clause_db.bump_activity(busy, 1.0);
        clause_db.reduce(&mut atom_db);

        let fresh = clause_db.store_addition(vec![lit(2), lit(4)], &mut atom_db);

        assert_ne!(quiet, fresh);
        assert!(clause_db.get(quiet).is_none());
        assert!(clause_db.get(fresh).is_some());
    }
}
