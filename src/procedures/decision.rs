//! Choice of an atom to value, and of the value.
//!
//! The atom is the unvalued atom with the highest activity, with ties
//! settled in favour of the smallest atom. The scan starts from
//! negative infinity so the smallest unvalued atom is chosen even if
//! every activity has decayed to zero.
//!
//! The value is the one the atom last held (so retraction does not
//! discard a useful partial valuation), or a polarity-lean coin toss
//! for an atom never valued. With the default lean of zero a fresh atom
//! is valued false.
//!
//! A random decision bias above zero trades some activity-guided
//! decisions for uniformly random ones; the default bias of zero keeps
//! decisions deterministic.

use rand::seq::IteratorRandom;

use crate::{
    config::Activity,
    context::GenericContext,
    misc::log::targets::{self},
    structures::{atom::Atom, literal::Literal},
    types::err::ErrorKind,
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Opens a fresh decision level on a chosen atom and value.
    ///
    /// To be called only when some atom is unvalued.
    pub fn make_decision(&mut self) -> Result<(), ErrorKind> {
        let Some(chosen) = self.choose_atom() else {
            return Err(ErrorKind::DecisionsExhausted);
        };

        self.counters.decisions += 1;
        self.trail.push_level();

        let polarity = match self.atom_db.previous_value_of(chosen) {
            Some(value) => value,
            None => self.rng.gen_bool(self.config.polarity_lean),
        };
        let decision = Literal::new(chosen, polarity);

        log::trace!(target: targets::DECISION,
            "Decision {decision} at level {} with activity {}",
            self.trail.level(),
            self.atom_db.activity_of(chosen)
        );

        self.atom_db.set_value(decision, self.trail.level(), None);
        self.trail.store(decision);

        Ok(())
    }

    fn choose_atom(&mut self) -> Option<Atom> {
        let count = self.atom_db.atom_count() as Atom;

        if self.config.random_decision_bias > 0.0
            && self.rng.gen_bool(self.config.random_decision_bias)
        {
            return (1..=count)
                .filter(|atom| self.atom_db.value_of(*atom).is_none())
                .choose(&mut self.rng);
        }

        let mut the_atom = None;
        let mut high_activity = Activity::NEG_INFINITY;
        for atom in 1..=count {
            if self.atom_db.value_of(atom).is_none() && self.atom_db.activity_of(atom) > high_activity
            {
                the_atom = Some(atom);
                high_activity = self.atom_db.activity_of(atom);
            }
        }
        the_atom
    }
}
