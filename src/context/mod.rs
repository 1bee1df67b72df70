//! A context: the state of a solve, and the procedures which advance
//! it.
//!
//! All state is owned by the context, so independent solves may be run
//! by building independent contexts. The search procedures are methods
//! on the context, implemented in [procedures](crate::procedures).

mod counters;
pub use counters::Counters;

use crate::{
    config::Config,
    db::{atom::AtomDB, clause::ClauseDB, trail::Trail},
    generic::minimal_pcg::MinimalPCG32,
    reports::Report,
    structures::atom::Atom,
};

/// A context, generic over its source of randomness.
pub struct GenericContext<R: rand::Rng> {
    pub config: Config,

    pub counters: Counters,

    /// The valuation and every per-atom table.
    pub atom_db: AtomDB,

    /// Original and learnt clauses.
    pub clause_db: ClauseDB,

    /// Assignments in order, with the propagation frontier and the
    /// decision level breaks.
    pub trail: Trail,

    pub state: ContextState,

    pub(crate) rng: R,
}

/// A context with the canonical source of randomness.
pub type Context = GenericContext<MinimalPCG32>;

/// Where a context is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextState {
    /// Clauses may be added.
    Input,

    /// A solve is underway.
    Solving,

    /// The formula is satisfiable.
    Satisfiable,

    /// The formula is unsatisfiable.
    Unsatisfiable,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    pub fn from_config(config: Config) -> Self {
        let counters = Counters {
            restart_limit: config.restart_initial,
            ..Counters::default()
        };

        GenericContext {
            config,
            counters,
            atom_db: AtomDB::default(),
            clause_db: ClauseDB::default(),
            trail: Trail::default(),
            state: ContextState::Input,
            rng: R::default(),
        }
    }

    /// The verdict of the solve, if settled.
    pub fn report(&self) -> Report {
        match self.state {
            ContextState::Satisfiable => Report::Satisfiable,
            ContextState::Unsatisfiable => Report::Unsatisfiable,
            ContextState::Input | ContextState::Solving => Report::Unknown,
        }
    }

    /// The value of an atom on the current valuation.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.atom_db.value_of(atom)
    }

    /// The valuation as a DIMACS-style list of the valued atoms.
    pub fn valuation_string(&self) -> String {
        let mut the_string = String::new();
        for atom in 1..=self.atom_db.atom_count() as Atom {
            match self.atom_db.value_of(atom) {
                Some(true) => the_string.push_str(format!("{atom} ").as_str()),
                Some(false) => the_string.push_str(format!("-{atom} ").as_str()),
                None => {}
            }
        }
        the_string.pop();
        the_string
    }
}
