//! Atoms: propositional variables.
//!
//! Atoms are numbered from 1 to match the DIMACS convention, and the
//! tables indexed by atom leave slot 0 unused.

/// An atom.
pub type Atom = u32;
