//! The procedures of a solve, as methods on a context.
//!
//! - [bcp]: boolean constraint propagation with two watched literals.
//! - [analysis]: resolution from a conflict to an asserting clause.
//! - [backjump]: retraction of levels and installation of a learnt
//!   clause.
//! - [decision]: choice of an unvalued atom and a value for it.
//! - [solve]: the loop tying the above together.

pub mod analysis;
pub mod backjump;
pub mod bcp;
pub mod decision;
pub mod solve;
