//! A library for determining the satisfiability of boolean formulas
//! written in conjunctive normal form.
//!
//! The solver is a conflict-driven clause-learning engine: a partial
//! valuation is grown by unit propagation over two watched literals and
//! by decisions, conflicts are analysed by resolution to the first
//! unique implication point, and the clause learnt from a conflict
//! directs a non-chronological backjump. Decisions favour atoms active
//! in recent conflicts, the learnt clause database is periodically
//! reduced, and the search restarts on a geometrically growing conflict
//! schedule.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a
//! [context](crate::context::Context), which owns every database of a
//! solve and exposes the solve procedures as methods. Clauses are added
//! [directly](crate::context::GenericContext::add_clause) or read from
//! [DIMACS](crate::context::GenericContext::read_dimacs), and
//! [solve](crate::context::GenericContext::solve) returns a
//! [report](crate::reports::Report).
//!
//! Useful starting points:
//! - The [solve procedure](crate::procedures::solve) for the dynamics
//!   of a solve.
//! - The [database module](crate::db) for the data considered during a
//!   solve.
//! - The [configuration](crate::config) for the tunable details.
//!
//! # Examples
//!
//! Parse and solve a formula:
//!
//! ```rust
//! use wren_sat::{config::Config, context::Context, reports::Report};
//!
//! let mut the_context = Context::from_config(Config::default());
//!
//! let dimacs = "
//! p cnf 2 2
//!  1  2 0
//! -1  2 0
//! ";
//!
//! assert!(the_context.read_dimacs(dimacs.as_bytes()).is_ok());
//! assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
//! assert_eq!(the_context.value_of(2), Some(true));
//! ```
//!
//! Identify unsatisfiability during the read, before any search:
//!
//! ```rust
//! use wren_sat::{config::Config, context::Context, types::err::BuildError};
//!
//! let mut the_context = Context::from_config(Config::default());
//!
//! let dimacs = "
//! p cnf 1 2
//!  1 0
//! -1 0
//! ";
//!
//! assert_eq!(
//!     the_context.read_dimacs(dimacs.as_bytes()),
//!     Err(BuildError::Unsatisfiable)
//! );
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout, under the targets listed
//! in [misc::log], and no log implementation is installed by the
//! library. With [env_logger](https://docs.rs/env_logger), for example,
//! `RUST_LOG=propagation …` narrows output to propagation events.

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod db;

pub mod generic;
pub mod misc;
pub mod reports;
