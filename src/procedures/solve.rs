//! The solve loop.
//!
//! # Overview
//!
//! Each turn of the loop exhausts propagation, and then:
//!
//! - If no conflict was found and every atom has a value, the valuation
//!   witnesses satisfiability.
//! - If no conflict was found and some atom lacks a value, a decision
//!   is made and the loop turns again.
//! - If a conflict was found at level zero, the conflict does not rest
//!   on any decision, and the formula is unsatisfiable.
//! - Otherwise the conflict is analysed, the derived clause is
//!   installed with a backjump, and (after scheduled reduction and
//!   restart checks) the loop turns again.
//!
//! ```none
//!           +---------------+
//!   +-------| make_decision |<---- some atom unvalued
//!   |       +---------------+
//!   ⌄
//! propagate ----> no conflict, all valued -----> Satisfiable
//!   ⌃  |
//!   |  +--------> conflict at level zero ------> Unsatisfiable
//!   |  |
//!   |  +--------> conflict above level zero
//!   |                      |
//!   |        analyse, backjump, install,
//!   +------- then perhaps reduce and restart
//! ```
//!
//! # Reduction and restarts
//!
//! Every `reduction_interval` conflicts the learnt clause database
//! sheds its least active half (locked clauses excepted).
//!
//! Once the conflict count reaches the restart limit, decisions are
//! forgotten: assignments above level zero are retracted while learnt
//! clauses, activities, and saved phases are all kept, pointing the
//! re-grown search away from the region that produced the conflicts.
//! The limit then grows by half of itself, so restarts thin out as the
//! solve matures.

use crate::{
    context::{ContextState, GenericContext},
    misc::log::targets::{self},
    reports::Report,
    types::err::{BCPError, ErrorKind},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Determines the satisfiability of the formula in the context.
    pub fn solve(&mut self) -> Result<Report, ErrorKind> {
        match self.state {
            ContextState::Satisfiable | ContextState::Unsatisfiable => {
                return Ok(self.report());
            }
            ContextState::Input | ContextState::Solving => {}
        }
        self.state = ContextState::Solving;

        'solve_loop: loop {
            self.counters.iterations += 1;

            match self.propagate() {
                Ok(()) => {
                    if self.trail.assignment_count() == self.atom_db.atom_count() {
                        self.state = ContextState::Satisfiable;
                        break 'solve_loop;
                    }
                    self.make_decision()?;
                }

                Err(BCPError::Conflict(key)) => {
                    self.counters.conflicts += 1;

                    if self.trail.level() == 0 {
                        log::trace!(target: targets::ANALYSIS, "Conflict with {key} rests on no decision");
                        self.state = ContextState::Unsatisfiable;
                        break 'solve_loop;
                    }

                    let learnt = self.conflict_analysis(key)?;
                    self.install_assertion(learnt)?;
                    self.conflict_ceremony();
                }

                Err(BCPError::CorruptWatch) => return Err(ErrorKind::CorruptWatch),
            }
        }

        Ok(self.report())
    }

    /// Bookkeeping after a conflict has been analysed and its clause
    /// installed.
    fn conflict_ceremony(&mut self) {
        if self.config.reduction_allowed
            && self.counters.conflicts % self.config.reduction_interval == 0
        {
            self.clause_db.reduce(&mut self.atom_db);
            self.counters.reductions += 1;
        }

        if self.config.restarts_allowed && self.counters.conflicts >= self.counters.restart_limit {
            self.backjump(0);
            self.counters.restarts += 1;
            self.counters.restart_limit += self.counters.restart_limit / 2;
            log::debug!(target: targets::RESTART,
                "Restart {} after {} conflicts, next at {}",
                self.counters.restarts,
                self.counters.conflicts,
                self.counters.restart_limit
            );
        }
    }
}
