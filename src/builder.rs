//! Methods to build a formula in a context.
//!
//! Clauses may be added directly, or parsed from the DIMACS
//! representation of a formula:
//!
//! ```none
//! c An example formula.
//! p cnf 3 2
//!  1 -2  3 0
//! -1  2 0
//! ```
//!
//! Ingestion settles a few things before a clause is stored:
//!
//! - Duplicate literals are dropped, first occurrence kept.
//!   (A clause containing both polarities of an atom is kept as
//!   given. It is satisfied on any valuation, and harmless.)
//! - A unit clause is not stored at all: its literal is valued at level
//!   zero, awaiting propagation when the solve begins. A unit clause in
//!   conflict with an established unit settles the formula as
//!   unsatisfiable without any search.

use std::io::BufRead;

use crate::{
    context::{ContextState, GenericContext},
    misc::log::targets::{self},
    structures::{atom::Atom, clause::CClause, literal::Literal},
    types::err::{BuildError, ParseError},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Fixes the atom count of the problem, sizing every per-atom
    /// table. Atoms are 1..=count.
    pub fn declare_atoms(&mut self, count: Atom) {
        self.atom_db.resize_to(count);
    }

    /// Adds a clause to the context.
    ///
    /// Every atom of the clause must have been declared.
    pub fn add_clause(&mut self, clause: CClause) -> Result<(), BuildError> {
        if clause.is_empty() {
            self.state = ContextState::Unsatisfiable;
            return Err(BuildError::EmptyClause);
        }

        for literal in &clause {
            if literal.atom() as usize > self.atom_db.atom_count() {
                return Err(BuildError::AtomBeyondProblem);
            }
        }

        let mut deduped: CClause = Vec::with_capacity(clause.len());
        for literal in clause {
            if !deduped.contains(&literal) {
                deduped.push(literal);
            }
        }

        match deduped.len() {
            1 => {
                let unit = deduped[0];
                match self.atom_db.value_of_literal(unit) {
                    None => {
                        self.atom_db.set_value(unit, 0, None);
                        self.trail.store(unit);
                        Ok(())
                    }
                    Some(true) => Ok(()),
                    Some(false) => {
                        log::debug!(target: targets::BUILD, "Unit clause {unit} conflicts with an established unit");
                        self.state = ContextState::Unsatisfiable;
                        Err(BuildError::Unsatisfiable)
                    }
                }
            }
            _ => {
                self.clause_db.store_original(deduped, &mut self.atom_db);
                Ok(())
            }
        }
    }

    /// Reads the DIMACS representation of a formula into the context.
    ///
    /// The problem header must precede every clause. Comment lines are
    /// skipped, and clauses may span lines: a clause ends at its
    /// terminating zero, wherever that lands.
    pub fn read_dimacs(&mut self, mut reader: impl BufRead) -> Result<(), BuildError> {
        let mut buffer = String::new();
        let mut clause: CClause = Vec::new();
        let mut header_read = false;

        loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => {}
                Err(_) => return Err(ParseError::ReadFailure.into()),
            }

            let line = buffer.trim_start();
            if line.is_empty() || line.starts_with('c') {
                continue;
            }

            if line.starts_with('p') {
                if header_read {
                    return Err(ParseError::RepeatedHeader.into());
                }
                let parts = line.split_whitespace().collect::<Vec<_>>();
                if parts.len() != 4 || parts[0] != "p" || parts[1] != "cnf" {
                    return Err(ParseError::MalformedHeader.into());
                }
                let Ok(atoms) = parts[2].parse::<Atom>() else {
                    return Err(ParseError::MalformedHeader.into());
                };
                let Ok(_clauses) = parts[3].parse::<usize>() else {
                    return Err(ParseError::MalformedHeader.into());
                };
                self.declare_atoms(atoms);
                log::debug!(target: targets::BUILD, "Problem with {atoms} atoms");
                header_read = true;
                continue;
            }

            if !header_read {
                return Err(ParseError::MissingHeader.into());
            }

            for token in line.split_whitespace() {
                match token.parse::<i32>() {
                    Ok(0) => {
                        let finished = std::mem::take(&mut clause);
                        self.add_clause(finished)?;
                    }
                    Ok(int) => clause.push(Literal::from_dimacs(int)),
                    Err(_) => return Err(ParseError::UnreadableToken.into()),
                }
            }
        }

        if !clause.is_empty() {
            return Err(ParseError::UnterminatedClause.into());
        }
        if !header_read {
            return Err(ParseError::MissingHeader.into());
        }

        log::debug!(target: targets::BUILD,
            "Formula read: {} clauses over {} atoms",
            self.clause_db.original_count(),
            self.atom_db.atom_count()
        );
        Ok(())
    }
}
