//! Errors, sorted by the part of the library they arise in.

use crate::db::ClauseKey;

/// Errors from parsing a DIMACS representation of a formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// A clause (or some other token) appeared before the problem
    /// header.
    MissingHeader,

    /// A problem header without the form `p cnf <atoms> <clauses>`.
    MalformedHeader,

    /// A second problem header.
    RepeatedHeader,

    /// A token which is neither a signed integer nor part of a comment
    /// or header.
    UnreadableToken,

    /// The input ended inside a clause, before the terminating zero.
    UnterminatedClause,

    /// Reading from the input failed.
    ReadFailure,
}

/// Errors from building a formula in a context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    /// An empty clause, and so an unsatisfiable formula.
    EmptyClause,

    /// A literal whose atom is beyond the declared atom count.
    AtomBeyondProblem,

    /// A unit clause in conflict with some established unit clause.
    /// The formula is unsatisfiable, without any search.
    Unsatisfiable,

    Parse(ParseError),
}

impl From<ParseError> for BuildError {
    fn from(error: ParseError) -> Self {
        BuildError::Parse(error)
    }
}

/// The ways propagation may stop short of applying every consequence.
///
/// A conflict is the expected interruption; a corrupt watch marks a
/// broken invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BCPError {
    /// Every literal of the keyed clause is false.
    Conflict(ClauseKey),

    /// A watch list entry whose key does not resolve to a clause.
    CorruptWatch,
}

/// Errors which only arise if some invariant of the solve has been
/// broken. None of these are recoverable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A watch list entry whose key does not resolve to a clause.
    CorruptWatch,

    /// A clause key with no clause behind it, outside propagation.
    MissingClause(ClauseKey),

    /// Resolution terminated without an asserting clause.
    NoAssertion,

    /// A literal of a conflict clause with no decision level.
    Backjump,

    /// A decision was requested with every atom valued.
    DecisionsExhausted,
}
