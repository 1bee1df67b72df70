//! High-level reports on a solve.

/// The verdict of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    /// Some assignment satisfies the formula.
    Satisfiable,

    /// No assignment satisfies the formula.
    Unsatisfiable,

    /// No verdict, yet.
    Unknown,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "SATISFIABLE"),
            Self::Unsatisfiable => write!(f, "UNSATISFIABLE"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}
