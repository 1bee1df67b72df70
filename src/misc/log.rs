/*!
Logging support.

Calls to the [log] macros are made throughout the library, each under
one of the targets below so output can be narrowed to the part of a
solve under investigation.
No log implementation is installed by the library. The binary installs
one, and library users are free to install their own (or none).
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    pub const ANALYSIS: &str = "analysis";
    pub const BACKJUMP: &str = "backjump";
    pub const BUILD: &str = "build";
    pub const CLAUSE_DB: &str = "clause_db";
    pub const DECISION: &str = "decision";
    pub const PROPAGATION: &str = "propagation";
    pub const REDUCTION: &str = "reduction";
    pub const RESTART: &str = "restart";
    pub const VALUATION: &str = "valuation";
}
