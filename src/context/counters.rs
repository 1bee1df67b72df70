//! Counters over the course of a solve.

/// Counts of the notable events of a solve, together with the moving
/// restart limit.
#[derive(Debug, Clone)]
pub struct Counters {
    pub conflicts: usize,
    pub decisions: usize,
    pub iterations: usize,
    pub propagations: usize,
    pub reductions: usize,
    pub restarts: usize,

    /// The conflict count at which the next restart happens.
    /// Grows by half of itself on each restart.
    pub restart_limit: usize,
}

impl Default for Counters {
    fn default() -> Self {
        Counters {
            conflicts: 0,
            decisions: 0,
            iterations: 0,
            propagations: 0,
            reductions: 0,
            restarts: 0,
            restart_limit: crate::config::defaults::RESTART_INITIAL,
        }
    }
}
