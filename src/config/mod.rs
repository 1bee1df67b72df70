//! Configuration of a context.

pub mod defaults;

/// The representation of atom and clause activity.
pub type Activity = f64;

/// The probability of assigning true to an atom with no saved phase.
pub type PolarityLean = f64;

/// The probability of deciding on a uniformly chosen unvalued atom
/// rather than the most active one.
pub type RandomDecisionBias = f64;

#[derive(Debug, Clone)]
pub struct Config {
    /// The amount added to the activity of each atom in a learnt
    /// clause.
    pub atom_bump: Activity,

    /// The factor by which every atom activity is scaled after a
    /// conflict.
    pub atom_decay: Activity,

    /// The amount added to the activity of each clause used while
    /// resolving a conflict.
    pub clause_bump: Activity,

    /// The factor by which every learnt clause activity is scaled after
    /// a conflict.
    pub clause_decay: Activity,

    /// The conflict count at which the first restart happens.
    /// The limit grows by half of itself on each restart.
    pub restart_initial: usize,

    /// Reduce the learnt clause database every `reduction_interval`
    /// conflicts.
    pub reduction_interval: usize,

    pub polarity_lean: PolarityLean,

    pub random_decision_bias: RandomDecisionBias,

    /// Permit restarts.
    pub restarts_allowed: bool,

    /// Permit learnt clauses to be forgotten.
    pub reduction_allowed: bool,
}

impl Default for Config {
    fn default() -> Self {
        use defaults::*;
        Config {
            atom_bump: ATOM_BUMP,
            atom_decay: ATOM_DECAY,
            clause_bump: CLAUSE_BUMP,
            clause_decay: CLAUSE_DECAY,
            restart_initial: RESTART_INITIAL,
            reduction_interval: REDUCTION_INTERVAL,
            polarity_lean: POLARITY_LEAN,
            random_decision_bias: RANDOM_DECISION_BIAS,
            restarts_allowed: true,
            reduction_allowed: true,
        }
    }
}
