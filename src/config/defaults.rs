use crate::config::{self};

pub const ATOM_BUMP: config::Activity = 1.0;
pub const ATOM_DECAY: config::Activity = 0.95;

pub const CLAUSE_BUMP: config::Activity = 1.0;
pub const CLAUSE_DECAY: config::Activity = 0.95;

pub const RESTART_INITIAL: usize = 100;
pub const REDUCTION_INTERVAL: usize = 3000;

pub const POLARITY_LEAN: config::PolarityLean = 0.0;
pub const RANDOM_DECISION_BIAS: config::RandomDecisionBias = 0.0;

pub const RNG_SEED: u64 = 0;
