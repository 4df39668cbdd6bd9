use std::fmt;

use crate::types::Side;

/// Cross-grid rule a pair is checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Invariant {
    /// Agent tiles in the grid under test
    AgentCount,
    /// Assassin tiles in the grid under test
    AssassinCount,
    /// Indices where both grids hold an assassin
    SharedAssassin,
    /// Assassins in the grid under test that are agents in the other grid
    AssassinUnderAgent,
    /// Agents in the grid under test that are bystanders in the other grid
    AgentOverBystander,
}

impl fmt::Display for Invariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Invariant::AgentCount => "agent tile count",
            Invariant::AssassinCount => "assassin tile count",
            Invariant::SharedAssassin => "assassins shared with the other side",
            Invariant::AssassinUnderAgent => "assassins that are agents on the other side",
            Invariant::AgentOverBystander => "agents that are bystanders on the other side",
        };
        f.write_str(text)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("cannot draw {requested} elements from a pool of {available}")]
    SamplingUnderflow { requested: usize, available: usize },
    #[error("word index {index} is outside the 25-word grid")]
    IndexOutOfRange { index: usize },
    #[error("batch of {count} cards from seed {start_seed} runs past the largest seed")]
    SeedOverflow { start_seed: u64, count: usize },
    #[error("grid {side} failed check on {invariant}: expected {expected}, found {observed}")]
    Validation {
        side: Side,
        invariant: Invariant,
        expected: usize,
        observed: usize,
    },
}

pub type Result<T> = std::result::Result<T, GridError>;
