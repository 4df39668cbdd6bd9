use log::debug;

use crate::error::{GridError, Invariant, Result};
use crate::generator::{AGENTS_PER_GRID, AGENT_EXCLUSIVE, ASSASSINS_PER_GRID, ASSASSIN_COMMON};
use crate::types::{Grid, GridPair, Side, TileType};

/// Assassins in one grid that are agents in the other (one `agent_opp` draw per side)
pub const ASSASSIN_UNDER_AGENT: usize = 1;

fn expect(side: Side, invariant: Invariant, expected: usize, observed: usize) -> Result<()> {
    if expected == observed {
        Ok(())
    } else {
        Err(GridError::Validation {
            side,
            invariant,
            expected,
            observed,
        })
    }
}

/// Check `grid` (belonging to `side`) against the `other` grid of its pair
pub fn check_grid(side: Side, grid: &Grid, other: &Grid) -> Result<()> {
    // 9 agents
    expect(side, Invariant::AgentCount, AGENTS_PER_GRID, grid.count(TileType::Agent))?;

    // ...and 3 assassins
    expect(
        side,
        Invariant::AssassinCount,
        ASSASSINS_PER_GRID,
        grid.count(TileType::Assassin),
    )?;

    // ...one of which is also an assassin in the other grid
    expect(
        side,
        Invariant::SharedAssassin,
        ASSASSIN_COMMON,
        grid.overlap(TileType::Assassin, other, TileType::Assassin),
    )?;

    // ...and one of which is an agent in the other grid
    expect(
        side,
        Invariant::AssassinUnderAgent,
        ASSASSIN_UNDER_AGENT,
        grid.overlap(TileType::Assassin, other, TileType::Agent),
    )?;

    // 5 agents land on bystanders in the other grid
    expect(
        side,
        Invariant::AgentOverBystander,
        AGENT_EXCLUSIVE,
        grid.overlap(TileType::Agent, other, TileType::Bystander),
    )
}

/// Check a pair in both directions, A against B and then B against A.
///
/// The partition is symmetric, but both directions are always checked.
pub fn check_grids(pair: &GridPair) -> Result<()> {
    check_grid(Side::A, &pair.a, &pair.b)?;
    check_grid(Side::B, &pair.b, &pair.a)?;
    debug!("grid pair passed checks in both directions");
    Ok(())
}
