//! Key card generation.
//!
//! The 25 word positions are peeled apart into disjoint categories, then
//! recombined into two grids whose overlaps are fixed by construction:
//!
//! | draw              | size | grid A    | grid B    |
//! |-------------------|------|-----------|-----------|
//! | `agent_common`    | 3    | agent     | agent     |
//! | `assassin_common` | 1    | assassin  | assassin  |
//! | `agent_excl_a`    | 5    | agent     | bystander |
//! | `agent_excl_b`    | 5    | bystander | agent     |
//! | `assassin_excl_a` | 2    | assassin  | 1 agent, 1 bystander |
//! | `assassin_excl_b` | 2    | 1 agent, 1 bystander | assassin |
//! | unused            | 7    | bystander | bystander |

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{GridError, Result};
use crate::sampler::choose;
use crate::types::{Card, Grid, GridPair, TileType, GRID_SIZE};
use crate::validate::check_grids;

/// Agents shared by both grids
pub const AGENT_COMMON: usize = 3;
/// Assassins shared by both grids
pub const ASSASSIN_COMMON: usize = 1;
/// Agents on one side only; bystanders on the other
pub const AGENT_EXCLUSIVE: usize = 5;
/// Assassins on one side only
pub const ASSASSIN_EXCLUSIVE: usize = 2;
/// Exclusive assassins of the other side that become agents on this side
pub const AGENT_OPPOSITE: usize = 1;

/// Words drawn from the universe: 3 + 1 + 5 + 5 + 2 + 2 = 18
pub const DRAWN: usize =
    AGENT_COMMON + ASSASSIN_COMMON + 2 * AGENT_EXCLUSIVE + 2 * ASSASSIN_EXCLUSIVE;
/// Words left over; bystanders on both sides: 25 - 18 = 7
pub const UNUSED: usize = GRID_SIZE - DRAWN;

/// 1 + 5 + 3 = 9
pub const AGENTS_PER_GRID: usize = AGENT_OPPOSITE + AGENT_EXCLUSIVE + AGENT_COMMON;
/// 2 + 1 = 3
pub const ASSASSINS_PER_GRID: usize = ASSASSIN_EXCLUSIVE + ASSASSIN_COMMON;

const _: () = assert!(DRAWN + UNUSED == GRID_SIZE && DRAWN <= GRID_SIZE);
const _: () = assert!(AGENTS_PER_GRID == 9 && ASSASSINS_PER_GRID == 3);
const _: () = assert!(AGENT_OPPOSITE <= ASSASSIN_EXCLUSIVE);

/// The disjoint word sets a grid pair is assembled from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    pub agent_common: Vec<usize>,
    pub assassin_common: Vec<usize>,
    pub agent_excl_a: Vec<usize>,
    pub agent_excl_b: Vec<usize>,
    pub assassin_excl_a: Vec<usize>,
    pub assassin_excl_b: Vec<usize>,
    /// Drawn from `assassin_excl_b`; an agent in A, still an assassin in B
    pub agent_opp_a: Vec<usize>,
    /// Drawn from `assassin_excl_a`; an agent in B, still an assassin in A
    pub agent_opp_b: Vec<usize>,
    pub unused: Vec<usize>,
}

impl Partition {
    /// Draw every category from the word universe using `rng`
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Result<Self> {
        let words: Vec<usize> = (0..GRID_SIZE).collect();

        let (agent_common, remaining) = choose(rng, &words, AGENT_COMMON)?;
        let (assassin_common, remaining) = choose(rng, &remaining, ASSASSIN_COMMON)?;

        let (agent_excl_a, remaining) = choose(rng, &remaining, AGENT_EXCLUSIVE)?;
        let (agent_excl_b, remaining) = choose(rng, &remaining, AGENT_EXCLUSIVE)?;

        let (assassin_excl_a, remaining) = choose(rng, &remaining, ASSASSIN_EXCLUSIVE)?;
        let (assassin_excl_b, unused) = choose(rng, &remaining, ASSASSIN_EXCLUSIVE)?;

        // The opposite side's assassin sets are only read from, never shrunk.
        let (agent_opp_a, _) = choose(rng, &assassin_excl_b, AGENT_OPPOSITE)?;
        let (agent_opp_b, _) = choose(rng, &assassin_excl_a, AGENT_OPPOSITE)?;

        Ok(Self {
            agent_common,
            assassin_common,
            agent_excl_a,
            agent_excl_b,
            assassin_excl_a,
            assassin_excl_b,
            agent_opp_a,
            agent_opp_b,
            unused,
        })
    }

    pub fn agents_a(&self) -> Vec<usize> {
        [&self.agent_opp_a, &self.agent_excl_a, &self.agent_common]
            .into_iter()
            .flatten()
            .copied()
            .collect()
    }

    pub fn assassins_a(&self) -> Vec<usize> {
        [&self.assassin_excl_a, &self.assassin_common]
            .into_iter()
            .flatten()
            .copied()
            .collect()
    }

    pub fn agents_b(&self) -> Vec<usize> {
        [&self.agent_opp_b, &self.agent_excl_b, &self.agent_common]
            .into_iter()
            .flatten()
            .copied()
            .collect()
    }

    pub fn assassins_b(&self) -> Vec<usize> {
        [&self.assassin_excl_b, &self.assassin_common]
            .into_iter()
            .flatten()
            .copied()
            .collect()
    }

    pub fn into_pair(self) -> Result<GridPair> {
        Ok(GridPair::new(
            create_grid(&self.agents_a(), &self.assassins_a())?,
            create_grid(&self.agents_b(), &self.assassins_b())?,
        ))
    }
}

/// Build a grid from agent and assassin word indices; everything else is a bystander.
///
/// Assassins are written last.
pub fn create_grid(agents: &[usize], assassins: &[usize]) -> Result<Grid> {
    let mut grid = Grid::bystanders();
    for &index in agents {
        grid.set(index, TileType::Agent)?;
    }
    for &index in assassins {
        grid.set(index, TileType::Assassin)?;
    }
    Ok(grid)
}

/// Generate and check a matching pair of grids.
///
/// Both grids are in viewer A's orientation; use [`GridPair::b_from_own_seat`]
/// before showing B to its player.
pub fn generate_word_grids<R: Rng + ?Sized>(rng: &mut R) -> Result<GridPair> {
    let partition = Partition::draw(rng)?;
    debug!(
        "partition: common agents {:?}, common assassin {:?}, opposite agents {:?}/{:?}",
        partition.agent_common, partition.assassin_common, partition.agent_opp_a, partition.agent_opp_b
    );

    let pair = partition.into_pair()?;
    check_grids(&pair)?;
    Ok(pair)
}

/// Generate the grid pair for a single seed
pub fn generate_for_seed(seed: u64) -> Result<GridPair> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_word_grids(&mut rng)
}

/// Generate `count` cards, one per seed from `start_seed` upwards
pub fn generate_cards(start_seed: u64, count: usize) -> Result<Vec<Card>> {
    info!("Generating {} cards from seed {}", count, start_seed);

    let mut cards = Vec::with_capacity(count);
    for n in 0..count {
        let seed = u64::try_from(n)
            .ok()
            .and_then(|n| start_seed.checked_add(n))
            .ok_or(GridError::SeedOverflow { start_seed, count })?;
        let grids = generate_for_seed(seed)?;
        cards.push(Card { seed, grids });
    }
    Ok(cards)
}
