use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of tiles along one edge of a key card
pub const GRID_SIDE: usize = 5;

/// Number of tiles (and words) on a key card
pub const GRID_SIZE: usize = GRID_SIDE * GRID_SIDE;

/// Role of a single tile on a key card
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TileType {
    Bystander,
    Assassin,
    Agent,
}

impl TileType {
    /// Single character used when printing a card as text
    pub fn symbol(&self) -> char {
        match self {
            TileType::Bystander => ' ',
            TileType::Assassin => 'x',
            TileType::Agent => '*',
        }
    }
}

/// Which player's side of a key card
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Side {
    A,
    B,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => f.write_str("A"),
            Side::B => f.write_str("B"),
        }
    }
}

/// 5x5 grid of tile roles, indexed row-major (`row * 5 + col`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid([TileType; GRID_SIZE]);

impl Grid {
    /// Grid with every tile a bystander
    pub fn bystanders() -> Self {
        Self([TileType::Bystander; GRID_SIZE])
    }

    pub fn from_tiles(tiles: [TileType; GRID_SIZE]) -> Self {
        Self(tiles)
    }

    pub fn tiles(&self) -> &[TileType; GRID_SIZE] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<TileType> {
        self.0.get(index).copied()
    }

    /// Overwrite the tile at `index`
    pub fn set(&mut self, index: usize, tile: TileType) -> crate::error::Result<()> {
        let slot = self
            .0
            .get_mut(index)
            .ok_or(crate::error::GridError::IndexOutOfRange { index })?;
        *slot = tile;
        Ok(())
    }

    pub fn count(&self, tile: TileType) -> usize {
        self.0.iter().filter(|t| **t == tile).count()
    }

    /// Number of indices where this grid holds `mine` and `other` holds `theirs`
    pub fn overlap(&self, mine: TileType, other: &Grid, theirs: TileType) -> usize {
        self.0
            .iter()
            .zip(other.0.iter())
            .filter(|(a, b)| **a == mine && **b == theirs)
            .count()
    }

    /// Rows of the grid, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[TileType]> {
        self.0.chunks(GRID_SIDE)
    }

    /// The grid as seen from the opposite seat: tile `i` becomes tile `24 - i`
    pub fn reversed(&self) -> Self {
        let mut tiles = self.0;
        tiles.reverse();
        Self(tiles)
    }
}

impl TryFrom<Vec<TileType>> for Grid {
    type Error = Vec<TileType>;

    fn try_from(tiles: Vec<TileType>) -> Result<Self, Self::Error> {
        let tiles: [TileType; GRID_SIZE] = tiles.try_into()?;
        Ok(Self(tiles))
    }
}

impl Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.as_slice().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tiles = Vec::<TileType>::deserialize(deserializer)?;
        let len = tiles.len();
        Grid::try_from(tiles).map_err(|_| {
            serde::de::Error::invalid_length(len, &"a grid of exactly 25 tiles")
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for tile in row {
                write!(f, "[{}]", tile.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Both sides of one key card, each in generation space (viewer A's orientation)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GridPair {
    pub a: Grid,
    pub b: Grid,
}

impl GridPair {
    pub fn new(a: Grid, b: Grid) -> Self {
        Self { a, b }
    }

    /// Grid B as its own player sees it across the table
    pub fn b_from_own_seat(&self) -> Grid {
        self.b.reversed()
    }
}

/// A seed together with the grid pair it produces
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Card {
    pub seed: u64,
    #[serde(flatten)]
    pub grids: GridPair,
}

impl Card {
    /// Printed card label, e.g. `0007/B`
    pub fn label(&self, side: Side) -> String {
        format!("{:04}/{}", self.seed, side)
    }

    /// Grid for `side` in the orientation its player holds it
    pub fn seat_view(&self, side: Side) -> Grid {
        match side {
            Side::A => self.grids.a,
            Side::B => self.grids.b_from_own_seat(),
        }
    }
}
