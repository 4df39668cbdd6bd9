pub mod config;
pub mod error;
pub mod generator;
pub mod sampler;
pub mod types;
pub mod validate;

// Re-export commonly used types
pub use error::{GridError, Invariant};
pub use generator::{generate_cards, generate_for_seed, generate_word_grids, Partition};
pub use sampler::choose;
pub use types::{Card, Grid, GridPair, Side, TileType};
pub use validate::{check_grid, check_grids};
