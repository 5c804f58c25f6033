//! Dungeon digging: rooms and corridors grown outward from a single entrance.

pub mod audit;
pub mod model;
pub mod seed;

mod corridor;
mod generator;
mod grid;
mod room;
#[cfg(test)]
mod test_support;
mod worklist;

pub use generator::DungeonGenerator;
pub use model::{GeneratedDungeon, GenerationStats};
pub use seed::{ChaChaSource, RandomSource};

use crate::config::{ConfigError, GeneratorConfig};

pub fn generate_dungeon(
    seed: u64,
    config: &GeneratorConfig,
) -> Result<GeneratedDungeon, ConfigError> {
    Ok(DungeonGenerator::from_seed(seed, config.clone())?.generate())
}
