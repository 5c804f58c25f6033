pub mod config;
pub mod mapgen;
pub mod render;
pub mod types;

pub use config::{ConfigError, GeneratorConfig, MAX_DIMENSION};
pub use mapgen::{
    ChaChaSource, DungeonGenerator, GeneratedDungeon, GenerationStats, RandomSource,
    generate_dungeon,
};
pub use render::render_ascii;
pub use types::*;
