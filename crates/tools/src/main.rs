use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use digger_core::{DungeonGenerator, render_ascii};
use log::info;

mod seed;
mod settings;

#[derive(Parser)]
#[command(author, version, about = "Dig a random dungeon and print it as ASCII", long_about = None)]
struct Args {
    /// Map width in tiles
    width: Option<usize>,
    /// Map height in tiles
    height: Option<usize>,
    /// Seed for the random stream; a fresh one is generated when omitted
    #[arg(short, long)]
    seed: Option<u64>,
    /// TOML file with generator settings; command-line values take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Keep corridors that do not run into existing floor
    #[arg(long)]
    keep_dead_ends: bool,
    /// Room-or-corridor attempts per doorway
    #[arg(long)]
    max_tries: Option<u32>,
    /// Stop after resolving this many doorways
    #[arg(long)]
    max_iterations: Option<usize>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => settings::load_config(path)?,
        None => Default::default(),
    };
    settings::apply_overrides(
        &mut config,
        &settings::Overrides {
            width: args.width,
            height: args.height,
            keep_dead_ends: args.keep_dead_ends,
            max_tries: args.max_tries,
            max_iterations: args.max_iterations,
        },
    );

    let seed = args.seed.unwrap_or_else(seed::generate_runtime_seed);
    eprintln!("seed: {seed}");

    let mut generator = DungeonGenerator::from_seed(seed, config)
        .with_context(|| format!("Invalid generator settings for seed {seed}"))?;
    let dungeon = generator.generate();

    info!(
        "{}x{} dungeon, fingerprint {:016x}, {:?}",
        dungeon.width,
        dungeon.height,
        dungeon.fingerprint(),
        dungeon.stats
    );
    print!("{}", render_ascii(&dungeon));

    Ok(())
}
