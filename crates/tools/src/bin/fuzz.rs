use anyhow::{Result, bail};
use clap::Parser;
use digger_core::mapgen::audit::{
    border_violations, permawall_within_room_corners, unreachable_tiles, worklist_balanced,
};
use digger_core::{GeneratorConfig, generate_dungeon};
use log::debug;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    runs: u32,
    #[arg(long, default_value_t = 3)]
    min_size: usize,
    #[arg(long, default_value_t = 120)]
    max_size: usize,
    /// Also exercise runs that keep dead-end corridors
    #[arg(long)]
    mix_dead_ends: bool,
}

fn pick_size(rng: &mut ChaCha8Rng, min: usize, max: usize) -> usize {
    min + (rng.next_u64() as usize % (max - min + 1))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    if args.min_size == 0 || args.min_size > args.max_size {
        bail!("size range {}..={} is empty or starts at zero", args.min_size, args.max_size);
    }

    println!("Starting dig fuzz on seed {} for {} runs...", args.seed, args.runs);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let mut total_rooms = 0;
    let mut total_corridors = 0;
    for run in 0..args.runs {
        let run_seed = rng.next_u64();
        let width = pick_size(&mut rng, args.min_size, args.max_size);
        let height = pick_size(&mut rng, args.min_size, args.max_size);
        let prune_dead_ends = !args.mix_dead_ends || rng.next_u64() % 2 == 0;
        let config =
            GeneratorConfig { prune_dead_ends, ..GeneratorConfig::with_size(width, height) };

        let dungeon = generate_dungeon(run_seed, &config)?;
        let label =
            format!("run {run} seed={run_seed} size={width}x{height} prune={prune_dead_ends}");
        debug!("{label}: fingerprint {:016x}", dungeon.fingerprint());

        let unreachable = unreachable_tiles(&dungeon);
        if !unreachable.is_empty() {
            bail!(
                "{label}: {} tiles unreachable from the entrance, first at {:?}",
                unreachable.len(),
                unreachable[0]
            );
        }
        let border = border_violations(&dungeon);
        if !border.is_empty() {
            bail!("{label}: walkable tiles on the border at {border:?}");
        }
        if !worklist_balanced(&dungeon) {
            bail!("{label}: doorway accounting is off: {:?}", dungeon.stats);
        }
        if !permawall_within_room_corners(&dungeon) {
            bail!("{label}: more permawall than room corners");
        }

        total_rooms += dungeon.stats.rooms;
        total_corridors += dungeon.stats.corridors;
    }

    println!(
        "Fuzzing completed successfully: {total_rooms} rooms and {total_corridors} corridors dug."
    );
    Ok(())
}
