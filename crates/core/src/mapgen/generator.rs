//! Worklist-driven digging: seed the entrance, then keep resolving random
//! doorway candidates until none remain.

use std::ops::RangeInclusive;

use log::{debug, trace, warn};

use crate::config::{ConfigError, GeneratorConfig};
use crate::types::{TileKind, Vector};

use super::corridor::plan_corridor;
use super::grid::Grid;
use super::model::{GeneratedDungeon, GenerationStats};
use super::room::RoomPlan;
use super::seed::{ChaChaSource, RandomSource};
use super::worklist::{Doorway, Worklist};

pub struct DungeonGenerator<R: RandomSource = ChaChaSource> {
    config: GeneratorConfig,
    rng: R,
}

impl DungeonGenerator<ChaChaSource> {
    pub fn from_seed(seed: u64, config: GeneratorConfig) -> Result<Self, ConfigError> {
        Self::with_source(config, ChaChaSource::from_seed(seed))
    }
}

impl<R: RandomSource> DungeonGenerator<R> {
    pub fn with_source(config: GeneratorConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Digs a fresh dungeon. Later calls continue the same random stream.
    pub fn generate(&mut self) -> GeneratedDungeon {
        let mut digger = Digger::new(&self.config, &mut self.rng);
        digger.open_entrance();
        digger.drain();
        digger.finish()
    }
}

/// Per-run state: the grid, the pending candidates and the counters.
struct Digger<'a, R: RandomSource> {
    config: &'a GeneratorConfig,
    rng: &'a mut R,
    grid: Grid,
    worklist: Worklist,
    room_sizes: RangeInclusive<i32>,
    corridor_lengths: RangeInclusive<i32>,
    entrance: Vector,
    stats: GenerationStats,
}

impl<'a, R: RandomSource> Digger<'a, R> {
    fn new(config: &'a GeneratorConfig, rng: &'a mut R) -> Self {
        Self {
            config,
            rng,
            grid: Grid::new(config.width, config.height),
            worklist: Worklist::default(),
            room_sizes: config.min_room_size..=config.max_room_size,
            corridor_lengths: config.min_corridor_length..=config.max_corridor_length,
            entrance: Vector::new((config.width / 2) as i32, config.height as i32 - 1),
            stats: GenerationStats::default(),
        }
    }

    /// Bottom-centre door facing north. Its side neighbours are sealed so the
    /// first room cannot be dug sideways along the map edge.
    fn open_entrance(&mut self) {
        self.grid.carve_door(self.entrance);
        for side in [self.entrance + Vector::EAST, self.entrance + Vector::WEST] {
            if self.grid.in_bounds_or_border(side) {
                self.grid.fill_wall(side);
            }
        }
        self.worklist.push(Doorway::door(self.entrance, Vector::NORTH));
    }

    fn drain(&mut self) {
        while !self.worklist.is_empty() {
            if self.config.max_iterations.is_some_and(|cap| self.stats.iterations >= cap) {
                warn!(
                    "iteration cap of {} reached with {} doorways pending",
                    self.stats.iterations,
                    self.worklist.len()
                );
                self.stats.hit_iteration_cap = true;
                break;
            }
            let Some(doorway) = self.worklist.take_random(&mut *self.rng) else {
                break;
            };
            self.stats.iterations += 1;
            self.resolve(doorway);
        }
    }

    fn resolve(&mut self, doorway: Doorway) {
        let location = doorway.location;
        if self.grid.is_permawall(location) {
            trace!("discarding doorway at {location:?}: now a room corner");
            self.stats.doorways_discarded += 1;
            return;
        }

        if self.dig_random(location, doorway.heading) {
            self.stats.doorways_connected += 1;
            if doorway.resolves_to_door {
                self.grid.carve_door(location);
            } else if self.is_reopenable(location) {
                self.grid.carve_floor(location);
            }
        } else {
            trace!("doorway at {location:?} heading {:?} found no fit", doorway.heading);
            self.stats.doorways_failed += 1;
            if !doorway.resolves_to_door && self.is_reopenable(location) {
                self.grid.carve_floor(location);
            }
        }
    }

    fn is_reopenable(&self, pos: Vector) -> bool {
        matches!(self.grid.tile(pos), TileKind::Unknown | TileKind::Wall)
    }

    /// Up to `max_tries` independent room-or-corridor draws.
    fn dig_random(&mut self, pos: Vector, heading: Vector) -> bool {
        for _ in 0..self.config.max_tries {
            let placed = match self.rng.rand_range(0, 1) {
                0 => self.dig_room(pos, heading),
                _ => self.dig_corridor(pos, heading),
            };
            if placed {
                return true;
            }
        }
        false
    }

    fn dig_room(&mut self, entrance: Vector, heading: Vector) -> bool {
        let plan = RoomPlan::roll(&mut *self.rng, &self.room_sizes, entrance, heading);
        if !plan.fits(&self.grid) {
            return false;
        }
        let doorways = plan.commit(&mut self.grid, &mut *self.rng);
        self.worklist.extend(doorways);
        self.stats.rooms += 1;
        trace!(
            "room {}x{} at corner {:?} facing {heading:?}",
            plan.width,
            plan.depth,
            plan.corner()
        );
        true
    }

    fn dig_corridor(&mut self, entrance: Vector, heading: Vector) -> bool {
        let length =
            self.rng.rand_range(*self.corridor_lengths.start(), *self.corridor_lengths.end());
        let Some(plan) =
            plan_corridor(&self.grid, entrance, heading, length, self.config.prune_dead_ends)
        else {
            return false;
        };
        if let Some(seal) = plan.commit(&mut self.grid) {
            self.worklist.push(seal);
            self.stats.dead_ends += 1;
        }
        self.stats.corridors += 1;
        trace!("corridor of {} from {entrance:?} heading {heading:?}", plan.length);
        true
    }

    fn finish(self) -> GeneratedDungeon {
        let width = self.grid.width();
        let height = self.grid.height();
        debug!("dug {width}x{height} dungeon: {:?}", self.stats);
        GeneratedDungeon {
            width,
            height,
            tiles: self.grid.into_tiles(),
            entrance: self.entrance,
            stats: self.stats,
        }
    }
}
