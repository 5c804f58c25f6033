//! Finished dungeon handed to renderers, plus counters describing how it was dug.

use xxhash_rust::xxh3::xxh3_64;

use crate::types::{TileKind, Vector};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationStats {
    pub rooms: usize,
    pub corridors: usize,
    /// Corridors committed without meeting existing floor.
    pub dead_ends: usize,
    /// Candidates where a room or corridor was dug.
    pub doorways_connected: usize,
    /// Candidates where every try failed to fit.
    pub doorways_failed: usize,
    /// Candidates dropped because their cell had become a permawall.
    pub doorways_discarded: usize,
    pub iterations: usize,
    pub hit_iteration_cap: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedDungeon {
    pub width: usize,
    pub height: usize,
    /// Row-major, `width * height` entries.
    pub tiles: Vec<TileKind>,
    pub entrance: Vector,
    pub stats: GenerationStats,
}

impl GeneratedDungeon {
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(16 + self.tiles.len());
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        bytes.extend(self.entrance.x.to_le_bytes());
        bytes.extend(self.entrance.y.to_le_bytes());
        for tile in &self.tiles {
            bytes.push(match tile {
                TileKind::Unknown => 0,
                TileKind::Floor => 1,
                TileKind::Wall => 2,
                TileKind::Permawall => 3,
                TileKind::Door => 4,
            });
        }
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }

    pub fn contains(&self, pos: Vector) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// Positions outside the grid read as `Unknown`.
    pub fn tile_at(&self, pos: Vector) -> TileKind {
        if !self.contains(pos) {
            return TileKind::Unknown;
        }
        self.tiles[(pos.y as usize) * self.width + (pos.x as usize)]
    }

    pub fn count(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|&&tile| tile == kind).count()
    }

    pub fn positions(&self) -> impl Iterator<Item = Vector> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width).map(move |x| Vector::new(x as i32, y as i32))
        })
    }
}
