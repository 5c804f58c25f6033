//! Structural checks over a finished dungeon, shared by tests and the fuzz harness.

use std::collections::{BTreeSet, VecDeque};

use crate::types::{TileKind, Vector};

use super::model::GeneratedDungeon;

/// Walkable tiles that cannot be reached from the entrance through floor and doors.
pub fn unreachable_tiles(dungeon: &GeneratedDungeon) -> Vec<Vector> {
    let mut seen = BTreeSet::new();
    if dungeon.tile_at(dungeon.entrance).is_walkable() {
        let mut open = VecDeque::from([dungeon.entrance]);
        seen.insert(dungeon.entrance);
        while let Some(pos) = open.pop_front() {
            for next in pos.neighbors() {
                if seen.contains(&next) || !dungeon.tile_at(next).is_walkable() {
                    continue;
                }
                seen.insert(next);
                open.push_back(next);
            }
        }
    }

    dungeon
        .positions()
        .filter(|pos| dungeon.tile_at(*pos).is_walkable() && !seen.contains(pos))
        .collect()
}

/// Floor or doors on the outer ring, other than the entrance itself.
pub fn border_violations(dungeon: &GeneratedDungeon) -> Vec<Vector> {
    dungeon
        .positions()
        .filter(|&pos| {
            let on_border = pos.x == 0
                || pos.y == 0
                || pos.x as usize == dungeon.width - 1
                || pos.y as usize == dungeon.height - 1;
            on_border && pos != dungeon.entrance && dungeon.tile_at(pos).is_walkable()
        })
        .collect()
}

/// Every resolved candidate was either connected, failed or discarded, and when
/// the run drained naturally every queued candidate was resolved.
pub fn worklist_balanced(dungeon: &GeneratedDungeon) -> bool {
    let stats = &dungeon.stats;
    let resolved = stats.doorways_connected + stats.doorways_failed + stats.doorways_discarded;
    if resolved != stats.iterations {
        return false;
    }
    stats.hit_iteration_cap || stats.iterations == 1 + 3 * stats.rooms + stats.dead_ends
}

/// Permawall count cannot exceed four corners per room; shared corners count once.
pub fn permawall_within_room_corners(dungeon: &GeneratedDungeon) -> bool {
    dungeon.count(TileKind::Permawall) <= 4 * dungeon.stats.rooms
}
