//! Plain-text rendering: one character per tile, one line per row.

use std::fmt;

use crate::mapgen::GeneratedDungeon;
use crate::types::TileKind;

pub fn glyph(tile: TileKind) -> char {
    match tile {
        TileKind::Unknown => ' ',
        TileKind::Floor => '.',
        TileKind::Wall | TileKind::Permawall => '#',
        TileKind::Door => '+',
    }
}

pub fn render_ascii(dungeon: &GeneratedDungeon) -> String {
    let mut out = String::with_capacity((dungeon.width + 1) * dungeon.height);
    for row in dungeon.tiles.chunks(dungeon.width.max(1)) {
        out.extend(row.iter().map(|&tile| glyph(tile)));
        out.push('\n');
    }
    out
}

impl fmt::Display for GeneratedDungeon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_ascii(self))
    }
}
