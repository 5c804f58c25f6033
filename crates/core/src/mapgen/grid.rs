//! Tile store with bounds predicates and guarded mutators.
//!
//! Mutators panic on transitions the placement checks should have ruled out;
//! reaching one means a fit check was skipped.

use crate::types::{TileKind, Vector};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<TileKind>,
}

impl Grid {
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Self { width, height, tiles: vec![TileKind::Unknown; width * height] }
    }

    pub(crate) fn width(&self) -> usize {
        self.width
    }

    pub(crate) fn height(&self) -> usize {
        self.height
    }

    /// Inside the grid, border ring included.
    pub(crate) fn in_bounds_or_border(&self, pos: Vector) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// Inside the grid and off the outer border ring.
    pub(crate) fn in_bounds_interior(&self, pos: Vector) -> bool {
        pos.x >= 1
            && pos.y >= 1
            && (pos.x as usize) + 1 < self.width
            && (pos.y as usize) + 1 < self.height
    }

    pub(crate) fn tile(&self, pos: Vector) -> TileKind {
        self.tiles[self.index(pos)]
    }

    pub(crate) fn is_wall(&self, pos: Vector) -> bool {
        self.tile(pos).is_wall_like()
    }

    pub(crate) fn is_permawall(&self, pos: Vector) -> bool {
        self.tile(pos) == TileKind::Permawall
    }

    pub(crate) fn carve_floor(&mut self, pos: Vector) {
        let index = self.index(pos);
        let current = self.tiles[index];
        assert!(
            matches!(current, TileKind::Unknown | TileKind::Wall),
            "cannot carve floor over {current:?} at {pos:?}"
        );
        self.tiles[index] = TileKind::Floor;
    }

    pub(crate) fn carve_door(&mut self, pos: Vector) {
        let index = self.index(pos);
        let current = self.tiles[index];
        assert!(current != TileKind::Permawall, "cannot place a door on permawall at {pos:?}");
        self.tiles[index] = TileKind::Door;
    }

    /// Permawall stays permawall.
    pub(crate) fn fill_wall(&mut self, pos: Vector) {
        let index = self.index(pos);
        match self.tiles[index] {
            TileKind::Unknown | TileKind::Wall => self.tiles[index] = TileKind::Wall,
            TileKind::Permawall => {}
            current => panic!("cannot fill wall over {current:?} at {pos:?}"),
        }
    }

    pub(crate) fn mark_permawall(&mut self, pos: Vector) {
        let index = self.index(pos);
        let current = self.tiles[index];
        assert!(current.is_wall_like(), "cannot mark permawall over {current:?} at {pos:?}");
        self.tiles[index] = TileKind::Permawall;
    }

    pub(crate) fn into_tiles(self) -> Vec<TileKind> {
        self.tiles
    }

    fn index(&self, pos: Vector) -> usize {
        assert!(
            self.in_bounds_or_border(pos),
            "grid access outside {}x{} at {pos:?}",
            self.width,
            self.height
        );
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}
