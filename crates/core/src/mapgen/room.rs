//! Rectangular room placement in heading-relative coordinates.
//!
//! ```text
//! P######P   ^
//! #......#   | depth
//! #......#   |
//! P####+#P   v
//! ^    ^
//! |    entrance (entrance_offset columns right of the corner)
//! corner
//! ```
//!
//! Columns run along `heading.right()`, rows run along `heading`. The footprint
//! is the `width x depth` interior plus a one-tile wall margin; its four corners
//! become permawall.

use std::ops::RangeInclusive;

use crate::types::Vector;

use super::grid::Grid;
use super::seed::RandomSource;
use super::worklist::Doorway;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RoomPlan {
    pub(crate) entrance: Vector,
    pub(crate) heading: Vector,
    pub(crate) width: i32,
    pub(crate) depth: i32,
    pub(crate) entrance_offset: i32,
}

impl RoomPlan {
    pub(crate) fn roll(
        rng: &mut impl RandomSource,
        sizes: &RangeInclusive<i32>,
        entrance: Vector,
        heading: Vector,
    ) -> Self {
        let width = rng.rand_range(*sizes.start(), *sizes.end());
        let depth = rng.rand_range(*sizes.start(), *sizes.end());
        let entrance_offset = rng.rand_range(1, width);
        Self { entrance, heading, width, depth, entrance_offset }
    }

    pub(crate) fn corner(self) -> Vector {
        self.entrance + self.heading.left() * self.entrance_offset
    }

    fn cell(self, col: i32, row: i32) -> Vector {
        self.corner() + self.heading.right() * col + self.heading * row
    }

    pub(crate) fn footprint(self) -> impl Iterator<Item = Vector> {
        (0..self.depth + 2)
            .flat_map(move |row| (0..self.width + 2).map(move |col| self.cell(col, row)))
    }

    pub(crate) fn interior(self) -> impl Iterator<Item = Vector> {
        (1..=self.depth).flat_map(move |row| (1..=self.width).map(move |col| self.cell(col, row)))
    }

    pub(crate) fn corners(self) -> [Vector; 4] {
        [
            self.cell(0, 0),
            self.cell(self.width + 1, 0),
            self.cell(0, self.depth + 1),
            self.cell(self.width + 1, self.depth + 1),
        ]
    }

    /// The room may touch existing structure only at its own entrance.
    pub(crate) fn fits(self, grid: &Grid) -> bool {
        self.footprint().all(|pos| {
            grid.in_bounds_or_border(pos) && (pos == self.entrance || grid.is_wall(pos))
        })
    }

    /// Carves the room and returns doorways on the left, far and right walls.
    pub(crate) fn commit(self, grid: &mut Grid, rng: &mut impl RandomSource) -> [Doorway; 3] {
        for pos in self.footprint() {
            if pos != self.entrance {
                grid.fill_wall(pos);
            }
        }
        for corner in self.corners() {
            grid.mark_permawall(corner);
        }
        for pos in self.interior() {
            grid.carve_floor(pos);
        }
        grid.carve_door(self.entrance);

        let left = Doorway::door(self.cell(0, rng.rand_range(1, self.depth)), self.heading.left());
        let far =
            Doorway::door(self.cell(rng.rand_range(1, self.width), self.depth + 1), self.heading);
        let right = Doorway::door(
            self.cell(self.width + 1, rng.rand_range(1, self.depth)),
            self.heading.right(),
        );
        [left, far, right]
    }
}
