//! Straight corridor placement.
//!
//! A corridor is validated once, then the same geometry is committed. It runs
//! forward from its entrance until it meets open floor (joined) or reaches its
//! rolled length (dead end). Dead ends are only kept when pruning is off.

use crate::types::Vector;

use super::grid::Grid;
use super::worklist::Doorway;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CorridorEnd {
    /// The cell past the last step is open; the last step becomes a door.
    Joined,
    /// The cell past the last step is sealed and queued as a doorway.
    DeadEnd,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct CorridorPlan {
    pub(crate) entrance: Vector,
    pub(crate) heading: Vector,
    pub(crate) length: i32,
    pub(crate) end: CorridorEnd,
}

/// Checks a corridor of up to `requested_length` steps without touching the grid.
pub(crate) fn plan_corridor(
    grid: &Grid,
    entrance: Vector,
    heading: Vector,
    requested_length: i32,
    prune_dead_ends: bool,
) -> Option<CorridorPlan> {
    let mut length = requested_length;
    let mut joined = false;

    for step in 1..=requested_length {
        let pos = entrance + heading * step;
        if !grid.in_bounds_interior(pos) {
            return None;
        }
        if !grid.is_wall(pos) {
            joined = true;
            length = step - 1;
            break;
        }
        if !grid.is_wall(pos + heading.left())
            || !grid.is_wall(pos + heading.right())
            || grid.is_permawall(pos)
        {
            return None;
        }
    }

    // Anything shorter would put two doors next to each other.
    if length <= 1 {
        return None;
    }

    let end = if joined {
        CorridorEnd::Joined
    } else if prune_dead_ends {
        return None;
    } else {
        let beyond = entrance + heading * (length + 1);
        if !grid.in_bounds_interior(beyond) || grid.is_permawall(beyond) {
            return None;
        }
        if grid.is_wall(beyond) { CorridorEnd::DeadEnd } else { CorridorEnd::Joined }
    };

    Some(CorridorPlan { entrance, heading, length, end })
}

impl CorridorPlan {
    pub(crate) fn cells(self) -> impl Iterator<Item = Vector> {
        (1..=self.length).map(move |step| self.entrance + self.heading * step)
    }

    pub(crate) fn last_cell(self) -> Vector {
        self.entrance + self.heading * self.length
    }

    /// Carves the corridor with wall flanks and returns the seal doorway of a dead end.
    pub(crate) fn commit(self, grid: &mut Grid) -> Option<Doorway> {
        for pos in self.cells() {
            grid.carve_floor(pos);
            grid.fill_wall(pos + self.heading.left());
            grid.fill_wall(pos + self.heading.right());
        }

        let last = self.last_cell();
        match self.end {
            CorridorEnd::Joined => {
                grid.carve_door(last);
                None
            }
            CorridorEnd::DeadEnd => {
                let seal = last + self.heading;
                grid.fill_wall(seal);
                Some(Doorway::seal(seal, self.heading))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TileKind;

    fn grid_with_floor(at: Vector) -> Grid {
        let mut grid = Grid::new(20, 20);
        grid.carve_floor(at);
        grid
    }

    #[test]
    fn corridor_truncates_at_the_first_open_cell() {
        let entrance = Vector::new(10, 15);
        let mut grid = grid_with_floor(Vector::new(10, 11));

        let plan = plan_corridor(&grid, entrance, Vector::NORTH, 6, true)
            .expect("corridor should reach the floor at step four");
        assert_eq!(plan.length, 3);
        assert_eq!(plan.end, CorridorEnd::Joined);

        assert_eq!(plan.commit(&mut grid), None);
        assert_eq!(grid.tile(Vector::new(10, 14)), TileKind::Floor);
        assert_eq!(grid.tile(Vector::new(10, 13)), TileKind::Floor);
        assert_eq!(grid.tile(Vector::new(10, 12)), TileKind::Door);
        // The cell it ran into is left as it was.
        assert_eq!(grid.tile(Vector::new(10, 11)), TileKind::Floor);
        for y in 12..=14 {
            assert_eq!(grid.tile(Vector::new(9, y)), TileKind::Wall);
            assert_eq!(grid.tile(Vector::new(11, y)), TileKind::Wall);
        }
        assert_eq!(grid.tile(entrance), TileKind::Unknown);
        assert_eq!(grid.tile(Vector::new(9, 11)), TileKind::Unknown);
    }

    #[test]
    fn corridor_leaving_the_interior_fails_without_mutation() {
        let grid = grid_with_floor(Vector::new(10, 10));
        let before = grid.clone();
        // Steps reach y=2 and y=1, then the border row at step three.
        let plan = plan_corridor(&grid, Vector::new(5, 3), Vector::NORTH, 6, true);
        assert_eq!(plan, None);
        assert_eq!(grid, before);
    }

    #[test]
    fn dead_end_is_pruned_by_default() {
        let grid = Grid::new(20, 20);
        assert_eq!(plan_corridor(&grid, Vector::new(10, 15), Vector::NORTH, 4, true), None);
    }

    #[test]
    fn single_step_corridor_is_rejected() {
        let grid = grid_with_floor(Vector::new(10, 13));
        assert_eq!(plan_corridor(&grid, Vector::new(10, 15), Vector::NORTH, 6, true), None);
    }

    #[test]
    fn immediately_blocked_corridor_is_rejected() {
        let grid = grid_with_floor(Vector::new(10, 14));
        assert_eq!(plan_corridor(&grid, Vector::new(10, 15), Vector::NORTH, 6, true), None);
    }

    #[test]
    fn corridor_may_not_run_alongside_floor() {
        let mut grid = grid_with_floor(Vector::new(10, 10));
        grid.carve_floor(Vector::new(11, 13));
        assert_eq!(plan_corridor(&grid, Vector::new(10, 15), Vector::NORTH, 6, true), None);
    }

    #[test]
    fn corridor_may_not_cut_through_a_permawall() {
        let mut grid = grid_with_floor(Vector::new(10, 10));
        grid.mark_permawall(Vector::new(10, 12));
        assert_eq!(plan_corridor(&grid, Vector::new(10, 15), Vector::NORTH, 6, true), None);
    }

    #[test]
    fn flanking_permawall_survives_the_commit() {
        let mut grid = grid_with_floor(Vector::new(10, 11));
        let corner = Vector::new(9, 13);
        grid.mark_permawall(corner);

        let plan = plan_corridor(&grid, Vector::new(10, 15), Vector::NORTH, 6, true)
            .expect("permawall flanks do not block a corridor");
        plan.commit(&mut grid);
        assert_eq!(grid.tile(corner), TileKind::Permawall);
    }

    #[test]
    fn kept_dead_end_seals_the_next_cell_and_queues_it() {
        let mut grid = Grid::new(20, 20);
        let plan = plan_corridor(&grid, Vector::new(10, 15), Vector::NORTH, 4, false)
            .expect("dead ends are allowed when pruning is off");
        assert_eq!(plan.end, CorridorEnd::DeadEnd);
        assert_eq!(plan.length, 4);

        let seal = plan.commit(&mut grid).expect("dead end should queue its seal");
        assert_eq!(seal, Doorway::seal(Vector::new(10, 10), Vector::NORTH));
        assert_eq!(grid.tile(Vector::new(10, 10)), TileKind::Wall);
        assert_eq!(grid.tile(Vector::new(10, 11)), TileKind::Floor);
        assert_eq!(grid.tile(Vector::new(10, 14)), TileKind::Floor);
    }

    #[test]
    fn kept_dead_end_may_not_seal_into_the_border() {
        let grid = Grid::new(20, 20);
        // Four steps end at y=1; the seal would land on the border row.
        assert_eq!(plan_corridor(&grid, Vector::new(10, 5), Vector::NORTH, 4, false), None);
    }

    #[test]
    fn full_length_corridor_touching_floor_joins_when_dead_ends_are_kept() {
        let mut grid = grid_with_floor(Vector::new(10, 10));
        let plan = plan_corridor(&grid, Vector::new(10, 15), Vector::NORTH, 4, false)
            .expect("corridor ending next to floor is joined");
        assert_eq!(plan.end, CorridorEnd::Joined);
        assert_eq!(plan.commit(&mut grid), None);
        assert_eq!(grid.tile(Vector::new(10, 11)), TileKind::Door);
    }
}
