use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// Integer grid vector, used both as an absolute tile coordinate and as a heading.
///
/// Screen orientation: `y` grows downward, so `NORTH` is `(0, -1)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vector {
    pub x: i32,
    pub y: i32,
}

impl Vector {
    pub const NORTH: Self = Self { x: 0, y: -1 };
    pub const EAST: Self = Self { x: 1, y: 0 };
    pub const SOUTH: Self = Self { x: 0, y: 1 };
    pub const WEST: Self = Self { x: -1, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// 90 degrees counter-clockwise on screen.
    pub const fn left(self) -> Self {
        Self { x: self.y, y: -self.x }
    }

    /// 90 degrees clockwise on screen.
    pub const fn right(self) -> Self {
        Self { x: -self.y, y: self.x }
    }

    /// Four-neighbourhood around this position.
    pub fn neighbors(self) -> [Self; 4] {
        [self + Self::NORTH, self + Self::EAST, self + Self::SOUTH, self + Self::WEST]
    }
}

impl Add for Vector {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self { x: self.x + other.x, y: self.y + other.y }
    }
}

impl Sub for Vector {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self { x: self.x - other.x, y: self.y - other.y }
    }
}

impl Mul<i32> for Vector {
    type Output = Self;

    fn mul(self, scalar: i32) -> Self {
        Self { x: self.x * scalar, y: self.y * scalar }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TileKind {
    #[default]
    Unknown,
    Floor,
    Wall,
    /// Room corner; never becomes floor or door.
    Permawall,
    Door,
}

impl TileKind {
    /// Unknown, wall and permawall all count as undug rock when checking fit.
    pub fn is_wall_like(self) -> bool {
        matches!(self, Self::Unknown | Self::Wall | Self::Permawall)
    }

    pub fn is_walkable(self) -> bool {
        matches!(self, Self::Floor | Self::Door)
    }
}
