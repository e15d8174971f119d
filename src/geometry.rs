//! Grid geometry: positions, offsets, cardinal directions, and table bounds.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// A coordinate on the tabletop grid. `x` grows east, `y` grows north,
/// with `(0, 0)` at the south-west corner.
pub type Position = IVec2;

/// A displacement between two positions.
pub type Offset = IVec2;

/// Adds an offset to a position, yielding the candidate position.
///
/// Purely arithmetic; bounds are the caller's concern (see [`Table::contains`]).
pub fn add_offset(position: Position, offset: Offset) -> Position {
    position + offset
}

/// Returns the position one cell ahead of `position` when facing `direction`.
pub fn translate(position: Position, direction: Direction) -> Position {
    add_offset(position, direction.offset())
}

/// The four cardinal facings, cyclic under quarter turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// The facing after a 90° counter-clockwise turn.
    pub fn left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// The facing after a 90° clockwise turn.
    pub fn right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// Unit offset of a single step taken while facing this direction.
    pub fn offset(self) -> Offset {
        match self {
            Self::North => IVec2::new(0, 1),
            Self::East => IVec2::new(1, 0),
            Self::South => IVec2::new(0, -1),
            Self::West => IVec2::new(-1, 0),
        }
    }

    /// Canonical uppercase name, as used in report output and command text.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::North => "NORTH",
            Self::East => "EAST",
            Self::South => "SOUTH",
            Self::West => "WEST",
        }
    }

    /// Parses a canonical uppercase name. Anything else is `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "NORTH" => Some(Self::North),
            "EAST" => Some(Self::East),
            "SOUTH" => Some(Self::South),
            "WEST" => Some(Self::West),
            _ => None,
        }
    }
}

/// The tabletop: an immutable `width` × `height` grid of valid cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Number of cells along the x axis.
    pub width: i32,
    /// Number of cells along the y axis.
    pub height: i32,
}

impl Table {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Whether `position` lies on the table: `0 <= x < width` and `0 <= y < height`.
    pub fn contains(&self, position: Position) -> bool {
        (0..self.width).contains(&position.x) && (0..self.height).contains(&position.y)
    }
}

impl Default for Table {
    /// The conventional 5×5 tabletop.
    fn default() -> Self {
        Self {
            width: 5,
            height: 5,
        }
    }
}
