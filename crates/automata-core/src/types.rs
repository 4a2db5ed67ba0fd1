//! Core type definitions shared by the automata.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest number of competing species in multi-species Life
pub const MAX_SPECIES: usize = 8;

/// Highest cell value of the Belousov-Zhabotinsky automaton ("sick")
pub const BZ_STATE_MAX: u8 = 255;

/// 2D position on a grid. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn add(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Apply toroidal wrapping for given grid dimensions
    pub fn wrap(&self, width: i32, height: i32) -> Self {
        Self {
            x: ((self.x % width) + width) % width,
            y: ((self.y % height) + height) % height,
        }
    }

    /// Whether the position lies inside a `width` x `height` grid
    pub fn in_bounds(&self, width: i32, height: i32) -> bool {
        self.x >= 0 && self.x < width && self.y >= 0 && self.y < height
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// How neighbor lookups behave at the grid edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Boundary {
    /// Cells outside the grid read as empty
    #[default]
    ZeroFill,
    /// Toroidal topology
    Wrap,
}

impl Boundary {
    pub fn from_wrap(wrap: bool) -> Self {
        if wrap {
            Boundary::Wrap
        } else {
            Boundary::ZeroFill
        }
    }

    pub fn is_wrap(&self) -> bool {
        matches!(self, Boundary::Wrap)
    }
}

/// The eight Moore-neighborhood offsets, center excluded, in row-major order
pub const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];
