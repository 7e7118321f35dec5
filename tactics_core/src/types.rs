//! Core types shared across resolution stages

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a combatant, as assigned by the turn engine
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CombatantId(pub String);

impl From<&str> for CombatantId {
    fn from(s: &str) -> Self {
        CombatantId(s.to_string())
    }
}

impl From<String> for CombatantId {
    fn from(s: String) -> Self {
        CombatantId(s)
    }
}

impl fmt::Display for CombatantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which side a combatant fights for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Faction {
    Player,
    Allied,
    #[default]
    Enemy,
    Neutral,
}

/// A tile coordinate on the tactical map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TilePos {
    pub x: i32,
    pub y: i32,
}

impl TilePos {
    pub const fn new(x: i32, y: i32) -> Self {
        TilePos { x, y }
    }
}

/// One of the eight compass directions, clockwise from north
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All directions in index order
    pub fn all() -> &'static [Direction] {
        &[
            Direction::North,
            Direction::NorthEast,
            Direction::East,
            Direction::SouthEast,
            Direction::South,
            Direction::SouthWest,
            Direction::West,
            Direction::NorthWest,
        ]
    }

    /// Index in 0..8
    pub fn index(self) -> usize {
        self as usize
    }

    /// Direction for an index; out-of-range values wrap
    pub fn from_index(index: usize) -> Direction {
        Self::all()[index % 8]
    }

    /// Direction of the step from `from` toward `to`.
    /// Identical tiles resolve to north.
    pub fn between(from: TilePos, to: TilePos) -> Direction {
        let dx = (to.x - from.x).signum();
        // y grows southward
        let dy = (to.y - from.y).signum();
        match (dx, dy) {
            (0, -1) | (0, 0) => Direction::North,
            (1, -1) => Direction::NorthEast,
            (1, 0) => Direction::East,
            (1, 1) => Direction::SouthEast,
            (0, 1) => Direction::South,
            (-1, 1) => Direction::SouthWest,
            (-1, 0) => Direction::West,
            _ => Direction::NorthWest,
        }
    }
}

/// Discrete obstruction level at a tile edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverLevel {
    #[default]
    None = 0,
    Light = 1,
    Medium = 2,
    Heavy = 3,
}

impl CoverLevel {
    /// Cover level from a raw 0..=3 value; anything above 3 is heavy cover
    pub fn from_level(level: u8) -> CoverLevel {
        match level {
            0 => CoverLevel::None,
            1 => CoverLevel::Light,
            2 => CoverLevel::Medium,
            _ => CoverLevel::Heavy,
        }
    }

    pub fn level(self) -> u8 {
        self as u8
    }

    pub fn is_cover(self) -> bool {
        self != CoverLevel::None
    }
}
