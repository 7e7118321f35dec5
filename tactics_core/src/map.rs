//! Geometry queries the resolution code needs from the tactical map

use crate::types::{CoverLevel, Direction, TilePos};
use std::collections::HashMap;

/// Position and cover queries, answered by the map owner
///
/// Every query is expected to be O(1) and side-effect free.
pub trait TacticalMap {
    /// Distance in tiles between two positions
    fn distance_between(&self, a: TilePos, b: TilePos) -> i32;

    /// Direction of `to` as seen from `from`
    fn direction_from(&self, from: TilePos, to: TilePos) -> Direction;

    /// Cover protecting `tile` against fire arriving from `direction`
    fn cover_level_in_direction(&self, tile: TilePos, direction: Direction) -> CoverLevel;

    /// Whether standing on `tile` offers cover in any direction
    fn tile_offers_cover(&self, tile: TilePos) -> bool {
        Direction::all()
            .iter()
            .any(|&dir| self.cover_level_in_direction(tile, dir).is_cover())
    }
}

/// Simple 8-connected grid with per-tile, per-direction cover
///
/// Distance is Chebyshev (diagonal steps cost one tile).
#[derive(Debug, Clone, Default)]
pub struct GridMap {
    cover: HashMap<TilePos, [CoverLevel; 8]>,
}

impl GridMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set cover on one side of a tile
    pub fn set_cover(&mut self, tile: TilePos, direction: Direction, level: CoverLevel) {
        self.cover.entry(tile).or_insert([CoverLevel::None; 8])[direction.index()] = level;
    }

    /// Set the same cover on every side of a tile
    pub fn set_cover_all(&mut self, tile: TilePos, level: CoverLevel) {
        self.cover.insert(tile, [level; 8]);
    }

    pub fn with_cover(mut self, tile: TilePos, direction: Direction, level: CoverLevel) -> Self {
        self.set_cover(tile, direction, level);
        self
    }
}

impl TacticalMap for GridMap {
    fn distance_between(&self, a: TilePos, b: TilePos) -> i32 {
        (a.x - b.x).abs().max((a.y - b.y).abs())
    }

    fn direction_from(&self, from: TilePos, to: TilePos) -> Direction {
        Direction::between(from, to)
    }

    fn cover_level_in_direction(&self, tile: TilePos, direction: Direction) -> CoverLevel {
        self.cover
            .get(&tile)
            .map(|sides| sides[direction.index()])
            .unwrap_or_default()
    }
}
