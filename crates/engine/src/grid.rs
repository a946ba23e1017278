use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{GRID_HEIGHT, GRID_WIDTH};
use crate::tiles::{DIRT, OUT_OF_BOUNDS};

/// The city's tile grid plus the auto-bulldoze placement policy.
///
/// Coordinates are signed so translated views can probe past the map
/// edge; reads off the map return [`OUT_OF_BOUNDS`] and writes off the
/// map are dropped.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileGrid {
    pub tiles: Vec<u16>,
    pub width: i32,
    pub height: i32,
    /// When set, placement may clear certain occupants at extra cost
    /// instead of rejecting.
    pub auto_bulldoze: bool,
}

impl Default for TileGrid {
    fn default() -> Self {
        Self::new(GRID_WIDTH, GRID_HEIGHT)
    }
}

impl TileGrid {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            tiles: vec![DIRT; (width * height) as usize],
            width,
            height,
            auto_bulldoze: true,
        }
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        (y * self.width + x) as usize
    }

    #[inline]
    pub fn get_tile(&self, x: i32, y: i32) -> u16 {
        if self.in_bounds(x, y) {
            self.tiles[self.index(x, y)]
        } else {
            OUT_OF_BOUNDS
        }
    }

    #[inline]
    pub fn set_tile(&mut self, x: i32, y: i32, tile: u16) {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            self.tiles[idx] = tile;
        }
    }
}
