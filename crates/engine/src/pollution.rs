use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{GRID_HEIGHT, GRID_WIDTH};

/// Per-tile pollution levels plus the running city-wide average.
///
/// The simulation tick rebuilds this field from emitters; within this
/// crate only park placement touches it.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollutionGrid {
    pub levels: Vec<u8>,
    pub width: i32,
    pub height: i32,
    pub average: u32,
}

impl Default for PollutionGrid {
    fn default() -> Self {
        Self::new(GRID_WIDTH, GRID_HEIGHT)
    }
}

impl PollutionGrid {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            levels: vec![0; (width * height) as usize],
            width,
            height,
            average: 0,
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
    pub fn get(&self, x: i32, y: i32) -> u8 {
        self.levels[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: i32, y: i32, level: u8) {
        let idx = self.index(x, y);
        self.levels[idx] = level;
    }

    /// Rescan the full field and update [`PollutionGrid::average`].
    pub fn recompute_average(&mut self) {
        let total: u64 = self.levels.iter().map(|&v| u64::from(v)).sum();
        self.average = (total / self.levels.len() as u64) as u32;
    }
}
