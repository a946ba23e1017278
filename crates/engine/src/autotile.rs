//! Bitmask auto-tiling of connective infrastructure.
//!
//! Roads, rail, and power lines each draw their visual variant from a
//! 16-entry table indexed by which of the four neighbors belong to the
//! same family. An edit can change how up to five cells should render,
//! so zone fixes fan out to the direct neighbors, and multi-tile stamps
//! fix their whole perimeter.

use crate::effect::{TileEffect, Translated};
use crate::tiles::family_of;

/// Neighbor probes in mask-bit order: north, east, south, west.
const DIRS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Re-tile the cell at the surface origin if it is connective. The
/// family never changes, only the variant within it.
pub fn fix_single(eff: &mut dyn TileEffect) {
    let Some(family) = family_of(eff.get_tile(0, 0)) else {
        return;
    };

    let mut mask = 0usize;
    for (bit, (dx, dy)) in DIRS.iter().enumerate() {
        if family_of(eff.get_tile(*dx, *dy)) == Some(family) {
            mask |= 1 << bit;
        }
    }

    eff.set_tile(0, 0, family.table()[mask]);
}

/// Fix the origin cell and its four direct neighbors.
pub fn fix_zone(eff: &mut dyn TileEffect) {
    fix_single(eff);
    for (dx, dy) in DIRS {
        let mut sub = Translated::new(eff, dx, dy);
        fix_single(&mut sub);
    }
}

/// Fix every cell on the perimeter of a `width x height` rectangle whose
/// top-left corner is the surface origin. Interior cells of a fresh
/// stamp have no new adjacencies, only the border can.
pub fn fix_border(eff: &mut dyn TileEffect, width: i32, height: i32) {
    for x in 0..width {
        let mut top = Translated::new(eff, x, 0);
        fix_zone(&mut top);
        let mut bottom = Translated::new(eff, x, height - 1);
        fix_zone(&mut bottom);
    }
    for y in 1..height - 1 {
        let mut left = Translated::new(eff, 0, y);
        fix_zone(&mut left);
        let mut right = Translated::new(eff, width - 1, y);
        fix_zone(&mut right);
    }
}
