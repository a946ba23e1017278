//! Stroke orchestration: one user drag gesture from anchor to drag
//! target, evaluated speculatively (`preview`) or for real (`apply`).
//!
//! Both entry points tile the stroke's bounding rectangle with
//! footprint-sized stamps in row-major order and route each stamp to the
//! tool's placement algorithm through a translated surface. Order
//! matters: a later stamp's adjacency fix-up reads tiles an earlier
//! stamp just wrote.

use serde::{Deserialize, Serialize};

use crate::budget::CityBudget;
use crate::effect::{CommitEffect, PreviewEffect, TileEffect, ToolPreview, ToolResult, Translated};
use crate::grid::TileGrid;
use crate::placement::{apply_park, apply_zone, CityServices, StampContext};
use crate::pollution::PollutionGrid;
use crate::sim_rng::SimRng;
use crate::tiles::{COM_CENTER, IND_CENTER, RES_CENTER};
use crate::tools::ToolKind;

/// Rectangle of tiles covered by a stroke. Width and height are always
/// positive multiples of the tool's footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrokeBounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// One drag gesture. The anchor is fixed at construction; only the drag
/// target moves. A stroke is discarded after one `apply` or `preview`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolStroke {
    tool: ToolKind,
    anchor: (i32, i32),
    dest: (i32, i32),
}

impl ToolStroke {
    pub fn new(tool: ToolKind, x: i32, y: i32) -> Self {
        Self {
            tool,
            anchor: (x, y),
            dest: (x, y),
        }
    }

    pub fn drag_to(&mut self, x: i32, y: i32) {
        self.dest = (x, y);
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    pub fn location(&self) -> (i32, i32) {
        self.anchor
    }

    /// The footprint-aligned rectangle this stroke covers.
    pub fn bounds(&self) -> StrokeBounds {
        let (tw, th) = self.tool.size();
        let (x, width) = axis_extent(self.anchor.0, self.dest.0, tw);
        let (y, height) = axis_extent(self.anchor.1, self.dest.1, th);
        StrokeBounds {
            x,
            y,
            width,
            height,
        }
    }

    /// Evaluate the stroke speculatively. The grid, budget, RNG, and
    /// pollution field are untouched; the returned patch holds exactly
    /// the cells that would change.
    pub fn preview(&self, grid: &TileGrid) -> ToolPreview {
        let mut ctx = StampContext {
            auto_bulldoze: grid.auto_bulldoze,
            city: None,
        };
        let mut eff = PreviewEffect::new(grid);
        self.apply_area(&mut eff, &mut ctx);
        eff.into_preview()
    }

    /// Commit the stroke. Writes land on the shared grid as they
    /// validate; the terminal result is `Success` unless some stamp
    /// rejected first.
    pub fn apply(
        &self,
        grid: &mut TileGrid,
        budget: &mut CityBudget,
        pollution: &mut PollutionGrid,
        rng: &mut SimRng,
    ) -> ToolResult {
        let mut ctx = StampContext {
            auto_bulldoze: grid.auto_bulldoze,
            city: Some(CityServices { rng, pollution }),
        };
        let mut eff = CommitEffect::new(grid, budget);
        self.apply_area(&mut eff, &mut ctx);
        eff.finish()
    }

    /// Stamp the bounding rectangle top row first, left to right.
    fn apply_area(&self, eff: &mut dyn TileEffect, ctx: &mut StampContext) {
        let bounds = self.bounds();
        let (tw, th) = self.tool.size();

        for dy in (0..bounds.height).step_by(th as usize) {
            for dx in (0..bounds.width).step_by(tw as usize) {
                let at = (bounds.x + dx, bounds.y + dy);
                let mut stamp = Translated::new(eff, at.0, at.1);
                self.apply_single(&mut stamp, at, ctx);
            }
        }
    }

    /// Dispatch one stamp to its placement algorithm.
    fn apply_single(&self, eff: &mut dyn TileEffect, at: (i32, i32), ctx: &mut StampContext) -> bool {
        match self.tool {
            ToolKind::Park => apply_park(eff, at, ctx),
            ToolKind::Residential => apply_zone(eff, RES_CENTER, self.tool.cost(), ctx),
            ToolKind::Commercial => apply_zone(eff, COM_CENTER, self.tool.cost(), ctx),
            ToolKind::Industrial => apply_zone(eff, IND_CENTER, self.tool.cost(), ctx),
        }
    }
}

/// Origin and extent along one axis. The origin backs up one tile for
/// footprints of 3 or wider (centering the stamp on the anchor), the
/// extent rounds the drag span up to whole footprint steps, and a
/// backward drag grows the rectangle backward so the anchor tile stays
/// covered.
fn axis_extent(anchor: i32, dest: i32, step: i32) -> (i32, i32) {
    let mut origin = anchor;
    if step >= 3 {
        origin -= 1;
    }
    if dest >= anchor {
        let extent = ((dest - anchor) / step + 1) * step;
        (origin, extent)
    } else {
        let extent = ((anchor - dest) / step + 1) * step;
        (origin + step - extent, extent)
    }
}
