//! Transactional tile surfaces.
//!
//! Placement and auto-tiling never touch the grid directly: they go
//! through a [`TileEffect`], which is either a [`PreviewEffect`]
//! (speculative, writes land in a private overlay) or a [`CommitEffect`]
//! (writes go straight to the grid, spends go through the budget).
//! [`Translated`] re-origins a surface so the same algorithm can run at
//! any stamp position.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::budget::CityBudget;
use crate::grid::TileGrid;

// ---------------------------------------------------------------------------
// Terminal result
// ---------------------------------------------------------------------------

/// Terminal outcome of one stroke.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolResult {
    #[default]
    Success,
    /// The footprint or target cell cannot be cleared under the current
    /// auto-bulldoze policy.
    Blocked,
    /// The budget refused the spend.
    InsufficientFunds,
}

impl ToolResult {
    pub fn is_success(self) -> bool {
        matches!(self, ToolResult::Success)
    }
}

// ---------------------------------------------------------------------------
// The surface contract
// ---------------------------------------------------------------------------

/// A read/write view over the grid at some origin. Offsets are relative;
/// out-of-map offsets are the grid's problem (sentinel reads, dropped
/// writes), not the surface's.
pub trait TileEffect {
    fn get_tile(&self, dx: i32, dy: i32) -> u16;

    fn set_tile(&mut self, dx: i32, dy: i32, tile: u16);

    /// Charge a cost. Returns `false` if the spend was refused; the
    /// surface records the rejection itself.
    fn spend(&mut self, amount: f64) -> bool;

    /// Record the stroke outcome. The first rejection wins; later calls
    /// cannot overwrite it.
    fn tool_result(&mut self, result: ToolResult);
}

/// A surface shifted by a fixed offset. Composes by offset addition, so
/// translating a translated surface behaves like a single translation.
pub struct Translated<'a> {
    inner: &'a mut dyn TileEffect,
    dx: i32,
    dy: i32,
}

impl<'a> Translated<'a> {
    pub fn new(inner: &'a mut dyn TileEffect, dx: i32, dy: i32) -> Self {
        Self { inner, dx, dy }
    }
}

impl TileEffect for Translated<'_> {
    fn get_tile(&self, dx: i32, dy: i32) -> u16 {
        self.inner.get_tile(self.dx + dx, self.dy + dy)
    }

    fn set_tile(&mut self, dx: i32, dy: i32, tile: u16) {
        self.inner.set_tile(self.dx + dx, self.dy + dy, tile);
    }

    fn spend(&mut self, amount: f64) -> bool {
        self.inner.spend(amount)
    }

    fn tool_result(&mut self, result: ToolResult) {
        self.inner.tool_result(result);
    }
}

// ---------------------------------------------------------------------------
// Preview mode
// ---------------------------------------------------------------------------

/// Speculative surface. The grid is only read; writes and costs collect
/// into a patch the UI can render.
pub struct PreviewEffect<'a> {
    grid: &'a TileGrid,
    overlay: BTreeMap<(i32, i32), u16>,
    cost: f64,
    result: ToolResult,
}

impl<'a> PreviewEffect<'a> {
    pub fn new(grid: &'a TileGrid) -> Self {
        Self {
            grid,
            overlay: BTreeMap::new(),
            cost: 0.0,
            result: ToolResult::Success,
        }
    }

    pub fn into_preview(self) -> ToolPreview {
        ToolPreview {
            tiles: self.overlay,
            cost: self.cost,
            result: self.result,
        }
    }
}

impl TileEffect for PreviewEffect<'_> {
    fn get_tile(&self, dx: i32, dy: i32) -> u16 {
        self.overlay
            .get(&(dx, dy))
            .copied()
            .unwrap_or_else(|| self.grid.get_tile(dx, dy))
    }

    fn set_tile(&mut self, dx: i32, dy: i32, tile: u16) {
        if self.grid.in_bounds(dx, dy) {
            self.overlay.insert((dx, dy), tile);
        }
    }

    fn spend(&mut self, amount: f64) -> bool {
        self.cost += amount;
        true
    }

    fn tool_result(&mut self, result: ToolResult) {
        if self.result.is_success() {
            self.result = result;
        }
    }
}

/// The materialized outcome of a preview: exactly the cells the stroke
/// would change, the cost it would charge, and the result it would
/// return.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolPreview {
    pub tiles: BTreeMap<(i32, i32), u16>,
    pub cost: f64,
    pub result: ToolResult,
}

impl ToolPreview {
    pub fn tile_at(&self, x: i32, y: i32) -> Option<u16> {
        self.tiles.get(&(x, y)).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Commit mode
// ---------------------------------------------------------------------------

/// Committing surface: writes mutate the shared grid immediately and
/// spends debit the shared budget.
pub struct CommitEffect<'a> {
    grid: &'a mut TileGrid,
    budget: &'a mut CityBudget,
    result: ToolResult,
}

impl<'a> CommitEffect<'a> {
    pub fn new(grid: &'a mut TileGrid, budget: &'a mut CityBudget) -> Self {
        Self {
            grid,
            budget,
            result: ToolResult::Success,
        }
    }

    pub fn finish(self) -> ToolResult {
        self.result
    }
}

impl TileEffect for CommitEffect<'_> {
    fn get_tile(&self, dx: i32, dy: i32) -> u16 {
        self.grid.get_tile(dx, dy)
    }

    fn set_tile(&mut self, dx: i32, dy: i32, tile: u16) {
        self.grid.set_tile(dx, dy, tile);
    }

    fn spend(&mut self, amount: f64) -> bool {
        if self.budget.try_spend(amount) {
            true
        } else {
            self.tool_result(ToolResult::InsufficientFunds);
            false
        }
    }

    fn tool_result(&mut self, result: ToolResult) {
        if self.result.is_success() {
            self.result = result;
        }
    }
}
