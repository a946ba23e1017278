//! Tool-specific placement: zone footprints and the park amenity.
//!
//! Both algorithms validate fully before writing anything, so a
//! rejected stamp leaves the grid byte-identical. They only see a
//! [`TileEffect`] and a [`StampContext`]; which mode they run in is not
//! their business.

use rand::Rng;

use crate::autotile::fix_border;
use crate::config::AUTO_CLEAR_COST;
use crate::effect::{TileEffect, ToolResult};
use crate::pollution::PollutionGrid;
use crate::sim_rng::SimRng;
use crate::tiles::{
    auto_clearable_for_zone, building_info_for, is_bare, is_rubble, FOUNTAIN, LOMASK, WOODS,
};
use crate::tools::ToolKind;

/// Per-stamp collaborators that do not travel through the tile surface.
pub struct StampContext<'a> {
    /// Snapshot of the city's auto-bulldoze policy.
    pub auto_bulldoze: bool,
    /// Commit-only city state; `None` while previewing.
    pub city: Option<CityServices<'a>>,
}

/// Shared city state a committing stamp may perturb.
pub struct CityServices<'a> {
    pub rng: &'a mut SimRng,
    pub pollution: &'a mut PollutionGrid,
}

// ---------------------------------------------------------------------------
// Zone placement
// ---------------------------------------------------------------------------

/// Stamp a zone footprint with its center tile `center` at the surface
/// origin. Validation is atomic: any unclearable occupant rejects the
/// stamp before a single write.
///
/// Panics if `center` has no catalog footprint; the orchestrator only
/// dispatches known zone centers, so that is an engine/catalog mismatch,
/// not user input.
pub fn apply_zone(
    eff: &mut dyn TileEffect,
    center: u16,
    base_cost: f64,
    ctx: &StampContext,
) -> bool {
    let info = building_info_for(center)
        .unwrap_or_else(|| panic!("no building footprint for zone center tile #{center}"));

    let mut cost = base_cost;
    for row in 0..info.height {
        for col in 0..info.width {
            let tile = eff.get_tile(col, row) & LOMASK;
            if is_bare(tile) {
                continue;
            }
            if ctx.auto_bulldoze && auto_clearable_for_zone(tile) {
                cost += AUTO_CLEAR_COST;
            } else {
                eff.tool_result(ToolResult::Blocked);
                return false;
            }
        }
    }

    if !eff.spend(cost) {
        return false;
    }

    let mut i = 0;
    for row in 0..info.height {
        for col in 0..info.width {
            eff.set_tile(col, row, info.members[i]);
            i += 1;
        }
    }

    fix_border(eff, info.width, info.height);
    true
}

// ---------------------------------------------------------------------------
// Park placement
// ---------------------------------------------------------------------------

/// Chebyshev radius of the pollution-relief neighborhood (a 5x5 block).
pub const PARK_RELIEF_RADIUS: i32 = 2;

/// Relief per footprint tile, as a fraction of the 0..255 level range.
const WOODS_RELIEF_COEFF: f64 = 0.003;
const FOUNTAIN_RELIEF_COEFF: f64 = 0.002;

/// Place a single park tile at the surface origin; `at` is the absolute
/// grid position of that origin, used to center the pollution relief.
///
/// Parks may auto-clear rubble only. Previews always render the first
/// woods variant and leave the RNG and pollution field alone.
pub fn apply_park(eff: &mut dyn TileEffect, at: (i32, i32), ctx: &mut StampContext) -> bool {
    let mut cost = ToolKind::Park.cost();

    let occupant = eff.get_tile(0, 0) & LOMASK;
    if !is_bare(occupant) {
        if !ctx.auto_bulldoze || !is_rubble(occupant) {
            eff.tool_result(ToolResult::Blocked);
            return false;
        }
        cost += AUTO_CLEAR_COST;
    }

    let tile = match ctx.city.as_mut() {
        // Speculative stamps must not advance the shared RNG.
        None => WOODS,
        Some(city) => {
            let z = city.rng.0.gen_range(0..5);
            if z < 4 {
                WOODS + z as u16
            } else {
                FOUNTAIN
            }
        }
    };

    if !eff.spend(cost) {
        return false;
    }
    eff.set_tile(0, 0, tile);

    if let Some(city) = ctx.city.as_mut() {
        relieve_pollution(city.pollution, at, tile);
    }
    true
}

/// Knock down the pollution field around a freshly planted park.
///
/// Relief scales with the footprint area, a per-variant coefficient
/// (woods beat a fountain), and the current city-wide average (never
/// below 1x), then decays linearly with Manhattan distance across the
/// 5x5 neighborhood. Cells floor at zero. The average is recomputed from
/// the full field afterwards.
fn relieve_pollution(pollution: &mut PollutionGrid, center: (i32, i32), tile: u16) {
    let coeff = if tile == FOUNTAIN {
        FOUNTAIN_RELIEF_COEFF
    } else {
        WOODS_RELIEF_COEFF
    };
    let (w, h) = ToolKind::Park.size();
    let base = f64::from(w * h) * coeff * 255.0;
    let relief = base * (f64::from(pollution.average) / 100.0).max(1.0);

    let span = PARK_RELIEF_RADIUS * 2 + 1;
    for dy in -PARK_RELIEF_RADIUS..=PARK_RELIEF_RADIUS {
        for dx in -PARK_RELIEF_RADIUS..=PARK_RELIEF_RADIUS {
            let (x, y) = (center.0 + dx, center.1 + dy);
            if !pollution.in_bounds(x, y) {
                continue;
            }
            let dist = dx.abs() + dy.abs();
            let falloff = f64::from(span - dist) / f64::from(span);
            let cut = (relief * falloff).round() as u8;
            let level = pollution.get(x, y);
            pollution.set(x, y, level.saturating_sub(cut));
        }
    }

    pollution.recompute_average();
}
