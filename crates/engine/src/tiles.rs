//! Tile catalog: id ranges, placement predicates, and the per-family
//! adjacency tables used by the auto-tiler.
//!
//! A grid cell is a `u16`; the low bits ([`LOMASK`]) are the base tile id
//! and the high bits carry simulation flags (power, animation) owned by
//! systems outside this crate. Every placement check masks first.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Cell layout
// ---------------------------------------------------------------------------

/// Masks a cell down to its base tile id.
pub const LOMASK: u16 = 0x03ff;

/// Set on cells reached by the power scan (not written by this crate).
pub const PWR_BIT: u16 = 0x8000;

/// Set on cells with an animated sprite (not written by this crate).
pub const ANIM_BIT: u16 = 0x0800;

/// Sentinel returned by grid reads outside the map. Its masked value
/// belongs to no catalog range, so it is never clearable and never
/// joins a connective family.
pub const OUT_OF_BOUNDS: u16 = 0xffff;

// ---------------------------------------------------------------------------
// Base tile ids
// ---------------------------------------------------------------------------

pub const DIRT: u16 = 0;

pub const TREE_BASE: u16 = 20;
pub const LAST_TREE: u16 = 23;

pub const RUBBLE: u16 = 44;
pub const LAST_RUBBLE: u16 = 47;

/// First of four woods park variants (48..=51).
pub const WOODS: u16 = 48;
pub const LAST_WOODS: u16 = 51;
pub const FOUNTAIN: u16 = 52;

pub const ROAD_BASE: u16 = 64;
pub const LAST_ROAD: u16 = 74;
pub const RAIL_BASE: u16 = 96;
pub const LAST_RAIL: u16 = 106;
pub const WIRE_BASE: u16 = 128;
pub const LAST_WIRE: u16 = 138;

pub const RES_BASE: u16 = 240;
pub const RES_CENTER: u16 = 244;
pub const COM_BASE: u16 = 260;
pub const COM_CENTER: u16 = 264;
pub const IND_BASE: u16 = 280;
pub const IND_CENTER: u16 = 284;

// ---------------------------------------------------------------------------
// Connective shapes
// ---------------------------------------------------------------------------

// Shape offsets within each family block. Corners are named by their two
// open sides, tees by the side the branch points toward.
pub const SHAPE_NS: u16 = 0;
pub const SHAPE_EW: u16 = 1;
pub const SHAPE_NE: u16 = 2;
pub const SHAPE_SE: u16 = 3;
pub const SHAPE_SW: u16 = 4;
pub const SHAPE_NW: u16 = 5;
pub const SHAPE_TEE_N: u16 = 6;
pub const SHAPE_TEE_E: u16 = 7;
pub const SHAPE_TEE_S: u16 = 8;
pub const SHAPE_TEE_W: u16 = 9;
pub const SHAPE_CROSS: u16 = 10;

/// Shape to draw for each 4-bit neighbor mask
/// (bit 0 = north, bit 1 = east, bit 2 = south, bit 3 = west).
const ADJACENCY_SHAPES: [u16; 16] = [
    SHAPE_EW,    // 0b0000 isolated
    SHAPE_NS,    // 0b0001 N
    SHAPE_EW,    // 0b0010 E
    SHAPE_NE,    // 0b0011 N+E
    SHAPE_NS,    // 0b0100 S
    SHAPE_NS,    // 0b0101 N+S
    SHAPE_SE,    // 0b0110 E+S
    SHAPE_TEE_E, // 0b0111 N+E+S
    SHAPE_EW,    // 0b1000 W
    SHAPE_NW,    // 0b1001 N+W
    SHAPE_EW,    // 0b1010 E+W
    SHAPE_TEE_N, // 0b1011 N+E+W
    SHAPE_SW,    // 0b1100 S+W
    SHAPE_TEE_W, // 0b1101 N+S+W
    SHAPE_TEE_S, // 0b1110 E+S+W
    SHAPE_CROSS, // 0b1111
];

const fn family_table(base: u16) -> [u16; 16] {
    let mut table = [0u16; 16];
    let mut mask = 0;
    while mask < 16 {
        table[mask] = base + ADJACENCY_SHAPES[mask];
        mask += 1;
    }
    table
}

pub const ROAD_TABLE: [u16; 16] = family_table(ROAD_BASE);
pub const RAIL_TABLE: [u16; 16] = family_table(RAIL_BASE);
pub const WIRE_TABLE: [u16; 16] = family_table(WIRE_BASE);

/// The three connective infrastructure families. A base tile id belongs
/// to at most one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileFamily {
    Road,
    Rail,
    Wire,
}

impl TileFamily {
    /// Adjacency table for this family, indexed by the 4-bit neighbor mask.
    pub fn table(self) -> &'static [u16; 16] {
        match self {
            TileFamily::Road => &ROAD_TABLE,
            TileFamily::Rail => &RAIL_TABLE,
            TileFamily::Wire => &WIRE_TABLE,
        }
    }
}

/// Which connective family the cell belongs to, if any. Flag bits are
/// ignored.
pub fn family_of(tile: u16) -> Option<TileFamily> {
    match tile & LOMASK {
        ROAD_BASE..=LAST_ROAD => Some(TileFamily::Road),
        RAIL_BASE..=LAST_RAIL => Some(TileFamily::Rail),
        WIRE_BASE..=LAST_WIRE => Some(TileFamily::Wire),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Placement predicates
// ---------------------------------------------------------------------------

pub fn is_bare(tile: u16) -> bool {
    tile & LOMASK == DIRT
}

pub fn is_rubble(tile: u16) -> bool {
    matches!(tile & LOMASK, RUBBLE..=LAST_RUBBLE)
}

pub fn is_tree(tile: u16) -> bool {
    matches!(tile & LOMASK, TREE_BASE..=LAST_TREE)
}

pub fn is_zone_center(tile: u16) -> bool {
    matches!(tile & LOMASK, RES_CENTER | COM_CENTER | IND_CENTER)
}

/// Tiles a zone stamp may clear automatically under the auto-bulldoze
/// policy. Parks are stricter and accept rubble only.
pub fn auto_clearable_for_zone(tile: u16) -> bool {
    is_rubble(tile) || is_tree(tile)
}

// ---------------------------------------------------------------------------
// Zone footprints
// ---------------------------------------------------------------------------

/// The stamp pattern written when a zone center is placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildingFootprint {
    pub width: i32,
    pub height: i32,
    /// Row-major tile ids, `members.len() == width * height`.
    pub members: Vec<u16>,
}

/// Footprint for a zone center id, or `None` for anything else.
pub fn building_info_for(tile: u16) -> Option<BuildingFootprint> {
    let base = match tile & LOMASK {
        RES_CENTER => RES_BASE,
        COM_CENTER => COM_BASE,
        IND_CENTER => IND_BASE,
        _ => return None,
    };
    Some(BuildingFootprint {
        width: 3,
        height: 3,
        members: (0..9).map(|i| base + i).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families_are_mutually_exclusive() {
        for tile in 0..=LAST_WIRE {
            let road = matches!(tile, ROAD_BASE..=LAST_ROAD);
            let rail = matches!(tile, RAIL_BASE..=LAST_RAIL);
            let wire = matches!(tile, WIRE_BASE..=LAST_WIRE);
            assert!(u32::from(road) + u32::from(rail) + u32::from(wire) <= 1);
        }
    }

    #[test]
    fn family_of_ignores_flag_bits() {
        assert_eq!(
            family_of((ROAD_BASE + SHAPE_CROSS) | PWR_BIT),
            Some(TileFamily::Road)
        );
        assert_eq!(family_of(WIRE_BASE | ANIM_BIT), Some(TileFamily::Wire));
        assert_eq!(family_of(DIRT | PWR_BIT), None);
    }

    #[test]
    fn tables_stay_inside_their_family() {
        for mask in 0..16 {
            assert_eq!(family_of(ROAD_TABLE[mask]), Some(TileFamily::Road));
            assert_eq!(family_of(RAIL_TABLE[mask]), Some(TileFamily::Rail));
            assert_eq!(family_of(WIRE_TABLE[mask]), Some(TileFamily::Wire));
        }
    }

    #[test]
    fn straight_runs_pick_straight_shapes() {
        // N+S connected -> vertical, E+W connected -> horizontal.
        assert_eq!(ROAD_TABLE[0b0101], ROAD_BASE + SHAPE_NS);
        assert_eq!(ROAD_TABLE[0b1010], ROAD_BASE + SHAPE_EW);
        assert_eq!(WIRE_TABLE[0b1111], WIRE_BASE + SHAPE_CROSS);
    }

    #[test]
    fn zone_footprints_are_3x3_row_major() {
        for center in [RES_CENTER, COM_CENTER, IND_CENTER] {
            assert!(is_zone_center(center | PWR_BIT));
            let info = building_info_for(center).unwrap();
            assert_eq!(info.members.len() as i32, info.width * info.height);
            // The center id sits in the middle of the stamp.
            assert_eq!(info.members[4], center);
        }
        assert!(building_info_for(DIRT).is_none());
        assert!(building_info_for(ROAD_BASE).is_none());
    }

    #[test]
    fn sentinel_is_inert() {
        assert!(family_of(OUT_OF_BOUNDS).is_none());
        assert!(!is_bare(OUT_OF_BOUNDS));
        assert!(!auto_clearable_for_zone(OUT_OF_BOUNDS));
        assert!(!is_rubble(OUT_OF_BOUNDS));
    }
}
