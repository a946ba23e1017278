pub const GRID_WIDTH: i32 = 256;
pub const GRID_HEIGHT: i32 = 256;

/// Funds a new city starts with.
pub const STARTING_TREASURY: f64 = 10_000.0;

/// Extra charge per tile cleared automatically under the auto-bulldoze policy.
pub const AUTO_CLEAR_COST: f64 = 1.0;
