use bevy::prelude::*;

pub mod autotile;
pub mod budget;
pub mod config;
pub mod effect;
pub mod game_actions;
pub mod grid;
pub mod placement;
pub mod pollution;
pub mod sim_rng;
pub mod stroke;
pub mod tiles;
pub mod tools;


pub use effect::{ToolPreview, ToolResult};
pub use stroke::{StrokeBounds, ToolStroke};
pub use tools::ToolKind;

use budget::CityBudget;
use game_actions::GameActionsPlugin;
use grid::TileGrid;
use pollution::PollutionGrid;
use sim_rng::SimRng;

/// Registers the engine's resources and the action executor.
pub struct EnginePlugin;

impl Plugin for EnginePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TileGrid>();
        app.init_resource::<CityBudget>();
        app.init_resource::<PollutionGrid>();
        app.init_resource::<SimRng>();

        app.add_plugins(GameActionsPlugin);
    }
}
