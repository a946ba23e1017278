//! Plugin that wires up the action subsystem: queue, executor, and log.

use bevy::prelude::*;

use super::executor::{execute_queued_actions, ActivePreview};
use super::result_log::ActionResultLog;
use super::ActionQueue;

/// Registers the action queue, result log, preview slot, and executor
/// system.
pub struct GameActionsPlugin;

impl Plugin for GameActionsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActionQueue>();
        app.init_resource::<ActionResultLog>();
        app.init_resource::<ActivePreview>();

        app.add_systems(FixedUpdate, execute_queued_actions);
    }
}
