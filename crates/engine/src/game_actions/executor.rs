//! Action executor system — drains the [`ActionQueue`] each fixed-update
//! tick and routes every queued [`GameAction`] through the stroke
//! engine, recording results in the [`ActionResultLog`].

use bevy::prelude::*;

use crate::budget::CityBudget;
use crate::effect::{ToolPreview, ToolResult};
use crate::grid::TileGrid;
use crate::pollution::PollutionGrid;
use crate::sim_rng::SimRng;
use crate::stroke::ToolStroke;

use super::result_log::ActionResultLog;
use super::{ActionQueue, GameAction};

/// The most recent speculative stroke patch, published for rendering.
/// Cleared implicitly by the next `PreviewTool` action.
#[derive(Resource, Debug, Clone, Default)]
pub struct ActivePreview(pub Option<ToolPreview>);

/// Drains all pending actions from the queue and executes them in order.
pub fn execute_queued_actions(
    mut queue: ResMut<ActionQueue>,
    mut log: ResMut<ActionResultLog>,
    mut preview: ResMut<ActivePreview>,
    mut grid: ResMut<TileGrid>,
    mut budget: ResMut<CityBudget>,
    mut pollution: ResMut<PollutionGrid>,
    mut rng: ResMut<SimRng>,
) {
    for queued in queue.drain() {
        let result = execute_single(
            &queued.action,
            &mut grid,
            &mut budget,
            &mut pollution,
            &mut rng,
            &mut preview,
        );
        if !result.is_success() {
            debug!("action rejected: {:?} -> {:?}", queued.action, result);
        }
        log.push(queued.action, result);
    }
}

pub(crate) fn execute_single(
    action: &GameAction,
    grid: &mut TileGrid,
    budget: &mut CityBudget,
    pollution: &mut PollutionGrid,
    rng: &mut SimRng,
    preview: &mut ActivePreview,
) -> ToolResult {
    match action {
        GameAction::ApplyTool { tool, anchor, dest } => {
            let mut stroke = ToolStroke::new(*tool, anchor.0, anchor.1);
            stroke.drag_to(dest.0, dest.1);
            stroke.apply(grid, budget, pollution, rng)
        }
        GameAction::PreviewTool { tool, anchor, dest } => {
            let mut stroke = ToolStroke::new(*tool, anchor.0, anchor.1);
            stroke.drag_to(dest.0, dest.1);
            let patch = stroke.preview(grid);
            let result = patch.result;
            preview.0 = Some(patch);
            result
        }
        GameAction::SetAutoBulldoze { enabled } => {
            grid.auto_bulldoze = *enabled;
            ToolResult::Success
        }
    }
}
