use super::*;
use crate::budget::CityBudget;
use crate::effect::ToolResult;
use crate::grid::TileGrid;
use crate::pollution::PollutionGrid;
use crate::sim_rng::SimRng;
use crate::tiles::{FOUNTAIN, LOMASK, RES_CENTER, WOODS};
use crate::tools::ToolKind;

struct Harness {
    grid: TileGrid,
    budget: CityBudget,
    pollution: PollutionGrid,
    rng: SimRng,
    preview: ActivePreview,
}

impl Harness {
    fn new() -> Self {
        Self {
            grid: TileGrid::default(),
            budget: CityBudget::default(),
            pollution: PollutionGrid::default(),
            rng: SimRng::from_seed_u64(1),
            preview: ActivePreview::default(),
        }
    }

    fn run(&mut self, action: GameAction) -> ToolResult {
        executor::execute_single(
            &action,
            &mut self.grid,
            &mut self.budget,
            &mut self.pollution,
            &mut self.rng,
            &mut self.preview,
        )
    }
}

#[test]
fn test_game_action_serialization() {
    let action = GameAction::ApplyTool {
        tool: ToolKind::Residential,
        anchor: (5, 5),
        dest: (9, 5),
    };
    let json = serde_json::to_string(&action).unwrap();
    let decoded: GameAction = serde_json::from_str(&json).unwrap();
    assert_eq!(action, decoded);

    let action = GameAction::SetAutoBulldoze { enabled: true };
    let json = serde_json::to_string(&action).unwrap();
    let decoded: GameAction = serde_json::from_str(&json).unwrap();
    assert_eq!(action, decoded);
}

#[test]
fn test_tool_result_serialization() {
    for result in [
        ToolResult::Success,
        ToolResult::Blocked,
        ToolResult::InsufficientFunds,
    ] {
        let json = serde_json::to_string(&result).unwrap();
        let decoded: ToolResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, decoded);
    }
}

#[test]
fn apply_tool_commits_through_the_engine() {
    let mut harness = Harness::new();
    let result = harness.run(GameAction::ApplyTool {
        tool: ToolKind::Residential,
        anchor: (5, 5),
        dest: (5, 5),
    });
    assert_eq!(result, ToolResult::Success);
    assert_eq!(harness.grid.get_tile(5, 5), RES_CENTER);
    assert_eq!(
        harness.budget.treasury,
        crate::config::STARTING_TREASURY - 100.0
    );
}

#[test]
fn preview_tool_publishes_a_patch_without_committing() {
    let mut harness = Harness::new();
    let result = harness.run(GameAction::PreviewTool {
        tool: ToolKind::Park,
        anchor: (7, 7),
        dest: (7, 7),
    });
    assert_eq!(result, ToolResult::Success);

    let patch = harness.preview.0.as_ref().unwrap();
    assert_eq!(patch.tile_at(7, 7), Some(WOODS));
    assert_eq!(harness.grid, TileGrid::default());
    assert_eq!(harness.budget, CityBudget::default());
}

#[test]
fn set_auto_bulldoze_flips_the_policy() {
    let mut harness = Harness::new();
    assert!(harness.grid.auto_bulldoze);
    let result = harness.run(GameAction::SetAutoBulldoze { enabled: false });
    assert_eq!(result, ToolResult::Success);
    assert!(!harness.grid.auto_bulldoze);

    // With the policy off, a park on an occupied cell is refused.
    harness.grid.set_tile(3, 3, FOUNTAIN);
    let result = harness.run(GameAction::ApplyTool {
        tool: ToolKind::Park,
        anchor: (3, 3),
        dest: (3, 3),
    });
    assert_eq!(result, ToolResult::Blocked);
    assert_eq!(harness.grid.get_tile(3, 3) & LOMASK, FOUNTAIN);
}
