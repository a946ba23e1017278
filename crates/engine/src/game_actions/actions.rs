use serde::{Deserialize, Serialize};

use crate::tools::ToolKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    /// Commit a tool stroke from `anchor` to `dest`.
    ApplyTool {
        tool: ToolKind,
        anchor: (i32, i32),
        dest: (i32, i32),
    },
    /// Evaluate a stroke speculatively and publish the patch to
    /// [`super::ActivePreview`] for rendering.
    PreviewTool {
        tool: ToolKind,
        anchor: (i32, i32),
        dest: (i32, i32),
    },
    SetAutoBulldoze {
        enabled: bool,
    },
}
