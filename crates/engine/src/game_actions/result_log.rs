//! Ring-buffer log of recently executed actions and their results.
//!
//! The [`ActionResultLog`] resource stores the last 64
//! `(GameAction, ToolResult)` pairs, giving callers (UI, agents, replay
//! verification) a way to inspect what happened without polling the ECS
//! every tick.

use bevy::prelude::*;

use super::GameAction;
use crate::effect::ToolResult;

/// Maximum number of entries retained in the ring buffer.
const MAX_ENTRIES: usize = 64;

#[derive(Resource, Debug, Clone, Default)]
pub struct ActionResultLog {
    entries: Vec<(GameAction, ToolResult)>,
}

impl ActionResultLog {
    /// Record a new action/result pair. If the buffer is full the oldest
    /// entry is evicted.
    pub fn push(&mut self, action: GameAction, result: ToolResult) {
        if self.entries.len() >= MAX_ENTRIES {
            self.entries.remove(0);
        }
        self.entries.push((action, result));
    }

    /// Return the last `n` entries (or fewer if the log is shorter).
    pub fn last_n(&self, n: usize) -> &[(GameAction, ToolResult)] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_oldest_when_full() {
        let mut log = ActionResultLog::default();
        for i in 0..70 {
            log.push(
                GameAction::SetAutoBulldoze { enabled: i % 2 == 0 },
                ToolResult::Success,
            );
        }
        assert_eq!(log.len(), MAX_ENTRIES);
        // 70 pushed, 64 kept: the oldest retained is the 7th (i = 6).
        let first = &log.last_n(MAX_ENTRIES)[0];
        assert_eq!(first.0, GameAction::SetAutoBulldoze { enabled: true });
        assert_eq!(log.last_n(1).len(), 1);
    }

    #[test]
    fn clear_empties_log() {
        let mut log = ActionResultLog::default();
        log.push(
            GameAction::SetAutoBulldoze { enabled: true },
            ToolResult::Blocked,
        );
        assert!(!log.is_empty());
        log.clear();
        assert!(log.is_empty());
    }
}
