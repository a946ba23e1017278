use serde::{Deserialize, Serialize};

/// The placement tools this engine knows how to stamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolKind {
    Park,
    Residential,
    Commercial,
    Industrial,
}

impl ToolKind {
    /// Footprint in tiles, `(width, height)`.
    pub fn size(self) -> (i32, i32) {
        match self {
            ToolKind::Park => (1, 1),
            ToolKind::Residential | ToolKind::Commercial | ToolKind::Industrial => (3, 3),
        }
    }

    /// Base cost of one placement unit, before auto-clear surcharges.
    pub fn cost(self) -> f64 {
        match self {
            ToolKind::Park => 10.0,
            ToolKind::Residential | ToolKind::Commercial | ToolKind::Industrial => 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footprints_and_costs() {
        assert_eq!(ToolKind::Park.size(), (1, 1));
        assert_eq!(ToolKind::Residential.size(), (3, 3));
        assert_eq!(ToolKind::Park.cost(), 10.0);
        assert_eq!(ToolKind::Industrial.cost(), 100.0);
    }
}
