use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::STARTING_TREASURY;

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityBudget {
    pub treasury: f64,
}

impl Default for CityBudget {
    fn default() -> Self {
        Self {
            treasury: STARTING_TREASURY,
        }
    }
}

impl CityBudget {
    /// Debit `amount` if the treasury covers it. Returns `false` and
    /// leaves the treasury untouched otherwise.
    pub fn try_spend(&mut self, amount: f64) -> bool {
        if self.treasury < amount {
            return false;
        }
        self.treasury -= amount;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spend_debits_when_covered() {
        let mut budget = CityBudget { treasury: 150.0 };
        assert!(budget.try_spend(100.0));
        assert_eq!(budget.treasury, 50.0);
    }

    #[test]
    fn refused_spend_leaves_treasury_untouched() {
        let mut budget = CityBudget { treasury: 50.0 };
        assert!(!budget.try_spend(100.0));
        assert_eq!(budget.treasury, 50.0);
    }
}
