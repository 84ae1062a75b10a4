use serde::{Deserialize, Serialize};

use crate::domain::constants::HOURS_PER_DAY;

/// A gem quantity.
pub type Amount = f64;

/// Elapsed time in hours. May be fractional.
pub type Hours = f64;

/// Outcome of one growth calculation. Never stored, recomputed per request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthResult {
    pub starting_amount: Amount,
    pub hours: Hours,
    pub final_amount: Amount,
    pub profit: Amount,
    pub percentage_gain: f64,
}

impl GrowthResult {
    /// Final amount rounded to the nearest whole gem.
    pub fn display_final(&self) -> Amount {
        self.final_amount.round()
    }

    /// Profit rounded to the nearest whole gem.
    pub fn display_profit(&self) -> Amount {
        self.profit.round()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DurationPreset {
    pub label: String,
    pub days: f64,
    pub hours: Hours,
}

impl DurationPreset {
    pub fn from_days(days: f64) -> Self {
        let label = if days == 1.0 {
            "1 Day".to_string()
        } else {
            format!("{} Days", days)
        };

        Self {
            label,
            days,
            hours: days * HOURS_PER_DAY,
        }
    }
}

/// What the user picked for the duration.
#[derive(Debug, Clone, PartialEq)]
pub enum DurationSelection {
    Preset(DurationPreset),
    /// Free-form day count as typed.
    CustomDays(String),
}
