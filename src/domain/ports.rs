use crate::domain::constants::{DAILY_RATE, DEFAULT_HOURS, PRESET_DAYS};
use crate::domain::model::DurationPreset;

/// Where the calculator gets its rate and its duration presets from.
pub trait RateProvider: Send + Sync {
    fn daily_rate(&self) -> f64;
    fn preset_days(&self) -> Vec<f64>;
    fn default_hours(&self) -> f64;

    fn presets(&self) -> Vec<DurationPreset> {
        self.preset_days()
            .into_iter()
            .map(DurationPreset::from_days)
            .collect()
    }
}

/// The built-in rate and presets.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRates;

impl RateProvider for DefaultRates {
    fn daily_rate(&self) -> f64 {
        DAILY_RATE
    }

    fn preset_days(&self) -> Vec<f64> {
        PRESET_DAYS.to_vec()
    }

    fn default_hours(&self) -> f64 {
        DEFAULT_HOURS
    }
}
