use crate::core::shorthand::parse_decimal_prefix;
use crate::domain::constants::{DEFAULT_HOURS, HOURS_PER_DAY};
use crate::domain::model::{DurationPreset, DurationSelection, Hours};
use crate::domain::ports::{DefaultRates, RateProvider};

/// The built-in presets: 1, 2, 3, 7, 14, 30 and 90 days.
pub fn presets() -> Vec<DurationPreset> {
    DefaultRates.presets()
}

/// Reads a free-form day count and converts it to hours. `None` unless positive.
pub fn custom_days_to_hours(text: &str) -> Option<Hours> {
    parse_decimal_prefix(text)
        .filter(|days| *days > 0.0)
        .map(|days| days * HOURS_PER_DAY)
}

/// Resolves a selection to hours, keeping `previous_hours` when a custom entry is not positive.
pub fn resolve_hours(selection: &DurationSelection, previous_hours: Hours) -> Hours {
    match selection {
        DurationSelection::Preset(preset) => preset.hours,
        DurationSelection::CustomDays(text) => custom_days_to_hours(text).unwrap_or(previous_hours),
    }
}

/// Tracks the currently selected duration across preset clicks and custom typing.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationResolver {
    selected_hours: Hours,
    custom_days: String,
}

impl Default for DurationResolver {
    fn default() -> Self {
        Self::new(DEFAULT_HOURS)
    }
}

impl DurationResolver {
    pub fn new(initial_hours: Hours) -> Self {
        Self {
            selected_hours: initial_hours,
            custom_days: String::new(),
        }
    }

    pub fn hours(&self) -> Hours {
        self.selected_hours
    }

    pub fn custom_days(&self) -> &str {
        &self.custom_days
    }

    /// Picking a preset wins and clears any custom text.
    pub fn select_preset(&mut self, preset: &DurationPreset) -> Hours {
        self.custom_days.clear();
        self.selected_hours = preset.hours;
        tracing::debug!("Preset '{}' selected: {} hours", preset.label, preset.hours);
        self.selected_hours
    }

    /// Stores the custom text; the duration only changes when it reads as a positive day count.
    pub fn set_custom_days(&mut self, text: &str) -> Hours {
        self.custom_days = text.to_string();
        if let Some(hours) = custom_days_to_hours(text) {
            tracing::debug!("Custom duration '{}' resolved to {} hours", text, hours);
            self.selected_hours = hours;
        }
        self.selected_hours
    }

    pub fn apply(&mut self, selection: &DurationSelection) -> Hours {
        match selection {
            DurationSelection::Preset(preset) => self.select_preset(preset),
            DurationSelection::CustomDays(text) => self.set_custom_days(text),
        }
    }

    /// A preset shows as active only while no custom text is entered.
    pub fn is_preset_active(&self, preset: &DurationPreset) -> bool {
        self.custom_days.is_empty() && self.selected_hours == preset.hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_hours() {
        let hours: Vec<f64> = presets().iter().map(|p| p.hours).collect();
        assert_eq!(hours, vec![24.0, 48.0, 72.0, 168.0, 336.0, 720.0, 2160.0]);
        assert_eq!(presets()[0].label, "1 Day");
        assert_eq!(presets()[6].label, "90 Days");
    }

    #[test]
    fn test_resolve_custom_days() {
        let selection = DurationSelection::CustomDays("1.5".to_string());
        assert_eq!(resolve_hours(&selection, 24.0), 36.0);
    }

    #[test]
    fn test_non_positive_custom_keeps_previous() {
        for text in ["0", "-3", "", "abc"] {
            let selection = DurationSelection::CustomDays(text.to_string());
            assert_eq!(resolve_hours(&selection, 168.0), 168.0);
        }
    }

    #[test]
    fn test_preset_clears_custom_text() {
        let mut resolver = DurationResolver::default();
        assert_eq!(resolver.set_custom_days("10"), 240.0);
        assert_eq!(resolver.custom_days(), "10");

        let week = DurationPreset::from_days(7.0);
        assert_eq!(resolver.select_preset(&week), 168.0);
        assert_eq!(resolver.custom_days(), "");
        assert!(resolver.is_preset_active(&week));
    }

    #[test]
    fn test_apply_selection() {
        let mut resolver = DurationResolver::new(48.0);
        let month = DurationSelection::Preset(DurationPreset::from_days(30.0));

        assert_eq!(resolver.apply(&month), 720.0);
        assert_eq!(resolver.apply(&DurationSelection::CustomDays("2".to_string())), 48.0);
        assert_eq!(resolver.apply(&DurationSelection::CustomDays("nope".to_string())), 48.0);
    }

    #[test]
    fn test_invalid_custom_keeps_hours_but_deactivates_preset() {
        let mut resolver = DurationResolver::default();
        let day = DurationPreset::from_days(1.0);
        resolver.select_preset(&day);

        assert_eq!(resolver.set_custom_days("-1"), 24.0);
        assert!(!resolver.is_preset_active(&day));
    }
}
