use crate::core::duration::{custom_days_to_hours, DurationResolver};
use crate::core::growth::GrowthModel;
use crate::core::shorthand::format_amount;
use crate::domain::constants::PERCENT_DECIMALS;
use crate::domain::model::{Amount, DurationPreset, GrowthResult, Hours};
use serde::Serialize;

/// Display-ready view of a `GrowthResult`: amounts rounded to whole gems.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthReport {
    pub starting_amount: Amount,
    pub hours: Hours,
    pub final_amount: Amount,
    pub profit: Amount,
    pub percentage_gain: f64,
    pub final_display: String,
    pub profit_display: String,
    pub percentage_display: String,
}

impl GrowthReport {
    pub fn from_result(result: &GrowthResult) -> Self {
        let final_amount = result.display_final();
        let profit = result.display_profit();

        Self {
            starting_amount: result.starting_amount,
            hours: result.hours,
            final_amount,
            profit,
            percentage_gain: result.percentage_gain,
            final_display: format_amount(final_amount),
            profit_display: format!("+{}", format_amount(profit)),
            percentage_display: format!("+{:.*}%", PERCENT_DECIMALS, result.percentage_gain),
        }
    }
}

pub fn rate_description(model: &GrowthModel) -> String {
    format!(
        "{:.*}% daily, compounded hourly",
        PERCENT_DECIMALS,
        model.daily_rate * 100.0
    )
}

pub fn render_result(result: &GrowthResult, model: &GrowthModel) -> String {
    let report = GrowthReport::from_result(result);
    format!(
        "Final gems:   {}\nTotal profit: {}\nGrowth:       {}\nRate:         {}",
        report.final_display,
        report.profit_display,
        report.percentage_display,
        rate_description(model)
    )
}

/// Lists presets, marking the one `duration` currently selects with `*`.
pub fn render_presets(presets: &[DurationPreset], duration: &DurationResolver) -> String {
    presets
        .iter()
        .enumerate()
        .map(|(i, preset)| {
            let marker = if duration.is_preset_active(preset) { '*' } else { ' ' };
            format!("{} {:>2}. {:<8} {} hours", marker, i + 1, preset.label, preset.hours)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Warning for a day count that does not read as positive and so leaves the duration alone.
pub fn ignored_days_warning(text: &str, kept_hours: Hours) -> Option<String> {
    if custom_days_to_hours(text).is_some() {
        return None;
    }
    Some(format!(
        "Ignoring day count '{}': expected a positive number, keeping {} hours",
        text, kept_hours
    ))
}
