use crate::core::duration::DurationResolver;
use crate::core::growth::GrowthModel;
use crate::core::shorthand::{format_amount, parse_amount};
use crate::domain::model::{Amount, DurationPreset, GrowthResult, Hours};
use crate::domain::ports::RateProvider;

/// View state of one calculator screen.
///
/// Holds what the user typed, the resolved duration and the last result.
/// Any change to the parsed amount or the hour count drops the result; it is
/// only recomputed on an explicit `calculate`.
#[derive(Debug, Clone)]
pub struct CalculatorSession {
    model: GrowthModel,
    presets: Vec<DurationPreset>,
    amount_input: String,
    starting_amount: Amount,
    duration: DurationResolver,
    result: Option<GrowthResult>,
}

impl CalculatorSession {
    pub fn new<R: RateProvider + ?Sized>(provider: &R) -> Self {
        Self {
            model: GrowthModel::from_provider(provider),
            presets: provider.presets(),
            amount_input: String::new(),
            starting_amount: 0.0,
            duration: DurationResolver::new(provider.default_hours()),
            result: None,
        }
    }

    pub fn model(&self) -> &GrowthModel {
        &self.model
    }

    pub fn presets(&self) -> &[DurationPreset] {
        &self.presets
    }

    pub fn amount_input(&self) -> &str {
        &self.amount_input
    }

    pub fn starting_amount(&self) -> Amount {
        self.starting_amount
    }

    pub fn hours(&self) -> Hours {
        self.duration.hours()
    }

    pub fn duration(&self) -> &DurationResolver {
        &self.duration
    }

    pub fn result(&self) -> Option<&GrowthResult> {
        self.result.as_ref()
    }

    /// `= 1.5k gems` while the typed amount parses to something positive.
    pub fn amount_echo(&self) -> Option<String> {
        if self.amount_input.is_empty() || self.starting_amount <= 0.0 {
            return None;
        }
        Some(format!("= {} gems", format_amount(self.starting_amount)))
    }

    pub fn set_amount_input(&mut self, text: &str) -> Amount {
        self.amount_input = text.to_string();
        let parsed = parse_amount(text);
        if parsed != self.starting_amount {
            self.starting_amount = parsed;
            self.invalidate();
        }
        parsed
    }

    /// Selects the preset at `index` in this session's preset list.
    pub fn select_preset(&mut self, index: usize) -> Option<Hours> {
        let preset = self.presets.get(index)?.clone();
        let before = self.duration.hours();
        let hours = self.duration.select_preset(&preset);
        if hours != before {
            self.invalidate();
        }
        Some(hours)
    }

    pub fn set_custom_days(&mut self, text: &str) -> Hours {
        let before = self.duration.hours();
        let hours = self.duration.set_custom_days(text);
        if hours != before {
            self.invalidate();
        }
        hours
    }

    /// Computes and stores a result, or clears the previous one when not computable.
    pub fn calculate(&mut self) -> Option<&GrowthResult> {
        self.result = self.model.compute(self.starting_amount, self.duration.hours());
        match &self.result {
            Some(result) => tracing::info!(
                "Calculated {} gems over {} hours: final {}, profit {}",
                result.starting_amount,
                result.hours,
                result.final_amount,
                result.profit
            ),
            None => tracing::debug!(
                "Not computable: amount={}, hours={}",
                self.starting_amount,
                self.duration.hours()
            ),
        }
        self.result.as_ref()
    }

    fn invalidate(&mut self) {
        if self.result.take().is_some() {
            tracing::debug!("Inputs changed, clearing previous result");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::DefaultRates;

    #[test]
    fn test_starts_with_one_day_and_no_result() {
        let session = CalculatorSession::new(&DefaultRates);
        assert_eq!(session.hours(), 24.0);
        assert!(session.result().is_none());
        assert!(session.amount_echo().is_none());
    }

    #[test]
    fn test_calculate_and_invalidate_on_amount_change() {
        let mut session = CalculatorSession::new(&DefaultRates);
        session.set_amount_input("1m");
        assert!(session.calculate().is_some());

        // Same value typed differently keeps the result
        session.set_amount_input("1000k");
        assert!(session.result().is_some());

        session.set_amount_input("2m");
        assert!(session.result().is_none());
    }

    #[test]
    fn test_invalidate_on_duration_change() {
        let mut session = CalculatorSession::new(&DefaultRates);
        session.set_amount_input("500");
        session.calculate();

        session.select_preset(3);
        assert_eq!(session.hours(), 168.0);
        assert!(session.result().is_none());

        session.calculate();
        // Non-positive custom text leaves the duration and the result alone
        session.set_custom_days("0");
        assert!(session.result().is_some());
    }

    #[test]
    fn test_not_computable_clears_stale_result() {
        let mut session = CalculatorSession::new(&DefaultRates);
        session.set_amount_input("100");
        session.calculate();
        assert!(session.result().is_some());

        session.set_amount_input("abc");
        assert!(session.calculate().is_none());
        assert!(session.result().is_none());
    }

    #[test]
    fn test_amount_echo() {
        let mut session = CalculatorSession::new(&DefaultRates);
        session.set_amount_input("1.5k");
        assert_eq!(session.amount_echo().as_deref(), Some("= 1.5k gems"));

        session.set_amount_input("0");
        assert!(session.amount_echo().is_none());
    }

    #[test]
    fn test_unknown_preset_index() {
        let mut session = CalculatorSession::new(&DefaultRates);
        assert!(session.select_preset(42).is_none());
    }
}
