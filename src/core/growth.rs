use crate::domain::constants::{DAILY_RATE, HOURS_PER_DAY};
use crate::domain::model::{Amount, GrowthResult, Hours};
use crate::domain::ports::RateProvider;

/// Hourly compounding at a fixed daily rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthModel {
    pub daily_rate: f64,
}

impl Default for GrowthModel {
    fn default() -> Self {
        Self {
            daily_rate: DAILY_RATE,
        }
    }
}

impl GrowthModel {
    pub fn new(daily_rate: f64) -> Self {
        Self { daily_rate }
    }

    pub fn from_provider<R: RateProvider + ?Sized>(provider: &R) -> Self {
        Self::new(provider.daily_rate())
    }

    pub fn hourly_rate(&self) -> f64 {
        self.daily_rate / HOURS_PER_DAY
    }

    /// `amount * (1 + hourly_rate)^hours`, with `hours` applied as a real exponent.
    ///
    /// Returns `None` (not computable) unless both inputs are finite and positive.
    pub fn compute(&self, starting_amount: Amount, hours: Hours) -> Option<GrowthResult> {
        if !is_positive(starting_amount) || !is_positive(hours) {
            return None;
        }

        let final_amount = starting_amount * (1.0 + self.hourly_rate()).powf(hours);
        let profit = final_amount - starting_amount;
        let percentage_gain = profit / starting_amount * 100.0;

        Some(GrowthResult {
            starting_amount,
            hours,
            final_amount,
            profit,
            percentage_gain,
        })
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Computes growth at the built-in daily rate.
pub fn compute_growth(starting_amount: Amount, hours: Hours) -> Option<GrowthResult> {
    GrowthModel::default().compute(starting_amount, hours)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_computable_inputs() {
        assert!(compute_growth(0.0, 24.0).is_none());
        assert!(compute_growth(100.0, 0.0).is_none());
        assert!(compute_growth(-5.0, 24.0).is_none());
        assert!(compute_growth(100.0, -1.0).is_none());
        assert!(compute_growth(f64::NAN, 24.0).is_none());
        assert!(compute_growth(100.0, f64::INFINITY).is_none());
    }

    #[test]
    fn test_one_day_on_a_million() {
        let result = compute_growth(1_000_000.0, 24.0).unwrap();

        assert_eq!(result.display_final(), 1_001_000.0);
        assert_eq!(result.display_profit(), 1_000.0);
        assert!((result.percentage_gain - 0.1).abs() < 1e-4);
        assert_eq!(result.profit, result.final_amount - result.starting_amount);
    }

    #[test]
    fn test_fractional_hours_use_real_exponent() {
        let result = compute_growth(1_000.0, 36.0).unwrap();
        let expected = 1_000.0 * (1.0 + 0.001 / 24.0_f64).powf(36.0);
        assert_eq!(result.final_amount, expected);

        let half_hour = compute_growth(1_000.0, 0.5).unwrap();
        assert!(half_hour.final_amount > 1_000.0);
        assert!(half_hour.final_amount < compute_growth(1_000.0, 1.0).unwrap().final_amount);
    }

    #[test]
    fn test_monotonic_in_hours() {
        let mut previous = 0.0;
        for hours in [1.0, 24.0, 48.0, 72.0, 168.0, 336.0, 720.0, 2160.0] {
            let result = compute_growth(5_000.0, hours).unwrap();
            assert!(result.final_amount > previous);
            previous = result.final_amount;
        }
    }

    #[test]
    fn test_deterministic() {
        let a = compute_growth(123_456.789, 1000.5).unwrap();
        let b = compute_growth(123_456.789, 1000.5).unwrap();
        assert_eq!(a.final_amount.to_bits(), b.final_amount.to_bits());
        assert_eq!(a.percentage_gain.to_bits(), b.percentage_gain.to_bits());
    }

    #[test]
    fn test_custom_rate_model() {
        let model = GrowthModel::new(0.024);
        assert!((model.hourly_rate() - 0.001).abs() < 1e-15);

        let result = model.compute(1_000.0, 1.0).unwrap();
        assert!((result.final_amount - 1_001.0).abs() < 1e-9);
    }

    #[test]
    fn test_custom_rate_grows_strictly_with_hours() {
        let model = GrowthModel::new(0.002);
        let one_day = model.compute(1_000.0, 24.0).unwrap();
        let two_days = model.compute(1_000.0, 48.0).unwrap();

        assert!(one_day.profit > 0.0);
        assert!(two_days.final_amount > one_day.final_amount);
    }
}
