use gem_growth::{
    compute_growth, format_amount, parse_amount, presets, resolve_hours, CalculatorSession,
    DefaultRates, DurationSelection, GrowthModel,
};

#[test]
fn test_shorthand_round_trip_within_one_decimal() {
    for value in [1_500.0, 2_300_000.0, 1_500_000_000.0, 45_600.0] {
        let reparsed = parse_amount(&format_amount(value));
        // One-decimal rounding of the scaled value
        let tolerance = value * 0.05;
        assert!(
            (reparsed - value).abs() <= tolerance,
            "{} -> {} -> {}",
            value,
            format_amount(value),
            reparsed
        );
    }

    assert_eq!(format_amount(1_500_000_000.0), "1.5b");
    assert_eq!(parse_amount("1.5b"), 1_500_000_000.0);
}

#[test]
fn test_parse_then_compute_then_format() {
    let amount = parse_amount("1m");
    let hours = resolve_hours(&DurationSelection::Preset(presets()[0].clone()), 0.0);
    let result = compute_growth(amount, hours).unwrap();

    assert_eq!(format_amount(result.display_final()), "1.0m");
    assert_eq!(format_amount(result.display_profit()), "1.0k");
    assert!((result.percentage_gain - 0.1).abs() < 1e-4);
}

#[test]
fn test_ninety_days_on_a_billion() {
    let result = compute_growth(parse_amount("1b"), 90.0 * 24.0).unwrap();

    let expected = 1e9 * (1.0 + 0.001 / 24.0_f64).powf(2160.0);
    assert_eq!(result.final_amount, expected);
    assert_eq!(format_amount(result.display_final()), "1.1b");
    assert!(result.percentage_gain > 9.0 && result.percentage_gain < 9.5);
}

#[test]
fn test_garbage_input_is_not_computable() {
    let amount = parse_amount("lots of gems");
    assert_eq!(amount, 0.0);
    assert!(compute_growth(amount, 24.0).is_none());
}

#[test]
fn test_session_with_custom_model() {
    let mut session = CalculatorSession::new(&DefaultRates);
    assert_eq!(session.model(), &GrowthModel::default());

    session.set_amount_input("250k");
    session.set_custom_days("1.5");
    assert_eq!(session.hours(), 36.0);

    let result = *session.calculate().unwrap();
    assert_eq!(result, compute_growth(250_000.0, 36.0).unwrap());
}
