use crate::domain::constants::{BELOW_THOUSAND_MAX_FRACTION_DIGITS, BILLION, MILLION, THOUSAND};
use crate::domain::model::Amount;
use regex::Regex;
use std::sync::LazyLock;

/// Leading decimal literal: optional sign, digits with optional fraction, optional exponent.
static DECIMAL_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?")
        .expect("decimal prefix pattern is valid")
});

/// Reads the longest decimal literal at the start of `text`.
///
/// Leading whitespace is skipped and anything after the literal is ignored,
/// so `"12abc"` reads as 12. Returns `None` when no literal is present or the
/// value does not fit in a finite `f64`.
pub fn parse_decimal_prefix(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let literal = DECIMAL_PREFIX.find(text)?.as_str();

    literal.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn suffix_multiplier(suffix: char) -> Option<f64> {
    match suffix {
        'k' => Some(THOUSAND),
        'm' => Some(MILLION),
        'b' => Some(BILLION),
        _ => None,
    }
}

/// Parses user text such as `"1.5k"`, `"500m"` or `"2b"` into an amount.
///
/// Total: empty or malformed input yields 0, never an error.
pub fn parse_amount(input: &str) -> Amount {
    let clean = input.trim().to_lowercase();
    let Some(last) = clean.chars().last() else {
        return 0.0;
    };

    if let Some(multiplier) = suffix_multiplier(last) {
        let head = &clean[..clean.len() - last.len_utf8()];
        if let Some(number) = parse_decimal_prefix(head) {
            return finite_or_zero(number * multiplier);
        }
    }

    parse_decimal_prefix(&clean).map(finite_or_zero).unwrap_or(0.0)
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Renders an amount with a one-decimal `k`/`m`/`b` suffix, or grouped digits below a thousand.
pub fn format_amount(value: Amount) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    if value >= BILLION {
        format!("{}b", to_fixed_tenth(value / BILLION))
    } else if value >= MILLION {
        format!("{}m", to_fixed_tenth(value / MILLION))
    } else if value >= THOUSAND {
        format!("{}k", to_fixed_tenth(value / THOUSAND))
    } else {
        format_grouped(value)
    }
}

/// One decimal place, rounding the exact stored value (`1.45` is 1.4499… and gives `"1.4"`).
///
/// Exact ties at the hundredths only occur for quarters (`x.25`, `x.75`); those round up.
fn to_fixed_tenth(value: f64) -> String {
    let quarters = value * 4.0;
    let is_exact_tie = quarters.fract() == 0.0 && quarters.rem_euclid(2.0) == 1.0;
    if is_exact_tie {
        return format!("{:.1}", ((value * 10.0).floor() + 1.0) / 10.0);
    }
    format!("{:.1}", value)
}

/// en-US style: `,` grouping, at most three fraction digits, no trailing zeros.
fn format_grouped(value: f64) -> String {
    let scale = 10f64.powi(BELOW_THOUSAND_MAX_FRACTION_DIGITS as i32);
    let rounded = (value * scale).round() / scale;

    let digits = format!("{:.*}", BELOW_THOUSAND_MAX_FRACTION_DIGITS, rounded.abs());
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(digits.len() + int_part.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

fn group_thousands(int_part: &str) -> String {
    let len = int_part.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
