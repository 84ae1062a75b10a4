// src/domain/constants.rs

// --- Growth ---
pub const DAILY_RATE: f64 = 0.001; // 0.10% per day
pub const HOURS_PER_DAY: f64 = 24.0; // Compounding periods per day

// --- Shorthand Suffixes ---
pub const THOUSAND: f64 = 1_000.0;
pub const MILLION: f64 = 1_000_000.0;
pub const BILLION: f64 = 1_000_000_000.0;

// --- Durations ---
pub const PRESET_DAYS: [f64; 7] = [1.0, 2.0, 3.0, 7.0, 14.0, 30.0, 90.0];
pub const DEFAULT_HOURS: f64 = 24.0;

// --- Display ---
pub const BELOW_THOUSAND_MAX_FRACTION_DIGITS: usize = 3;
pub const PERCENT_DECIMALS: usize = 2;
