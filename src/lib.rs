pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::config::toml_config::TomlConfig;
pub use crate::core::duration::{presets, resolve_hours, DurationResolver};
pub use crate::core::growth::{compute_growth, GrowthModel};
pub use crate::core::session::CalculatorSession;
pub use crate::core::shorthand::{format_amount, parse_amount};
pub use crate::domain::model::{Amount, DurationPreset, DurationSelection, GrowthResult, Hours};
pub use crate::domain::ports::{DefaultRates, RateProvider};
pub use crate::utils::error::{CalcError, Result};
