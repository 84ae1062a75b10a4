#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command, DurationArgs};

use crate::domain::ports::{DefaultRates, RateProvider};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::path::Path;
use toml_config::TomlConfig;

/// Loads and validates the TOML config when a path is given, else the built-in rates.
pub fn load_rates(path: Option<&Path>) -> Result<Box<dyn RateProvider>> {
    match path {
        Some(path) => {
            let config = TomlConfig::from_file(path)?;
            config.validate()?;
            tracing::info!(
                "Using config {}: daily rate {}, {} presets",
                path.display(),
                config.daily_rate(),
                config.preset_days().len()
            );
            Ok(Box::new(config))
        }
        None => Ok(Box::new(DefaultRates)),
    }
}
