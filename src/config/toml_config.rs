use crate::domain::constants::{DAILY_RATE, DEFAULT_HOURS, PRESET_DAYS};
use crate::domain::ports::RateProvider;
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{validate_non_empty, validate_positive, validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is valid"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub growth: GrowthConfig,
    #[serde(default)]
    pub durations: DurationsConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GrowthConfig {
    pub daily_rate: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DurationsConfig {
    pub preset_days: Option<Vec<f64>>,
    pub default_hours: Option<f64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CalcError::IoError)?;
        tracing::debug!("Loaded config from {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| CalcError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GEM_DAILY_RATE})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_PLACEHOLDER
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    pub fn validate_config(&self) -> Result<()> {
        // A zero rate would leave the final amount flat in hours
        validate_positive("growth.daily_rate", self.daily_rate())?;
        validate_range("growth.daily_rate", self.daily_rate(), 0.0, 1.0)?;

        if let Some(days) = &self.durations.preset_days {
            validate_non_empty("durations.preset_days", days)?;
            for day in days {
                validate_positive("durations.preset_days", *day)?;
            }
        }

        validate_positive("durations.default_hours", self.default_hours())?;

        Ok(())
    }
}

impl RateProvider for TomlConfig {
    fn daily_rate(&self) -> f64 {
        self.growth.daily_rate.unwrap_or(DAILY_RATE)
    }

    fn preset_days(&self) -> Vec<f64> {
        self.durations
            .preset_days
            .clone()
            .unwrap_or_else(|| PRESET_DAYS.to_vec())
    }

    fn default_hours(&self) -> f64 {
        self.durations.default_hours.unwrap_or(DEFAULT_HOURS)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
