use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Serialization,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CalcError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::IoError(_) => ErrorCategory::Io,
            CalcError::SerializationError(_) => ErrorCategory::Serialization,
            CalcError::ConfigValidationError { .. } | CalcError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CalcError::SerializationError(_) => ErrorSeverity::Medium,
            CalcError::ConfigValidationError { .. } | CalcError::InvalidConfigValueError { .. } => {
                ErrorSeverity::High
            }
            CalcError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CalcError::IoError(_) => "Check that the file exists and is readable".to_string(),
            CalcError::SerializationError(_) => "Retry without --json".to_string(),
            CalcError::ConfigValidationError { .. } => {
                "Check the TOML syntax and section names in the config file".to_string()
            }
            CalcError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the config file", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::IoError(e) => format!("Could not read a file: {}", e),
            CalcError::SerializationError(e) => format!("Could not render JSON output: {}", e),
            CalcError::ConfigValidationError { field, message } => {
                format!("Bad configuration in {}: {}", field, message)
            }
            CalcError::InvalidConfigValueError { field, value, reason } => {
                format!("{} = {} is not allowed ({})", field, value, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
