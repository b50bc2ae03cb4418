use crate::domain::model::Measurement;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SorterError {
    #[error("Invalid {field}, every value must be a non-negative number: {measurement}")]
    InvalidMeasurement {
        field: &'static str,
        measurement: Measurement,
    },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SorterError {
    /// Process exit code the CLI reports for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            SorterError::InvalidMeasurement { .. } => 1,
            SorterError::InvalidConfigValue { .. } | SorterError::ConfigParse { .. } => 2,
            SorterError::Io(_) | SorterError::Csv(_) | SorterError::Serialization(_) => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SorterError::InvalidMeasurement { field, measurement } => format!(
                "The package {} was negative or not a number, check the inputs and try again ({})",
                field, measurement
            ),
            SorterError::InvalidConfigValue { field, reason, .. } => {
                format!("Threshold '{}' is not usable: {}", field, reason)
            }
            SorterError::ConfigParse { .. } => {
                "The threshold file is not valid TOML, see the log for details".to_string()
            }
            SorterError::Io(e) => format!("Could not read or write a file: {}", e),
            SorterError::Csv(e) => format!("The package manifest could not be processed: {}", e),
            SorterError::Serialization(e) => format!("Could not render the result: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, SorterError>;
