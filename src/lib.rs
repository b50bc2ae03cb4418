pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::TomlConfig;
pub use self::core::{classify, classify_csv, BatchSummary, Classifier, Thresholds};
pub use domain::model::{Category, Measurement};
pub use utils::error::{Result, SorterError};
