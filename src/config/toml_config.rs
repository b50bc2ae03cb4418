use crate::core::classifier::Thresholds;
use crate::utils::error::{Result, SorterError};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Threshold file layout:
///
/// ```toml
/// [thresholds]
/// min_bulky_volume = 1000000
/// min_bulky_dimension = 150
/// min_heavy_mass = 20
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub thresholds: Option<ThresholdOverrides>,
}

/// Thresholds to replace; `None` keeps whatever is underneath.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThresholdOverrides {
    pub min_bulky_volume: Option<f64>,
    pub min_bulky_dimension: Option<f64>,
    pub min_heavy_mass: Option<f64>,
}

impl ThresholdOverrides {
    pub fn apply(&self, base: Thresholds) -> Thresholds {
        Thresholds {
            min_bulky_volume: self.min_bulky_volume.unwrap_or(base.min_bulky_volume),
            min_bulky_dimension: self.min_bulky_dimension.unwrap_or(base.min_bulky_dimension),
            min_heavy_mass: self.min_heavy_mass.unwrap_or(base.min_heavy_mass),
        }
    }
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SorterError::ConfigParse {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Defaults with this file's overrides applied.
    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
            .unwrap_or_default()
            .apply(Thresholds::default())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.thresholds().validate()
    }
}
