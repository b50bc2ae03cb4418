use crate::domain::model::{Category, Measurement};
use crate::utils::error::Result;
use crate::utils::validation::{validate_measurement, validate_positive_threshold, Validate};
use serde::{Deserialize, Serialize};

pub const MIN_BULKY_VOLUME: f64 = 1_000_000.0;
pub const MIN_BULKY_DIMENSION: f64 = 150.0;
pub const MIN_HEAVY_MASS: f64 = 20.0;

/// Limits at or above which a package counts as bulky or heavy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub min_bulky_volume: f64,
    pub min_bulky_dimension: f64,
    pub min_heavy_mass: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_bulky_volume: MIN_BULKY_VOLUME,
            min_bulky_dimension: MIN_BULKY_DIMENSION,
            min_heavy_mass: MIN_HEAVY_MASS,
        }
    }
}

impl Validate for Thresholds {
    fn validate(&self) -> Result<()> {
        validate_positive_threshold("min_bulky_volume", self.min_bulky_volume)?;
        validate_positive_threshold("min_bulky_dimension", self.min_bulky_dimension)?;
        validate_positive_threshold("min_heavy_mass", self.min_heavy_mass)?;
        Ok(())
    }
}

/// Sorts packages into `STANDARD`, `SPECIAL` or `REJECTED`.
///
/// A package is bulky when its volume or its largest dimension reaches the
/// configured threshold, and heavy when its mass does. Bulky and heavy is
/// rejected, either one alone is special, neither is standard.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Classifier {
    thresholds: Thresholds,
}

impl Classifier {
    pub fn new(thresholds: Thresholds) -> Result<Self> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn classify(&self, width: f64, height: f64, length: f64, mass: f64) -> Result<Category> {
        self.classify_measurement(&Measurement::new(width, height, length, mass))
    }

    pub fn classify_measurement(&self, measurement: &Measurement) -> Result<Category> {
        validate_measurement(measurement)?;

        let bulky = self.is_bulky(measurement);
        let heavy = self.is_heavy(measurement);

        let category = if bulky && heavy {
            Category::Rejected
        } else if bulky || heavy {
            Category::Special
        } else {
            Category::Standard
        };

        tracing::debug!(
            %measurement,
            volume = measurement.volume(),
            bulky,
            heavy,
            %category,
            "classified package"
        );

        Ok(category)
    }

    pub fn has_bulky_dimension(&self, measurement: &Measurement) -> bool {
        measurement.largest_dimension() >= self.thresholds.min_bulky_dimension
    }

    pub fn has_bulky_volume(&self, measurement: &Measurement) -> bool {
        measurement.volume() >= self.thresholds.min_bulky_volume
    }

    pub fn is_bulky(&self, measurement: &Measurement) -> bool {
        self.has_bulky_dimension(measurement) || self.has_bulky_volume(measurement)
    }

    pub fn is_heavy(&self, measurement: &Measurement) -> bool {
        measurement.mass >= self.thresholds.min_heavy_mass
    }
}

/// Classifies with the default thresholds.
pub fn classify(width: f64, height: f64, length: f64, mass: f64) -> Result<Category> {
    Classifier::default().classify(width, height, length, mass)
}
