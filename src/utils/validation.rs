use crate::domain::model::Measurement;
use crate::utils::error::{Result, SorterError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Rejects a measurement with any negative or NaN component. Zero passes.
pub fn validate_measurement(measurement: &Measurement) -> Result<()> {
    let invalid = measurement
        .values()
        .into_iter()
        .find(|(_, value)| value.is_nan() || *value < 0.0);

    match invalid {
        Some((field, _)) => Err(SorterError::InvalidMeasurement {
            field,
            measurement: *measurement,
        }),
        None => Ok(()),
    }
}

pub fn validate_positive_threshold(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(SorterError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }

    if value <= 0.0 {
        return Err(SorterError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be greater than 0".to_string(),
        });
    }
    Ok(())
}

impl Validate for Measurement {
    fn validate(&self) -> Result<()> {
        validate_measurement(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_measurement() {
        assert!(validate_measurement(&Measurement::new(0.0, 0.0, 0.0, 0.0)).is_ok());
        assert!(validate_measurement(&Measurement::new(1.5, 2.0, 3.0, 4.0)).is_ok());
        assert!(validate_measurement(&Measurement::new(-1.0, 0.0, 0.0, 0.0)).is_err());
        assert!(validate_measurement(&Measurement::new(0.0, 0.0, 0.0, -0.001)).is_err());
        assert!(validate_measurement(&Measurement::new(0.0, f64::NAN, 0.0, 0.0)).is_err());
    }

    #[test]
    fn test_error_names_first_invalid_field() {
        let result = validate_measurement(&Measurement::new(1.0, 1.0, -2.0, f64::NAN));
        assert!(matches!(
            result,
            Err(SorterError::InvalidMeasurement { field: "length", .. })
        ));

        let result = validate_measurement(&Measurement::new(1.0, 1.0, 1.0, f64::NAN));
        assert!(matches!(
            result,
            Err(SorterError::InvalidMeasurement { field: "mass", .. })
        ));
    }

    #[test]
    fn test_negative_zero_is_accepted() {
        assert!(Measurement::new(-0.0, 0.0, 0.0, 0.0).validate().is_ok());
    }

    #[test]
    fn test_validate_positive_threshold() {
        assert!(validate_positive_threshold("min_heavy_mass", 20.0).is_ok());
        assert!(validate_positive_threshold("min_heavy_mass", 0.0).is_err());
        assert!(validate_positive_threshold("min_heavy_mass", -5.0).is_err());
        assert!(validate_positive_threshold("min_heavy_mass", f64::INFINITY).is_err());
        assert!(validate_positive_threshold("min_heavy_mass", f64::NAN).is_err());
    }
}
