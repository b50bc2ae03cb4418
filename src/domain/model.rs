use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four measurements of a single package.
///
/// Linear dimensions share one unit (typically centimeters) and mass another
/// (typically kilograms). No conversion happens anywhere in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub width: f64,
    pub height: f64,
    pub length: f64,
    pub mass: f64,
}

impl Measurement {
    pub fn new(width: f64, height: f64, length: f64, mass: f64) -> Self {
        Self {
            width,
            height,
            length,
            mass,
        }
    }

    pub fn volume(&self) -> f64 {
        self.width * self.height * self.length
    }

    pub fn largest_dimension(&self) -> f64 {
        self.width.max(self.height).max(self.length)
    }

    pub(crate) fn values(&self) -> [(&'static str, f64); 4] {
        [
            ("width", self.width),
            ("height", self.height),
            ("length", self.length),
            ("mass", self.mass),
        ]
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "width={}, height={}, length={}, mass={}",
            self.width, self.height, self.length, self.mass
        )
    }
}

/// Handling category a package is sorted into.
///
/// Categories are only ever compared for equality; there is no severity order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Standard,
    Special,
    Rejected,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Standard => "STANDARD",
            Category::Special => "SPECIAL",
            Category::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "STANDARD" => Ok(Category::Standard),
            "SPECIAL" => Ok(Category::Special),
            "REJECTED" => Ok(Category::Rejected),
            other => Err(format!("unknown category: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::Standard.to_string(), "STANDARD");
        assert_eq!(Category::Special.to_string(), "SPECIAL");
        assert_eq!(Category::Rejected.to_string(), "REJECTED");
        assert_eq!("special".parse::<Category>().unwrap(), Category::Special);
        assert!("HEAVY".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serializes_as_label() {
        let json = serde_json::to_string(&Category::Rejected).unwrap();
        assert_eq!(json, "\"REJECTED\"");
    }

    #[test]
    fn test_measurement_volume_and_largest_dimension() {
        let m = Measurement::new(99.0, 99.0, 99.0, 19.0);
        assert_eq!(m.volume(), 970_299.0);
        assert_eq!(Measurement::new(10.0, 150.0, 3.0, 0.0).largest_dimension(), 150.0);
    }
}
