use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Unit system for weight and height input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    /// Kilograms and centimeters.
    #[default]
    Metric,
    /// Pounds and inches.
    Imperial,
}

impl UnitSystem {
    pub fn weight_unit(&self) -> &'static str {
        match self {
            Self::Metric => "kg",
            Self::Imperial => "lb",
        }
    }

    pub fn height_unit(&self) -> &'static str {
        match self {
            Self::Metric => "cm",
            Self::Imperial => "in",
        }
    }

    /// Inclusive (min, max) accepted weight in this system's unit.
    pub fn weight_bounds(&self) -> (f64, f64) {
        match self {
            Self::Metric => (20.0, 200.0),
            Self::Imperial => (44.0, 440.0),
        }
    }

    /// Inclusive (min, max) accepted height in this system's unit.
    pub fn height_bounds(&self) -> (f64, f64) {
        match self {
            Self::Metric => (100.0, 250.0),
            Self::Imperial => (39.0, 98.0),
        }
    }
}

impl FromStr for UnitSystem {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "metric" => Ok(Self::Metric),
            "imperial" => Ok(Self::Imperial),
            _ => anyhow::bail!("invalid unit system: {} (expected metric/imperial)", s),
        }
    }
}

impl std::fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Metric => write!(f, "Metric"),
            Self::Imperial => write!(f, "Imperial"),
        }
    }
}

/// A weight/height pair expressed in one unit system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub weight: f64,
    pub height: f64,
    pub unit_system: UnitSystem,
}

impl Measurement {
    pub fn new(weight: f64, height: f64, unit_system: UnitSystem) -> Self {
        Self {
            weight,
            height,
            unit_system,
        }
    }

    pub fn metric(weight_kg: f64, height_cm: f64) -> Self {
        Self::new(weight_kg, height_cm, UnitSystem::Metric)
    }

    pub fn imperial(weight_lb: f64, height_in: f64) -> Self {
        Self::new(weight_lb, height_in, UnitSystem::Imperial)
    }

    /// Clamp weight and height into the unit system's accepted bounds.
    ///
    /// Returns the clamped measurement and whether any value changed. NaN and
    /// infinities are passed through untouched.
    pub fn clamped(&self) -> (Self, bool) {
        let (w_min, w_max) = self.unit_system.weight_bounds();
        let (h_min, h_max) = self.unit_system.height_bounds();
        let weight = clamp_finite(self.weight, w_min, w_max);
        let height = clamp_finite(self.height, h_min, h_max);
        let changed = weight.to_bits() != self.weight.to_bits()
            || height.to_bits() != self.height.to_bits();
        (Self::new(weight, height, self.unit_system), changed)
    }
}

fn clamp_finite(v: f64, min: f64, max: f64) -> f64 {
    if !v.is_finite() { v } else { v.clamp(min, max) }
}
