use serde::{Deserialize, Serialize};

/// Lower bound of the Normal band.
pub const NORMAL_MIN: f64 = 18.5;
/// Lower bound of the Overweight band.
pub const OVERWEIGHT_MIN: f64 = 25.0;
/// Lower bound of the Obese band.
pub const OBESE_MIN: f64 = 30.0;
/// BMI used for the top of the healthy weight range.
pub const HEALTHY_MAX: f64 = 24.9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Self::Underweight,
        Self::Normal,
        Self::Overweight,
        Self::Obese,
    ];

    /// Human-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obesity",
        }
    }

    pub fn range_label(&self) -> &'static str {
        match self {
            Self::Underweight => "<18.5",
            Self::Normal => "18.5-24.9",
            Self::Overweight => "25-29.9",
            Self::Obese => "30+",
        }
    }

    /// Half-open BMI interval `[lower, upper)` covered by this category.
    pub fn bounds(&self) -> (Option<f64>, Option<f64>) {
        match self {
            Self::Underweight => (None, Some(NORMAL_MIN)),
            Self::Normal => (Some(NORMAL_MIN), Some(OVERWEIGHT_MIN)),
            Self::Overweight => (Some(OVERWEIGHT_MIN), Some(OBESE_MIN)),
            Self::Obese => (Some(OBESE_MIN), None),
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            Self::Underweight => {
                "You may need to gain some weight. Consider consulting a doctor or \
                 nutritionist for advice on healthy weight gain through a balanced diet \
                 and strength training."
            }
            Self::Normal => {
                "You have a healthy body weight for your height. Maintain this with a \
                 balanced diet and regular physical activity."
            }
            Self::Overweight => {
                "You may need to lose some weight for better health. Consider increasing \
                 physical activity and making healthy dietary changes."
            }
            Self::Obese => {
                "For health reasons, it's recommended to lose weight. Consult with a \
                 healthcare provider for a personalized plan that includes diet, exercise, \
                 and lifestyle changes."
            }
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Healthy weight range for a given height, in the input's weight unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthyRange {
    pub min: f64,
    pub max: f64,
    pub unit: String,
}

/// Outcome of a BMI computation. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    pub bmi: f64,
    pub category: Category,
    pub healthy_range: HealthyRange,
}
