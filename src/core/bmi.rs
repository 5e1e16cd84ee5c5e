use crate::core::units::{height_to_m, kg_to_weight, round1, weight_to_kg};
use crate::error::BmiError;
use crate::models::bmi::{
    BmiResult, Category, HEALTHY_MAX, HealthyRange, NORMAL_MIN, OBESE_MIN, OVERWEIGHT_MIN,
};
use crate::models::measurement::{Measurement, UnitSystem};

/// Compute BMI, category and healthy weight range for a measurement.
///
/// The engine does not trust caller-side bounds: a height that converts to a
/// non-positive or non-finite number of meters is rejected.
pub fn compute_bmi(m: &Measurement) -> Result<BmiResult, BmiError> {
    let height_m = height_to_m(m.height, m.unit_system);
    if !height_m.is_finite() || height_m <= 0.0 {
        return Err(BmiError::InvalidHeight { height_m });
    }

    let weight_kg = weight_to_kg(m.weight, m.unit_system);
    let bmi = round1(weight_kg / (height_m * height_m));

    Ok(BmiResult {
        bmi,
        category: classify(bmi),
        healthy_range: healthy_weight_range(height_m, m.unit_system),
    })
}

/// Map a BMI value to its category using half-open intervals.
pub fn classify(bmi: f64) -> Category {
    match bmi {
        b if b < NORMAL_MIN => Category::Underweight,
        b if b < OVERWEIGHT_MIN => Category::Normal,
        b if b < OBESE_MIN => Category::Overweight,
        _ => Category::Obese,
    }
}

/// Weight range giving a BMI between 18.5 and 24.9 at `height_m`.
pub fn healthy_weight_range(height_m: f64, system: UnitSystem) -> HealthyRange {
    let h2 = height_m * height_m;
    HealthyRange {
        min: round1(kg_to_weight(NORMAL_MIN * h2, system)),
        max: round1(kg_to_weight(HEALTHY_MAX * h2, system)),
        unit: system.weight_unit().to_string(),
    }
}
