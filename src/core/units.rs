use crate::models::measurement::UnitSystem;

pub const LB_TO_KG: f64 = 0.453592;
pub const IN_TO_M: f64 = 0.0254;
const CM_PER_M: f64 = 100.0;

/// Convert an input weight to kilograms.
pub fn weight_to_kg(value: f64, system: UnitSystem) -> f64 {
    match system {
        UnitSystem::Metric => value,
        UnitSystem::Imperial => value * LB_TO_KG,
    }
}

/// Convert an input height to meters.
pub fn height_to_m(value: f64, system: UnitSystem) -> f64 {
    match system {
        UnitSystem::Metric => value / CM_PER_M,
        UnitSystem::Imperial => value * IN_TO_M,
    }
}

/// Convert kilograms back to the system's weight unit.
pub fn kg_to_weight(kg: f64, system: UnitSystem) -> f64 {
    match system {
        UnitSystem::Metric => kg,
        UnitSystem::Imperial => kg / LB_TO_KG,
    }
}

/// Round to one decimal place, ties to even.
pub fn round1(v: f64) -> f64 {
    (v * 10.0).round_ties_even() / 10.0
}
