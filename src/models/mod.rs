pub mod bmi;
pub mod config;
pub mod history;
pub mod measurement;

pub use bmi::{BmiResult, Category, HealthyRange};
pub use history::{HistoryEntry, HistoryLog};
pub use measurement::{Measurement, UnitSystem};
