pub mod bmi;
pub mod categories;
pub mod history;
pub mod session;
pub mod trend;
pub mod units;
