pub mod core;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;

pub use error::BmiError;
