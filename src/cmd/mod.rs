pub mod calc;
pub mod categories;
pub mod completions;
pub mod config;
pub mod session;
