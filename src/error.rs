//! Error types for the BMI engine.

/// Failures the engine and session can report. Everything else is prevented
/// upstream by input clamping.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BmiError {
    /// Height converted to meters was zero, negative or not a number.
    #[error("invalid height: {height_m} m (must be a positive number)")]
    InvalidHeight { height_m: f64 },

    /// Weight was NaN or infinite.
    #[error("invalid weight: {weight} (must be a finite number)")]
    InvalidWeight { weight: f64 },
}

impl BmiError {
    /// Machine-readable code used in the JSON error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidHeight { .. } => "invalid_height",
            Self::InvalidWeight { .. } => "invalid_weight",
        }
    }
}
