pub mod human;

use serde_json::{Value, json};

use crate::core::session::Calculation;
use crate::models::config::Profile;

/// Standard JSON envelope for successful commands.
pub fn success(command: &str, data: Value) -> Value {
    json!({
        "status": "ok",
        "command": command,
        "data": data,
        "error": null
    })
}

pub fn error(command: &str, code: &str, message: &str) -> Value {
    json!({
        "status": "error",
        "command": command,
        "data": null,
        "error": {
            "code": code,
            "message": message
        }
    })
}

/// JSON payload for a calculation, including the informational profile.
pub fn calculation_json(calc: &Calculation, profile: &Profile) -> Value {
    let r = &calc.result;
    json!({
        "bmi": r.bmi,
        "category": r.category,
        "category_label": r.category.label(),
        "healthy_range": r.healthy_range,
        "measurement": calc.measurement,
        "clamped": calc.clamped,
        "saved": calc.saved,
        "profile": profile,
        "advice": r.category.advice(),
    })
}

/// Error envelope for an `anyhow` error, using the engine's code when the
/// root cause is a [`crate::BmiError`].
pub fn from_error(command: &str, err: &anyhow::Error) -> Value {
    let code = err
        .downcast_ref::<crate::BmiError>()
        .map(|e| e.code())
        .unwrap_or("general_error");
    error(command, code, &err.to_string())
}
