use chrono::NaiveDate;
use serde::Serialize;

use crate::core::bmi::compute_bmi;
use crate::core::history::{append_history, clear_history};
use crate::error::BmiError;
use crate::models::bmi::BmiResult;
use crate::models::config::{Config, Profile};
use crate::models::history::{HistoryEntry, HistoryLog};
use crate::models::measurement::{Measurement, UnitSystem};

/// Outcome of one calculation inside a session.
#[derive(Debug, Clone, Serialize)]
pub struct Calculation {
    pub measurement: Measurement,
    /// True when the raw input had to be clamped into bounds.
    pub clamped: bool,
    pub result: BmiResult,
    /// True when the result was appended to the session history.
    pub saved: bool,
}

/// State owned by one interactive session.
///
/// Callers hold the session and pass it around explicitly; two sessions never
/// share a history.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub units: UnitSystem,
    pub track_history: bool,
    pub profile: Profile,
    history: HistoryLog,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self {
            units: config.units.system,
            track_history: config.history.track,
            profile: config.profile.clone(),
            history: HistoryLog::new(),
        }
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn set_units(&mut self, units: UnitSystem) {
        self.units = units;
    }

    pub fn set_tracking(&mut self, on: bool) {
        self.track_history = on;
    }

    /// Compute BMI for raw input in the session's unit system, saving the
    /// result to history when tracking is on.
    ///
    /// A non-finite weight is rejected before anything is computed or saved.
    pub fn calculate(
        &mut self,
        weight: f64,
        height: f64,
        date: NaiveDate,
    ) -> Result<Calculation, BmiError> {
        if !weight.is_finite() {
            return Err(BmiError::InvalidWeight { weight });
        }

        let (measurement, clamped) = Measurement::new(weight, height, self.units).clamped();
        if clamped {
            tracing::warn!(
                weight,
                height,
                clamped_weight = measurement.weight,
                clamped_height = measurement.height,
                "input outside accepted range, clamped"
            );
        }

        let result = compute_bmi(&measurement)?;
        tracing::debug!(bmi = result.bmi, category = ?result.category, "computed bmi");

        let saved = self.track_history;
        if saved {
            self.save(HistoryEntry::new(date, &measurement, &result));
        }

        Ok(Calculation {
            measurement,
            clamped,
            result,
            saved,
        })
    }

    fn save(&mut self, entry: HistoryEntry) {
        let log = std::mem::take(&mut self.history);
        self.history = append_history(log, entry);
        tracing::debug!(entries = self.history.len(), "history entry appended");
    }

    /// Drop every saved entry. Returns how many were removed.
    pub fn clear_history(&mut self) -> usize {
        let removed = self.history.len();
        self.history = clear_history();
        tracing::debug!(removed, "history cleared");
        removed
    }
}
