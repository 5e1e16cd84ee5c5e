use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::bmi::{BmiResult, Category};
use crate::models::measurement::{Measurement, UnitSystem};

/// One saved calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: NaiveDate,
    pub bmi: f64,
    pub category: Category,
    pub weight: f64,
    pub height: f64,
    pub unit: UnitSystem,
}

impl HistoryEntry {
    pub fn new(date: NaiveDate, measurement: &Measurement, result: &BmiResult) -> Self {
        Self {
            date,
            bmi: result.bmi,
            category: result.category,
            weight: measurement.weight,
            height: measurement.height,
            unit: measurement.unit_system,
        }
    }
}

/// Session-scoped, append-only list of saved calculations.
///
/// Insertion order is authoritative; [`HistoryLog::display_order`] only
/// produces a sorted view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// In-place append. [`crate::core::history::append_history`] is built on
    /// this; both keep insertion order and never reorder existing entries.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Entries sorted by date; equal dates keep insertion order.
    pub fn display_order(&self) -> Vec<&HistoryEntry> {
        let mut sorted: Vec<&HistoryEntry> = self.entries.iter().collect();
        sorted.sort_by_key(|e| e.date);
        sorted
    }
}
