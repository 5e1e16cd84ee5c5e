#![allow(dead_code)]

use chrono::NaiveDate;
use bmitrack::models::{BmiResult, HistoryEntry, Measurement};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Build a history entry from a metric measurement on a given date.
pub fn make_entry(weight_kg: f64, height_cm: f64, on: NaiveDate) -> HistoryEntry {
    let m = Measurement::metric(weight_kg, height_cm);
    let r: BmiResult = bmitrack::core::bmi::compute_bmi(&m).unwrap();
    HistoryEntry::new(on, &m, &r)
}

pub fn approx(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}
