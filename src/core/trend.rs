use chrono::NaiveDate;
use serde::Serialize;

use crate::core::units::round1;
use crate::models::bmi::{Category, NORMAL_MIN, OBESE_MIN, OVERWEIGHT_MIN};
use crate::models::history::HistoryLog;

/// Changes smaller than this are reported as stable.
const STABLE_EPSILON: f64 = 0.05;

#[derive(Debug, Clone, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub bmi: f64,
    pub category: Category,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReferenceLine {
    pub value: f64,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct BmiTrend {
    pub points: Vec<TrendPoint>,
    pub reference_lines: Vec<ReferenceLine>,
    pub first: f64,
    pub last: f64,
    pub change: f64,
    pub direction: String,
}

/// Category boundaries drawn across a BMI-over-time chart.
pub fn reference_lines() -> Vec<ReferenceLine> {
    vec![
        ReferenceLine {
            value: NORMAL_MIN,
            label: "Underweight/Normal",
        },
        ReferenceLine {
            value: OVERWEIGHT_MIN,
            label: "Normal/Overweight",
        },
        ReferenceLine {
            value: OBESE_MIN,
            label: "Overweight/Obese",
        },
    ]
}

/// Build the BMI trend from a history log.
///
/// Needs at least two entries. Points are ordered by date; the log itself is
/// left untouched.
pub fn compute(log: &HistoryLog) -> Option<BmiTrend> {
    if log.len() < 2 {
        return None;
    }

    let points: Vec<TrendPoint> = log
        .display_order()
        .into_iter()
        .map(|e| TrendPoint {
            date: e.date,
            bmi: e.bmi,
            category: e.category,
        })
        .collect();

    let first = points.first()?.bmi;
    let last = points.last()?.bmi;
    let change = round1(last - first);
    let direction = if change >= STABLE_EPSILON {
        "increasing"
    } else if change <= -STABLE_EPSILON {
        "decreasing"
    } else {
        "stable"
    };

    Some(BmiTrend {
        points,
        reference_lines: reference_lines(),
        first,
        last,
        change,
        direction: direction.to_string(),
    })
}
