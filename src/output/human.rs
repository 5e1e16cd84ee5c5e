use colored::{ColoredString, Colorize};
use comfy_table::Table;

use crate::core::categories::CategoryBand;
use crate::core::session::Calculation;
use crate::core::trend::BmiTrend;
use crate::models::bmi::Category;
use crate::models::config::Profile;
use crate::models::history::HistoryLog;

/// Category label coloured by severity.
pub fn category_colored(c: Category) -> ColoredString {
    match c {
        Category::Underweight => c.label().blue(),
        Category::Normal => c.label().green(),
        Category::Overweight => c.label().yellow(),
        Category::Obese => c.label().red(),
    }
}

/// Informational profile line, or `None` when nothing is set.
pub fn format_profile(p: &Profile) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(age) = p.age {
        parts.push(format!("age {}", age));
    }
    if let Some(g) = p.gender {
        parts.push(g.to_string());
    }
    if let Some(a) = p.activity {
        parts.push(a.to_string());
    }
    if parts.is_empty() {
        None
    } else {
        Some(format!("Profile: {}", parts.join(", ")))
    }
}

/// Pretty-print a calculation with its detailed analysis.
pub fn format_calculation(calc: &Calculation, profile: &Profile) -> String {
    let m = &calc.measurement;
    let r = &calc.result;
    let mut out = format!(
        "BMI: {} ({})\n",
        format!("{:.1}", r.bmi).bold(),
        category_colored(r.category)
    );
    out.push_str(&format!(
        "Healthy weight range for {} {}: {:.1} - {:.1} {}\n",
        m.height,
        m.unit_system.height_unit(),
        r.healthy_range.min,
        r.healthy_range.max,
        r.healthy_range.unit
    ));
    if let Some(line) = format_profile(profile) {
        out.push_str(&line);
        out.push('\n');
    }
    out.push('\n');
    out.push_str(r.category.advice());
    if calc.clamped {
        out.push_str(&format!(
            "\n(input clamped to {} {} / {} {})",
            m.weight,
            m.unit_system.weight_unit(),
            m.height,
            m.unit_system.height_unit()
        ));
    }
    if calc.saved {
        out.push_str("\nBMI saved to history.");
    }
    out
}

/// Render the history as a table, in date order.
pub fn format_history(log: &HistoryLog) -> String {
    if log.is_empty() {
        return "No history yet.".to_string();
    }
    let mut table = Table::new();
    table.set_header(vec!["Date", "BMI", "Category", "Weight", "Height", "Unit"]);
    for e in log.display_order() {
        table.add_row(vec![
            e.date.to_string(),
            format!("{:.1}", e.bmi),
            e.category.label().to_string(),
            format!("{} {}", e.weight, e.unit.weight_unit()),
            format!("{} {}", e.height, e.unit.height_unit()),
            e.unit.to_string(),
        ]);
    }
    table.to_string()
}

pub fn format_trend(t: &BmiTrend) -> String {
    let mut out = String::from("BMI trend\n\n");
    for p in &t.points {
        out.push_str(&format!("  {} | {:.1} ({})\n", p.date, p.bmi, p.category.label()));
    }
    out.push('\n');
    out.push_str(&format!(
        "  Direction: {} ({:+.1}, {:.1} -> {:.1})",
        t.direction, t.change, t.first, t.last
    ));
    out
}

pub fn format_categories(bands: &[CategoryBand]) -> String {
    let mut table = Table::new();
    table.set_header(vec!["Category", "BMI"]);
    for b in bands {
        table.add_row(vec![b.label, b.range]);
    }
    table.to_string()
}
