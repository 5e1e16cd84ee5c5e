use serde::Serialize;

use crate::models::bmi::Category;

#[derive(Debug, Serialize)]
pub struct CategoryBand {
    pub category: Category,
    pub label: &'static str,
    pub range: &'static str,
    pub lower: Option<f64>,
    pub upper: Option<f64>,
}

/// The four category bands in ascending order.
pub fn bands() -> Vec<CategoryBand> {
    Category::ALL
        .iter()
        .map(|c| {
            let (lower, upper) = c.bounds();
            CategoryBand {
                category: *c,
                label: c.label(),
                range: c.range_label(),
                lower,
                upper,
            }
        })
        .collect()
}
