use anyhow::Result;
use serde_json::json;

use bmitrack::core::categories;
use bmitrack::output;
use bmitrack::output::human;

pub fn run(human_flag: bool) -> Result<()> {
    let bands = categories::bands();
    if human_flag {
        println!("{}", human::format_categories(&bands));
    } else {
        let out = output::success("categories", json!({ "bands": bands }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
