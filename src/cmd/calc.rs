use anyhow::Result;
use chrono::{Local, NaiveDate};

use bmitrack::core::session::Session;
use bmitrack::models::config::Config;
use bmitrack::output;
use bmitrack::output::human;

pub fn run(
    weight: f64,
    height: f64,
    units: Option<&str>,
    date: Option<NaiveDate>,
    human_flag: bool,
) -> Result<()> {
    let config = Config::load()?;
    let mut session = Session::new(&config);
    if let Some(u) = units {
        session.set_units(u.parse()?);
    }
    // A one-shot run has no session to keep history in.
    session.set_tracking(false);

    let date = date.unwrap_or_else(|| Local::now().date_naive());
    let calc = session.calculate(weight, height, date)?;

    if human_flag {
        println!("{}", human::format_calculation(&calc, &session.profile));
    } else {
        let out = output::success("calc", output::calculation_json(&calc, &session.profile));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
