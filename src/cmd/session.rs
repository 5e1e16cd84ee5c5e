use anyhow::Result;
use chrono::{Local, NaiveDate};
use serde_json::json;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use bmitrack::core::session::Session;
use bmitrack::core::trend;
use bmitrack::models::config::Config;
use bmitrack::models::measurement::UnitSystem;
use bmitrack::output;
use bmitrack::output::human;

const HELP: &str = "\
Commands:
  calc <weight> <height>    compute BMI in the current unit system
  units <metric|imperial>   switch unit system
  track <on|off>            save calculations to history
  history                   show saved calculations
  trend                     BMI over time (needs 2+ entries)
  clear                     drop all saved calculations
  help                      show this message
  quit | exit               end the session";

#[derive(Debug, PartialEq)]
enum SessionCommand {
    Calc { weight: f64, height: f64 },
    Units(UnitSystem),
    Track(bool),
    History,
    Trend,
    Clear,
    Help,
    Quit,
}

impl FromStr for SessionCommand {
    type Err = anyhow::Error;
    fn from_str(line: &str) -> Result<Self> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            ["calc", w, h] => {
                let weight: f64 = w
                    .parse()
                    .map_err(|_| anyhow::anyhow!("invalid weight: {}", w))?;
                let height: f64 = h
                    .parse()
                    .map_err(|_| anyhow::anyhow!("invalid height: {}", h))?;
                Ok(Self::Calc { weight, height })
            }
            ["calc", ..] => anyhow::bail!("usage: calc <weight> <height>"),
            ["units", u] => Ok(Self::Units(u.parse()?)),
            ["track", "on"] => Ok(Self::Track(true)),
            ["track", "off"] => Ok(Self::Track(false)),
            ["track", ..] => anyhow::bail!("usage: track <on|off>"),
            ["history"] => Ok(Self::History),
            ["trend"] => Ok(Self::Trend),
            ["clear"] => Ok(Self::Clear),
            ["help"] => Ok(Self::Help),
            ["quit"] | ["exit"] => Ok(Self::Quit),
            _ => anyhow::bail!("unknown command: {} (try 'help')", line),
        }
    }
}

impl SessionCommand {
    fn name(&self) -> &'static str {
        match self {
            Self::Calc { .. } => "calc",
            Self::Units(_) => "units",
            Self::Track(_) => "track",
            Self::History => "history",
            Self::Trend => "trend",
            Self::Clear => "clear",
            Self::Help => "help",
            Self::Quit => "quit",
        }
    }
}

pub fn run(
    units: Option<&str>,
    track: Option<bool>,
    date: Option<NaiveDate>,
    human_flag: bool,
) -> Result<()> {
    let config = Config::load()?;
    let mut session = Session::new(&config);
    if let Some(u) = units {
        session.set_units(u.parse()?);
    }
    if let Some(t) = track {
        session.set_tracking(t);
    }
    tracing::debug!(units = %session.units, track = session.track_history, "session started");

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_loop(&mut session, stdin.lock(), stdout.lock(), date, human_flag)?;

    tracing::debug!(entries = session.history().len(), "session ended");
    Ok(())
}

/// Read commands line by line until EOF or `quit`, writing one response per
/// command.
fn run_loop<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    mut out: W,
    date: Option<NaiveDate>,
    human_flag: bool,
) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let response = match line.parse::<SessionCommand>() {
            Ok(SessionCommand::Quit) => break,
            Ok(cmd) => {
                let name = cmd.name();
                execute(session, cmd, date, human_flag)
                    .unwrap_or_else(|e| render_error(name, &e, human_flag))
            }
            Err(e) => render_error("session", &e, human_flag),
        };
        writeln!(out, "{}", response)?;
        out.flush()?;
    }
    Ok(())
}

fn render_error(command: &str, err: &anyhow::Error, human_flag: bool) -> String {
    if human_flag {
        format!("Error: {}", err)
    } else {
        output::from_error(command, err).to_string()
    }
}

fn execute(
    session: &mut Session,
    cmd: SessionCommand,
    date: Option<NaiveDate>,
    human_flag: bool,
) -> Result<String> {
    let name = cmd.name();
    let (text, data) = match cmd {
        SessionCommand::Calc { weight, height } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let calc = session.calculate(weight, height, date)?;
            (
                human::format_calculation(&calc, &session.profile),
                output::calculation_json(&calc, &session.profile),
            )
        }
        SessionCommand::Units(u) => {
            session.set_units(u);
            (
                format!(
                    "Units: {} ({}, {})",
                    u,
                    u.weight_unit(),
                    u.height_unit()
                ),
                json!({ "units": u }),
            )
        }
        SessionCommand::Track(on) => {
            session.set_tracking(on);
            (
                format!("History tracking {}", if on { "on" } else { "off" }),
                json!({ "track": on }),
            )
        }
        SessionCommand::History => {
            let log = session.history();
            (
                human::format_history(log),
                json!({ "count": log.len(), "entries": log.entries() }),
            )
        }
        SessionCommand::Trend => match trend::compute(session.history()) {
            Some(t) => (human::format_trend(&t), json!({ "trend": t })),
            None => (
                "Not enough history for a trend (need at least 2 entries).".to_string(),
                json!({ "trend": null }),
            ),
        },
        SessionCommand::Clear => {
            let removed = session.clear_history();
            (
                format!("History cleared ({} removed).", removed),
                json!({ "removed": removed }),
            )
        }
        SessionCommand::Help => (HELP.to_string(), json!({ "help": HELP })),
        SessionCommand::Quit => ("Bye.".to_string(), json!({})),
    };

    if human_flag {
        Ok(text)
    } else {
        Ok(serde_json::to_string(&output::success(name, data))?)
    }
}
