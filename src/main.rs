mod cli;
mod cmd;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use std::process;

use bmitrack::output;

fn main() {
    bmitrack::logging::init();
    let cli = Cli::parse();
    let command = cli.command.name();

    let result = match cli.command {
        Commands::Calc {
            weight,
            height,
            units,
        } => cmd::calc::run(weight, height, units.as_deref(), cli.date, cli.human),
        Commands::Session {
            units,
            track,
            no_track,
        } => {
            let tracking = match (track, no_track) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            cmd::session::run(units.as_deref(), tracking, cli.date, cli.human)
        }
        Commands::Categories => cmd::categories::run(cli.human),
        Commands::Config { action } => match action {
            ConfigAction::Show => cmd::config::run_show(cli.human),
            ConfigAction::Set { key, value } => cmd::config::run_set(&key, &value),
        },
        Commands::Completions { shell } => cmd::completions::run(shell),
    };

    if let Err(e) = result {
        tracing::debug!(error = %e, command, "command failed");
        let err = output::from_error(command, &e);
        eprintln!("{}", err);
        process::exit(1);
    }
}
