use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "bmitrack", version, about = "Body Mass Index calculator with session history")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as human-readable text instead of JSON
    #[arg(long = "human", short = 'H', global = true)]
    pub human: bool,

    /// Override the date stamped on saved entries (YYYY-MM-DD)
    #[arg(long, global = true)]
    pub date: Option<NaiveDate>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate BMI once
    #[command(allow_negative_numbers = true)]
    Calc {
        /// Weight (kg or lb)
        weight: f64,

        /// Height (cm or in)
        height: f64,

        /// Unit system: metric or imperial (default: from config)
        #[arg(long)]
        units: Option<String>,
    },

    /// Interactive session reading commands from stdin
    Session {
        /// Unit system: metric or imperial (default: from config)
        #[arg(long)]
        units: Option<String>,

        /// Save every calculation to the session history
        #[arg(long, conflicts_with = "no_track")]
        track: bool,

        /// Do not save calculations, even if enabled in config
        #[arg(long)]
        no_track: bool,
    },

    /// List BMI category bands
    Categories,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion script
    Completions {
        /// Target shell
        shell: Shell,
    },
}

impl Commands {
    /// Name used in the JSON envelope.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Calc { .. } => "calc",
            Self::Session { .. } => "session",
            Self::Categories => "categories",
            Self::Config { .. } => "config",
            Self::Completions { .. } => "completions",
        }
    }
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set a config value
    Set {
        /// Config key (e.g. units.system, history.track, profile.age)
        key: String,
        /// Config value
        value: String,
    },
}
