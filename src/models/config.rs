use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

use crate::models::measurement::UnitSystem;

/// Youngest and oldest age accepted for the profile.
pub const AGE_RANGE: (u8, u8) = (10, 100);

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub units: Units,
    #[serde(default)]
    pub history: HistorySettings,
}

/// Profile fields are informational only and never feed into the BMI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub age: Option<u8>,
    pub gender: Option<Gender>,
    pub activity: Option<ActivityLevel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl FromStr for Gender {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            _ => anyhow::bail!("invalid gender: {} (expected male/female/other)", s),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Male => write!(f, "Male"),
            Self::Female => write!(f, "Female"),
            Self::Other => write!(f, "Other"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtremelyActive,
}

impl FromStr for ActivityLevel {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        let normalized = s.to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "lightly_active" | "light" => Ok(Self::LightlyActive),
            "moderately_active" | "moderate" => Ok(Self::ModeratelyActive),
            "very_active" | "very" => Ok(Self::VeryActive),
            "extremely_active" | "extreme" => Ok(Self::ExtremelyActive),
            _ => anyhow::bail!(
                "invalid activity level: {} (expected sedentary/lightly_active/\
                 moderately_active/very_active/extremely_active)",
                s
            ),
        }
    }
}

impl std::fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Sedentary => "Sedentary",
            Self::LightlyActive => "Lightly Active",
            Self::ModeratelyActive => "Moderately Active",
            Self::VeryActive => "Very Active",
            Self::ExtremelyActive => "Extremely Active",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Units {
    #[serde(default)]
    pub system: UnitSystem,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct HistorySettings {
    #[serde(default)]
    pub track: bool,
}

/// Parse and range-check an age value.
pub fn parse_age(value: &str) -> anyhow::Result<u8> {
    let age: u8 = value
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid age: {}", value))?;
    let (min, max) = AGE_RANGE;
    if !(min..=max).contains(&age) {
        anyhow::bail!("age must be between {} and {}", min, max);
    }
    Ok(age)
}

impl Config {
    /// Load config from the standard path, or return defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::path();
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to the standard path.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;
        tracing::debug!(path = %path.display(), "config saved");
        Ok(())
    }

    /// Apply a `key = value` setting. Keys mirror the TOML layout.
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "units.system" => self.units.system = value.parse()?,
            "history.track" => {
                self.history.track = match value {
                    "true" | "on" | "yes" => true,
                    "false" | "off" | "no" => false,
                    _ => anyhow::bail!("history.track must be 'true' or 'false'"),
                }
            }
            "profile.age" => self.profile.age = Some(parse_age(value)?),
            "profile.gender" => self.profile.gender = Some(value.parse()?),
            "profile.activity" => self.profile.activity = Some(value.parse()?),
            _ => anyhow::bail!("unknown config key: {}", key),
        }
        Ok(())
    }

    pub fn data_dir() -> PathBuf {
        if let Ok(home) = std::env::var("BMITRACK_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".bmitrack")
    }

    pub fn path() -> PathBuf {
        Self::data_dir().join("config.toml")
    }
}
