use std::env;
use std::str::FromStr;

use chrono::{Local, NaiveDate};
use producthub_core::{parse_date, IdGenerator, NanoIdGenerator, SequentialIdGenerator};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid ID strategy: {0} (expected 'sequential' or 'nanoid')")]
    InvalidIdStrategy(String),
    #[error("Invalid boolean for {name}: {value}")]
    InvalidBool { name: &'static str, value: String },
    #[error("Invalid date for {name}: {value} (expected YYYY-MM-DD)")]
    InvalidDate { name: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdStrategy {
    Sequential, // "1", "2", ... per collection
    NanoId,     // random 21-character ids
}

impl FromStr for IdStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sequential" => Ok(IdStrategy::Sequential),
            "nanoid" => Ok(IdStrategy::NanoId),
            _ => Err(ConfigError::InvalidIdStrategy(s.to_string())),
        }
    }
}

impl IdStrategy {
    /// A new generator; each collection gets its own
    pub fn generator(self) -> Box<dyn IdGenerator> {
        match self {
            IdStrategy::Sequential => Box::new(SequentialIdGenerator::new()),
            IdStrategy::NanoId => Box::new(NanoIdGenerator),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Default log filter when RUST_LOG is not set
    pub log_level: String,
    pub id_strategy: IdStrategy,
    /// Start the session with the demo portfolio
    pub seed: bool,
    /// Fixed "today" for timeline and countdown calculations
    pub today: Option<NaiveDate>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "warn".to_string(),
            id_strategy: IdStrategy::NanoId,
            seed: true,
            today: None,
        }
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            name,
            value: value.to_string(),
        }),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads settings through `lookup`, which maps a variable name to its value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let log_level = lookup("PRODUCTHUB_LOG_LEVEL")
            .filter(|level| !level.trim().is_empty())
            .unwrap_or(defaults.log_level);

        let id_strategy = match lookup("PRODUCTHUB_ID_STRATEGY") {
            Some(value) => value.parse::<IdStrategy>()?,
            None => defaults.id_strategy,
        };

        let seed = match lookup("PRODUCTHUB_SEED") {
            Some(value) => parse_bool("PRODUCTHUB_SEED", &value)?,
            None => defaults.seed,
        };

        let today = match lookup("PRODUCTHUB_TODAY") {
            Some(value) => Some(parse_date(&value).ok_or_else(|| ConfigError::InvalidDate {
                name: "PRODUCTHUB_TODAY",
                value: value.clone(),
            })?),
            None => None,
        };

        Ok(Config {
            log_level,
            id_strategy,
            seed,
            today,
        })
    }

    /// The configured date, or the local calendar date
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}
