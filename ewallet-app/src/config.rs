//! Configuration loading from environment.

use std::env;
use std::str::FromStr;

use ewallet_repo::DEFAULT_HASH_COST;

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => anyhow::bail!("Unknown LOG_FORMAT `{}`, expected `text` or `json`", other),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub bcrypt_cost: u32,
    pub log_format: LogFormat,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

        let bcrypt_cost = match lookup("BCRYPT_COST") {
            Some(raw) => {
                let cost: u32 = raw
                    .trim()
                    .parse()
                    .map_err(|e| anyhow::anyhow!("Invalid BCRYPT_COST `{}`: {}", raw, e))?;
                if !(4..=31).contains(&cost) {
                    anyhow::bail!("BCRYPT_COST must be between 4 and 31, got {}", cost);
                }
                cost
            }
            None => DEFAULT_HASH_COST,
        };

        let log_format = lookup("LOG_FORMAT")
            .map(|raw| raw.parse())
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            database_url,
            bcrypt_cost,
            log_format,
        })
    }
}
