//! Configuration management

use crate::error::{MoodlogError, Result};
use chrono::{DateTime, Locale, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default display locale for dates; configurable per journal.
pub const DEFAULT_LOCALE: &str = "tr_TR";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub locale: String,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            locale: DEFAULT_LOCALE.to_string(),
            created: Utc::now(),
        }
    }

    /// Create a config with a validated locale name
    pub fn with_locale(locale: &str) -> Result<Self> {
        parse_locale(locale)?;
        Ok(Config {
            locale: locale.to_string(),
            created: Utc::now(),
        })
    }

    /// Load config from .moodlog/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".moodlog").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MoodlogError::NotJournalDirectory(path.to_path_buf())
            } else {
                MoodlogError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| MoodlogError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .moodlog/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let moodlog_dir = path.join(".moodlog");
        let config_path = moodlog_dir.join("config.toml");

        if !moodlog_dir.exists() {
            fs::create_dir(&moodlog_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| MoodlogError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Resolve the configured locale for date display.
    /// An unrecognized stored name falls back to the default rather than
    /// failing a read-only command.
    pub fn display_locale(&self) -> Locale {
        parse_locale(&self.locale).unwrap_or(Locale::tr_TR)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

/// Validate a chrono locale name (e.g. "tr_TR", "en_US")
pub fn parse_locale(name: &str) -> Result<Locale> {
    Locale::try_from(name)
        .map_err(|_| MoodlogError::Config(format!("Invalid locale: '{}'", name)))
}
