//! Config management use case

use crate::error::{MoodlogError, Result};
use crate::infrastructure::config::parse_locale;
use crate::infrastructure::{Config, FileStore};

/// Service for managing journal configuration
pub struct ConfigService {
    store: FileStore,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(store: FileStore) -> Self {
        ConfigService { store }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = Config::load_from_dir(&self.store.root)?;

        match key {
            "locale" => Ok(config.locale.clone()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(MoodlogError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: locale, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = Config::load_from_dir(&self.store.root)?;

        match key {
            "locale" => {
                parse_locale(value)?;
                config.locale = value.to_string();
            }
            "created" => {
                return Err(MoodlogError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(MoodlogError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: locale",
                    key
                )));
            }
        }

        config.save_to_dir(&self.store.root)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        Config::load_from_dir(&self.store.root)
    }
}
