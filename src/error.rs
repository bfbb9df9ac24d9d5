//! Error types for moodlog

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the moodlog application
#[derive(Debug, Error)]
pub enum MoodlogError {
    #[error("Not a moodlog journal: {0}")]
    NotJournalDirectory(PathBuf),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("Unknown mood id: {0}")]
    UnknownMood(u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MoodlogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MoodlogError::NotJournalDirectory(_) => 2,
            MoodlogError::InvalidPeriod(_) => 3,
            MoodlogError::UnknownMood(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MoodlogError::NotJournalDirectory(path) => {
                format!(
                    "Not a moodlog journal: {}\n\n\
                    Suggestions:\n\
                    • Run 'moodlog init' in this directory to create a new journal\n\
                    • Navigate to an existing moodlog directory\n\
                    • Set MOODLOG_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            MoodlogError::InvalidPeriod(period) => {
                format!(
                    "Invalid period: '{}'\n\n\
                    Valid periods: week, month\n\
                    Example: moodlog stats --period week",
                    period
                )
            }
            MoodlogError::UnknownMood(id) => {
                format!(
                    "Unknown mood id: {}\n\n\
                    Suggestions:\n\
                    • Run 'moodlog moods' to see the catalog of selectable moods\n\
                    • Pass mood ids as a comma-separated list (e.g., --moods 1,9,13)",
                    id
                )
            }
            MoodlogError::Config(msg) => {
                if msg.contains("locale") {
                    format!(
                        "{}\n\n\
                        Locale names follow chrono's naming (e.g., tr_TR, en_US, de_DE)\n\
                        Example: moodlog config locale en_US",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MoodlogError
pub type Result<T> = std::result::Result<T, MoodlogError>;
