//! moodlog - Personal mood journal for the terminal
//!
//! Records dated entries with free text and selected moods, tracks a
//! running daily-entry streak, and aggregates mood statistics over
//! rolling week/month windows. State is persisted locally as full-state
//! snapshots under a `.moodlog/` directory.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MoodlogError;
