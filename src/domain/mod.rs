//! Domain layer - Business logic and domain models

pub mod dates;
pub mod entry;
pub mod mood;
pub mod statistics;
pub mod streak;

pub use entry::JournalEntry;
pub use mood::Mood;
pub use statistics::{MoodStatistic, Period};
pub use streak::StreakState;
