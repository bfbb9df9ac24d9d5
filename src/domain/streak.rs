//! Streak calculation - consecutive journaling days

use crate::domain::dates;
use crate::domain::entry::JournalEntry;
use chrono::NaiveDate;

/// Derived streak value, recomputed from the full collection after every
/// mutation. Recomputing is the single source of truth: edits and deletes
/// can change the distinct-day set, so no incremental shortcut is safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreakState {
    /// Count of consecutive calendar days with at least one entry,
    /// ending at the most recent entry date.
    pub streak: u32,
    /// Calendar day of the most recent entry, if any.
    pub last_entry_date: Option<NaiveDate>,
}

impl StreakState {
    /// Compute the streak as a pure function of the collection.
    ///
    /// The walk goes backward from the most recent distinct day and stops
    /// at the first non-adjacent pair; the streak depends only on the
    /// shape of the date set, never on the current date. Future-dated
    /// entries are just another date value.
    pub fn compute(entries: &[JournalEntry]) -> Self {
        if entries.is_empty() {
            return StreakState::default();
        }

        let mut days: Vec<NaiveDate> = entries.iter().map(|e| e.date).collect();
        days.sort();
        days.dedup();

        let mut streak = 1;
        for pair in days.windows(2).rev() {
            if dates::days_between(pair[1], pair[0]) == 1 {
                streak += 1;
            } else {
                break;
            }
        }

        StreakState {
            streak,
            last_entry_date: days.last().copied(),
        }
    }
}
