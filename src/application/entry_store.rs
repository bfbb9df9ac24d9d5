//! Entry store use case - owns the entry collection and derived streak

use crate::domain::entry::dedup_moods;
use crate::domain::{JournalEntry, Mood, MoodStatistic, Period, StreakState};
use crate::error::Result;
use crate::infrastructure::storage::{ENTRIES_KEY, LAST_ENTRY_DATE_KEY, STREAK_KEY};
use crate::infrastructure::KeyValueStore;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize)]
struct Snapshot<'a> {
    version: u32,
    entries: &'a [JournalEntry],
}

/// Stored snapshot shapes. The bare-array form predates the versioned
/// envelope and is still accepted on load.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredSnapshot {
    Versioned {
        #[allow(dead_code)]
        version: u32,
        entries: Vec<JournalEntry>,
    },
    Bare(Vec<JournalEntry>),
}

impl StoredSnapshot {
    fn into_entries(self) -> Vec<JournalEntry> {
        match self {
            StoredSnapshot::Versioned { entries, .. } => entries,
            StoredSnapshot::Bare(entries) => entries,
        }
    }
}

/// Outcome of an update operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    /// No entry with the given id; the collection is unchanged
    NotFound,
    /// Replacement had no text and no moods; the entry is kept as-is
    Rejected,
}

/// Owns the in-memory entry collection, newest-first, and the derived
/// streak state. The only component permitted to mutate the collection.
///
/// Every mutation recomputes the streak from the full collection and
/// saves a complete snapshot; save failures are reported on stderr and
/// swallowed, so the in-memory state stays authoritative for the session.
pub struct EntryStore<S: KeyValueStore> {
    entries: Vec<JournalEntry>,
    streak: StreakState,
    store: S,
}

impl<S: KeyValueStore> EntryStore<S> {
    /// Load the collection from the persistence collaborator.
    /// An absent or unreadable blob falls back to an empty collection
    /// and zero streak; the failure is logged, not surfaced.
    pub fn load(store: S) -> Self {
        let entries = match Self::read_entries(&store) {
            Ok(entries) => entries,
            Err(e) => {
                eprintln!("warning: could not read journal entries, starting empty: {}", e);
                Vec::new()
            }
        };

        let streak = StreakState::compute(&entries);
        EntryStore {
            entries,
            streak,
            store,
        }
    }

    fn read_entries(store: &S) -> Result<Vec<JournalEntry>> {
        match store.load(ENTRIES_KEY)? {
            Some(blob) => {
                let snapshot: StoredSnapshot = serde_json::from_str(&blob)?;
                Ok(snapshot.into_entries())
            }
            None => Ok(Vec::new()),
        }
    }

    /// Entries in newest-first insertion order
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn streak(&self) -> StreakState {
        self.streak
    }

    pub fn find(&self, id: &str) -> Option<&JournalEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Create a new entry stamped with the current date/time and prepend
    /// it to the collection. A blank entry (no text, no moods) is
    /// rejected as a no-op and `None` is returned.
    pub fn create(&mut self, content: String, moods: Vec<Mood>) -> Option<&JournalEntry> {
        let entry = JournalEntry::new(content, moods);
        if entry.is_blank() {
            return None;
        }

        self.entries.insert(0, entry);
        self.streak = StreakState::compute(&self.entries);
        self.persist();
        Some(&self.entries[0])
    }

    /// Replace the content and moods of the entry with the given id,
    /// preserving its original date, time and position. The same
    /// blank-entry policy applies as on create.
    pub fn update(&mut self, id: &str, content: String, moods: Vec<Mood>) -> UpdateOutcome {
        let moods = dedup_moods(moods);
        if content.trim().is_empty() && moods.is_empty() {
            return UpdateOutcome::Rejected;
        }

        let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) else {
            return UpdateOutcome::NotFound;
        };

        entry.content = content;
        entry.moods = moods;
        self.streak = StreakState::compute(&self.entries);
        self.persist();
        UpdateOutcome::Updated
    }

    /// Remove the entry with the given id. Removing an absent id is a
    /// benign no-op; returns whether an entry was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);

        if self.entries.len() == before {
            return false;
        }

        self.streak = StreakState::compute(&self.entries);
        self.persist();
        true
    }

    /// Mood statistics over the period window ending at `today`.
    /// Pure query; the collection and streak are untouched.
    pub fn statistics(&self, period: Period, today: NaiveDate) -> Vec<MoodStatistic> {
        crate::domain::statistics::mood_statistics(&self.entries, period, today)
    }

    /// Save a full snapshot of the collection and derived streak fields.
    /// Fire-and-forget: failures are logged and the mutation stands.
    fn persist(&self) {
        if let Err(e) = self.try_persist() {
            eprintln!("warning: failed to save journal: {}", e);
        }
    }

    fn try_persist(&self) -> Result<()> {
        let snapshot = Snapshot {
            version: SNAPSHOT_VERSION,
            entries: &self.entries,
        };
        self.store.save(ENTRIES_KEY, &serde_json::to_string(&snapshot)?)?;
        self.store.save(STREAK_KEY, &self.streak.streak.to_string())?;

        let last_date = self
            .streak
            .last_entry_date
            .map(|d| d.to_string())
            .unwrap_or_default();
        self.store.save(LAST_ENTRY_DATE_KEY, &last_date)?;

        Ok(())
    }
}
