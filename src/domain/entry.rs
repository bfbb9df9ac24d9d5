//! Journal entry model and serialized form

use crate::domain::mood::Mood;
use chrono::{Local, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single dated journal record with free text and selected moods.
///
/// Moods are embedded by value, not by catalog reference, so a later
/// catalog change does not retroactively alter historical entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    pub date: NaiveDate,
    #[serde(with = "time_hm")]
    pub time: NaiveTime,
    pub content: String,
    pub moods: Vec<Mood>,
}

impl JournalEntry {
    /// Create a new entry stamped with the current local date and time.
    /// Duplicate moods (by id) are dropped, keeping first occurrence.
    pub fn new(content: String, moods: Vec<Mood>) -> Self {
        let now = Local::now();
        JournalEntry {
            id: Uuid::new_v4().to_string(),
            date: now.date_naive(),
            time: now.time(),
            content,
            moods: dedup_moods(moods),
        }
    }

    /// An entry with no text and no moods is not worth saving.
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty() && self.moods.is_empty()
    }
}

/// Drop duplicate moods by id, keeping the first occurrence.
pub fn dedup_moods(moods: Vec<Mood>) -> Vec<Mood> {
    let mut seen: Vec<u32> = Vec::new();
    moods
        .into_iter()
        .filter(|mood| {
            if seen.contains(&mood.id) {
                false
            } else {
                seen.push(mood.id);
                true
            }
        })
        .collect()
}

/// Serialize clock times as "HH:MM" (seconds are not recorded).
mod time_hm {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(&s, "%H:%M:%S"))
            .map_err(serde::de::Error::custom)
    }
}
