use assert_cmd::Command;
use chrono::{NaiveDate, NaiveTime};
use moodlog::domain::{mood, JournalEntry};
use std::fs;
use std::path::Path;

pub fn moodlog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("moodlog").unwrap();
    cmd.env_remove("MOODLOG_ROOT");
    cmd
}

/// Write a journal_entries snapshot directly, bypassing the CLI, so
/// tests can control entry dates.
#[allow(dead_code)]
pub fn seed_entries(root: &Path, specs: &[(NaiveDate, &[u32])]) {
    let entries: Vec<JournalEntry> = specs
        .iter()
        .enumerate()
        .map(|(i, (date, mood_ids))| JournalEntry {
            id: format!("seed-{}", i),
            date: *date,
            time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            content: format!("entry {}", i),
            moods: mood_ids.iter().filter_map(|id| mood::find_by_id(*id)).collect(),
        })
        .collect();

    let blob = format!(
        "{{\"version\":1,\"entries\":{}}}",
        serde_json::to_string(&entries).unwrap()
    );
    fs::write(root.join(".moodlog/journal_entries"), blob).unwrap();
}
