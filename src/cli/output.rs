//! Output formatting utilities

use crate::domain::{dates, JournalEntry, MoodStatistic, StreakState};
use chrono::{Locale, NaiveDate};

/// Format the entry list for display, newest first.
pub fn format_entry_list(entries: &[JournalEntry], today: NaiveDate, locale: Locale) -> String {
    if entries.is_empty() {
        return "No entries yet. How about starting your journal today!".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        let label = dates::relative_label(entry.date, today, locale);
        let icons: Vec<&str> = entry.moods.iter().map(|m| m.icon.as_str()).collect();

        output.push_str(&format!(
            "{} {}  {}  [{}]\n",
            label,
            entry.time.format("%H:%M"),
            icons.join(" "),
            entry.id
        ));
        if !entry.content.is_empty() {
            output.push_str(&format!("    {}\n", entry.content));
        }
    }
    output
}

/// Format the streak counter line.
pub fn format_streak(state: StreakState) -> String {
    match state.streak {
        1 => "Daily streak: 1 day".to_string(),
        n => format!("Daily streak: {} days", n),
    }
}

/// Format mood statistics as an aligned table, sorted by count.
pub fn format_statistics(statistics: &[MoodStatistic]) -> String {
    if statistics.is_empty() {
        return "No mood data for this period".to_string();
    }

    let width = statistics.iter().map(|s| s.name.chars().count()).max().unwrap_or(0);

    let mut output = String::new();
    for stat in statistics {
        output.push_str(&format!(
            "{} {:<w$}  {:>3}  {:>3}%\n",
            stat.icon,
            stat.name,
            stat.count,
            stat.percentage,
            w = width
        ));
    }
    output
}

/// Format the mood catalog for display.
pub fn format_mood_catalog(moods: &[crate::domain::Mood]) -> String {
    let mut output = String::new();
    for mood in moods {
        output.push_str(&format!("{:>2}  {} {}\n", mood.id, mood.icon, mood.name));
    }
    output
}
