//! Mood statistics over rolling time windows

use crate::domain::entry::JournalEntry;
use crate::domain::mood;
use chrono::{Duration, Months, NaiveDate};
use std::str::FromStr;

/// Rolling window used for statistics filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    /// Last 7 days
    #[default]
    Week,
    /// Last calendar month
    Month,
}

impl Period {
    /// Window start for a window ending at `today` (inclusive both ends).
    /// Month subtraction follows calendar semantics: subtracting a month
    /// from day 31 lands on the last valid day of the shorter month.
    pub fn window_start(&self, today: NaiveDate) -> NaiveDate {
        match self {
            Period::Week => today - Duration::days(7),
            Period::Month => today.checked_sub_months(Months::new(1)).unwrap_or(today),
        }
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "week" => Ok(Period::Week),
            "month" => Ok(Period::Month),
            _ => Err(format!("Invalid period: '{}'. Valid periods are: week, month", s)),
        }
    }
}

/// Per-query aggregate for one mood; never persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodStatistic {
    pub name: String,
    pub icon: String,
    pub count: u32,
    pub percentage: u32,
}

/// Tally mood selections across entries within the period window ending
/// at `today`, sorted descending by count (stable; ties keep first-counted
/// order). Mood ids missing from the catalog are skipped. Pure query;
/// never mutates the collection.
pub fn mood_statistics(
    entries: &[JournalEntry],
    period: Period,
    today: NaiveDate,
) -> Vec<MoodStatistic> {
    let start = period.window_start(today);

    // Flat tally keyed by mood id, in first-encounter order
    let mut tally: Vec<(u32, u32)> = Vec::new();
    for entry in entries {
        if entry.date < start || entry.date > today {
            continue;
        }
        for selected in &entry.moods {
            match tally.iter_mut().find(|(id, _)| *id == selected.id) {
                Some((_, count)) => *count += 1,
                None => tally.push((selected.id, 1)),
            }
        }
    }

    let total: u32 = tally.iter().map(|(_, count)| count).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut statistics: Vec<MoodStatistic> = tally
        .iter()
        .filter_map(|(id, count)| {
            mood::find_by_id(*id).map(|m| MoodStatistic {
                name: m.name,
                icon: m.icon,
                count: *count,
                percentage: ((*count as f64 / total as f64) * 100.0).round() as u32,
            })
        })
        .collect();

    statistics.sort_by(|a, b| b.count.cmp(&a.count));
    statistics
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn entry_on(date: NaiveDate, mood_ids: &[u32]) -> JournalEntry {
        JournalEntry {
            id: format!("id-{}-{:?}", date, mood_ids),
            date,
            time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            content: "note".to_string(),
            moods: mood_ids.iter().filter_map(|id| mood::find_by_id(*id)).collect(),
        }
    }

    #[test]
    fn test_period_from_str() {
        assert_eq!("week".parse::<Period>().unwrap(), Period::Week);
        assert_eq!("MONTH".parse::<Period>().unwrap(), Period::Month);
        assert!("year".parse::<Period>().is_err());
    }

    #[test]
    fn test_week_window_start() {
        assert_eq!(Period::Week.window_start(d(2025, 3, 10)), d(2025, 3, 3));
    }

    #[test]
    fn test_month_window_start_clamps() {
        assert_eq!(Period::Month.window_start(d(2025, 3, 31)), d(2025, 2, 28));
        assert_eq!(Period::Month.window_start(d(2025, 3, 10)), d(2025, 2, 10));
    }

    #[test]
    fn test_empty_window_returns_empty() {
        let today = d(2025, 3, 10);
        let entries = vec![entry_on(d(2025, 1, 1), &[1])];
        assert!(mood_statistics(&entries, Period::Week, today).is_empty());
    }

    #[test]
    fn test_no_entries_returns_empty() {
        assert!(mood_statistics(&[], Period::Month, d(2025, 3, 10)).is_empty());
    }

    #[test]
    fn test_percentages_and_sort() {
        let today = d(2025, 3, 10);
        let entries = vec![
            entry_on(d(2025, 3, 9), &[1]),
            entry_on(d(2025, 3, 8), &[1, 2]),
            entry_on(d(2025, 3, 10), &[1]),
        ];

        let stats = mood_statistics(&entries, Period::Week, today);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].name, "Happy");
        assert_eq!(stats[0].count, 3);
        assert_eq!(stats[0].percentage, 75);
        assert_eq!(stats[1].name, "Loved");
        assert_eq!(stats[1].count, 1);
        assert_eq!(stats[1].percentage, 25);
    }

    #[test]
    fn test_percentages_sum_near_100() {
        let today = d(2025, 3, 10);
        let entries = vec![
            entry_on(d(2025, 3, 9), &[1, 2, 3]),
            entry_on(d(2025, 3, 8), &[1, 2]),
            entry_on(d(2025, 3, 7), &[1]),
        ];

        let stats = mood_statistics(&entries, Period::Week, today);
        let sum: u32 = stats.iter().map(|s| s.percentage).sum();
        assert!((99..=101).contains(&sum), "sum was {}", sum);
    }

    #[test]
    fn test_window_bounds_inclusive() {
        let today = d(2025, 3, 10);
        let entries = vec![
            entry_on(d(2025, 3, 3), &[1]),  // exactly at start
            entry_on(d(2025, 3, 10), &[2]), // exactly at end
            entry_on(d(2025, 3, 2), &[3]),  // one before start
        ];

        let stats = mood_statistics(&entries, Period::Week, today);
        let names: Vec<&str> = stats.iter().map(|s| s.name.as_str()).collect();
        assert!(names.contains(&"Happy"));
        assert!(names.contains(&"Loved"));
        assert!(!names.contains(&"Stressed"));
    }

    #[test]
    fn test_tie_keeps_first_counted_order() {
        let today = d(2025, 3, 10);
        let entries = vec![entry_on(d(2025, 3, 9), &[5, 2])];

        let stats = mood_statistics(&entries, Period::Week, today);
        assert_eq!(stats[0].name, "Sleepless");
        assert_eq!(stats[1].name, "Loved");
    }

    #[test]
    fn test_unknown_mood_id_skipped() {
        let today = d(2025, 3, 10);
        let mut entry = entry_on(d(2025, 3, 9), &[1]);
        entry.moods.push(crate::domain::mood::Mood::new(99, "Retired", "🗑️"));

        let stats = mood_statistics(&[entry], Period::Week, today);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].name, "Happy");
        // Total still counts the unknown selection
        assert_eq!(stats[0].percentage, 50);
    }

    #[test]
    fn test_future_dated_entry_excluded() {
        let today = d(2025, 3, 10);
        let entries = vec![entry_on(d(2025, 3, 11), &[1])];
        assert!(mood_statistics(&entries, Period::Week, today).is_empty());
    }
}
