//! Calendar-day utilities
//!
//! All comparisons in the streak and statistics logic operate on
//! normalized `NaiveDate` values. Time-of-day never leaks into a day
//! comparison, so adjacency checks are exact.

use chrono::{Duration, Local, Locale, NaiveDate};

/// Current date at day granularity, per the host clock's local day.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The calendar day immediately preceding `day` (month/year rollover
/// handled by chrono).
pub fn day_before(day: NaiveDate) -> NaiveDate {
    day - Duration::days(1)
}

/// Signed whole-day difference `a - b`. The streak walk only cares
/// about 0 (same day) and 1 (consecutive).
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (a - b).num_days()
}

/// Long localized form, e.g. "5 Mart 2025" under `tr_TR`.
pub fn format_for_display(day: NaiveDate, locale: Locale) -> String {
    day.format_localized("%-d %B %Y", locale).to_string()
}

/// User-facing label: localized "today"/"yesterday" on exact day
/// equality, otherwise the long localized form.
pub fn relative_label(day: NaiveDate, today: NaiveDate, locale: Locale) -> String {
    let (today_word, yesterday_word) = relative_words(locale);
    if day == today {
        today_word.to_string()
    } else if day == day_before(today) {
        yesterday_word.to_string()
    } else {
        format_for_display(day, locale)
    }
}

fn relative_words(locale: Locale) -> (&'static str, &'static str) {
    match locale {
        Locale::tr_TR => ("Bugün", "Dün"),
        _ => ("Today", "Yesterday"),
    }
}
