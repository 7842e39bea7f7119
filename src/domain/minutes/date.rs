//! Date humanization for the fixed Portuguese locale.

use chrono::{Datelike, NaiveDate};

/// Month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Month name for a 1-based month number.
pub fn month_name(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTH_NAMES.get(index).copied()
}

/// Formats `"<day> de <month> de <year>[, às <time>]"`.
///
/// The day carries no leading zero. A blank time is left out entirely.
pub fn humanize_date(date: NaiveDate, time: Option<&str>) -> String {
    // chrono guarantees month() is within 1..=12
    let month = month_name(date.month()).unwrap_or_default();
    let mut phrase = format!("{} de {} de {}", date.day(), month, date.year());

    if let Some(time) = time.map(str::trim).filter(|t| !t.is_empty()) {
        phrase.push_str(", às ");
        phrase.push_str(time);
    }

    phrase
}

/// ISO-8601 calendar date, used in suggested file names.
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
