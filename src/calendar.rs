//! Calendar arithmetic for the journal layout.
//!
//! Weeks run Monday to Sunday and are stored in folders named after both ends
//! (`2025_0922-0928`). Nothing here reads the clock: callers pass the reference
//! date in, which keeps every computation reproducible in tests.

use chrono::{Datelike, Duration, NaiveDate};

#[must_use]
/// Monday and Sunday of the week containing `date`.
pub fn week_range(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let monday = date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
    (monday, monday + Duration::days(6))
}

#[must_use]
/// Folder name `YYYY_MMDD-MMDD`, with the year taken from Monday.
pub fn week_folder_name(monday: NaiveDate, sunday: NaiveDate) -> String {
    format!(
        "{}_{}-{}",
        monday.year(),
        monday.format("%m%d"),
        sunday.format("%m%d")
    )
}

#[must_use]
/// Folder name of the week containing `date`.
pub fn week_folder_for(date: NaiveDate) -> String {
    let (monday, sunday) = week_range(date);
    week_folder_name(monday, sunday)
}

#[must_use]
/// Recovers Monday and Sunday from a `YYYY_MMDD-MMDD` folder name.
pub fn parse_week_folder(name: &str) -> Option<(NaiveDate, NaiveDate)> {
    let (year, days) = name.split_once('_')?;
    let (start, _end) = days.split_once('-')?;
    if year.len() != 4 || start.len() != 4 {
        return None;
    }
    let year: i32 = year.parse().ok()?;
    let month: u32 = start[..2].parse().ok()?;
    let day: u32 = start[2..].parse().ok()?;
    let monday = NaiveDate::from_ymd_opt(year, month, day)?;
    Some((monday, monday + Duration::days(6)))
}

#[must_use]
/// Daily file name `YYYY_MM_DD.md`.
pub fn daily_filename(date: NaiveDate) -> String {
    date.format("%Y_%m_%d.md").to_string()
}

#[must_use]
/// Date encoded in a `YYYY_MM_DD.md` file name (the `.md` suffix is optional).
pub fn parse_filename_date(filename: &str) -> Option<NaiveDate> {
    let stem = filename.strip_suffix(".md").unwrap_or(filename);
    let mut parts = stem.split('_');
    let (year, month, day) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

#[must_use]
/// `MMDD`, used in the daily file title.
pub fn header_date(date: NaiveDate) -> String {
    date.format("%m%d").to_string()
}

#[must_use]
/// `September 26`.
pub fn display_date(date: NaiveDate) -> String {
    date.format("%B %d").to_string()
}

#[must_use]
/// `2025-09-26`.
pub fn long_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[must_use]
/// The date `n` days before `reference`, `None` when out of range.
pub fn days_ago(n: i64, reference: NaiveDate) -> Option<NaiveDate> {
    reference.checked_sub_signed(Duration::try_days(n)?)
}

#[must_use]
/// The date `n` weeks before `reference`, `None` when out of range.
pub fn weeks_ago(n: i64, reference: NaiveDate) -> Option<NaiveDate> {
    days_ago(n.checked_mul(7)?, reference)
}

#[must_use]
/// Inclusive on both ends.
pub fn is_in_range(date: NaiveDate, start: NaiveDate, end: NaiveDate) -> bool {
    start <= date && date <= end
}

#[must_use]
/// Signed day difference, negative when `end` precedes `start`.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

#[must_use]
/// Calendar months from `start` to `end`, ignoring the day of month.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> i32 {
    let month_index = |d: NaiveDate| d.year() * 12 + i32::try_from(d.month0()).unwrap_or_default();
    month_index(end) - month_index(start)
}

#[cfg(test)]
#[path = "tests/calendar.rs"]
mod tests;
