use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_week_range_of_friday() {
    assert_eq!(
        week_range(date(2025, 9, 26)),
        (date(2025, 9, 22), date(2025, 9, 28))
    );
}

#[test]
fn test_week_range_edges() {
    assert_eq!(week_range(date(2025, 9, 22)).0, date(2025, 9, 22));
    assert_eq!(week_range(date(2025, 9, 28)).0, date(2025, 9, 22));
}

#[test]
fn test_week_folder_name() {
    assert_eq!(week_folder_for(date(2025, 9, 26)), "2025_0922-0928");
}

#[test]
fn test_week_folder_spanning_new_year_uses_monday_year() {
    assert_eq!(week_folder_for(date(2026, 1, 1)), "2025_1229-0104");
}

#[test]
fn test_parse_week_folder() {
    assert_eq!(
        parse_week_folder("2025_0922-0928"),
        Some((date(2025, 9, 22), date(2025, 9, 28)))
    );
    assert_eq!(parse_week_folder("notes"), None);
    assert_eq!(parse_week_folder("2025_1340-1346"), None);
}

#[test]
fn test_daily_filename() {
    assert_eq!(daily_filename(date(2025, 9, 26)), "2025_09_26.md");
}

#[test]
fn test_parse_filename_date() {
    assert_eq!(parse_filename_date("2025_09_26.md"), Some(date(2025, 9, 26)));
    assert_eq!(parse_filename_date("2025_09_26"), Some(date(2025, 9, 26)));
    assert_eq!(parse_filename_date("invalid_filename.md"), None);
    assert_eq!(parse_filename_date("2025_02_30.md"), None);
    assert_eq!(parse_filename_date("2025_09_26_extra.md"), None);
}

#[test]
fn test_date_formats() {
    let d = date(2025, 9, 26);
    assert_eq!(header_date(d), "0926");
    assert_eq!(display_date(d), "September 26");
    assert_eq!(long_date(d), "2025-09-26");
}

#[test]
fn test_relative_dates() {
    let d = date(2025, 9, 26);
    assert_eq!(days_ago(7, d), Some(date(2025, 9, 19)));
    assert_eq!(weeks_ago(2, d), Some(date(2025, 9, 12)));
    assert!(is_in_range(d, date(2025, 9, 22), d));
    assert!(!is_in_range(date(2025, 9, 21), date(2025, 9, 22), d));
}

#[test]
fn test_relative_dates_out_of_range() {
    let d = date(2025, 9, 26);
    assert_eq!(days_ago(100_000_000, d), None);
    assert_eq!(days_ago(i64::MAX, d), None);
    assert_eq!(weeks_ago(i64::MAX / 2, d), None);
    assert_eq!(weeks_ago(20_000_000, d), None);
}

#[test]
fn test_between() {
    assert_eq!(days_between(date(2025, 9, 15), date(2025, 9, 26)), 11);
    assert_eq!(days_between(date(2025, 9, 26), date(2025, 9, 15)), -11);
    assert_eq!(months_between(date(2025, 9, 30), date(2025, 10, 1)), 1);
    assert_eq!(months_between(date(2025, 9, 15), date(2026, 3, 1)), 6);
}
