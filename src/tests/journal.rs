use super::*;
use std::fs;
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn journal(dir: &TempDir) -> Journal {
    Journal::new(dir.path(), &Config::default())
}

#[test]
fn test_daily_filename_shape() {
    assert!(is_daily_filename("2025_09_26.md"));
    assert!(!is_daily_filename("week_review.md"));
    assert!(!is_daily_filename("2025_09_26.txt"));
    assert!(!is_daily_filename("2025-09-26.md"));
}

#[test]
fn test_paths() {
    let dir = TempDir::new().unwrap();
    let j = journal(&dir);
    let d = date(2025, 9, 26);
    assert_eq!(
        j.daily_file(d),
        dir.path().join("weeks/2025_0922-0928/2025_09_26.md")
    );
    assert_eq!(
        j.week_review_file(d),
        dir.path().join("weeks/2025_0922-0928/week_review.md")
    );
    assert_eq!(j.relative(&j.week_folder(d)), "weeks/2025_0922-0928");
    assert_eq!(j.objective_file(), dir.path().join("objective.md"));
}

#[test]
fn test_find_daily_files_sorted_and_filtered() {
    let dir = TempDir::new().unwrap();
    let j = journal(&dir);
    for d in [date(2025, 9, 29), date(2025, 9, 23), date(2025, 9, 22)] {
        j.write_document(&j.daily_file(d), "# x\n").unwrap();
    }
    j.write_document(&j.week_review_file(date(2025, 9, 22)), "review").unwrap();
    j.write_document(&j.weeks_dir().join("notes.md"), "n").unwrap();

    let names: Vec<String> = j
        .find_daily_files()
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["2025_09_22.md", "2025_09_23.md", "2025_09_29.md"]);
    assert_eq!(j.earliest_daily_date(), Some(date(2025, 9, 22)));
    assert_eq!(j.daily_files_in(&j.week_folder(date(2025, 9, 22))).len(), 2);
}

#[test]
fn test_find_week_folders() {
    let dir = TempDir::new().unwrap();
    let j = journal(&dir);
    fs::create_dir_all(j.week_folder(date(2025, 9, 29))).unwrap();
    fs::create_dir_all(j.week_folder(date(2025, 9, 22))).unwrap();
    fs::create_dir_all(j.weeks_dir().join("archive")).unwrap();
    let folders = j.find_week_folders();
    assert_eq!(folders.len(), 2);
    assert!(folders[0].ends_with("2025_0922-0928"));
}

#[test]
fn test_empty_journal() {
    let dir = TempDir::new().unwrap();
    let j = journal(&dir);
    assert!(j.find_daily_files().is_empty());
    assert!(j.find_week_folders().is_empty());
    assert_eq!(j.earliest_daily_date(), None);
}

#[test]
fn test_read_missing_is_none() {
    let dir = TempDir::new().unwrap();
    let j = journal(&dir);
    assert_eq!(j.read_document(&dir.path().join("nope.md")), None);
}

#[test]
fn test_read_legacy_encoding() {
    let dir = TempDir::new().unwrap();
    let j = journal(&dir);
    let path = dir.path().join("legacy.md");
    let (bytes, _, _) = GBK.encode("## braindump\n产品思考\n");
    fs::write(&path, &bytes).unwrap();
    assert_eq!(
        j.read_document(&path).as_deref(),
        Some("## braindump\n产品思考\n")
    );
}

#[test]
fn test_read_undecodable_is_none() {
    let dir = TempDir::new().unwrap();
    let j = journal(&dir);
    let path = dir.path().join("broken.md");
    fs::write(&path, [0xFF, 0xFF]).unwrap();
    assert_eq!(j.read_document(&path), None);
}

#[test]
fn test_write_creates_parents() {
    let dir = TempDir::new().unwrap();
    let j = journal(&dir);
    let path = dir.path().join("a/b/c.md");
    j.write_document(&path, "hello").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
}
