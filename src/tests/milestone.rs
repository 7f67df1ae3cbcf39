use super::*;
use crate::config::Config;
use crate::reports::OutputFormat;
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

const OBJECTIVE: &str = "# Plan

## Monthly goals

Month 1-3 (foundation):
- learn Rust basics
- build a CLI

Month 4-6 (growth):
- ship a product

## Notes
unrelated
";

fn sample_journal(dir: &TempDir) -> Journal {
    let journal = Journal::new(dir.path(), &Config::default());
    journal
        .write_document(
            &journal.daily_file(date(2025, 9, 22)),
            "# 0922 Journal\n\n## video\n- talk\n\n## braindump\n- idea\n\n## output\n- built a demo project\n\n## review\n- completed the Rust book chapter\n- mood ok\n",
        )
        .unwrap();
    journal
        .write_document(
            &journal.daily_file(date(2025, 9, 23)),
            "# 0923 Journal\n\n## newsletter\n- [x] AI Valley\n",
        )
        .unwrap();
    journal
        .write_document(journal.objective_file(), OBJECTIVE)
        .unwrap();
    journal
}

#[test]
fn test_current_month() {
    let start = date(2025, 9, 15);
    assert_eq!(current_month(start, start), 1);
    assert_eq!(current_month(start, date(2025, 12, 1)), 4);
    assert_eq!(current_month(start, date(2025, 8, 1)), 1);
}

#[test]
fn test_monthly_goals_by_quarter() {
    assert_eq!(
        extract_monthly_goals(OBJECTIVE, 2).as_deref(),
        Some("- learn Rust basics\n- build a CLI")
    );
    assert_eq!(
        extract_monthly_goals(OBJECTIVE, 5).as_deref(),
        Some("- ship a product")
    );
    assert_eq!(extract_monthly_goals(OBJECTIVE, 8), None);
}

#[test]
fn test_monthly_goals_chinese_markers() {
    let objective = "月 1–3（基础期）：\n- 学习 Rust\n月 4–6（进阶）：\n- 做产品\n";
    assert_eq!(
        extract_monthly_goals(objective, 1).as_deref(),
        Some("- 学习 Rust")
    );
}

#[test]
fn test_aggregate_counts() {
    let dir = TempDir::new().unwrap();
    let journal = sample_journal(&dir);
    let (stats, achievements) = aggregate(&journal);
    assert_eq!(
        stats,
        MilestoneStats {
            video_count: 1,
            newsletter_count: 1,
            braindump_count: 1,
            active_learning_days: 2,
            project_outputs: 1,
            total_files: 2,
            files_with_review: 1,
        }
    );
    assert_eq!(
        achievements,
        [Achievement {
            date: "2025-09-22".to_string(),
            lines: vec!["completed the Rust book chapter".to_string()],
        }]
    );
}

#[test]
fn test_aggregate_skips_undecodable_file() {
    let dir = TempDir::new().unwrap();
    let journal = sample_journal(&dir);
    std::fs::write(journal.daily_file(date(2025, 9, 24)), [0xFF, 0xFF]).unwrap();
    let (stats, achievements) = aggregate(&journal);
    assert_eq!(stats.total_files, 3);
    assert_eq!(stats.video_count, 1);
    assert_eq!(stats.newsletter_count, 1);
    assert_eq!(stats.active_learning_days, 2);
    assert_eq!(achievements.len(), 1);
}

#[test]
fn test_report_uses_earliest_file_as_start() {
    let dir = TempDir::new().unwrap();
    let journal = sample_journal(&dir);
    let report = MilestoneReport::build(&journal, date(2025, 9, 26), None, date(2025, 1, 1));
    assert_eq!(report.start_date, "2025-09-22");
    assert_eq!(report.current_month, 1);
    assert_eq!(report.days_since_start, 5);
    assert!(report.monthly_goals.as_deref().unwrap().contains("build a CLI"));

    let md = report.to_markdown();
    assert!(md.starts_with("# Milestone Report - 2025-09-26"));
    assert!(md.contains("- **Plan month**: month 1"));
    assert!(md.contains("- **Active learning days**: 2 days"));
    assert!(md.contains("**2025-09-22:**\n- completed the Rust book chapter\n"));
    assert!(md.contains("## ⚠️ Gap Analysis"));
}

#[test]
fn test_month_override_and_fallback_start() {
    let dir = TempDir::new().unwrap();
    let journal = Journal::new(dir.path(), &Config::default());
    let report = MilestoneReport::build(&journal, date(2025, 9, 26), Some(5), date(2025, 9, 15));
    assert_eq!(report.current_month, 5);
    assert_eq!(report.start_date, "2025-09-15");
    assert_eq!(report.stats, MilestoneStats::default());
    assert_eq!(report.monthly_goals, None);
    assert!(report.to_markdown().contains("not yet defined"));
}

#[test]
fn test_json_output() {
    let dir = TempDir::new().unwrap();
    let journal = sample_journal(&dir);
    let report = MilestoneReport::build(&journal, date(2025, 9, 26), None, date(2025, 9, 15));
    let json = report.render(OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["current_month"], 1);
    assert_eq!(value["stats"]["video_count"], 1);
    assert_eq!(value["achievements"][0]["date"], "2025-09-22");
}
