use super::*;

const FULL_DAY: &str = "# 0926 Journal

## video

- Rust ownership deep dive
- Tokio internals
- Async traits
- Pin explained

## newsletter

- [x] AI Valley
- [ ] The Keyword

## braindump

- learned that borrowing rules are about aliasing
- random idea for a CLI
- the product onboarding felt smooth

## output

- shipped the project demo
";

#[test]
fn test_full_day_scores_100() {
    let habits = DailyAnalyzer::new(FULL_DAY).habits();
    assert_eq!(habits.diversity, 4);
    assert_eq!(habits.score, 100);
    assert!(habits.status.contains("balanced"));
    assert_eq!(habits.details.len(), 4);
    assert!(habits.details.iter().all(|d| d.starts_with('✅')));
}

#[test]
fn test_partial_day_score() {
    let doc = "## video\n- one talk\n\n## output\n- notes\n";
    let habits = DailyAnalyzer::new(doc).habits();
    assert_eq!(habits.score, 50);
    assert!(habits.status.contains("productive"));
}

#[test]
fn test_activity_summary_counts() {
    let summary = DailyAnalyzer::new(FULL_DAY).activity_summary();
    assert!(summary.contains("watched 4 videos"));
    assert!(summary.contains("finished 1 of 2 reading items"));
    assert!(summary.contains("recorded 3 thoughts"));
}

#[test]
fn test_insights_take_three_videos_and_keyword_lines() {
    let insights = DailyAnalyzer::new(FULL_DAY).insights();
    assert!(insights.contains("- Async traits"));
    assert!(!insights.contains("Pin explained"));
    assert!(insights.contains("- learned that borrowing rules are about aliasing"));
    assert!(!insights.contains("random idea"));
    assert!(insights.contains("**Results:**\n- shipped the project demo"));
}

#[test]
fn test_recommendations_follow_gaps() {
    let doc = "## braindump\n- one thought about product design\n";
    let recs = DailyAnalyzer::new(doc).recommendations();
    assert!(recs.contains("Watch one or two"));
    assert!(recs.contains("Read an industry newsletter"));
    assert!(recs.contains("write down more ideas"));
    assert!(recs.contains("concrete output"));
    assert!(recs.contains("product thinking"));
}

#[test]
fn test_empty_day_gets_empty_review() {
    let doc = "# 0926 Journal\n\n## video\n\n\n## braindump\n\n## output\n\n";
    let analyzer = DailyAnalyzer::new(doc);
    assert!(analyzer.is_empty());
    assert_eq!(analyzer.review(), EMPTY_REVIEW);
}

#[test]
fn test_apply_review_appends_review_last() {
    let out = apply_review(FULL_DAY);
    let review = store::extract(&out, "review").unwrap();
    assert!(review.contains("Habit score (100/100)"));
    let last = crate::section::sections(&out).pop().unwrap();
    assert_eq!(last.name, "review");
    assert_eq!(store::extract(&out, "video"), store::extract(FULL_DAY, "video"));
}

#[test]
fn test_apply_review_replaces_existing() {
    let stale = format!("{FULL_DAY}\n## review\n\nstale text\n\n## TODO\n- tidy up\n");
    let out = apply_review(&stale);
    assert!(!out.contains("stale text"));
    assert_eq!(out.matches("## review").count(), 1);
    assert_eq!(store::extract(&out, "TODO").as_deref(), Some("- tidy up"));
    assert_eq!(apply_review(&out), out);
}
