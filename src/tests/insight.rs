use super::*;
use crate::config::Config;
use crate::reports::OutputFormat;
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn options(range: InsightRange) -> InsightOptions {
    InsightOptions {
        range,
        topic: None,
        platform: None,
        ai_analysis: false,
    }
}

fn sample_journal(dir: &TempDir) -> Journal {
    let journal = Journal::new(dir.path(), &Config::default());
    let files = [
        (date(2025, 9, 10), "## braindump\n- an old thought\n"),
        (date(2025, 9, 20), "## video\n- Python tutorial\n"),
        (
            date(2025, 9, 25),
            "## newsletter\n- OpenAI released a new model today\n- short\n\n## braindump\n- learned that AI agents and AI tools help AI coding\n- random\n\n## output\n- completed the RAG demo\n",
        ),
    ];
    for (day, doc) in files {
        journal.write_document(&journal.daily_file(day), doc).unwrap();
    }
    journal
}

#[test]
fn test_range_cutoff() {
    let today = date(2025, 9, 26);
    assert_eq!(InsightRange::Days(7).cutoff(today), Some(date(2025, 9, 19)));
    assert_eq!(InsightRange::Weeks(2).cutoff(today), Some(date(2025, 9, 12)));
    assert_eq!(InsightRange::All.cutoff(today), None);
    assert_eq!(InsightRange::Weeks(2).describe(), "last 2 weeks");
}

#[test]
fn test_collect_respects_cutoff() {
    let dir = TempDir::new().unwrap();
    let journal = sample_journal(&dir);
    let today = date(2025, 9, 26);

    let recent = Corpus::collect(&journal, today, &options(InsightRange::Days(7)));
    assert_eq!(recent.analyzed_files, 2);
    assert!(!recent.sections[&SectionKind::Braindump].contains_key(&date(2025, 9, 10)));

    let all = Corpus::collect(&journal, today, &options(InsightRange::All));
    assert_eq!(all.analyzed_files, 3);
    assert_eq!(all.sections[&SectionKind::Braindump].len(), 2);
}

#[test]
fn test_huge_range_has_no_cutoff() {
    let dir = TempDir::new().unwrap();
    let journal = sample_journal(&dir);
    let today = date(2025, 9, 26);
    assert_eq!(InsightRange::Days(100_000_000).cutoff(today), None);
    assert_eq!(InsightRange::Weeks(i64::MAX).cutoff(today), None);

    let corpus = Corpus::collect(&journal, today, &options(InsightRange::Days(100_000_000)));
    assert_eq!(corpus.analyzed_files, 3);
    let corpus = Corpus::collect(&journal, today, &options(InsightRange::Weeks(i64::MAX)));
    assert_eq!(corpus.analyzed_files, 3);
}

#[test]
fn test_collect_skips_undecodable_file() {
    let dir = TempDir::new().unwrap();
    let journal = sample_journal(&dir);
    std::fs::write(journal.daily_file(date(2025, 9, 24)), [0xFF, 0xFF]).unwrap();

    let corpus = Corpus::collect(&journal, date(2025, 9, 26), &options(InsightRange::Days(7)));
    assert_eq!(corpus.analyzed_files, 3);
    assert!(corpus
        .sections
        .values()
        .all(|days| !days.contains_key(&date(2025, 9, 24))));
    assert!(corpus.sections[&SectionKind::Newsletter].contains_key(&date(2025, 9, 25)));
}

#[test]
fn test_topic_filter_keeps_matching_lines() {
    let dir = TempDir::new().unwrap();
    let journal = sample_journal(&dir);
    let opts = InsightOptions {
        topic: Some("rag".to_string()),
        ..options(InsightRange::Days(7))
    };
    let corpus = Corpus::collect(&journal, date(2025, 9, 26), &opts);
    assert_eq!(corpus.analyzed_files, 2);
    assert_eq!(corpus.sections.len(), 1);
    assert_eq!(
        corpus.sections[&SectionKind::Output][&date(2025, 9, 25)],
        "- completed the RAG demo"
    );
}

#[test]
fn test_keyword_hits_sorted_by_count() {
    let dir = TempDir::new().unwrap();
    let journal = sample_journal(&dir);
    let corpus = Corpus::collect(&journal, date(2025, 9, 26), &options(InsightRange::Days(7)));
    let hits = corpus.keyword_hits();
    assert_eq!(hits[0].keyword, "AI");
    assert_eq!(hits[0].section, SectionKind::Braindump);
    assert_eq!(hits[0].count, 3);
    assert!(hits.windows(2).all(|w| w[0].count >= w[1].count));
    assert!(hits
        .iter()
        .any(|h| h.keyword == "Python" && h.section == SectionKind::Video && h.category == "technology"));
}

#[test]
fn test_valuable_content() {
    let dir = TempDir::new().unwrap();
    let journal = sample_journal(&dir);
    let corpus = Corpus::collect(&journal, date(2025, 9, 26), &options(InsightRange::Days(7)));
    let valuable = corpus.valuable_content();
    assert_eq!(valuable.insights.len(), 1);
    assert_eq!(valuable.insights[0].date, "2025-09-25");
    assert_eq!(valuable.achievements[0].text, "- completed the RAG demo");
    let trends: Vec<&str> = valuable.trends.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(trends, ["- OpenAI released a new model today"]);
}

#[test]
fn test_markdown_report() {
    let dir = TempDir::new().unwrap();
    let journal = sample_journal(&dir);
    let today = date(2025, 9, 26);
    let opts = InsightOptions {
        platform: Some(Platform::Linkedin),
        ai_analysis: true,
        ..options(InsightRange::Days(7))
    };
    let corpus = Corpus::collect(&journal, today, &opts);
    let md = InsightReport::build(&corpus, today, &opts).to_markdown();

    assert!(md.starts_with("# 🎯 Insight Report - 2025-09-26"));
    assert!(md.contains("**Files analysed**: 2 journal entries"));
    assert!(md.contains("## 🧠 AI Analysis"));
    assert!(md.contains("- #AI\n"));
    assert!(md.contains("### 📲 Tips for linkedin\n"));
    assert!(md.contains("- **Platform**: linkedin\n"));
    assert!(md.contains("### linkedin\n"));
    assert!(!md.contains("### weibo\n"));
    assert!(md.contains("learned that AI agents"));
    assert!(md.contains("## 📊 Keyword Analysis"));
    assert!(md.contains("## 🎯 Next Steps"));
}

#[test]
fn test_tags_are_deduplicated() {
    let dir = TempDir::new().unwrap();
    let journal = sample_journal(&dir);
    let today = date(2025, 9, 26);
    let opts = options(InsightRange::Days(7));
    let md = InsightReport::build(&Corpus::collect(&journal, today, &opts), today, &opts)
        .to_markdown();
    assert_eq!(md.matches("- #AI\n").count(), 1);
    assert!(!md.contains("## 🧠 AI Analysis"));
}

#[test]
fn test_json_report() {
    let dir = TempDir::new().unwrap();
    let journal = sample_journal(&dir);
    let today = date(2025, 9, 26);
    let opts = InsightOptions {
        platform: Some(Platform::Xiaohongshu),
        ..options(InsightRange::All)
    };
    let report = InsightReport::build(&Corpus::collect(&journal, today, &opts), today, &opts);
    let value: serde_json::Value =
        serde_json::from_str(&report.render(OutputFormat::Json).unwrap()).unwrap();
    assert_eq!(value["analyzed_files"], 3);
    assert_eq!(value["platform"], "xiaohongshu");
    assert_eq!(value["range"], "all entries");
    let sections: Vec<&str> = value["keywords"]
        .as_array()
        .unwrap()
        .iter()
        .map(|hit| hit["section"].as_str().unwrap())
        .collect();
    assert!(sections.contains(&"braindump"));
    assert!(sections
        .iter()
        .all(|name| SectionKind::from_name(name).is_some()));
}
