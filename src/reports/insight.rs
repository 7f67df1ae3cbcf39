//! Insight report: ideas for social media posts mined from recent entries.
//!
//! Content from the selected date range is grouped by section, keyword themes
//! are counted per section, and lines that read like insights, achievements or
//! trends are surfaced alongside reusable post templates.

use crate::calendar;
use crate::journal::Journal;
use crate::reports::{content_lines, mentions_any, Report};
use crate::section::SectionKind;
use crate::store;
use crate::templates::{
    Platform, ACHIEVEMENT_KEYWORDS, CONTENT_TEMPLATES, INSIGHT_KEYWORDS, KEYWORD_CATEGORIES,
};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::fmt::Write;

/// Sections the insight report reads.
const ANALYSED: [SectionKind; 5] = [
    SectionKind::Video,
    SectionKind::Newsletter,
    SectionKind::Braindump,
    SectionKind::Output,
    SectionKind::Review,
];

/// Extra words counted as insights on top of [`INSIGHT_KEYWORDS`].
const PRAISE_KEYWORDS: &[&str] = &["great", "nice", "不错", "很棒"];

/// Which daily files the report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightRange {
    /// The last N days up to the reference date.
    Days(i64),
    /// The last N weeks up to the reference date.
    Weeks(i64),
    /// Every daily file.
    All,
}

impl InsightRange {
    #[must_use]
    /// Earliest date included, `None` for no limit.
    ///
    /// A range reaching past the earliest representable date has no limit.
    pub fn cutoff(self, reference: NaiveDate) -> Option<NaiveDate> {
        match self {
            InsightRange::Days(n) => calendar::days_ago(n, reference),
            InsightRange::Weeks(n) => calendar::weeks_ago(n, reference),
            InsightRange::All => None,
        }
    }

    #[must_use]
    /// Human description for the report summary.
    pub fn describe(self) -> String {
        match self {
            InsightRange::Days(n) => format!("last {n} days"),
            InsightRange::Weeks(n) => format!("last {n} weeks"),
            InsightRange::All => "all entries".to_string(),
        }
    }
}

/// Knobs of one insight run.
#[derive(Debug, Clone)]
pub struct InsightOptions {
    /// Date range to analyse.
    pub range: InsightRange,
    /// Keep only lines mentioning this topic.
    pub topic: Option<String>,
    /// Tailor suggestions for one platform.
    pub platform: Option<Platform>,
    /// Add the AI analysis placeholder section.
    pub ai_analysis: bool,
}

/// Keyword occurrences within one section type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordHit {
    /// The keyword as listed in its category.
    pub keyword: String,
    /// Theme category the keyword belongs to.
    pub category: String,
    /// Section type it was found in.
    pub section: SectionKind,
    /// Occurrences across all analysed days.
    pub count: usize,
}

/// A notable line and the day it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snippet {
    /// `YYYY-MM-DD`.
    pub date: String,
    /// The trimmed line.
    pub text: String,
}

/// Lines worth turning into posts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValuableContent {
    /// Reflections from braindump.
    pub insights: Vec<Snippet>,
    /// Results from output.
    pub achievements: Vec<Snippet>,
    /// Substantial newsletter lines.
    pub trends: Vec<Snippet>,
}

/// Section bodies of the analysed days, keyed by section then date.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    /// Daily files inside the range, readable or not.
    pub analyzed_files: usize,
    /// `section -> date -> body`.
    pub sections: BTreeMap<SectionKind, BTreeMap<NaiveDate, String>>,
}

impl Corpus {
    #[must_use]
    /// Reads the daily files on or after the range cutoff.
    pub fn collect(journal: &Journal, reference: NaiveDate, options: &InsightOptions) -> Self {
        let cutoff = options.range.cutoff(reference);
        let mut corpus = Self::default();
        tracing::info!(range = %options.range.describe(), "scanning journal entries");

        for path in journal.find_daily_files() {
            let Some(date) = path
                .file_name()
                .and_then(|n| n.to_str())
                .and_then(calendar::parse_filename_date)
            else {
                continue;
            };
            if cutoff.is_some_and(|cutoff| date < cutoff) {
                continue;
            }
            corpus.analyzed_files += 1;

            let Some(doc) = journal.read_document(&path) else {
                continue;
            };
            for (kind, body) in store::extract_all(&doc) {
                if !ANALYSED.contains(&kind) {
                    continue;
                }
                let body = match &options.topic {
                    Some(topic) => filter_topic(&body, topic),
                    None => body,
                };
                if !body.is_empty() {
                    corpus.sections.entry(kind).or_default().insert(date, body);
                }
            }
        }

        tracing::info!(files = corpus.analyzed_files, "scan complete");
        corpus
    }

    fn days(&self, kind: SectionKind) -> impl Iterator<Item = (&NaiveDate, &String)> {
        self.sections.get(&kind).into_iter().flatten()
    }

    #[must_use]
    /// Keyword counts per section type, most frequent first.
    pub fn keyword_hits(&self) -> Vec<KeywordHit> {
        let mut hits = Vec::new();
        for kind in ANALYSED {
            if !self.sections.contains_key(&kind) {
                continue;
            }
            tracing::debug!(section = %kind, "counting keywords");
            for (category, keywords) in KEYWORD_CATEGORIES {
                let mut totals: Vec<(String, usize)> = Vec::new();
                for (_, body) in self.days(kind) {
                    for (keyword, count) in store::count_keywords(body, keywords) {
                        match totals.iter_mut().find(|(k, _)| *k == keyword) {
                            Some((_, total)) => *total += count,
                            None => totals.push((keyword, count)),
                        }
                    }
                }
                totals.sort_by_key(|(k, _)| keywords.iter().position(|kw| *kw == k.as_str()));
                hits.extend(totals.into_iter().map(|(keyword, count)| KeywordHit {
                    keyword,
                    category: (*category).to_string(),
                    section: kind,
                    count,
                }));
            }
        }
        hits.sort_by(|a, b| b.count.cmp(&a.count));
        hits
    }

    #[must_use]
    /// Insight, achievement and trend lines, in date order.
    pub fn valuable_content(&self) -> ValuableContent {
        ValuableContent {
            insights: self.snippets(SectionKind::Braindump, |line| {
                mentions_any(line, INSIGHT_KEYWORDS) || mentions_any(line, PRAISE_KEYWORDS)
            }),
            achievements: self.snippets(SectionKind::Output, |line| {
                mentions_any(line, ACHIEVEMENT_KEYWORDS) || mentions_any(line, PROJECT_WORDS)
            }),
            trends: self.snippets(SectionKind::Newsletter, |line| line.chars().count() > 10),
        }
    }

    fn snippets(&self, kind: SectionKind, keep: impl Fn(&str) -> bool) -> Vec<Snippet> {
        let mut out = Vec::new();
        for (date, body) in self.days(kind) {
            for line in content_lines(body).filter(|line| keep(line)) {
                out.push(Snippet {
                    date: calendar::long_date(*date),
                    text: line.to_string(),
                });
            }
        }
        out
    }
}

/// Words that mark an output line as project work.
const PROJECT_WORDS: &[&str] = &["demo", "project", "product", "项目", "产品"];

/// Lines of `body` mentioning `topic`, ignoring case.
fn filter_topic(body: &str, topic: &str) -> String {
    body.lines()
        .filter(|line| mentions_any(line, &[topic]))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The assembled insight report.
#[derive(Debug, Clone, Serialize)]
pub struct InsightReport {
    /// Report date, `YYYY-MM-DD`.
    pub date: String,
    /// Description of the analysed range.
    pub range: String,
    /// Daily files inside the range.
    pub analyzed_files: usize,
    /// Topic filter, if any.
    pub topic: Option<String>,
    /// Target platform, if any.
    pub platform: Option<Platform>,
    /// Whether the AI placeholder section is included.
    pub ai_analysis: bool,
    /// Keyword counts, most frequent first.
    pub keywords: Vec<KeywordHit>,
    /// Notable lines.
    pub valuable: ValuableContent,
}

impl InsightReport {
    #[must_use]
    /// Analyses `corpus` into a report dated `reference`.
    pub fn build(corpus: &Corpus, reference: NaiveDate, options: &InsightOptions) -> Self {
        tracing::info!("analysing themes");
        let keywords = corpus.keyword_hits();
        tracing::info!("identifying valuable content");
        let valuable = corpus.valuable_content();
        Self {
            date: calendar::long_date(reference),
            range: options.range.describe(),
            analyzed_files: corpus.analyzed_files,
            topic: options.topic.clone(),
            platform: options.platform,
            ai_analysis: options.ai_analysis,
            keywords,
            valuable,
        }
    }

    /// Keywords ranked by count with duplicates across sections merged.
    fn top_tags(&self, n: usize) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.keywords
            .iter()
            .map(|hit| hit.keyword.as_str())
            .filter(|keyword| seen.insert(*keyword))
            .take(n)
            .collect()
    }

    fn sample_insight(&self) -> &str {
        self.valuable.insights.first().map_or(
            "Tried a new AI tool today and its user experience design stood out",
            |snippet| snippet.text.trim_start_matches("- "),
        )
    }

    fn write_summary(&self, out: &mut String) {
        let _ = write!(
            out,
            "## 📈 Summary\n\n- **Range**: {}\n- **Files analysed**: {} journal entries\n- **Topic**: {}\n- **Platform**: {}\n\n",
            self.range,
            self.analyzed_files,
            self.topic.as_deref().unwrap_or("all topics"),
            self.platform.as_ref().map_or_else(|| "any".to_string(), ToString::to_string),
        );
        if self.ai_analysis {
            out.push_str("## 🧠 AI Analysis\n\n");
            out.push_str("AI analysis is not run by this tool. Paste this report into an assistant to get:\n\n");
            out.push_str("- 🎯 content value and reach assessment\n");
            out.push_str("- 👥 audience profile and platform fit\n");
            out.push_str("- ✍️ copy and headline suggestions\n");
            out.push_str("- 🖼️ visual direction\n");
            out.push_str("- ⏰ posting time strategy\n\n");
        }
    }

    fn write_valuable(&self, out: &mut String) {
        let v = &self.valuable;
        if v.insights.is_empty() && v.achievements.is_empty() {
            return;
        }
        out.push_str("## 🌟 Valuable Content\n\n");
        if !v.insights.is_empty() {
            out.push_str("### 💡 Insights\n\n");
            for s in v.insights.iter().take(10) {
                let _ = writeln!(out, "- **{}**: {}", s.date, s.text);
            }
            out.push('\n');
        }
        if !v.achievements.is_empty() {
            out.push_str("### 🎯 Results\n\n");
            for s in v.achievements.iter().take(8) {
                let _ = writeln!(out, "- **{}**: {}", s.date, s.text);
            }
            out.push('\n');
        }
    }

    fn write_suggestions(&self, out: &mut String) {
        out.push_str("## 🚀 Social Media Suggestions\n\n");
        let tags = self.top_tags(10);
        if !tags.is_empty() {
            out.push_str("### 🏷️ Suggested tags\n\n");
            for tag in tags {
                let _ = writeln!(out, "- #{tag}");
            }
            out.push('\n');
        }
        if let Some(platform) = self.platform {
            let _ = write!(out, "### 📲 Tips for {platform}\n\n");
            for tip in platform.tips() {
                let _ = writeln!(out, "{tip}");
            }
            out.push('\n');
        }
        out.push_str("### 📝 Formats\n\n");
        out.push_str("- 📊 Learning summary: turn the week's notes into a chart\n");
        out.push_str("- 🔧 Tool review: share tools you tried and how they felt\n");
        out.push_str("- 💡 Reflection: share an insight from your learning\n");
        out.push_str("- 🎯 Showcase: show results and project progress\n");
        out.push_str("- 📚 Resources: recommend articles and courses\n\n");
        out.push_str("### ⏰ Timing\n\n");
        out.push_str("- Weekday mornings 8-9 (commute)\n");
        out.push_str("- Lunch break 12-13\n");
        out.push_str("- Evenings 20-22\n");
        out.push_str("- Weekend afternoons 14-17\n\n");
    }

    fn write_templates(out: &mut String) {
        out.push_str("## 📄 Post Templates\n\n");
        for (title, body) in CONTENT_TEMPLATES {
            let _ = write!(out, "### {title}\n\n```\n{body}\n```\n\n");
        }
    }

    fn write_examples(&self, out: &mut String) {
        let sample = self.sample_insight();
        out.push_str("## 📲 Platform Examples\n\n");
        let platforms: Vec<Platform> = match self.platform {
            Some(platform) => vec![platform],
            None => vec![Platform::Xiaohongshu, Platform::Weibo, Platform::Linkedin],
        };
        for platform in platforms {
            let example = match platform {
                Platform::Xiaohongshu => format!(
                    "🚀 Found another gem of an AI tool!\n\n✨ {sample}\n\n🔥 What surprised me most:\n1️⃣ clean interface\n2️⃣ thoughtful onboarding\n3️⃣ powerful without feeling complex\n\nAny tools you'd recommend? 👇\n\n#AItools #productivity #learning"
                ),
                Platform::Weibo => format!(
                    "💡 Product note: {sample}\n\nThree things worth thinking about:\n1. guidance makes complex features approachable\n2. technical products need warmth too\n3. restraint beats piling on features\n\nWhat matters more in an AI product, tech or experience?\n\n#ProductThinking #AItools"
                ),
                Platform::Linkedin => format!(
                    "🎯 Product Insights\n\n{sample}\n\nKey observations:\n🔸 Progressive disclosure\n🔸 Contextual guidance\n🔸 Approachable design\n\nWhat's your experience?\n\n#ProductManagement #AITools #UserExperience"
                ),
                Platform::Twitter => format!(
                    "{sample}\n\nThread 🧵 on what made it click:\n1/ onboarding\n2/ defaults\n3/ restraint\n\n#AI #buildinpublic"
                ),
            };
            let _ = write!(out, "### {platform}\n\n```\n{example}\n```\n\n");
        }
    }

    fn write_keywords(&self, out: &mut String) {
        if self.keywords.is_empty() {
            return;
        }
        out.push_str("## 📊 Keyword Analysis\n\n### 🔥 Top keywords\n\n");
        let top: Vec<&KeywordHit> = self.keywords.iter().take(15).collect();
        for hit in &top {
            let _ = writeln!(
                out,
                "- **{}** ({} occurrences, from {})",
                hit.keyword, hit.count, hit.section
            );
        }
        out.push_str("\n### 📂 By section\n\n");
        for kind in ANALYSED {
            let in_section: Vec<&&KeywordHit> = top.iter().filter(|h| h.section == kind).collect();
            if in_section.is_empty() {
                continue;
            }
            let _ = writeln!(out, "**{kind} keywords ({}):**", in_section.len());
            for hit in in_section.iter().take(5) {
                let _ = writeln!(out, "- {} ({})", hit.keyword, hit.count);
            }
            out.push('\n');
        }
    }
}

const NEXT_STEPS: &str = "\
## 🎯 Next Steps

### 📅 Content plan

- **This week**: pick one or two valuable snippets and turn them into posts
- **Schedule**:
  - Monday: learning summary
  - Wednesday: tool review
  - Friday: reflection
- **Engagement**: end posts with a question
- **Fit**: adapt length and format to each platform

### 🔄 Keep improving

- Run `learnlog insight` weekly
- Track feedback on what you publish
- Adjust topics and style to your audience
- Keep a library of reusable ideas and lines

---
*Generated by `learnlog insight` from your journal entries*
";

impl Report for InsightReport {
    fn to_markdown(&self) -> String {
        let mut out = format!("# 🎯 Insight Report - {}\n\n", self.date);
        self.write_summary(&mut out);
        self.write_valuable(&mut out);
        self.write_suggestions(&mut out);
        Self::write_templates(&mut out);
        self.write_examples(&mut out);
        self.write_keywords(&mut out);
        out.push_str(NEXT_STEPS);
        out
    }
}

#[cfg(test)]
#[path = "../tests/insight.rs"]
mod tests;
