//! Milestone report: progress across the whole journal measured against the
//! monthly goals in `objective.md`.
//!
//! The plan is split into quarters (months 1-3, 4-6, 7-9, 10-12). The current
//! plan month counts calendar months since the first daily file, so the first
//! month of journaling is month 1.

use crate::calendar;
use crate::journal::Journal;
use crate::reports::{mentions_any, percent, Report};
use crate::section::SectionKind;
use crate::store;
use crate::templates::{ACHIEVEMENT_KEYWORDS, PROJECT_KEYWORDS};
use chrono::NaiveDate;
use regex::RegexBuilder;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt::Write;

/// Achievement lines kept per day.
const ACHIEVEMENTS_PER_DAY: usize = 3;

/// Counts gathered from every daily file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MilestoneStats {
    /// Files with a `video` section.
    pub video_count: usize,
    /// Files with a `newsletter` section.
    pub newsletter_count: usize,
    /// Files with a `braindump` section.
    pub braindump_count: usize,
    /// Distinct days with any input section.
    pub active_learning_days: usize,
    /// Files whose `output` mentions project work.
    pub project_outputs: usize,
    /// Daily files scanned, readable or not.
    pub total_files: usize,
    /// Files with a `review` section.
    pub files_with_review: usize,
}

/// Achievement lines pulled from one day's review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Achievement {
    /// `YYYY-MM-DD`.
    pub date: String,
    /// Up to three matching review lines.
    pub lines: Vec<String>,
}

/// Everything the milestone report shows.
#[derive(Debug, Clone, Serialize)]
pub struct MilestoneReport {
    /// Report date, `YYYY-MM-DD`.
    pub date: String,
    /// Plan month (1-based).
    pub current_month: u32,
    /// Learning start date, `YYYY-MM-DD`.
    pub start_date: String,
    /// Days from the start date to the report date, inclusive.
    pub days_since_start: i64,
    /// Goals for the current quarter, when `objective.md` has them.
    pub monthly_goals: Option<String>,
    /// Corpus statistics.
    pub stats: MilestoneStats,
    /// Achievements found in daily reviews.
    pub achievements: Vec<Achievement>,
}

#[must_use]
/// Plan month for `today`, never below 1.
pub fn current_month(start: NaiveDate, today: NaiveDate) -> u32 {
    u32::try_from(calendar::months_between(start, today) + 1)
        .unwrap_or(1)
        .max(1)
}

/// First and last month of the plan quarter containing `month`.
fn quarter(month: u32) -> (u32, u32) {
    match month {
        0..=3 => (1, 3),
        4..=6 => (4, 6),
        7..=9 => (7, 9),
        _ => (10, 12),
    }
}

fn band_marker(start: u32, end: Option<u32>) -> String {
    let end = end.map_or_else(String::new, |end| format!(r"\s*{end}"));
    format!(r"(?:月|month)\s*{start}\s*[–—-]{end}")
}

#[must_use]
/// Goal text for the quarter containing `month`.
///
/// A quarter starts at a marker like `月 1–3（...）：` or `Month 1-3 (...):` and
/// runs until the next quarter's marker, a markdown heading or the end of the
/// document.
pub fn extract_monthly_goals(objective: &str, month: u32) -> Option<String> {
    let (first, last) = quarter(month);
    let start = RegexBuilder::new(&format!(
        r"{}[^：:\n]*[：:]",
        band_marker(first, Some(last))
    ))
    .case_insensitive(true)
    .build()
    .ok()?;
    let found = start.find(objective)?;
    let rest = &objective[found.end()..];

    let stop = RegexBuilder::new(&format!(
        r"{}|(?m:^#{{1,6}}\s)|四、每月",
        band_marker(last + 1, None)
    ))
    .case_insensitive(true)
    .build()
    .ok()?;
    let body = stop.find(rest).map_or(rest, |m| &rest[..m.start()]).trim();
    (!body.is_empty()).then(|| body.to_string())
}

/// Scans every daily file once, returning statistics and achievements.
#[must_use]
pub fn aggregate(journal: &Journal) -> (MilestoneStats, Vec<Achievement>) {
    let mut stats = MilestoneStats::default();
    let mut achievements = Vec::new();
    let mut learning_days = BTreeSet::new();

    for path in journal.find_daily_files() {
        stats.total_files += 1;
        let Some(doc) = journal.read_document(&path) else {
            continue;
        };
        let Some(day) = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| n.strip_suffix(".md"))
            .map(str::to_string)
        else {
            continue;
        };

        let sections = store::extract_all(&doc);
        let body = |kind: SectionKind| {
            sections
                .iter()
                .find(|(k, _)| *k == kind)
                .map(|(_, body)| body.as_str())
        };

        if body(SectionKind::Video).is_some() {
            stats.video_count += 1;
            learning_days.insert(day.clone());
        }
        if body(SectionKind::Newsletter).is_some() {
            stats.newsletter_count += 1;
            learning_days.insert(day.clone());
        }
        if body(SectionKind::Braindump).is_some() {
            stats.braindump_count += 1;
            learning_days.insert(day.clone());
        }
        if body(SectionKind::Output).is_some_and(|text| mentions_any(text, PROJECT_KEYWORDS)) {
            stats.project_outputs += 1;
        }
        if let Some(review) = body(SectionKind::Review) {
            stats.files_with_review += 1;
            let lines: Vec<String> = review
                .lines()
                .filter(|line| mentions_any(line, ACHIEVEMENT_KEYWORDS))
                .map(|line| line.trim().trim_start_matches("- ").to_string())
                .take(ACHIEVEMENTS_PER_DAY)
                .collect();
            if !lines.is_empty() {
                achievements.push(Achievement {
                    date: day.replace('_', "-"),
                    lines,
                });
            }
        }
        tracing::debug!(path = %path.display(), "aggregated daily file");
    }

    stats.active_learning_days = learning_days.len();
    (stats, achievements)
}

impl MilestoneReport {
    /// Builds the report for `today`.
    ///
    /// `month` overrides the computed plan month; `fallback_start` is used when
    /// there are no daily files yet.
    #[must_use]
    pub fn build(
        journal: &Journal,
        today: NaiveDate,
        month: Option<u32>,
        fallback_start: NaiveDate,
    ) -> Self {
        let start = journal.earliest_daily_date().unwrap_or(fallback_start);
        let current_month = month.unwrap_or_else(|| current_month(start, today));
        tracing::info!(current_month, start = %start, "building milestone report");

        let monthly_goals = journal
            .read_document(journal.objective_file())
            .and_then(|objective| extract_monthly_goals(&objective, current_month));
        tracing::info!(found = monthly_goals.is_some(), "extracted monthly goals");

        let (stats, achievements) = aggregate(journal);
        tracing::info!(
            videos = stats.video_count,
            newsletters = stats.newsletter_count,
            braindumps = stats.braindump_count,
            days = stats.active_learning_days,
            projects = stats.project_outputs,
            "aggregated learning content"
        );

        Self {
            date: calendar::long_date(today),
            current_month,
            start_date: calendar::long_date(start),
            days_since_start: calendar::days_between(start, today) + 1,
            monthly_goals,
            stats,
            achievements,
        }
    }

    fn frequency_pct(&self) -> i64 {
        percent(self.stats.active_learning_days, self.days_since_start)
    }

    fn review_pct(&self) -> i64 {
        let files = i64::try_from(self.stats.total_files.max(1)).unwrap_or(i64::MAX);
        percent(self.stats.files_with_review, files)
    }

    fn write_stage(&self, out: &mut String) {
        let _ = write!(
            out,
            "## 🎯 Current Stage\n\n- **Plan month**: month {}\n- **Learning started**: {}\n",
            self.current_month, self.start_date
        );
        match &self.monthly_goals {
            Some(goals) => {
                let _ = write!(out, "- **Main goals**:\n```\n{goals}\n```\n");
            }
            None => out.push_str("- **Main goals**: not yet defined for this month\n"),
        }
    }

    fn write_stats(&self, out: &mut String) {
        let s = &self.stats;
        let _ = write!(
            out,
            "\n## 📊 Learning Statistics\n\n- **Active learning days**: {} days\n- **Videos**: {} videos/tutorials\n- **Reading**: {} articles/newsletters\n- **Thinking**: {} entries\n- **Project output**: {} related activities\n\n",
            s.active_learning_days, s.video_count, s.newsletter_count, s.braindump_count, s.project_outputs
        );
    }

    fn write_achievements(&self, out: &mut String) {
        out.push_str("## ✅ Key Achievements\n\n");
        if self.achievements.is_empty() {
            out.push_str("- Keep recording daily results to build a record of achievements\n");
            out.push_str("- Turn what you learn into project outputs or proof of skills\n");
        }
        for achievement in &self.achievements {
            let _ = writeln!(out, "**{}:**", achievement.date);
            for line in &achievement.lines {
                let _ = writeln!(out, "- {line}");
            }
            out.push('\n');
        }
        out.push('\n');
    }

    fn write_habits(&self, out: &mut String) {
        let s = &self.stats;
        let frequency = self.frequency_pct();
        out.push_str("## 📈 Learning Habits\n\n### Consistency\n\n");
        let _ = writeln!(
            out,
            "- **Frequency**: {frequency}% ({}/{} days)",
            s.active_learning_days, self.days_since_start
        );
        out.push_str(match frequency {
            80.. => "  - ✅ Very consistent, keep it up\n",
            60..=79 => "  - ⚠️ Moderately consistent, room to improve\n",
            _ => "  - ❌ Infrequent, build a more regular routine\n",
        });

        out.push_str("- **Balance**:\n");
        let total = s.video_count + s.newsletter_count + s.braindump_count;
        if total == 0 {
            out.push_str("  - ❌ No learning content recorded\n");
        } else {
            let whole = i64::try_from(total).unwrap_or(i64::MAX);
            let _ = writeln!(out, "  - Videos: {}% ({})", percent(s.video_count, whole), s.video_count);
            let _ = writeln!(
                out,
                "  - Reading: {}% ({})",
                percent(s.newsletter_count, whole),
                s.newsletter_count
            );
            let _ = writeln!(
                out,
                "  - Thinking: {}% ({})",
                percent(s.braindump_count, whole),
                s.braindump_count
            );
            if s.video_count > 0 && s.newsletter_count > 0 && s.braindump_count > 0 {
                out.push_str("  - ✅ Content types are well balanced\n");
            } else {
                if s.video_count == 0 {
                    out.push_str("  - ⚠️ No videos, add some hands-on tutorials\n");
                }
                if s.newsletter_count == 0 {
                    out.push_str("  - ⚠️ No reading, follow industry news\n");
                }
                if s.braindump_count == 0 {
                    out.push_str("  - ⚠️ No thinking notes, add reflection and summaries\n");
                }
            }
        }

        let review = self.review_pct();
        let _ = writeln!(
            out,
            "\n### Quality\n\n- **Daily reviews**: {review}% ({}/{} days)",
            s.files_with_review, s.total_files
        );
        out.push_str(match review {
            80.. => "  - ✅ Strong daily review habit\n",
            50..=79 => "  - ⚠️ Review habit needs work\n",
            _ => "  - ❌ Few daily reviews, use `learnlog daily-review`\n",
        });

        out.push_str("- **Practice**: ");
        out.push_str(match s.project_outputs {
            5.. => "plenty of project work\n  - ✅ Theory is turning into practice\n",
            1..=4 => "some project work\n  - ⚠️ Add more real projects\n",
            0 => "no project work recorded\n  - ❌ Apply what you learn to a concrete project\n",
        });
        out.push('\n');
    }

    fn write_gaps(&self, out: &mut String) {
        let s = &self.stats;
        out.push_str("## ⚠️ Gap Analysis\n\n");
        match &self.monthly_goals {
            Some(goals) => {
                let _ = write!(
                    out,
                    "- Compare progress against this month's goals:\n```\n{goals}\n```\n"
                );
            }
            None => out.push_str("- Goals for the current stage are unclear, define concrete goals for this month\n"),
        }

        out.push_str("\n## 🚀 Recommendations\n\n### Based on your habits\n\n");
        let frequency = self.frequency_pct();
        if frequency < 60 {
            let _ = write!(
                out,
                "- **Study more often**: current frequency is {frequency}%:\n  - Set a fixed daily study slot\n  - Start each day with `learnlog daily-start`\n  - Keep the streak going even on short days\n\n"
            );
        }
        if s.video_count < 3 {
            out.push_str("- **More videos**: watch 2-3 technical videos or tutorials a week\n");
        }
        if s.newsletter_count < 5 {
            out.push_str("- **More reading**: subscribe to AI and tech newsletters\n");
        }
        if s.braindump_count < s.active_learning_days {
            out.push_str("- **Think deeper**: after each session, note in braindump:\n  - what was new\n  - how it connects to what you knew\n  - where you could apply it\n\n");
        }
        if s.project_outputs < 2 {
            out.push_str("- **More practice**: turn learning into output:\n  - build a small demo or MVP\n  - write a blog post or summary\n  - contribute to open source\n\n");
        }
        let review = self.review_pct();
        if review < 80 {
            let _ = write!(
                out,
                "- **Review daily**: review completion is {review}%:\n  - run `learnlog daily-review` at the end of each day\n  - look back on what worked and what did not\n  - plan tomorrow's focus\n\n"
            );
        }

        out.push_str("### Next steps\n\n");
        out.push_str("- Run `learnlog milestone` weekly to watch your habits\n");
        out.push_str("- Adjust strategy and time allocation based on the results\n");
        out.push_str("- Find study partners or a community for feedback\n");
        out.push_str("- Set concrete monthly and weekly goals and track them\n");
    }
}

impl Report for MilestoneReport {
    fn to_markdown(&self) -> String {
        let mut out = format!("# Milestone Report - {}\n\n", self.date);
        self.write_stage(&mut out);
        self.write_stats(&mut out);
        self.write_achievements(&mut out);
        self.write_habits(&mut out);
        self.write_gaps(&mut out);
        out
    }
}

#[cfg(test)]
#[path = "../tests/milestone.rs"]
mod tests;
