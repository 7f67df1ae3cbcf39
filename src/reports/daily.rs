//! Daily review: a `review` section summarising one day's entries.
//!
//! The review scores how many of the four inputs (video, newsletter, braindump,
//! output) were filled in, pulls a few highlights out of them and suggests what
//! to add tomorrow. It is written back into the daily file with
//! [`store::replace`], so it always ends up as the last section.

use crate::reports::{content_lines, mentions_any};
use crate::section::SectionKind;
use crate::store;
use crate::templates::INSIGHT_KEYWORDS;

/// Points awarded per filled-in input section.
const POINTS_PER_INPUT: usize = 25;

/// Outcome of scoring one day's learning habits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitAssessment {
    /// Score out of 100.
    pub score: usize,
    /// How many of the four inputs are present.
    pub diversity: usize,
    /// One line per input describing what was found.
    pub details: Vec<String>,
    /// Overall verdict line.
    pub status: &'static str,
}

/// Analyses the sections of one daily document.
pub struct DailyAnalyzer<'a> {
    doc: &'a str,
    sections: Vec<(SectionKind, String)>,
}

impl<'a> DailyAnalyzer<'a> {
    #[must_use]
    /// Extracts the standard sections of `doc`.
    pub fn new(doc: &'a str) -> Self {
        Self {
            doc,
            sections: store::extract_all(doc),
        }
    }

    fn section(&self, kind: SectionKind) -> Option<&str> {
        self.sections
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, body)| body.as_str())
    }

    #[must_use]
    /// Whether any standard section has content.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    #[must_use]
    /// Scores the day by which inputs were filled in.
    pub fn habits(&self) -> HabitAssessment {
        let mut diversity = 0;
        let mut details = Vec::new();

        if self.section(SectionKind::Video).is_some() {
            diversity += 1;
            details.push("✅ Videos: watched learning videos or tutorials".to_string());
        } else {
            details.push("⚪ Videos: no learning videos today".to_string());
        }

        if self.section(SectionKind::Newsletter).is_some() {
            diversity += 1;
            details.push("✅ Reading: kept up with industry news".to_string());
        } else {
            details.push("⚪ Reading: no reading today".to_string());
        }

        if self.section(SectionKind::Braindump).is_some() {
            diversity += 1;
            let thoughts = store::count_items(self.doc, SectionKind::Braindump.as_str());
            if thoughts >= 3 {
                details.push(format!("✅ Thinking: rich notes and insights ({thoughts} entries)"));
            } else {
                details.push(format!("⚠️ Thinking: some notes, but few ({thoughts} entries)"));
            }
        } else {
            details.push("⚪ Thinking: no notes or insights today".to_string());
        }

        if self.section(SectionKind::Output).is_some() {
            diversity += 1;
            details.push("✅ Output: produced something concrete".to_string());
        } else {
            details.push("⚪ Output: nothing produced today".to_string());
        }

        let status = match diversity {
            3.. => "🎯 **Status**: balanced day with both input and output, good habits",
            2 => "📈 **Status**: a productive day, consider filling the missing areas",
            _ => "🔄 **Status**: a light day, put more time into learning tomorrow",
        };

        HabitAssessment {
            score: diversity * POINTS_PER_INPUT,
            diversity,
            details,
            status,
        }
    }

    #[must_use]
    /// One bullet per input that has content.
    pub fn activity_summary(&self) -> String {
        let mut lines = Vec::new();
        if self.section(SectionKind::Video).is_some() {
            let videos = store::count_items(self.doc, SectionKind::Video.as_str());
            lines.push(format!("- **Videos**: watched {videos} videos or tutorials"));
        }
        if self.section(SectionKind::Newsletter).is_some() {
            let (total, done) =
                store::extract_checkbox_items(self.doc, SectionKind::Newsletter.as_str());
            lines.push(format!("- **Reading**: finished {done} of {total} reading items"));
        }
        if self.section(SectionKind::Braindump).is_some() {
            let thoughts = store::count_items(self.doc, SectionKind::Braindump.as_str());
            lines.push(format!("- **Thinking**: recorded {thoughts} thoughts and insights"));
        }
        if self.section(SectionKind::Output).is_some() {
            lines.push("- **Output**: produced concrete results and project progress".to_string());
        }
        if lines.is_empty() {
            "No learning activity recorded today".to_string()
        } else {
            lines.join("\n")
        }
    }

    #[must_use]
    /// Highlights: first video items, insight-bearing thoughts, first outputs.
    pub fn insights(&self) -> String {
        let mut out: Vec<String> = Vec::new();

        if let Some(video) = self.section(SectionKind::Video) {
            let items: Vec<&str> = video
                .lines()
                .filter(|line| line.trim_start().starts_with('-'))
                .take(3)
                .collect();
            if !items.is_empty() {
                out.push("**Video highlights:**".to_string());
                out.extend(items.into_iter().map(str::to_string));
                out.push(String::new());
            }
        }

        if let Some(braindump) = self.section(SectionKind::Braindump) {
            let key: Vec<&str> = content_lines(braindump)
                .filter(|line| mentions_any(line, INSIGHT_KEYWORDS))
                .take(3)
                .collect();
            if !key.is_empty() {
                out.push("**Key insights:**".to_string());
                out.extend(key.into_iter().map(as_bullet));
                out.push(String::new());
            }
        }

        if let Some(output) = self.section(SectionKind::Output) {
            out.push("**Results:**".to_string());
            out.extend(content_lines(output).take(3).map(as_bullet));
            out.push(String::new());
        }

        if out.is_empty() {
            "Today's entries were light; try to write down more reflection and summary.".to_string()
        } else {
            out.join("\n").trim_end().to_string()
        }
    }

    #[must_use]
    /// Suggestions for tomorrow based on what is missing or prominent.
    pub fn recommendations(&self) -> String {
        let mut out = vec!["**Suggestions for tomorrow:**".to_string()];

        if self.section(SectionKind::Video).is_none() {
            out.push("- 📹 Watch one or two technical videos or tutorials".to_string());
        }
        if self.section(SectionKind::Newsletter).is_none() {
            out.push("- 📰 Read an industry newsletter or technical article".to_string());
        }
        let braindump = self.section(SectionKind::Braindump);
        if braindump.is_none_or(|text| text.lines().count() < 3) {
            out.push("- 💭 Spend more time reflecting and write down more ideas".to_string());
        }
        let output = self.section(SectionKind::Output);
        if output.is_none() {
            out.push("- 📝 Turn what you learned into a concrete output".to_string());
        }

        if braindump.is_some_and(|text| mentions_any(text, &["product", "产品"])) {
            out.push("- 🚀 Keep deepening product thinking and user experience".to_string());
        }
        if output.is_some_and(|text| mentions_any(text, &["project", "项目", "WayToAce"])) {
            out.push("- 🎯 Keep pushing the key features of your project".to_string());
        }

        out.join("\n")
    }

    #[must_use]
    /// Body of the `review` section.
    pub fn review(&self) -> String {
        if self.is_empty() {
            return EMPTY_REVIEW.to_string();
        }
        let habits = self.habits();
        let details: Vec<String> = habits.details.iter().map(|d| format!("- {d}")).collect();
        format!(
            "**Today's learning activity:**\n\n{}\n\nHabit score ({}/100):\n{}\n\n{}\n\n**Key takeaways:**\n{}\n\n{}",
            self.activity_summary(),
            habits.score,
            details.join("\n"),
            habits.status,
            self.insights(),
            self.recommendations(),
        )
    }
}

const EMPTY_REVIEW: &str = "\
**No learning recorded today**

Things to record tomorrow:
- 📹 Learning videos you watched
- 📰 Articles and news you read
- 💭 Thoughts and insights
- 📝 Outputs and project progress";

fn as_bullet(line: &str) -> String {
    let text = line.trim().trim_start_matches("- ").trim();
    format!("- {text}")
}

#[must_use]
/// `doc` with its `review` section regenerated and moved to the end.
pub fn apply_review(doc: &str) -> String {
    let without = store::remove(doc, SectionKind::Review.as_str());
    let review = DailyAnalyzer::new(&without).review();
    store::replace(&without, SectionKind::Review.as_str(), &review)
}

#[cfg(test)]
#[path = "../tests/daily_review.rs"]
mod tests;
