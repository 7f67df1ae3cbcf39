//! Weekly review: one `week_review.md` per week folder, collecting the daily
//! sections of that week under per-day headings.

use crate::calendar;
use crate::error::{JournalError, Result};
use crate::journal::Journal;
use crate::section::SectionKind;
use crate::store;
use crate::templates;
use chrono::NaiveDate;
use std::fmt::Write;
use std::path::PathBuf;

/// Sections copied into the weekly review, with the label each gets.
const SECTION_TITLES: [(SectionKind, &str); 5] = [
    (SectionKind::Video, "Videos/Learning:"),
    (SectionKind::Newsletter, "Newsletter/Reading:"),
    (SectionKind::Braindump, "Ideas/Thoughts:"),
    (SectionKind::Output, "Learning Output:"),
    (SectionKind::Review, "Daily Review:"),
];

/// The entries of one daily file that made it into the review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayEntry {
    /// Date parsed from the file name.
    pub date: NaiveDate,
    /// Cleaned section bodies, in [`SectionKind::ALL`] order.
    pub sections: Vec<(SectionKind, String)>,
}

/// All daily entries of one week.
#[derive(Debug, Clone)]
pub struct WeeklyReview {
    /// `YYYY_MMDD-MMDD`.
    pub folder_name: String,
    /// First day of the week.
    pub monday: NaiveDate,
    /// Last day of the week.
    pub sunday: NaiveDate,
    /// Daily files found in the folder, sorted by date.
    pub days: Vec<DayEntry>,
    /// Daily files that were looked at, for progress output.
    pub files: Vec<PathBuf>,
}

/// Drops blank lines, `=== 2...` date separators and the review placeholder
/// comment.
#[must_use]
pub fn clean_section_content(content: &str) -> String {
    content
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !(trimmed.is_empty()
                || trimmed.starts_with("=== 2")
                || trimmed.starts_with("<!-- Review will be added"))
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

impl WeeklyReview {
    /// Reads every daily file in the week containing `date`.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::MissingWeekFolder`] if the week folder has not
    /// been created.
    pub fn collect(journal: &Journal, date: NaiveDate) -> Result<Self> {
        let (monday, sunday) = calendar::week_range(date);
        let folder = journal.week_folder(date);
        if !folder.is_dir() {
            return Err(JournalError::MissingWeekFolder(folder));
        }

        let files = journal.daily_files_in(&folder);
        let days = files
            .iter()
            .filter_map(|path| {
                let date = calendar::parse_filename_date(path.file_name()?.to_str()?)?;
                let doc = journal.read_document(path)?;
                tracing::debug!(path = %path.display(), "collected daily file");
                let sections = store::extract_all(&doc)
                    .into_iter()
                    .map(|(kind, body)| (kind, clean_section_content(&body)))
                    .filter(|(_, body)| !body.is_empty())
                    .collect();
                Some(DayEntry { date, sections })
            })
            .collect();

        Ok(Self {
            folder_name: calendar::week_folder_name(monday, sunday),
            monday,
            sunday,
            days,
            files,
        })
    }

    fn days_with(&self, kind: SectionKind) -> usize {
        self.days
            .iter()
            .filter(|day| day.sections.iter().any(|(k, _)| *k == kind))
            .count()
    }

    #[must_use]
    /// The full `week_review.md` document.
    pub fn to_markdown(&self) -> String {
        let mut out = templates::week_review_header(self.monday, self.sunday, &self.folder_name);

        let _ = write!(
            out,
            "## Summary\n\n- **Days journaled**: {}/7\n- **Video days**: {}\n- **Reading days**: {}\n- **Thinking days**: {}\n- **Output days**: {}\n\n",
            self.days.len(),
            self.days_with(SectionKind::Video),
            self.days_with(SectionKind::Newsletter),
            self.days_with(SectionKind::Braindump),
            self.days_with(SectionKind::Output),
        );

        out.push_str("## Daily Summaries\n\n");
        if self.days.is_empty() {
            out.push_str("No daily journal entries found for this week.\n\n");
        }
        for day in &self.days {
            let _ = write!(out, "### {}\n\n", calendar::display_date(day.date));
            for (kind, title) in SECTION_TITLES {
                if let Some((_, body)) = day.sections.iter().find(|(k, _)| *k == kind) {
                    let _ = write!(out, "**{title}**\n{body}\n\n");
                }
            }
            out.push_str("---\n\n");
        }

        out.push_str(templates::WEEK_REVIEW_FOOTER);
        out
    }
}

#[cfg(test)]
#[path = "../tests/weekly_review.rs"]
mod tests;
