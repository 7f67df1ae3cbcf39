//! The operations behind each CLI subcommand.
//!
//! Commands take the journal, the reference date and a writer for their
//! progress messages, so they can be driven from tests without a terminal.

use crate::error::{JournalError, Result};
use crate::journal::Journal;
use crate::reports::daily::apply_review;
use crate::reports::insight::{Corpus, InsightOptions, InsightReport};
use crate::reports::milestone::MilestoneReport;
use crate::reports::weekly::WeeklyReview;
use crate::reports::{OutputFormat, Report};
use crate::section::{self, SectionKind};
use crate::{store, templates};
use chrono::NaiveDate;
use std::fs;
use std::io::Write;
use std::path::Path;

/// What `section` does with the named section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionAction {
    /// Print the body.
    Show,
    /// Rewrite the file without the section.
    Remove,
    /// Rewrite the file with the section replaced by this body.
    Set(String),
}

/// Creates the week folder for `date`.
///
/// # Errors
///
/// Returns an error if the folder cannot be created or output fails.
pub fn week_start(journal: &Journal, date: NaiveDate, out: &mut dyn Write) -> Result<()> {
    let folder = journal.week_folder(date);
    if folder.is_dir() {
        writeln!(out, "Weekly folder already exists: {}", journal.relative(&folder))?;
    } else {
        fs::create_dir_all(&folder)?;
        writeln!(out, "Created weekly folder: {}", journal.relative(&folder))?;
    }
    Ok(())
}

/// Creates the daily file for `date` from the template. Never overwrites.
///
/// # Errors
///
/// Returns an error if the file cannot be written or output fails.
pub fn daily_start(journal: &Journal, date: NaiveDate, out: &mut dyn Write) -> Result<()> {
    let path = journal.daily_file(date);
    if path.exists() {
        writeln!(out, "Daily file already exists: {}", journal.relative(&path))?;
        return Ok(());
    }
    journal.write_document(&path, &templates::daily_journal(date))?;
    writeln!(out, "Created daily file: {}", journal.relative(&path))?;
    Ok(())
}

/// Regenerates the `review` section of the daily file for `date`.
///
/// # Errors
///
/// Returns [`JournalError::MissingDailyFile`] if the file does not exist and
/// [`JournalError::Unreadable`] if it cannot be decoded.
pub fn daily_review(journal: &Journal, date: NaiveDate, out: &mut dyn Write) -> Result<()> {
    let path = journal.daily_file(date);
    if !path.is_file() {
        return Err(JournalError::MissingDailyFile(path));
    }
    let doc = journal
        .read_document(&path)
        .ok_or_else(|| JournalError::Unreadable(path.clone()))?;
    if store::has_section(&doc, SectionKind::Review.as_str()) {
        tracing::info!(path = %path.display(), "replacing existing review");
    }
    journal.write_document(&path, &apply_review(&doc))?;
    writeln!(out, "Daily review added to: {}", journal.relative(&path))?;
    Ok(())
}

/// Writes `week_review.md` for the week containing `date`.
///
/// # Errors
///
/// Returns [`JournalError::MissingWeekFolder`] if the week has not been
/// started, or an I/O error if the review cannot be written.
pub fn week_review(journal: &Journal, date: NaiveDate, out: &mut dyn Write) -> Result<()> {
    let review = WeeklyReview::collect(journal, date)?;
    for file in &review.files {
        writeln!(out, "Processing {}", journal.relative(file))?;
    }
    let path = journal.week_review_file(date);
    journal.write_document(&path, &review.to_markdown())?;
    writeln!(out, "Weekly review generated: {}", journal.relative(&path))?;
    Ok(())
}

/// Prints `report` or saves it to `save`.
fn emit(
    journal: &Journal,
    report: &impl Report,
    format: OutputFormat,
    save: Option<&Path>,
    out: &mut dyn Write,
) -> Result<()> {
    let rendered = report.render(format)?;
    match save {
        Some(path) => {
            journal.write_document(path, &rendered)?;
            writeln!(out, "Report saved to: {}", path.display())?;
        }
        None => writeln!(out, "{rendered}")?,
    }
    Ok(())
}

/// Builds and emits the milestone report.
///
/// # Errors
///
/// Returns an error if serialisation, saving or output fails.
pub fn milestone(
    journal: &Journal,
    date: NaiveDate,
    month: Option<u32>,
    fallback_start: NaiveDate,
    format: OutputFormat,
    save: Option<&Path>,
    out: &mut dyn Write,
) -> Result<()> {
    let report = MilestoneReport::build(journal, date, month, fallback_start);
    emit(journal, &report, format, save, out)
}

/// Builds and emits the insight report. No files in range is not an error.
///
/// # Errors
///
/// Returns an error if serialisation, saving or output fails.
pub fn insight(
    journal: &Journal,
    date: NaiveDate,
    options: &InsightOptions,
    format: OutputFormat,
    save: Option<&Path>,
    out: &mut dyn Write,
) -> Result<()> {
    let corpus = Corpus::collect(journal, date, options);
    if corpus.analyzed_files == 0 {
        writeln!(
            out,
            "No journal entries found for the {}.",
            options.range.describe()
        )?;
        return Ok(());
    }
    let report = InsightReport::build(&corpus, date, options);
    emit(journal, &report, format, save, out)
}

/// Shows, removes or replaces one section of an arbitrary markdown file.
///
/// # Errors
///
/// Returns [`JournalError::Unreadable`] if the file is missing or cannot be
/// decoded, or an I/O error if it cannot be rewritten.
pub fn section(
    journal: &Journal,
    file: &Path,
    name: &str,
    action: &SectionAction,
    out: &mut dyn Write,
) -> Result<()> {
    let doc = journal
        .read_document(file)
        .ok_or_else(|| JournalError::Unreadable(file.to_path_buf()))?;
    match action {
        SectionAction::Show => match store::extract(&doc, name) {
            Some(body) => writeln!(out, "{body}")?,
            None => writeln!(out, "No section '{name}' in {}", file.display())?,
        },
        SectionAction::Remove => {
            journal.write_document(file, &store::remove(&doc, name))?;
            writeln!(out, "Removed section '{name}' from {}", file.display())?;
        }
        SectionAction::Set(body) => {
            journal.write_document(file, &store::replace(&doc, name, body))?;
            writeln!(out, "Updated section '{name}' in {}", file.display())?;
        }
    }
    Ok(())
}

/// Prints every section of `file` with its line span, the standard sections'
/// sizes and the links the document contains.
///
/// # Errors
///
/// Returns [`JournalError::Unreadable`] if the file is missing or cannot be
/// decoded, or an I/O error if output fails.
pub fn outline(journal: &Journal, file: &Path, out: &mut dyn Write) -> Result<()> {
    let doc = journal
        .read_document(file)
        .ok_or_else(|| JournalError::Unreadable(file.to_path_buf()))?;

    for found in section::sections(&doc) {
        writeln!(
            out,
            "## {} (lines {}-{})",
            found.name,
            found.line_start + 1,
            found.line_end + 1
        )?;
    }

    let present: Vec<_> = store::summarize(&doc)
        .into_iter()
        .filter(|summary| summary.exists)
        .collect();
    if !present.is_empty() {
        writeln!(out)?;
    }
    for summary in present {
        writeln!(
            out,
            "{}: {} words, {} lines, {} items | {}",
            summary.kind, summary.word_count, summary.line_count, summary.item_count, summary.first_line
        )?;
    }

    let links = store::extract_links(&doc);
    if !links.is_empty() {
        writeln!(out, "\nLinks:")?;
        for (label, url) in links {
            writeln!(out, "- {label}: {url}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/commands.rs"]
mod tests;
