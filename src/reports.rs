//! Reports derived from the journal corpus.
//!
//! Each report gathers statistics with the section store and renders them as
//! markdown. The milestone and insight reports can also be emitted as JSON, in
//! which case the gathered data is serialised as-is.

pub mod daily;
pub mod insight;
pub mod milestone;
pub mod weekly;

use crate::error::Result;
use clap::ValueEnum;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
/// How a report is written out.
pub enum OutputFormat {
    /// Human-readable markdown document.
    #[default]
    Markdown,
    /// Pretty-printed JSON of the report data.
    Json,
}

/// A report that can be rendered as markdown or serialised as JSON.
pub trait Report: Serialize {
    /// Markdown rendering of the report.
    fn to_markdown(&self) -> String;

    /// Renders the report in `format`.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialisation fails.
    fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Markdown => Ok(self.to_markdown()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

/// `part * 100 / whole` rounded down, 0 when `whole` is not positive.
pub(crate) fn percent(part: usize, whole: i64) -> i64 {
    if whole <= 0 {
        return 0;
    }
    i64::try_from(part).unwrap_or(i64::MAX).saturating_mul(100) / whole
}

/// Lines of `text` that are neither blank nor `=== 2025-...` date separators.
pub(crate) fn content_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('='))
}

/// Whether `line` mentions any of `keywords`, compared after Unicode lowercasing.
pub(crate) fn mentions_any(line: &str, keywords: &[&str]) -> bool {
    let lowered = line.to_lowercase();
    keywords
        .iter()
        .any(|keyword| lowered.contains(&keyword.to_lowercase()))
}
