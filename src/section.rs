//! Section representation for journal documents.
//!
//! A section is a top-level division of a daily file introduced by a `## name`
//! heading. Sections are never stored: every read or rewrite re-scans the
//! document text, so a [`Section`] is a transient view with line coordinates
//! pointing back into the text it was scanned from.

use crate::formats::markdown::MarkdownFormat;
use crate::formats::Format;
use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Named division of a document with the line span it occupies.
pub struct Section {
    /// Heading text after the `## ` marker.
    pub name: String,
    /// Body text between the heading and the next boundary, blank edges removed.
    pub content: String,
    /// Index of the heading line (0-based).
    pub line_start: usize,
    /// Index of the last body line, or the heading line for an empty section.
    pub line_end: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// The standard sections a daily file is made of.
pub enum SectionKind {
    /// Videos and tutorials watched.
    Video,
    /// Newsletters and articles read.
    Newsletter,
    /// Free-form thoughts.
    Braindump,
    /// Things produced: notes, demos, projects.
    Output,
    /// Generated daily review.
    Review,
    /// Pending tasks.
    Todo,
    /// Long-running side project log.
    WayToAce,
}

impl SectionKind {
    /// Every standard section, in the order reports walk them.
    pub const ALL: [SectionKind; 7] = [
        SectionKind::Video,
        SectionKind::Newsletter,
        SectionKind::Braindump,
        SectionKind::Output,
        SectionKind::Review,
        SectionKind::Todo,
        SectionKind::WayToAce,
    ];

    #[must_use]
    /// Heading text as written in the journal.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Video => "video",
            SectionKind::Newsletter => "newsletter",
            SectionKind::Braindump => "braindump",
            SectionKind::Output => "output",
            SectionKind::Review => "review",
            SectionKind::Todo => "TODO",
            SectionKind::WayToAce => "WayToAce",
        }
    }

    #[must_use]
    /// Looks up a standard section by its exact heading text.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl Serialize for SectionKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A heading line and the half-open range of body lines that follow it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Span {
    pub heading: usize,
    pub body_end: usize,
}

/// Splits a document into lines, keeping a trailing empty line when the text
/// ends with a newline so that joining with `\n` restores the input.
pub(crate) fn split_lines(doc: &str) -> Vec<&str> {
    doc.split('\n').collect()
}

/// Single pass over the lines, recording every boundary heading with the
/// extent of its body.
pub(crate) fn scan_spans<F: Format>(lines: &[&str], format: &F) -> Vec<Span> {
    let mut spans: Vec<Span> = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        if format.is_boundary(line) {
            if let Some(open) = spans.last_mut() {
                open.body_end = i;
            }
            spans.push(Span {
                heading: i,
                body_end: lines.len(),
            });
        }
    }
    spans
}

/// Joins body lines with blank lines at either edge dropped.
pub(crate) fn trimmed_body(lines: &[&str]) -> String {
    let first = lines.iter().position(|l| !l.trim().is_empty());
    let last = lines.iter().rposition(|l| !l.trim().is_empty());
    match (first, last) {
        (Some(first), Some(last)) => lines[first..=last]
            .iter()
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .collect::<Vec<_>>()
            .join("\n"),
        _ => String::new(),
    }
}

#[must_use]
/// Lists every `## word` section in document order.
pub fn sections(doc: &str) -> Vec<Section> {
    sections_with(doc, &MarkdownFormat)
}

#[must_use]
/// Lists every section recognised by `format`, in document order.
pub fn sections_with<F: Format>(doc: &str, format: &F) -> Vec<Section> {
    let lines = split_lines(doc);
    scan_spans(&lines, format)
        .into_iter()
        .map(|span| {
            let name = format
                .heading_name(lines[span.heading])
                .unwrap_or_default()
                .to_string();
            let body = &lines[span.heading + 1..span.body_end];
            let line_end = lines[..span.body_end]
                .iter()
                .rposition(|l| !l.trim().is_empty())
                .filter(|&i| i > span.heading)
                .unwrap_or(span.heading);
            Section {
                name,
                content: trimmed_body(body),
                line_start: span.heading,
                line_end,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;
