//! Reading and rewriting named sections of a journal document.
//!
//! Every function here is pure over the document text: sections are located by
//! a line scan on each call and rewrites return a new string. Missing sections
//! are reported as `None` (or zero counts) rather than errors.
//!
//! When a heading appears more than once, reads see the first occurrence and
//! [`remove`] deletes all of them, so [`replace`] always leaves exactly one.

use crate::formats::markdown::MarkdownFormat;
use crate::formats::Format;
use crate::section::{split_lines, trimmed_body, SectionKind};
use regex::{Regex, RegexBuilder};
use serde::Serialize;
use std::sync::LazyLock;

static LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link pattern is valid")
});

/// Heading line index and exclusive body end of every heading for `name`.
fn locate<F: Format>(lines: &[&str], name: &str, format: &F) -> Vec<(usize, usize)> {
    let mut found = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        if format.is_heading_for(lines[i], name) {
            let end = lines[i + 1..]
                .iter()
                .position(|l| format.is_boundary(l))
                .map_or(lines.len(), |offset| i + 1 + offset);
            found.push((i, end));
            i = end;
        } else {
            i += 1;
        }
    }
    found
}

#[must_use]
/// Body of the first `## name` section, or `None` when the heading is missing
/// or its body holds only blank lines.
pub fn extract(doc: &str, name: &str) -> Option<String> {
    extract_with(doc, name, &MarkdownFormat)
}

#[must_use]
/// [`extract`] for an arbitrary heading format.
pub fn extract_with<F: Format>(doc: &str, name: &str, format: &F) -> Option<String> {
    let lines = split_lines(doc);
    let (heading, end) = *locate(&lines, name, format).first()?;
    let body = trimmed_body(&lines[heading + 1..end]);
    if body.is_empty() {
        None
    } else {
        Some(body)
    }
}

#[must_use]
/// Present standard sections, in [`SectionKind::ALL`] order.
pub fn extract_all(doc: &str) -> Vec<(SectionKind, String)> {
    SectionKind::ALL
        .into_iter()
        .filter_map(|kind| extract(doc, kind.as_str()).map(|body| (kind, body)))
        .collect()
}

#[must_use]
/// Whether `name` exists with a non-blank body.
pub fn has_section(doc: &str, name: &str) -> bool {
    extract(doc, name).is_some()
}

#[must_use]
/// Number of list items (lines starting with `-`) in the section.
pub fn count_items(doc: &str, name: &str) -> usize {
    extract(doc, name).map_or(0, |body| {
        body.lines()
            .filter(|line| line.trim_start().starts_with('-'))
            .count()
    })
}

#[must_use]
/// Checkbox tally of the section as `(total, completed)`.
pub fn extract_checkbox_items(doc: &str, name: &str) -> (usize, usize) {
    let Some(body) = extract(doc, name) else {
        return (0, 0);
    };
    body.lines()
        .map(str::trim)
        .filter(|line| line.starts_with("- ["))
        .fold((0, 0), |(total, done), line| {
            let checked = line.starts_with("- [x]") || line.starts_with("- [X]");
            (total + 1, done + usize::from(checked))
        })
}

#[must_use]
/// Deletes every `## name` heading with its body, then squeezes runs of blank
/// lines down to one. Documents without the heading come back unchanged.
pub fn remove(doc: &str, name: &str) -> String {
    remove_with(doc, name, &MarkdownFormat)
}

#[must_use]
/// [`remove`] for an arbitrary heading format.
pub fn remove_with<F: Format>(doc: &str, name: &str, format: &F) -> String {
    let lines = split_lines(doc);
    let spans = locate(&lines, name, format);
    if spans.is_empty() {
        return doc.to_string();
    }

    let mut kept = Vec::with_capacity(lines.len());
    let mut spans = spans.into_iter().peekable();
    for (i, line) in lines.iter().enumerate() {
        while spans.peek().is_some_and(|&(_, end)| end <= i) {
            spans.next();
        }
        let inside = spans.peek().is_some_and(|&(start, end)| (start..end).contains(&i));
        if !inside {
            kept.push(*line);
        }
    }
    collapse_blank_runs(&kept)
}

fn collapse_blank_runs(lines: &[&str]) -> String {
    let mut out = Vec::with_capacity(lines.len());
    let mut prev_blank = false;
    for line in lines {
        let blank = line.trim().is_empty();
        if !(blank && prev_blank) {
            out.push(*line);
        }
        prev_blank = blank;
    }
    out.join("\n")
}

#[must_use]
/// Removes `name` and appends it again at the end with `new_content` as body.
///
/// The section always moves to the end of the document: report generators rely
/// on `review` being last.
pub fn replace(doc: &str, name: &str, new_content: &str) -> String {
    replace_with(doc, name, new_content, &MarkdownFormat)
}

#[must_use]
/// [`replace`] for an arbitrary heading format.
pub fn replace_with<F: Format>(doc: &str, name: &str, new_content: &str, format: &F) -> String {
    let mut out = remove_with(doc, name, format);
    out.push('\n');
    out.push_str(&format.heading(name));
    out.push_str("\n\n");
    out.push_str(new_content);
    out.push('\n');
    out
}

#[must_use]
/// Markdown links in `text` as `(label, url)` pairs, in order.
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    LINK.captures_iter(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

#[must_use]
/// Case-insensitive occurrence count of each keyword; zero counts are left out.
pub fn count_keywords(text: &str, keywords: &[&str]) -> Vec<(String, usize)> {
    keywords
        .iter()
        .filter_map(|keyword| {
            let count = count_occurrences(text, keyword);
            (count > 0).then(|| ((*keyword).to_string(), count))
        })
        .collect()
}

#[must_use]
/// Case-insensitive count of non-overlapping occurrences of `needle`.
pub fn count_occurrences(text: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    RegexBuilder::new(&regex::escape(needle))
        .case_insensitive(true)
        .build()
        .map_or(0, |re| re.find_iter(text).count())
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// Size statistics for one standard section.
pub struct SectionSummary {
    /// Which section this describes.
    pub kind: SectionKind,
    /// Whether the section has a non-blank body.
    pub exists: bool,
    /// Whitespace-separated words in the body.
    pub word_count: usize,
    /// Non-blank body lines.
    pub line_count: usize,
    /// List items, as counted by [`count_items`].
    pub item_count: usize,
    /// First body line, cut to 100 characters.
    pub first_line: String,
}

#[must_use]
/// Summary of every standard section, present or not.
pub fn summarize(doc: &str) -> Vec<SectionSummary> {
    SectionKind::ALL
        .into_iter()
        .map(|kind| {
            let Some(body) = extract(doc, kind.as_str()) else {
                return SectionSummary {
                    kind,
                    exists: false,
                    word_count: 0,
                    line_count: 0,
                    item_count: 0,
                    first_line: String::new(),
                };
            };
            let first = body.lines().next().unwrap_or_default();
            let first_line = if first.chars().count() > 100 {
                format!("{}...", first.chars().take(100).collect::<String>())
            } else {
                first.to_string()
            };
            SectionSummary {
                kind,
                exists: true,
                word_count: body.split_whitespace().count(),
                line_count: body.lines().filter(|l| !l.trim().is_empty()).count(),
                item_count: count_items(doc, kind.as_str()),
                first_line,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/store.rs"]
mod tests;
