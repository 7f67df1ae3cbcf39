//! Markdown format implementation for level-two ATX headings.
//!
//! Journal sections are introduced by `## name` on a line of its own. Any line
//! starting with `## ` followed by a word character closes the previous
//! section, which means a quoted `## heading` inside a body is read as a new
//! section.

use crate::formats::Format;

const MARKER: &str = "## ";

/// Level-two ATX headings (`## name`).
pub struct MarkdownFormat;

fn strip_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

impl Format for MarkdownFormat {
    fn is_boundary(&self, line: &str) -> bool {
        strip_cr(line)
            .strip_prefix(MARKER)
            .and_then(|rest| rest.chars().next())
            .is_some_and(|c| c.is_alphanumeric() || c == '_')
    }

    fn heading_name<'a>(&self, line: &'a str) -> Option<&'a str> {
        if self.is_boundary(line) {
            strip_cr(line).strip_prefix(MARKER).map(str::trim_end)
        } else {
            None
        }
    }

    fn is_heading_for(&self, line: &str, name: &str) -> bool {
        strip_cr(line).strip_prefix(MARKER) == Some(name)
    }

    fn heading(&self, name: &str) -> String {
        format!("{MARKER}{name}")
    }
}
