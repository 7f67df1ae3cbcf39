//! Format trait and implementations for different heading conventions.
//!
//! This module defines the `Format` trait which abstracts over how a document
//! marks the start of a section, so the section scanner and the store never
//! hard-code the markdown syntax themselves.

pub mod markdown;

/// Heading syntax used to split a document into sections.
pub trait Format {
    /// Whether `line` starts a new section, ending whatever section precedes it.
    fn is_boundary(&self, line: &str) -> bool;
    /// Heading text of a boundary line, `None` for any other line.
    fn heading_name<'a>(&self, line: &'a str) -> Option<&'a str>;
    /// Whether `line` is exactly the heading of the section called `name`.
    fn is_heading_for(&self, line: &str, name: &str) -> bool;
    /// Renders the heading line for `name`.
    fn heading(&self, name: &str) -> String;
}
