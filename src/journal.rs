//! On-disk layout of a journal and the document I/O around it.
//!
//! A journal root holds `weeks/<YYYY_MMDD-MMDD>/<YYYY_MM_DD>.md` daily files,
//! one `week_review.md` per week folder and an `objective.md` plan. Reads are
//! forgiving: a missing or undecodable file comes back as `None` so corpus-wide
//! scans can skip it and keep going.

use crate::calendar;
use crate::config::Config;
use crate::error::Result;
use chrono::NaiveDate;
use encoding_rs::{Encoding, GBK};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Name of the generated summary inside each week folder.
pub const WEEK_REVIEW_FILE: &str = "week_review.md";

/// Resolves journal paths and reads or writes the documents under them.
pub struct Journal {
    root: PathBuf,
    weeks_dir: PathBuf,
    objective_file: PathBuf,
    legacy_encoding: &'static Encoding,
}

/// Whether `name` looks like `YYYY_MM_DD.md`.
#[must_use]
pub fn is_daily_filename(name: &str) -> bool {
    let bytes = name.as_bytes();
    bytes.len() == 13
        && name.ends_with(".md")
        && bytes[..10].iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'_',
            _ => b.is_ascii_digit(),
        })
}

impl Journal {
    #[must_use]
    /// Journal rooted at `root`, laid out according to `config`.
    pub fn new(root: impl Into<PathBuf>, config: &Config) -> Self {
        let root = root.into();
        let legacy_encoding =
            Encoding::for_label(config.legacy_encoding.as_bytes()).unwrap_or(GBK);
        Self {
            weeks_dir: root.join(&config.weeks_dir),
            objective_file: root.join(&config.objective_file),
            root,
            legacy_encoding,
        }
    }

    #[must_use]
    /// The journal root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    /// Directory holding every week folder.
    pub fn weeks_dir(&self) -> &Path {
        &self.weeks_dir
    }

    #[must_use]
    /// The plan document read by the milestone report.
    pub fn objective_file(&self) -> &Path {
        &self.objective_file
    }

    #[must_use]
    /// Folder of the week containing `date`.
    pub fn week_folder(&self, date: NaiveDate) -> PathBuf {
        self.weeks_dir.join(calendar::week_folder_for(date))
    }

    #[must_use]
    /// Daily file for `date`, inside its week folder.
    pub fn daily_file(&self, date: NaiveDate) -> PathBuf {
        self.week_folder(date).join(calendar::daily_filename(date))
    }

    #[must_use]
    /// Weekly summary file of the week containing `date`.
    pub fn week_review_file(&self, date: NaiveDate) -> PathBuf {
        self.week_folder(date).join(WEEK_REVIEW_FILE)
    }

    #[must_use]
    /// `path` relative to the journal root, for messages.
    pub fn relative(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }

    #[must_use]
    /// Every daily file under the weeks directory, sorted by file name.
    pub fn find_daily_files(&self) -> Vec<PathBuf> {
        if !self.weeks_dir.is_dir() {
            return Vec::new();
        }
        let mut files: Vec<PathBuf> = WalkDir::new(&self.weeks_dir)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| entry.file_name().to_str().is_some_and(is_daily_filename))
            .map(walkdir::DirEntry::into_path)
            .collect();
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()).then_with(|| a.cmp(b)));
        files
    }

    #[must_use]
    /// Daily files directly inside one week folder, sorted.
    pub fn daily_files_in(&self, folder: &Path) -> Vec<PathBuf> {
        let Ok(entries) = fs::read_dir(folder) else {
            return Vec::new();
        };
        let mut files: Vec<PathBuf> = entries
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(is_daily_filename)
            })
            .collect();
        files.sort();
        files
    }

    #[must_use]
    /// Week folders (`YYYY_MMDD-MMDD`-shaped directories), sorted by name.
    pub fn find_week_folders(&self) -> Vec<PathBuf> {
        let Ok(entries) = fs::read_dir(&self.weeks_dir) else {
            return Vec::new();
        };
        let mut folders: Vec<PathBuf> = entries
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.matches('_').count() == 1 && n.contains('-'))
            })
            .collect();
        folders.sort();
        folders
    }

    #[must_use]
    /// Date of the earliest daily file, if any parses.
    pub fn earliest_daily_date(&self) -> Option<NaiveDate> {
        self.find_daily_files()
            .iter()
            .filter_map(|path| path.file_name()?.to_str())
            .find_map(calendar::parse_filename_date)
    }

    #[must_use]
    /// Reads a document as UTF-8, falling back once to the legacy encoding.
    ///
    /// Returns `None` when the file is missing or undecodable either way.
    pub fn read_document(&self, path: &Path) -> Option<String> {
        let bytes = fs::read(path).ok()?;
        match String::from_utf8(bytes) {
            Ok(text) => Some(text),
            Err(err) => {
                let bytes = err.into_bytes();
                let decoded = self
                    .legacy_encoding
                    .decode_without_bom_handling_and_without_replacement(&bytes)
                    .map(std::borrow::Cow::into_owned);
                if decoded.is_none() {
                    tracing::warn!(
                        path = %path.display(),
                        encoding = self.legacy_encoding.name(),
                        "skipping undecodable file"
                    );
                } else {
                    tracing::debug!(
                        path = %path.display(),
                        encoding = self.legacy_encoding.name(),
                        "decoded with legacy encoding"
                    );
                }
                decoded
            }
        }
    }

    /// Writes `content` as UTF-8, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be created or the write fails.
    pub fn write_document(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "wrote document");
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/journal.rs"]
mod tests;
