//! Configuration to acknowledge journal preferences as well as set defaults.
//!
//! Specifically, we try to find a learnlog.toml in the journal root, and if present we load
//! settings from there. This provides the directory layout, the fallback start date used when
//! no daily file exists yet, the default insight window and the legacy encoding tried when a
//! file is not valid UTF-8.

use chrono::NaiveDate;
use facet::Facet;
use std::fs;
use std::path::Path;

/// File name looked up in the journal root.
pub const CONFIG_FILE: &str = "learnlog.toml";

#[derive(Facet, Clone, Debug)]
/// User preferences loaded from learnlog.toml or falling back to defaults.
pub struct Config {
    #[facet(default = "weeks".to_string())]
    /// Directory holding the week folders, relative to the journal root.
    pub weeks_dir: String,
    #[facet(default = "objective.md".to_string())]
    /// Plan document read by the milestone report.
    pub objective_file: String,
    #[facet(default = "2025-09-15".to_string())]
    /// Learning start date used before any daily file exists.
    pub default_start_date: String,
    #[facet(default = 7)]
    /// Days covered by `insight` when no range flag is given.
    pub insight_days: i64,
    #[facet(default = "gbk".to_string())]
    /// Encoding label tried when a file is not valid UTF-8.
    pub legacy_encoding: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weeks_dir: "weeks".to_string(),
            objective_file: "objective.md".to_string(),
            default_start_date: "2025-09-15".to_string(),
            insight_days: 7,
            legacy_encoding: "gbk".to_string(),
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from `<root>/learnlog.toml` if present and valid.
    pub fn load(root: &Path) -> Self {
        let path = root.join(CONFIG_FILE);
        if let Ok(contents) = fs::read_to_string(&path) {
            match facet_toml::from_str::<Self>(&contents) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "loaded configuration");
                    return config;
                }
                Err(_) => {
                    tracing::warn!(path = %path.display(), "ignoring invalid configuration");
                }
            }
        }
        Self::default()
    }

    #[must_use]
    /// The configured start date, or 2025-09-15 when it does not parse.
    pub fn start_date(&self) -> NaiveDate {
        NaiveDate::parse_from_str(&self.default_start_date, "%Y-%m-%d")
            .unwrap_or_else(|_| NaiveDate::from_ymd_opt(2025, 9, 15).unwrap_or_default())
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
