//! learnlog: keep a weekly markdown learning journal and report on it.
#![allow(clippy::multiple_crate_versions)]

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use learnlog::commands::{self, SectionAction};
use learnlog::config::Config;
use learnlog::error::JournalError;
use learnlog::journal::Journal;
use learnlog::reports::insight::{InsightOptions, InsightRange};
use learnlog::reports::OutputFormat;
use learnlog::templates::Platform;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "learnlog")]
#[command(about = "Weekly markdown learning journal", long_about = None)]
struct Args {
    /// Journal root directory
    #[arg(long, global = true, default_value = ".", value_name = "DIR")]
    root: PathBuf,

    /// Reference date instead of today
    #[arg(long, global = true, value_name = "YYYY-MM-DD")]
    date: Option<String>,

    /// Log progress to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create this week's folder
    WeekStart,
    /// Create today's journal file from the template
    DailyStart,
    /// Add or refresh the review section of today's journal
    DailyReview,
    /// Write the weekly review for this week
    WeekReview,
    /// Progress report against the learning plan
    Milestone {
        /// Plan month to report on, instead of the computed one
        #[arg(long)]
        month: Option<u32>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
        format: OutputFormat,
        /// Write the report to this file instead of stdout
        #[arg(long, value_name = "PATH")]
        save: Option<PathBuf>,
    },
    /// Social media material mined from recent entries
    Insight {
        /// Analyse the last N days
        #[arg(long, conflicts_with_all = ["weeks", "all"])]
        days: Option<i64>,
        /// Analyse the last N weeks
        #[arg(long, conflicts_with = "all")]
        weeks: Option<i64>,
        /// Analyse every entry
        #[arg(long)]
        all: bool,
        /// Keep only lines mentioning this topic
        #[arg(long)]
        topic: Option<String>,
        /// Tailor suggestions to one platform
        #[arg(long, value_enum)]
        platform: Option<Platform>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
        format: OutputFormat,
        /// Write the report to this file instead of stdout
        #[arg(long, value_name = "PATH")]
        save: Option<PathBuf>,
        /// Include the AI analysis section
        #[arg(long)]
        ai_analysis: bool,
    },
    /// Print, remove or replace one section of a markdown file, or outline it
    Section {
        /// Markdown file to operate on
        file: PathBuf,
        /// Section name, as written after `## `; omit to outline the file
        name: Option<String>,
        /// Delete the section
        #[arg(long, conflicts_with = "set", requires = "name")]
        remove: bool,
        /// Replace the section body with this text
        #[arg(long, value_name = "TEXT", requires = "name")]
        set: Option<String>,
    },
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

fn reference_date(arg: Option<&str>) -> Result<NaiveDate, JournalError> {
    match arg {
        Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map_err(|_| JournalError::InvalidDate(text.to_string())),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let cfg = Config::load(&args.root);
    let journal = Journal::new(&args.root, &cfg);
    let date = reference_date(args.date.as_deref())?;
    let mut stdout = io::stdout().lock();
    tracing::debug!(root = %args.root.display(), %date, "starting");

    match args.command {
        Command::WeekStart => commands::week_start(&journal, date, &mut stdout)
            .context("Failed to create weekly folder"),
        Command::DailyStart => commands::daily_start(&journal, date, &mut stdout)
            .context("Failed to create daily file"),
        Command::DailyReview => commands::daily_review(&journal, date, &mut stdout)
            .context("Failed to add daily review"),
        Command::WeekReview => commands::week_review(&journal, date, &mut stdout)
            .context("Failed to generate weekly review"),
        Command::Milestone {
            month,
            format,
            save,
        } => commands::milestone(
            &journal,
            date,
            month,
            cfg.start_date(),
            format,
            save.as_deref(),
            &mut stdout,
        )
        .context("Failed to generate milestone report"),
        Command::Insight {
            days,
            weeks,
            all,
            topic,
            platform,
            format,
            save,
            ai_analysis,
        } => {
            let range = match (days, weeks, all) {
                (_, _, true) => InsightRange::All,
                (_, Some(n), _) => InsightRange::Weeks(n),
                (Some(n), _, _) => InsightRange::Days(n),
                (None, None, false) => InsightRange::Days(cfg.insight_days),
            };
            let options = InsightOptions {
                range,
                topic,
                platform,
                ai_analysis,
            };
            commands::insight(&journal, date, &options, format, save.as_deref(), &mut stdout)
                .context("Failed to generate insight report")
        }
        Command::Section {
            file,
            name,
            remove,
            set,
        } => {
            let Some(name) = name else {
                return commands::outline(&journal, &file, &mut stdout)
                    .with_context(|| format!("Failed to outline {}", file.display()));
            };
            let action = match (remove, set) {
                (true, _) => SectionAction::Remove,
                (false, Some(body)) => SectionAction::Set(body),
                (false, None) => SectionAction::Show,
            };
            commands::section(&journal, &file, &name, &action, &mut stdout)
                .with_context(|| format!("Failed to edit section '{name}'"))
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            if let Some(hint) = err.downcast_ref::<JournalError>().and_then(JournalError::hint) {
                eprintln!("{hint}");
            }
            ExitCode::FAILURE
        }
    }
}
