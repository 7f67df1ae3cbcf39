//! learnlog: a markdown learning journal organised in weekly folders.
//!
//! Daily files carry named `## section` blocks. The [`store`] module reads and
//! rewrites those blocks, and the [`reports`] built on top of it summarise a day,
//! a week, the progress against a plan, or material for social posts.
#![allow(clippy::multiple_crate_versions)]

pub mod calendar;
pub mod commands;
pub mod config;
pub mod error;
pub mod formats;
pub mod journal;
pub mod reports;
pub mod section;
pub mod store;
pub mod templates;
