//! # Chatlens
//!
//! Parse WhatsApp TXT chat exports into structured records and compute
//! per-user and group activity statistics.
//!
//! ## Overview
//!
//! An export is a sequence of lines of the form
//!
//! ```text
//! [01/02/23, 9:15:30 AM] Alice: Good morning!
//! ```
//!
//! [`parse`] turns the full text into an ordered `Vec<MessageRecord>`, one
//! per header line, with calendar fields (weekday, month, hour bucket, ...)
//! derived up front. Parsing never fails: continuation lines are dropped and
//! bad dates become `None`. The [`stats`] module then folds those records
//! into tables for a single user or the whole group.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! let records = parse(
//!     "[01/02/23, 9:15:30AM] Alice: Good morning 🌞\n\
//!      [01/02/23, 9:16:00AM] Bob: image omitted\n\
//!      [01/02/23, 11:59:59PM] Alice: night",
//! );
//!
//! let config = StatsConfig::default();
//! let totals = summary(&records, &Scope::Group, &config);
//! assert_eq!(totals.messages, 3);
//! assert_eq!(totals.media, 1);
//!
//! let report = AnalysisReport::build(&records, &Scope::user("Alice"), &config);
//! assert_eq!(report.summary.messages, 2);
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`ChatParser`], [`parse`], [`decode_lossy`](parser::decode_lossy)
//! - [`parsing`] - line-level WhatsApp helpers (header regex, timestamp format)
//! - [`record`] - [`MessageRecord`], [`TimeFields`](record::TimeFields), [`HourBucket`](record::HourBucket)
//! - [`config`] - [`ParserConfig`](config::ParserConfig), [`StatsConfig`](config::StatsConfig)
//! - [`stats`] - summary, busiest users, words, emojis, timelines, activity maps
//! - [`report`] - [`AnalysisReport`](report::AnalysisReport) bundling every statistic
//! - [`core`] - date filtering and record export (CSV, JSON, JSONL)
//! - [`format`] - [`OutputFormat`](format::OutputFormat) selection
//! - [`error`] - [`ChatlensError`], [`Result`]
//! - [`cli`], [`logging`] - binary support (feature `cli`)

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
#[cfg(feature = "cli")]
pub mod logging;
pub mod parser;
pub mod parsing;
pub mod record;
pub mod report;
pub mod stats;

pub use error::{ChatlensError, Result};
pub use parser::{ChatParser, parse};
pub use record::MessageRecord;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    pub use crate::MessageRecord;
    pub use crate::error::{ChatlensError, Result};
    pub use crate::parser::{ChatParser, parse};
    pub use crate::record::{GROUP_NOTIFICATION, HourBucket, TimeFields};

    pub use crate::config::{ParserConfig, StatsConfig, load_stopwords};

    pub use crate::core::filter::{FilterConfig, apply_filters};

    pub use crate::report::AnalysisReport;
    pub use crate::stats::{
        Scope, activity_heatmap, busy_users, cloud_words, common_emojis, daily_timeline,
        month_activity, monthly_timeline, most_common_words, resolve_scope, summary,
        user_options, week_activity,
    };

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};

    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
}
