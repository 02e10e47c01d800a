//! Command-line interface definition using clap.
//!
//! - [`Args`] - CLI argument structure
//! - [`ExportFormat`] - `--format` values, converted to
//!   [`format::OutputFormat`](crate::format::OutputFormat)
//!
//! The `*_config` methods turn parsed arguments into the library's plain
//! configuration types, so the binary itself only wires things together.
//!
//! ```rust
//! use chatlens::cli::Args;
//! use clap::Parser;
//!
//! let args = Args::parse_from([
//!     "chatlens", "chat.txt", "--user", "Alice", "--group-name", "Team",
//! ]);
//! assert_eq!(args.scope_name(), "Alice");
//! assert_eq!(args.parser_config().group_pattern.as_deref(), Some("^Team"));
//! ```

use std::path::Path;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{ParserConfig, StatsConfig, load_stopwords};
use crate::core::FilterConfig;
use crate::error::Result;
use crate::stats::GROUP_SCOPE;

/// Analyze a WhatsApp chat export: activity over time, busiest users,
/// common words and emojis.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens _chat.txt
    chatlens _chat.txt --user Alice
    chatlens _chat.txt --group-name \"Team Alfaaz\" --stopwords stop_hinglish.txt
    chatlens _chat.txt --after 2024-01-01 --json
    chatlens _chat.txt -o records.jsonl")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: String,

    /// Analyze one participant instead of the whole group
    #[arg(short, long, value_name = "NAME")]
    pub user: Option<String>,

    /// Group name; lines sent under it count as group notifications
    #[arg(long, value_name = "NAME", conflicts_with = "group_pattern")]
    pub group_name: Option<String>,

    /// Regex matched against senders to detect group notifications
    #[arg(long, value_name = "REGEX")]
    pub group_pattern: Option<String>,

    /// Whitespace-separated stopword list excluded from word counts
    #[arg(long, value_name = "FILE")]
    pub stopwords: Option<String>,

    /// Rows in the most-common-words table
    #[arg(long, value_name = "N", default_value_t = 20)]
    pub top_words: usize,

    /// Rows in the most-busy-users table (group view only)
    #[arg(long, value_name = "N", default_value_t = 5)]
    pub top_users: usize,

    /// Only analyze messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Only analyze messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Print the available --user values and exit
    #[arg(long)]
    pub list_users: bool,

    /// Print the analysis report as JSON instead of the dashboard
    #[arg(long)]
    pub json: bool,

    /// Also export the parsed records to this file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Export format (default: detected from the output extension)
    #[arg(short, long, value_enum, requires = "output")]
    pub format: Option<ExportFormat>,

    /// Enable debug logging on stderr
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Returns the requested scope selector, `Group` by default.
    pub fn scope_name(&self) -> &str {
        self.user.as_deref().unwrap_or(GROUP_SCOPE)
    }

    /// Builds the parser configuration from the group options.
    pub fn parser_config(&self) -> ParserConfig {
        match (&self.group_name, &self.group_pattern) {
            (Some(name), _) => ParserConfig::new().with_group_name(name),
            (None, Some(pattern)) => ParserConfig::new().with_group_pattern(pattern.clone()),
            (None, None) => ParserConfig::new(),
        }
    }

    /// Builds the date filter.
    ///
    /// # Errors
    ///
    /// Returns an error if `--after` or `--before` is not `YYYY-MM-DD`.
    pub fn filter_config(&self) -> Result<FilterConfig> {
        let mut config = FilterConfig::new();
        if let Some(after) = &self.after {
            config = config.with_date_from(after)?;
        }
        if let Some(before) = &self.before {
            config = config.with_date_to(before)?;
        }
        Ok(config)
    }

    /// Builds the statistics configuration, reading the stopword file if
    /// one was given.
    ///
    /// # Errors
    ///
    /// Returns an error if the stopword file cannot be read.
    pub fn stats_config(&self) -> Result<StatsConfig> {
        let mut config = StatsConfig::new()
            .with_top_words(self.top_words)
            .with_top_users(self.top_users);
        if let Some(path) = &self.stopwords {
            config.stopwords = load_stopwords(Path::new(path))?;
        }
        Ok(config)
    }

    /// Resolves the export target, if `--output` was given.
    ///
    /// # Errors
    ///
    /// Returns an error if no `--format` was given and the output extension
    /// is not recognized.
    pub fn export_target(&self) -> Result<Option<(String, crate::format::OutputFormat)>> {
        let Some(path) = &self.output else {
            return Ok(None);
        };
        let format = match self.format {
            Some(format) => format.into(),
            None => crate::format::OutputFormat::from_path(path)?,
        };
        Ok(Some((path.clone(), format)))
    }
}

/// `--format` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Semicolon-delimited table
    #[default]
    Csv,

    /// JSON array of records
    Json,

    /// One JSON record per line
    #[value(alias = "ndjson")]
    Jsonl,
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::format::OutputFormat::from(*self))
    }
}

impl From<ExportFormat> for crate::format::OutputFormat {
    fn from(format: ExportFormat) -> crate::format::OutputFormat {
        match format {
            ExportFormat::Csv => crate::format::OutputFormat::Csv,
            ExportFormat::Json => crate::format::OutputFormat::Json,
            ExportFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}
