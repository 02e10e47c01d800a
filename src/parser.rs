//! Chat export parser.
//!
//! [`ChatParser`] turns the full text of an export into an ordered
//! `Vec<MessageRecord>`. Parsing is best-effort and never fails:
//!
//! - lines that are not message headers are dropped (this includes the
//!   continuation lines of multi-line messages)
//! - a header whose date does not parse still yields a record, with
//!   `timestamp` and `time` set to `None`
//! - a header without a `": "` separator yields a record with `sender` and
//!   `body` set to `None`
//!
//! # Example
//!
//! ```rust
//! use chatlens::parser::ChatParser;
//!
//! let text = "[01/02/23, 9:15:30AM] Alice: Good morning!\n\
//!             not a message line\n\
//!             [01/02/23, 11:59:59PM] Bob: Night";
//!
//! let records = ChatParser::new().parse_str(text);
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].sender(), Some("Alice"));
//! assert_eq!(records[1].time().unwrap().period.to_string(), "23-00");
//! ```

use std::fs;
use std::path::Path;

use regex::Regex;
use tracing::{debug, trace};

use crate::config::ParserConfig;
use crate::error::{ChatlensError, Result};
use crate::parsing::whatsapp::{clean_line, match_header, parse_timestamp, split_sender};
use crate::record::{GROUP_NOTIFICATION, MessageRecord};

/// Parser for WhatsApp TXT exports.
///
/// Holds only compiled patterns, so one parser can be shared across threads
/// and reused for any number of exports.
#[derive(Debug, Clone, Default)]
pub struct ChatParser {
    group_regex: Option<Regex>,
}

impl ChatParser {
    /// Creates a parser with default configuration (no group-name rewrite).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidPattern`] if the group pattern is not
    /// a valid regular expression.
    pub fn with_config(config: ParserConfig) -> Result<Self> {
        let group_regex = config
            .group_pattern
            .as_deref()
            .map(|p| Regex::new(p).map_err(|e| ChatlensError::invalid_pattern(p, e)))
            .transpose()?;

        Ok(Self { group_regex })
    }

    /// Parses the full text of an export.
    ///
    /// Lines end at `\n`, `\r\n` or a lone `\r`.
    pub fn parse_str(&self, content: &str) -> Vec<MessageRecord> {
        let mut records = Vec::new();
        let mut dropped = 0usize;

        for (segment, line) in content.split(['\n', '\r']).enumerate() {
            // the gap inside `\r\n`
            if line.is_empty() {
                continue;
            }
            match self.parse_line(line) {
                Some(record) => records.push(record),
                None => {
                    trace!(segment, "skipping non-header line");
                    dropped += 1;
                }
            }
        }

        debug!(
            records = records.len(),
            dropped,
            undated = records.iter().filter(|r| r.timestamp.is_none()).count(),
            "parsed chat export"
        );

        records
    }

    /// Parses a single line, returning `None` if it is not a message header.
    pub fn parse_line(&self, line: &str) -> Option<MessageRecord> {
        let line = clean_line(line);
        let header = match_header(&line)?;

        let (sender, body) = match split_sender(header.rest) {
            Some((sender, body)) => (Some(self.normalize_sender(sender)), Some(body.to_string())),
            None => (None, None),
        };

        Some(MessageRecord::new(
            parse_timestamp(header.datetime),
            sender,
            body,
        ))
    }

    /// Reads and parses an export file.
    ///
    /// Invalid UTF-8 sequences are dropped rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::Io`] if the file cannot be read.
    pub fn parse_file(&self, path: &Path) -> Result<Vec<MessageRecord>> {
        let bytes = fs::read(path)?;
        debug!(path = %path.display(), bytes = bytes.len(), "read chat export");
        Ok(self.parse_str(&decode_lossy(&bytes)))
    }

    fn normalize_sender(&self, sender: &str) -> String {
        match &self.group_regex {
            Some(re) if re.is_match(sender) => GROUP_NOTIFICATION.to_string(),
            _ => sender.to_string(),
        }
    }
}

/// Parses an export with the default parser.
///
/// ```rust
/// let records = chatlens::parse("[01/02/23, 12:30:00AM] Carol: image omitted");
/// assert_eq!(records[0].body(), Some("image omitted"));
/// ```
pub fn parse(content: &str) -> Vec<MessageRecord> {
    ChatParser::new().parse_str(content)
}

/// Decodes bytes as UTF-8, silently dropping invalid sequences.
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}
