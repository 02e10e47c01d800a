//! Narrow parsed records to a date range.
//!
//! # Example
//!
//! ```
//! use chatlens::core::filter::{FilterConfig, apply_filters};
//!
//! # fn main() -> chatlens::Result<()> {
//! let records = chatlens::parse(
//!     "[01/01/24, 9:00:00AM] Alice: Old\n\
//!      [15/06/24, 9:00:00AM] Alice: New",
//! );
//!
//! let config = FilterConfig::new()
//!     .with_date_from("2024-06-01")?
//!     .with_date_to("2024-12-31")?;
//!
//! let filtered = apply_filters(records, &config);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].body(), Some("New"));
//! # Ok(())
//! # }
//! ```
//!
//! Records without a timestamp are **excluded** whenever a bound is set.

use chrono::NaiveDate;

use crate::error::{ChatlensError, Result};
use crate::record::MessageRecord;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive date bounds applied before analysis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Include only records on or after this day.
    pub after: Option<NaiveDate>,

    /// Include only records on or before this day.
    pub before: Option<NaiveDate>,
}

impl FilterConfig {
    /// Creates an empty filter; all records pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the first day to include, as `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the date does not parse.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self> {
        self.after = Some(parse_date(date_str)?);
        Ok(self)
    }

    /// Sets the last day to include, as `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the date does not parse.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self> {
        self.before = Some(parse_date(date_str)?);
        Ok(self)
    }

    /// Sets the first day to include.
    #[must_use]
    pub fn with_after(mut self, date: NaiveDate) -> Self {
        self.after = Some(date);
        self
    }

    /// Sets the last day to include.
    #[must_use]
    pub fn with_before(mut self, date: NaiveDate) -> Self {
        self.before = Some(date);
        self
    }

    /// Returns `true` if any bound is set.
    pub fn is_active(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if `record` passes the bounds.
    pub fn matches(&self, record: &MessageRecord) -> bool {
        if !self.is_active() {
            return true;
        }
        let Some(ts) = record.timestamp() else {
            return false;
        };
        let day = ts.date();
        !self.after.is_some_and(|after| day < after)
            && !self.before.is_some_and(|before| day > before)
    }
}

fn parse_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT)
        .map_err(|_| ChatlensError::invalid_date(date_str))
}

/// Keeps the records that pass `config`, in their original order.
pub fn apply_filters(records: Vec<MessageRecord>, config: &FilterConfig) -> Vec<MessageRecord> {
    if !config.is_active() {
        return records;
    }

    records.into_iter().filter(|r| config.matches(r)).collect()
}
