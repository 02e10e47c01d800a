//! Parsed chat records.
//!
//! A [`MessageRecord`] is one header line of a chat export after parsing.
//! Calendar fields are derived exactly once, when the record is built, and
//! are carried as a single [`TimeFields`] value so they are either all
//! present or all absent.
//!
//! # Examples
//!
//! ```
//! use chatlens::MessageRecord;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 2, 1)
//!     .unwrap()
//!     .and_hms_opt(14, 5, 0)
//!     .unwrap();
//! let record = MessageRecord::new(Some(ts), Some("Alice".into()), Some("Hi".into()));
//!
//! let time = record.time().unwrap();
//! assert_eq!(time.day_name, "Wednesday");
//! assert_eq!(time.period.to_string(), "14-15");
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Sender value given to lines produced by the group itself rather than a
/// participant (name changes, member joins and so on).
pub const GROUP_NOTIFICATION: &str = "group_notification";

/// One parsed chat line.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `Option<NaiveDateTime>` | `None` if the header date did not parse |
/// | `sender` | `Option<String>` | Author, or [`GROUP_NOTIFICATION`] |
/// | `body` | `Option<String>` | Text content or a media placeholder |
/// | `time` | `Option<TimeFields>` | Derived calendar fields, `Some` iff `timestamp` is |
///
/// `sender` and `body` are both `None` when the line had no `": "` separator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// When the message was sent, as written in the export (no time zone).
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,

    /// Display name of the author.
    #[serde(default)]
    pub sender: Option<String>,

    /// Message text.
    ///
    /// Media is represented by the exporting application's placeholder text,
    /// e.g. `image omitted`.
    #[serde(default)]
    pub body: Option<String>,

    /// Calendar fields derived from `timestamp`.
    #[serde(flatten)]
    pub time: Option<TimeFields>,
}

impl MessageRecord {
    /// Builds a record, deriving the calendar fields from `timestamp`.
    pub fn new(
        timestamp: Option<NaiveDateTime>,
        sender: Option<String>,
        body: Option<String>,
    ) -> Self {
        Self {
            timestamp,
            sender,
            body,
            time: timestamp.map(TimeFields::from_timestamp),
        }
    }

    /// Returns the timestamp, if the header date parsed.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        self.timestamp
    }

    /// Returns the sender, if the line had a separator.
    pub fn sender(&self) -> Option<&str> {
        self.sender.as_deref()
    }

    /// Returns the message body, if the line had a separator.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Returns the derived calendar fields.
    pub fn time(&self) -> Option<&TimeFields> {
        self.time.as_ref()
    }

    /// Returns `true` if the sender is the group-notification sentinel.
    pub fn is_group_notification(&self) -> bool {
        self.sender() == Some(GROUP_NOTIFICATION)
    }

    /// Returns `true` if timestamp, sender and body are all present.
    ///
    /// Content statistics only look at complete records.
    pub fn is_complete(&self) -> bool {
        self.timestamp.is_some() && self.sender.is_some() && self.body.is_some()
    }
}

/// Calendar fields derived from a record's timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeFields {
    /// Date part only.
    #[serde(rename = "only_date")]
    pub date: NaiveDate,
    pub year: i32,
    /// Month number, 1-12.
    pub month_num: u32,
    /// English month name, e.g. `February`.
    pub month: String,
    /// Day of month, 1-31.
    pub day: u32,
    /// English weekday name, e.g. `Wednesday`.
    pub day_name: String,
    /// Hour on a 24-hour clock, 0-23.
    pub hour: u32,
    pub minute: u32,
    /// One-hour activity slot.
    pub period: HourBucket,
}

impl TimeFields {
    /// Derives all calendar fields from a timestamp.
    pub fn from_timestamp(ts: NaiveDateTime) -> Self {
        Self {
            date: ts.date(),
            year: ts.year(),
            month_num: ts.month(),
            month: ts.format("%B").to_string(),
            day: ts.day(),
            day_name: ts.format("%A").to_string(),
            hour: ts.hour(),
            minute: ts.minute(),
            period: HourBucket::new(ts.hour()),
        }
    }
}

/// A one-hour time-of-day slot used for activity heatmaps.
///
/// Labels are `"{hour}-{hour + 1}"` without zero padding, except that the
/// last slot wraps to `"23-00"` and the first is written `"00-1"`.
///
/// ```
/// use chatlens::record::HourBucket;
///
/// assert_eq!(HourBucket::new(23).to_string(), "23-00");
/// assert_eq!(HourBucket::new(0).to_string(), "00-1");
/// assert_eq!(HourBucket::new(9).to_string(), "9-10");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HourBucket(u32);

impl HourBucket {
    /// Creates the bucket starting at `hour`. Values above 23 wrap.
    pub fn new(hour: u32) -> Self {
        Self(hour % 24)
    }

    /// Returns the starting hour, 0-23.
    pub fn hour(self) -> u32 {
        self.0
    }
}

impl fmt::Display for HourBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            23 => write!(f, "23-00"),
            0 => write!(f, "00-1"),
            h => write!(f, "{}-{}", h, h + 1),
        }
    }
}

impl FromStr for HourBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, _) = s
            .split_once('-')
            .ok_or_else(|| format!("Invalid hour bucket: '{}'", s))?;
        let hour: u32 = start
            .parse()
            .map_err(|_| format!("Invalid hour bucket: '{}'", s))?;
        let bucket = HourBucket(hour);
        if hour > 23 || bucket.to_string() != s {
            return Err(format!("Invalid hour bucket: '{}'", s));
        }
        Ok(bucket)
    }
}

impl Serialize for HourBucket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HourBucket {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}
