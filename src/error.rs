//! Unified error types for chatlens.
//!
//! Parsing itself never fails: malformed lines are dropped and bad dates
//! become `None`. [`ChatlensError`] covers everything around the parser:
//! reading files, invalid user-supplied configuration and writing output.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::MessageRecord;
///
/// fn my_function() -> Result<Vec<MessageRecord>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A configured group-name pattern is not a valid regular expression.
    #[error("Invalid group pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern as supplied by the caller
        pattern: String,
        /// The underlying regex compilation error
        #[source]
        source: regex::Error,
    },

    /// Invalid date format in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// An unsupported or unknown format was requested.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// What kind of format was being resolved (e.g. "output")
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// The requested analysis scope does not name a known sender.
    #[error("Unknown user '{name}'. Available: {}", available.join(", "))]
    UnknownUser {
        /// The requested user name
        name: String,
        /// Valid selector options, `Group` first
        available: Vec<String>,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Output buffer was not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatlensError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatlensError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Creates an invalid pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        ChatlensError::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatlensError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatlensError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates an unknown user error.
    pub fn unknown_user(name: impl Into<String>, available: Vec<String>) -> Self {
        ChatlensError::UnknownUser {
            name: name.into(),
            available,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if this is an invalid pattern error.
    pub fn is_invalid_pattern(&self) -> bool {
        matches!(self, ChatlensError::InvalidPattern { .. })
    }

    /// Returns `true` if this is an invalid date error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatlensError::InvalidDate { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatlensError::InvalidFormat { .. })
    }

    /// Returns `true` if this is an unknown user error.
    pub fn is_unknown_user(&self) -> bool {
        matches!(self, ChatlensError::UnknownUser { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = ChatlensError::from(io_err);
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
        assert!(err.is_io());
    }

    #[test]
    fn test_invalid_pattern_display() {
        let regex_err = regex::Regex::new("(unclosed").unwrap_err();
        let err = ChatlensError::invalid_pattern("(unclosed", regex_err);
        assert!(err.is_invalid_pattern());
        assert!(err.to_string().contains("(unclosed"));
    }

    #[test]
    fn test_invalid_date_display() {
        let err = ChatlensError::invalid_date("not-a-date");
        let display = err.to_string();
        assert!(display.contains("not-a-date"));
        assert!(display.contains("YYYY-MM-DD"));
        assert!(err.is_invalid_date());
        assert!(!err.is_io());
    }

    #[test]
    fn test_invalid_format_display() {
        let err = ChatlensError::invalid_format("output", "unknown extension '.txt'");
        assert!(err.is_invalid_format());
        assert!(err.to_string().contains("output"));
        assert!(err.to_string().contains(".txt"));
    }

    #[test]
    fn test_unknown_user_lists_options() {
        let err = ChatlensError::unknown_user(
            "Zed",
            vec!["Group".to_string(), "Alice".to_string()],
        );
        let display = err.to_string();
        assert!(err.is_unknown_user());
        assert!(display.contains("Zed"));
        assert!(display.contains("Group, Alice"));
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;
        let regex_err = regex::Regex::new("[").unwrap_err();
        let err = ChatlensError::invalid_pattern("[", regex_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_from_utf8_error() {
        let utf8_err = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err: ChatlensError = utf8_err.into();
        assert!(err.to_string().contains("UTF-8"));
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: ChatlensError = json_err.into();
        assert!(err.to_string().contains("JSON error"));
    }
}
