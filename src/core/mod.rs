//! Record post-processing: filtering and export.
//!
//! - [`filter`] - date-range narrowing before analysis
//! - [`output`] - format writers (CSV, JSON, JSONL)

pub mod filter;
pub mod output;

pub use filter::{FilterConfig, apply_filters};

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
