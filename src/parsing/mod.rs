//! Shared parsing utilities.
//!
//! These are the building blocks of [`ChatParser`](crate::parser::ChatParser),
//! exposed for callers that want to classify single lines.

pub mod whatsapp;

pub use whatsapp::{
    HeaderMatch, INVISIBLE_CHARS, TIMESTAMP_FORMAT, clean_line, match_header, parse_timestamp,
    split_sender,
};
