//! Headline counts and per-user activity.

use serde::{Deserialize, Serialize};

use super::{Scope, rank};
use crate::config::StatsConfig;
use crate::record::MessageRecord;

/// Top statistics for a scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSummary {
    /// Complete records in scope.
    pub messages: usize,
    /// Whitespace-separated tokens across their bodies.
    pub words: usize,
    /// Bodies that are image or video placeholders.
    pub media: usize,
    /// Bodies that are the sticker placeholder.
    pub stickers: usize,
}

/// Message count for one sender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCount {
    pub name: String,
    pub messages: usize,
}

/// Share of all records sent by one sender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserShare {
    pub name: String,
    /// Percentage of all records, rounded to two decimals.
    pub percent: f64,
}

/// Most active senders of the whole chat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusyUsers {
    /// Busiest senders, most active first.
    pub top: Vec<UserCount>,
    /// Every sender with their share of the chat.
    pub shares: Vec<UserShare>,
}

/// Computes message, word, media and sticker counts.
///
/// Only complete records (timestamp, sender and body present) are counted.
pub fn summary(records: &[MessageRecord], scope: &Scope, config: &StatsConfig) -> ChatSummary {
    scope
        .select(records)
        .filter(|r| r.is_complete())
        .filter_map(MessageRecord::body)
        .fold(ChatSummary::default(), |mut acc, body| {
            acc.messages += 1;
            acc.words += body.split_whitespace().count();
            if config.is_media(body) {
                acc.media += 1;
            }
            if config.is_sticker(body) {
                acc.stickers += 1;
            }
            acc
        })
}

/// Ranks senders across the whole chat.
///
/// Shares are relative to every record, including those without a sender,
/// so they need not add up to 100. Group notifications count as a sender.
pub fn busy_users(records: &[MessageRecord], limit: usize) -> BusyUsers {
    let ranked = rank(records.iter().filter_map(MessageRecord::sender));
    let total = records.len();

    let top = ranked
        .iter()
        .take(limit)
        .map(|(name, messages)| UserCount {
            name: (*name).to_string(),
            messages: *messages,
        })
        .collect();

    let shares = ranked
        .iter()
        .map(|(name, messages)| UserShare {
            name: (*name).to_string(),
            percent: round2(*messages as f64 / total as f64 * 100.0),
        })
        .collect();

    BusyUsers { top, shares }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
