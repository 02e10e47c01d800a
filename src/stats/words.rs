//! Word frequency tables.

use serde::{Deserialize, Serialize};

use super::{Scope, rank};
use crate::config::StatsConfig;
use crate::record::MessageRecord;

/// One row of a word frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Returns the most frequent words, skipping stopwords.
///
/// Looks at complete records in scope, excluding group notifications and
/// placeholder bodies. Words are lowercased whitespace tokens; at most
/// `config.top_words` rows are returned.
pub fn most_common_words(
    records: &[MessageRecord],
    scope: &Scope,
    config: &StatsConfig,
) -> Vec<WordCount> {
    let words = content_bodies(records, scope, config)
        .flat_map(str::split_whitespace)
        .map(str::to_lowercase)
        .filter(|w| !config.is_stopword(w));

    rank(words)
        .into_iter()
        .take(config.top_words)
        .map(|(word, count)| WordCount { word, count })
        .collect()
}

/// Returns the full word frequency table a word-cloud renderer consumes.
///
/// Same record selection as [`most_common_words`], but words keep their
/// case and neither stopwords nor a row limit are applied.
pub fn cloud_words(
    records: &[MessageRecord],
    scope: &Scope,
    config: &StatsConfig,
) -> Vec<WordCount> {
    let words = content_bodies(records, scope, config).flat_map(str::split_whitespace);

    rank(words)
        .into_iter()
        .map(|(word, count)| WordCount {
            word: word.to_string(),
            count,
        })
        .collect()
}

fn content_bodies<'a>(
    records: &'a [MessageRecord],
    scope: &'a Scope,
    config: &'a StatsConfig,
) -> impl Iterator<Item = &'a str> + 'a {
    scope
        .select(records)
        .filter(|r| r.is_complete() && !r.is_group_notification())
        .filter_map(MessageRecord::body)
        .filter(|body| !config.is_placeholder(body))
}
