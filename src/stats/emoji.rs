use serde::{Deserialize, Serialize};

use super::{Scope, rank};
use crate::record::MessageRecord;

/// One row of the emoji frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiCount {
    pub emoji: String,
    pub count: usize,
}

/// Counts emoji characters in complete records of the scope.
///
/// Each `char` is classified on its own, so multi-codepoint sequences
/// (skin tones, ZWJ families, flags) contribute their emoji parts and
/// modifiers such as U+FE0F are ignored.
pub fn common_emojis(records: &[MessageRecord], scope: &Scope) -> Vec<EmojiCount> {
    let found = scope
        .select(records)
        .filter(|r| r.is_complete())
        .filter_map(MessageRecord::body)
        .flat_map(str::chars)
        .filter(|c| is_emoji(*c));

    rank(found)
        .into_iter()
        .map(|(c, count)| EmojiCount {
            emoji: c.to_string(),
            count,
        })
        .collect()
}

fn is_emoji(c: char) -> bool {
    let mut buf = [0u8; 4];
    emojis::get(c.encode_utf8(&mut buf)).is_some()
}
