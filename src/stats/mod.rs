//! Statistics over parsed records.
//!
//! Every function here is a read-only fold over `&[MessageRecord]`. Most take
//! a [`Scope`] selecting one sender or the whole group. All of them accept an
//! empty slice and return zeros or empty tables.
//!
//! | Function | Output |
//! |----------|--------|
//! | [`summary`] | message, word, media and sticker counts |
//! | [`busy_users`] | most active senders and their share |
//! | [`most_common_words`], [`cloud_words`] | word frequency tables |
//! | [`common_emojis`] | emoji frequency table |
//! | [`monthly_timeline`], [`daily_timeline`] | messages over time |
//! | [`week_activity`], [`month_activity`] | busiest weekdays and months |
//! | [`activity_heatmap`] | weekday by hour-bucket counts |
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::StatsConfig;
//! use chatlens::stats::{Scope, summary, user_options};
//!
//! let records = chatlens::parse(
//!     "[01/02/23, 9:15:30AM] Alice: Good morning all\n\
//!      [01/02/23, 9:16:00AM] Bob: image omitted",
//! );
//!
//! assert_eq!(user_options(&records), ["Group", "Alice", "Bob"]);
//!
//! let totals = summary(&records, &Scope::Group, &StatsConfig::default());
//! assert_eq!(totals.messages, 2);
//! assert_eq!(totals.media, 1);
//! ```

pub mod activity;
pub mod emoji;
pub mod scope;
pub mod summary;
pub mod timeline;
pub mod words;

use std::collections::HashMap;
use std::hash::Hash;

pub use activity::{ActivityCount, Heatmap, activity_heatmap, month_activity, week_activity};
pub use emoji::{EmojiCount, common_emojis};
pub use scope::{GROUP_SCOPE, Scope, resolve_scope, user_options};
pub use summary::{BusyUsers, ChatSummary, UserCount, UserShare, busy_users, summary};
pub use timeline::{DailyPoint, MonthlyPoint, daily_timeline, monthly_timeline};
pub use words::{WordCount, cloud_words, most_common_words};

/// Counts keys and orders them by descending count.
///
/// Keys with equal counts keep the order in which they were first seen.
pub(crate) fn rank<K, I>(keys: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();

    for key in keys {
        match index.get(&key) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(key.clone(), counts.len());
                counts.push((key, 1));
            }
        }
    }

    // stable: ties stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
