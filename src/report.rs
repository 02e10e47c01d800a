//! Full analysis bundle for one scope.
//!
//! [`AnalysisReport`] runs every statistic in [`stats`](crate::stats) and
//! keeps the results together so they can be printed as a dashboard or
//! serialized in one go.
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::StatsConfig;
//! use chatlens::report::AnalysisReport;
//! use chatlens::stats::Scope;
//!
//! let records = chatlens::parse(
//!     "[01/02/23, 9:15:30AM] Alice: Good morning 🌞\n\
//!      [01/02/23, 9:16:00AM] Bob: morning",
//! );
//!
//! let report = AnalysisReport::build(&records, &Scope::Group, &StatsConfig::default());
//! assert_eq!(report.summary.messages, 2);
//! assert_eq!(report.common_emojis[0].emoji, "🌞");
//! assert!(report.busy_users.is_some());
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::StatsConfig;
use crate::record::MessageRecord;
use crate::stats::{
    self, ActivityCount, BusyUsers, ChatSummary, DailyPoint, EmojiCount, Heatmap, MonthlyPoint,
    Scope, WordCount,
};

/// Every statistic for one scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub scope: Scope,
    pub summary: ChatSummary,
    pub monthly_timeline: Vec<MonthlyPoint>,
    pub daily_timeline: Vec<DailyPoint>,
    pub week_activity: Vec<ActivityCount>,
    pub month_activity: Vec<ActivityCount>,
    pub heatmap: Heatmap,
    /// Only computed for the group scope.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub busy_users: Option<BusyUsers>,
    pub most_common_words: Vec<WordCount>,
    pub cloud_words: Vec<WordCount>,
    pub common_emojis: Vec<EmojiCount>,
}

impl AnalysisReport {
    /// Computes all statistics for `scope`.
    pub fn build(records: &[MessageRecord], scope: &Scope, config: &StatsConfig) -> Self {
        let report = Self {
            scope: scope.clone(),
            summary: stats::summary(records, scope, config),
            monthly_timeline: stats::monthly_timeline(records, scope),
            daily_timeline: stats::daily_timeline(records, scope),
            week_activity: stats::week_activity(records, scope),
            month_activity: stats::month_activity(records, scope),
            heatmap: stats::activity_heatmap(records, scope),
            busy_users: scope
                .is_group()
                .then(|| stats::busy_users(records, config.top_users)),
            most_common_words: stats::most_common_words(records, scope, config),
            cloud_words: stats::cloud_words(records, scope, config),
            common_emojis: stats::common_emojis(records, scope),
        };

        debug!(
            scope = %scope,
            messages = report.summary.messages,
            months = report.monthly_timeline.len(),
            words = report.cloud_words.len(),
            emojis = report.common_emojis.len(),
            "built analysis report"
        );

        report
    }

    /// Returns `true` if the scope had no complete records.
    pub fn is_empty(&self) -> bool {
        self.summary.messages == 0
    }
}
