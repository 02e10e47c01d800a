//! Weekday, month and hour-of-day activity.

use std::collections::{BTreeMap, BTreeSet};

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use super::{Scope, rank};
use crate::record::{HourBucket, MessageRecord};

/// Record count for one weekday or month name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityCount {
    pub label: String,
    pub messages: usize,
}

/// Weekday by hour-bucket message counts.
///
/// `counts[row][col]` is the number of messages sent on `days[row]` during
/// `periods[col]`. Only weekdays and buckets that occur in the data appear.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heatmap {
    /// Weekday names, Monday first.
    pub days: Vec<String>,
    /// Hour buckets in hour order.
    pub periods: Vec<HourBucket>,
    pub counts: Vec<Vec<usize>>,
}

impl Heatmap {
    /// Returns the count for a weekday name and bucket, if both are present.
    pub fn get(&self, day: &str, period: HourBucket) -> Option<usize> {
        let row = self.days.iter().position(|d| d == day)?;
        let col = self.periods.iter().position(|p| *p == period)?;
        Some(self.counts[row][col])
    }

    /// Returns `true` if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Returns the largest cell value, or 0 for an empty map.
    pub fn max(&self) -> usize {
        self.counts.iter().flatten().copied().max().unwrap_or(0)
    }
}

/// Counts dated records per weekday name, busiest first.
pub fn week_activity(records: &[MessageRecord], scope: &Scope) -> Vec<ActivityCount> {
    count_labels(records, scope, |r| r.time().map(|t| t.day_name.as_str()))
}

/// Counts dated records per month name, busiest first.
///
/// Months of different years share a row.
pub fn month_activity(records: &[MessageRecord], scope: &Scope) -> Vec<ActivityCount> {
    count_labels(records, scope, |r| r.time().map(|t| t.month.as_str()))
}

fn count_labels<'a, F>(
    records: &'a [MessageRecord],
    scope: &'a Scope,
    label: F,
) -> Vec<ActivityCount>
where
    F: Fn(&'a MessageRecord) -> Option<&'a str>,
{
    rank(scope.select(records).filter_map(label))
        .into_iter()
        .map(|(label, messages)| ActivityCount {
            label: label.to_string(),
            messages,
        })
        .collect()
}

/// Builds the weekday by hour-bucket table of messages with a body.
pub fn activity_heatmap(records: &[MessageRecord], scope: &Scope) -> Heatmap {
    // (weekday index from Monday, weekday name)
    let mut days: BTreeMap<u32, String> = BTreeMap::new();
    let mut periods: BTreeSet<HourBucket> = BTreeSet::new();
    let mut cells: BTreeMap<(u32, HourBucket), usize> = BTreeMap::new();

    for record in scope.select(records) {
        let Some(time) = record.time() else { continue };
        let weekday = time.date.weekday().num_days_from_monday();

        days.entry(weekday).or_insert_with(|| time.day_name.clone());
        periods.insert(time.period);
        let cell = cells.entry((weekday, time.period)).or_default();
        if record.body.is_some() {
            *cell += 1;
        }
    }

    let periods: Vec<HourBucket> = periods.into_iter().collect();
    let counts = days
        .keys()
        .map(|day| {
            periods
                .iter()
                .map(|p| cells.get(&(*day, *p)).copied().unwrap_or(0))
                .collect()
        })
        .collect();

    Heatmap {
        days: days.into_values().collect(),
        periods,
        counts,
    }
}
