//! Message volume over time.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Scope;
use crate::record::MessageRecord;

/// Messages sent in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    pub year: i32,
    pub month_num: u32,
    /// English month name.
    pub month: String,
    /// Axis label, e.g. `February-2023`.
    pub label: String,
    pub messages: usize,
}

/// Messages sent on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub messages: usize,
}

/// Counts messages per month, oldest first.
///
/// Every month that has a dated record in scope gets a point; `messages`
/// counts only records with a body.
pub fn monthly_timeline(records: &[MessageRecord], scope: &Scope) -> Vec<MonthlyPoint> {
    let mut months: BTreeMap<(i32, u32), (String, usize)> = BTreeMap::new();

    for record in scope.select(records) {
        let Some(time) = record.time() else { continue };
        let entry = months
            .entry((time.year, time.month_num))
            .or_insert_with(|| (time.month.clone(), 0));
        if record.body.is_some() {
            entry.1 += 1;
        }
    }

    months
        .into_iter()
        .map(|((year, month_num), (month, messages))| MonthlyPoint {
            year,
            month_num,
            label: format!("{}-{}", month, year),
            month,
            messages,
        })
        .collect()
}

/// Counts messages per day, oldest first.
pub fn daily_timeline(records: &[MessageRecord], scope: &Scope) -> Vec<DailyPoint> {
    let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();

    for record in scope.select(records) {
        if let Some(time) = record.time() {
            *days.entry(time.date).or_default() += usize::from(record.body.is_some());
        }
    }

    days.into_iter()
        .map(|(date, messages)| DailyPoint { date, messages })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    const CHAT: &str = "\
[15/01/24, 9:00:00AM] Alice: hi
[28/12/23, 9:00:00AM] Bob: old year
[15/01/24, 10:00:00AM] Bob: hello
[16/01/24, 8:00:00PM] Alice: bye
[16/01/24, 8:05:00PM] Team changed the subject
[40/01/24, 9:00:00AM] Alice: undated";

    #[test]
    fn test_monthly_timeline() {
        let points = monthly_timeline(&parse(CHAT), &Scope::Group);
        assert_eq!(points.len(), 2);

        assert_eq!(points[0].label, "December-2023");
        assert_eq!(points[0].messages, 1);

        assert_eq!(points[1].year, 2024);
        assert_eq!(points[1].month_num, 1);
        assert_eq!(points[1].month, "January");
        assert_eq!(points[1].label, "January-2024");
        assert_eq!(points[1].messages, 3);
    }

    #[test]
    fn test_monthly_timeline_user() {
        let points = monthly_timeline(&parse(CHAT), &Scope::user("Bob"));
        let labels: Vec<_> = points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, ["December-2023", "January-2024"]);
        assert!(points.iter().all(|p| p.messages == 1));
    }

    #[test]
    fn test_daily_timeline() {
        let points = daily_timeline(&parse(CHAT), &Scope::Group);
        let days: Vec<(String, usize)> = points
            .iter()
            .map(|p| (p.date.to_string(), p.messages))
            .collect();
        assert_eq!(
            days,
            vec![
                ("2023-12-28".to_string(), 1),
                ("2024-01-15".to_string(), 2),
                ("2024-01-16".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_timelines_empty() {
        assert!(monthly_timeline(&[], &Scope::Group).is_empty());
        assert!(daily_timeline(&[], &Scope::Group).is_empty());
    }
}
