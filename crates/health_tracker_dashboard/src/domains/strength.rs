use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::series::{DateRange, DateSeries};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct StrengthSummary {
    /// Days in the last 7 with a real workout.
    pub weekly_workouts: u32,
    /// All-time count per workout label. NULL and "None" entries are not counted.
    pub workout_counts: BTreeMap<String, u32>,
}

pub fn summarize_strength(
    recent: &DateSeries,
    history: &DateSeries,
    week: DateRange,
) -> StrengthSummary {
    let weekly_workouts = recent
        .in_range(week)
        .filter(|r| r.workout_label().is_some())
        .count() as u32;

    let mut workout_counts = BTreeMap::new();
    for label in history.iter().filter_map(|r| r.workout_label()) {
        *workout_counts.entry(label.to_string()).or_insert(0) += 1;
    }

    StrengthSummary {
        weekly_workouts,
        workout_counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use health_tracker_store::DailyRecord;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, d).unwrap()
    }

    fn workout(d: u32, label: Option<&str>) -> DailyRecord {
        DailyRecord {
            strength_workout_type: label.map(str::to_string),
            ..DailyRecord::new(day(d))
        }
    }

    #[test]
    fn sentinel_and_null_are_not_workouts() {
        let history: DateSeries = vec![
            workout(1, Some("Core")),
            workout(2, Some("Lower Body")),
            workout(8, Some("None")),
            workout(9, None),
            workout(10, Some("Core")),
            workout(11, Some("Full Body")),
        ]
        .into_iter()
        .collect();
        let week = DateRange::ending_at(day(14), 7);

        let out = summarize_strength(&history, &history, week);
        assert_eq!(out.weekly_workouts, 2);
        assert_eq!(out.workout_counts.get("Core"), Some(&2));
        assert_eq!(out.workout_counts.get("Lower Body"), Some(&1));
        assert_eq!(out.workout_counts.get("Full Body"), Some(&1));
        assert!(!out.workout_counts.contains_key("None"));
        assert_eq!(out.workout_counts.len(), 3);
    }

    #[test]
    fn empty_history_has_no_counts() {
        let empty = DateSeries::default();
        let out = summarize_strength(&empty, &empty, DateRange::ending_at(day(7), 7));
        assert_eq!(out.weekly_workouts, 0);
        assert!(out.workout_counts.is_empty());
    }
}
