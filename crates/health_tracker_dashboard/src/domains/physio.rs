use chrono::NaiveDate;
use health_tracker_store::DailyRecord;
use serde::{Deserialize, Serialize};

use crate::series::DateSeries;
use crate::streak::{LongestStreak, StreakStep, current_streak, longest_streak};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct PhysioSummary {
    /// `None` when there is no record for yesterday or the flag is NULL.
    pub yesterday_active: Option<bool>,
    pub current_streak: u32,
    pub longest_streak: LongestStreak,
}

/// Inactive days (flag false or NULL) are neutral: they neither extend nor end a streak.
pub fn physio_step(record: &DailyRecord) -> StreakStep {
    match (record.physio_active, record.physio_completed) {
        (Some(true), Some(true)) => StreakStep::Continue,
        (Some(true), _) => StreakStep::Break,
        _ => StreakStep::Skip,
    }
}

/// `last_day` holds the record for `anchor`, if any.
pub fn summarize_physio(
    last_day: &DateSeries,
    history: &DateSeries,
    anchor: NaiveDate,
) -> PhysioSummary {
    PhysioSummary {
        yesterday_active: last_day.observe(anchor, |r| r.physio_active).value(),
        current_streak: current_streak(history, anchor, physio_step),
        longest_streak: longest_streak(history, physio_step),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, d).unwrap()
    }

    fn physio(d: u32, active: Option<bool>, completed: Option<bool>) -> DailyRecord {
        DailyRecord {
            physio_active: active,
            physio_completed: completed,
            ..DailyRecord::new(day(d))
        }
    }

    #[test]
    fn predicate_table() {
        let cases = [
            (Some(true), Some(true), StreakStep::Continue),
            (Some(true), Some(false), StreakStep::Break),
            (Some(true), None, StreakStep::Break),
            (Some(false), Some(true), StreakStep::Skip),
            (Some(false), None, StreakStep::Skip),
            (None, Some(true), StreakStep::Skip),
            (None, None, StreakStep::Skip),
        ];
        for (active, completed, expected) in cases {
            assert_eq!(
                physio_step(&physio(1, active, completed)),
                expected,
                "active={active:?} completed={completed:?}"
            );
        }
    }

    #[test]
    fn inactive_day_does_not_break_longest_streak() {
        let history: DateSeries = vec![
            physio(1, Some(true), Some(true)),
            physio(2, Some(false), None),
            physio(3, Some(true), Some(true)),
        ]
        .into_iter()
        .collect();
        let out = summarize_physio(&history, &history, day(3));
        assert_eq!(out.longest_streak.length, 2);
        assert_eq!(out.longest_streak.end_date, Some(day(3)));
        assert_eq!(out.current_streak, 2);
        assert_eq!(out.yesterday_active, Some(true));
    }

    #[test]
    fn incomplete_active_day_breaks() {
        let history: DateSeries = vec![
            physio(1, Some(true), Some(true)),
            physio(2, Some(true), None),
            physio(3, Some(true), Some(true)),
        ]
        .into_iter()
        .collect();
        let out = summarize_physio(&DateSeries::default(), &history, day(3));
        assert_eq!(out.current_streak, 1);
        assert_eq!(out.longest_streak.length, 1);
        assert_eq!(out.longest_streak.end_date, Some(day(1)));
        assert_eq!(out.yesterday_active, None);
    }

    #[test]
    fn inactive_yesterday_keeps_streak_alive() {
        let history: DateSeries = vec![
            physio(1, Some(true), Some(true)),
            physio(2, Some(true), Some(true)),
            physio(3, None, None),
        ]
        .into_iter()
        .collect();
        let out = summarize_physio(&history, &history, day(3));
        assert_eq!(out.current_streak, 2);
        assert_eq!(out.yesterday_active, None);
    }
}
