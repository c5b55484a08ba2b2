//! Streak scanning over a [`DateSeries`].
//!
//! A metric supplies a classifier that labels each stored record as
//! [`StreakStep::Continue`], [`StreakStep::Break`] or [`StreakStep::Skip`]. The
//! same two scans then serve every metric:
//!
//! - [`current_streak`] walks backward from an anchor date one calendar day at a
//!   time. A date with no record ends the streak.
//! - [`longest_streak`] walks forward over stored records only. A jump of more
//!   than one calendar day between consecutive records resets the running count,
//!   since the dates in between were never recorded.

use chrono::NaiveDate;
use health_tracker_store::DailyRecord;
use serde::{Deserialize, Serialize};

use crate::series::DateSeries;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StreakStep {
    /// Counts toward the streak.
    Continue,
    /// Ends the streak.
    Break,
    /// Neither counts nor ends the streak.
    Skip,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LongestStreak {
    pub length: u32,
    /// Last counted day of the longest run; `None` when no day ever counted.
    pub end_date: Option<NaiveDate>,
}

/// Number of `Continue` days walking back from `anchor` until a `Break` or a date
/// without a record.
pub fn current_streak(
    series: &DateSeries,
    anchor: NaiveDate,
    classify: impl Fn(&DailyRecord) -> StreakStep,
) -> u32 {
    let mut count = 0;
    let mut date = anchor;
    while let Some(record) = series.get(date) {
        match classify(record) {
            StreakStep::Continue => count += 1,
            StreakStep::Break => break,
            StreakStep::Skip => {}
        }
        match date.pred_opt() {
            Some(previous) => date = previous,
            None => break,
        }
    }
    count
}

/// Longest run of `Continue` days anywhere in the stored history.
///
/// Ties keep the earliest run.
pub fn longest_streak(
    series: &DateSeries,
    classify: impl Fn(&DailyRecord) -> StreakStep,
) -> LongestStreak {
    let mut best = LongestStreak::default();
    let mut running = 0u32;
    let mut previous: Option<NaiveDate> = None;

    for record in series.iter() {
        if previous.is_some_and(|prev| (record.date - prev).num_days() > 1) {
            running = 0;
        }
        previous = Some(record.date);

        match classify(record) {
            StreakStep::Continue => {
                running += 1;
                if running > best.length {
                    best = LongestStreak {
                        length: running,
                        end_date: Some(record.date),
                    };
                }
            }
            StreakStep::Break => running = 0,
            StreakStep::Skip => {}
        }
    }
    best
}
