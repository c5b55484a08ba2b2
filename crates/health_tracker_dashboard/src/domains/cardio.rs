use health_tracker_store::DailyRecord;
use serde::{Deserialize, Serialize};

use crate::series::{DateRange, DateSeries};
use crate::streak::{LongestStreak, StreakStep, current_streak, longest_streak};
use crate::window::window_total;

/// Minutes of cardio (any intensity) a day needs to count toward the streak.
pub const STREAK_MINUTES: i64 = 15;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct CardioSummary {
    pub weekly_low_intensity_minutes: i64,
    pub weekly_high_intensity_minutes: i64,
    pub current_streak: u32,
    pub longest_streak: LongestStreak,
}

pub fn cardio_step(record: &DailyRecord) -> StreakStep {
    if record.cardio_minutes() >= STREAK_MINUTES {
        StreakStep::Continue
    } else {
        StreakStep::Break
    }
}

pub fn summarize_cardio(
    recent: &DateSeries,
    history: &DateSeries,
    week: DateRange,
) -> CardioSummary {
    let low = window_total(recent, week, |r| r.cardio_low_intensity_minutes);
    let high = window_total(recent, week, |r| r.cardio_high_intensity_minutes);

    CardioSummary {
        weekly_low_intensity_minutes: low.sum,
        weekly_high_intensity_minutes: high.sum,
        current_streak: current_streak(history, week.end, cardio_step),
        longest_streak: longest_streak(history, cardio_step),
    }
}
