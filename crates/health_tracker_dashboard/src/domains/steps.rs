use chrono::NaiveDate;
use health_tracker_store::DailyRecord;
use serde::{Deserialize, Serialize};

use crate::series::{DateRange, DateSeries};
use crate::streak::{LongestStreak, StreakStep, current_streak, longest_streak};
use crate::window::window_total;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StepsDay {
    pub actual: Option<i64>,
    pub goal: Option<i64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct StepsPeak {
    pub steps: i64,
    pub date: NaiveDate,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct StepsSummary {
    pub yesterday: StepsDay,
    /// Sum over the last 7 days divided by 7.
    pub weekly_average: f64,
    /// Same, for the 7 days before that.
    pub previous_weekly_average: f64,
    pub all_time_max: Option<StepsPeak>,
    pub current_streak: u32,
    pub longest_streak: LongestStreak,
}

/// Goal met when both values are present and actual reaches the goal.
pub fn step_goal_step(record: &DailyRecord) -> StreakStep {
    match (record.steps_actual, record.steps_goal) {
        (Some(actual), Some(goal)) if actual >= goal => StreakStep::Continue,
        _ => StreakStep::Break,
    }
}

/// Highest recorded `steps_actual`; ties keep the earliest date.
pub fn all_time_max(series: &DateSeries) -> Option<StepsPeak> {
    series
        .iter()
        .filter_map(|r| r.steps_actual.map(|steps| StepsPeak { steps, date: r.date }))
        .fold(None, |best: Option<StepsPeak>, candidate| match best {
            Some(b) if b.steps >= candidate.steps => Some(b),
            _ => Some(candidate),
        })
}

/// `last_day` holds the record for `week.end`, if any. `recent` must cover `week`
/// and the week before it; `history` is the full record set.
pub fn summarize_steps(
    last_day: &DateSeries,
    recent: &DateSeries,
    history: &DateSeries,
    week: DateRange,
) -> StepsSummary {
    let average = |range: DateRange| {
        window_total(recent, range, |r| r.steps_actual)
            .average()
            .unwrap_or(0.0)
    };

    StepsSummary {
        yesterday: StepsDay {
            actual: last_day.observe(week.end, |r| r.steps_actual).value(),
            goal: last_day.observe(week.end, |r| r.steps_goal).value(),
        },
        weekly_average: average(week),
        previous_weekly_average: average(week.preceding()),
        all_time_max: all_time_max(history),
        current_streak: current_streak(history, week.end, step_goal_step),
        longest_streak: longest_streak(history, step_goal_step),
    }
}
