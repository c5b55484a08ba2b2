use chrono::NaiveDate;
use health_tracker_store::DailyRecord;
use serde::{Deserialize, Serialize};

use crate::calendar::DisplayCalendar;
use crate::series::{DateRange, DateSeries, Observation};

/// One day of the calorie chart. Values are passed through untouched.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct CalorieDay {
    pub date: NaiveDate,
    pub weekday: String,
    /// Whether a record exists for the date at all.
    pub recorded: bool,
    pub green_goal: Option<i64>,
    pub green_actual: Option<i64>,
    pub yellow_goal: Option<i64>,
    pub yellow_actual: Option<i64>,
    pub orange_goal: Option<i64>,
    pub orange_actual: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct CaloriesSummary {
    pub days: Vec<CalorieDay>,
}

/// One entry per date of `week`, oldest first, including dates with no record.
pub fn summarize_calories(
    series: &DateSeries,
    week: DateRange,
    calendar: &DisplayCalendar,
) -> CaloriesSummary {
    let days = week
        .days()
        .map(|date| {
            let field = |get: fn(&DailyRecord) -> Option<i64>| series.observe(date, get);
            let green_goal = field(|r| r.calories_green_goal);
            CalorieDay {
                date,
                weekday: calendar.weekday_name(date),
                recorded: green_goal != Observation::Absent,
                green_goal: green_goal.value(),
                green_actual: field(|r| r.calories_green_actual).value(),
                yellow_goal: field(|r| r.calories_yellow_goal).value(),
                yellow_actual: field(|r| r.calories_yellow_actual).value(),
                orange_goal: field(|r| r.calories_orange_goal).value(),
                orange_actual: field(|r| r.calories_orange_actual).value(),
            }
        })
        .collect();
    CaloriesSummary { days }
}
