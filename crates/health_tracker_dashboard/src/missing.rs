//! Missing-data detection per dashboard scope.
//!
//! A date is missing for a scope when it has no record at all, or (for every
//! scope except `dashboard`) when the record leaves the scope's fields NULL.
//! Only dates from the earliest stored record up to yesterday are considered.

use chrono::NaiveDate;
use health_tracker_store::{DailyRecord, MetricField};
use serde::{Deserialize, Serialize};

use crate::calendar::DisplayCalendar;
use crate::series::{DateRange, DateSeries};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingScope {
    Dashboard,
    Calories,
    Steps,
    Weight,
    Cardio,
    Strength,
    Physio,
}

impl MissingScope {
    pub const ALL: [MissingScope; 7] = [
        MissingScope::Dashboard,
        MissingScope::Calories,
        MissingScope::Steps,
        MissingScope::Weight,
        MissingScope::Cardio,
        MissingScope::Strength,
        MissingScope::Physio,
    ];

    /// Case-insensitive lookup; `None` for unknown scope names.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|scope| scope.as_str().eq_ignore_ascii_case(name))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MissingScope::Dashboard => "dashboard",
            MissingScope::Calories => "calories",
            MissingScope::Steps => "steps",
            MissingScope::Weight => "weight",
            MissingScope::Cardio => "cardio",
            MissingScope::Strength => "strength",
            MissingScope::Physio => "physio",
        }
    }

    /// Whether a date with this lookup result needs data entry for the scope.
    pub fn is_missing(self, record: Option<&DailyRecord>) -> bool {
        let Some(r) = record else {
            return true;
        };
        match self {
            MissingScope::Dashboard => false,
            MissingScope::Calories => MetricField::CALORIES
                .iter()
                .any(|field| !field.is_recorded(r)),
            MissingScope::Steps => r.steps_goal.is_none() || r.steps_actual.is_none(),
            MissingScope::Weight => r.weight_kg.is_none(),
            // high and low are alternatives; one of them being set is enough
            MissingScope::Cardio => {
                r.cardio_high_intensity_minutes.is_none() && r.cardio_low_intensity_minutes.is_none()
            }
            MissingScope::Strength => r.strength_workout_type.is_none(),
            MissingScope::Physio => match r.physio_active {
                None => true,
                Some(true) => r.physio_completed.is_none(),
                Some(false) => false,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct MissingDate {
    pub date: NaiveDate,
    /// e.g. `Saturday, 13th January`.
    pub display: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct MissingDataReport {
    pub scope: String,
    pub count: usize,
    pub dates: Vec<MissingDate>,
}

impl MissingDataReport {
    pub fn new(scope: impl Into<String>, dates: Vec<MissingDate>) -> Self {
        Self {
            scope: scope.into(),
            count: dates.len(),
            dates,
        }
    }

    pub fn empty(scope: impl Into<String>) -> Self {
        Self::new(scope, Vec::new())
    }
}

/// Dates in `span` missing for `scope`, ascending and without duplicates.
pub fn find_missing(
    series: &DateSeries,
    scope: MissingScope,
    span: DateRange,
    calendar: &DisplayCalendar,
) -> Vec<MissingDate> {
    span.days()
        .filter(|date| scope.is_missing(series.get(*date)))
        .map(|date| MissingDate {
            date,
            display: calendar.display_date(date),
        })
        .collect()
}
