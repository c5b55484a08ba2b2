//! Daily health records and the read-only `DailyStore` trait the dashboard consumes.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod memory;
pub mod sqlite;

pub use memory::InMemoryDailyStore;
pub use sqlite::SqliteDailyStore;

/// Label stored in `strength_workout_type` when the user explicitly did no workout.
pub const NO_WORKOUT: &str = "None";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// One row of tracked data. The date is the identity; every other field may be NULL.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub calories_green_goal: Option<i64>,
    pub calories_green_actual: Option<i64>,
    pub calories_yellow_goal: Option<i64>,
    pub calories_yellow_actual: Option<i64>,
    pub calories_orange_goal: Option<i64>,
    pub calories_orange_actual: Option<i64>,
    pub steps_goal: Option<i64>,
    pub steps_actual: Option<i64>,
    pub cardio_high_intensity_minutes: Option<i64>,
    pub cardio_low_intensity_minutes: Option<i64>,
    pub strength_workout_type: Option<String>,
    pub physio_active: Option<bool>,
    pub physio_completed: Option<bool>,
    pub weight_kg: Option<f64>,
}

impl DailyRecord {
    /// A record for `date` with every field NULL.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            calories_green_goal: None,
            calories_green_actual: None,
            calories_yellow_goal: None,
            calories_yellow_actual: None,
            calories_orange_goal: None,
            calories_orange_actual: None,
            steps_goal: None,
            steps_actual: None,
            cardio_high_intensity_minutes: None,
            cardio_low_intensity_minutes: None,
            strength_workout_type: None,
            physio_active: None,
            physio_completed: None,
            weight_kg: None,
        }
    }

    /// The workout label, or `None` when NULL or the explicit "no workout" sentinel.
    pub fn workout_label(&self) -> Option<&str> {
        self.strength_workout_type
            .as_deref()
            .filter(|label| *label != NO_WORKOUT)
    }

    /// Low plus high intensity minutes, NULL counted as zero.
    pub fn cardio_minutes(&self) -> i64 {
        self.cardio_low_intensity_minutes
            .unwrap_or(0)
            .saturating_add(self.cardio_high_intensity_minutes.unwrap_or(0))
    }
}

/// Every nullable column of a [`DailyRecord`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricField {
    CaloriesGreenGoal,
    CaloriesGreenActual,
    CaloriesYellowGoal,
    CaloriesYellowActual,
    CaloriesOrangeGoal,
    CaloriesOrangeActual,
    StepsGoal,
    StepsActual,
    CardioHighIntensityMinutes,
    CardioLowIntensityMinutes,
    StrengthWorkoutType,
    PhysioActive,
    PhysioCompleted,
    WeightKg,
}

impl MetricField {
    pub const CALORIES: [MetricField; 6] = [
        MetricField::CaloriesGreenGoal,
        MetricField::CaloriesGreenActual,
        MetricField::CaloriesYellowGoal,
        MetricField::CaloriesYellowActual,
        MetricField::CaloriesOrangeGoal,
        MetricField::CaloriesOrangeActual,
    ];

    /// Column name in the `daily_data` table.
    pub fn column(self) -> &'static str {
        match self {
            MetricField::CaloriesGreenGoal => "calories_green_goal",
            MetricField::CaloriesGreenActual => "calories_green_actual",
            MetricField::CaloriesYellowGoal => "calories_yellow_goal",
            MetricField::CaloriesYellowActual => "calories_yellow_actual",
            MetricField::CaloriesOrangeGoal => "calories_orange_goal",
            MetricField::CaloriesOrangeActual => "calories_orange_actual",
            MetricField::StepsGoal => "steps_goal",
            MetricField::StepsActual => "steps_actual",
            MetricField::CardioHighIntensityMinutes => "cardio_high_intensity_minutes",
            MetricField::CardioLowIntensityMinutes => "cardio_low_intensity_minutes",
            MetricField::StrengthWorkoutType => "strength_workout_type",
            MetricField::PhysioActive => "physio_active",
            MetricField::PhysioCompleted => "physio_completed",
            MetricField::WeightKg => "weight_kg",
        }
    }

    /// Whether `record` holds a non-null value for this field.
    pub fn is_recorded(self, record: &DailyRecord) -> bool {
        match self {
            MetricField::CaloriesGreenGoal => record.calories_green_goal.is_some(),
            MetricField::CaloriesGreenActual => record.calories_green_actual.is_some(),
            MetricField::CaloriesYellowGoal => record.calories_yellow_goal.is_some(),
            MetricField::CaloriesYellowActual => record.calories_yellow_actual.is_some(),
            MetricField::CaloriesOrangeGoal => record.calories_orange_goal.is_some(),
            MetricField::CaloriesOrangeActual => record.calories_orange_actual.is_some(),
            MetricField::StepsGoal => record.steps_goal.is_some(),
            MetricField::StepsActual => record.steps_actual.is_some(),
            MetricField::CardioHighIntensityMinutes => {
                record.cardio_high_intensity_minutes.is_some()
            }
            MetricField::CardioLowIntensityMinutes => record.cardio_low_intensity_minutes.is_some(),
            MetricField::StrengthWorkoutType => record.strength_workout_type.is_some(),
            MetricField::PhysioActive => record.physio_active.is_some(),
            MetricField::PhysioCompleted => record.physio_completed.is_some(),
            MetricField::WeightKg => record.weight_kg.is_some(),
        }
    }
}

/// Read-only access to persisted daily records.
///
/// Every list returned is ordered ascending by date.
#[async_trait]
pub trait DailyStore: Send + Sync + 'static {
    /// Record for a single date, if one was stored.
    async fn get_record(&self, date: NaiveDate) -> Result<Option<DailyRecord>, StoreError>;

    /// Records with `start <= date <= end`.
    async fn get_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyRecord>, StoreError>;

    /// Every stored record.
    async fn get_history(&self) -> Result<Vec<DailyRecord>, StoreError>;

    /// Earliest date with any record.
    async fn earliest_date(&self) -> Result<Option<NaiveDate>, StoreError>;

    /// Latest date whose record has a non-null value for `field`.
    async fn latest_date_with(
        &self,
        field: MetricField,
    ) -> Result<Option<NaiveDate>, StoreError>;
}
