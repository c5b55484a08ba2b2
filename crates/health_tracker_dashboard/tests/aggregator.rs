use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use health_tracker_dashboard::{DashboardAggregator, DashboardError, DisplayCalendar};
use health_tracker_store::{DailyRecord, DailyStore, InMemoryDailyStore, MetricField, StoreError};

/// Monday; yesterday is Sunday 2024-01-14 and the week is 2024-01-08..=2024-01-14.
fn today() -> NaiveDate {
    day(15)
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
}

fn aggregator(records: Vec<DailyRecord>) -> DashboardAggregator {
    let store: InMemoryDailyStore = records.into_iter().collect();
    DashboardAggregator::new(Arc::new(store), DisplayCalendar::default())
}

fn steps(d: u32, actual: Option<i64>, goal: Option<i64>) -> DailyRecord {
    DailyRecord {
        steps_actual: actual,
        steps_goal: goal,
        ..DailyRecord::new(day(d))
    }
}

struct FailingStore;

#[async_trait]
impl DailyStore for FailingStore {
    async fn get_record(&self, _date: NaiveDate) -> Result<Option<DailyRecord>, StoreError> {
        Err(StoreError::Unavailable("disk gone".into()))
    }
    async fn get_range(
        &self,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> Result<Vec<DailyRecord>, StoreError> {
        Err(StoreError::Unavailable("disk gone".into()))
    }
    async fn get_history(&self) -> Result<Vec<DailyRecord>, StoreError> {
        Err(StoreError::Unavailable("disk gone".into()))
    }
    async fn earliest_date(&self) -> Result<Option<NaiveDate>, StoreError> {
        Err(StoreError::Unavailable("disk gone".into()))
    }
    async fn latest_date_with(
        &self,
        _field: MetricField,
    ) -> Result<Option<NaiveDate>, StoreError> {
        Err(StoreError::Unavailable("disk gone".into()))
    }
}

#[tokio::test]
async fn empty_store_gives_neutral_dashboard() {
    let out = aggregator(vec![]).fetch_dashboard_on(today()).await.unwrap();

    assert_eq!(out.calories.days.len(), 7);
    assert!(out.calories.days.iter().all(|d| !d.recorded));
    assert_eq!(out.calories.days[0].date, day(8));
    assert_eq!(out.calories.days[0].weekday, "Monday");
    assert_eq!(out.calories.days[6].weekday, "Sunday");

    assert_eq!(out.steps.weekly_average, 0.0);
    assert_eq!(out.steps.previous_weekly_average, 0.0);
    assert_eq!(out.steps.all_time_max, None);
    assert_eq!(out.steps.current_streak, 0);
    assert_eq!(out.steps.longest_streak.length, 0);
    assert_eq!(out.steps.longest_streak.end_date, None);

    assert_eq!(out.cardio.weekly_low_intensity_minutes, 0);
    assert_eq!(out.strength.weekly_workouts, 0);
    assert!(out.strength.workout_counts.is_empty());
    assert_eq!(out.physio.yesterday_active, None);
    assert!(out.weight.readings.is_empty());
}

#[tokio::test]
async fn weekly_step_average_divides_by_seven() {
    let agg = aggregator(vec![
        steps(3, Some(700), Some(500)),
        steps(8, Some(1000), None),
        steps(9, Some(2000), None),
    ]);
    let out = agg.fetch_dashboard_on(today()).await.unwrap();
    assert!((out.steps.weekly_average - 3000.0 / 7.0).abs() < 1e-9);
    assert!((out.steps.previous_weekly_average - 100.0).abs() < 1e-9);
    let peak = out.steps.all_time_max.unwrap();
    assert_eq!((peak.steps, peak.date), (2000, day(9)));
}

#[tokio::test]
async fn steps_current_streak_counts_back_from_yesterday() {
    let agg = aggregator(vec![
        steps(10, Some(9000), Some(8000)),
        steps(11, Some(100), Some(8000)),
        steps(12, Some(8000), Some(8000)),
        steps(13, Some(8500), Some(8000)),
        steps(14, Some(12000), Some(8000)),
    ]);
    let out = agg.fetch_dashboard_on(today()).await.unwrap();
    assert_eq!(out.steps.current_streak, 3);
    assert_eq!(out.steps.longest_streak.length, 3);
    assert_eq!(out.steps.longest_streak.end_date, Some(day(14)));
    assert_eq!(out.steps.yesterday.actual, Some(12000));
    assert_eq!(out.steps.yesterday.goal, Some(8000));
}

#[tokio::test]
async fn null_step_field_stops_the_streak() {
    let agg = aggregator(vec![
        steps(12, Some(9000), Some(8000)),
        steps(13, None, Some(8000)),
        steps(14, Some(9000), Some(8000)),
    ]);
    let out = agg.fetch_dashboard_on(today()).await.unwrap();
    assert_eq!(out.steps.current_streak, 1);
}

#[tokio::test]
async fn no_record_yesterday_means_no_current_streak() {
    let agg = aggregator(vec![
        steps(11, Some(9000), Some(8000)),
        steps(12, Some(9000), Some(8000)),
        steps(13, Some(9000), Some(8000)),
    ]);
    let out = agg.fetch_dashboard_on(today()).await.unwrap();
    assert_eq!(out.steps.current_streak, 0);
    assert_eq!(out.steps.longest_streak.length, 3);
    assert_eq!(out.steps.yesterday.actual, None);
}

#[tokio::test]
async fn streaks_separated_by_gap_do_not_merge() {
    let agg = aggregator(vec![
        steps(2, Some(9000), Some(8000)),
        steps(6, Some(9000), Some(8000)),
    ]);
    let out = agg.fetch_dashboard_on(today()).await.unwrap();
    assert_eq!(out.steps.longest_streak.length, 1);
    assert_eq!(out.steps.longest_streak.end_date, Some(day(2)));
}

#[tokio::test]
async fn physio_inactive_day_is_skipped() {
    let physio = |d, active, completed| DailyRecord {
        physio_active: active,
        physio_completed: completed,
        ..DailyRecord::new(day(d))
    };
    let agg = aggregator(vec![
        physio(12, Some(true), Some(true)),
        physio(13, Some(false), None),
        physio(14, Some(true), Some(true)),
    ]);
    let out = agg.fetch_dashboard_on(today()).await.unwrap();
    assert_eq!(out.physio.longest_streak.length, 2);
    assert_eq!(out.physio.longest_streak.end_date, Some(day(14)));
    assert_eq!(out.physio.current_streak, 2);
    assert_eq!(out.physio.yesterday_active, Some(true));
}

#[tokio::test]
async fn cardio_and_strength_weekly_figures() {
    let record = |d, low, high, workout: Option<&str>| DailyRecord {
        cardio_low_intensity_minutes: low,
        cardio_high_intensity_minutes: high,
        strength_workout_type: workout.map(str::to_string),
        ..DailyRecord::new(day(d))
    };
    let agg = aggregator(vec![
        record(1, Some(60), None, Some("Legs")),
        record(8, Some(10), None, Some("Legs")),
        record(9, None, Some(5), Some("None")),
        record(10, Some(20), None, Some("Upper")),
        record(14, None, None, None),
    ]);
    let out = agg.fetch_dashboard_on(today()).await.unwrap();

    assert_eq!(out.cardio.weekly_low_intensity_minutes, 30);
    assert_eq!(out.cardio.weekly_high_intensity_minutes, 5);
    assert_eq!(out.cardio.current_streak, 0);

    assert_eq!(out.strength.weekly_workouts, 2);
    assert_eq!(out.strength.workout_counts.get("Legs"), Some(&2));
    assert_eq!(out.strength.workout_counts.get("Upper"), Some(&1));
    assert!(!out.strength.workout_counts.contains_key("None"));
}

#[tokio::test]
async fn weight_history_ends_at_latest_weigh_in() {
    let weigh = |on: NaiveDate, kg| DailyRecord {
        weight_kg: Some(kg),
        ..DailyRecord::new(on)
    };
    let agg = aggregator(vec![
        weigh(NaiveDate::from_ymd_opt(2022, 6, 1).unwrap(), 150.0),
        weigh(NaiveDate::from_ymd_opt(2023, 2, 1).unwrap(), 140.0),
        weigh(NaiveDate::from_ymd_opt(2023, 6, 30).unwrap(), 135.5),
        steps(14, Some(1), Some(1)),
    ]);
    let out = agg.fetch_dashboard_on(today()).await.unwrap();
    let dates: Vec<_> = out.weight.readings.iter().map(|r| r.date).collect();
    assert_eq!(
        dates,
        vec![
            NaiveDate::from_ymd_opt(2023, 2, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 6, 30).unwrap(),
        ]
    );
    assert_eq!(out.weight.readings[1].weight_kg, 135.5);
}

#[tokio::test]
async fn null_row_yesterday_differs_from_no_row() {
    let agg = aggregator(vec![DailyRecord::new(day(14))]);
    let out = agg.fetch_dashboard_on(today()).await.unwrap();
    assert!(out.calories.days[6].recorded);
    assert!(!out.calories.days[5].recorded);
    assert_eq!(out.calories.days[6].green_goal, None);
    assert_eq!(out.steps.yesterday.actual, None);
    assert_eq!(out.physio.yesterday_active, None);
    // NULL physio flag is neutral; NULL steps break
    assert_eq!(out.physio.current_streak, 0);
    assert_eq!(out.steps.current_streak, 0);

    let report = agg.missing_data_on("dashboard", today()).await.unwrap();
    assert_eq!(report.count, 0);
    let report = agg.missing_data_on("steps", today()).await.unwrap();
    assert_eq!(report.count, 1);
}

#[tokio::test]
async fn missing_dashboard_on_empty_store_is_empty() {
    let report = aggregator(vec![])
        .missing_data_on("dashboard", today())
        .await
        .unwrap();
    assert_eq!(report.scope, "dashboard");
    assert_eq!(report.count, 0);
    assert!(report.dates.is_empty());
}

#[tokio::test]
async fn missing_dashboard_lists_dates_after_single_record() {
    let agg = aggregator(vec![DailyRecord::new(day(11))]);
    let report = agg.missing_data_on("Dashboard", today()).await.unwrap();
    let dates: Vec<_> = report.dates.iter().map(|m| m.date).collect();
    assert_eq!(dates, vec![day(12), day(13), day(14)]);
    assert_eq!(report.count, 3);
    assert_eq!(report.dates[1].display, "Saturday, 13th January");
}

#[tokio::test]
async fn missing_steps_includes_null_fields() {
    let agg = aggregator(vec![
        steps(12, Some(9000), Some(8000)),
        steps(13, Some(9000), None),
    ]);
    let report = agg.missing_data_on("steps", today()).await.unwrap();
    let dates: Vec<_> = report.dates.iter().map(|m| m.date).collect();
    assert_eq!(dates, vec![day(13), day(14)]);
}

#[tokio::test]
async fn record_dated_today_is_not_scanned() {
    let agg = aggregator(vec![DailyRecord::new(today())]);
    let report = agg.missing_data_on("weight", today()).await.unwrap();
    assert_eq!(report.count, 0);
}

#[tokio::test]
async fn unknown_scope_is_empty_without_touching_store() {
    let agg = DashboardAggregator::new(Arc::new(FailingStore), DisplayCalendar::default());
    let report = agg.missing_data_on("sleep", today()).await.unwrap();
    assert_eq!(report.scope, "sleep");
    assert_eq!(report.count, 0);
}

#[tokio::test]
async fn storage_failures_propagate() {
    let agg = DashboardAggregator::new(Arc::new(FailingStore), DisplayCalendar::default());
    let err = agg.fetch_dashboard_on(today()).await.unwrap_err();
    assert!(matches!(
        err,
        DashboardError::Store(StoreError::Unavailable(_))
    ));
    assert!(err.to_string().contains("disk gone"));

    let err = agg.missing_data_on("physio", today()).await.unwrap_err();
    assert!(matches!(err, DashboardError::Store(_)));
}

#[tokio::test]
async fn dashboard_serializes_with_expected_keys() {
    let out = aggregator(vec![steps(14, Some(5), Some(4))])
        .fetch_dashboard_on(today())
        .await
        .unwrap();
    let v = serde_json::to_value(&out).unwrap();
    for key in ["calories", "steps", "cardio", "strength", "physio", "weight"] {
        assert!(v.get(key).is_some(), "missing key {key}");
    }
    assert_eq!(v["calories"]["days"][6]["date"], "2024-01-14");
}
