//! The dashboard aggregator: pulls records from the store and runs every reducer.

use std::sync::Arc;
use std::time::Instant;

use chrono::NaiveDate;
use health_tracker_store::{DailyStore, MetricField};
use serde::{Deserialize, Serialize};

use crate::calendar::{DisplayCalendar, yesterday};
use crate::domains::{
    self, CaloriesSummary, CardioSummary, PhysioSummary, StepsSummary, StrengthSummary,
    WeightSummary,
};
use crate::error::DashboardResult;
use crate::missing::{MissingDataReport, MissingScope, find_missing};
use crate::series::{DateRange, DateSeries};

/// Everything the dashboard page renders, keyed by metric.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct DashboardSummary {
    pub calories: CaloriesSummary,
    pub steps: StepsSummary,
    pub cardio: CardioSummary,
    pub strength: StrengthSummary,
    pub physio: PhysioSummary,
    pub weight: WeightSummary,
}

#[derive(Clone)]
pub struct DashboardAggregator {
    store: Arc<dyn DailyStore>,
    calendar: DisplayCalendar,
}

impl DashboardAggregator {
    pub fn new(store: Arc<dyn DailyStore>, calendar: DisplayCalendar) -> Self {
        Self { store, calendar }
    }

    pub fn calendar(&self) -> &DisplayCalendar {
        &self.calendar
    }

    /// Dashboard as of the current date in the display calendar.
    pub async fn fetch_dashboard(&self) -> DashboardResult<DashboardSummary> {
        self.fetch_dashboard_on(self.calendar.today()).await
    }

    /// Dashboard as of `today`; every window ends at the day before.
    pub async fn fetch_dashboard_on(&self, today: NaiveDate) -> DashboardResult<DashboardSummary> {
        metrics::counter!("dashboard_requests_total").increment(1);
        let started = Instant::now();

        let anchor = yesterday(today);
        let week = DateRange::ending_at(anchor, domains::WEEK_DAYS);
        let fortnight = DateRange::new(week.preceding().start, week.end);

        let recent: DateSeries = self
            .store
            .get_range(fortnight.start, fortnight.end)
            .await?
            .into_iter()
            .collect();
        let history: DateSeries = self.store.get_history().await?.into_iter().collect();
        let last_day: DateSeries = self.store.get_record(anchor).await?.into_iter().collect();
        let weight = self.weight_summary().await?;

        tracing::debug!(
            %anchor,
            recent = recent.len(),
            history = history.len(),
            "computing dashboard"
        );

        let summary = DashboardSummary {
            calories: domains::calories::summarize_calories(&recent, week, &self.calendar),
            steps: domains::steps::summarize_steps(&last_day, &recent, &history, week),
            cardio: domains::cardio::summarize_cardio(&recent, &history, week),
            strength: domains::strength::summarize_strength(&recent, &history, week),
            physio: domains::physio::summarize_physio(&last_day, &history, anchor),
            weight,
        };

        let elapsed = started.elapsed();
        metrics::histogram!("dashboard_aggregation_seconds").record(elapsed.as_secs_f64());
        tracing::info!(%anchor, elapsed_ms = elapsed.as_millis() as u64, "dashboard computed");
        Ok(summary)
    }

    async fn weight_summary(&self) -> DashboardResult<WeightSummary> {
        let Some(latest) = self.store.latest_date_with(MetricField::WeightKg).await? else {
            return Ok(WeightSummary::default());
        };
        let window = domains::weight::weight_window(latest);
        let series: DateSeries = self
            .store
            .get_range(window.start, window.end)
            .await?
            .into_iter()
            .collect();
        Ok(domains::weight::summarize_weight(&series, window))
    }

    /// Missing dates for `scope` as of the current date in the display calendar.
    pub async fn missing_data(&self, scope: &str) -> DashboardResult<MissingDataReport> {
        self.missing_data_on(scope, self.calendar.today()).await
    }

    /// Missing dates for `scope` between the earliest record and the day before `today`.
    ///
    /// Unknown scopes yield an empty report.
    pub async fn missing_data_on(
        &self,
        scope: &str,
        today: NaiveDate,
    ) -> DashboardResult<MissingDataReport> {
        let Some(parsed) = MissingScope::from_name(scope) else {
            metrics::counter!("missing_data_requests_total", "scope" => "unknown").increment(1);
            tracing::debug!(scope, "unknown missing-data scope");
            return Ok(MissingDataReport::empty(scope));
        };
        metrics::counter!("missing_data_requests_total", "scope" => parsed.as_str()).increment(1);

        let Some(earliest) = self.store.earliest_date().await? else {
            return Ok(MissingDataReport::empty(parsed.as_str()));
        };
        let span = DateRange::new(earliest, yesterday(today));
        if span.is_empty() {
            return Ok(MissingDataReport::empty(parsed.as_str()));
        }

        let series: DateSeries = self
            .store
            .get_range(span.start, span.end)
            .await?
            .into_iter()
            .collect();
        let dates = find_missing(&series, parsed, span, &self.calendar);
        tracing::debug!(scope = parsed.as_str(), missing = dates.len(), %earliest, "missing data scanned");
        Ok(MissingDataReport::new(parsed.as_str(), dates))
    }
}
