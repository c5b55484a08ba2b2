//! Dashboard aggregation engine for the health tracker.
//!
//! Reduces the sparse daily record history into the summaries shown on the
//! dashboard: rolling 7-day windows, current and longest streaks, all-time
//! extrema and per-scope missing-data lists. Everything here is read-only over
//! a [`DailyStore`](health_tracker_store::DailyStore).

pub mod aggregator;
pub mod calendar;
pub mod config;
pub mod domains;
pub mod error;
pub mod http;
pub mod missing;
pub mod series;
pub mod state;
pub mod streak;
pub mod window;

pub use aggregator::{DashboardAggregator, DashboardSummary};
pub use calendar::DisplayCalendar;
pub use config::Config;
pub use error::{DashboardError, DashboardResult};
pub use missing::{MissingDataReport, MissingDate, MissingScope};
pub use state::AppState;
