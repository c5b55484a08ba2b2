//! Per-metric reducers.
//!
//! Each module turns the date series into the fixed-shape summary its
//! dashboard card renders.
//!
//! # Modules
//!
//! - [`calories`]: last 7 days of calorie goals and actuals
//! - [`steps`]: yesterday, weekly averages, all-time best, streaks
//! - [`cardio`]: weekly minutes by intensity, streaks
//! - [`strength`]: weekly workout count, all-time workout frequencies
//! - [`physio`]: yesterday's active flag, streaks
//! - [`weight`]: trailing year of weight readings

pub mod calories;
pub mod cardio;
pub mod physio;
pub mod steps;
pub mod strength;
pub mod weight;

pub use calories::CaloriesSummary;
pub use cardio::CardioSummary;
pub use physio::PhysioSummary;
pub use steps::StepsSummary;
pub use strength::StrengthSummary;
pub use weight::WeightSummary;

/// Days in a rolling dashboard window.
pub const WEEK_DAYS: u32 = 7;
