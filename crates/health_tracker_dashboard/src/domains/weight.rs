use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::series::{DateRange, DateSeries};

/// Length of the weight chart, ending at the latest weigh-in.
pub const HISTORY_DAYS: u32 = 365;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct WeightReading {
    pub date: NaiveDate,
    pub weight_kg: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct WeightSummary {
    pub readings: Vec<WeightReading>,
}

/// Chart window for a latest weigh-in on `latest`.
pub fn weight_window(latest: NaiveDate) -> DateRange {
    DateRange::ending_at(latest, HISTORY_DAYS)
}

/// Every non-null weight inside `window`, oldest first.
pub fn summarize_weight(series: &DateSeries, window: DateRange) -> WeightSummary {
    let readings = series
        .in_range(window)
        .filter_map(|r| {
            r.weight_kg.map(|weight_kg| WeightReading {
                date: r.date,
                weight_kg,
            })
        })
        .collect();
    WeightSummary { readings }
}
