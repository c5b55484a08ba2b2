//! Rolling-window sums and averages over an explicit date range.

use health_tracker_store::DailyRecord;

use crate::series::{DateRange, DateSeries};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowTotal {
    pub sum: i64,
    pub days: i64,
}

impl WindowTotal {
    /// Sum divided by the window length; missing dates count as zero.
    ///
    /// `None` for an empty range.
    pub fn average(&self) -> Option<f64> {
        if self.days == 0 {
            return None;
        }
        Some(self.sum as f64 / self.days as f64)
    }
}

/// Sum `field` over `range`. Missing records and NULL values add nothing.
pub fn window_total(
    series: &DateSeries,
    range: DateRange,
    field: impl Fn(&DailyRecord) -> Option<i64>,
) -> WindowTotal {
    let sum = series
        .in_range(range)
        .filter_map(&field)
        .fold(0i64, i64::saturating_add);
    WindowTotal {
        sum,
        days: range.len_days(),
    }
}
