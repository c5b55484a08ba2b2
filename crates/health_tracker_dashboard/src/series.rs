//! Gap-aware, date-ordered view over daily records.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use health_tracker_store::DailyRecord;
use serde::{Deserialize, Serialize};

/// One field on one date: no record, a record with the field NULL, or a value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Observation<T> {
    Absent,
    Null,
    Value(T),
}

impl<T> Observation<T> {
    pub fn value(self) -> Option<T> {
        match self {
            Observation::Value(v) => Some(v),
            Observation::Absent | Observation::Null => None,
        }
    }
}

/// Inclusive range of calendar dates. Empty when `start > end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The `days` dates ending at (and including) `end`.
    pub fn ending_at(end: NaiveDate, days: u32) -> Self {
        let span = i64::from(days.max(1)) - 1;
        Self::new(end - Duration::days(span), end)
    }

    /// Range of the same length immediately before this one.
    pub fn preceding(&self) -> Self {
        let len = self.len_days().max(1);
        let end = self.start - Duration::days(1);
        Self::new(end - Duration::days(len - 1), end)
    }

    pub fn len_days(&self) -> i64 {
        if self.start > self.end {
            0
        } else {
            (self.end - self.start).num_days() + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Every date in the range, ascending.
    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

/// Records keyed by date, iterated ascending.
#[derive(Clone, Debug, Default)]
pub struct DateSeries {
    records: BTreeMap<NaiveDate, DailyRecord>,
}

impl FromIterator<DailyRecord> for DateSeries {
    fn from_iter<I: IntoIterator<Item = DailyRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().map(|r| (r.date, r)).collect(),
        }
    }
}

impl DateSeries {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, date: NaiveDate) -> Option<&DailyRecord> {
        self.records.get(&date)
    }

    /// Look up one field on `date`, keeping "no record" apart from "NULL".
    pub fn observe<T>(
        &self,
        date: NaiveDate,
        field: impl Fn(&DailyRecord) -> Option<T>,
    ) -> Observation<T> {
        match self.records.get(&date) {
            None => Observation::Absent,
            Some(record) => field(record).map_or(Observation::Null, Observation::Value),
        }
    }

    /// All records, ascending by date.
    pub fn iter(&self) -> impl Iterator<Item = &DailyRecord> {
        self.records.values()
    }

    /// Records inside `range`, ascending by date.
    pub fn in_range(&self, range: DateRange) -> impl Iterator<Item = &DailyRecord> {
        let end = range.end;
        self.records
            .range(range.start..)
            .take_while(move |(date, _)| **date <= end)
            .map(|(_, record)| record)
    }
}
