//! In-memory `DailyStore` backed by a `BTreeMap`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{DailyRecord, DailyStore, MetricField, StoreError};

#[derive(Clone, Debug, Default)]
pub struct InMemoryDailyStore {
    records: BTreeMap<NaiveDate, DailyRecord>,
}

impl InMemoryDailyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any record already stored for its date.
    pub fn insert(&mut self, record: DailyRecord) {
        self.records.insert(record.date, record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<DailyRecord> for InMemoryDailyStore {
    fn from_iter<I: IntoIterator<Item = DailyRecord>>(iter: I) -> Self {
        let mut store = Self::new();
        for record in iter {
            store.insert(record);
        }
        store
    }
}

#[async_trait]
impl DailyStore for InMemoryDailyStore {
    async fn get_record(&self, date: NaiveDate) -> Result<Option<DailyRecord>, StoreError> {
        Ok(self.records.get(&date).cloned())
    }

    async fn get_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyRecord>, StoreError> {
        if start > end {
            return Ok(Vec::new());
        }
        Ok(self.records.range(start..=end).map(|(_, r)| r.clone()).collect())
    }

    async fn get_history(&self) -> Result<Vec<DailyRecord>, StoreError> {
        Ok(self.records.values().cloned().collect())
    }

    async fn earliest_date(&self) -> Result<Option<NaiveDate>, StoreError> {
        Ok(self.records.keys().next().copied())
    }

    async fn latest_date_with(
        &self,
        field: MetricField,
    ) -> Result<Option<NaiveDate>, StoreError> {
        Ok(self
            .records
            .values()
            .rev()
            .find(|r| field.is_recorded(r))
            .map(|r| r.date))
    }
}
