//! SQLite-backed implementation of [`DailyStore`](crate::DailyStore).
//!
//! Reads the `daily_data` table written by the data-entry side of the app. Dates are
//! stored as `YYYY-MM-DD` text, booleans as 0/1 integers. Opening a fresh file creates
//! the table so an empty database is a valid, empty history.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Row, params};

use crate::{DailyRecord, DailyStore, MetricField, StoreError};

const SELECT_COLUMNS: &str = "SELECT date,
    calories_green_goal, calories_green_actual,
    calories_yellow_goal, calories_yellow_actual,
    calories_orange_goal, calories_orange_actual,
    steps_goal, steps_actual,
    cardio_high_intensity_minutes, cardio_low_intensity_minutes,
    strength_workout_type,
    physio_active, physio_completed,
    weight_kg
    FROM daily_data";

#[derive(Debug)]
pub struct SqliteDailyStore {
    conn: Mutex<Connection>,
}

impl SqliteDailyStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "opening daily_data store");
        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS daily_data (
              date TEXT PRIMARY KEY,
              calories_green_goal INTEGER,
              calories_green_actual INTEGER,
              calories_yellow_goal INTEGER,
              calories_yellow_actual INTEGER,
              calories_orange_goal INTEGER,
              calories_orange_actual INTEGER,
              steps_goal INTEGER,
              steps_actual INTEGER,
              cardio_high_intensity_minutes INTEGER,
              cardio_low_intensity_minutes INTEGER,
              strength_workout_type TEXT,
              physio_active BOOLEAN,
              physio_completed BOOLEAN,
              weight_kg REAL
            );
            "#,
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Insert or replace the record for `record.date`. Used for seeding; the dashboard never writes.
    pub fn upsert_record(&self, record: &DailyRecord) -> Result<(), StoreError> {
        let conn = self.lock()?;
        conn.execute(
            r#"
            INSERT OR REPLACE INTO daily_data (
              date,
              calories_green_goal, calories_green_actual,
              calories_yellow_goal, calories_yellow_actual,
              calories_orange_goal, calories_orange_actual,
              steps_goal, steps_actual,
              cardio_high_intensity_minutes, cardio_low_intensity_minutes,
              strength_workout_type,
              physio_active, physio_completed,
              weight_kg
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)
            "#,
            params![
                record.date,
                record.calories_green_goal,
                record.calories_green_actual,
                record.calories_yellow_goal,
                record.calories_yellow_actual,
                record.calories_orange_goal,
                record.calories_orange_actual,
                record.steps_goal,
                record.steps_actual,
                record.cardio_high_intensity_minutes,
                record.cardio_low_intensity_minutes,
                record.strength_workout_type,
                record.physio_active,
                record.physio_completed,
                record.weight_kg,
            ],
        )?;
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn
            .lock()
            .map_err(|_| StoreError::Unavailable("connection lock poisoned".into()))
    }

    fn query_records(
        &self,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> Result<Vec<DailyRecord>, StoreError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt
            .query_map(params, record_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<DailyRecord> {
    Ok(DailyRecord {
        date: row.get(0)?,
        calories_green_goal: row.get(1)?,
        calories_green_actual: row.get(2)?,
        calories_yellow_goal: row.get(3)?,
        calories_yellow_actual: row.get(4)?,
        calories_orange_goal: row.get(5)?,
        calories_orange_actual: row.get(6)?,
        steps_goal: row.get(7)?,
        steps_actual: row.get(8)?,
        cardio_high_intensity_minutes: row.get(9)?,
        cardio_low_intensity_minutes: row.get(10)?,
        strength_workout_type: row.get(11)?,
        physio_active: row.get(12)?,
        physio_completed: row.get(13)?,
        weight_kg: row.get(14)?,
    })
}

#[async_trait]
impl DailyStore for SqliteDailyStore {
    async fn get_record(&self, date: NaiveDate) -> Result<Option<DailyRecord>, StoreError> {
        let conn = self.lock()?;
        let sql = format!("{SELECT_COLUMNS} WHERE date = ?1");
        Ok(conn
            .query_row(&sql, params![date], record_from_row)
            .optional()?)
    }

    async fn get_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyRecord>, StoreError> {
        let sql = format!("{SELECT_COLUMNS} WHERE date >= ?1 AND date <= ?2 ORDER BY date ASC");
        self.query_records(&sql, params![start, end])
    }

    async fn get_history(&self) -> Result<Vec<DailyRecord>, StoreError> {
        let sql = format!("{SELECT_COLUMNS} ORDER BY date ASC");
        self.query_records(&sql, [])
    }

    async fn earliest_date(&self) -> Result<Option<NaiveDate>, StoreError> {
        let conn = self.lock()?;
        let date = conn.query_row("SELECT MIN(date) FROM daily_data", [], |row| {
            row.get::<_, Option<NaiveDate>>(0)
        })?;
        Ok(date)
    }

    async fn latest_date_with(
        &self,
        field: MetricField,
    ) -> Result<Option<NaiveDate>, StoreError> {
        let conn = self.lock()?;
        // Column names come from a closed enum, never from user input.
        let sql = format!(
            "SELECT MAX(date) FROM daily_data WHERE {} IS NOT NULL",
            field.column()
        );
        let date = conn.query_row(&sql, [], |row| row.get::<_, Option<NaiveDate>>(0))?;
        Ok(date)
    }
}
