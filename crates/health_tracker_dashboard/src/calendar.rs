//! Fixed display calendar used for "today", weekday names and display dates.
//!
//! The offset is configured explicitly so results never depend on the process
//! time zone.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, Offset, Utc};

/// Sydney standard time, in minutes east of UTC.
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = 600;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayCalendar {
    offset: FixedOffset,
}

impl Default for DisplayCalendar {
    fn default() -> Self {
        let offset = FixedOffset::east_opt(DEFAULT_UTC_OFFSET_MINUTES * 60).unwrap_or(Utc.fix());
        Self::new(offset)
    }
}

impl DisplayCalendar {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// `None` when the offset is outside ±24h.
    pub fn from_offset_minutes(minutes: i32) -> Option<Self> {
        minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .map(Self::new)
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Calendar date of `instant` in this calendar.
    pub fn date_of(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.offset).date_naive()
    }

    pub fn today(&self) -> NaiveDate {
        self.date_of(Utc::now())
    }

    /// Full English weekday name, e.g. `Monday`.
    pub fn weekday_name(&self, date: NaiveDate) -> String {
        date.format("%A").to_string()
    }

    /// e.g. `2024-01-13` -> `Saturday, 13th January`.
    pub fn display_date(&self, date: NaiveDate) -> String {
        format!(
            "{}, {}{} {}",
            self.weekday_name(date),
            date.day(),
            ordinal_suffix(date.day()),
            date.format("%B")
        )
    }
}

/// The most recent complete day.
pub fn yesterday(today: NaiveDate) -> NaiveDate {
    today - Duration::days(1)
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}
