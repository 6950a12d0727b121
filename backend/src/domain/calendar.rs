//! Calendar-day handling for the school's fixed locale.
//!
//! The spreadsheet stores leave dates as full ISO timestamps, but every
//! comparison in the application happens at day granularity in the school's
//! local time (UTC+7). `LocalCalendar` is the single place where a wire
//! timestamp becomes a `NaiveDate` and back.

use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};

/// Converts between wire timestamps and local calendar days
#[derive(Debug, Clone, Copy)]
pub struct LocalCalendar {
    offset: FixedOffset,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unrecognised date '{0}', expected YYYY-MM-DD or an RFC 3339 timestamp")]
pub struct InvalidDateError(pub String);

impl LocalCalendar {
    /// Create a calendar for a whole-hour UTC offset. Out-of-range offsets fall back to UTC.
    pub fn new(utc_offset_hours: i32) -> Self {
        let offset = FixedOffset::east_opt(utc_offset_hours * 3600).unwrap_or(Utc.fix());
        Self { offset }
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Today's date in local time
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.offset).date_naive()
    }

    /// Parse either a bare `YYYY-MM-DD` or an RFC 3339 timestamp into a local day.
    ///
    /// Bare dates are taken as-is. Timestamps are shifted into the local
    /// offset first, so `2025-01-09T17:00:00Z` is the 10th in Bangkok.
    pub fn parse_day(&self, raw: &str) -> Result<NaiveDate, InvalidDateError> {
        let trimmed = raw.trim();
        if let Ok(day) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return Ok(day);
        }
        DateTime::parse_from_rfc3339(trimmed)
            .map(|ts| ts.with_timezone(&self.offset).date_naive())
            .map_err(|_| InvalidDateError(raw.to_string()))
    }

    /// Wire representation of a calendar day: UTC midnight of that date
    pub fn to_wire(&self, day: NaiveDate) -> String {
        format!("{}T00:00:00.000Z", day.format("%Y-%m-%d"))
    }
}

impl Default for LocalCalendar {
    fn default() -> Self {
        Self::new(7)
    }
}
