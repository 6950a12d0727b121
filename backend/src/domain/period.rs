//! Reporting periods.
//!
//! A leave record belongs to a period when its anchor date (the earliest
//! leave day) falls inside it. Records without dates belong to no period.
//!
//! The Thai fiscal year Y runs from October of Y-1 to September of Y and is
//! split into two evaluation halves:
//! - half 1: October..December of Y-1 plus January..March of Y
//! - half 2: April..September of Y

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::models::LeaveRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FiscalHalf {
    First,
    Second,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    /// A calendar month; `month` is 1..=12
    Month { year: i32, month: u32 },
    Year(i32),
    FiscalHalf { fiscal_year: i32, half: FiscalHalf },
    FiscalYear(i32),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PeriodError {
    #[error("Month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),
}

impl Period {
    pub fn month(year: i32, month: u32) -> Result<Self, PeriodError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodError::InvalidMonth(month));
        }
        Ok(Period::Month { year, month })
    }

    pub fn contains_date(&self, date: NaiveDate) -> bool {
        match *self {
            Period::Month { year, month } => date.year() == year && date.month() == month,
            Period::Year(year) => date.year() == year,
            Period::FiscalHalf { fiscal_year, half } => {
                fiscal_year_of(date) == fiscal_year && fiscal_half_of(date) == half
            }
            Period::FiscalYear(fiscal_year) => fiscal_year_of(date) == fiscal_year,
        }
    }

    pub fn contains(&self, record: &LeaveRecord) -> bool {
        record
            .anchor_date()
            .map(|anchor| self.contains_date(anchor))
            .unwrap_or(false)
    }

    /// Records in this period, in input order
    pub fn filter<'a>(&self, records: &'a [LeaveRecord]) -> Vec<&'a LeaveRecord> {
        records.iter().filter(|record| self.contains(record)).collect()
    }
}

/// Fiscal year a date belongs to: October onwards counts toward the next year
pub fn fiscal_year_of(date: NaiveDate) -> i32 {
    if date.month() >= 10 {
        date.year() + 1
    } else {
        date.year()
    }
}

pub fn fiscal_half_of(date: NaiveDate) -> FiscalHalf {
    match date.month() {
        4..=9 => FiscalHalf::Second,
        _ => FiscalHalf::First,
    }
}

/// Position of a calendar month (1..=12) in fiscal order, October = 0
pub fn fiscal_month_index(month: u32) -> usize {
    ((month + 2) % 12) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::date_range::DateSet;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record_on(dates: &[NaiveDate]) -> LeaveRecord {
        let dates: DateSet = dates.iter().copied().collect();
        LeaveRecord {
            id: "leave-1".to_string(),
            staff_id: "staff-1".to_string(),
            staff_name: "Somchai".to_string(),
            position: String::new(),
            leave_type: "การลาป่วย".to_string(),
            total_days: dates.len() as f64,
            dates,
            filed_date: None,
            is_half_day: false,
            half_day_period: None,
            note: String::new(),
            created_at: String::new(),
        }
    }

    #[test]
    fn test_month_and_year() {
        let leave = record_on(&[day(2025, 1, 10), day(2025, 1, 11)]);
        assert!(Period::Month { year: 2025, month: 1 }.contains(&leave));
        assert!(!Period::Month { year: 2025, month: 2 }.contains(&leave));
        assert!(!Period::Month { year: 2024, month: 1 }.contains(&leave));
        assert!(Period::Year(2025).contains(&leave));
        assert!(!Period::Year(2024).contains(&leave));
    }

    #[test]
    fn test_anchor_is_first_date() {
        // Spans a month boundary; classified by the first day only
        let leave = record_on(&[day(2025, 1, 31), day(2025, 2, 1)]);
        assert!(Period::Month { year: 2025, month: 1 }.contains(&leave));
        assert!(!Period::Month { year: 2025, month: 2 }.contains(&leave));
    }

    #[test]
    fn test_fiscal_half_boundaries() {
        let first = Period::FiscalHalf { fiscal_year: 2025, half: FiscalHalf::First };
        let second = Period::FiscalHalf { fiscal_year: 2025, half: FiscalHalf::Second };

        let new_years_eve = record_on(&[day(2024, 12, 31)]);
        assert!(first.contains(&new_years_eve));
        assert!(!second.contains(&new_years_eve));

        let end_of_march = record_on(&[day(2025, 3, 31)]);
        assert!(first.contains(&end_of_march));

        let april_first = record_on(&[day(2025, 4, 1)]);
        assert!(second.contains(&april_first));
        assert!(!first.contains(&april_first));

        let october = record_on(&[day(2024, 10, 1)]);
        assert!(first.contains(&october));

        // September 2025 is the last month of fiscal 2025, October 2025 starts 2026
        assert!(second.contains(&record_on(&[day(2025, 9, 30)])));
        assert!(!first.contains(&record_on(&[day(2025, 10, 1)])));
        assert!(!second.contains(&record_on(&[day(2025, 10, 1)])));
    }

    #[test]
    fn test_fiscal_year() {
        let fy = Period::FiscalYear(2026);
        assert!(fy.contains(&record_on(&[day(2025, 10, 1)])));
        assert!(fy.contains(&record_on(&[day(2026, 9, 30)])));
        assert!(!fy.contains(&record_on(&[day(2025, 9, 30)])));
        assert!(!fy.contains(&record_on(&[day(2026, 10, 1)])));
    }

    #[test]
    fn test_empty_dates_never_match() {
        let leave = record_on(&[]);
        assert!(!Period::Year(2025).contains(&leave));
        assert!(!Period::Month { year: 2025, month: 1 }.contains(&leave));
        assert!(!Period::FiscalYear(2025).contains(&leave));
        assert!(!Period::FiscalHalf { fiscal_year: 2025, half: FiscalHalf::First }.contains(&leave));
    }

    #[test]
    fn test_month_constructor_checks_range() {
        assert_eq!(Period::month(2025, 1), Ok(Period::Month { year: 2025, month: 1 }));
        assert_eq!(Period::month(2025, 0), Err(PeriodError::InvalidMonth(0)));
        assert_eq!(Period::month(2025, 13), Err(PeriodError::InvalidMonth(13)));
    }

    #[test]
    fn test_fiscal_month_index() {
        assert_eq!(fiscal_month_index(10), 0);
        assert_eq!(fiscal_month_index(12), 2);
        assert_eq!(fiscal_month_index(1), 3);
        assert_eq!(fiscal_month_index(9), 11);
    }
}
