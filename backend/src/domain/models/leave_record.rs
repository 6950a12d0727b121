use chrono::NaiveDate;
use shared::{HalfDayPeriod, LEAVE_TYPES};

use crate::domain::calendar::InvalidDateError;
use crate::domain::date_range::{DateRangeError, DateSet};

/// Total counted for a half-day leave, however many dates it touches
pub const HALF_DAY_TOTAL: f64 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct LeaveRecord {
    pub id: String,
    /// Snapshot of the staff member at filing time
    pub staff_id: String,
    pub staff_name: String,
    pub position: String,
    pub leave_type: String,
    pub dates: DateSet,
    pub filed_date: Option<NaiveDate>,
    pub is_half_day: bool,
    pub half_day_period: Option<HalfDayPeriod>,
    pub total_days: f64,
    pub note: String,
    pub created_at: String,
}

impl LeaveRecord {
    pub fn generate_id(now_millis: u64) -> String {
        format!("leave-{}", now_millis)
    }

    /// 0.5 for a half-day leave, otherwise one per calendar day
    pub fn derive_total_days(is_half_day: bool, dates: &DateSet) -> f64 {
        if is_half_day {
            HALF_DAY_TOTAL
        } else {
            dates.len() as f64
        }
    }

    pub fn recompute_total_days(&mut self) {
        self.total_days = Self::derive_total_days(self.is_half_day, &self.dates);
    }

    /// First day of the leave; `None` for a record with no dates
    pub fn anchor_date(&self) -> Option<NaiveDate> {
        self.dates.first()
    }

    /// Checks applied before any write reaches the store
    pub fn validate_for_write(&self) -> Result<(), LeaveValidationError> {
        if self.staff_id.trim().is_empty() {
            return Err(LeaveValidationError::NoStaffSelected);
        }
        if self.dates.is_empty() {
            return Err(LeaveValidationError::EmptyDates);
        }
        if !LEAVE_TYPES.contains(&self.leave_type.as_str()) {
            return Err(LeaveValidationError::UnknownLeaveType(self.leave_type.clone()));
        }
        if self.is_half_day && self.half_day_period.is_none() {
            return Err(LeaveValidationError::MissingHalfDayPeriod);
        }
        if self.note.chars().count() > 500 {
            return Err(LeaveValidationError::NoteTooLong);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LeaveValidationError {
    #[error("No staff member selected")]
    NoStaffSelected,
    #[error("At least one leave date is required")]
    EmptyDates,
    #[error("Unknown leave type: {0}")]
    UnknownLeaveType(String),
    #[error("Half-day leave needs a morning or afternoon period")]
    MissingHalfDayPeriod,
    #[error("Note cannot exceed 500 characters")]
    NoteTooLong,
    #[error(transparent)]
    InvalidDate(#[from] InvalidDateError),
    #[error(transparent)]
    DateRange(#[from] DateRangeError),
}
