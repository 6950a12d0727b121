//! # Leave Service
//!
//! Recording, editing and listing leave. Every write is validated in full
//! before it is sent to the store, and `totalDays` is always derived here
//! from the final date set. Nothing is cached: each call starts from a
//! fresh bulk read.

use anyhow::Result;
use chrono::{SecondsFormat, Utc};
use log::{info, warn};
use std::cmp::Reverse;
use std::sync::Arc;

use shared::{HistoryStats, DEFAULT_POSITION};

use crate::domain::aggregator;
use crate::domain::commands::leave::{
    CreateLeaveCommand, HistoryQuery, RangeInput, UpdateLeaveCommand,
};
use crate::domain::date_range::{DateRange, DateRangeError, DateSet};
use crate::domain::errors::NotFoundError;
use crate::domain::models::{LeaveRecord, LeaveValidationError, Session};
use crate::domain::period::Period;
use crate::storage::LeaveStore;

/// Filtered history together with its statistics block
#[derive(Debug, Clone)]
pub struct LeaveHistory {
    pub records: Vec<LeaveRecord>,
    pub stats: HistoryStats,
}

#[derive(Clone)]
pub struct LeaveService {
    store: Arc<dyn LeaveStore>,
}

impl LeaveService {
    pub fn new(store: Arc<dyn LeaveStore>) -> Self {
        Self { store }
    }

    /// Merge picked ranges into one set of days
    pub fn expand_dates(&self, ranges: &[RangeInput]) -> Result<DateSet, DateRangeError> {
        let mut dates = DateSet::new();
        for input in ranges {
            let range = DateRange::new(input.start, input.end)?;
            dates.add_range(&range);
        }
        Ok(dates)
    }

    pub async fn create_leave(&self, command: CreateLeaveCommand) -> Result<LeaveRecord> {
        info!(
            "Creating leave: staff_id={}, type={}, ranges={}",
            command.staff_id,
            command.leave_type,
            command.date_ranges.len()
        );

        let dates = self
            .expand_dates(&command.date_ranges)
            .map_err(LeaveValidationError::from)?;

        let now = Utc::now();
        let mut record = LeaveRecord {
            id: LeaveRecord::generate_id(now.timestamp_millis() as u64),
            staff_id: command.staff_id.trim().to_string(),
            staff_name: String::new(),
            position: String::new(),
            leave_type: command.leave_type,
            dates,
            filed_date: command.filed_date,
            is_half_day: command.is_half_day,
            half_day_period: if command.is_half_day {
                command.half_day_period
            } else {
                None
            },
            total_days: 0.0,
            note: command.note.trim().to_string(),
            created_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        record.recompute_total_days();
        record.validate_for_write()?;

        let snapshot = self.store.fetch_all().await?;
        let staff = snapshot
            .staff
            .iter()
            .find(|s| s.id == record.staff_id)
            .ok_or(LeaveValidationError::NoStaffSelected)?;

        record.staff_name = staff.name.clone();
        record.position = command
            .position
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .or_else(|| Some(staff.position.clone()).filter(|p| !p.is_empty()))
            .unwrap_or_else(|| DEFAULT_POSITION.to_string());

        self.store.create_leave_record(&record).await?;

        info!(
            "Created leave {} for {}: {} day(s)",
            record.id, record.staff_name, record.total_days
        );
        Ok(record)
    }

    /// Replace the mutable fields of a stored record. The staff snapshot,
    /// id and creation time are kept.
    pub async fn update_leave(&self, record_id: &str, command: UpdateLeaveCommand) -> Result<LeaveRecord> {
        info!("Updating leave: {}", record_id);

        let snapshot = self.store.fetch_all().await?;
        let mut record = snapshot
            .leaves
            .into_iter()
            .find(|r| r.id == record_id)
            .ok_or_else(|| NotFoundError::new("Leave record", record_id))?;

        let position = command.position.trim();
        if !position.is_empty() {
            record.position = position.to_string();
        }
        record.leave_type = command.leave_type;
        record.dates = command.dates.into_iter().collect();
        record.filed_date = command.filed_date;
        record.is_half_day = command.is_half_day;
        record.half_day_period = if command.is_half_day {
            command.half_day_period
        } else {
            None
        };
        record.note = command.note.trim().to_string();
        record.recompute_total_days();
        record.validate_for_write()?;

        self.store.update_leave_record(&record).await?;

        info!("Updated leave {}: {} day(s)", record.id, record.total_days);
        Ok(record)
    }

    pub async fn delete_leave(&self, record_id: &str) -> Result<()> {
        info!("Deleting leave: {}", record_id);

        let snapshot = self.store.fetch_all().await?;
        if !snapshot.leaves.iter().any(|r| r.id == record_id) {
            warn!("Leave record not found: {}", record_id);
            return Err(NotFoundError::new("Leave record", record_id).into());
        }

        self.store.delete_leave_record(record_id).await?;
        info!("Deleted leave {}", record_id);
        Ok(())
    }

    /// History list, newest leave first.
    ///
    /// Staff users only ever see records filed under their own full name.
    /// The admin staff filter matches when either name contains the other.
    pub async fn history(&self, session: &Session, query: &HistoryQuery) -> Result<LeaveHistory> {
        let period = match query.month {
            Some(month) => Period::month(query.year, month)?,
            None => Period::Year(query.year),
        };

        let snapshot = self.store.fetch_all().await?;

        let staff_filter = query
            .staff_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty());

        let mut records: Vec<LeaveRecord> = snapshot
            .leaves
            .into_iter()
            .filter(|record| {
                if !session.is_admin() {
                    return record.staff_name == session.user.full_name;
                }
                match staff_filter {
                    Some(name) => record.staff_name.contains(name) || name.contains(record.staff_name.as_str()),
                    None => true,
                }
            })
            .filter(|record| period.contains(record))
            .collect();

        records.sort_by_key(|record| Reverse(record.anchor_date()));

        let stats = aggregator::history_stats(&records);
        info!(
            "History for {}: {} record(s), {} day(s)",
            session.user.username,
            stats.total_times,
            stats.total_days
        );

        Ok(LeaveHistory { records, stats })
    }
}
