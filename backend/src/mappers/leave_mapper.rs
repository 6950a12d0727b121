use anyhow::{Context, Result};
use log::debug;

use crate::domain::calendar::LocalCalendar;
use crate::domain::date_range::DateSet;
use crate::domain::models::LeaveRecord as DomainLeaveRecord;
use shared::LeaveRecord as SharedLeaveRecord;

/// Mapper between the spreadsheet's leave rows and domain leave records
pub struct LeaveRecordMapper;

impl LeaveRecordMapper {
    /// Reads a stored row. Dates are reduced to local calendar days, and
    /// `total_days` is re-derived rather than trusted.
    pub fn to_domain(dto: SharedLeaveRecord, calendar: &LocalCalendar) -> Result<DomainLeaveRecord> {
        let dates = dto
            .dates
            .iter()
            .map(|raw| calendar.parse_day(raw))
            .collect::<Result<DateSet, _>>()
            .with_context(|| format!("Failed to parse dates of leave record {}", dto.id))?;

        let filed_date = match dto.filed_date.trim() {
            "" => None,
            raw => match calendar.parse_day(raw) {
                Ok(day) => Some(day),
                Err(e) => {
                    debug!("Ignoring filed date of {}: {}", dto.id, e);
                    None
                }
            },
        };

        let total_days = DomainLeaveRecord::derive_total_days(dto.is_half_day, &dates);
        if total_days != dto.total_days {
            debug!(
                "Stored totalDays {} of {} differs from derived {}",
                dto.total_days, dto.id, total_days
            );
        }

        Ok(DomainLeaveRecord {
            id: dto.id,
            staff_id: dto.staff_id,
            staff_name: dto.staff_name,
            position: dto.position,
            leave_type: dto.leave_type,
            dates,
            filed_date,
            is_half_day: dto.is_half_day,
            half_day_period: dto.half_day_period,
            total_days,
            note: dto.note,
            created_at: dto.created_at,
        })
    }

    pub fn to_dto(domain: DomainLeaveRecord, calendar: &LocalCalendar) -> SharedLeaveRecord {
        SharedLeaveRecord {
            id: domain.id,
            staff_id: domain.staff_id,
            staff_name: domain.staff_name,
            position: domain.position,
            leave_type: domain.leave_type,
            dates: domain.dates.iter().map(|day| calendar.to_wire(day)).collect(),
            filed_date: domain
                .filed_date
                .map(|day| day.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            total_days: domain.total_days,
            is_half_day: domain.is_half_day,
            half_day_period: if domain.is_half_day {
                domain.half_day_period
            } else {
                None
            },
            note: domain.note,
            created_at: domain.created_at,
        }
    }
}
