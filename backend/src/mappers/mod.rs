//! Conversions between the wire DTOs in `shared` and the domain models.
//!
//! The spreadsheet store and the HTTP API speak the same JSON shapes, so
//! both the store client and the REST handlers go through these mappers.

pub mod access_log_mapper;
pub mod leave_mapper;
pub mod staff_mapper;

pub use access_log_mapper::AccessLogMapper;
pub use leave_mapper::LeaveRecordMapper;
pub use staff_mapper::StaffMapper;

use log::warn;
use shared::StoreSnapshot;

use crate::domain::calendar::LocalCalendar;
use crate::domain::models::Snapshot;

/// Map a bulk read into domain models.
///
/// Rows the spreadsheet holds in an unreadable shape are skipped with a
/// warning instead of failing the whole read.
pub fn snapshot_to_domain(snapshot: StoreSnapshot, calendar: &LocalCalendar) -> Snapshot {
    let staff = snapshot.staff.into_iter().map(StaffMapper::to_domain).collect();

    let leaves = snapshot
        .leaves
        .into_iter()
        .filter_map(|dto| {
            let id = dto.id.clone();
            match LeaveRecordMapper::to_domain(dto, calendar) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!("Skipping unreadable leave record {}: {:#}", id, e);
                    None
                }
            }
        })
        .collect();

    let logs = snapshot
        .logs
        .into_iter()
        .filter_map(|dto| {
            let id = dto.id.clone();
            match AccessLogMapper::to_domain(dto) {
                Ok(log) => Some(log),
                Err(e) => {
                    warn!("Skipping unreadable access log {}: {:#}", id, e);
                    None
                }
            }
        })
        .collect();

    Snapshot { staff, leaves, logs }
}
