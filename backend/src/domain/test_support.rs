//! Fixtures shared by the service tests.

use chrono::NaiveDate;
use shared::{Role, User};
use std::sync::Arc;

use crate::domain::date_range::DateSet;
use crate::domain::models::{LeaveRecord, Session, Snapshot, Staff};
use crate::storage::{LeaveStore, MemoryStore};

pub const SOMCHAI: &str = "นายสมชาย ใจดี";
pub const SOMYING: &str = "นางสาวสมหญิง รักเรียน";

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn staff(id: &str, name: &str, position: &str) -> Staff {
    Staff {
        id: id.to_string(),
        name: name.to_string(),
        position: position.to_string(),
    }
}

pub fn leave(id: &str, staff: &Staff, leave_type: &str, dates: &[NaiveDate]) -> LeaveRecord {
    let dates: DateSet = dates.iter().copied().collect();
    let mut record = LeaveRecord {
        id: id.to_string(),
        staff_id: staff.id.clone(),
        staff_name: staff.name.clone(),
        position: staff.position.clone(),
        leave_type: leave_type.to_string(),
        dates,
        filed_date: None,
        is_half_day: false,
        half_day_period: None,
        total_days: 0.0,
        note: String::new(),
        created_at: "2025-01-01T00:00:00.000Z".to_string(),
    };
    record.recompute_total_days();
    record
}

/// Two staff on the roster and three leave records:
/// Somchai: sick 10-11 Jan 2025, personal 3 Mar 2025;
/// Somying: vacation 5 Nov 2024.
pub fn seeded_snapshot() -> Snapshot {
    let somchai = staff("staff-1", SOMCHAI, "ครู");
    let somying = staff("staff-2", SOMYING, "ครูผู้ช่วย");
    let leaves = vec![
        leave("leave-1", &somchai, "การลาป่วย", &[day(2025, 1, 10), day(2025, 1, 11)]),
        leave("leave-2", &somchai, "การลากิจส่วนตัว", &[day(2025, 3, 3)]),
        leave("leave-3", &somying, "การลาพักผ่อน", &[day(2024, 11, 5)]),
    ];
    Snapshot {
        staff: vec![somchai, somying],
        leaves,
        logs: Vec::new(),
    }
}

pub fn seeded_store() -> (MemoryStore, Arc<dyn LeaveStore>) {
    let memory = MemoryStore::with_snapshot(seeded_snapshot());
    let store: Arc<dyn LeaveStore> = Arc::new(memory.clone());
    (memory, store)
}

pub fn admin_session() -> Session {
    Session {
        token: "admin-token".to_string(),
        user: User {
            username: "admin".to_string(),
            role: Role::Admin,
            full_name: "ผู้ดูแลระบบ".to_string(),
        },
    }
}

pub fn staff_session(full_name: &str) -> Session {
    Session {
        token: "staff-token".to_string(),
        user: User {
            username: full_name.split_whitespace().next().unwrap_or(full_name).to_string(),
            role: Role::User,
            full_name: full_name.to_string(),
        },
    }
}
