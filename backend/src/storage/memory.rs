//! In-memory `LeaveStore`.
//!
//! Behaves like the spreadsheet endpoint (writes keyed by id, no
//! validation) and can be switched into an unavailable state to exercise
//! store-failure paths.

use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use super::traits::{LeaveStore, StoreError};
use crate::domain::models::{AccessLog, LeaveRecord, Snapshot, Staff};

#[derive(Clone, Default)]
pub struct MemoryStore {
    data: Arc<Mutex<Snapshot>>,
    passwords: Arc<Mutex<HashMap<String, String>>>,
    unavailable: Arc<AtomicBool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            data: Arc::new(Mutex::new(snapshot)),
            ..Self::default()
        }
    }

    /// Make every subsequent call fail as if the endpoint were down
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Password last submitted for a staff member
    pub fn stored_password(&self, staff_id: &str) -> Option<String> {
        self.passwords
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(staff_id)
            .cloned()
    }

    fn data(&self) -> MutexGuard<'_, Snapshot> {
        self.data.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn check_available(&self, action: &str) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Status {
                action: action.to_string(),
                status: 503,
            }
            .into());
        }
        debug!("MemoryStore: {}", action);
        Ok(())
    }
}

#[async_trait]
impl LeaveStore for MemoryStore {
    async fn fetch_all(&self) -> Result<Snapshot> {
        self.check_available("getData")?;
        Ok(self.data().clone())
    }

    async fn create_staff(&self, staff: &Staff) -> Result<()> {
        self.check_available("saveStaff")?;
        self.data().staff.push(staff.clone());
        Ok(())
    }

    async fn delete_staff(&self, staff_id: &str) -> Result<()> {
        self.check_available("deleteStaff")?;
        self.data().staff.retain(|s| s.id != staff_id);
        Ok(())
    }

    async fn create_leave_record(&self, record: &LeaveRecord) -> Result<()> {
        self.check_available("saveLeave")?;
        self.data().leaves.push(record.clone());
        Ok(())
    }

    async fn update_leave_record(&self, record: &LeaveRecord) -> Result<()> {
        self.check_available("updateLeave")?;
        let mut data = self.data();
        if let Some(existing) = data.leaves.iter_mut().find(|r| r.id == record.id) {
            *existing = record.clone();
        }
        Ok(())
    }

    async fn delete_leave_record(&self, record_id: &str) -> Result<()> {
        self.check_available("deleteLeave")?;
        self.data().leaves.retain(|r| r.id != record_id);
        Ok(())
    }

    async fn append_access_log(&self, log: &AccessLog) -> Result<()> {
        self.check_available("logAccess")?;
        self.data().logs.push(log.clone());
        Ok(())
    }

    async fn change_password(&self, staff_id: &str, password: &str) -> Result<()> {
        self.check_available("changePassword")?;
        self.passwords
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(staff_id.to_string(), password.to_string());
        Ok(())
    }
}
