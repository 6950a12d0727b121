//! # Storage Traits
//!
//! The remote spreadsheet is the only source of truth. This trait is the
//! boundary the domain services talk to, so a test double or a different
//! backend can stand in for the real web endpoint.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::{AccessLog, LeaveRecord, Snapshot, Staff};

/// Failures talking to the remote store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store request '{action}' failed: {source}")]
    Transport {
        action: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Store request '{action}' returned HTTP {status}")]
    Status { action: String, status: u16 },
    #[error("Store returned an unreadable response: {0}")]
    Decode(String),
}

/// Interface to the spreadsheet-backed store.
///
/// Writes are fire-and-forget: `Ok(())` means the request was submitted,
/// not that the row is visible yet. Callers re-read with `fetch_all` to
/// observe the effect.
#[async_trait]
pub trait LeaveStore: Send + Sync {
    /// Single bulk read backing every list view
    async fn fetch_all(&self) -> Result<Snapshot>;

    async fn create_staff(&self, staff: &Staff) -> Result<()>;

    async fn delete_staff(&self, staff_id: &str) -> Result<()>;

    async fn create_leave_record(&self, record: &LeaveRecord) -> Result<()>;

    /// Replace a stored record wholesale, matched by id
    async fn update_leave_record(&self, record: &LeaveRecord) -> Result<()>;

    async fn delete_leave_record(&self, record_id: &str) -> Result<()>;

    async fn append_access_log(&self, log: &AccessLog) -> Result<()>;

    async fn change_password(&self, staff_id: &str, password: &str) -> Result<()>;
}
