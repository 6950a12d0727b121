//! # Spreadsheet Store Client
//!
//! HTTP client for the spreadsheet web endpoint. The endpoint routes on an
//! `action` query parameter:
//!
//! - `GET  <url>?action=getData` returns `{ staff, leaves, logs }`
//! - `POST <url>?action=<write>` with a JSON body `{ "action": <write>, ...fields }`
//!
//! Write responses carry no usable body; a request counts as submitted once
//! the endpoint answers with a success status.

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info};
use serde::Serialize;
use serde_json::{json, Value};
use std::time::Duration;

use super::traits::{LeaveStore, StoreError};
use crate::domain::calendar::LocalCalendar;
use crate::domain::models::{AccessLog, LeaveRecord, Snapshot, Staff};
use crate::mappers::{self, AccessLogMapper, LeaveRecordMapper, StaffMapper};
use shared::StoreSnapshot;

#[derive(Clone)]
pub struct SheetStoreClient {
    client: reqwest::Client,
    url: String,
    calendar: LocalCalendar,
}

impl SheetStoreClient {
    pub fn new(url: &str, timeout: Duration, calendar: LocalCalendar) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client for the store")?;

        Ok(Self {
            client,
            url: url.trim_end_matches('/').to_string(),
            calendar,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn post_action<T: Serialize + ?Sized>(&self, action: &str, payload: &T) -> Result<()> {
        let mut body = serde_json::to_value(payload)
            .with_context(|| format!("Failed to encode payload for '{}'", action))?;
        if let Value::Object(fields) = &mut body {
            fields.insert("action".to_string(), Value::String(action.to_string()));
        }

        debug!("POST {}?action={}", self.url, action);
        let response = self
            .client
            .post(&self.url)
            .query(&[("action", action)])
            .json(&body)
            .send()
            .await
            .map_err(|source| StoreError::Transport {
                action: action.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status {
                action: action.to_string(),
                status: status.as_u16(),
            }
            .into());
        }

        info!("Store accepted '{}'", action);
        Ok(())
    }
}

#[async_trait]
impl LeaveStore for SheetStoreClient {
    async fn fetch_all(&self) -> Result<Snapshot> {
        let action = "getData";
        let response = self
            .client
            .get(&self.url)
            .query(&[("action", action)])
            .send()
            .await
            .map_err(|source| StoreError::Transport {
                action: action.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status {
                action: action.to_string(),
                status: status.as_u16(),
            }
            .into());
        }

        let snapshot: StoreSnapshot = response
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;

        debug!(
            "Fetched {} staff, {} leave records, {} access logs",
            snapshot.staff.len(),
            snapshot.leaves.len(),
            snapshot.logs.len()
        );

        Ok(mappers::snapshot_to_domain(snapshot, &self.calendar))
    }

    async fn create_staff(&self, staff: &Staff) -> Result<()> {
        self.post_action("saveStaff", &StaffMapper::to_dto(staff.clone())).await
    }

    async fn delete_staff(&self, staff_id: &str) -> Result<()> {
        self.post_action("deleteStaff", &json!({ "id": staff_id })).await
    }

    async fn create_leave_record(&self, record: &LeaveRecord) -> Result<()> {
        let dto = LeaveRecordMapper::to_dto(record.clone(), &self.calendar);
        self.post_action("saveLeave", &dto).await
    }

    async fn update_leave_record(&self, record: &LeaveRecord) -> Result<()> {
        let dto = LeaveRecordMapper::to_dto(record.clone(), &self.calendar);
        self.post_action("updateLeave", &dto).await
    }

    async fn delete_leave_record(&self, record_id: &str) -> Result<()> {
        self.post_action("deleteLeave", &json!({ "id": record_id })).await
    }

    async fn append_access_log(&self, log: &AccessLog) -> Result<()> {
        self.post_action("logAccess", &AccessLogMapper::to_dto(log.clone())).await
    }

    async fn change_password(&self, staff_id: &str, password: &str) -> Result<()> {
        self.post_action(
            "changePassword",
            &json!({ "staffId": staff_id, "password": password }),
        )
        .await
    }
}
