use anyhow::Result;
use log::{info, warn};
use std::cmp::Reverse;
use std::sync::Arc;

use crate::domain::models::AccessLog;
use crate::storage::LeaveStore;

#[derive(Clone)]
pub struct AccessLogService {
    store: Arc<dyn LeaveStore>,
}

impl AccessLogService {
    pub fn new(store: Arc<dyn LeaveStore>) -> Self {
        Self { store }
    }

    /// Sign-in history, newest first
    pub async fn list_logs(&self) -> Result<Vec<AccessLog>> {
        let mut logs = self.store.fetch_all().await?.logs;
        logs.sort_by_key(|log| Reverse(log.timestamp));
        info!("Found {} access log entries", logs.len());
        Ok(logs)
    }

    /// The store has no action for removing log rows, so this leaves the
    /// log untouched.
    pub async fn clear_logs(&self) -> Result<()> {
        warn!("Clearing access logs is not supported by the store; nothing was removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_support::*;
    use chrono::{TimeZone, Utc};
    use shared::Role;

    fn log_at(id: &str, hour: u32) -> AccessLog {
        AccessLog {
            id: id.to_string(),
            username: "admin".to_string(),
            full_name: "ผู้ดูแลระบบ".to_string(),
            role: Role::Admin,
            timestamp: Utc.with_ymd_and_hms(2025, 1, 10, hour, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_list_newest_first_and_clear_is_noop() {
        let (_, store) = seeded_store();
        store.append_access_log(&log_at("log-1", 1)).await.unwrap();
        store.append_access_log(&log_at("log-3", 9)).await.unwrap();
        store.append_access_log(&log_at("log-2", 5)).await.unwrap();
        let service = AccessLogService::new(store);

        let ids: Vec<String> = service.list_logs().await.unwrap().into_iter().map(|l| l.id).collect();
        assert_eq!(ids, vec!["log-3", "log-2", "log-1"]);

        service.clear_logs().await.unwrap();
        assert_eq!(service.list_logs().await.unwrap().len(), 3);
    }
}
