use anyhow::Result;
use chrono::Utc;
use log::{info, warn};
use std::sync::Arc;

use shared::DEFAULT_POSITION;

use crate::domain::commands::staff::CreateStaffCommand;
use crate::domain::errors::NotFoundError;
use crate::domain::models::Staff;
use crate::storage::LeaveStore;

/// Service for the personnel roster
#[derive(Clone)]
pub struct StaffService {
    store: Arc<dyn LeaveStore>,
}

impl StaffService {
    pub fn new(store: Arc<dyn LeaveStore>) -> Self {
        Self { store }
    }

    /// Roster in stored order, optionally narrowed by a case-insensitive
    /// name search
    pub async fn list_staff(&self, search: Option<&str>) -> Result<Vec<Staff>> {
        let snapshot = self.store.fetch_all().await?;

        let staff = match search.map(str::trim).filter(|s| !s.is_empty()) {
            Some(term) => {
                let term = term.to_lowercase();
                snapshot
                    .staff
                    .into_iter()
                    .filter(|s| s.name.to_lowercase().contains(&term))
                    .collect()
            }
            None => snapshot.staff,
        };

        info!("Found {} staff", staff.len());
        Ok(staff)
    }

    pub async fn create_staff(&self, command: CreateStaffCommand) -> Result<Staff> {
        let name = command.name.trim().to_string();
        let position = command
            .position
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_POSITION.to_string());

        info!("Creating staff: name={}, position={}", name, position);
        Staff::validate_new(&name, &position)?;

        let staff = Staff {
            id: Staff::generate_id(Utc::now().timestamp_millis() as u64),
            name,
            position,
        };
        self.store.create_staff(&staff).await?;

        info!("Created staff {} with ID: {}", staff.name, staff.id);
        Ok(staff)
    }

    /// Remove a roster entry. Leave records filed under it are kept.
    pub async fn delete_staff(&self, staff_id: &str) -> Result<()> {
        info!("Deleting staff: {}", staff_id);

        let snapshot = self.store.fetch_all().await?;
        let staff = snapshot
            .staff
            .iter()
            .find(|s| s.id == staff_id)
            .ok_or_else(|| {
                warn!("Staff not found: {}", staff_id);
                NotFoundError::new("Staff", staff_id)
            })?;

        self.store.delete_staff(staff_id).await?;
        info!("Deleted staff {} with ID: {}", staff.name, staff.id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::StaffValidationError;
    use crate::domain::test_support::*;

    #[tokio::test]
    async fn test_list_and_search() {
        let (_, store) = seeded_store();
        let service = StaffService::new(store);

        assert_eq!(service.list_staff(None).await.unwrap().len(), 2);
        assert_eq!(service.list_staff(Some("  ")).await.unwrap().len(), 2);

        let found = service.list_staff(Some("สมหญิง")).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, SOMYING);
    }

    #[tokio::test]
    async fn test_search_ignores_case() {
        let (_, store) = seeded_store();
        store
            .create_staff(&staff("staff-3", "Mr. John Smith", "ครูอัตราจ้าง"))
            .await
            .unwrap();
        let service = StaffService::new(store);

        let found = service.list_staff(Some("JOHN")).await.unwrap();
        assert_eq!(found.len(), 1);
    }

    #[tokio::test]
    async fn test_create_defaults_position_and_trims_name() {
        let (_, store) = seeded_store();
        let service = StaffService::new(store.clone());

        let created = service
            .create_staff(CreateStaffCommand {
                name: "  นายใหม่ มาแล้ว ".to_string(),
                position: None,
            })
            .await
            .unwrap();

        assert_eq!(created.name, "นายใหม่ มาแล้ว");
        assert_eq!(created.position, DEFAULT_POSITION);
        assert!(created.id.starts_with("staff-"));
        assert_eq!(store.fetch_all().await.unwrap().staff.len(), 3);
    }

    #[tokio::test]
    async fn test_create_rejects_blank_name() {
        let (_, store) = seeded_store();
        let service = StaffService::new(store);

        let err = service
            .create_staff(CreateStaffCommand {
                name: "   ".to_string(),
                position: Some("ครู".to_string()),
            })
            .await
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<StaffValidationError>(),
            Some(&StaffValidationError::EmptyName)
        );
    }

    #[tokio::test]
    async fn test_delete_keeps_leave_history() {
        let (_, store) = seeded_store();
        let service = StaffService::new(store.clone());

        service.delete_staff("staff-2").await.unwrap();
        let snapshot = store.fetch_all().await.unwrap();
        assert_eq!(snapshot.staff.len(), 1);
        assert_eq!(snapshot.leaves.len(), 3);

        let err = service.delete_staff("staff-2").await.unwrap_err();
        assert!(err.downcast_ref::<NotFoundError>().is_some());
    }
}
