//! # Domain Module
//!
//! Business logic for the staff leave tracker.
//!
//! ## Key Components
//!
//! - **Date model**: `calendar` reads wire dates into local calendar days,
//!   `date_range` expands picked ranges into a deduplicated, sorted day set
//! - **Leave records**: `models::leave_record` derives `total_days` and
//!   validates writes
//! - **Periods**: `period` selects records by the month, calendar year,
//!   fiscal half or fiscal year their first leave day falls in
//! - **Aggregation**: `aggregator` folds a filtered record set into the
//!   monthly, per-type and per-staff statistics
//! - **Services**: thin async orchestration over the `LeaveStore`, one per
//!   screen of the application
//!
//! Services re-read the store on every call; nothing here caches staff or
//! leave data between requests.

pub mod access_log_service;
pub mod aggregator;
pub mod auth_service;
pub mod calendar;
pub mod commands;
pub mod dashboard_service;
pub mod date_range;
pub mod errors;
pub mod leave_service;
pub mod models;
pub mod period;
pub mod report_service;
pub mod session_registry;
pub mod staff_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use access_log_service::AccessLogService;
pub use auth_service::{
    AdminCredential, AuthService, CredentialVerifier, PasswordChangeError, SharedPasswordVerifier,
};
pub use calendar::LocalCalendar;
pub use dashboard_service::DashboardService;
pub use errors::NotFoundError;
pub use leave_service::{LeaveHistory, LeaveService};
pub use report_service::ReportService;
pub use session_registry::SessionRegistry;
pub use staff_service::StaffService;
