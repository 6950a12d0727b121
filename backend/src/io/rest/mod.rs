//! # REST API Interface Layer
//!
//! JSON endpoints under `/api`, one module per screen of the application:
//!
//! - `auth_apis`: sign in, sign out, current user, password change
//! - `dashboard_apis`: fiscal-year overview
//! - `staff_apis`: personnel roster
//! - `leave_apis`: leave entry, editing, date preview and history
//! - `report_apis`: official summaries and the CSV export
//! - `access_log_apis`: sign-in history
//!
//! Every endpoint except login needs a session token in the
//! `Authorization: Bearer` header. Admin-only endpoints send staff users
//! back to the dashboard with `303 See Other`.

pub mod access_log_apis;
pub mod auth_apis;
pub mod dashboard_apis;
pub mod errors;
pub mod leave_apis;
pub mod mappers;
pub mod report_apis;
pub mod session;
pub mod staff_apis;

pub use access_log_apis::*;
pub use auth_apis::*;
pub use dashboard_apis::*;
pub use leave_apis::*;
pub use report_apis::*;
pub use staff_apis::*;
