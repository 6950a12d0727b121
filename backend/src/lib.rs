//! # Staff Leave Tracker Backend
//!
//! Non-UI logic for the school's staff leave tracker.
//!
//! ## Architecture
//!
//! ```text
//! HTTP clients
//!     ↓
//! IO Layer (axum handlers, session extractors)
//!     ↓
//! Domain Layer (date model, periods, aggregation, services)
//!     ↓
//! Storage Layer (spreadsheet web endpoint behind `LeaveStore`)
//! ```
//!
//! The spreadsheet is the only durable state. The server keeps nothing
//! between requests except signed-in sessions.

pub mod config;
pub mod domain;
pub mod io;
pub mod mappers;
pub mod storage;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    routing::{delete, get, post, put},
    Router,
};
use log::{info, warn};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::domain::{
    AccessLogService, AuthService, CredentialVerifier, DashboardService, LeaveService,
    LocalCalendar, ReportService, SharedPasswordVerifier, StaffService,
};
use crate::storage::{LeaveStore, MemoryStore, SheetStoreClient};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub auth_service: AuthService,
    pub staff_service: StaffService,
    pub leave_service: LeaveService,
    pub dashboard_service: DashboardService,
    pub report_service: ReportService,
    pub access_log_service: AccessLogService,
    pub calendar: LocalCalendar,
}

impl AppState {
    pub fn new(
        store: Arc<dyn LeaveStore>,
        verifier: Arc<dyn CredentialVerifier>,
        calendar: LocalCalendar,
        min_password_length: usize,
    ) -> Self {
        Self {
            auth_service: AuthService::new(store.clone(), verifier, min_password_length),
            staff_service: StaffService::new(store.clone()),
            leave_service: LeaveService::new(store.clone()),
            dashboard_service: DashboardService::new(store.clone(), calendar),
            report_service: ReportService::new(store.clone(), calendar),
            access_log_service: AccessLogService::new(store),
            calendar,
        }
    }
}

/// Initialize the backend with all required services
pub async fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    let calendar = LocalCalendar::new(config.locale.utc_offset_hours);

    info!("Setting up store");
    let store: Arc<dyn LeaveStore> = if config.store.memory {
        warn!("Using the in-memory store; nothing will be persisted");
        Arc::new(MemoryStore::new())
    } else {
        let url = config
            .store
            .url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .context("No store URL configured (store.url or LEAVE_TRACKER_STORE_URL)")?;
        info!("Using spreadsheet endpoint {}", url);
        Arc::new(SheetStoreClient::new(
            url,
            Duration::from_secs(config.store.timeout_secs),
            calendar,
        )?)
    };

    info!("Setting up domain model");
    let verifier = Arc::new(SharedPasswordVerifier::new(
        config.auth.admin_credential(),
        config.auth.staff_password.clone(),
    ));

    Ok(AppState::new(
        store,
        verifier,
        calendar,
        config.auth.min_password_length,
    ))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, cors_origin: &str) -> Result<Router> {
    let origin = cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin: {}", cors_origin))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/auth/login", post(io::login))
        .route("/auth/logout", post(io::logout))
        .route("/auth/me", get(io::current_user))
        .route("/auth/password", post(io::change_password))
        .route("/dashboard", get(io::get_dashboard))
        .route("/staff", get(io::list_staff).post(io::create_staff))
        .route("/staff/:id", delete(io::delete_staff))
        .route("/leaves", post(io::create_leave))
        .route("/leaves/expand", post(io::expand_dates))
        .route("/leaves/history", get(io::leave_history))
        .route("/leaves/:id", put(io::update_leave).delete(io::delete_leave))
        .route("/reports/list", get(io::list_report))
        .route("/reports/matrix", get(io::matrix_report))
        .route("/reports/matrix.csv", get(io::export_matrix_csv))
        .route(
            "/access-logs",
            get(io::list_access_logs).delete(io::clear_access_logs),
        );

    Ok(Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state))
}
