//! # REST API for the Access Log

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use log::info;

use crate::io::rest::errors::error_response;
use crate::io::rest::session::AdminSession;
use crate::mappers::AccessLogMapper;
use crate::AppState;
use shared::{AccessLogListResponse, SuccessResponse};

pub async fn list_access_logs(
    State(state): State<AppState>,
    AdminSession(_): AdminSession,
) -> impl IntoResponse {
    info!("GET /api/access-logs");

    match state.access_log_service.list_logs().await {
        Ok(logs) => (
            StatusCode::OK,
            Json(AccessLogListResponse {
                logs: logs.into_iter().map(AccessLogMapper::to_dto).collect(),
            }),
        )
            .into_response(),
        Err(e) => error_response("list access logs", e),
    }
}

/// Accepted but removes nothing; the store keeps every sign-in
pub async fn clear_access_logs(
    State(state): State<AppState>,
    AdminSession(_): AdminSession,
) -> impl IntoResponse {
    info!("DELETE /api/access-logs");

    match state.access_log_service.clear_logs().await {
        Ok(()) => (
            StatusCode::OK,
            Json(SuccessResponse {
                success_message: "Access logs are kept by the store and were not removed".to_string(),
            }),
        )
            .into_response(),
        Err(e) => error_response("clear access logs", e),
    }
}
