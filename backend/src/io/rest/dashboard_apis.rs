//! # REST API for the Dashboard

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use log::info;
use serde::Deserialize;

use crate::io::rest::errors::error_response;
use crate::io::rest::session::CurrentSession;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct DashboardParams {
    pub fiscal_year: Option<i32>,
}

pub async fn get_dashboard(
    State(state): State<AppState>,
    CurrentSession(_): CurrentSession,
    Query(params): Query<DashboardParams>,
) -> impl IntoResponse {
    info!("GET /api/dashboard - fiscal_year: {:?}", params.fiscal_year);

    match state.dashboard_service.dashboard(params.fiscal_year).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => error_response("build dashboard", e),
    }
}
