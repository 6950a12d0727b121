//! # REST API for the Personnel Roster

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use log::info;
use serde::Deserialize;

use crate::domain::commands::staff::CreateStaffCommand;
use crate::io::rest::errors::error_response;
use crate::io::rest::session::AdminSession;
use crate::mappers::StaffMapper;
use crate::AppState;
use shared::{CreateStaffRequest, StaffResponse, SuccessResponse};

#[derive(Debug, Deserialize)]
pub struct StaffSearchParams {
    pub search: Option<String>,
}

pub async fn list_staff(
    State(state): State<AppState>,
    AdminSession(_): AdminSession,
    Query(params): Query<StaffSearchParams>,
) -> impl IntoResponse {
    info!("GET /api/staff - search: {:?}", params.search);

    match state.staff_service.list_staff(params.search.as_deref()).await {
        Ok(staff) => (StatusCode::OK, Json(StaffMapper::to_list_dto(staff))).into_response(),
        Err(e) => error_response("list staff", e),
    }
}

pub async fn create_staff(
    State(state): State<AppState>,
    AdminSession(_): AdminSession,
    Json(request): Json<CreateStaffRequest>,
) -> impl IntoResponse {
    info!("POST /api/staff - request: {:?}", request);

    let command = CreateStaffCommand {
        name: request.name,
        position: request.position,
    };

    match state.staff_service.create_staff(command).await {
        Ok(staff) => (
            StatusCode::CREATED,
            Json(StaffResponse {
                staff: StaffMapper::to_dto(staff),
                success_message: "Staff added".to_string(),
            }),
        )
            .into_response(),
        Err(e) => error_response("create staff", e),
    }
}

pub async fn delete_staff(
    State(state): State<AppState>,
    AdminSession(_): AdminSession,
    Path(staff_id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/staff/{}", staff_id);

    match state.staff_service.delete_staff(&staff_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(SuccessResponse {
                success_message: "Staff deleted".to_string(),
            }),
        )
            .into_response(),
        Err(e) => error_response("delete staff", e),
    }
}
