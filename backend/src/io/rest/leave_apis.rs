//! # REST API for Leave Records
//!
//! Leave entry and editing (admin), the date-range preview used while
//! filling the form, and the history list every signed-in user can open.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::Datelike;
use log::info;
use serde::Deserialize;

use crate::domain::commands::leave::HistoryQuery;
use crate::domain::models::LeaveRecord;
use crate::io::rest::errors::error_response;
use crate::io::rest::mappers::LeaveRequestMapper;
use crate::io::rest::session::{AdminSession, CurrentSession};
use crate::mappers::LeaveRecordMapper;
use crate::AppState;
use shared::{
    CreateLeaveRequest, ExpandDatesRequest, ExpandDatesResponse, HistoryResponse,
    LeaveRecordResponse, SuccessResponse, UpdateLeaveRequest,
};

#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    pub staff: Option<String>,
    /// Calendar year, the current one when omitted
    pub year: Option<i32>,
    /// 1..=12; the whole year when omitted
    pub month: Option<u32>,
}

pub async fn create_leave(
    State(state): State<AppState>,
    AdminSession(_): AdminSession,
    Json(request): Json<CreateLeaveRequest>,
) -> impl IntoResponse {
    info!("POST /api/leaves - request: {:?}", request);

    let command = match LeaveRequestMapper::to_create_command(request, &state.calendar) {
        Ok(command) => command,
        Err(e) => return error_response("create leave", e.into()),
    };

    match state.leave_service.create_leave(command).await {
        Ok(record) => (
            StatusCode::CREATED,
            Json(LeaveRecordResponse {
                record: LeaveRecordMapper::to_dto(record, &state.calendar),
                success_message: "Leave recorded".to_string(),
            }),
        )
            .into_response(),
        Err(e) => error_response("create leave", e),
    }
}

pub async fn update_leave(
    State(state): State<AppState>,
    AdminSession(_): AdminSession,
    Path(record_id): Path<String>,
    Json(request): Json<UpdateLeaveRequest>,
) -> impl IntoResponse {
    info!("PUT /api/leaves/{} - request: {:?}", record_id, request);

    let command = match LeaveRequestMapper::to_update_command(request, &state.calendar) {
        Ok(command) => command,
        Err(e) => return error_response("update leave", e.into()),
    };

    match state.leave_service.update_leave(&record_id, command).await {
        Ok(record) => (
            StatusCode::OK,
            Json(LeaveRecordResponse {
                record: LeaveRecordMapper::to_dto(record, &state.calendar),
                success_message: "Leave updated".to_string(),
            }),
        )
            .into_response(),
        Err(e) => error_response("update leave", e),
    }
}

pub async fn delete_leave(
    State(state): State<AppState>,
    AdminSession(_): AdminSession,
    Path(record_id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/leaves/{}", record_id);

    match state.leave_service.delete_leave(&record_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(SuccessResponse {
                success_message: "Leave deleted".to_string(),
            }),
        )
            .into_response(),
        Err(e) => error_response("delete leave", e),
    }
}

/// Preview of the days a set of ranges covers and the total they count for
pub async fn expand_dates(
    State(state): State<AppState>,
    AdminSession(_): AdminSession,
    Json(request): Json<ExpandDatesRequest>,
) -> impl IntoResponse {
    info!("POST /api/leaves/expand - {} range(s)", request.date_ranges.len());

    let ranges = match LeaveRequestMapper::to_ranges(&request.date_ranges, &state.calendar) {
        Ok(ranges) => ranges,
        Err(e) => return error_response("expand dates", e.into()),
    };

    match state.leave_service.expand_dates(&ranges) {
        Ok(dates) => (
            StatusCode::OK,
            Json(ExpandDatesResponse {
                total_days: LeaveRecord::derive_total_days(request.is_half_day, &dates),
                dates: dates.iter().map(|d| d.format("%Y-%m-%d").to_string()).collect(),
            }),
        )
            .into_response(),
        Err(e) => error_response("expand dates", e.into()),
    }
}

pub async fn leave_history(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Query(params): Query<HistoryParams>,
) -> impl IntoResponse {
    info!("GET /api/leaves/history - params: {:?}", params);

    let query = HistoryQuery {
        staff_name: params.staff,
        year: params.year.unwrap_or_else(|| state.calendar.today().year()),
        month: params.month,
    };

    match state.leave_service.history(&session, &query).await {
        Ok(history) => (
            StatusCode::OK,
            Json(HistoryResponse {
                records: history
                    .records
                    .into_iter()
                    .map(|record| LeaveRecordMapper::to_dto(record, &state.calendar))
                    .collect(),
                stats: history.stats,
            }),
        )
            .into_response(),
        Err(e) => error_response("load leave history", e),
    }
}
