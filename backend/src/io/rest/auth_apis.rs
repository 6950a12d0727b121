//! # REST API for Authentication
//!
//! Sign in, sign out, the current user, and the staff password change.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use log::info;

use crate::domain::commands::auth::ChangePasswordCommand;
use crate::io::rest::errors::error_response;
use crate::io::rest::session::CurrentSession;
use crate::AppState;
use shared::{ChangePasswordRequest, LoginRequest, LoginResponse, SuccessResponse};

const INVALID_CREDENTIALS: &str = "ชื่อผู้ใช้หรือรหัสผ่านไม่ถูกต้อง";

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> impl IntoResponse {
    info!("POST /api/auth/login - username: {}", request.username);

    match state.auth_service.login(&request.username, &request.password).await {
        Ok(Some(session)) => (
            StatusCode::OK,
            Json(LoginResponse {
                token: session.token,
                user: session.user,
            }),
        )
            .into_response(),
        Ok(None) => (StatusCode::UNAUTHORIZED, INVALID_CREDENTIALS).into_response(),
        Err(e) => error_response("sign in", e),
    }
}

pub async fn logout(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> impl IntoResponse {
    info!("POST /api/auth/logout - {}", session.user.username);

    state.auth_service.logout(&session.token);
    (
        StatusCode::OK,
        Json(SuccessResponse {
            success_message: "Signed out".to_string(),
        }),
    )
}

pub async fn current_user(CurrentSession(session): CurrentSession) -> impl IntoResponse {
    info!("GET /api/auth/me - {}", session.user.username);
    (StatusCode::OK, Json(session.user))
}

pub async fn change_password(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Json(request): Json<ChangePasswordRequest>,
) -> impl IntoResponse {
    info!("POST /api/auth/password - {}", session.user.username);

    let command = ChangePasswordCommand {
        staff_id: request.staff_id,
        new_password: request.new_password,
        confirm_password: request.confirm_password,
    };

    match state.auth_service.change_password(&session, command).await {
        Ok(()) => (
            StatusCode::OK,
            Json(SuccessResponse {
                success_message: "Password changed".to_string(),
            }),
        )
            .into_response(),
        Err(e) => error_response("change password", e),
    }
}
