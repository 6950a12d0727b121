//! Session extractors.
//!
//! Handlers name the caller they need in their signature: `CurrentSession`
//! for any signed-in user, `AdminSession` for administrator screens.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
};
use log::warn;

use crate::domain::models::Session;
use crate::AppState;

/// Where staff users land when they open an admin-only endpoint
pub const DASHBOARD_PATH: &str = "/api/dashboard";

pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

pub struct CurrentSession(pub Session);

#[async_trait]
impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)
            .ok_or_else(|| (StatusCode::UNAUTHORIZED, "Sign in required").into_response())?;

        state
            .auth_service
            .resolve(token)
            .map(CurrentSession)
            .ok_or_else(|| (StatusCode::UNAUTHORIZED, "Session expired or unknown").into_response())
    }
}

pub struct AdminSession(pub Session);

#[async_trait]
impl FromRequestParts<AppState> for AdminSession {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let CurrentSession(session) = CurrentSession::from_request_parts(parts, state).await?;
        if !session.is_admin() {
            warn!(
                "{} opened admin-only {}, redirecting",
                session.user.username,
                parts.uri.path()
            );
            return Err(Redirect::to(DASHBOARD_PATH).into_response());
        }
        Ok(AdminSession(session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_bearer_token() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc-123"));
        assert_eq!(bearer_token(&headers), Some("abc-123"));

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert_eq!(bearer_token(&headers), None);

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert_eq!(bearer_token(&headers), None);
    }
}
