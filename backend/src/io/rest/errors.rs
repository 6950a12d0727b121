//! Translation of service errors into HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::error;

use crate::domain::calendar::InvalidDateError;
use crate::domain::date_range::DateRangeError;
use crate::domain::models::{LeaveValidationError, StaffValidationError};
use crate::domain::period::PeriodError;
use crate::domain::{NotFoundError, PasswordChangeError};
use crate::io::rest::report_apis::ReportQueryError;
use crate::storage::StoreError;

pub fn status_for(e: &anyhow::Error) -> StatusCode {
    if let Some(password) = e.downcast_ref::<PasswordChangeError>() {
        return match password {
            PasswordChangeError::Mismatch | PasswordChangeError::TooShort(_) => StatusCode::BAD_REQUEST,
            PasswordChangeError::AdminNotAllowed | PasswordChangeError::NotOwnAccount => {
                StatusCode::FORBIDDEN
            }
        };
    }

    if e.downcast_ref::<LeaveValidationError>().is_some()
        || e.downcast_ref::<StaffValidationError>().is_some()
        || e.downcast_ref::<DateRangeError>().is_some()
        || e.downcast_ref::<InvalidDateError>().is_some()
        || e.downcast_ref::<PeriodError>().is_some()
        || e.downcast_ref::<ReportQueryError>().is_some()
    {
        StatusCode::BAD_REQUEST
    } else if e.downcast_ref::<NotFoundError>().is_some() {
        StatusCode::NOT_FOUND
    } else if e.downcast_ref::<StoreError>().is_some() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Log the failure and answer with its status and message
pub fn error_response(action: &str, e: anyhow::Error) -> Response {
    let status = status_for(&e);
    error!("Failed to {}: {:#}", action, e);
    (status, e.to_string()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_status_mapping() {
        let day = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let cases: Vec<(anyhow::Error, StatusCode)> = vec![
            (LeaveValidationError::EmptyDates.into(), StatusCode::BAD_REQUEST),
            (StaffValidationError::EmptyName.into(), StatusCode::BAD_REQUEST),
            (
                DateRangeError::EndBeforeStart { start: day, end: day }.into(),
                StatusCode::BAD_REQUEST,
            ),
            (PasswordChangeError::TooShort(4).into(), StatusCode::BAD_REQUEST),
            (PasswordChangeError::NotOwnAccount.into(), StatusCode::FORBIDDEN),
            (NotFoundError::new("Leave record", "leave-1").into(), StatusCode::NOT_FOUND),
            (
                StoreError::Status {
                    action: "getData".to_string(),
                    status: 500,
                }
                .into(),
                StatusCode::BAD_GATEWAY,
            ),
            (anyhow::anyhow!("boom"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            assert_eq!(status_for(&error), expected, "{}", error);
        }
    }
}
