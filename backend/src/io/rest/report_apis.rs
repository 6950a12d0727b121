//! # REST API for Reports
//!
//! All report endpoints take the same period query:
//!
//! - `kind=month&year=2025&month=1`
//! - `kind=year&year=2025`
//! - `kind=half&year=2025&half=1` (fiscal year 2025, October 2024 to March 2025)
//! - `kind=fiscal_year&year=2025`

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};
use log::info;
use serde::Deserialize;

use crate::domain::period::{FiscalHalf, Period};
use crate::io::rest::errors::error_response;
use crate::io::rest::session::AdminSession;
use crate::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    Month,
    Year,
    Half,
    FiscalYear,
}

#[derive(Debug, Deserialize)]
pub struct ReportParams {
    pub kind: ReportKind,
    pub year: i32,
    pub month: Option<u32>,
    pub half: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReportQueryError {
    #[error("A monthly report needs a month")]
    MissingMonth,
    #[error("A half-year report needs half=1 or half=2")]
    InvalidHalf,
    #[error("Report year {0} is out of range")]
    InvalidYear(i32),
}

const MIN_REPORT_YEAR: i32 = 1;
const MAX_REPORT_YEAR: i32 = 9999;

impl ReportParams {
    pub fn to_period(&self) -> anyhow::Result<Period> {
        if !(MIN_REPORT_YEAR..=MAX_REPORT_YEAR).contains(&self.year) {
            return Err(ReportQueryError::InvalidYear(self.year).into());
        }

        let period = match self.kind {
            ReportKind::Month => {
                let month = self.month.ok_or(ReportQueryError::MissingMonth)?;
                Period::month(self.year, month)?
            }
            ReportKind::Year => Period::Year(self.year),
            ReportKind::Half => {
                let half = match self.half {
                    Some(1) => FiscalHalf::First,
                    Some(2) => FiscalHalf::Second,
                    _ => return Err(ReportQueryError::InvalidHalf.into()),
                };
                Period::FiscalHalf {
                    fiscal_year: self.year,
                    half,
                }
            }
            ReportKind::FiscalYear => Period::FiscalYear(self.year),
        };
        Ok(period)
    }
}

pub async fn list_report(
    State(state): State<AppState>,
    AdminSession(_): AdminSession,
    Query(params): Query<ReportParams>,
) -> impl IntoResponse {
    info!("GET /api/reports/list - params: {:?}", params);

    let period = match params.to_period() {
        Ok(period) => period,
        Err(e) => return error_response("build report", e),
    };

    match state.report_service.list_report(period).await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => error_response("build report", e),
    }
}

pub async fn matrix_report(
    State(state): State<AppState>,
    AdminSession(_): AdminSession,
    Query(params): Query<ReportParams>,
) -> impl IntoResponse {
    info!("GET /api/reports/matrix - params: {:?}", params);

    let period = match params.to_period() {
        Ok(period) => period,
        Err(e) => return error_response("build matrix report", e),
    };

    match state.report_service.matrix_report(period).await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => error_response("build matrix report", e),
    }
}

pub async fn export_matrix_csv(
    State(state): State<AppState>,
    AdminSession(_): AdminSession,
    Query(params): Query<ReportParams>,
) -> impl IntoResponse {
    info!("GET /api/reports/matrix.csv - params: {:?}", params);

    let period = match params.to_period() {
        Ok(period) => period,
        Err(e) => return error_response("export matrix report", e),
    };

    match state.report_service.matrix_csv(period).await {
        Ok(csv) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"leave-report.csv\"",
                ),
            ],
            csv,
        )
            .into_response(),
        Err(e) => error_response("export matrix report", e),
    }
}
