//! # Report CRUD
//!
//! ## Endpoints
//!
//! - `POST /v1/reports` — create a report (every section defaulted)
//! - `GET /v1/reports` — list reports
//! - `GET /v1/reports/:id` — get one report

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::AppError;
use crate::extractors::{extract_validated_json, Validate};
use crate::routes::fetch_report;
use crate::state::{AppState, ReportRecord};

// ── Request/Response DTOs ───────────────────────────────────────────

/// Request to create a new report.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateReportRequest {
    /// Name of the disclosing entity.
    pub company_name: String,
    /// Financial year covered, e.g. `2025-26`.
    pub financial_year: String,
}

impl Validate for CreateReportRequest {
    fn validate(&self) -> Result<(), String> {
        if self.company_name.trim().is_empty() {
            return Err("company_name must not be empty".to_string());
        }
        if self.financial_year.trim().is_empty() {
            return Err("financial_year must not be empty".to_string());
        }
        Ok(())
    }
}

// ── Router ──────────────────────────────────────────────────────────

/// Build the reports router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/reports", get(list_reports).post(create_report))
        .route("/v1/reports/:id", get(get_report))
}

// ── Handlers ────────────────────────────────────────────────────────

/// POST /v1/reports — Create a new report.
#[utoipa::path(
    post,
    path = "/v1/reports",
    request_body = CreateReportRequest,
    responses(
        (status = 201, description = "Report created", body = ReportRecord),
        (status = 422, description = "Validation error", body = crate::error::ErrorBody),
    ),
    tag = "reports"
)]
pub(crate) async fn create_report(
    State(state): State<AppState>,
    body: Result<Json<CreateReportRequest>, JsonRejection>,
) -> Result<(axum::http::StatusCode, Json<ReportRecord>), AppError> {
    let req = extract_validated_json(body)?;
    let id = Uuid::new_v4();

    let record = ReportRecord::new_draft(id, req.company_name, req.financial_year);
    state.reports.insert(id, record.clone());

    if let Some(pool) = &state.db_pool {
        crate::db::reports::upsert(pool, &record).await.map_err(|e| {
            AppError::Internal(format!("failed to persist report {id}: {e}"))
        })?;
    }

    tracing::info!(report_id = %id, "report created");
    Ok((axum::http::StatusCode::CREATED, Json(record)))
}

/// GET /v1/reports — List all reports.
#[utoipa::path(
    get,
    path = "/v1/reports",
    responses(
        (status = 200, description = "List of reports", body = Vec<ReportRecord>),
    ),
    tag = "reports"
)]
pub(crate) async fn list_reports(State(state): State<AppState>) -> Json<Vec<ReportRecord>> {
    let mut reports = state.reports.list();
    reports.sort_by_key(|r| r.created_at);
    Json(reports)
}

/// GET /v1/reports/:id — Get a single report.
#[utoipa::path(
    get,
    path = "/v1/reports/{id}",
    params(("id" = Uuid, Path, description = "Report ID")),
    responses(
        (status = 200, description = "The report", body = ReportRecord),
        (status = 404, description = "Report not found", body = crate::error::ErrorBody),
    ),
    tag = "reports"
)]
pub(crate) async fn get_report(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ReportRecord>, AppError> {
    Ok(Json(fetch_report(&state, id)?))
}
