//! # Checklist & Submission
//!
//! The review step of the wizard. The checklist is derived state —
//! recomputed from the stored sections on every request — and the submit
//! endpoint gates on it: an incomplete report is rejected with the
//! checklist in the error details, never partially filed.
//!
//! ## Endpoints
//!
//! - `GET  /v1/reports/:id/checklist` — per-section completion records
//! - `POST /v1/reports/:id/submit` — gate, freeze, digest, render

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use brsr_core::{ReportId, SectionKey};
use brsr_render::RenderRequest;
use brsr_report::{report_checklist, ReportChecklist, ReportError, ReportStatus, SubmissionReceipt};

use crate::error::AppError;
use crate::routes::fetch_report;
use crate::state::{AppState, ReportRecord};

// ── Response DTOs ───────────────────────────────────────────────────

/// Response to a successful submission.
#[derive(Debug, Serialize, ToSchema)]
pub struct SubmitResponse {
    /// The submission receipt with the canonical content digest.
    #[schema(value_type = Object)]
    pub receipt: SubmissionReceipt,
    /// Whether a PDF could be produced by the configured backend.
    pub pdf_available: bool,
    /// Where the rendered document can be fetched.
    pub pdf_url: String,
}

// ── Router ──────────────────────────────────────────────────────────

/// Build the checklist/submission router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/reports/:id/checklist", get(get_checklist))
        .route("/v1/reports/:id/submit", post(submit_report))
}

/// Evaluate the checklist over a report's stored sections.
fn checklist_for(record: &ReportRecord) -> ReportChecklist {
    report_checklist(|section: SectionKey| record.sections.get(&section).map(|s| &s.data))
}

// ── Handlers ────────────────────────────────────────────────────────

/// GET /v1/reports/:id/checklist — Completion checklist.
#[utoipa::path(
    get,
    path = "/v1/reports/{id}/checklist",
    params(("id" = Uuid, Path, description = "Report ID")),
    responses(
        (status = 200, description = "The checklist", body = Object),
        (status = 404, description = "Report not found", body = crate::error::ErrorBody),
    ),
    tag = "submission"
)]
pub(crate) async fn get_checklist(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ReportChecklist>, AppError> {
    let record = fetch_report(&state, id)?;
    Ok(Json(checklist_for(&record)))
}

/// POST /v1/reports/:id/submit — Submit the report.
///
/// Gates on the checklist, transitions `DRAFT → SUBMITTED`, computes the
/// canonical submission digest, and attempts a PDF render. A failing
/// rendering backend does not void the submission — the receipt stands
/// and the export endpoint can be retried.
#[utoipa::path(
    post,
    path = "/v1/reports/{id}/submit",
    params(("id" = Uuid, Path, description = "Report ID")),
    responses(
        (status = 200, description = "Submitted", body = SubmitResponse),
        (status = 404, description = "Report not found", body = crate::error::ErrorBody),
        (status = 409, description = "Already submitted", body = crate::error::ErrorBody),
        (status = 422, description = "Report incomplete", body = crate::error::ErrorBody),
    ),
    tag = "submission"
)]
pub(crate) async fn submit_report(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SubmitResponse>, AppError> {
    let record = state
        .reports
        .try_update(&id, |record| {
            if record.status == ReportStatus::Submitted {
                return Err(AppError::from(ReportError::AlreadySubmitted {
                    id: ReportId::from_uuid(id),
                }));
            }

            let checklist = checklist_for(record);
            if !checklist.all_complete {
                return Err(AppError::ValidationWithDetails {
                    message: ReportError::Incomplete {
                        id: ReportId::from_uuid(id),
                        missing_sections: checklist.missing_section_titles(),
                    }
                    .to_string(),
                    details: serde_json::to_value(&checklist)
                        .unwrap_or(serde_json::Value::Null),
                });
            }

            let now = Utc::now();
            let receipt =
                SubmissionReceipt::compute(ReportId::from_uuid(id), &record.section_payloads(), now)
                    .map_err(|e| AppError::Internal(format!("digest failed: {e}")))?;
            record.status = ReportStatus::Submitted;
            record.submission = Some(receipt);
            record.updated_at = now;
            Ok(record.clone())
        })
        .ok_or_else(|| AppError::NotFound(format!("report {id}")))??;

    if let Some(pool) = &state.db_pool {
        crate::db::reports::upsert(pool, &record).await.map_err(|e| {
            AppError::Internal(format!("failed to persist report {id}: {e}"))
        })?;
    }

    // Render outside the store lock. A backend failure is logged, not fatal.
    let receipt = record
        .submission
        .clone()
        .ok_or_else(|| AppError::Internal("submission receipt missing".to_string()))?;
    let render_request = render_request_for(&record);
    let pdf_available = match state.renderer.render(&render_request).await {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!(report_id = %id, error = %e, "post-submit render failed");
            false
        }
    };

    tracing::info!(report_id = %id, digest = %receipt.digest, "report submitted");
    Ok(Json(SubmitResponse {
        receipt,
        pdf_available,
        pdf_url: format!("/v1/reports/{id}/export/pdf"),
    }))
}

/// Build the render request for a report, with row IDs stripped.
pub(crate) fn render_request_for(record: &ReportRecord) -> RenderRequest {
    let sections = serde_json::Value::Object(record.section_payloads());
    RenderRequest {
        report_id: ReportId::from_uuid(record.id),
        company_name: record.company_name.clone(),
        financial_year: record.financial_year.clone(),
        status: record.status.to_string(),
        digest_hex: record.submission.as_ref().map(|r| r.digest.to_hex()),
        sections: brsr_form::strip_row_ids(&sections),
    }
}
