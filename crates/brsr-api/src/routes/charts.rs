//! # Charts & PDF Export
//!
//! Read-only rendering surfaces. Chart datasets are computed in-process
//! from the stored sections; the PDF bytes come from whichever rendering
//! backend is configured.
//!
//! ## Endpoints
//!
//! - `GET /v1/reports/:id/charts/:kind` — chart dataset JSON
//! - `GET /v1/reports/:id/export/pdf` — rendered document bytes

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use uuid::Uuid;

use brsr_core::SectionKey;
use brsr_render::{charts, ChartDataset, ChartKind};

use crate::error::AppError;
use crate::routes::checklist::render_request_for;
use crate::routes::fetch_report;
use crate::state::AppState;

/// Build the charts/export router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/reports/:id/charts/:kind", get(get_chart))
        .route("/v1/reports/:id/export/pdf", get(export_pdf))
}

/// GET /v1/reports/:id/charts/:kind — Chart dataset.
#[utoipa::path(
    get,
    path = "/v1/reports/{id}/charts/{kind}",
    params(
        ("id" = Uuid, Path, description = "Report ID"),
        ("kind" = String, Path, description = "Chart kind"),
    ),
    responses(
        (status = 200, description = "The dataset", body = Object),
        (status = 404, description = "Report not found", body = crate::error::ErrorBody),
        (status = 422, description = "Unknown chart kind", body = crate::error::ErrorBody),
    ),
    tag = "rendering"
)]
pub(crate) async fn get_chart(
    State(state): State<AppState>,
    Path((id, kind)): Path<(Uuid, String)>,
) -> Result<Json<ChartDataset>, AppError> {
    let kind: ChartKind = kind
        .parse()
        .map_err(|e: brsr_render::UnknownChartKind| AppError::Validation(e.to_string()))?;
    let record = fetch_report(&state, id)?;

    let empty = serde_json::Value::Object(serde_json::Map::new());
    let section_a = record
        .sections
        .get(&SectionKey::SectionA)
        .map(|s| &s.data)
        .unwrap_or(&empty);
    let section_b = record
        .sections
        .get(&SectionKey::SectionB)
        .map(|s| &s.data)
        .unwrap_or(&empty);

    Ok(Json(charts::build(kind, section_a, section_b)))
}

/// GET /v1/reports/:id/export/pdf — Rendered document.
///
/// Works on drafts as well as submitted reports; a draft export is a
/// preview. 503 when the configured remote backend cannot be reached.
#[utoipa::path(
    get,
    path = "/v1/reports/{id}/export/pdf",
    params(("id" = Uuid, Path, description = "Report ID")),
    responses(
        (status = 200, description = "PDF bytes", content_type = "application/pdf"),
        (status = 404, description = "Report not found", body = crate::error::ErrorBody),
        (status = 503, description = "Render service unavailable", body = crate::error::ErrorBody),
    ),
    tag = "rendering"
)]
pub(crate) async fn export_pdf(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let record = fetch_report(&state, id)?;
    let request = render_request_for(&record);
    let pdf = state.renderer.render(&request).await?;

    Ok((
        [
            (header::CONTENT_TYPE, pdf.content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"brsr-{id}.pdf\""),
            ),
        ],
        pdf.bytes,
    ))
}
