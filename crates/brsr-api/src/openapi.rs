//! # OpenAPI Specification Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the entire API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "BRSR Disclosure Stack API",
        version = "0.3.7",
        description = "Compose, validate, and submit Business Responsibility and Sustainability Report disclosures: report CRUD, section save and field/row edits, completion checklist, submission gating, chart datasets, and PDF export.",
        license(name = "Apache-2.0")
    ),
    paths(
        // Reports
        crate::routes::reports::create_report,
        crate::routes::reports::list_reports,
        crate::routes::reports::get_report,
        // Sections
        crate::routes::sections::get_section,
        crate::routes::sections::save_section,
        crate::routes::sections::edit_field,
        crate::routes::sections::add_row,
        crate::routes::sections::update_row,
        crate::routes::sections::remove_row,
        // Checklist & submission
        crate::routes::checklist::get_checklist,
        crate::routes::checklist::submit_report,
        // Rendering
        crate::routes::charts::get_chart,
        crate::routes::charts::export_pdf,
    ),
    components(schemas(
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
        crate::state::ReportRecord,
        crate::state::SectionRecord,
        crate::routes::reports::CreateReportRequest,
        crate::routes::sections::SectionResponse,
        crate::routes::sections::SaveSectionRequest,
        crate::routes::sections::FieldEditRequest,
        crate::routes::sections::AddRowRequest,
        crate::routes::sections::AddRowResponse,
        crate::routes::sections::UpdateRowRequest,
        crate::routes::checklist::SubmitResponse,
    )),
    tags(
        (name = "reports", description = "Report lifecycle"),
        (name = "sections", description = "Section editing"),
        (name = "submission", description = "Checklist and submission"),
        (name = "rendering", description = "Charts and PDF export"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(serve_openapi))
}

/// GET /openapi.json — the assembled spec.
async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
