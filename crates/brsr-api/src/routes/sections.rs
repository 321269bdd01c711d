//! # Section Editing
//!
//! The wizard's write path. Every handler runs the form engine over the
//! stored working state: whole-section saves reconcile against the
//! canonical shape, field edits go through the path-addressed mutator,
//! and row operations go through the repeated-row editor.
//!
//! ## Endpoints
//!
//! - `GET    /v1/reports/:id/sections/:section` — reconciled section data
//! - `PUT    /v1/reports/:id/sections/:section` — save a section
//! - `PATCH  /v1/reports/:id/sections/:section/field` — one field edit
//! - `POST   /v1/reports/:id/sections/:section/rows` — append a row
//! - `DELETE /v1/reports/:id/sections/:section/rows/:index` — remove a row
//! - `PATCH  /v1/reports/:id/sections/:section/rows/:index` — edit a row field
//!
//! ## Concurrency
//!
//! Saves accept an optional `expected_version`; a mismatch is a 409 and
//! the caller re-fetches. Without it, the last write wins per section.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

use brsr_core::{FieldPath, ReportId, RowId, SectionKey};
use brsr_report::ReportError;

use crate::error::AppError;
use crate::extractors::{extract_json, extract_validated_json, Validate};
use crate::routes::{fetch_report, parse_section, SectionPath};
use crate::state::{AppState, ReportRecord, SectionRecord};

// ── Request/Response DTOs ───────────────────────────────────────────

/// One section of a report, as returned to the wizard.
#[derive(Debug, serde::Serialize, ToSchema)]
pub struct SectionResponse {
    /// Wire name of the section.
    pub section: String,
    /// Reconciled, row-tagged working state.
    #[schema(value_type = Object)]
    pub data: Value,
    /// Monotonic save counter.
    pub version: u64,
    /// When this section was last saved.
    pub updated_at: DateTime<Utc>,
}

impl SectionResponse {
    fn new(section: SectionKey, record: &SectionRecord) -> Self {
        Self {
            section: section.as_str().to_string(),
            data: record.data.clone(),
            version: record.version,
            updated_at: record.updated_at,
        }
    }
}

/// Request to save a whole section.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SaveSectionRequest {
    /// The section payload. Merged against the canonical shape; unknown
    /// keys are preserved, malformed values fall back to defaults.
    #[schema(value_type = Object)]
    pub data: Value,
    /// Optimistic-concurrency guard. When present, the save is rejected
    /// with 409 unless it matches the stored version.
    #[serde(default)]
    pub expected_version: Option<u64>,
}

impl Validate for SaveSectionRequest {
    fn validate(&self) -> Result<(), String> {
        if !self.data.is_object() {
            return Err("data must be a JSON object".to_string());
        }
        Ok(())
    }
}

/// Request to edit one field through the path-addressed mutator.
#[derive(Debug, Deserialize, ToSchema)]
pub struct FieldEditRequest {
    /// Dotted path of the field to set.
    #[schema(value_type = String)]
    pub path: FieldPath,
    /// The value to store, verbatim.
    #[schema(value_type = Object)]
    pub value: Value,
}

/// Request to append a row to a repeated sub-structure.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AddRowRequest {
    /// Dotted path of the array field.
    #[schema(value_type = String)]
    pub array_path: FieldPath,
}

/// Response to a row append.
#[derive(Debug, serde::Serialize, ToSchema)]
pub struct AddRowResponse {
    /// Stable identity of the new row.
    #[schema(value_type = String)]
    pub row_id: RowId,
    /// The section after the append.
    pub section: SectionResponse,
}

/// Query parameters for positional row operations.
#[derive(Debug, Deserialize)]
pub struct RowQuery {
    /// Dotted path of the array field.
    pub array_path: FieldPath,
}

/// Request to edit one field of one row.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateRowRequest {
    /// Dotted path of the array field.
    #[schema(value_type = String)]
    pub array_path: FieldPath,
    /// The row field to replace.
    pub field: String,
    /// The value to store, verbatim.
    #[schema(value_type = Object)]
    pub value: Value,
}

// ── Router ──────────────────────────────────────────────────────────

/// Build the sections router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/v1/reports/:id/sections/:section",
            get(get_section).put(save_section),
        )
        .route(
            "/v1/reports/:id/sections/:section/field",
            patch(edit_field),
        )
        .route("/v1/reports/:id/sections/:section/rows", post(add_row))
        .route(
            "/v1/reports/:id/sections/:section/rows/:index",
            patch(update_row).delete(remove_row),
        )
}

// ── Shared helpers ──────────────────────────────────────────────────

/// Persist the record when a database pool is configured.
pub(crate) async fn persist(state: &AppState, record: &ReportRecord) -> Result<(), AppError> {
    if let Some(pool) = &state.db_pool {
        crate::db::reports::upsert(pool, record).await.map_err(|e| {
            AppError::Internal(format!("failed to persist report {}: {e}", record.id))
        })?;
    }
    Ok(())
}

/// Apply `edit` to one section of a report under a single write lock.
///
/// Rejects edits on submitted reports. Bumps the section version and both
/// timestamps on success, and returns the updated full record.
fn edit_section(
    state: &AppState,
    id: Uuid,
    section: SectionKey,
    edit: impl FnOnce(&Value) -> Result<Value, AppError>,
) -> Result<ReportRecord, AppError> {
    state
        .reports
        .try_update(&id, |record| {
            if !record.status.is_editable() {
                return Err(AppError::from(ReportError::AlreadySubmitted {
                    id: ReportId::from_uuid(id),
                }));
            }
            let now = Utc::now();
            let section_record = record
                .sections
                .get_mut(&section)
                .ok_or_else(|| AppError::Internal(format!("section {section} missing")))?;
            section_record.data = edit(&section_record.data)?;
            section_record.version += 1;
            section_record.updated_at = now;
            record.updated_at = now;
            Ok(record.clone())
        })
        .ok_or_else(|| AppError::NotFound(format!("report {id}")))?
}

// ── Handlers ────────────────────────────────────────────────────────

/// GET /v1/reports/:id/sections/:section — Reconciled section data.
#[utoipa::path(
    get,
    path = "/v1/reports/{id}/sections/{section}",
    params(
        ("id" = Uuid, Path, description = "Report ID"),
        ("section" = String, Path, description = "Section wire name"),
    ),
    responses(
        (status = 200, description = "The section", body = SectionResponse),
        (status = 404, description = "Report not found", body = crate::error::ErrorBody),
        (status = 422, description = "Unknown section", body = crate::error::ErrorBody),
    ),
    tag = "sections"
)]
pub(crate) async fn get_section(
    State(state): State<AppState>,
    Path((id, section)): SectionPath,
) -> Result<Json<SectionResponse>, AppError> {
    let section = parse_section(&section)?;
    let record = fetch_report(&state, id)?;
    let section_record = record
        .sections
        .get(&section)
        .ok_or_else(|| AppError::Internal(format!("section {section} missing")))?;
    Ok(Json(SectionResponse::new(section, section_record)))
}

/// PUT /v1/reports/:id/sections/:section — Save a section.
///
/// The payload is reconciled against the canonical shape: defaults fill
/// the gaps, unknown keys survive, malformed values are discarded with a
/// warning. Rows are tagged with stable IDs before the state is stored.
#[utoipa::path(
    put,
    path = "/v1/reports/{id}/sections/{section}",
    request_body = SaveSectionRequest,
    params(
        ("id" = Uuid, Path, description = "Report ID"),
        ("section" = String, Path, description = "Section wire name"),
    ),
    responses(
        (status = 200, description = "Section saved", body = SectionResponse),
        (status = 404, description = "Report not found", body = crate::error::ErrorBody),
        (status = 409, description = "Version conflict or already submitted", body = crate::error::ErrorBody),
        (status = 422, description = "Validation error", body = crate::error::ErrorBody),
    ),
    tag = "sections"
)]
pub(crate) async fn save_section(
    State(state): State<AppState>,
    Path((id, section)): SectionPath,
    body: Result<Json<SaveSectionRequest>, JsonRejection>,
) -> Result<Json<SectionResponse>, AppError> {
    let section = parse_section(&section)?;
    let req = extract_validated_json(body)?;

    let expected_version = req.expected_version;
    let record = state
        .reports
        .try_update(&id, |record| {
            if !record.status.is_editable() {
                return Err(AppError::from(ReportError::AlreadySubmitted {
                    id: ReportId::from_uuid(id),
                }));
            }
            let now = Utc::now();
            let section_record = record
                .sections
                .get_mut(&section)
                .ok_or_else(|| AppError::Internal(format!("section {section} missing")))?;

            if let Some(expected) = expected_version {
                if expected != section_record.version {
                    return Err(AppError::from(ReportError::VersionConflict {
                        id: ReportId::from_uuid(id),
                        section: section.as_str().to_string(),
                        expected,
                        actual: section_record.version,
                    }));
                }
            }

            let default = brsr_schema::default_shape(section);
            let reconciled = brsr_form::reconcile(&default, &req.data);
            section_record.data = brsr_form::tag_rows(&reconciled);
            section_record.version += 1;
            section_record.updated_at = now;
            record.updated_at = now;
            Ok(record.clone())
        })
        .ok_or_else(|| AppError::NotFound(format!("report {id}")))??;

    persist(&state, &record).await?;
    let section_record = &record.sections[&section];
    Ok(Json(SectionResponse::new(section, section_record)))
}

/// PATCH /v1/reports/:id/sections/:section/field — Edit one field.
#[utoipa::path(
    patch,
    path = "/v1/reports/{id}/sections/{section}/field",
    request_body = FieldEditRequest,
    params(
        ("id" = Uuid, Path, description = "Report ID"),
        ("section" = String, Path, description = "Section wire name"),
    ),
    responses(
        (status = 200, description = "Field updated", body = SectionResponse),
        (status = 404, description = "Report not found", body = crate::error::ErrorBody),
        (status = 409, description = "Already submitted", body = crate::error::ErrorBody),
    ),
    tag = "sections"
)]
pub(crate) async fn edit_field(
    State(state): State<AppState>,
    Path((id, section)): SectionPath,
    body: Result<Json<FieldEditRequest>, JsonRejection>,
) -> Result<Json<SectionResponse>, AppError> {
    let section = parse_section(&section)?;
    let req = extract_json(body)?;

    let record = edit_section(&state, id, section, |data| {
        Ok(brsr_form::set_path(data, &req.path, req.value.clone()))
    })?;

    persist(&state, &record).await?;
    Ok(Json(SectionResponse::new(section, &record.sections[&section])))
}

/// POST /v1/reports/:id/sections/:section/rows — Append a row.
///
/// The new row is a fresh copy of the canonical template for the array,
/// tagged with a stable row ID.
#[utoipa::path(
    post,
    path = "/v1/reports/{id}/sections/{section}/rows",
    request_body = AddRowRequest,
    params(
        ("id" = Uuid, Path, description = "Report ID"),
        ("section" = String, Path, description = "Section wire name"),
    ),
    responses(
        (status = 201, description = "Row appended", body = AddRowResponse),
        (status = 404, description = "Report not found", body = crate::error::ErrorBody),
        (status = 422, description = "Not an array field", body = crate::error::ErrorBody),
    ),
    tag = "sections"
)]
pub(crate) async fn add_row(
    State(state): State<AppState>,
    Path((id, section)): SectionPath,
    body: Result<Json<AddRowRequest>, JsonRejection>,
) -> Result<(axum::http::StatusCode, Json<AddRowResponse>), AppError> {
    let section = parse_section(&section)?;
    let req = extract_json(body)?;

    let template = brsr_schema::template_row(section, &req.array_path).ok_or_else(|| {
        AppError::Validation(format!(
            "'{}' is not a repeated field of {section}",
            req.array_path
        ))
    })?;

    let mut row_id = None;
    let record = edit_section(&state, id, section, |data| {
        let (next, new_id) = brsr_form::add_row(data, &req.array_path, &template)?;
        row_id = Some(new_id);
        Ok(next)
    })?;

    persist(&state, &record).await?;
    let row_id = row_id.ok_or_else(|| AppError::Internal("row id not assigned".to_string()))?;
    Ok((
        axum::http::StatusCode::CREATED,
        Json(AddRowResponse {
            row_id,
            section: SectionResponse::new(section, &record.sections[&section]),
        }),
    ))
}

/// PATCH /v1/reports/:id/sections/:section/rows/:index — Edit a row field.
#[utoipa::path(
    patch,
    path = "/v1/reports/{id}/sections/{section}/rows/{index}",
    request_body = UpdateRowRequest,
    params(
        ("id" = Uuid, Path, description = "Report ID"),
        ("section" = String, Path, description = "Section wire name"),
        ("index" = usize, Path, description = "Row index"),
    ),
    responses(
        (status = 200, description = "Row updated", body = SectionResponse),
        (status = 404, description = "Report or row not found", body = crate::error::ErrorBody),
        (status = 422, description = "Not an array field", body = crate::error::ErrorBody),
    ),
    tag = "sections"
)]
pub(crate) async fn update_row(
    State(state): State<AppState>,
    Path((id, section, index)): Path<(Uuid, String, usize)>,
    body: Result<Json<UpdateRowRequest>, JsonRejection>,
) -> Result<Json<SectionResponse>, AppError> {
    let section = parse_section(&section)?;
    let req = extract_json(body)?;

    let record = edit_section(&state, id, section, |data| {
        Ok(brsr_form::update_row_field(
            data,
            &req.array_path,
            index,
            &req.field,
            req.value.clone(),
        )?)
    })?;

    persist(&state, &record).await?;
    Ok(Json(SectionResponse::new(section, &record.sections[&section])))
}

/// DELETE /v1/reports/:id/sections/:section/rows/:index — Remove a row.
///
/// Subsequent rows shift down; there are no tombstones.
#[utoipa::path(
    delete,
    path = "/v1/reports/{id}/sections/{section}/rows/{index}",
    params(
        ("id" = Uuid, Path, description = "Report ID"),
        ("section" = String, Path, description = "Section wire name"),
        ("index" = usize, Path, description = "Row index"),
        ("array_path" = String, Query, description = "Dotted path of the array field"),
    ),
    responses(
        (status = 200, description = "Row removed", body = SectionResponse),
        (status = 404, description = "Report or row not found", body = crate::error::ErrorBody),
        (status = 422, description = "Not an array field", body = crate::error::ErrorBody),
    ),
    tag = "sections"
)]
pub(crate) async fn remove_row(
    State(state): State<AppState>,
    Path((id, section, index)): Path<(Uuid, String, usize)>,
    Query(query): Query<RowQuery>,
) -> Result<Json<SectionResponse>, AppError> {
    let section = parse_section(&section)?;

    let record = edit_section(&state, id, section, |data| {
        Ok(brsr_form::remove_row(data, &query.array_path, index)?)
    })?;

    persist(&state, &record).await?;
    Ok(Json(SectionResponse::new(section, &record.sections[&section])))
}
