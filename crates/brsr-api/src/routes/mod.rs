//! # Route Modules
//!
//! Each module defines an Axum Router for one API surface area.
//! Routers are assembled in `lib.rs` into the application.

pub mod charts;
pub mod checklist;
pub mod reports;
pub mod sections;

use axum::extract::Path;
use uuid::Uuid;

use crate::error::AppError;
use crate::state::{AppState, ReportRecord};

/// Fetch a report or 404.
pub(crate) fn fetch_report(state: &AppState, id: Uuid) -> Result<ReportRecord, AppError> {
    state
        .reports
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("report {id}")))
}

/// Parse the `:section` path parameter into a [`brsr_core::SectionKey`].
pub(crate) fn parse_section(section: &str) -> Result<brsr_core::SectionKey, AppError> {
    section
        .parse::<brsr_core::SectionKey>()
        .map_err(AppError::from)
}

/// Shared path-parameter shape for `/v1/reports/:id/sections/:section/...`.
pub(crate) type SectionPath = Path<(Uuid, String)>;
