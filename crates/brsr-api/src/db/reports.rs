//! Report persistence operations.
//!
//! All functions take a `&PgPool` and operate on the `reports` table.
//! Section payloads and submission receipts are stored as JSONB; the
//! status column stores the serialized [`ReportStatus`] string and a
//! deserialization failure on load is an error, never silently defaulted
//! back to DRAFT.

use std::collections::BTreeMap;

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use brsr_core::SectionKey;
use brsr_report::{ReportStatus, SubmissionReceipt};

use crate::state::{ReportRecord, SectionRecord};

/// Serialize the status to the string stored in the `status` column.
fn serialize_status(status: ReportStatus) -> String {
    status.as_str().to_string()
}

/// Serialize the section map to JSONB.
fn serialize_sections(
    sections: &BTreeMap<SectionKey, SectionRecord>,
) -> Result<serde_json::Value, sqlx::Error> {
    serde_json::to_value(sections).map_err(|e| {
        tracing::error!(error = %e, "failed to serialize report sections");
        sqlx::Error::Encode(Box::new(e))
    })
}

/// Insert or update a report record.
pub async fn upsert(pool: &PgPool, record: &ReportRecord) -> Result<(), sqlx::Error> {
    let status = serialize_status(record.status);
    let sections = serialize_sections(&record.sections)?;
    let submission = record
        .submission
        .as_ref()
        .map(serde_json::to_value)
        .transpose()
        .map_err(|e| {
            tracing::error!(error = %e, "failed to serialize submission receipt");
            sqlx::Error::Encode(Box::new(e))
        })?;

    sqlx::query(
        "INSERT INTO reports (id, company_name, financial_year, status, sections, submission, created_at, updated_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
         ON CONFLICT (id) DO UPDATE SET
             company_name = EXCLUDED.company_name,
             financial_year = EXCLUDED.financial_year,
             status = EXCLUDED.status,
             sections = EXCLUDED.sections,
             submission = EXCLUDED.submission,
             updated_at = EXCLUDED.updated_at",
    )
    .bind(record.id)
    .bind(&record.company_name)
    .bind(&record.financial_year)
    .bind(&status)
    .bind(&sections)
    .bind(&submission)
    .bind(record.created_at)
    .bind(record.updated_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// Load all report records, for startup hydration.
pub async fn load_all(pool: &PgPool) -> Result<Vec<ReportRecord>, sqlx::Error> {
    let rows = sqlx::query("SELECT id, company_name, financial_year, status, sections, submission, created_at, updated_at FROM reports")
        .fetch_all(pool)
        .await?;

    rows.iter().map(row_to_record).collect()
}

/// Decode one row, failing loudly on corrupt stored state.
fn row_to_record(row: &PgRow) -> Result<ReportRecord, sqlx::Error> {
    let status_str: String = row.try_get("status")?;
    let status: ReportStatus = serde_json::from_value(serde_json::Value::String(
        status_str.clone(),
    ))
    .map_err(|e| {
        tracing::error!(status = %status_str, error = %e, "corrupt report status in database");
        sqlx::Error::Decode(Box::new(e))
    })?;

    let sections_value: serde_json::Value = row.try_get("sections")?;
    let sections: BTreeMap<SectionKey, SectionRecord> = serde_json::from_value(sections_value)
        .map_err(|e| {
            tracing::error!(error = %e, "corrupt report sections in database");
            sqlx::Error::Decode(Box::new(e))
        })?;

    let submission_value: Option<serde_json::Value> = row.try_get("submission")?;
    let submission: Option<SubmissionReceipt> = submission_value
        .map(serde_json::from_value)
        .transpose()
        .map_err(|e| {
            tracing::error!(error = %e, "corrupt submission receipt in database");
            sqlx::Error::Decode(Box::new(e))
        })?;

    Ok(ReportRecord {
        id: row.try_get("id")?,
        company_name: row.try_get("company_name")?,
        financial_year: row.try_get("financial_year")?,
        status,
        sections,
        submission,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}
