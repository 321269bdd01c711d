//! # Database Layer
//!
//! Optional PostgreSQL persistence. When `DATABASE_URL` is unset the API
//! runs in-memory only; when set, every report write is mirrored to the
//! `reports` table and the in-memory store is hydrated from it on startup.

pub mod reports;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Initialize the connection pool from `DATABASE_URL`.
///
/// Returns `Ok(None)` when the variable is unset (in-memory mode) and
/// `Err` when it is set but the database is unreachable — a configured
/// database that cannot be reached is a startup failure, not a silent
/// downgrade to volatile storage.
pub async fn init_pool() -> Result<Option<PgPool>, sqlx::Error> {
    let url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            tracing::info!("DATABASE_URL not set — running in-memory only");
            return Ok(None);
        }
    };

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&url)
        .await?;

    ensure_schema(&pool).await?;
    tracing::info!("database connected");
    Ok(Some(pool))
}

/// Create the reports table if it does not exist.
async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS reports (
            id UUID PRIMARY KEY,
            company_name TEXT NOT NULL,
            financial_year TEXT NOT NULL,
            status TEXT NOT NULL,
            sections JSONB NOT NULL,
            submission JSONB,
            created_at TIMESTAMPTZ NOT NULL,
            updated_at TIMESTAMPTZ NOT NULL
        )",
    )
    .execute(pool)
    .await?;
    Ok(())
}
