//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers via
//! the `State` extractor.
//!
//! The source of truth during a wizard session is the in-memory store; a
//! PostgreSQL pool, when configured, shadows it for durability and is
//! replayed into memory on startup. Read operations therefore stay fast
//! and synchronous.

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::PgPool;
use utoipa::ToSchema;
use uuid::Uuid;

use brsr_core::SectionKey;
use brsr_render::PdfBackend;
use brsr_report::{ReportStatus, SubmissionReceipt};

// -- Generic In-Memory Store --------------------------------------------------

/// Thread-safe, cloneable in-memory key-value store.
///
/// All operations are synchronous (the RwLock is `parking_lot`, not
/// `tokio::sync`) because the lock is never held across `.await` points.
/// `parking_lot::RwLock` is non-poisonable — a panicking writer does not
/// permanently corrupt the store.
#[derive(Debug)]
pub struct Store<T: Clone + Send + Sync> {
    data: Arc<RwLock<HashMap<Uuid, T>>>,
}

impl<T: Clone + Send + Sync> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
        }
    }
}

impl<T: Clone + Send + Sync> Store<T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Insert a record, returning the previous value if the key existed.
    pub fn insert(&self, id: Uuid, value: T) -> Option<T> {
        self.data.write().insert(id, value)
    }

    /// Retrieve a record by ID.
    pub fn get(&self, id: &Uuid) -> Option<T> {
        self.data.read().get(id).cloned()
    }

    /// List all records.
    pub fn list(&self) -> Vec<T> {
        self.data.read().values().cloned().collect()
    }

    /// Update a record in place. Returns the updated record, or `None` if
    /// not found.
    pub fn update(&self, id: &Uuid, f: impl FnOnce(&mut T)) -> Option<T> {
        let mut guard = self.data.write();
        if let Some(entry) = guard.get_mut(id) {
            f(entry);
            Some(entry.clone())
        } else {
            None
        }
    }

    /// Atomically read-validate-update a record.
    ///
    /// The closure receives a `&mut T` and may inspect the current state,
    /// validate preconditions, mutate the record, and return `Ok(R)` or
    /// `Err(E)`. The entire operation runs under a single write lock,
    /// eliminating TOCTOU races between read and update.
    ///
    /// Returns `None` if the record doesn't exist, or `Some(result)` with
    /// the closure's `Result`.
    pub fn try_update<R, E>(
        &self,
        id: &Uuid,
        f: impl FnOnce(&mut T) -> Result<R, E>,
    ) -> Option<Result<R, E>> {
        self.data.write().get_mut(id).map(f)
    }

    /// Remove a record by ID.
    #[allow(dead_code)]
    pub fn remove(&self, id: &Uuid) -> Option<T> {
        self.data.write().remove(id)
    }

    /// Check if a record exists.
    pub fn contains(&self, id: &Uuid) -> bool {
        self.data.read().contains_key(id)
    }

    /// Return the number of records.
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone + Send + Sync> Default for Store<T> {
    fn default() -> Self {
        Self::new()
    }
}

// -- Record Types -------------------------------------------------------------

/// One section's saved payload plus its bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SectionRecord {
    /// The saved section data, reconciled against the canonical shape at
    /// save time. Carries working-state row IDs.
    #[schema(value_type = Object)]
    pub data: Value,
    /// Monotonic save counter, used for opt-in optimistic concurrency.
    pub version: u64,
    /// When this section was last saved.
    pub updated_at: DateTime<Utc>,
}

/// A BRSR report record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportRecord {
    pub id: Uuid,
    /// Name of the disclosing entity.
    pub company_name: String,
    /// Financial year covered, e.g. `2025-26`.
    pub financial_year: String,
    /// Lifecycle status (DRAFT / SUBMITTED).
    #[schema(value_type = String)]
    pub status: ReportStatus,
    /// Wire-keyed section records. Sections a client never saved hold
    /// their reconciled canonical defaults.
    #[schema(value_type = Object)]
    pub sections: BTreeMap<SectionKey, SectionRecord>,
    /// The submission receipt, once submitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub submission: Option<SubmissionReceipt>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ReportRecord {
    /// Create a fresh draft with every section defaulted, reconciled, and
    /// row-tagged.
    pub fn new_draft(id: Uuid, company_name: String, financial_year: String) -> Self {
        let now = Utc::now();
        let sections = SectionKey::ALL
            .iter()
            .map(|&section| {
                let shape = brsr_schema::default_shape(section);
                let data = brsr_form::tag_rows(&shape);
                (
                    section,
                    SectionRecord {
                        data,
                        version: 0,
                        updated_at: now,
                    },
                )
            })
            .collect();
        Self {
            id,
            company_name,
            financial_year,
            status: ReportStatus::Draft,
            sections,
            submission: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// The wire-keyed section payloads, for checklists and digests.
    pub fn section_payloads(&self) -> serde_json::Map<String, Value> {
        self.sections
            .iter()
            .map(|(key, record)| (key.as_str().to_string(), record.data.clone()))
            .collect()
    }
}

// -- Application State --------------------------------------------------------

/// Application configuration.
///
/// Custom `Debug` redacts the `auth_token` to prevent credential leakage
/// in logs.
#[derive(Clone)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// Static bearer token guarding the API.
    /// If `None`, authentication is disabled.
    pub auth_token: Option<String>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("port", &self.port)
            .field("auth_token", &self.auth_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            auth_token: None,
        }
    }
}

/// Shared application state accessible to all route handlers.
///
/// Clone-friendly via `Arc` internals in `Store` and `PdfBackend`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// All report records, keyed by report UUID.
    pub reports: Store<ReportRecord>,

    /// PostgreSQL connection pool for durable persistence.
    /// When `Some`, report data is persisted to Postgres in addition to
    /// the in-memory store. When `None`, the API operates in
    /// in-memory-only mode.
    pub db_pool: Option<PgPool>,

    /// The configured PDF rendering backend.
    pub renderer: Arc<PdfBackend>,

    /// Application configuration.
    pub config: AppConfig,
}

impl AppState {
    /// Create a new application state with default configuration, no
    /// database, and the mock renderer.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default(), PdfBackend::mock(), None)
    }

    /// Create a new application state with the given configuration,
    /// renderer, and optional database pool.
    pub fn with_config(config: AppConfig, renderer: PdfBackend, db_pool: Option<PgPool>) -> Self {
        Self {
            reports: Store::new(),
            db_pool,
            renderer: Arc::new(renderer),
            config,
        }
    }

    /// Hydrate the in-memory store from the database.
    ///
    /// Called once on startup when a database pool is available, so read
    /// operations stay fast and synchronous afterwards.
    pub async fn hydrate_from_db(&self) -> Result<(), String> {
        let pool = match &self.db_pool {
            Some(pool) => pool,
            None => return Ok(()),
        };

        let reports = crate::db::reports::load_all(pool)
            .await
            .map_err(|e| format!("failed to load reports: {e}"))?;
        let report_count = reports.len();
        for record in reports {
            self.reports.insert(record.id, record);
        }

        tracing::info!(reports = report_count, "Hydrated in-memory store from database");
        Ok(())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
