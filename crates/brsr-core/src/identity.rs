//! # Identity Newtypes
//!
//! Domain-primitive newtypes for identifiers throughout the stack. Each
//! identifier is a distinct type — you cannot pass a [`ReportId`] where a
//! [`RowId`] is expected. Both are UUID-based and always valid by
//! construction.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A unique identifier for one BRSR report record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportId(Uuid);

impl ReportId {
    /// Create a new random report identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a report identifier from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ReportId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ReportId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The stable synthetic identity of one repeated row.
///
/// Array rows in BRSR sections (business activities, holding companies,
/// products) have no natural key — the persisted form is positional. A
/// `RowId` is minted when a row is created (or first tagged after
/// reconciliation) so that edits and removals address rows by identity
/// rather than by index. Row IDs live only in working state; they are
/// stripped at the serialization boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowId(Uuid);

impl RowId {
    /// Mint a new random row identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a row identifier from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Parse a row identifier from its string form.
    pub fn parse(s: &str) -> Option<Self> {
        Uuid::parse_str(s).ok().map(Self)
    }
}

impl Default for RowId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
