//! # Deep-Merge Reconciliation
//!
//! Merges a persisted section payload into the section's canonical default
//! shape. The output always has at least the default's structure; server
//! keys the client does not model yet are passed through untouched.
//!
//! ## Merge Rules
//!
//! For each key in the default shape:
//! - server value present, non-null, compatible kind → recurse (objects)
//!   or take the server's value (scalars);
//! - arrays are replaced wholesale by the server's array — rows are not
//!   merged element-wise against the single template row. An *empty*
//!   server array keeps the default so the wizard always has one editable
//!   row;
//! - absent or null → the default's value;
//! - kind conflict (e.g. a string where an array is expected) → the
//!   default's value wins and the conflict is logged at WARN.
//!
//! Keys in the server payload with no counterpart in the default shape are
//! carried over unchanged.
//!
//! Reconciliation is idempotent: `reconcile(d, reconcile(d, s))` equals
//! `reconcile(d, s)` for any `s`. The property test lives in
//! `brsr-integration-tests`.

use serde_json::Value;

/// The structural kind of a JSON value, for merge compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Object,
    Array,
    Scalar,
    Null,
}

fn kind(value: &Value) -> Kind {
    match value {
        Value::Object(_) => Kind::Object,
        Value::Array(_) => Kind::Array,
        Value::Null => Kind::Null,
        _ => Kind::Scalar,
    }
}

/// Merge `server` data into the canonical `default` shape.
pub fn reconcile(default: &Value, server: &Value) -> Value {
    merge_at(default, server, "$")
}

fn merge_at(default: &Value, server: &Value, path: &str) -> Value {
    match (default, server) {
        (Value::Object(default_map), Value::Object(server_map)) => {
            let mut merged = serde_json::Map::with_capacity(default_map.len());
            for (key, default_value) in default_map {
                let child_path = format!("{path}.{key}");
                let value = match server_map.get(key) {
                    None | Some(Value::Null) => default_value.clone(),
                    Some(server_value) => merge_value(default_value, server_value, &child_path),
                };
                merged.insert(key.clone(), value);
            }
            // Forward compatibility: legacy/unmodeled server keys survive.
            for (key, server_value) in server_map {
                if !default_map.contains_key(key) {
                    merged.insert(key.clone(), server_value.clone());
                }
            }
            Value::Object(merged)
        }
        // A non-object at the section root is malformed; the canonical
        // shape wins outright.
        _ => {
            if !matches!(server, Value::Null) {
                tracing::warn!(
                    path,
                    expected = "object",
                    "discarding malformed server payload at section root"
                );
            }
            default.clone()
        }
    }
}

/// Merge one keyed value whose default counterpart exists.
fn merge_value(default: &Value, server: &Value, path: &str) -> Value {
    match (kind(default), kind(server)) {
        (Kind::Object, Kind::Object) => merge_at(default, server, path),
        (Kind::Array, Kind::Array) => {
            // Wholesale replacement; an empty server array keeps the
            // default's single template row.
            let rows = server.as_array().map(Vec::len).unwrap_or(0);
            if rows == 0 {
                default.clone()
            } else {
                server.clone()
            }
        }
        (Kind::Scalar, Kind::Scalar) => server.clone(),
        (expected, actual) => {
            tracing::warn!(
                path,
                expected = ?expected,
                actual = ?actual,
                "discarding server value with conflicting kind"
            );
            default.clone()
        }
    }
}
