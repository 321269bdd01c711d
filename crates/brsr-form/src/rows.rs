//! # Repeated-Row Editing
//!
//! Add/remove/update one row of an array-valued field without disturbing
//! its siblings. The persisted form of a repeated section is positional —
//! no natural key exists — so rows carry a synthetic identity under the
//! reserved [`ROW_ID_KEY`] while in working state. IDs are minted when a
//! row is created (or first tagged after reconciliation) and stripped at
//! the serialization boundary.
//!
//! Positional operations implement the wizard's contract directly;
//! ID-keyed variants resolve the ID to an index and delegate, so reorder
//! and concurrent-edit hazards of raw indices stay contained.

use brsr_core::{FieldPath, RowId};
use serde_json::Value;
use thiserror::Error;

use crate::mutate::get_path;

/// Reserved key under which working-state rows carry their synthetic ID.
pub const ROW_ID_KEY: &str = "_row_id";

/// Error editing a repeated row.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowEditError {
    /// The path does not address an array in the current state.
    #[error("'{path}' does not address an array")]
    NotAnArray {
        /// The offending path.
        path: String,
    },

    /// The index is past the end of the array.
    #[error("row index {index} out of range for '{path}' (len {len})")]
    IndexOutOfRange {
        /// The offending path.
        path: String,
        /// The requested index.
        index: usize,
        /// The array's length.
        len: usize,
    },

    /// No row carries the requested ID.
    #[error("no row with id {id} in '{path}'")]
    RowNotFound {
        /// The offending path.
        path: String,
        /// The requested row ID.
        id: RowId,
    },
}

/// Append a fresh copy of `template` to the array at `array_path`,
/// tagged with a newly minted [`RowId`].
///
/// Returns the new state and the new row's ID. Fails only when
/// `array_path` does not address an array.
pub fn add_row(
    state: &Value,
    array_path: &FieldPath,
    template: &Value,
) -> Result<(Value, RowId), RowEditError> {
    let id = RowId::new();
    let mut row = template.clone();
    if let Value::Object(map) = &mut row {
        map.insert(ROW_ID_KEY.to_string(), Value::String(id.to_string()));
    }

    let next = edit_array(state, array_path, |items| {
        items.push(row);
        Ok(())
    })?;
    Ok((next, id))
}

/// Remove the row at `index`, shifting subsequent rows down.
pub fn remove_row(
    state: &Value,
    array_path: &FieldPath,
    index: usize,
) -> Result<Value, RowEditError> {
    edit_array(state, array_path, |items| {
        if index >= items.len() {
            return Err(RowEditError::IndexOutOfRange {
                path: array_path.to_string(),
                index,
                len: items.len(),
            });
        }
        items.remove(index);
        Ok(())
    })
}

/// Replace one field of the row at `index`. Sibling rows are untouched.
pub fn update_row_field(
    state: &Value,
    array_path: &FieldPath,
    index: usize,
    field: &str,
    value: Value,
) -> Result<Value, RowEditError> {
    edit_array(state, array_path, |items| {
        let len = items.len();
        let row = items
            .get_mut(index)
            .ok_or_else(|| RowEditError::IndexOutOfRange {
                path: array_path.to_string(),
                index,
                len,
            })?;
        if !row.is_object() {
            *row = Value::Object(serde_json::Map::new());
        }
        if let Value::Object(map) = row {
            map.insert(field.to_string(), value);
        }
        Ok(())
    })
}

/// Resolve a row ID to its current index.
pub fn find_row(state: &Value, array_path: &FieldPath, id: RowId) -> Option<usize> {
    let items = get_path(state, array_path)?.as_array()?;
    let wanted = id.to_string();
    items.iter().position(|row| {
        row.get(ROW_ID_KEY)
            .and_then(Value::as_str)
            .is_some_and(|s| s == wanted)
    })
}

/// Remove the row carrying `id`.
pub fn remove_row_by_id(
    state: &Value,
    array_path: &FieldPath,
    id: RowId,
) -> Result<Value, RowEditError> {
    let index = find_row(state, array_path, id).ok_or_else(|| RowEditError::RowNotFound {
        path: array_path.to_string(),
        id,
    })?;
    remove_row(state, array_path, index)
}

/// Replace one field of the row carrying `id`.
pub fn update_row_field_by_id(
    state: &Value,
    array_path: &FieldPath,
    id: RowId,
    field: &str,
    value: Value,
) -> Result<Value, RowEditError> {
    let index = find_row(state, array_path, id).ok_or_else(|| RowEditError::RowNotFound {
        path: array_path.to_string(),
        id,
    })?;
    update_row_field(state, array_path, index, field, value)
}

/// Tag every object row of every array in `state` with a row ID, minting
/// IDs only where missing. Called once after reconciliation so that the
/// wizard addresses rows by identity from the first render.
pub fn tag_rows(state: &Value) -> Value {
    match state {
        Value::Object(map) => {
            let mut tagged = serde_json::Map::with_capacity(map.len());
            for (key, value) in map {
                tagged.insert(key.clone(), tag_rows(value));
            }
            Value::Object(tagged)
        }
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| {
                    let mut tagged = tag_rows(item);
                    if let Value::Object(map) = &mut tagged {
                        if !map.contains_key(ROW_ID_KEY) {
                            map.insert(
                                ROW_ID_KEY.to_string(),
                                Value::String(RowId::new().to_string()),
                            );
                        }
                    }
                    tagged
                })
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Strip every row ID from `state`. The serialization boundary: persisted
/// payloads and submission digests never carry working-state identity.
pub fn strip_row_ids(state: &Value) -> Value {
    match state {
        Value::Object(map) => {
            let mut stripped = serde_json::Map::with_capacity(map.len());
            for (key, value) in map {
                if key != ROW_ID_KEY {
                    stripped.insert(key.clone(), strip_row_ids(value));
                }
            }
            Value::Object(stripped)
        }
        Value::Array(items) => Value::Array(items.iter().map(strip_row_ids).collect()),
        other => other.clone(),
    }
}

/// Clone the state, apply `edit` to the array at `array_path`, and return
/// the new state. The shared entry point that keeps every row operation on
/// the same copy-then-edit discipline.
fn edit_array(
    state: &Value,
    array_path: &FieldPath,
    edit: impl FnOnce(&mut Vec<Value>) -> Result<(), RowEditError>,
) -> Result<Value, RowEditError> {
    let mut root = state.clone();
    let mut current = &mut root;
    for segment in array_path.segments() {
        current = match (segment, current) {
            (brsr_core::PathSegment::Key(key), Value::Object(map)) => {
                map.get_mut(key).ok_or_else(|| RowEditError::NotAnArray {
                    path: array_path.to_string(),
                })?
            }
            (brsr_core::PathSegment::Index(index), Value::Array(items)) => items
                .get_mut(*index)
                .ok_or_else(|| RowEditError::NotAnArray {
                    path: array_path.to_string(),
                })?,
            _ => {
                return Err(RowEditError::NotAnArray {
                    path: array_path.to_string(),
                })
            }
        };
    }
    match current {
        Value::Array(items) => {
            edit(items)?;
            Ok(root)
        }
        _ => Err(RowEditError::NotAnArray {
            path: array_path.to_string(),
        }),
    }
}
