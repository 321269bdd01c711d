//! # Path-Addressed Mutation
//!
//! Single-field edits over working state. [`set_path`] walks the path from
//! the root, creating missing intermediates as it goes (an object for a key
//! segment, a null-padded array for an index segment), and assigns the
//! value at the terminal segment. The input state is never touched — the
//! caller gets back a fresh root and keeps the old one for change
//! detection.
//!
//! The mutator is type-agnostic: it stores whatever value it is given.
//! Coercing numeric-looking form input to numbers is the caller's job.

use brsr_core::{FieldPath, PathSegment};
use serde_json::Value;

/// Read the value at `path`, if present.
pub fn get_path<'a>(state: &'a Value, path: &FieldPath) -> Option<&'a Value> {
    let mut current = state;
    for segment in path.segments() {
        current = match (segment, current) {
            (PathSegment::Key(key), Value::Object(map)) => map.get(key)?,
            (PathSegment::Index(index), Value::Array(items)) => items.get(*index)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Return a new state with `value` assigned at `path`.
///
/// Missing or kind-mismatched intermediate nodes are created on the way
/// down (fill-as-you-go); the operation never fails.
pub fn set_path(state: &Value, path: &FieldPath, value: Value) -> Value {
    let mut root = state.clone();
    let mut current = &mut root;

    let (last, spine) = path
        .segments()
        .split_last()
        .expect("FieldPath is non-empty by construction");

    for segment in spine {
        current = descend(current, segment);
    }
    assign(current, last, value);
    root
}

/// Descend one segment, creating the container the segment needs if the
/// current node cannot hold it.
fn descend<'a>(node: &'a mut Value, segment: &PathSegment) -> &'a mut Value {
    match segment {
        PathSegment::Key(key) => {
            if !node.is_object() {
                *node = Value::Object(serde_json::Map::new());
            }
            node.as_object_mut()
                .expect("node was just made an object")
                .entry(key.clone())
                .or_insert(Value::Null)
        }
        PathSegment::Index(index) => {
            if !node.is_array() {
                *node = Value::Array(Vec::new());
            }
            let items = node.as_array_mut().expect("node was just made an array");
            while items.len() <= *index {
                items.push(Value::Null);
            }
            &mut items[*index]
        }
    }
}

/// Assign `value` at the terminal segment.
fn assign(node: &mut Value, segment: &PathSegment, value: Value) {
    match segment {
        PathSegment::Key(key) => {
            if !node.is_object() {
                *node = Value::Object(serde_json::Map::new());
            }
            node.as_object_mut()
                .expect("node was just made an object")
                .insert(key.clone(), value);
        }
        PathSegment::Index(index) => {
            if !node.is_array() {
                *node = Value::Array(Vec::new());
            }
            let items = node.as_array_mut().expect("node was just made an array");
            while items.len() <= *index {
                items.push(Value::Null);
            }
            items[*index] = value;
        }
    }
}
