//! # Field Paths
//!
//! A [`FieldPath`] addresses one value inside a section's nested data:
//! an ordered list of segments, each either an object key or an array
//! index. The dotted notation used by the wizard
//! (`sa_business_activities.0.turnover_percentage`) parses into
//! `[Key("sa_business_activities"), Index(0), Key("turnover_percentage")]`.
//!
//! Numeric-looking segments always parse as indices. BRSR section shapes
//! never use bare-number object keys, so the notation is unambiguous for
//! this domain.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;

/// One step of a field path: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// Index into an array-valued field.
    Index(usize),
    /// Key into an object-valued field.
    Key(String),
}

impl PathSegment {
    /// Parse a single dotted-notation segment.
    fn parse(raw: &str) -> Self {
        match raw.parse::<usize>() {
            Ok(index) => Self::Index(index),
            Err(_) => Self::Key(raw.to_string()),
        }
    }
}

impl std::fmt::Display for PathSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Key(k) => f.write_str(k),
            Self::Index(i) => write!(f, "{i}"),
        }
    }
}

/// A dotted address locating one value within a nested section.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// Build a path from pre-parsed segments.
    ///
    /// Returns [`ValidationError::EmptyPath`] when `segments` is empty —
    /// an empty path would address the section root, which no operation
    /// is allowed to replace wholesale through the mutator.
    pub fn new(segments: Vec<PathSegment>) -> Result<Self, ValidationError> {
        if segments.is_empty() {
            return Err(ValidationError::EmptyPath);
        }
        Ok(Self { segments })
    }

    /// The segments, root-first.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// A path is never empty by construction.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Return a new path with `segment` appended.
    pub fn child(&self, segment: PathSegment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }

    /// Return a new path with an index segment appended.
    pub fn index(&self, index: usize) -> Self {
        self.child(PathSegment::Index(index))
    }

    /// Return a new path with a key segment appended.
    pub fn key(&self, key: impl Into<String>) -> Self {
        self.child(PathSegment::Key(key.into()))
    }
}

impl FromStr for FieldPath {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ValidationError::EmptyPath);
        }
        let mut segments = Vec::new();
        for raw in s.split('.') {
            if raw.is_empty() {
                return Err(ValidationError::EmptySegment {
                    path: s.to_string(),
                });
            }
            segments.push(PathSegment::parse(raw));
        }
        Self::new(segments)
    }
}

impl TryFrom<String> for FieldPath {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<FieldPath> for String {
    fn from(path: FieldPath) -> Self {
        path.to_string()
    }
}

impl std::fmt::Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}
