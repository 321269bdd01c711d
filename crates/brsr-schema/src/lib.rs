//! # brsr-schema — Canonical Section Shapes
//!
//! The Schema/Default-Shape Registry: for every [`SectionKey`], the
//! compiled-in canonical nested shape with every field defaulted, plus the
//! declarative required-field checks that drive the completion checklist.
//!
//! ## Defaulting Rules
//!
//! - numbers default to `0`
//! - strings default to `""`
//! - booleans default to `false`
//! - arrays default to a single zeroed template row, so the wizard always
//!   has one editable row to show
//! - objects are fully populated with defaulted children
//!
//! ## Registry Contract
//!
//! [`default_shape`] and [`required_checks`] are pure, total functions over
//! the closed `SectionKey` enum — there is no error path. The "unknown
//! section key" precondition of the original design is discharged at the
//! string boundary by `SectionKey::from_str`; code holding a `SectionKey`
//! cannot ask for a shape that does not exist.

pub mod principles;
pub mod required;
pub mod section_a;
pub mod section_b;

pub use required::{CheckKind, RequiredCheck};

use brsr_core::{FieldPath, PathSegment, SectionKey};
use serde_json::Value;

/// Return the canonical default shape for a section.
pub fn default_shape(section: SectionKey) -> Value {
    match section {
        SectionKey::SectionA => section_a::default_shape(),
        SectionKey::SectionB => section_b::default_shape(),
        SectionKey::P1EthicalConduct => principles::p1_default_shape(),
        SectionKey::P2ProductSustainability => principles::p2_default_shape(),
        SectionKey::P3EmployeeWellbeing => principles::p3_default_shape(),
        SectionKey::P4StakeholderEngagement => principles::p4_default_shape(),
        SectionKey::P5HumanRights => principles::p5_default_shape(),
        SectionKey::P6Environment => principles::p6_default_shape(),
        SectionKey::P7PolicyAdvocacy => principles::p7_default_shape(),
        SectionKey::P8InclusiveGrowth => principles::p8_default_shape(),
        SectionKey::P9ConsumerValue => principles::p9_default_shape(),
    }
}

/// Return the required-field checks for a section, in checklist order.
pub fn required_checks(section: SectionKey) -> &'static [RequiredCheck] {
    match section {
        SectionKey::SectionA => section_a::REQUIRED,
        SectionKey::SectionB => section_b::REQUIRED,
        SectionKey::P1EthicalConduct => principles::P1_REQUIRED,
        SectionKey::P2ProductSustainability => principles::P2_REQUIRED,
        SectionKey::P3EmployeeWellbeing => principles::P3_REQUIRED,
        SectionKey::P4StakeholderEngagement => principles::P4_REQUIRED,
        SectionKey::P5HumanRights => principles::P5_REQUIRED,
        SectionKey::P6Environment => principles::P6_REQUIRED,
        SectionKey::P7PolicyAdvocacy => principles::P7_REQUIRED,
        SectionKey::P8InclusiveGrowth => principles::P8_REQUIRED,
        SectionKey::P9ConsumerValue => principles::P9_REQUIRED,
    }
}

/// Return the zeroed template row for an array-valued field of a section.
///
/// The template is the single default row the canonical shape carries at
/// `array_path`. Returns `None` when the path does not address an array in
/// the canonical shape — the caller is asking to append to something that
/// is not a repeated sub-structure.
pub fn template_row(section: SectionKey, array_path: &FieldPath) -> Option<Value> {
    let shape = default_shape(section);
    let mut current = &shape;
    for segment in array_path.segments() {
        current = match (segment, current) {
            (PathSegment::Key(key), Value::Object(map)) => map.get(key)?,
            (PathSegment::Index(index), Value::Array(items)) => items.get(*index)?,
            _ => return None,
        };
    }
    match current {
        Value::Array(items) => items.first().cloned(),
        _ => None,
    }
}
