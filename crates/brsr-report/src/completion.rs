//! # Section-Completion Evaluation
//!
//! Decides, per section, whether the disclosure is ready to file. The
//! evaluator is pure and total: it tolerates partially-absent data (a
//! missing key is "not satisfied", never an error) and is recomputed on
//! demand — completion is derived state and is never persisted.
//!
//! ## Truthiness Rules
//!
//! The two check kinds treat zero and `false` asymmetrically, on purpose:
//! a [`CheckKind::Filled`] field answered with `0` was *answered*, while a
//! [`CheckKind::AnyTruthyLeaf`] sub-object that is all zeroes is an
//! untouched form page. See DESIGN.md for the record of this decision.

use serde::Serialize;
use serde_json::Value;

use brsr_core::SectionKey;
use brsr_form::{get_path, ROW_ID_KEY};
use brsr_schema::{required_checks, CheckKind, RequiredCheck};

/// The derived completion judgment for one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionRecord {
    /// The section judged.
    pub section: SectionKey,
    /// Human-readable section title.
    pub title: &'static str,
    /// Whether every required check passed.
    pub is_complete: bool,
    /// Labels of the checks that failed, in checklist order.
    pub missing: Vec<String>,
}

/// The derived completion judgment for a whole report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportChecklist {
    /// One record per section, in filing order.
    pub sections: Vec<CompletionRecord>,
    /// The submit gate: true when every section is complete.
    pub all_complete: bool,
}

impl ReportChecklist {
    /// Titles of the sections that are still incomplete.
    pub fn missing_section_titles(&self) -> Vec<String> {
        self.sections
            .iter()
            .filter(|record| !record.is_complete)
            .map(|record| record.title.to_string())
            .collect()
    }
}

/// Evaluate one section's data against a declarative required spec.
pub fn evaluate(section: SectionKey, data: &Value, checks: &[RequiredCheck]) -> CompletionRecord {
    let mut missing = Vec::new();
    for check in checks {
        let satisfied = match check.path.parse::<brsr_core::FieldPath>() {
            Ok(path) => {
                let value = get_path(data, &path);
                match check.kind {
                    CheckKind::Filled => value.map(is_filled).unwrap_or(false),
                    CheckKind::AnyTruthyLeaf => value.map(has_truthy_leaf).unwrap_or(false),
                }
            }
            // A malformed path in a compiled-in spec can never satisfy.
            Err(_) => false,
        };
        if !satisfied {
            missing.push(check.label.to_string());
        }
    }
    CompletionRecord {
        section,
        title: section.title(),
        is_complete: missing.is_empty(),
        missing,
    }
}

/// Evaluate every section of a report against the registry's required
/// specs. Sections absent from `section_data` are judged against an empty
/// object and count as incomplete unless their spec is empty.
pub fn report_checklist<'a>(
    mut section_data: impl FnMut(SectionKey) -> Option<&'a Value>,
) -> ReportChecklist {
    let empty = Value::Object(serde_json::Map::new());
    let sections: Vec<CompletionRecord> = SectionKey::ALL
        .iter()
        .map(|&section| {
            let data: &Value = match section_data(section) {
                Some(data) => data,
                None => &empty,
            };
            evaluate(section, data, required_checks(section))
        })
        .collect();
    let all_complete = sections.iter().all(|record| record.is_complete);
    ReportChecklist {
        sections,
        all_complete,
    }
}

/// "Path exists and is non-empty": non-empty string, non-empty array,
/// object with ≥ 1 key. Numbers (including 0) and booleans (including
/// `false`) count as present; null does not.
fn is_filled(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        Value::Number(_) | Value::Bool(_) => true,
    }
}

/// "Has at least one truthy leaf anywhere": non-empty string, non-zero
/// number, or `true`. Working-state row IDs are ignored — a synthetic
/// identity must not make an untouched row count as a disclosure.
fn has_truthy_leaf(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => items.iter().any(has_truthy_leaf),
        Value::Object(map) => map
            .iter()
            .any(|(key, child)| key != ROW_ID_KEY && has_truthy_leaf(child)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brsr_schema::RequiredCheck;
    use serde_json::json;

    const EMPLOYEE_SPEC: &[RequiredCheck] =
        &[RequiredCheck::any_truthy("sa_employee_details", "Employee details")];

    #[test]
    fn spec_example_missing_object() {
        let record = evaluate(SectionKey::SectionA, &json!({}), EMPLOYEE_SPEC);
        assert!(!record.is_complete);
        assert_eq!(record.missing, vec!["Employee details".to_string()]);
    }

    #[test]
    fn spec_example_truthy_leaf_satisfies() {
        let data = json!({"sa_employee_details": {"permanent_male": 1}});
        let record = evaluate(SectionKey::SectionA, &data, EMPLOYEE_SPEC);
        assert!(record.is_complete);
        assert!(record.missing.is_empty());
    }

    #[test]
    fn all_zero_subtree_is_not_truthy() {
        let data = json!({"sa_employee_details": {"permanent_male": 0, "permanent_female": 0}});
        let record = evaluate(SectionKey::SectionA, &data, EMPLOYEE_SPEC);
        assert!(!record.is_complete);
    }

    #[test]
    fn row_ids_do_not_count_as_disclosures() {
        let data = json!({
            "sa_employee_details": {"rows": [{"_row_id": "0190d0b0-aaaa-7aaa-8aaa-aaaaaaaaaaaa", "count": 0}]}
        });
        let record = evaluate(SectionKey::SectionA, &data, EMPLOYEE_SPEC);
        assert!(!record.is_complete);
    }

    #[test]
    fn filled_accepts_zero_and_false() {
        const SPEC: &[RequiredCheck] = &[
            RequiredCheck::filled("count", "Count"),
            RequiredCheck::filled("flag", "Flag"),
        ];
        let record = evaluate(SectionKey::SectionA, &json!({"count": 0, "flag": false}), SPEC);
        assert!(record.is_complete);
    }

    #[test]
    fn filled_rejects_empty_string_array_object_and_null() {
        const SPEC: &[RequiredCheck] = &[
            RequiredCheck::filled("s", "S"),
            RequiredCheck::filled("a", "A"),
            RequiredCheck::filled("o", "O"),
            RequiredCheck::filled("n", "N"),
            RequiredCheck::filled("absent", "Absent"),
        ];
        let data = json!({"s": "", "a": [], "o": {}, "n": null});
        let record = evaluate(SectionKey::SectionA, &data, SPEC);
        assert!(!record.is_complete);
        assert_eq!(record.missing.len(), 5);
    }

    #[test]
    fn nested_filled_path() {
        const SPEC: &[RequiredCheck] =
            &[RequiredCheck::filled("sa_entity_details.name", "Entity name")];
        let record = evaluate(
            SectionKey::SectionA,
            &json!({"sa_entity_details": {"name": "Acme"}}),
            SPEC,
        );
        assert!(record.is_complete);
    }

    #[test]
    fn default_shapes_are_incomplete() {
        // A freshly defaulted report must fail its checklist — zeroed
        // template data is not a disclosure.
        for section in SectionKey::ALL {
            let shape = brsr_schema::default_shape(section);
            let record = evaluate(section, &shape, required_checks(section));
            assert!(
                !record.is_complete,
                "{section} default shape unexpectedly complete"
            );
        }
    }

    #[test]
    fn checklist_gates_on_every_section() {
        let complete_a = json!({
            "sa_entity_details": {"cin": "L12345MH2001PLC123456", "name": "Acme", "financial_year": "2025-26"},
            "sa_business_activities": [{"main_activity": "Mfg"}],
            "sa_products_services": [{"product_service": "Widgets"}],
            "sa_markets_served": {"locations": {"national_states": 5}},
            "sa_employee_details": {"permanent_male": 10}
        });
        let checklist = report_checklist(|section| {
            (section == SectionKey::SectionA).then_some(&complete_a)
        });
        assert!(!checklist.all_complete);
        let section_a = &checklist.sections[0];
        assert!(section_a.is_complete);
        // Ten sections remain incomplete.
        assert_eq!(checklist.missing_section_titles().len(), 10);
    }

    #[test]
    fn monotonicity_on_a_concrete_spec() {
        const SPEC: &[RequiredCheck] = &[
            RequiredCheck::filled("a", "A"),
            RequiredCheck::any_truthy("b", "B"),
        ];
        let before = json!({"b": {"x": 1}});
        let after = json!({"a": "now present", "b": {"x": 1}});
        let r1 = evaluate(SectionKey::SectionA, &before, SPEC);
        let r2 = evaluate(SectionKey::SectionA, &after, SPEC);
        assert!(!r1.is_complete);
        assert!(r2.is_complete);
        assert!(r2.missing.len() <= r1.missing.len());
    }
}
