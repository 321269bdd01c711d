//! # Section B — Management and Process Disclosures
//!
//! The policy matrix across the nine NGRBC principles, governance review
//! cadence, and the director's responsibility statement.

use serde_json::{json, Value};

use crate::required::RequiredCheck;

/// Canonical default shape for `section_b_data`.
pub fn default_shape() -> Value {
    json!({
        "sb_director_statement": "",
        "sb_esg_responsible": {
            "name": "",
            "designation": "",
            "email": "",
            "telephone": ""
        },
        "sb_policy_matrix": [
            {
                "principle": 0,
                "has_policy": false,
                "board_approved": false,
                "web_link": "",
                "translated_to_procedures": false,
                "extends_to_value_chain": false
            }
        ],
        "sb_governance": {
            "review_frequency": "",
            "committee_responsible": "",
            "external_assessment": false,
            "external_agency_name": ""
        }
    })
}

/// Required-field checks for Section B.
pub const REQUIRED: &[RequiredCheck] = &[
    RequiredCheck::filled("sb_director_statement", "Director's responsibility statement"),
    RequiredCheck::filled("sb_policy_matrix", "Policy matrix"),
    RequiredCheck::any_truthy("sb_esg_responsible", "Officer responsible for ESG"),
];
