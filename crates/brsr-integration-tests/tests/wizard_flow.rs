//! # Wizard Flow
//!
//! Library-level end-to-end: what one editing session does between two
//! network calls. Load (reconcile + tag) → edit (mutator + row editor) →
//! review (checklist) → submit (receipt digest), with the serialization
//! boundary stripping working-state identity.

use chrono::Utc;
use serde_json::{json, Value};

use brsr_core::{FieldPath, ReportId, SectionKey};
use brsr_form::{
    add_row, reconcile, remove_row_by_id, set_path, strip_row_ids, tag_rows, update_row_field_by_id,
    ROW_ID_KEY,
};
use brsr_report::{report_checklist, SubmissionReceipt};
use brsr_schema::{default_shape, template_row};

fn path(s: &str) -> FieldPath {
    s.parse().unwrap()
}

#[test]
fn one_editing_session_end_to_end() {
    // Load: the server holds a partial legacy payload for Section A.
    let server_payload = json!({
        "sa_entity_details": {"name": "Acme Industries Ltd", "cin": "L26940MH1982PLC028083"},
        "sa_business_activities": [
            {"main_activity": "Cement", "business_description": "Grey cement", "turnover_percentage": 80}
        ],
        "legacy_scoring": {"kept_for_server": true}
    });
    let working = tag_rows(&reconcile(
        &default_shape(SectionKey::SectionA),
        &server_payload,
    ));

    // Reconciliation filled every default around the legacy payload.
    assert_eq!(working["sa_entity_details"]["name"], "Acme Industries Ltd");
    assert_eq!(working["sa_entity_details"]["financial_year"], "");
    assert_eq!(working["sa_markets_served"]["locations"]["national_states"], 0);
    assert_eq!(working["legacy_scoring"]["kept_for_server"], true);
    let first_row_id = working["sa_business_activities"][0][ROW_ID_KEY]
        .as_str()
        .unwrap()
        .to_string();

    // Edit: scalar fields through the mutator.
    let working = set_path(&working, &path("sa_entity_details.financial_year"), json!("2025-26"));
    let working = set_path(
        &working,
        &path("sa_markets_served.locations.national_states"),
        json!(14),
    );
    let working = set_path(
        &working,
        &path("sa_employee_details.permanent_male"),
        json!(220),
    );

    // Edit: a second activity row, addressed by stable identity.
    let template = template_row(SectionKey::SectionA, &path("sa_business_activities")).unwrap();
    let (working, new_row) = add_row(&working, &path("sa_business_activities"), &template).unwrap();
    let working = update_row_field_by_id(
        &working,
        &path("sa_business_activities"),
        new_row,
        "main_activity",
        json!("Ready-mix concrete"),
    )
    .unwrap();

    // The first row kept its identity and content through all of this.
    assert_eq!(
        working["sa_business_activities"][0][ROW_ID_KEY].as_str().unwrap(),
        first_row_id
    );
    assert_eq!(working["sa_business_activities"][0]["turnover_percentage"], 80);
    assert_eq!(
        working["sa_business_activities"][1]["main_activity"],
        "Ready-mix concrete"
    );

    // Review: Section A alone is complete, the report is not.
    let checklist = report_checklist(|section| {
        (section == SectionKey::SectionA).then_some(&working)
    });
    assert!(checklist.sections[0].is_complete, "{:?}", checklist.sections[0]);
    assert!(!checklist.all_complete);

    // Complete the remaining sections the minimal way.
    let mut sections: Vec<(SectionKey, Value)> = vec![(SectionKey::SectionA, working)];
    let section_b = reconcile(
        &default_shape(SectionKey::SectionB),
        &json!({
            "sb_director_statement": "The board affirms its responsibility for this report.",
            "sb_esg_responsible": {"name": "R. Iyer"}
        }),
    );
    sections.push((SectionKey::SectionB, section_b));
    for section in SectionKey::ALL {
        if matches!(section, SectionKey::SectionA | SectionKey::SectionB) {
            continue;
        }
        let data = reconcile(
            &default_shape(section),
            &json!({"essential_indicators": {"reviewed_this_year": true}}),
        );
        sections.push((section, data));
    }

    let checklist = report_checklist(|section| {
        sections
            .iter()
            .find(|(key, _)| *key == section)
            .map(|(_, data)| data)
    });
    assert!(checklist.all_complete, "{:?}", checklist.missing_section_titles());

    // Submit: the receipt digests the row-ID-stripped content.
    let payloads: serde_json::Map<String, Value> = sections
        .iter()
        .map(|(key, data)| (key.as_str().to_string(), data.clone()))
        .collect();
    let report_id = ReportId::new();
    let now = Utc::now();
    let receipt = SubmissionReceipt::compute(report_id, &payloads, now).unwrap();

    // The same content saved by a client that never tagged rows digests
    // identically.
    let stripped_payloads: serde_json::Map<String, Value> = payloads
        .iter()
        .map(|(k, v)| (k.clone(), strip_row_ids(v)))
        .collect();
    let receipt_stripped = SubmissionReceipt::compute(report_id, &stripped_payloads, now).unwrap();
    assert_eq!(receipt.digest, receipt_stripped.digest);
}

#[test]
fn row_identity_survives_sibling_removal() {
    let template = template_row(SectionKey::SectionA, &path("sa_holding_companies")).unwrap();
    let state = tag_rows(&default_shape(SectionKey::SectionA));

    let (state, second) = add_row(&state, &path("sa_holding_companies"), &template).unwrap();
    let (state, third) = add_row(&state, &path("sa_holding_companies"), &template).unwrap();

    let state = update_row_field_by_id(
        &state,
        &path("sa_holding_companies"),
        third,
        "name",
        json!("Acme Cement Holdings"),
    )
    .unwrap();

    // Remove the middle row; the edit addressed by ID still lands on the
    // right row afterwards.
    let state = remove_row_by_id(&state, &path("sa_holding_companies"), second).unwrap();
    let rows = state["sa_holding_companies"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1]["name"], "Acme Cement Holdings");

    let state = update_row_field_by_id(
        &state,
        &path("sa_holding_companies"),
        third,
        "percentage_held",
        json!(100),
    )
    .unwrap();
    assert_eq!(state["sa_holding_companies"][1]["percentage_held"], 100);
}

#[test]
fn reconcile_save_reload_is_stable() {
    // A full save/reload cycle must not drift: reconcile, strip for
    // persistence, reconcile the persisted form again.
    let server = json!({
        "sa_entity_details": {"name": "Acme"},
        "sa_products_services": [
            {"product_service": "Cement", "nic_code": "23941", "turnover_contributed": 90}
        ]
    });
    let default = default_shape(SectionKey::SectionA);

    let loaded = tag_rows(&reconcile(&default, &server));
    let persisted = strip_row_ids(&loaded);
    let reloaded = reconcile(&default, &persisted);

    assert_eq!(persisted, reloaded);
}
