//! # API Contract
//!
//! Exercises every endpoint's success and error surfaces through the full
//! router — validation (422), bad request (400), not found (404),
//! conflict (409), unauthorized (401) — plus the whole wizard flow from
//! report creation through submission and PDF export.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use brsr_api::state::{AppConfig, AppState};
use brsr_core::SectionKey;

/// Build test app with auth disabled and the mock renderer.
fn test_app() -> axum::Router {
    brsr_api::app(AppState::new())
}

/// Build test app with auth enabled.
fn authed_app(token: &str) -> axum::Router {
    let config = AppConfig {
        port: 8080,
        auth_token: Some(token.to_string()),
    };
    let state = AppState::with_config(config, brsr_render::PdfBackend::mock(), None);
    brsr_api::app(state)
}

/// Read response body as JSON Value.
async fn body_json(response: axum::http::Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Request helper with JSON body.
fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

/// GET helper.
fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// DELETE helper.
fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Create a report and return its UUID string.
async fn create_report(app: &axum::Router) -> String {
    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/v1/reports",
            json!({"company_name": "Acme Industries Ltd", "financial_year": "2025-26"}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let v = body_json(resp).await;
    v["id"].as_str().unwrap().to_string()
}

/// Save a section payload, asserting success.
async fn save_section(app: &axum::Router, id: &str, section: &str, data: Value) {
    let resp = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/v1/reports/{id}/sections/{section}"),
            json!({"data": data}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK, "saving {section} failed");
}

/// Fill every section so the checklist passes.
///
/// Principle sections are satisfied through the forward-compatibility
/// path: an unmodeled key under `essential_indicators` flows through the
/// reconciler and counts as a truthy leaf.
async fn complete_all_sections(app: &axum::Router, id: &str) {
    save_section(
        app,
        id,
        "section_a_data",
        json!({
            "sa_entity_details": {
                "cin": "L26940MH1982PLC028083",
                "name": "Acme Industries Ltd",
                "financial_year": "2025-26"
            },
            "sa_markets_served": {"locations": {"national_states": 12}},
            "sa_employee_details": {"permanent_male": 120, "permanent_female": 85}
        }),
    )
    .await;

    save_section(
        app,
        id,
        "section_b_data",
        json!({
            "sb_director_statement": "The board affirms its responsibility for this report.",
            "sb_esg_responsible": {"name": "R. Iyer", "designation": "Company Secretary"}
        }),
    )
    .await;

    for section in SectionKey::ALL {
        if matches!(section, SectionKey::SectionA | SectionKey::SectionB) {
            continue;
        }
        save_section(
            app,
            id,
            section.as_str(),
            json!({"essential_indicators": {"reviewed_this_year": true}}),
        )
        .await;
    }
}

// ── Health & OpenAPI ───────────────────────────────────────────────

#[tokio::test]
async fn health_probes_respond() {
    let app = test_app();
    for uri in ["/health/liveness", "/health/readiness"] {
        let resp = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK, "{uri}");
    }
}

#[tokio::test]
async fn openapi_spec_is_served() {
    let app = test_app();
    let resp = app.oneshot(get("/openapi.json")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let spec = body_json(resp).await;
    assert!(spec["paths"]["/v1/reports"].is_object());
}

// ── Report CRUD ────────────────────────────────────────────────────

#[tokio::test]
async fn create_list_get_report() {
    let app = test_app();
    let id = create_report(&app).await;

    let resp = app.clone().oneshot(get("/v1/reports")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let list = body_json(resp).await;
    assert_eq!(list.as_array().unwrap().len(), 1);

    let resp = app
        .clone()
        .oneshot(get(&format!("/v1/reports/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let report = body_json(resp).await;
    assert_eq!(report["status"], "DRAFT");
    assert_eq!(report["company_name"], "Acme Industries Ltd");
    // Every section initialized.
    assert_eq!(report["sections"].as_object().unwrap().len(), 11);
}

#[tokio::test]
async fn get_unknown_report_is_404() {
    let app = test_app();
    let resp = app
        .oneshot(get(&format!("/v1/reports/{}", uuid::Uuid::new_v4())))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn create_report_validation_errors() {
    let app = test_app();

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/v1/reports",
            json!({"company_name": "  ", "financial_year": "2025-26"}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let malformed = Request::builder()
        .method("POST")
        .uri("/v1/reports")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let resp = app.oneshot(malformed).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// ── Section editing ────────────────────────────────────────────────

#[tokio::test]
async fn get_section_returns_tagged_defaults() {
    let app = test_app();
    let id = create_report(&app).await;

    let resp = app
        .oneshot(get(&format!("/v1/reports/{id}/sections/section_a_data")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let section = body_json(resp).await;
    assert_eq!(section["version"], 0);
    assert_eq!(section["data"]["sa_entity_details"]["cin"], "");
    // Template rows carry working-state identity.
    assert!(section["data"]["sa_business_activities"][0]["_row_id"].is_string());
}

#[tokio::test]
async fn unknown_section_name_is_rejected() {
    let app = test_app();
    let id = create_report(&app).await;

    let resp = app
        .oneshot(get(&format!("/v1/reports/{id}/sections/section_z_data")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(resp).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn save_section_reconciles_and_preserves_legacy_keys() {
    let app = test_app();
    let id = create_report(&app).await;

    let resp = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/v1/reports/{id}/sections/section_a_data"),
            json!({"data": {
                "sa_markets_served": {"locations": {"national_states": 12}},
                "legacy_field": {"carried": true}
            }}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let section = body_json(resp).await;
    assert_eq!(section["version"], 1);
    let data = &section["data"];
    // Saved value present, sibling defaults intact, legacy key preserved.
    assert_eq!(data["sa_markets_served"]["locations"]["national_states"], 12);
    assert_eq!(
        data["sa_markets_served"]["locations"]["international_countries"],
        0
    );
    assert_eq!(data["sa_entity_details"]["name"], "");
    assert_eq!(data["legacy_field"]["carried"], true);
}

#[tokio::test]
async fn save_section_version_conflict_is_409() {
    let app = test_app();
    let id = create_report(&app).await;

    save_section(&app, &id, "section_a_data", json!({})).await; // version -> 1

    let resp = app
        .oneshot(json_request(
            "PUT",
            &format!("/v1/reports/{id}/sections/section_a_data"),
            json!({"data": {}, "expected_version": 0}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body = body_json(resp).await;
    assert_eq!(body["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn field_edit_goes_through_the_mutator() {
    let app = test_app();
    let id = create_report(&app).await;

    let resp = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            &format!("/v1/reports/{id}/sections/section_a_data/field"),
            json!({"path": "sa_markets_served.locations.national_states", "value": 17}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let section = body_json(resp).await;
    assert_eq!(
        section["data"]["sa_markets_served"]["locations"]["national_states"],
        17
    );
    assert_eq!(section["version"], 1);
}

#[tokio::test]
async fn row_lifecycle_add_update_remove() {
    let app = test_app();
    let id = create_report(&app).await;
    let base = format!("/v1/reports/{id}/sections/section_a_data/rows");

    // Append a second business activity row.
    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            &base,
            json!({"array_path": "sa_business_activities"}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let added = body_json(resp).await;
    assert!(added["row_id"].is_string());
    let rows = added["section"]["data"]["sa_business_activities"]
        .as_array()
        .unwrap();
    assert_eq!(rows.len(), 2);

    // Edit the new row.
    let resp = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            &format!("{base}/1"),
            json!({
                "array_path": "sa_business_activities",
                "field": "main_activity",
                "value": "Cement manufacture"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let section = body_json(resp).await;
    assert_eq!(
        section["data"]["sa_business_activities"][1]["main_activity"],
        "Cement manufacture"
    );
    // Sibling row untouched.
    assert_eq!(section["data"]["sa_business_activities"][0]["main_activity"], "");

    // Remove the first row; the edited row shifts down.
    let resp = app
        .clone()
        .oneshot(delete(&format!(
            "{base}/0?array_path=sa_business_activities"
        )))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let section = body_json(resp).await;
    let rows = section["data"]["sa_business_activities"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["main_activity"], "Cement manufacture");

    // Out-of-range removal.
    let resp = app
        .oneshot(delete(&format!(
            "{base}/7?array_path=sa_business_activities"
        )))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn add_row_to_non_array_field_is_rejected() {
    let app = test_app();
    let id = create_report(&app).await;

    let resp = app
        .oneshot(json_request(
            "POST",
            &format!("/v1/reports/{id}/sections/section_a_data/rows"),
            json!({"array_path": "sa_entity_details"}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// ── Checklist & submission ─────────────────────────────────────────

#[tokio::test]
async fn fresh_report_checklist_is_incomplete() {
    let app = test_app();
    let id = create_report(&app).await;

    let resp = app
        .oneshot(get(&format!("/v1/reports/{id}/checklist")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let checklist = body_json(resp).await;
    assert_eq!(checklist["all_complete"], false);
    assert_eq!(checklist["sections"].as_array().unwrap().len(), 11);
}

#[tokio::test]
async fn submit_incomplete_report_is_422_with_checklist() {
    let app = test_app();
    let id = create_report(&app).await;

    let resp = app
        .oneshot(json_request(
            "POST",
            &format!("/v1/reports/{id}/submit"),
            json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(resp).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    // The failing checklist rides along for the review page.
    assert_eq!(body["error"]["details"]["all_complete"], false);
}

#[tokio::test]
async fn full_wizard_flow_submits_and_freezes() {
    let app = test_app();
    let id = create_report(&app).await;
    complete_all_sections(&app, &id).await;

    let resp = app
        .clone()
        .oneshot(get(&format!("/v1/reports/{id}/checklist")))
        .await
        .unwrap();
    let checklist = body_json(resp).await;
    assert_eq!(checklist["all_complete"], true, "checklist: {checklist}");

    // Submit.
    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/v1/reports/{id}/submit"),
            json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let submitted = body_json(resp).await;
    assert_eq!(submitted["pdf_available"], true);
    assert_eq!(submitted["receipt"]["digest"]["algorithm"], "sha256");
    assert_eq!(
        submitted["pdf_url"],
        format!("/v1/reports/{id}/export/pdf")
    );

    // Resubmission conflicts.
    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/v1/reports/{id}/submit"),
            json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // Sections are frozen after submission.
    let resp = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/v1/reports/{id}/sections/section_a_data"),
            json!({"data": {}}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // Status reflects the submission.
    let resp = app
        .oneshot(get(&format!("/v1/reports/{id}")))
        .await
        .unwrap();
    let report = body_json(resp).await;
    assert_eq!(report["status"], "SUBMITTED");
    assert!(report["submission"]["digest"].is_object());
}

// ── Rendering ──────────────────────────────────────────────────────

#[tokio::test]
async fn export_pdf_returns_document_bytes() {
    let app = test_app();
    let id = create_report(&app).await;

    let resp = app
        .oneshot(get(&format!("/v1/reports/{id}/export/pdf")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/pdf"
    );
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.starts_with(b"%PDF-1.4"));
}

#[tokio::test]
async fn chart_datasets_are_served() {
    let app = test_app();
    let id = create_report(&app).await;
    save_section(
        &app,
        &id,
        "section_a_data",
        json!({"sa_employee_details": {"permanent_male": 7}}),
    )
    .await;

    let resp = app
        .clone()
        .oneshot(get(&format!(
            "/v1/reports/{id}/charts/employee_composition"
        )))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let dataset = body_json(resp).await;
    assert_eq!(dataset["series"][0]["values"][0], 7.0);

    let resp = app
        .oneshot(get(&format!("/v1/reports/{id}/charts/pie_of_everything")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// ── Auth ───────────────────────────────────────────────────────────

#[tokio::test]
async fn auth_guards_api_but_not_health() {
    let app = authed_app("topsecret");

    let resp = app.clone().oneshot(get("/v1/reports")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = app
        .clone()
        .oneshot(get("/health/liveness"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let authed = Request::builder()
        .uri("/v1/reports")
        .header("authorization", "Bearer topsecret")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(authed).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
