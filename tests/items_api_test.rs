mod common;

use axum::http::Method;
use serde_json::json;

use common::{response_json, TestApp};

#[tokio::test]
async fn create_computes_submit_by_date() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/api/items",
            Some(json!({
                "manufacturer": "Acme",
                "type": "Valve",
                "description": "1in ball valve",
                "due_date": "2025-03-01",
                "lead_time_weeks": 4
            })),
        )
        .await;
    assert_eq!(response.status(), 201);

    let item = response_json(response).await;
    assert!(item["id"].as_i64().expect("integer id") >= 1);
    assert_eq!(item["manufacturer"], "Acme");
    assert_eq!(item["type"], "Valve");
    assert_eq!(item["submit_by_date"], "2025-02-01");
}

#[tokio::test]
async fn lead_time_accepts_numeric_strings_and_blank_inputs() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/api/items",
            Some(json!({
                "manufacturer": "Acme",
                "due_date": "2025-03-01",
                "lead_time_weeks": "4"
            })),
        )
        .await;
    assert_eq!(response.status(), 201);
    let item = response_json(response).await;
    assert_eq!(item["lead_time_weeks"], 4);
    assert_eq!(item["submit_by_date"], "2025-02-01");

    // Empty form inputs arrive as empty strings; lead time then defaults to
    // zero, so the submit-by date equals the due date.
    let response = app
        .request(
            Method::POST,
            "/api/items",
            Some(json!({
                "manufacturer": "Acme",
                "due_date": "2025-03-01",
                "lead_time_weeks": ""
            })),
        )
        .await;
    assert_eq!(response.status(), 201);
    let item = response_json(response).await;
    assert_eq!(item["lead_time_weeks"], serde_json::Value::Null);
    assert_eq!(item["submit_by_date"], "2025-03-01");
}

#[tokio::test]
async fn item_without_due_date_has_no_submit_by_date() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/api/items",
            Some(json!({
                "manufacturer": "Acme",
                "lead_time_weeks": 52
            })),
        )
        .await;
    assert_eq!(response.status(), 201);
    let item = response_json(response).await;
    assert_eq!(item["due_date"], serde_json::Value::Null);
    assert_eq!(item["submit_by_date"], serde_json::Value::Null);
}

#[tokio::test]
async fn list_returns_items_in_id_order_with_derived_dates() {
    let app = TestApp::new().await;

    for (manufacturer, due) in [("Acme", "2025-03-01"), ("Zenith", "2025-04-01")] {
        let response = app
            .request(
                Method::POST,
                "/api/items",
                Some(json!({
                    "manufacturer": manufacturer,
                    "due_date": due,
                    "lead_time_weeks": 2
                })),
            )
            .await;
        assert_eq!(response.status(), 201);
    }

    let response = app.request(Method::GET, "/api/items", None).await;
    assert_eq!(response.status(), 200);
    let items = response_json(response).await;
    let items = items.as_array().expect("array of items");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["manufacturer"], "Acme");
    assert_eq!(items[0]["submit_by_date"], "2025-02-15");
    assert_eq!(items[1]["manufacturer"], "Zenith");
    assert_eq!(items[1]["submit_by_date"], "2025-03-18");
}

#[tokio::test]
async fn update_replaces_the_full_row_and_rederives_the_date() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/api/items",
            Some(json!({
                "manufacturer": "Acme",
                "type": "Valve",
                "description": "1in ball valve",
                "due_date": "2025-03-01",
                "lead_time_weeks": 4
            })),
        )
        .await;
    let created = response_json(response).await;
    let id = created["id"].as_i64().expect("id");

    // Full-row replace: description is absent in the update payload, so it
    // clears; the new due date and lead time drive a new derived date.
    let response = app
        .request(
            Method::PUT,
            &format!("/api/items/{}", id),
            Some(json!({
                "manufacturer": "Acme",
                "type": "Pump",
                "due_date": "2025-05-01",
                "lead_time_weeks": 1
            })),
        )
        .await;
    assert_eq!(response.status(), 200);
    let updated = response_json(response).await;
    assert_eq!(updated["id"], id);
    assert_eq!(updated["type"], "Pump");
    assert_eq!(updated["description"], serde_json::Value::Null);
    assert_eq!(updated["submit_by_date"], "2025-04-24");

    // The stored row agrees with what the update returned.
    let response = app
        .request(Method::GET, &format!("/api/items/{}", id), None)
        .await;
    assert_eq!(response.status(), 200);
    let fetched = response_json(response).await;
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn updating_a_missing_item_returns_not_found() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::PUT,
            "/api/items/9999",
            Some(json!({ "manufacturer": "Nobody" })),
        )
        .await;
    assert_eq!(response.status(), 404);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Not Found");
}

#[tokio::test]
async fn fetching_a_missing_item_returns_not_found() {
    let app = TestApp::new().await;
    let response = app.request(Method::GET, "/api/items/42", None).await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn negative_lead_time_is_rejected() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/api/items",
            Some(json!({
                "manufacturer": "Acme",
                "lead_time_weeks": -3
            })),
        )
        .await;
    assert_eq!(response.status(), 400);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Bad Request");
}

#[tokio::test]
async fn categories_are_seeded_and_sorted() {
    let app = TestApp::new().await;

    let response = app.request(Method::GET, "/api/categories", None).await;
    assert_eq!(response.status(), 200);
    let categories = response_json(response).await;
    let categories = categories.as_array().expect("array of categories");
    assert!(!categories.is_empty());

    let names: Vec<&str> = categories
        .iter()
        .map(|value| value["category"].as_str().expect("category string"))
        .collect();
    assert!(names.contains(&"Valve"));
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[tokio::test]
async fn health_reports_database_status() {
    let app = TestApp::new().await;
    let response = app.request(Method::GET, "/health", None).await;
    assert_eq!(response.status(), 200);
    let body = response_json(response).await;
    assert_eq!(body["status"], "up");
    assert_eq!(body["database"], "up");
}
