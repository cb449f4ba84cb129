//! Router-level tests over the in-memory store

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use directory_api::{build_router, AppState};
use directory_infrastructure::{InMemoryStore, Store};
use directory_shared::config::AppConfig;

const JOHN: &str = "16a596ae-edd3-4847-99fe-c4518e82c86f";

async fn seeded_app() -> Router {
    let store = Store::Memory(InMemoryStore::new());
    let seed = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/employee_seed.json");
    directory_infrastructure::seed_employees(&store, &seed).await.unwrap();

    let config = AppConfig::defaults("test").unwrap();
    build_router(AppState::new(store, config))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

#[tokio::test]
async fn health_reports_store() {
    let app = seeded_app().await;
    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], directory_shared::constants::DEFAULT_APP_NAME);
    assert_eq!(body["store"], "memory");
}

#[tokio::test]
async fn get_seeded_employee() {
    let app = seeded_app().await;
    let (status, body) = send(&app, Method::GET, &format!("/api/employee/{}", JOHN), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["first_name"], "John");
    assert_eq!(body["data"]["direct_reports"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn get_unknown_employee_is_404() {
    let app = seeded_app().await;
    let (status, body) = send(&app, Method::GET, "/api/employee/nope", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn reporting_structure_for_seeded_manager() {
    let app = seeded_app().await;
    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/api/employee/reportingStructure/{}", JOHN),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["number_of_reports"], 4);
    assert_eq!(body["data"]["employee"]["id"], JOHN);
}

#[tokio::test]
async fn create_then_replace_employee() {
    let app = seeded_app().await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/employee",
        Some(json!({
            "first_name": "Stuart",
            "last_name": "Sutcliffe",
            "position": "Developer I",
            "department": "Engineering",
            "direct_report_ids": [JOHN]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/employee/{}", id),
        Some(json!({
            "first_name": "Brian",
            "last_name": "Epstein",
            "position": "Manager",
            "department": "Management"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], id.as_str());
    assert_eq!(body["data"]["first_name"], "Brian");
    assert_eq!(body["data"]["direct_reports"], json!([]));
}

#[tokio::test]
async fn replace_with_unknown_report_is_404_and_keeps_original() {
    let app = seeded_app().await;
    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/api/employee/{}", JOHN),
        Some(json!({
            "first_name": "Brian",
            "last_name": "Epstein",
            "position": "Manager",
            "department": "Management",
            "direct_report_ids": ["ghost"]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::GET, &format!("/api/employee/{}", JOHN), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["first_name"], "John");
}

#[tokio::test]
async fn compensation_lifecycle() {
    let app = seeded_app().await;
    let payload = json!({
        "employee_id": JOHN,
        "salary": 150000.0,
        "effective_date": "2024-01-01T00:00:00Z"
    });

    let (status, _) = send(&app, Method::GET, &format!("/api/compensations/{}", JOHN), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::POST, "/api/compensations", Some(payload.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["employee_id"], JOHN);
    assert_eq!(body["data"]["salary"], 150000.0);

    let (status, body) = send(&app, Method::POST, "/api/compensations", Some(payload)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "CONFLICT");

    let (status, body) = send(&app, Method::GET, &format!("/api/compensations/{}", JOHN), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["salary"], 150000.0);
}

#[tokio::test]
async fn negative_salary_is_400() {
    let app = seeded_app().await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/compensations",
        Some(json!({
            "employee_id": JOHN,
            "salary": -1.0,
            "effective_date": "2024-01-01T00:00:00Z"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn compensation_for_unknown_employee_is_404() {
    let app = seeded_app().await;
    let (status, _) = send(&app, Method::GET, "/api/compensations/nobody", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
