mod common;

use axum::http::StatusCode;
use common::{create_test_app, header, send, UNREACHABLE_DATABASE_URL};
use crm_backend::function::{self, FunctionEvent};
use crm_backend::RESOURCE_PATHS;
use serde_json::json;

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app(UNREACHABLE_DATABASE_URL);
    let response = send(&app, "GET", "/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}

// La base de datos no está disponible: OPTIONS no debe tocarla
#[tokio::test]
async fn test_preflight_without_database() {
    let app = create_test_app(UNREACHABLE_DATABASE_URL);

    for path in RESOURCE_PATHS {
        let response = send(&app, "OPTIONS", path, None).await;

        assert_eq!(response.status, StatusCode::OK, "{}", path);
        assert!(response.raw.is_empty(), "{}", path);
        assert_eq!(header(&response.headers, "access-control-allow-origin"), "*");
        assert_eq!(header(&response.headers, "access-control-max-age"), "86400");

        let methods = header(&response.headers, "access-control-allow-methods");
        for method in ["GET", "POST", "PUT", "DELETE", "OPTIONS"] {
            assert!(methods.contains(method), "{} missing in {}", method, methods);
        }

        let headers = header(&response.headers, "access-control-allow-headers").to_ascii_lowercase();
        assert!(headers.contains("content-type"));
        assert!(headers.contains("x-user-id"));
    }
}

#[tokio::test]
async fn test_unsupported_methods_return_405() {
    let app = create_test_app(UNREACHABLE_DATABASE_URL);

    for path in RESOURCE_PATHS {
        for method in ["PATCH", "TRACE"] {
            let response = send(&app, method, path, None).await;

            assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED, "{} {}", method, path);
            assert_eq!(response.body, json!({ "error": "Method not allowed" }));
            assert_eq!(header(&response.headers, "access-control-allow-origin"), "*");
            assert!(header(&response.headers, "content-type").starts_with("application/json"));
        }
    }
}

#[tokio::test]
async fn test_database_failure_is_generic_500() {
    let app = create_test_app(UNREACHABLE_DATABASE_URL);
    let response = send(&app, "GET", "/clients", None).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["code"], "DB_ERROR");
    assert_eq!(header(&response.headers, "access-control-allow-origin"), "*");
    assert!(!response.raw.contains("127.0.0.1"));
}

#[tokio::test]
async fn test_malformed_body_is_rejected_before_database() {
    let app = create_test_app(UNREACHABLE_DATABASE_URL);

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/employees")
        .body(axum::body::Body::from("{\"lastName\": "))
        .unwrap();
    let response = common::send_request(&app, request).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["code"], "BAD_REQUEST");
    assert_eq!(header(&response.headers, "access-control-allow-origin"), "*");
}

#[tokio::test]
async fn test_invalid_field_types_are_rejected() {
    let app = create_test_app(UNREACHABLE_DATABASE_URL);

    let bad_date = send(&app, "POST", "/clients", Some(json!({ "birthDate": "31/12/1990" }))).await;
    assert_eq!(bad_date.status, StatusCode::BAD_REQUEST);

    let bad_year = send(&app, "POST", "/vehicles", Some(json!({ "year": "new" }))).await;
    assert_eq!(bad_year.status, StatusCode::BAD_REQUEST);
}

// Los números en texto llegan a la base de datos en vez de ser rechazados
#[tokio::test]
async fn test_numeric_form_strings_pass_extraction() {
    let app = create_test_app(UNREACHABLE_DATABASE_URL);

    let response = send(
        &app,
        "POST",
        "/vehicles",
        Some(json!({ "year": "2021", "power": "", "maxWeight": "1560.5" })),
    )
    .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["code"], "DB_ERROR");
}

#[tokio::test]
async fn test_update_and_delete_need_an_id() {
    let app = create_test_app(UNREACHABLE_DATABASE_URL);

    let update = send(&app, "PUT", "/vehicles", Some(json!({ "brand": "Lada" }))).await;
    assert_eq!(update.status, StatusCode::BAD_REQUEST);
    assert!(update.body["message"].as_str().unwrap().contains("id"));

    let delete = send(&app, "DELETE", "/vehicles", None).await;
    assert_eq!(delete.status, StatusCode::BAD_REQUEST);

    let delete = send(&app, "DELETE", "/vehicles?id=abc", None).await;
    assert_eq!(delete.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_function_event_preflight() {
    let app = create_test_app(UNREACHABLE_DATABASE_URL);
    let event: FunctionEvent = serde_json::from_value(json!({
        "httpMethod": "OPTIONS",
        "body": "",
        "queryStringParameters": {}
    }))
    .unwrap();

    let response = function::invoke(app, "/clients", event).await;

    assert_eq!(response.status_code, 200);
    assert!(response.body.is_empty());
    assert_eq!(response.headers["Access-Control-Allow-Origin"], "*");
    assert_eq!(response.headers["Access-Control-Max-Age"], "86400");
    assert!(!response.is_base64_encoded);
}

#[tokio::test]
async fn test_function_event_method_not_allowed() {
    let app = create_test_app(UNREACHABLE_DATABASE_URL);
    let event: FunctionEvent = serde_json::from_value(json!({ "httpMethod": "PATCH" })).unwrap();

    let response = function::invoke(app, "/employees", event).await;

    assert_eq!(response.status_code, 405);
    assert_eq!(response.headers["Content-Type"], "application/json");
    let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body, json!({ "error": "Method not allowed" }));
}

#[tokio::test]
async fn test_function_event_invalid_method() {
    let app = create_test_app(UNREACHABLE_DATABASE_URL);
    let event: FunctionEvent = serde_json::from_value(json!({ "httpMethod": "NOT A METHOD" })).unwrap();

    let response = function::invoke(app, "/vehicles", event).await;

    assert_eq!(response.status_code, 400);
    assert_eq!(response.headers["Access-Control-Allow-Origin"], "*");
}
