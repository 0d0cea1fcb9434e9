//! Tests for the reqwest ATK client against a mock backend.

use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::responses::{extract_error_message, parse_item_list, parse_optional_item};
use super::{AtkApi, AtkRepository};
use crate::error::ApiError;
use crate::models::{AtkItem, AtkPayload};

fn payload(name: &str, category: &str, quantity: u32) -> AtkPayload {
    AtkPayload {
        name: name.to_string(),
        category: category.to_string(),
        quantity,
    }
}

// ── construction ─────────────────────────────────────────────────────

#[test]
fn new_strips_trailing_slash() {
    let api = AtkApi::new("http://localhost:5200/");
    assert_eq!(api.base_url(), "http://localhost:5200");
    assert_eq!(api.collection_url(), "http://localhost:5200/api/atk");
    assert_eq!(api.item_url(7), "http://localhost:5200/api/atk/7");
}

// ── response decoding ────────────────────────────────────────────────

#[test]
fn error_message_from_json_error_field() {
    assert_eq!(
        extract_error_message(r#"{"error":"Qty tidak boleh negatif"}"#),
        Some("Qty tidak boleh negatif".to_string())
    );
}

#[test]
fn error_message_from_json_message_field() {
    assert_eq!(
        extract_error_message(r#"{"message":"nama wajib diisi"}"#),
        Some("nama wajib diisi".to_string())
    );
}

#[test]
fn error_message_from_plain_text() {
    assert_eq!(
        extract_error_message("Qty tidak boleh negatif\n"),
        Some("Qty tidak boleh negatif".to_string())
    );
}

#[test]
fn error_message_absent() {
    assert_eq!(extract_error_message(""), None);
    assert_eq!(extract_error_message("  \n"), None);
    assert_eq!(extract_error_message("{}"), None);
    assert_eq!(extract_error_message(r#"{"error":""}"#), None);
}

#[test]
fn null_list_is_empty() {
    assert!(parse_item_list("null").unwrap().is_empty());
    assert!(parse_item_list("").unwrap().is_empty());
}

#[test]
fn malformed_list_is_parse_error() {
    assert!(matches!(parse_item_list("{oops"), Err(ApiError::Parse(_))));
}

#[test]
fn optional_item_tolerates_junk() {
    assert_eq!(parse_optional_item(""), None);
    assert_eq!(parse_optional_item("ok"), None);
    assert_eq!(
        parse_optional_item(r#"{"id":3,"nama":"Map","jenis":"Arsip","qty":2}"#).map(|i| i.id),
        Some(3)
    );
}

// ── list_items ───────────────────────────────────────────────────────

#[tokio::test]
async fn list_items_success() {
    let mock_server = MockServer::start().await;
    let api = AtkApi::new(mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/api/atk"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 1, "nama": "Pensil", "jenis": "Alat Tulis", "qty": 3, "id_deleted": 0},
            {"id": 2, "nama": "HVS A4", "jenis": "Kertas", "qty": 500, "id_deleted": 0}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let items = api.list_items().await.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(
        items[0],
        AtkItem {
            id: 1,
            name: "Pensil".to_string(),
            category: "Alat Tulis".to_string(),
            quantity: 3,
        }
    );
    assert_eq!(items[1].quantity, 500);
}

#[tokio::test]
async fn list_items_null_body() {
    let mock_server = MockServer::start().await;
    let api = AtkApi::new(mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/api/atk"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null\n"))
        .mount(&mock_server)
        .await;

    assert!(api.list_items().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_items_server_error() {
    let mock_server = MockServer::start().await;
    let api = AtkApi::new(mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/api/atk"))
        .respond_with(ResponseTemplate::new(500).set_body_string("failed to get data\n"))
        .mount(&mock_server)
        .await;

    let err = api.list_items().await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::HttpStatus { status, .. } if status == reqwest::StatusCode::INTERNAL_SERVER_ERROR
    ));
    assert_eq!(err.server_message(), Some("failed to get data"));
}

#[tokio::test]
async fn list_items_unreachable_backend() {
    // Nothing listens on port 9 (discard) on test machines
    let api = AtkApi::new("http://127.0.0.1:9");
    let err = api.list_items().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
    assert_eq!(err.server_message(), None);
}

// ── create_item ──────────────────────────────────────────────────────

#[tokio::test]
async fn create_item_posts_backend_body() {
    let mock_server = MockServer::start().await;
    let api = AtkApi::new(mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/api/atk"))
        .and(body_json(serde_json::json!({"nama": "Pulpen", "jenis": "Alat Tulis", "qty": 10})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(
            {"id": 2, "nama": "Pulpen", "jenis": "Alat Tulis", "qty": 10, "id_deleted": 0}
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let created = api
        .create_item(&payload("Pulpen", "Alat Tulis", 10))
        .await
        .unwrap();
    assert_eq!(created.map(|i| i.id), Some(2));
}

#[tokio::test]
async fn create_item_empty_response() {
    let mock_server = MockServer::start().await;
    let api = AtkApi::new(mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/api/atk"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&mock_server)
        .await;

    let created = api
        .create_item(&payload("Pulpen", "Alat Tulis", 10))
        .await
        .unwrap();
    assert!(created.is_none());
}

#[tokio::test]
async fn create_item_rejected_with_message() {
    let mock_server = MockServer::start().await;
    let api = AtkApi::new(mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/api/atk"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({"error": "Qty tidak boleh negatif"})),
        )
        .mount(&mock_server)
        .await;

    let err = api
        .create_item(&payload("Pulpen", "Alat Tulis", 10))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApiError::HttpStatus { status, .. } if status == reqwest::StatusCode::BAD_REQUEST
    ));
    assert_eq!(err.server_message(), Some("Qty tidak boleh negatif"));
    assert!(err.to_string().contains("Qty tidak boleh negatif"));
}

// ── update_item ──────────────────────────────────────────────────────

#[tokio::test]
async fn update_item_puts_to_item_path() {
    let mock_server = MockServer::start().await;
    let api = AtkApi::new(mock_server.uri());

    Mock::given(method("PUT"))
        .and(path("/api/atk/5"))
        .and(body_json(serde_json::json!({"nama": "Spidol", "jenis": "Alat Tulis", "qty": 8})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(
            {"id": 5, "nama": "Spidol", "jenis": "Alat Tulis", "qty": 8, "id_deleted": 0}
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let updated = api
        .update_item(5, &payload("Spidol", "Alat Tulis", 8))
        .await
        .unwrap();
    assert_eq!(updated.map(|i| i.quantity), Some(8));
}

#[tokio::test]
async fn update_item_not_found() {
    let mock_server = MockServer::start().await;
    let api = AtkApi::new(mock_server.uri());

    Mock::given(method("PUT"))
        .and(path("/api/atk/99"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found\n"))
        .mount(&mock_server)
        .await;

    let err = api
        .update_item(99, &payload("Spidol", "Alat Tulis", 8))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApiError::HttpStatus { status, .. } if status == reqwest::StatusCode::NOT_FOUND
    ));
    assert_eq!(err.server_message(), Some("not found"));
}

// ── soft_delete_item ─────────────────────────────────────────────────

#[tokio::test]
async fn soft_delete_no_content() {
    let mock_server = MockServer::start().await;
    let api = AtkApi::new(mock_server.uri());

    Mock::given(method("DELETE"))
        .and(path("/api/atk/3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    api.soft_delete_item(3).await.unwrap();
}

#[tokio::test]
async fn soft_delete_failure_without_body() {
    let mock_server = MockServer::start().await;
    let api = AtkApi::new(mock_server.uri());

    Mock::given(method("DELETE"))
        .and(path("/api/atk/3"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let err = api.soft_delete_item(3).await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::HttpStatus { status, .. } if status == reqwest::StatusCode::INTERNAL_SERVER_ERROR
    ));
    assert_eq!(err.server_message(), None);
}
