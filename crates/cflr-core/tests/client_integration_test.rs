//! Integration tests for the API client against a mock Cloudflare server
//!
//! Covers:
//! - Authentication headers and endpoint paths
//! - Envelope handling (`success: false`, `result: null`)
//! - Non-2xx responses surfacing as transport errors
//! - PATCH request bodies

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cflr_core::{ApiClient, ConnectorStatus, Credentials, Error, Settings, SsoApi};

const ACCOUNT: &str = "acc123";

fn client_for(server: &MockServer) -> ApiClient {
    let settings = Settings::default().with_api_base_url(server.uri());
    ApiClient::new(&settings, Credentials::new("admin@example.com", "key-abc")).unwrap()
}

fn connectors_body() -> serde_json::Value {
    json!({
        "success": true,
        "errors": [],
        "messages": [],
        "result": [
            {"connector_id": "a1", "email_domain": "foo.com", "connector_status": "V"},
            {"connector_id": "b2", "email_domain": "bar.com", "connector_status": "DIS"},
            {"connector_id": "c3", "email_domain": "old.com", "connector_status": "D"}
        ]
    })
}

// =============================================================================
// list_connectors
// =============================================================================

#[tokio::test]
async fn test_list_connectors_sends_auth_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/accounts/acc123/sso/v2/connectors"))
        .and(header("X-Auth-Email", "admin@example.com"))
        .and(header("X-Auth-Key", "key-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(connectors_body()))
        .expect(1)
        .mount(&server)
        .await;

    let connectors = client_for(&server).list_connectors(ACCOUNT).await.unwrap();

    assert_eq!(connectors.len(), 3);
    assert_eq!(connectors[0].connector_id, "a1");
    assert_eq!(connectors[0].connector_status, ConnectorStatus::Enabled);
    assert_eq!(connectors[1].connector_status, ConnectorStatus::Disabled);
    assert_eq!(connectors[2].connector_status, ConnectorStatus::Deleted);
}

#[tokio::test]
async fn test_list_connectors_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/accounts/acc123/sso/v2/connectors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "errors": [{"code": 10000, "message": "Invalid API key"}],
            "messages": [],
            "result": null
        })))
        .mount(&server)
        .await;

    let result = client_for(&server).list_connectors(ACCOUNT).await;
    match result {
        Err(Error::Api { message }) => assert_eq!(message, "Invalid API key"),
        other => panic!("Expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_list_connectors_null_result_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/accounts/acc123/sso/v2/connectors"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"success": true, "result": null})),
        )
        .mount(&server)
        .await;

    let connectors = client_for(&server).list_connectors(ACCOUNT).await.unwrap();
    assert!(connectors.is_empty());
}

#[tokio::test]
async fn test_list_connectors_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/accounts/acc123/sso/v2/connectors"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .mount(&server)
        .await;

    let result = client_for(&server).list_connectors(ACCOUNT).await;
    match result {
        Err(Error::Http(e)) => {
            assert_eq!(e.status(), Some(reqwest::StatusCode::FORBIDDEN));
        }
        other => panic!("Expected HTTP error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_list_connectors_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/accounts/acc123/sso/v2/connectors"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let result = client_for(&server).list_connectors(ACCOUNT).await;
    assert!(matches!(result, Err(Error::Json(_))));
}

// =============================================================================
// set_connector_status
// =============================================================================

#[tokio::test]
async fn test_set_connector_status_disable() {
    let server = MockServer::start().await;

    let response = json!({
        "success": true,
        "errors": [],
        "messages": [],
        "result": {"connector_id": "a1", "email_domain": "foo.com", "connector_status": "DIS"}
    });

    Mock::given(method("PATCH"))
        .and(path("/accounts/acc123/sso/v2/connectors/a1"))
        .and(header("X-Auth-Email", "admin@example.com"))
        .and(header("X-Auth-Key", "key-abc"))
        .and(body_json(json!({"sso_connector_status": "DIS"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(response.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let raw = client_for(&server)
        .set_connector_status(ACCOUNT, "a1", &ConnectorStatus::Disabled)
        .await
        .unwrap();
    assert_eq!(raw, response);
}

#[tokio::test]
async fn test_set_connector_status_enable() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/accounts/acc123/sso/v2/connectors/b2"))
        .and(body_json(json!({"sso_connector_status": "V"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let raw = client_for(&server)
        .set_connector_status(ACCOUNT, "b2", &ConnectorStatus::Enabled)
        .await
        .unwrap();
    assert_eq!(raw["success"], true);
}

#[tokio::test]
async fn test_set_connector_status_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/accounts/acc123/sso/v2/connectors/a1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = client_for(&server)
        .set_connector_status(ACCOUNT, "a1", &ConnectorStatus::Disabled)
        .await;
    assert!(matches!(result, Err(Error::Http(_))));
}
