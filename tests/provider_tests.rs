use axum::http::StatusCode;
use serde_json::{Value, json};
use wiremock::matchers::{header, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

use searchfront::provider::{API_KEY_HEADER, ProviderClient};

#[tokio::test]
async fn text_error_body_is_kept_as_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header(API_KEY_HEADER, "k"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .expect(1)
        .mount(&server)
        .await;

    let client = ProviderClient::new(format!("{}/search", server.uri()));
    let err = client.search("k", "cats").await.unwrap_err();

    assert_eq!(err.status, Some(StatusCode::BAD_GATEWAY));
    assert_eq!(err.payload, Some(Value::String("bad gateway".into())));
    assert_eq!(err.message, "Request failed with status code 502");
}

#[tokio::test]
async fn json_error_body_supplies_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid API key"})))
        .mount(&server)
        .await;

    let client = ProviderClient::new(format!("{}/search", server.uri()));
    let err = client.search("k", "cats").await.unwrap_err();

    assert_eq!(err.status, Some(StatusCode::UNAUTHORIZED));
    assert_eq!(err.payload, Some(json!({"message": "Invalid API key"})));
    assert_eq!(err.message, "Invalid API key");
}

#[tokio::test]
async fn empty_error_body_has_no_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = ProviderClient::new(format!("{}/search", server.uri()));
    let err = client.search("k", "cats").await.unwrap_err();

    assert!(err.payload.is_none());
    assert_eq!(err.status, Some(StatusCode::INTERNAL_SERVER_ERROR));
}
