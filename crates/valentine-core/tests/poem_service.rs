//! Poem provider contract tests
//!
//! Runs the service against a wiremock double of the generateContent
//! endpoint: no credential means no network, every failure maps to its
//! fallback line, and exactly one attempt is made per call.

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use valentine_core::poem::{BLANK_FALLBACK, FAILURE_FALLBACK, NO_KEY_FALLBACK, POEM_PROMPT};
use valentine_core::{PoemConfig, PoemService};

const MODEL: &str = "gemini-3-flash-preview";

fn test_config(endpoint: String, api_key: Option<&str>) -> PoemConfig {
    PoemConfig {
        endpoint,
        model: MODEL.to_string(),
        api_key: api_key.map(String::from),
        max_output_tokens: 100,
        temperature: 0.8,
    }
}

fn generate_path() -> String {
    format!("/v1beta/models/{}:generateContent", MODEL)
}

fn provider_response(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "candidates": [{ "content": { "parts": [{ "text": text }] } }]
    }))
}

#[tokio::test]
async fn no_credential_returns_fallback_without_network() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(provider_response("should never be fetched"))
        .expect(0)
        .mount(&server)
        .await;

    let service = PoemService::new(test_config(server.uri(), None));
    assert_eq!(service.generate_poem().await, NO_KEY_FALLBACK);

    server.verify().await;
}

#[tokio::test]
async fn provider_text_is_returned() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(generate_path()))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [{ "parts": [{ "text": POEM_PROMPT }] }],
            "generationConfig": { "maxOutputTokens": 100 }
        })))
        .respond_with(provider_response("Press start, my player 2"))
        .expect(1)
        .mount(&server)
        .await;

    let service = PoemService::new(test_config(server.uri(), Some("test-key")));
    assert_eq!(service.generate_poem().await, "Press start, my player 2");

    server.verify().await;
}

#[tokio::test]
async fn provider_failure_makes_exactly_one_attempt() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(generate_path()))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let service = PoemService::new(test_config(server.uri(), Some("test-key")));
    assert_eq!(service.generate_poem().await, FAILURE_FALLBACK);

    server.verify().await;
}

#[tokio::test]
async fn auth_rejection_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(generate_path()))
        .respond_with(ResponseTemplate::new(403))
        .expect(1)
        .mount(&server)
        .await;

    let service = PoemService::new(test_config(server.uri(), Some("bad-key")));
    assert_eq!(service.generate_poem().await, FAILURE_FALLBACK);

    server.verify().await;
}

#[tokio::test]
async fn blank_provider_text_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(generate_path()))
        .respond_with(provider_response("   "))
        .expect(1)
        .mount(&server)
        .await;

    let service = PoemService::new(test_config(server.uri(), Some("test-key")));
    assert_eq!(service.generate_poem().await, BLANK_FALLBACK);

    server.verify().await;
}

#[tokio::test]
async fn missing_text_field_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(generate_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let service = PoemService::new(test_config(server.uri(), Some("test-key")));
    assert_eq!(service.generate_poem().await, BLANK_FALLBACK);

    server.verify().await;
}
