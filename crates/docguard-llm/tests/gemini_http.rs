//! Gemini provider against a mock HTTP server

use docguard_llm::{GeminiProvider, LlmError, LlmProvider};
use httpmock::prelude::*;
use serde_json::json;
use std::time::Duration;

const MODEL: &str = "gemini-2.5-flash";
const PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

fn provider_for(server: &MockServer) -> GeminiProvider {
    GeminiProvider::new(server.base_url(), MODEL, "test-key", Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_generate_returns_first_candidate_text() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(PATH)
                .header("x-goog-api-key", "test-key")
                .json_body(json!({"contents": [{"parts": [{"text": "extract this"}]}]}));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({
                    "candidates": [{
                        "content": {
                            "role": "model",
                            "parts": [{"text": "```json\n{\"policy_number\": \"HM-001\"}\n```"}]
                        },
                        "finishReason": "STOP"
                    }]
                }));
        })
        .await;

    let provider = provider_for(&server);
    let text = provider.generate("extract this").await.unwrap();

    api_mock.assert_async().await;
    assert!(text.contains("HM-001"));
}

#[tokio::test]
async fn test_unknown_model_maps_to_model_not_available() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(PATH);
            then.status(404);
        })
        .await;

    let result = provider_for(&server).generate("prompt").await;
    match result {
        Err(LlmError::ModelNotAvailable(model)) => assert_eq!(model, MODEL),
        other => panic!("Expected ModelNotAvailable, got {:?}", other),
    }
}

#[tokio::test]
async fn test_quota_exhausted_maps_to_rate_limit() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(PATH);
            then.status(429);
        })
        .await;

    let result = provider_for(&server).generate("prompt").await;
    assert!(matches!(result, Err(LlmError::RateLimitExceeded)));
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(POST).path(PATH);
            then.status(503).body("overloaded");
        })
        .await;

    let result = provider_for(&server).generate("prompt").await;

    api_mock.assert_hits_async(1).await;
    match result {
        Err(LlmError::Communication(msg)) => assert!(msg.contains("overloaded")),
        other => panic!("Expected Communication error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_empty_candidates_is_invalid_response() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(PATH);
            then.status(200).json_body(json!({"candidates": []}));
        })
        .await;

    let result = provider_for(&server).generate("prompt").await;
    assert!(matches!(result, Err(LlmError::InvalidResponse(_))));
}
