use anser_core::{AnserError, GenerateConfig, GenerationErrorKind, GenerationModel};
use anser_model::{GeminiClient, GeminiConfig};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> GeminiClient {
    GeminiClient::new(GeminiConfig::flash("test-key").with_base_url(server.uri())).unwrap()
}

#[tokio::test]
async fn generate_extracts_first_candidate_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-flash:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(serde_json::json!({
            "generationConfig": {"temperature": 0.4, "maxOutputTokens": 1024}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [
                {"content": {"parts": [{"text": "Photosynthesis is..."}], "role": "model"}}
            ]
        })))
        .mount(&server)
        .await;

    let answer = client_for(&server)
        .generate("What is photosynthesis?", &GenerateConfig::new(0.4, 1024))
        .await
        .unwrap();

    assert_eq!(answer, "Photosynthesis is...");
}

#[tokio::test]
async fn generate_classifies_unknown_model_as_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(404).set_body_string(
            "models/gemini-nope is not found for API version v1beta",
        ))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate("hi", &GenerateConfig::new(0.4, 1024))
        .await
        .unwrap_err();

    assert_eq!(err.generation_kind(), Some(GenerationErrorKind::ModelUnavailable));
}

#[tokio::test]
async fn generate_classifies_rejected_credential() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_string("API key not valid"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate("hi", &GenerateConfig::new(0.4, 1024))
        .await
        .unwrap_err();

    // Status 400 is ambiguous; the body substring identifies the cause.
    assert_eq!(err.generation_kind(), Some(GenerationErrorKind::Auth));
}

#[tokio::test]
async fn generate_classifies_quota_exhaustion() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate("hi", &GenerateConfig::new(0.7, 2048))
        .await
        .unwrap_err();

    assert_eq!(err.generation_kind(), Some(GenerationErrorKind::RateLimited));
}

#[tokio::test]
async fn generate_fails_on_empty_candidates() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate("hi", &GenerateConfig::new(0.4, 1024))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AnserError::Generation { kind: GenerationErrorKind::Unknown, .. }
    ));
}
