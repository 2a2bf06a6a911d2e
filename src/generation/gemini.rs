//! Text generation via the Gemini `generateContent` API.

use super::client::CompletionBackend;
use super::{MAX_OUTPUT_TOKENS, MODEL_ID, TEMPERATURE, TOP_K, TOP_P};
use crate::error::GenerationError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Backend for Google's generative-language service.
#[derive(Debug, Clone)]
pub struct GeminiBackend {
    base_url: String,
    api_key: String,
    http: reqwest::Client,
}

// -- Request/response payloads -----------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<PartPayload<'a>>,
}

#[derive(Debug, Serialize)]
struct PartPayload<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    top_p: f64,
    top_k: u32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GeminiBackend {
    /// Create a backend for the given API root and credential.
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, GenerationError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            http,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, MODEL_ID)
    }
}

#[async_trait]
impl CompletionBackend for GeminiBackend {
    async fn complete(&self, prompt: &str) -> Result<Option<String>, GenerationError> {
        let request = GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![PartPayload { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                top_p: TOP_P,
                top_k: TOP_K,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        debug!("Generation request to model: {}", MODEL_ID);

        let resp = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(GenerationError::Status { status, body });
        }

        let body: GenerateResponse = resp.json().await?;

        let text: String = body
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.is_empty() {
            Ok(None)
        } else {
            Ok(Some(text))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn backend(server: &MockServer) -> GeminiBackend {
        GeminiBackend::new(&server.uri(), "test-key", Duration::from_secs(5)).unwrap()
    }

    fn endpoint_path() -> String {
        format!("/v1beta/models/{}:generateContent", MODEL_ID)
    }

    #[tokio::test]
    async fn test_complete_sends_fixed_config() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(endpoint_path()))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_partial_json(json!({
                "contents": [{"role": "user", "parts": [{"text": "hello"}]}],
                "generationConfig": {
                    "temperature": 0.7,
                    "topP": 0.95,
                    "topK": 40,
                    "maxOutputTokens": 2048
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": {"role": "model", "parts": [{"text": "Hi "}, {"text": "there"}]}
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let text = backend(&server).complete("hello").await.unwrap();
        assert_eq!(text.as_deref(), Some("Hi there"));
    }

    #[tokio::test]
    async fn test_complete_without_candidates() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(endpoint_path()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
            .mount(&server)
            .await;

        assert_eq!(backend(&server).complete("hello").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_complete_reports_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_string("API key not valid"))
            .mount(&server)
            .await;

        let err = backend(&server).complete("hello").await.unwrap_err();
        match err {
            GenerationError::Status { status, body } => {
                assert_eq!(status.as_u16(), 403);
                assert_eq!(body, "API key not valid");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[tokio::test]
    async fn test_client_turns_failure_into_message() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = crate::generation::GenerationClient::new(std::sync::Arc::new(backend(&server)));
        let out = client
            .generate("Titles:", &crate::types::InputValues::new())
            .await;
        assert_eq!(out, crate::generation::Generated::Failed(crate::generation::FAILURE_MESSAGE.into()));
    }
}
