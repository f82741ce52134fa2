//! Gemini `generateContent` client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{ApiKey, AppError, GeminiApiConfig, GenerationRequest};
use crate::ports::GenerationClient;

const X_GOOG_API_KEY: &str = "x-goog-api-key";
const MAX_ERROR_BODY_CHARS: usize = 512;

/// HTTP client for the Gemini API. Sends exactly one request per call.
#[derive(Clone)]
pub struct HttpGeminiClient {
    api_key: ApiKey,
    api_url: Url,
    timeout: Duration,
    client: Client,
}

impl std::fmt::Debug for HttpGeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGeminiClient")
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpGeminiClient {
    /// Create a new HTTP client with the given credential and configuration.
    pub fn new(api_key: ApiKey, config: &GeminiApiConfig) -> Result<Self, AppError> {
        config.validate()?;
        let timeout = Duration::from_secs(config.timeout_secs);
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { api_key, api_url: config.api_url.clone(), timeout, client })
    }

    /// Request timeout applied to the single attempt.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn endpoint(&self, model: &str) -> Result<Url, AppError> {
        let base = self.api_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{}/models/{}:generateContent", base, model)).map_err(|e| {
            AppError::GenerationFailed(format!("Invalid endpoint for model '{}': {}", model, e))
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest<'a> {
    contents: Vec<ApiContent<'a>>,
    generation_config: ApiGenerationConfig,
}

#[derive(Debug, Serialize)]
struct ApiContent<'a> {
    role: &'static str,
    parts: Vec<ApiPart<'a>>,
}

#[derive(Debug, Serialize)]
struct ApiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiGenerationConfig {
    temperature: f32,
    top_p: f32,
    top_k: u32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

impl GenerationClient for HttpGeminiClient {
    fn generate(&self, request: &GenerationRequest) -> Result<String, AppError> {
        let api_request = ApiRequest {
            contents: vec![ApiContent {
                role: "user",
                parts: vec![ApiPart { text: &request.prompt }],
            }],
            generation_config: ApiGenerationConfig {
                temperature: request.config.temperature(),
                top_p: request.config.top_p(),
                top_k: request.config.top_k(),
                max_output_tokens: request.config.max_output_tokens(),
            },
        };

        let response = self
            .client
            .post(self.endpoint(&request.model)?)
            .header(X_GOOG_API_KEY, self.api_key.expose())
            .header(CONTENT_TYPE, "application/json")
            .json(&api_request)
            .send()
            .map_err(|e| AppError::GenerationFailed(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::GenerationFailed(format!(
                "API error ({}): {}",
                status.as_u16(),
                describe_error_body(&body)
            )));
        }

        let api_response: ApiResponse = response
            .json()
            .map_err(|e| AppError::GenerationFailed(format!("Failed to parse response: {}", e)))?;

        extract_text(api_response)
    }
}

fn extract_text(response: ApiResponse) -> Result<String, AppError> {
    let Some(candidate) = response.candidates.into_iter().next() else {
        let reason = response
            .prompt_feedback
            .and_then(|feedback| feedback.block_reason)
            .map(|reason| format!("prompt blocked ({})", reason))
            .unwrap_or_else(|| "no candidates returned".to_string());
        return Err(AppError::GenerationFailed(format!("Empty response: {}", reason)));
    };

    let text: String = candidate
        .content
        .map(|content| content.parts.into_iter().filter_map(|part| part.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        let reason = candidate.finish_reason.unwrap_or_else(|| "UNKNOWN".to_string());
        return Err(AppError::GenerationFailed(format!(
            "Response contained no text (finish reason: {})",
            reason
        )));
    }
    Ok(text)
}

fn describe_error_body(body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<ApiErrorEnvelope>(body) {
        return match envelope.error.status {
            Some(status) => format!("{} [{}]", envelope.error.message, status),
            None => envelope.error.message,
        };
    }
    body.chars().take(MAX_ERROR_BODY_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GenerationConfig;
    use mockito::Matcher;

    const PATH: &str = "/models/gemini-1.5-flash:generateContent";

    fn client_for(server: &mockito::Server) -> HttpGeminiClient {
        let config = GeminiApiConfig {
            api_url: Url::parse(&server.url()).unwrap(),
            timeout_secs: 1,
            ..GeminiApiConfig::default()
        };
        HttpGeminiClient::new(ApiKey::new("fake-key").unwrap(), &config).unwrap()
    }

    fn request() -> GenerationRequest {
        GenerationRequest {
            model: "gemini-1.5-flash".to_string(),
            prompt: "Plan my week".to_string(),
            config: GenerationConfig::with_temperature(0.7).unwrap(),
        }
    }

    #[test]
    fn generate_success_returns_text_unmodified() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", PATH)
            .match_header(X_GOOG_API_KEY, "fake-key")
            .match_body(Matcher::PartialJsonString(
                r#"{
                    "contents": [{"role": "user", "parts": [{"text": "Plan my week"}]}],
                    "generationConfig": {"topK": 40, "maxOutputTokens": 2048}
                }"#
                .to_string(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r###"{"candidates": [{"content": {"parts": [{"text": "## Day 1\n"}, {"text": "Squats  "}]}, "finishReason": "STOP"}]}"###,
            )
            .expect(1)
            .create();

        let text = client_for(&server).generate(&request()).unwrap();

        assert_eq!(text, "## Day 1\nSquats  ");
        mock.assert();
    }

    #[test]
    fn generate_does_not_retry_server_errors() {
        let mut server = mockito::Server::new();
        let mock = server.mock("POST", PATH).with_status(503).expect(1).create();

        let err = client_for(&server).generate(&request()).unwrap_err();

        assert!(matches!(err, AppError::GenerationFailed(msg) if msg.contains("503")));
        mock.assert();
    }

    #[test]
    fn generate_reports_api_error_message() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", PATH)
            .with_status(400)
            .with_body(
                r#"{"error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}}"#,
            )
            .create();

        let err = client_for(&server).generate(&request()).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Error generating coaching plan: API error (400): API key not valid [INVALID_ARGUMENT]"
        );
    }

    #[test]
    fn generate_fails_on_malformed_body() {
        let mut server = mockito::Server::new();
        let _m = server.mock("POST", PATH).with_status(200).with_body("not json").create();

        let err = client_for(&server).generate(&request()).unwrap_err();

        assert!(matches!(err, AppError::GenerationFailed(msg) if msg.contains("parse")));
    }

    #[test]
    fn generate_fails_when_prompt_is_blocked() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", PATH)
            .with_status(200)
            .with_body(r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#)
            .create();

        let err = client_for(&server).generate(&request()).unwrap_err();

        assert!(matches!(err, AppError::GenerationFailed(msg) if msg.contains("SAFETY")));
    }

    #[test]
    fn generate_maps_transport_errors_to_generation_failed() {
        let config = GeminiApiConfig {
            api_url: Url::parse("http://127.0.0.1:9/v1").unwrap(),
            timeout_secs: 1,
            ..GeminiApiConfig::default()
        };
        let client = HttpGeminiClient::new(ApiKey::new("fake-key").unwrap(), &config).unwrap();

        let err = client.generate(&request()).unwrap_err();

        let AppError::GenerationFailed(message) = &err else {
            panic!("expected generation failure, got {err:?}");
        };
        assert!(message.starts_with("HTTP request failed"), "{message}");
        assert!(!err.to_string().contains("fake-key"));
    }

    #[test]
    fn new_rejects_retry_configuration() {
        let config = GeminiApiConfig { max_attempts: 2, ..GeminiApiConfig::default() };
        let err = HttpGeminiClient::new(ApiKey::new("k").unwrap(), &config).unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[test]
    fn debug_output_redacts_key() {
        let client =
            HttpGeminiClient::new(ApiKey::new("top-secret").unwrap(), &GeminiApiConfig::default())
                .unwrap();
        let debug = format!("{:?}", client);
        assert!(!debug.contains("top-secret"));
        assert!(debug.contains("[REDACTED]"));
        assert_eq!(client.timeout(), Duration::from_secs(60));
    }
}
