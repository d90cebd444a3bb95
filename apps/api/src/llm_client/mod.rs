/// LLM Client — the single point of entry for all DeepSeek API calls.
///
/// ARCHITECTURAL RULE: No other module may call the DeepSeek API directly.
/// All upstream interactions MUST go through this module.
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Default completions endpoint. Overridable via `DEEPSEEK_API_URL` so tests
/// and self-hosted gateways can point the client elsewhere.
pub const DEEPSEEK_API_URL: &str = "https://api.deepseek.com/v1/chat/completions";

/// The model used for all LLM calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "deepseek-chat";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("DEEPSEEK_API_KEY is not set")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned no choices")]
    EmptyChoices,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct DeepSeekError {
    error: DeepSeekErrorBody,
}

#[derive(Debug, Deserialize)]
struct DeepSeekErrorBody {
    message: String,
}

/// The single LLM client used by all handlers.
/// Wraps the DeepSeek chat-completion API. One request, one upstream call —
/// failures surface immediately, there is no retry loop.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: Option<String>,
    api_url: String,
}

impl LlmClient {
    pub fn new(api_key: Option<String>, api_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            api_url,
        }
    }

    /// Sends a single-message chat completion and returns the generated text.
    /// Returns `MissingApiKey` before any network activity if no key is set.
    pub async fn complete(
        &self,
        prompt: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

        let request_body = ChatRequest {
            model: MODEL,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature,
            max_tokens,
            stream: false,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Surface the upstream message when the error body is well-formed
            let message = serde_json::from_str::<DeepSeekError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat_response: ChatResponse = response.json().await?;

        let choice = chat_response
            .choices
            .into_iter()
            .next()
            .ok_or(LlmError::EmptyChoices)?;

        debug!("LLM call succeeded ({} chars)", choice.message.content.len());

        Ok(choice.message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::{routing::post, Json, Router};
    use serde_json::{json, Value};

    /// Serves `router` on an ephemeral port and returns the completions URL.
    async fn spawn_upstream(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/v1/chat/completions")
    }

    fn completion_body(content: &str) -> Value {
        json!({
            "choices": [
                { "message": { "role": "assistant", "content": content } }
            ]
        })
    }

    #[tokio::test]
    async fn test_complete_returns_message_content() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|| async { Json(completion_body("The broth was rich and fragrant.")) }),
        );
        let url = spawn_upstream(router).await;

        let client = LlmClient::new(Some("test-key".to_string()), url);
        let text = client.complete("write a review", 0.7, 300).await.unwrap();
        assert_eq!(text, "The broth was rich and fragrant.");
    }

    #[tokio::test]
    async fn test_missing_api_key_short_circuits() {
        // Unroutable URL: if the client attempted a network call the test
        // would fail with an Http error instead of MissingApiKey.
        let client = LlmClient::new(None, "http://127.0.0.1:1/unreachable".to_string());
        let err = client.complete("write a review", 0.7, 300).await.unwrap_err();
        assert!(matches!(err, LlmError::MissingApiKey));
    }

    #[tokio::test]
    async fn test_upstream_error_propagates_status_and_message() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": { "message": "model overloaded", "type": "server_error" } })),
                )
            }),
        );
        let url = spawn_upstream(router).await;

        let client = LlmClient::new(Some("test-key".to_string()), url);
        let err = client.complete("write a review", 0.7, 300).await.unwrap_err();
        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "model overloaded");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_choices_is_an_error() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|| async { Json(json!({ "choices": [] })) }),
        );
        let url = spawn_upstream(router).await;

        let client = LlmClient::new(Some("test-key".to_string()), url);
        let err = client.complete("write a review", 0.7, 300).await.unwrap_err();
        assert!(matches!(err, LlmError::EmptyChoices));
    }
}
