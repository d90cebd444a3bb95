//! Axum route handler for review generation.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::generation::markdown::strip_markdown;
use crate::generation::prompts::PROMPT_STYLES;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    300
}

#[derive(Debug, Serialize)]
pub struct GenerateReviewResponse {
    pub review: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handler
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/generate-review
///
/// Resolves the prompt (caller-supplied, or a random house style when absent),
/// relays it to the upstream completion API, and returns the generated text
/// with markdown markers stripped.
pub async fn handle_generate_review(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateReviewResponse>, AppError> {
    let prompt = match request.prompt.as_deref().map(str::trim) {
        Some(p) if !p.is_empty() => p.to_string(),
        // Absent and blank prompts both fall back to a house style
        _ => {
            let style = state.style_selector.pick(PROMPT_STYLES.len());
            info!("no prompt supplied, generating with style {}", style + 1);
            PROMPT_STYLES[style].to_string()
        }
    };

    let completion = state
        .llm
        .complete(&prompt, request.temperature, request.max_tokens)
        .await?;

    let review = strip_markdown(completion.trim());

    Ok(Json(GenerateReviewResponse { review }))
}
