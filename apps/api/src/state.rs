use std::sync::Arc;

use crate::generation::selector::StyleSelector;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Pluggable template chooser. Default: RandomStyleSelector; tests swap in
    /// a deterministic one.
    pub style_selector: Arc<dyn StyleSelector>,
}
