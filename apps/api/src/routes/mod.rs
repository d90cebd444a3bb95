pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::generation::handlers;
use crate::state::AppState;

/// Assembles the application router: the two API routes plus the static
/// front-end served from `static_dir` as the fallback.
pub fn build_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/api/health", get(health::health_handler))
        .route(
            "/api/generate-review",
            post(handlers::handle_generate_review),
        )
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
}
