use axum::Json;
use serde_json::{json, Value};

/// GET /api/health
/// Returns a simple status object so the front-end can probe the service.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "Hotpot review generator API is running"
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_reports_ok() {
        let Json(body) = health_handler().await;
        assert_eq!(body["status"], "ok");
        assert!(body["message"].as_str().unwrap().contains("running"));
    }
}
