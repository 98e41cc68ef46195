use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn health_ready() -> impl IntoResponse {
    // No persistent dependencies to probe; startup already refused to run
    // without the LLM and synthesis credentials.
    (
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "llm": "configured",
            "tts": "configured"
        })),
    )
}
