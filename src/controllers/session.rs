use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::session::Session;
use crate::error::AppResult;
use crate::infrastructure::sessions::SessionStore;

/// Stage summary returned for every session-level operation.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub id: Uuid,
    pub stage: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_chars: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_lines: Option<usize>,
    pub has_podcast: bool,
}

impl SessionResponse {
    pub fn from_session(session: &Session) -> Self {
        Self {
            id: session.id,
            stage: session.stage().name().to_string(),
            created_at: session.created_at,
            content_chars: session.content().map(|c| c.char_count()),
            script_lines: session.script().map(|s| s.len()),
            has_podcast: session.podcast().is_some(),
        }
    }
}

pub struct SessionController {
    sessions: Arc<SessionStore>,
}

impl SessionController {
    pub fn new(sessions: Arc<SessionStore>) -> Self {
        Self { sessions }
    }

    /// POST /api/sessions - Start a new session
    pub async fn create(
        State(controller): State<Arc<SessionController>>,
    ) -> AppResult<(StatusCode, Json<SessionResponse>)> {
        let handle = controller.sessions.create().await;
        let session = handle.lock().await;
        Ok((StatusCode::CREATED, Json(SessionResponse::from_session(&session))))
    }

    /// GET /api/sessions/{sessionId} - Current stage summary
    pub async fn get(
        State(controller): State<Arc<SessionController>>,
        Path(session_id): Path<Uuid>,
    ) -> AppResult<Json<SessionResponse>> {
        let handle = controller.sessions.get(session_id).await?;
        let session = handle.lock().await;
        Ok(Json(SessionResponse::from_session(&session)))
    }
}
