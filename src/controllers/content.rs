use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::content::{ContentExtraction, ContentService, ContentServiceApi};
use crate::error::{AppError, AppResult};
use crate::infrastructure::sessions::SessionStore;

/// Uploads above this size are refused before extraction.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

const PREVIEW_CHARS: usize = 200;

#[derive(Debug, Deserialize)]
pub struct PasteTextRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct UploadQuery {
    pub filename: String,
}

#[derive(Debug, Serialize)]
pub struct ContentResponse {
    pub stage: String,
    pub chars: usize,
    pub preview: String,
    pub warnings: Vec<String>,
}

pub struct ContentController {
    sessions: Arc<SessionStore>,
    content_service: Arc<ContentService>,
}

impl ContentController {
    pub fn new(sessions: Arc<SessionStore>, content_service: Arc<ContentService>) -> Self {
        Self {
            sessions,
            content_service,
        }
    }

    /// POST /api/sessions/{sessionId}/content/text - Use pasted text as content
    pub async fn paste_text(
        State(controller): State<Arc<ContentController>>,
        Path(session_id): Path<Uuid>,
        Json(request): Json<PasteTextRequest>,
    ) -> AppResult<Json<ContentResponse>> {
        let handle = controller.sessions.get(session_id).await?;

        let extraction = controller
            .content_service
            .extract_from_text(&request.text)
            .await?;

        let mut session = handle.lock().await;
        session.load_content(extraction.content.clone());

        Ok(Json(content_response(session.stage().name(), extraction)))
    }

    /// POST /api/sessions/{sessionId}/content/file?filename=... - Extract an upload
    ///
    /// Body is the raw file bytes; the format is chosen by the filename
    /// extension, so unsupported formats are rejected before any extraction.
    pub async fn upload_file(
        State(controller): State<Arc<ContentController>>,
        Path(session_id): Path<Uuid>,
        Query(query): Query<UploadQuery>,
        body: Bytes,
    ) -> AppResult<Json<ContentResponse>> {
        let handle = controller.sessions.get(session_id).await?;

        if body.len() > MAX_UPLOAD_BYTES {
            return Err(AppError::PayloadTooLarge(format!(
                "upload is {} bytes, limit is {MAX_UPLOAD_BYTES}",
                body.len()
            )));
        }

        let extraction = controller
            .content_service
            .extract_from_file(&query.filename, &body)
            .await?;

        let mut session = handle.lock().await;
        session.load_content(extraction.content.clone());

        Ok(Json(content_response(session.stage().name(), extraction)))
    }
}

fn content_response(stage: &str, extraction: ContentExtraction) -> ContentResponse {
    let preview: String = extraction
        .content
        .text()
        .chars()
        .take(PREVIEW_CHARS)
        .collect();

    ContentResponse {
        stage: stage.to_string(),
        chars: extraction.content.char_count(),
        preview,
        warnings: extraction.warnings,
    }
}
