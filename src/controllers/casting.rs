use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::casting::{Cast, CastingService, CastingServiceApi, DialogueStyle, VOICE_CATALOG};
use crate::domain::session::SessionError;
use crate::error::AppResult;
use crate::infrastructure::sessions::SessionStore;

#[derive(Debug, Serialize)]
pub struct VoiceOption {
    pub label: &'static str,
    pub voice_id: &'static str,
}

#[derive(Debug, Serialize)]
pub struct StyleOption {
    pub style: DialogueStyle,
    pub label: &'static str,
}

pub struct CastingController {
    sessions: Arc<SessionStore>,
    casting_service: Arc<CastingService>,
}

impl CastingController {
    pub fn new(sessions: Arc<SessionStore>, casting_service: Arc<CastingService>) -> Self {
        Self {
            sessions,
            casting_service,
        }
    }

    /// POST /api/sessions/{sessionId}/recommendation - Propose a cast
    ///
    /// Advisory only: the response is a suggestion the user may override,
    /// and provider failures degrade to the default cast instead of erroring.
    pub async fn recommend(
        State(controller): State<Arc<CastingController>>,
        Path(session_id): Path<Uuid>,
    ) -> AppResult<Json<Cast>> {
        let handle = controller.sessions.get(session_id).await?;

        let content = {
            let session = handle.lock().await;
            session
                .content()
                .cloned()
                .ok_or(SessionError::WrongStage {
                    required: "content_loaded",
                    actual: session.stage().name(),
                })?
        };

        let cast = controller.casting_service.recommend(&content).await;
        Ok(Json(cast))
    }
}

/// GET /api/voices - The fixed voice catalog for UI pickers
pub async fn list_voices() -> Json<Vec<VoiceOption>> {
    Json(
        VOICE_CATALOG
            .iter()
            .map(|entry| VoiceOption {
                label: entry.label,
                voice_id: entry.id,
            })
            .collect(),
    )
}

/// GET /api/styles - The fixed dialogue style catalog
pub async fn list_styles() -> Json<Vec<StyleOption>> {
    Json(
        DialogueStyle::ALL
            .iter()
            .map(|style| StyleOption {
                style: *style,
                label: style.label(),
            })
            .collect(),
    )
}
