use axum::{
    extract::{Path, State},
    http::{header, HeaderMap},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::casting::{Cast, DialogueStyle, Speaker, VoiceId};
use crate::domain::script::{DialogueScript, ScriptService, ScriptServiceApi};
use crate::domain::session::SessionError;
use crate::error::{AppError, AppResult};
use crate::infrastructure::sessions::SessionStore;

#[derive(Debug, Deserialize)]
pub struct GenerateScriptRequest {
    pub speakers: [SpeakerRequest; 2],
    pub style: DialogueStyle,
}

#[derive(Debug, Deserialize)]
pub struct SpeakerRequest {
    pub name: String,
    pub voice: VoiceId,
}

#[derive(Debug, Serialize)]
pub struct ScriptResponse {
    pub stage: String,
    pub cast: Cast,
    pub script: DialogueScript,
}

pub struct ScriptController {
    sessions: Arc<SessionStore>,
    script_service: Arc<ScriptService>,
}

impl ScriptController {
    pub fn new(sessions: Arc<SessionStore>, script_service: Arc<ScriptService>) -> Self {
        Self {
            sessions,
            script_service,
        }
    }

    /// POST /api/sessions/{sessionId}/script - Generate a dialogue script
    pub async fn generate(
        State(controller): State<Arc<ScriptController>>,
        Path(session_id): Path<Uuid>,
        Json(request): Json<GenerateScriptRequest>,
    ) -> AppResult<Json<ScriptResponse>> {
        let cast = cast_from_request(request)?;

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

        // The lock is not held across the model call; the transition below
        // refuses the script if the content was replaced in the meantime.
        let script = controller.script_service.generate(&content, &cast).await?;

        let mut session = handle.lock().await;
        session.set_script(&content, cast.clone(), script.clone())?;

        Ok(Json(ScriptResponse {
            stage: session.stage().name().to_string(),
            cast,
            script,
        }))
    }

    /// PUT /api/sessions/{sessionId}/script - Replace the script with an edit
    ///
    /// The body is the editable JSON text form. An edit that fails
    /// validation is rejected wholesale and the prior script stays active.
    pub async fn edit(
        State(controller): State<Arc<ScriptController>>,
        Path(session_id): Path<Uuid>,
        body: String,
    ) -> AppResult<Json<ScriptResponse>> {
        let handle = controller.sessions.get(session_id).await?;

        let script =
            DialogueScript::parse(&body).map_err(|e| AppError::BadRequest(e.to_string()))?;

        let mut session = handle.lock().await;
        session.replace_script(script.clone())?;

        let cast = session
            .cast()
            .cloned()
            .expect("script_ready stage always carries a cast");

        Ok(Json(ScriptResponse {
            stage: session.stage().name().to_string(),
            cast,
            script,
        }))
    }

    /// GET /api/sessions/{sessionId}/script - Download the script as JSON
    pub async fn download(
        State(controller): State<Arc<ScriptController>>,
        Path(session_id): Path<Uuid>,
    ) -> AppResult<(HeaderMap, String)> {
        let handle = controller.sessions.get(session_id).await?;
        let session = handle.lock().await;

        let script = session.script().ok_or(SessionError::WrongStage {
            required: "script_ready",
            actual: session.stage().name(),
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, "application/json".parse().unwrap());
        headers.insert(
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"podcast_script.json\"".parse().unwrap(),
        );

        Ok((headers, script.to_json_pretty()))
    }
}

fn cast_from_request(request: GenerateScriptRequest) -> AppResult<Cast> {
    let [first, second] = request.speakers;

    let first_name = first.name.trim();
    let second_name = second.name.trim();

    if first_name.is_empty() || second_name.is_empty() {
        return Err(AppError::BadRequest(
            "speaker names cannot be empty".to_string(),
        ));
    }

    Ok(Cast {
        speakers: [
            Speaker {
                name: first_name.to_string(),
                voice: first.voice,
            },
            Speaker {
                name: second_name.to_string(),
                voice: second.voice,
            },
        ],
        style: request.style,
    })
}
