use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::podcast::{LineFailure, PodcastService, PodcastServiceApi};
use crate::domain::session::SessionError;
use crate::error::{AppError, AppResult};
use crate::infrastructure::sessions::SessionStore;

/// Production report returned after generating a podcast.
#[derive(Debug, Serialize)]
pub struct PodcastReport {
    pub stage: String,
    pub lines_total: usize,
    pub lines_synthesized: usize,
    pub failures: Vec<LineFailure>,
    pub duration_seconds: f64,
    pub audio_size_bytes: usize,
}

pub struct PodcastController {
    sessions: Arc<SessionStore>,
    podcast_service: Arc<PodcastService>,
}

impl PodcastController {
    pub fn new(sessions: Arc<SessionStore>, podcast_service: Arc<PodcastService>) -> Self {
        Self {
            sessions,
            podcast_service,
        }
    }

    /// POST /api/sessions/{sessionId}/podcast - Synthesize and assemble
    pub async fn generate(
        State(controller): State<Arc<PodcastController>>,
        Path(session_id): Path<Uuid>,
    ) -> AppResult<Json<PodcastReport>> {
        let handle = controller.sessions.get(session_id).await?;

        let (script, cast) = {
            let session = handle.lock().await;
            match (session.script().cloned(), session.cast().cloned()) {
                (Some(script), Some(cast)) => (script, cast),
                _ => {
                    return Err(SessionError::WrongStage {
                        required: "script_ready",
                        actual: session.stage().name(),
                    }
                    .into())
                }
            }
        };

        // Synthesis can take a while; the session stays unlocked meanwhile.
        // If the script is edited before synthesis finishes, set_podcast
        // below refuses the stale audio.
        let podcast = controller.podcast_service.produce(&script, &cast).await?;

        let report = PodcastReport {
            stage: "podcast_ready".to_string(),
            lines_total: podcast.lines_total,
            lines_synthesized: podcast.lines_synthesized(),
            failures: podcast.failures.clone(),
            duration_seconds: podcast.duration_seconds,
            audio_size_bytes: podcast.audio.len(),
        };

        let mut session = handle.lock().await;
        session.set_podcast(&script, podcast)?;

        Ok(Json(report))
    }

    /// GET /api/sessions/{sessionId}/podcast - Download the assembled audio
    pub async fn download(
        State(controller): State<Arc<PodcastController>>,
        Path(session_id): Path<Uuid>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let handle = controller.sessions.get(session_id).await?;
        let session = handle.lock().await;

        let podcast = session
            .podcast()
            .ok_or_else(|| AppError::NotFound("no podcast assembled yet".to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, "audio/mpeg".parse().unwrap());
        headers.insert(
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"generated_podcast.mp3\"".parse().unwrap(),
        );
        headers.insert(
            "X-Duration-Seconds",
            format!("{:.2}", podcast.duration_seconds).parse().unwrap(),
        );
        headers.insert(
            "X-Line-Count",
            podcast.lines_total.to_string().parse().unwrap(),
        );
        headers.insert(
            "X-Lines-Failed",
            podcast.failures.len().to_string().parse().unwrap(),
        );

        Ok((StatusCode::OK, headers, Body::from(podcast.audio.clone())))
    }
}
