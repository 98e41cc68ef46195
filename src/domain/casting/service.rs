use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

use super::model::{Cast, Speaker};
use super::style::DialogueStyle;
use super::voice::{VoiceId, VOICE_CATALOG};
use crate::domain::content::Content;
use crate::domain::shared::llm_text::strip_code_fences;
use crate::infrastructure::repositories::ChatRepository;

const SYSTEM_PROMPT: &str =
    "You are an AI that analyzes text and recommends podcast characters and a dialogue style.";

pub struct CastingService {
    chat_repo: Arc<dyn ChatRepository>,
}

impl CastingService {
    pub fn new(chat_repo: Arc<dyn ChatRepository>) -> Self {
        Self { chat_repo }
    }
}

#[async_trait]
pub trait CastingServiceApi: Send + Sync {
    /// Propose two speakers and a dialogue style for the given content.
    ///
    /// Recommendation is advisory: any call failure, parse failure, or
    /// validation failure falls back to [`Cast::default_cast`] instead of
    /// surfacing an error.
    async fn recommend(&self, content: &Content) -> Cast;
}

#[async_trait]
impl CastingServiceApi for CastingService {
    async fn recommend(&self, content: &Content) -> Cast {
        let prompt = build_recommendation_prompt(content);

        let raw = match self.chat_repo.complete(SYSTEM_PROMPT, &prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "Recommendation call failed, using default cast");
                return Cast::default_cast();
            }
        };

        match parse_recommendation(&raw) {
            Ok(cast) => {
                tracing::info!(
                    speaker_1 = %cast.speakers[0].name,
                    speaker_2 = %cast.speakers[1].name,
                    style = %cast.style,
                    "Cast recommendation accepted"
                );
                cast
            }
            Err(reason) => {
                let preview: String = raw.chars().take(200).collect();
                tracing::warn!(
                    reason = %reason,
                    raw_preview = %preview,
                    "Recommendation response rejected, using default cast"
                );
                Cast::default_cast()
            }
        }
    }
}

fn build_recommendation_prompt(content: &Content) -> String {
    let voices: Vec<&str> = VOICE_CATALOG.iter().map(|entry| entry.id).collect();
    let styles: Vec<&str> = DialogueStyle::ALL.iter().map(|s| s.label()).collect();

    format!(
        "Based on the content below, recommend two characters suited to a podcast \
         conversation (names should reflect the subject matter), a voice for each \
         character chosen from this catalog: {voices}, and a dialogue style chosen \
         from: {styles}.\n\
         Respond with JSON only, in exactly this shape:\n\
         {{\n\
           \"characters\": [\n\
             {{\"name\": \"first character\", \"voice\": \"voice id\"}},\n\
             {{\"name\": \"second character\", \"voice\": \"voice id\"}}\n\
           ],\n\
           \"dialogue_style\": \"style name\"\n\
         }}\n\n\
         Content:\n---\n{content}\n---",
        voices = voices.join(", "),
        styles = styles.join(", "),
        content = content.text(),
    )
}

#[derive(Debug, Deserialize)]
struct RecommendationPayload {
    characters: Vec<CharacterPayload>,
    dialogue_style: String,
}

#[derive(Debug, Deserialize)]
struct CharacterPayload {
    name: String,
    voice: String,
}

/// Validate the model's recommendation against the fixed catalogs.
fn parse_recommendation(raw: &str) -> Result<Cast, String> {
    let stripped = strip_code_fences(raw);

    let payload: RecommendationPayload =
        serde_json::from_str(stripped).map_err(|e| format!("not valid JSON: {e}"))?;

    if payload.characters.len() != 2 {
        return Err(format!(
            "expected exactly 2 characters, got {}",
            payload.characters.len()
        ));
    }

    let mut speakers = Vec::with_capacity(2);
    for character in &payload.characters {
        if character.name.trim().is_empty() {
            return Err("character with empty name".to_string());
        }
        let voice = VoiceId::parse(&character.voice).map_err(|e| e.to_string())?;
        speakers.push(Speaker {
            name: character.name.trim().to_string(),
            voice,
        });
    }

    let style = DialogueStyle::from_label(&payload.dialogue_style)
        .ok_or_else(|| format!("unknown dialogue style: {}", payload.dialogue_style))?;

    let [first, second]: [Speaker; 2] = speakers
        .try_into()
        .map_err(|_| "expected exactly 2 characters".to_string())?;

    Ok(Cast {
        speakers: [first, second],
        style,
    })
}
