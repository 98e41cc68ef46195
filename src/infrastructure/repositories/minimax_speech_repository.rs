use super::speech_repository::SpeechRepository;
use crate::domain::casting::VoiceId;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Fixed audio encoding parameters for every synthesis call.
const SAMPLE_RATE: u32 = 32_000;
const BITRATE: u32 = 128_000;
const AUDIO_FORMAT: &str = "mp3";

/// Minimax t2a_v2 implementation of the speech repository.
///
/// The API returns the MP3 payload as a hex string inside the response JSON;
/// this repository decodes it to raw bytes. The injected HTTP client carries
/// the per-request timeout, so a hung call surfaces as a plain per-line error.
pub struct MinimaxSpeechRepository {
    client: reqwest::Client,
    base_url: String,
    group_id: String,
    api_key: String,
    model: String,
}

impl MinimaxSpeechRepository {
    pub fn new(
        client: reqwest::Client,
        base_url: String,
        group_id: String,
        api_key: String,
        model: String,
    ) -> Self {
        Self {
            client,
            base_url,
            group_id,
            api_key,
            model,
        }
    }

    fn synthesis_url(&self) -> String {
        format!(
            "{}/v1/t2a_v2?GroupId={}",
            self.base_url.trim_end_matches('/'),
            self.group_id
        )
    }
}

#[derive(Debug, Serialize)]
struct SynthesisRequest<'a> {
    model: &'a str,
    text: &'a str,
    timber_weights: [TimberWeight<'a>; 1],
    voice_setting: VoiceSetting<'a>,
    audio_setting: AudioSetting<'a>,
    language_boost: &'a str,
}

#[derive(Debug, Serialize)]
struct TimberWeight<'a> {
    voice_id: &'a str,
    weight: u32,
}

#[derive(Debug, Serialize)]
struct VoiceSetting<'a> {
    voice_id: &'a str,
    speed: f32,
    pitch: i32,
    vol: f32,
    latex_read: bool,
}

#[derive(Debug, Serialize)]
struct AudioSetting<'a> {
    sample_rate: u32,
    bitrate: u32,
    format: &'a str,
}

#[derive(Debug, Deserialize)]
struct SynthesisResponse {
    data: Option<SynthesisData>,
}

#[derive(Debug, Deserialize)]
struct SynthesisData {
    audio: Option<String>,
}

/// Pull the audio bytes out of a parsed synthesis response.
fn decode_audio_payload(response: SynthesisResponse) -> Result<Vec<u8>, String> {
    let audio_hex = response
        .data
        .and_then(|data| data.audio)
        .ok_or_else(|| "synthesis response missing audio field".to_string())?;

    hex::decode(audio_hex).map_err(|e| format!("malformed hex audio payload: {e}"))
}

#[async_trait]
impl SpeechRepository for MinimaxSpeechRepository {
    async fn synthesize(&self, text: &str, voice: &VoiceId) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();

        let payload = SynthesisRequest {
            model: &self.model,
            text,
            timber_weights: [TimberWeight {
                voice_id: voice.as_str(),
                weight: 100,
            }],
            voice_setting: VoiceSetting {
                voice_id: "",
                speed: 1.0,
                pitch: 0,
                vol: 1.0,
                latex_read: false,
            },
            audio_setting: AudioSetting {
                sample_rate: SAMPLE_RATE,
                bitrate: BITRATE,
                format: AUDIO_FORMAT,
            },
            language_boost: "auto",
        };

        let response = self
            .client
            .post(self.synthesis_url())
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| format!("synthesis request failed: {e}"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let snippet: String = body.chars().take(200).collect();
            return Err(format!("synthesis request returned {status}: {snippet}"));
        }

        let parsed: SynthesisResponse = response
            .json()
            .await
            .map_err(|e| format!("synthesis response is not valid JSON: {e}"))?;

        let audio = decode_audio_payload(parsed)?;

        tracing::info!(
            provider = "minimax",
            model = %self.model,
            voice = %voice,
            text_length = text.len(),
            latency_ms = start_time.elapsed().as_millis(),
            audio_size_bytes = audio.len(),
            "Line synthesized"
        );

        Ok(audio)
    }
}
