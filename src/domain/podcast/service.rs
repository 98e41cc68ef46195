use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use super::assembler::assemble;
use super::error::PodcastServiceError;
use super::model::{AudioClip, LineFailure, Podcast, SynthesisOutcome};
use crate::domain::casting::{Cast, VoiceId};
use crate::domain::script::DialogueScript;
use crate::infrastructure::repositories::SpeechRepository;

pub struct PodcastService {
    speech_repo: Arc<dyn SpeechRepository>,
}

impl PodcastService {
    pub fn new(speech_repo: Arc<dyn SpeechRepository>) -> Self {
        Self { speech_repo }
    }

    /// Synthesize every script line, strictly in script order, one call at a
    /// time. A line's failure is recorded and the run continues; it never
    /// cancels the remaining lines.
    pub async fn synthesize_script(
        &self,
        script: &DialogueScript,
        cast: &Cast,
    ) -> SynthesisOutcome {
        let mut outcome = SynthesisOutcome::default();

        for (index, line) in script.lines().iter().enumerate() {
            let voice = voice_for(cast, &line.speaker);
            let text_preview: String = line.line.chars().take(80).collect();

            tracing::info!(
                line = index,
                total = script.len(),
                speaker = %line.speaker,
                voice = %voice,
                text_preview = %text_preview,
                "Synthesizing line"
            );

            match self.speech_repo.synthesize(&line.line, voice).await {
                Ok(data) => {
                    outcome.clips.push(AudioClip {
                        line_index: index,
                        data,
                    });
                }
                Err(reason) => {
                    tracing::warn!(
                        line = index,
                        speaker = %line.speaker,
                        reason = %reason,
                        "Line synthesis failed, continuing with remaining lines"
                    );
                    outcome.failures.push(LineFailure {
                        index,
                        speaker: line.speaker.clone(),
                        reason,
                    });
                }
            }
        }

        outcome
    }
}

#[async_trait]
pub trait PodcastServiceApi: Send + Sync {
    /// Synthesize the script and assemble the clips into one podcast.
    ///
    /// Partial-success policy: assembly proceeds with whatever lines
    /// synthesized, surfacing the failures in the production report. Zero
    /// successes refuses assembly.
    async fn produce(
        &self,
        script: &DialogueScript,
        cast: &Cast,
    ) -> Result<Podcast, PodcastServiceError>;
}

#[async_trait]
impl PodcastServiceApi for PodcastService {
    async fn produce(
        &self,
        script: &DialogueScript,
        cast: &Cast,
    ) -> Result<Podcast, PodcastServiceError> {
        if script.is_empty() {
            return Err(PodcastServiceError::NothingToAssemble);
        }

        let outcome = self.synthesize_script(script, cast).await;

        if outcome.clips.is_empty() {
            let reasons = outcome
                .failures
                .iter()
                .map(|f| format!("line {}: {}", f.index, f.reason))
                .collect::<Vec<_>>()
                .join("; ");
            return Err(PodcastServiceError::AllLinesFailed(reasons));
        }

        if !outcome.failures.is_empty() {
            tracing::warn!(
                failed = outcome.failures.len(),
                total = script.len(),
                "Some lines failed synthesis; assembling the successful subset"
            );
        }

        let assembled = assemble(&outcome.clips)?;

        Ok(Podcast {
            audio: assembled.data,
            duration_seconds: assembled.duration_seconds,
            lines_total: script.len(),
            failures: outcome.failures,
            created_at: Utc::now(),
        })
    }
}

/// Map a line's speaker name to a configured voice.
///
/// Exact match against the first speaker picks the first voice; everything
/// else, including names matching neither speaker, gets the second voice.
/// The catch-all is preserved source behavior, kept deliberately so an
/// unmatched name resolves deterministically instead of erroring.
fn voice_for<'a>(cast: &'a Cast, speaker: &str) -> &'a VoiceId {
    if speaker == cast.speakers[0].name {
        &cast.speakers[0].voice
    } else {
        &cast.speakers[1].voice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::casting::Cast;
    use crate::domain::script::{DialogueLine, DialogueScript};
    use std::sync::Mutex;

    /// Records the voice used per call; fails any line whose text contains
    /// the configured marker.
    struct RecordingSpeechRepository {
        fail_on: Option<&'static str>,
        calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl SpeechRepository for RecordingSpeechRepository {
        async fn synthesize(&self, text: &str, voice: &VoiceId) -> Result<Vec<u8>, String> {
            self.calls.lock().unwrap().push(voice.as_str().to_string());
            if let Some(marker) = self.fail_on {
                if text.contains(marker) {
                    return Err("synthesis timed out".to_string());
                }
            }
            Ok(format!("audio:{text}").into_bytes())
        }
    }

    fn script(lines: &[(&str, &str)]) -> DialogueScript {
        DialogueScript::from(
            lines
                .iter()
                .map(|(speaker, line)| DialogueLine {
                    speaker: speaker.to_string(),
                    line: line.to_string(),
                })
                .collect::<Vec<_>>(),
        )
    }

    fn service(fail_on: Option<&'static str>) -> (PodcastService, Arc<RecordingSpeechRepository>) {
        let repo = Arc::new(RecordingSpeechRepository {
            fail_on,
            calls: Mutex::new(Vec::new()),
        });
        (PodcastService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn test_every_line_gets_a_clip_in_order() {
        let (service, _) = service(None);
        let script = script(&[("Alice", "one"), ("Bob", "two"), ("Alice", "three")]);

        let outcome = service
            .synthesize_script(&script, &Cast::default_cast())
            .await;

        assert!(outcome.failures.is_empty());
        let indices: Vec<usize> = outcome.clips.iter().map(|c| c.line_index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(outcome.clips[1].data, b"audio:two");
    }

    #[tokio::test]
    async fn test_one_failure_does_not_cancel_remaining_lines() {
        let (service, _) = service(Some("two"));
        let script = script(&[("Alice", "one"), ("Bob", "two"), ("Alice", "three")]);

        let outcome = service
            .synthesize_script(&script, &Cast::default_cast())
            .await;

        assert_eq!(outcome.clips.len(), 2);
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].index, 1);
        assert_eq!(outcome.failures[0].speaker, "Bob");
        let indices: Vec<usize> = outcome.clips.iter().map(|c| c.line_index).collect();
        assert_eq!(indices, vec![0, 2]);
    }

    #[tokio::test]
    async fn test_unmatched_speaker_falls_back_to_second_voice() {
        let (service, repo) = service(None);
        let script = script(&[("Alice", "a"), ("Bob", "b"), ("Mallory", "c")]);

        service
            .synthesize_script(&script, &Cast::default_cast())
            .await;

        let calls = repo.calls.lock().unwrap();
        assert_eq!(
            *calls,
            vec![
                "female-shaonv".to_string(),
                "male-qn-qingse".to_string(),
                // unmatched name resolves to the second speaker's voice
                "male-qn-qingse".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_script_refuses_production() {
        let (service, _) = service(None);
        let err = service
            .produce(&DialogueScript::from(Vec::new()), &Cast::default_cast())
            .await
            .unwrap_err();
        assert!(matches!(err, PodcastServiceError::NothingToAssemble));
    }

    #[tokio::test]
    async fn test_all_lines_failing_refuses_production() {
        let (service, _) = service(Some("audio"));
        let script = script(&[("Alice", "audio please"), ("Bob", "more audio")]);

        let err = service
            .produce(&script, &Cast::default_cast())
            .await
            .unwrap_err();
        match err {
            PodcastServiceError::AllLinesFailed(reasons) => {
                assert!(reasons.contains("line 0"));
                assert!(reasons.contains("line 1"));
            }
            other => panic!("expected AllLinesFailed, got {other:?}"),
        }
    }
}
