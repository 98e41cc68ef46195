use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::error::SessionError;
use crate::domain::casting::Cast;
use crate::domain::content::Content;
use crate::domain::podcast::Podcast;
use crate::domain::script::DialogueScript;

/// Stage machine for one interactive session:
/// `Empty → ContentLoaded → ScriptReady (self-loop on edit) → PodcastReady`.
///
/// Each variant carries exactly the data that stage guarantees to exist.
/// Re-running an earlier trigger rebuilds that stage and discards everything
/// downstream of it.
#[derive(Debug, Clone)]
pub enum SessionStage {
    Empty,
    ContentLoaded {
        content: Content,
    },
    ScriptReady {
        content: Content,
        cast: Cast,
        script: DialogueScript,
    },
    PodcastReady {
        content: Content,
        cast: Cast,
        script: DialogueScript,
        podcast: Podcast,
    },
}

impl SessionStage {
    pub fn name(&self) -> &'static str {
        match self {
            SessionStage::Empty => "empty",
            SessionStage::ContentLoaded { .. } => "content_loaded",
            SessionStage::ScriptReady { .. } => "script_ready",
            SessionStage::PodcastReady { .. } => "podcast_ready",
        }
    }
}

/// All state of one user session. Lives only in the in-memory store.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    stage: SessionStage,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            stage: SessionStage::Empty,
        }
    }

    pub fn stage(&self) -> &SessionStage {
        &self.stage
    }

    pub fn content(&self) -> Option<&Content> {
        match &self.stage {
            SessionStage::Empty => None,
            SessionStage::ContentLoaded { content }
            | SessionStage::ScriptReady { content, .. }
            | SessionStage::PodcastReady { content, .. } => Some(content),
        }
    }

    pub fn cast(&self) -> Option<&Cast> {
        match &self.stage {
            SessionStage::ScriptReady { cast, .. }
            | SessionStage::PodcastReady { cast, .. } => Some(cast),
            _ => None,
        }
    }

    pub fn script(&self) -> Option<&DialogueScript> {
        match &self.stage {
            SessionStage::ScriptReady { script, .. }
            | SessionStage::PodcastReady { script, .. } => Some(script),
            _ => None,
        }
    }

    pub fn podcast(&self) -> Option<&Podcast> {
        match &self.stage {
            SessionStage::PodcastReady { podcast, .. } => Some(podcast),
            _ => None,
        }
    }

    /// Load new content, discarding any script and podcast.
    pub fn load_content(&mut self, content: Content) {
        self.stage = SessionStage::ContentLoaded { content };
    }

    /// Store a freshly generated script, discarding any previous podcast.
    ///
    /// `generated_from` is the content the script was generated against.
    /// The session lock is not held across the generation call, so the
    /// active content may have been replaced in the meantime; a mismatch
    /// refuses the transition and leaves the session untouched.
    pub fn set_script(
        &mut self,
        generated_from: &Content,
        cast: Cast,
        script: DialogueScript,
    ) -> Result<(), SessionError> {
        if let Some(current) = self.content() {
            if current != generated_from {
                return Err(SessionError::StaleInput { input: "content" });
            }
        }

        match std::mem::replace(&mut self.stage, SessionStage::Empty) {
            SessionStage::Empty => Err(self.wrong_stage(SessionStage::Empty, "content_loaded")),
            SessionStage::ContentLoaded { content }
            | SessionStage::ScriptReady { content, .. }
            | SessionStage::PodcastReady { content, .. } => {
                self.stage = SessionStage::ScriptReady {
                    content,
                    cast,
                    script,
                };
                Ok(())
            }
        }
    }

    /// Replace the active script with an edited one. Edits overwrite, never
    /// merge, and invalidate any previously assembled podcast.
    pub fn replace_script(&mut self, script: DialogueScript) -> Result<(), SessionError> {
        match std::mem::replace(&mut self.stage, SessionStage::Empty) {
            SessionStage::ScriptReady { content, cast, .. }
            | SessionStage::PodcastReady { content, cast, .. } => {
                self.stage = SessionStage::ScriptReady {
                    content,
                    cast,
                    script,
                };
                Ok(())
            }
            other => Err(self.wrong_stage(other, "script_ready")),
        }
    }

    /// Attach an assembled podcast to the current script.
    ///
    /// `produced_from` is the script the audio was synthesized from. An
    /// edit landing while synthesis ran unlocked makes the audio stale;
    /// the transition is refused and the session keeps the edited script.
    pub fn set_podcast(
        &mut self,
        produced_from: &DialogueScript,
        podcast: Podcast,
    ) -> Result<(), SessionError> {
        if let Some(current) = self.script() {
            if current != produced_from {
                return Err(SessionError::StaleInput { input: "script" });
            }
        }

        match std::mem::replace(&mut self.stage, SessionStage::Empty) {
            SessionStage::ScriptReady {
                content,
                cast,
                script,
            }
            | SessionStage::PodcastReady {
                content,
                cast,
                script,
                ..
            } => {
                self.stage = SessionStage::PodcastReady {
                    content,
                    cast,
                    script,
                    podcast,
                };
                Ok(())
            }
            other => Err(self.wrong_stage(other, "script_ready")),
        }
    }

    fn wrong_stage(&mut self, actual: SessionStage, required: &'static str) -> SessionError {
        let error = SessionError::WrongStage {
            required,
            actual: actual.name(),
        };
        // Restore the stage the failed transition took out.
        self.stage = actual;
        error
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
