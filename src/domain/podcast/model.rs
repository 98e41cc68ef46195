use chrono::{DateTime, Utc};
use serde::Serialize;

/// MP3 bytes synthesized for exactly one script line.
#[derive(Debug, Clone)]
pub struct AudioClip {
    pub line_index: usize,
    pub data: Vec<u8>,
}

/// One script line that failed synthesis. Accumulated, never thrown mid-run.
#[derive(Debug, Clone, Serialize)]
pub struct LineFailure {
    pub index: usize,
    pub speaker: String,
    pub reason: String,
}

/// Everything synthesis produced for one script, successes and failures.
#[derive(Debug, Clone, Default)]
pub struct SynthesisOutcome {
    pub clips: Vec<AudioClip>,
    pub failures: Vec<LineFailure>,
}

/// The final artifact: one playable MP3 stream plus its production report.
#[derive(Debug, Clone)]
pub struct Podcast {
    pub audio: Vec<u8>,
    pub duration_seconds: f64,
    pub lines_total: usize,
    pub failures: Vec<LineFailure>,
    pub created_at: DateTime<Utc>,
}

impl Podcast {
    pub fn lines_synthesized(&self) -> usize {
        self.lines_total - self.failures.len()
    }
}
