pub mod assembler;
pub mod error;
pub mod model;
pub mod service;

pub use assembler::{assemble, AssembledAudio};
pub use error::{AssemblyError, PodcastServiceError};
pub use model::{AudioClip, LineFailure, Podcast, SynthesisOutcome};
pub use service::{PodcastService, PodcastServiceApi};
