pub mod model;
pub mod service;
pub mod style;
pub mod voice;

pub use model::{Cast, Speaker};
pub use service::{CastingService, CastingServiceApi};
pub use style::DialogueStyle;
pub use voice::{VoiceEntry, VoiceId, VOICE_CATALOG};
