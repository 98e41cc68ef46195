pub mod error;
pub mod model;
pub mod service;

pub use error::ScriptServiceError;
pub use model::{DialogueLine, DialogueScript, ScriptValidationError};
pub use service::{ScriptService, ScriptServiceApi};
