use crate::error::AppError;

use super::model::ScriptValidationError;

#[derive(Debug, thiserror::Error)]
pub enum ScriptServiceError {
    /// The model's output did not match the requested JSON shape. The raw
    /// completion text is kept for diagnosis; nothing is repaired silently.
    #[error("malformed generation: {source}")]
    MalformedGeneration {
        source: ScriptValidationError,
        raw: String,
    },

    #[error("dependency error: {0}")]
    Dependency(String),
}

impl From<ScriptServiceError> for AppError {
    fn from(err: ScriptServiceError) -> Self {
        match err {
            ScriptServiceError::MalformedGeneration { ref source, ref raw } => {
                AppError::ExternalService(format!(
                    "dialogue generation returned a malformed script ({source}); raw output: {raw}"
                ))
            }
            ScriptServiceError::Dependency(msg) => AppError::ExternalService(msg),
        }
    }
}
