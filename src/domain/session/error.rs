use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("operation requires stage \"{required}\" but session is at \"{actual}\"")]
    WrongStage {
        required: &'static str,
        actual: &'static str,
    },

    #[error("the session's {input} changed while the operation was running; re-run it against the current {input}")]
    StaleInput { input: &'static str },
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        AppError::Conflict(err.to_string())
    }
}
