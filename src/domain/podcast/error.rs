use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum AssemblyError {
    #[error("nothing to assemble")]
    Empty,

    #[error("clip for line {index} is not valid MPEG audio: {reason}")]
    InvalidClip { index: usize, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum PodcastServiceError {
    #[error("script has no lines; nothing to assemble")]
    NothingToAssemble,

    #[error("no lines could be synthesized: {0}")]
    AllLinesFailed(String),

    #[error(transparent)]
    Assembly(#[from] AssemblyError),
}

impl From<PodcastServiceError> for AppError {
    fn from(err: PodcastServiceError) -> Self {
        match err {
            PodcastServiceError::NothingToAssemble => AppError::BadRequest(err.to_string()),
            PodcastServiceError::AllLinesFailed(_) => AppError::ExternalService(err.to_string()),
            PodcastServiceError::Assembly(_) => AppError::Internal(err.to_string()),
        }
    }
}
