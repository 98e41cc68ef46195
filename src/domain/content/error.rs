use crate::error::AppError;

use super::model::MAX_CONTENT_CHARS;

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("unsupported file format: {0} (expected .txt, .pdf or .docx)")]
    UnsupportedFormat(String),

    #[error("no extractable text in document (scanned or image-only file?)")]
    NoExtractableText,

    #[error("content is empty")]
    EmptyContent,

    #[error("file is not valid UTF-8 text")]
    InvalidEncoding,

    #[error("could not read document: {0}")]
    Unreadable(String),

    #[error("content is {0} characters, limit is {MAX_CONTENT_CHARS}")]
    TooLarge(usize),
}

impl From<ContentError> for AppError {
    fn from(err: ContentError) -> Self {
        match err {
            ContentError::UnsupportedFormat(msg) => AppError::UnsupportedFormat(msg),
            ContentError::TooLarge(_) => AppError::PayloadTooLarge(err.to_string()),
            ContentError::NoExtractableText
            | ContentError::EmptyContent
            | ContentError::InvalidEncoding
            | ContentError::Unreadable(_) => AppError::BadRequest(err.to_string()),
        }
    }
}
