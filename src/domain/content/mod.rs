pub mod error;
pub mod model;
pub mod service;

pub use error::ContentError;
pub use model::{Content, MAX_CONTENT_CHARS};
pub use service::{ContentExtraction, ContentService, ContentServiceApi, SourceFormat};
