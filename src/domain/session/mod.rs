pub mod error;
pub mod model;

pub use error::SessionError;
pub use model::{Session, SessionStage};
