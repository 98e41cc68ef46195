pub mod casting;
pub mod content;
pub mod podcast;
pub mod script;
pub mod session;
pub mod shared;
