pub mod casting;
pub mod content;
pub mod health;
pub mod podcast;
pub mod script;
pub mod session;
