// Re-export AppCommand from events
pub use crate::events::AppCommand;

pub mod executor;
pub mod handlers;
