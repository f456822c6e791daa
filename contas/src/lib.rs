mod app;
pub mod app_core;
pub mod background;
pub mod commands;
pub mod config;
pub mod events;
pub mod input;
pub mod labels;
pub mod log_buffer;
pub mod logging;
pub mod state;
pub mod ui;
pub mod utils;

pub use app::App;

// Always expose testing module (integration tests need it)
pub mod testing;
