pub mod entries_screen;
pub mod logs_screen;
pub mod reports_screen;
