//! Reusable layout builders for consistent screen structure.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::theme::{
    FILTER_BAR_HEIGHT, HELP_BAR_HEIGHT, SCREEN_MARGIN, SUMMARY_CARD_HEIGHT, TAB_BAR_HEIGHT,
};

/// Regions of the main window, top to bottom
pub struct AppAreas {
    pub tabs: Rect,
    /// Zero-height on tabs that hide the summary
    pub summary: Rect,
    pub filter: Rect,
    pub content: Rect,
    pub help: Rect,
}

/// Tab bar, summary cards, filter bar, tab content and help bar
pub fn app_layout(area: Rect, show_summary: bool) -> AppAreas {
    let summary_height = if show_summary { SUMMARY_CARD_HEIGHT } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(SCREEN_MARGIN)
        .constraints([
            Constraint::Length(TAB_BAR_HEIGHT),
            Constraint::Length(summary_height),
            Constraint::Length(FILTER_BAR_HEIGHT),
            Constraint::Min(6),
            Constraint::Length(HELP_BAR_HEIGHT),
        ])
        .split(area);

    AppAreas {
        tabs: chunks[0],
        summary: chunks[1],
        filter: chunks[2],
        content: chunks[3],
        help: chunks[4],
    }
}

/// Split an area into `n` equal columns
pub fn columns(area: Rect, n: u32) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..n).map(|_| Constraint::Ratio(1, n)))
        .split(area)
        .to_vec()
}

/// Split a title area into title text and loading indicator.
///
/// Returns (title_text_area, loading_indicator_area)
pub fn title_with_loading(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(100), Constraint::Length(1)])
        .split(area);

    (chunks[0], chunks[1])
}

/// Create a centered popup rectangle.
///
/// # Arguments
/// * `percent_x` - Width as percentage of parent (0-100)
/// * `percent_y` - Height as percentage of parent (0-100)
/// * `area` - The parent area to center within
pub fn centered_popup(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Standard popup sizes
pub mod popup_sizes {
    /// Small popup (50% x 30%) - for simple confirmations
    pub const SMALL: (u16, u16) = (50, 30);

    /// Medium popup (60% x 50%) - for the entry form
    pub const MEDIUM: (u16, u16) = (60, 50);

    /// Large popup (80% x 80%) - for help screens
    pub const LARGE: (u16, u16) = (80, 80);
}
