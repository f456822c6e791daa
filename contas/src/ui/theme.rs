//! Centralized theme constants and style functions for consistent UI styling.
//!
//! All colors, layout constants, and common styles should be defined here
//! to ensure visual consistency across all tabs and components.

use ratatui::style::{Color, Modifier, Style};

use crate::state::NotificationKind;
use crate::utils::format::BalanceState;

// =============================================================================
// Colors
// =============================================================================

/// Color for positive amounts and success messages
pub const COLOR_POSITIVE: Color = Color::Green;

/// Color for negative amounts and errors
pub const COLOR_NEGATIVE: Color = Color::Red;

/// Color for zero amounts
pub const COLOR_ZERO: Color = Color::DarkGray;

/// Background color for selected/highlighted rows
pub const COLOR_SELECTION_BG: Color = Color::DarkGray;

/// Color for table headers
pub const COLOR_HEADER: Color = Color::Yellow;

/// Color for help text and secondary information
pub const COLOR_HELP_TEXT: Color = Color::Gray;

/// Color for titles and accent text
pub const COLOR_TITLE: Color = Color::Cyan;

/// Color for loading/status messages
pub const COLOR_LOADING: Color = Color::Yellow;

/// Border color for danger/warning popups (delete confirmations)
pub const COLOR_BORDER_DANGER: Color = Color::Red;

/// Border color for informational popups
pub const COLOR_BORDER_INFO: Color = Color::Blue;

/// Border color for accent/highlighted elements
pub const COLOR_BORDER_ACCENT: Color = Color::Cyan;

/// Color for input fields when focused
pub const COLOR_INPUT_FOCUSED: Color = Color::Yellow;

/// Background for form fields when focused
pub const COLOR_FORM_FIELD_BG: Color = Color::DarkGray;

/// Chart colors, assigned to categories in order and reused past the end
pub const CHART_PALETTE: [Color; 7] = [
    Color::Rgb(0x66, 0x7e, 0xea),
    Color::Rgb(0x76, 0x4b, 0xa2),
    Color::Rgb(0xf0, 0x93, 0xfb),
    Color::Rgb(0x4f, 0xac, 0xfe),
    Color::Rgb(0x00, 0xf2, 0xfe),
    Color::Rgb(0x43, 0xe9, 0x7b),
    Color::Rgb(0x38, 0xf9, 0xd7),
];

// =============================================================================
// Layout Constants
// =============================================================================

/// Standard margin around the whole app
pub const SCREEN_MARGIN: u16 = 1;

/// Height of the tab bar
pub const TAB_BAR_HEIGHT: u16 = 3;

/// Height of the help bar at the bottom
pub const HELP_BAR_HEIGHT: u16 = 3;

/// Height of the filter bar
pub const FILTER_BAR_HEIGHT: u16 = 3;

/// Standard column spacing for tables
pub const TABLE_COLUMN_SPACING: u16 = 2;

/// Height of summary cards
pub const SUMMARY_CARD_HEIGHT: u16 = 3;

// =============================================================================
// Style Functions
// =============================================================================

/// Style for selected/highlighted rows in tables and lists
pub fn selection_style() -> Style {
    Style::default()
        .bg(COLOR_SELECTION_BG)
        .add_modifier(Modifier::BOLD)
}

/// Style for table headers
pub fn header_style() -> Style {
    Style::default()
        .fg(COLOR_HEADER)
        .add_modifier(Modifier::BOLD)
}

/// Style for help bar text
pub fn help_text_style() -> Style {
    Style::default().fg(COLOR_HELP_TEXT)
}

/// Style for titles
pub fn title_style() -> Style {
    Style::default()
        .fg(COLOR_TITLE)
        .add_modifier(Modifier::BOLD)
}

/// Style for loading/status messages
pub fn loading_style() -> Style {
    Style::default().fg(COLOR_LOADING)
}

/// Style for form fields when focused
pub fn form_field_focused_style() -> Style {
    Style::default()
        .bg(COLOR_FORM_FIELD_BG)
        .add_modifier(Modifier::BOLD)
}

/// Style for form fields when not focused
pub fn form_field_style() -> Style {
    Style::default().fg(Color::White)
}

/// Style for danger/warning borders (delete confirmations)
pub fn danger_border_style() -> Style {
    Style::default()
        .fg(COLOR_BORDER_DANGER)
        .add_modifier(Modifier::BOLD)
}

/// Style for info borders
pub fn info_border_style() -> Style {
    Style::default()
        .fg(COLOR_BORDER_INFO)
        .add_modifier(Modifier::BOLD)
}

/// Style for accent borders
pub fn accent_border_style() -> Style {
    Style::default().fg(COLOR_BORDER_ACCENT)
}

// =============================================================================
// Value Color Helpers
// =============================================================================

/// Color of the `index`-th chart category
pub fn chart_color(index: usize) -> Color {
    CHART_PALETTE[index % CHART_PALETTE.len()]
}

/// Positive = green, negative = red, zero = gray
pub fn balance_color(state: BalanceState) -> Color {
    match state {
        BalanceState::Positive => COLOR_POSITIVE,
        BalanceState::Negative => COLOR_NEGATIVE,
        BalanceState::Neutral => COLOR_ZERO,
    }
}

pub fn notification_color(kind: NotificationKind) -> Color {
    match kind {
        NotificationKind::Success => COLOR_POSITIVE,
        NotificationKind::Error => COLOR_NEGATIVE,
    }
}

pub fn notification_border_style(kind: NotificationKind) -> Style {
    Style::default()
        .fg(notification_color(kind))
        .add_modifier(Modifier::BOLD)
}
