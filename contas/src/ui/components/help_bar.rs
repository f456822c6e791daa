//! Bottom status line: key hints, or the current notification.

use itertools::Itertools;
use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::state::Notification;
use crate::ui::theme;

/// Standard hint shown at the end of every help bar
pub const HELP_TEXT_DEFAULT: &str = "?: ajuda";

/// `key: action | key: action | ...`
pub fn hints_text(hints: &[(&str, &str)]) -> String {
    hints
        .iter()
        .map(|(key, action)| format!("{}: {}", key, action))
        .chain(std::iter::once(HELP_TEXT_DEFAULT.to_string()))
        .join(" | ")
}

pub fn render_help_bar(f: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text)
        .style(theme::help_text_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(help, area);
}

/// The help bar, replaced by the notification while one is open
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    hints: &[(&str, &str)],
    notification: Option<&Notification>,
) {
    match notification {
        Some(notification) => {
            let status = Paragraph::new(notification.message.as_str())
                .style(
                    Style::default()
                        .fg(theme::notification_color(notification.kind))
                        .add_modifier(Modifier::BOLD),
                )
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            f.render_widget(status, area);
        }
        None => render_help_bar(f, area, &hints_text(hints)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_end_with_help_key() {
        assert_eq!(
            hints_text(&[("j/k", "mover"), ("n", "novo")]),
            "j/k: mover | n: novo | ?: ajuda"
        );
        assert_eq!(hints_text(&[]), "?: ajuda");
    }
}
