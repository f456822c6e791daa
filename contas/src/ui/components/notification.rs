use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::Modifier,
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::state::{Notification, NotificationKind};
use crate::ui::{layouts, theme};

/// Modal notification, dismissed by the next key press
pub fn render_notification(f: &mut Frame, notification: &Notification) {
    let title = match notification.kind {
        NotificationKind::Success => " Sucesso ",
        NotificationKind::Error => " Erro ",
    };
    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::SMALL,
        title,
        theme::notification_border_style(notification.kind),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let message = Paragraph::new(notification.message.as_str())
        .style(
            ratatui::style::Style::default()
                .fg(theme::notification_color(notification.kind))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(message, chunks[0]);

    f.render_widget(
        Paragraph::new("Pressione qualquer tecla para continuar")
            .style(theme::help_text_style())
            .alignment(Alignment::Center),
        chunks[1],
    );
}
