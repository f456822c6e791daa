//! Create/edit popup for one entry.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::state::{EntryFormState, FormField};
use crate::ui::{layouts, theme};

pub fn render_entry_form(f: &mut Frame, form: &EntryFormState) {
    let title = format!(" {} ", form.title());
    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::MEDIUM,
        &title,
        theme::info_border_style(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(FormField::ALL.len() as u16 * 2), // Fields
            Constraint::Length(1),                                // Error / status
            Constraint::Min(0),
            Constraint::Length(1), // Instructions
        ])
        .split(inner);

    let mut lines = Vec::new();
    for field in FormField::ALL {
        let focused = form.current_field == field;
        let mut value = form.value(field).to_string();
        if focused {
            value.push('▏');
        }
        let value_style = if focused {
            theme::form_field_focused_style()
        } else {
            theme::form_field_style()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:12}", field.label()), theme::header_style()),
            Span::styled(value, value_style),
        ]));
        lines.push(Line::from(""));
    }
    f.render_widget(Paragraph::new(lines), chunks[0]);

    let status = if form.is_submitting() {
        Some(Span::styled("Salvando...", theme::loading_style()))
    } else {
        form.validation_error
            .as_deref()
            .map(|error| Span::styled(error, Style::default().fg(theme::COLOR_NEGATIVE)))
    };
    if let Some(status) = status {
        f.render_widget(Paragraph::new(Line::from(status)), chunks[1]);
    }

    let instructions = if form.current_field == FormField::Category {
        "↑/↓: categoria | Tab: próximo campo | Enter: salvar | Esc: cancelar"
    } else {
        "Tab: próximo campo | Ctrl+u: limpar | Enter: salvar | Esc: cancelar"
    };
    f.render_widget(
        Paragraph::new(instructions).style(theme::help_text_style()),
        chunks[3],
    );
}
