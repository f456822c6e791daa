use ratatui::{
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::state::{FilterField, FilterForm};
use crate::ui::theme;

const FIELDS: [FilterField; 3] = [FilterField::Start, FilterField::End, FilterField::Category];

/// Render the three filter fields on one line. `editing` highlights the
/// focused field and shows a cursor.
pub fn render_filter_bar(f: &mut Frame, area: Rect, filter: &FilterForm, editing: bool) {
    let mut spans = Vec::new();
    for field in FIELDS {
        let focused = editing && filter.focused == field;
        let value = filter.value(field);

        spans.push(Span::styled(
            format!("{}: ", field.label()),
            theme::header_style(),
        ));

        let shown = match (value.is_empty(), field) {
            (true, FilterField::Category) => "Todas".to_string(),
            (true, _) => "-".to_string(),
            (false, _) => value.to_string(),
        };
        let style = if focused {
            Style::default()
                .fg(theme::COLOR_INPUT_FOCUSED)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            theme::form_field_style()
        };
        spans.push(Span::styled(shown, style));
        if focused {
            spans.push(Span::styled("▏", theme::loading_style()));
        }
        spans.push(Span::raw("   "));
    }

    let title = if editing {
        " Filtros (Tab: campo | Enter: aplicar | Esc: sair) "
    } else {
        " Filtros (f: editar | x: limpar) "
    };
    let border_style = if editing {
        theme::accent_border_style()
    } else {
        theme::help_text_style()
    };

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(border_style),
    );
    f.render_widget(bar, area);
}
