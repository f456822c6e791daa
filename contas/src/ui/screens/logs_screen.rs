use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Row, Table},
};
use tracing::Level;

use crate::log_buffer::LogBuffer;
use crate::state::LogsState;
use crate::ui::{components::empty_state, theme};

pub fn render(f: &mut Frame, area: Rect, state: &LogsState, log_buffer: &LogBuffer) {
    if log_buffer.is_empty() {
        empty_state::render_empty_state(f, area, " Logs da Sessão ", "Nenhum log ainda", None);
        return;
    }

    // Newest at the bottom; the offset counts rows scrolled up from there
    let inner_height = area.height.saturating_sub(4) as usize; // Borders and header
    let (start, entries) = log_buffer.window(state.scroll_offset, inner_height);
    let end = start + entries.len();

    let rows: Vec<Row> = entries
        .iter()
        .map(|entry| {
            Row::new(vec![
                entry.timestamp.format("%H:%M:%S%.3f").to_string(),
                level_label(entry.level).to_string(),
                truncate_target(&entry.target, 25),
                entry.message.clone(),
            ])
            .style(level_style(entry.level))
        })
        .collect();

    let widths = [
        Constraint::Length(12), // Time
        Constraint::Length(5),  // Level
        Constraint::Length(25), // Target
        Constraint::Min(30),    // Message
    ];

    let scrolled = if state.scroll_offset > 0 {
        format!(", {} acima do fim", state.scroll_offset)
    } else {
        String::new()
    };

    let table = Table::new(rows, widths)
        .block(Block::default().borders(Borders::ALL).title(format!(
            " Logs [{}-{} de {}{}] ",
            start + 1,
            end,
            state.total_entries,
            scrolled
        )))
        .header(
            Row::new(vec!["Hora", "Nível", "Origem", "Mensagem"])
                .style(theme::header_style())
                .bottom_margin(1),
        );

    f.render_widget(table, area);
}

fn level_style(level: Level) -> Style {
    match level {
        Level::ERROR => Style::default()
            .fg(theme::COLOR_NEGATIVE)
            .add_modifier(Modifier::BOLD),
        Level::WARN => Style::default().fg(theme::COLOR_LOADING),
        Level::INFO => Style::default().fg(theme::COLOR_POSITIVE),
        Level::DEBUG => Style::default().fg(Color::Blue),
        Level::TRACE => Style::default().fg(theme::COLOR_ZERO),
    }
}

fn level_label(level: Level) -> &'static str {
    match level {
        Level::ERROR => "ERROR",
        Level::WARN => "WARN ",
        Level::INFO => "INFO ",
        Level::DEBUG => "DEBUG",
        Level::TRACE => "TRACE",
    }
}

fn truncate_target(target: &str, max_len: usize) -> String {
    if target.chars().count() <= max_len {
        target.to_string()
    } else {
        let tail: String = target
            .chars()
            .rev()
            .take(max_len - 3)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        format!("...{}", tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_targets_keep_their_tail() {
        assert_eq!(truncate_target("contas::app", 25), "contas::app");
        let truncated = truncate_target("contas::background::data_loader", 20);
        assert_eq!(truncated.chars().count(), 20);
        assert!(truncated.starts_with("..."));
        assert!(truncated.ends_with("data_loader"));
    }
}
