pub mod components;
pub mod layouts;
pub mod screens;
pub mod theme;

use crate::labels::labels;
use crate::log_buffer::LogBuffer;
use crate::state::{AppState, InputMode, Tab};
use components::*;
use ratatui::Frame;

/// Pure render dispatcher - draws the frame, then overlays in priority order.
/// This function is read-only and never mutates state
pub fn render_app(f: &mut Frame, state: &AppState, log_buffer: &LogBuffer) {
    let show_summary = state.active_tab != Tab::Logs;
    let areas = layouts::app_layout(f.area(), show_summary);

    tab_bar::render_tab_bar(f, areas.tabs, state.active_tab);
    if show_summary {
        summary_cards::render_summary_cards(f, areas.summary, &state.summary);
    }
    filter_bar::render_filter_bar(
        f,
        areas.filter,
        &state.filter,
        state.input_mode == InputMode::Filter,
    );

    match state.active_tab {
        Tab::Purchases | Tab::Bills => {
            if let Some(list) = state.active_entries() {
                screens::entries_screen::render(f, areas.content, list);
            }
        }
        Tab::Reports => screens::reports_screen::render(f, areas.content, &state.reports),
        Tab::Logs => screens::logs_screen::render(f, areas.content, &state.logs, log_buffer),
    }

    help_bar::render_status_bar(
        f,
        areas.help,
        status_hints(state),
        state.notification.as_ref(),
    );

    // Overlays
    if let Some(form) = state.form.as_ref() {
        if state.input_mode == InputMode::EntryForm {
            entry_form::render_entry_form(f, form);
        }
    }

    if state.input_mode == InputMode::DeleteConfirmation {
        if let Some((kind, _)) = state.pending_delete {
            delete_confirmation::render_delete_confirmation(f, labels(kind).delete_prompt);
        }
    }

    if state.help_visible {
        help_popup::render_help_popup(f, state.active_tab);
    }

    if let Some(active) = state.notification.as_ref() {
        notification::render_notification(f, active);
    }
}

fn status_hints(state: &AppState) -> &'static [(&'static str, &'static str)] {
    match (state.input_mode, state.active_tab) {
        (InputMode::Filter, _) => &[
            ("Tab", "campo"),
            ("↑/↓", "categoria"),
            ("Enter", "aplicar"),
            ("Esc", "sair"),
        ],
        (_, Tab::Purchases | Tab::Bills) => &[
            ("j/k", "mover"),
            ("n", "novo"),
            ("e", "editar"),
            ("d", "excluir"),
            ("f", "filtros"),
            ("r", "recarregar"),
            ("1-4", "abas"),
            ("q", "sair"),
        ],
        (_, Tab::Reports) => &[
            ("f", "filtros"),
            ("x", "limpar filtros"),
            ("r", "recarregar"),
            ("1-4", "abas"),
            ("q", "sair"),
        ],
        (_, Tab::Logs) => &[
            ("j/k", "rolar"),
            ("PgUp/PgDn", "página"),
            ("g/G", "início/fim"),
            ("1-4", "abas"),
            ("q", "sair"),
        ],
    }
}
