use ratatui::{
    layout::{Constraint, Direction, Layout},
    prelude::*,
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::labels::labels;
use crate::state::{EntryListState, TableRow};
use crate::ui::{components::screen_title, theme};

const HEADER: [&str; 4] = ["Data", "Categoria", "Descrição", "Valor"];

pub fn render(f: &mut Frame, area: Rect, list: &EntryListState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    let labels = labels(list.kind);
    let title = format!("{} ({})", labels.table_title, list.entries.len());
    screen_title::render_screen_title(f, chunks[0], &title, &list.loading);

    render_table(f, chunks[1], list);
}

fn render_table(f: &mut Frame, area: Rect, list: &EntryListState) {
    let rows = list.rows();
    let block = Block::default().borders(Borders::ALL);

    if let [TableRow::Placeholder(message)] = rows.as_slice() {
        f.render_widget(placeholder_table(message, block), area);
        return;
    }

    let rows: Vec<Row> = rows
        .into_iter()
        .filter_map(|row| match row {
            TableRow::Entry(entry) => Some(Row::new(vec![
                Cell::from(entry.date),
                Cell::from(entry.category),
                Cell::from(entry.description),
                Cell::from(Line::from(entry.amount).alignment(Alignment::Right)),
            ])),
            TableRow::Placeholder(_) => None,
        })
        .collect();

    let widths = [
        Constraint::Length(10), // Data
        Constraint::Length(18), // Categoria
        Constraint::Min(20),    // Descrição
        Constraint::Length(14), // Valor
    ];

    let table = Table::new(rows, widths)
        .block(block)
        .header(
            Row::new(HEADER.to_vec())
                .style(theme::header_style())
                .bottom_margin(1),
        )
        .column_spacing(theme::TABLE_COLUMN_SPACING)
        .row_highlight_style(theme::selection_style())
        .highlight_symbol("> ");

    f.render_stateful_widget(table, area, &mut list.table_state.borrow_mut());
}

/// One centered cell spanning the table, without column headers
fn placeholder_table<'a>(message: &'a str, block: Block<'a>) -> Table<'a> {
    let row = Row::new(vec![Cell::from(
        Line::from(message).alignment(Alignment::Center),
    )])
    .style(theme::help_text_style());
    Table::new(vec![row], [Constraint::Percentage(100)]).block(block)
}
