//! Totals for the current filter: purchases, bills and the balance.

use ratatui::{
    layout::Alignment,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::state::SummaryState;
use crate::ui::{layouts, theme};
use crate::utils::format::{balance_text, currency_text, BalanceState};

pub fn render_summary_cards(f: &mut Frame, area: Rect, state: &SummaryState) {
    let summary = state.summary.unwrap_or_default();
    let cards = layouts::columns(area, 3);

    render_card(
        f,
        cards[0],
        "Total Gastos",
        currency_text(summary.total_purchases),
        Style::default().fg(theme::COLOR_NEGATIVE),
    );
    render_card(
        f,
        cards[1],
        "Total Despesas",
        currency_text(summary.total_bills),
        Style::default().fg(theme::COLOR_NEGATIVE),
    );

    let balance_state = BalanceState::of(summary.balance);
    render_card(
        f,
        cards[2],
        "Saldo",
        balance_text(summary.balance),
        Style::default()
            .fg(theme::balance_color(balance_state))
            .add_modifier(Modifier::BOLD),
    );
}

fn render_card(f: &mut Frame, area: Rect, title: &str, value: String, style: Style) {
    let card = Paragraph::new(Line::from(Span::styled(value, style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(card, area);
}
