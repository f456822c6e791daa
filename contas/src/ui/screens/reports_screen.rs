//! Category reports: proportion chart for purchases, bar chart for bills.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
};

use crate::labels;
use crate::state::{Chart, ChartSlot, ChartStyle, LoadingState, ReportsState};
use crate::ui::{components::empty_state, layouts, theme};
use crate::utils::format::currency_text;

pub fn render(f: &mut Frame, area: Rect, reports: &ReportsState) {
    let panels = layouts::columns(area, 2);
    render_slot(f, panels[0], labels::PURCHASES_CHART_TITLE, &reports.purchases);
    render_slot(f, panels[1], labels::BILLS_CHART_TITLE, &reports.bills);
}

fn render_slot(f: &mut Frame, area: Rect, title: &str, slot: &ChartSlot) {
    let title = format!(" {} ", title);
    match (slot.chart(), &slot.loading) {
        (Some(chart), _) if !chart.is_empty() => match chart.style {
            ChartStyle::Proportion => render_proportion(f, area, &title, chart),
            ChartStyle::Bars => render_bars(f, area, &title, chart),
        },
        (_, LoadingState::Loading(_)) => {
            empty_state::render_loading_state(f, area, &title, "Carregando...")
        }
        (None, LoadingState::Error(_)) => empty_state::render_empty_state(
            f,
            area,
            &title,
            labels::REPORTS_LOAD_FAILED,
            Some("r: tentar novamente"),
        ),
        _ => empty_state::render_empty_state(f, area, &title, labels::NO_CHART_DATA, None),
    }
}

/// A stacked bar across the panel followed by a legend with value and share
fn render_proportion(f: &mut Frame, area: Rect, title: &str, chart: &Chart) {
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Bar
            Constraint::Length(1),
            Constraint::Min(1), // Legend
        ])
        .split(inner);

    let shares: Vec<f64> = chart.segments.iter().map(|s| s.share).collect();
    let widths = proportion_widths(&shares, chunks[0].width);
    let bar: Line = chart
        .segments
        .iter()
        .zip(widths)
        .map(|(segment, width)| {
            Span::styled(
                "█".repeat(width as usize),
                Style::default().fg(segment.color),
            )
        })
        .collect::<Vec<_>>()
        .into();
    f.render_widget(Paragraph::new(vec![bar.clone(), bar]), chunks[0]);

    let legend: Vec<Line> = chart
        .segments
        .iter()
        .map(|segment| {
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(segment.color)),
                Span::raw(format!("{:18}", segment.label)),
                Span::styled(
                    format!("{:>14}", currency_text(segment.value)),
                    theme::form_field_style(),
                ),
                Span::styled(
                    format!("  {:>6}", share_text(segment.share)),
                    theme::help_text_style(),
                ),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(legend), chunks[2]);
}

/// One bar per category; heights in cents, labels in `R$`
fn render_bars(f: &mut Frame, area: Rect, title: &str, chart: &Chart) {
    let bars: Vec<Bar> = chart
        .segments
        .iter()
        .map(|segment| {
            Bar::default()
                .value(segment.value.cents().max(0) as u64)
                .label(Line::from(segment.label.clone()))
                .text_value(currency_text(segment.value))
                .style(Style::default().fg(segment.color))
                .value_style(Style::default().fg(Color::Black).bg(segment.color))
        })
        .collect();

    let inner_width = area.width.saturating_sub(2);
    let count = bars.len().max(1) as u16;
    let bar_gap = 1;
    let bar_width = (inner_width.saturating_sub(bar_gap * (count - 1)) / count).clamp(3, 16);

    let bar_chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .label_style(theme::help_text_style());

    f.render_widget(bar_chart, area);
}

/// Split `total` cells among shares by rounding cumulative boundaries, so
/// the widths always add up to the full bar when the shares sum to one
pub fn proportion_widths(shares: &[f64], total: u16) -> Vec<u16> {
    let mut widths = Vec::with_capacity(shares.len());
    let mut cumulative = 0.0;
    let mut previous: u16 = 0;
    for share in shares {
        cumulative += share;
        let boundary = ((cumulative * f64::from(total)).round() as u16).min(total);
        widths.push(boundary.saturating_sub(previous));
        previous = previous.max(boundary);
    }
    widths
}

/// `0.125` → `12,5%`
fn share_text(share: f64) -> String {
    format!("{:.1}%", share * 100.0).replace('.', ",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_fill_the_bar() {
        let widths = proportion_widths(&[0.5, 0.3, 0.2], 40);
        assert_eq!(widths, vec![20, 12, 8]);

        let thirds = proportion_widths(&[1.0 / 3.0; 3], 10);
        assert_eq!(thirds.iter().sum::<u16>(), 10);
    }

    #[test]
    fn zero_shares_take_no_space() {
        assert_eq!(proportion_widths(&[0.0, 0.0], 30), vec![0, 0]);
    }

    #[test]
    fn share_uses_decimal_comma() {
        assert_eq!(share_text(0.125), "12,5%");
        assert_eq!(share_text(1.0), "100,0%");
    }
}
