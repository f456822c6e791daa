use ratatui::{
    prelude::Rect,
    style::Modifier,
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

use crate::state::Tab;
use crate::ui::theme;

/// Numbered tab titles with the active one highlighted
pub fn render_tab_bar(f: &mut Frame, area: Rect, active: Tab) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|tab| Line::from(format!("{} {}", tab.index() + 1, tab.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Controle Financeiro ")
                .border_style(theme::accent_border_style()),
        )
        .select(active.index())
        .style(theme::help_text_style())
        .highlight_style(theme::title_style().add_modifier(Modifier::REVERSED));

    f.render_widget(tabs, area);
}
