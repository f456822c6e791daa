use ratatui::{
    prelude::*,
    widgets::{List, ListItem},
    Frame,
};

use crate::state::Tab;
use crate::ui::{layouts, theme};

pub fn render_help_popup(f: &mut Frame, tab: Tab) {
    let help_items = get_help_items(tab);

    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::LARGE,
        " Ajuda (? ou Esc para fechar) ",
        theme::accent_border_style(),
    );

    let items: Vec<ListItem> = help_items
        .iter()
        .map(|(key, description)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:15}", key), theme::header_style()),
                Span::raw(*description),
            ]))
        })
        .collect();

    let list = List::new(items).style(Style::default().fg(Color::White));

    f.render_widget(list, inner);
}

fn get_help_items(tab: Tab) -> Vec<(&'static str, &'static str)> {
    let mut items = vec![];

    match tab {
        Tab::Purchases | Tab::Bills => {
            items.push(("↑/k", "Selecionar anterior"));
            items.push(("↓/j", "Selecionar próximo"));
            items.push(("g/Home", "Ir para o início"));
            items.push(("G/End", "Ir para o fim"));
            items.push(("n", "Novo lançamento"));
            items.push(("e/Enter", "Editar selecionado"));
            items.push(("d/Backspace", "Excluir selecionado"));
            items.push(("r", "Recarregar lista e resumo"));
        }
        Tab::Reports => {
            items.push(("r", "Recarregar gráficos e resumo"));
        }
        Tab::Logs => {
            items.push(("↑/k", "Rolar para cima (mais antigos)"));
            items.push(("↓/j", "Rolar para baixo (mais recentes)"));
            items.push(("Page Up", "Subir uma página"));
            items.push(("Page Down", "Descer uma página"));
            items.push(("g", "Ir para o mais antigo"));
            items.push(("G", "Ir para o mais recente"));
        }
    }

    items.push(("", ""));
    items.push(("--- Filtros ---", ""));
    items.push(("f", "Editar filtros"));
    items.push(("Tab/Shift-Tab", "Trocar de campo (no filtro)"));
    items.push(("↑/↓", "Escolher categoria (no filtro)"));
    items.push(("Enter", "Aplicar filtros"));
    items.push(("x", "Limpar filtros"));

    items.push(("", ""));
    items.push(("--- Global ---", ""));
    items.push(("1-4", "Gastos, Despesas, Relatórios, Logs"));
    items.push(("Tab/Shift-Tab", "Próxima/anterior aba"));
    items.push(("?", "Mostrar/ocultar ajuda"));
    items.push(("q", "Sair"));

    items
}
