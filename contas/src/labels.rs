//! User-facing wording for each ledger.
//!
//! Purchases ("gasto") are masculine and bills ("despesa") feminine in
//! Portuguese, so the two sets of messages differ beyond the noun.

use contas_api::endpoints::EntryKind;

#[derive(Debug)]
pub struct EntryLabels {
    pub tab_title: &'static str,
    pub table_title: &'static str,
    pub empty: &'static str,
    pub create_title: &'static str,
    pub edit_title: &'static str,
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
    pub load_failed: &'static str,
    pub edit_load_failed: &'static str,
    pub edit_not_found: &'static str,
    pub save_failed: &'static str,
    pub delete_failed: &'static str,
    pub delete_prompt: &'static str,
}

static PURCHASE_LABELS: EntryLabels = EntryLabels {
    tab_title: "Gastos",
    table_title: "Gastos",
    empty: "Nenhum gasto registrado",
    create_title: "Adicionar Gasto",
    edit_title: "Editar Gasto",
    created: "Gasto adicionado com sucesso!",
    updated: "Gasto atualizado com sucesso!",
    deleted: "Gasto excluído com sucesso!",
    load_failed: "Erro ao carregar gastos",
    edit_load_failed: "Erro ao carregar gasto para edição",
    edit_not_found: "Gasto não encontrado no filtro atual",
    save_failed: "Erro ao salvar gasto",
    delete_failed: "Erro ao excluir gasto",
    delete_prompt: "Tem certeza que deseja excluir este gasto?",
};

static BILL_LABELS: EntryLabels = EntryLabels {
    tab_title: "Despesas",
    table_title: "Despesas",
    empty: "Nenhuma despesa registrada",
    create_title: "Adicionar Despesa",
    edit_title: "Editar Despesa",
    created: "Despesa adicionada com sucesso!",
    updated: "Despesa atualizada com sucesso!",
    deleted: "Despesa excluída com sucesso!",
    load_failed: "Erro ao carregar despesas",
    edit_load_failed: "Erro ao carregar despesa para edição",
    edit_not_found: "Despesa não encontrada no filtro atual",
    save_failed: "Erro ao salvar despesa",
    delete_failed: "Erro ao excluir despesa",
    delete_prompt: "Tem certeza que deseja excluir esta despesa?",
};

pub fn labels(kind: EntryKind) -> &'static EntryLabels {
    match kind {
        EntryKind::Purchase => &PURCHASE_LABELS,
        EntryKind::Bill => &BILL_LABELS,
    }
}

pub const REPORTS_TAB_TITLE: &str = "Relatórios";
pub const LOGS_TAB_TITLE: &str = "Logs";
pub const REPORTS_LOAD_FAILED: &str = "Erro ao carregar relatórios";
pub const PURCHASES_CHART_TITLE: &str = "Gastos por Categoria";
pub const BILLS_CHART_TITLE: &str = "Despesas por Categoria";
pub const NO_CHART_DATA: &str = "Sem dados no período";
