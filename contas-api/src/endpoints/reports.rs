use super::{Amount, EntryKind, FilterCriteria};
use crate::macros::setter;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tower_api_client::{Request, RequestData};

// Common

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    #[serde(rename = "total_gastos")]
    pub total_purchases: Amount,
    #[serde(rename = "total_despesas")]
    pub total_bills: Amount,
    /// Income minus outgoings as computed by the backend; may be negative.
    #[serde(rename = "saldo")]
    pub balance: Amount,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryTotal {
    #[serde(rename = "categoria")]
    pub category: String,
    pub total: Amount,
}

// Requests

#[derive(Default, Debug, Clone)]
pub struct GetSummary {
    filter: FilterCriteria,
}

impl GetSummary {
    pub fn new() -> Self {
        Self::default()
    }

    setter!(filter: FilterCriteria);
}

impl Request for GetSummary {
    type Data = FilterCriteria;
    type Response = Summary;

    fn endpoint(&self) -> Cow<'_, str> {
        "/api/relatorios/resumo".into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        if self.filter.is_empty() {
            RequestData::Empty
        } else {
            RequestData::Query(&self.filter)
        }
    }
}

#[derive(Debug, Clone)]
pub struct ListCategoryTotals {
    kind: EntryKind,
    filter: FilterCriteria,
}

impl ListCategoryTotals {
    pub fn new(kind: EntryKind) -> Self {
        Self {
            kind,
            filter: FilterCriteria::default(),
        }
    }

    setter!(filter: FilterCriteria);
}

impl Request for ListCategoryTotals {
    type Data = FilterCriteria;
    type Response = Vec<CategoryTotal>;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/api/relatorios/{}", self.kind.report_resource()).into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        if self.filter.is_empty() {
            RequestData::Empty
        } else {
            RequestData::Query(&self.filter)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_deserializes_negative_balance() {
        let json = r#"{"total_gastos": 100.0, "total_despesas": 150.0, "saldo": -50.0}"#;
        let summary: Summary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.total_purchases, Amount::new(100.0));
        assert_eq!(summary.total_bills, Amount::new(150.0));
        assert!(summary.balance.is_negative());
    }

    #[test]
    fn category_totals_deserialize() {
        let json = r#"[{"categoria": "Saúde", "total": 80.5}, {"categoria": "Outros", "total": 3}]"#;
        let totals: Vec<CategoryTotal> = serde_json::from_str(json).unwrap();
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].category, "Saúde");
        assert_eq!(totals[1].total, Amount::new(3.0));
    }

    #[test]
    fn report_endpoints() {
        assert_eq!(GetSummary::new().endpoint(), "/api/relatorios/resumo");
        assert_eq!(
            ListCategoryTotals::new(EntryKind::Purchase).endpoint(),
            "/api/relatorios/gastos-por-categoria"
        );
        assert_eq!(
            ListCategoryTotals::new(EntryKind::Bill).endpoint(),
            "/api/relatorios/despesas-por-categoria"
        );
    }

    #[test]
    fn summary_forwards_filter() {
        let request = GetSummary::new().filter(FilterCriteria::new().start("2024-01-01"));
        match request.data() {
            RequestData::Query(criteria) => {
                assert_eq!(criteria.query_string(), "data_inicio=2024-01-01")
            }
            _ => panic!("expected query data"),
        }
    }
}
