use super::{Amount, EntryId, EntryKind, FilterCriteria};
use crate::macros::setter;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tower_api_client::{Method, Request, RequestData};

// Common

/// A purchase or a bill. Both ledgers use this shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entry {
    pub id: EntryId,
    #[serde(rename = "data")]
    pub date: NaiveDate,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "valor")]
    pub amount: Amount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Entry {
    pub fn to_new_entry(&self) -> NewEntry {
        NewEntry::new(
            self.date,
            self.category.clone(),
            self.description.clone(),
            self.amount,
        )
    }
}

/// Body of create and update requests
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewEntry {
    #[serde(rename = "data")]
    pub date: NaiveDate,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "valor")]
    pub amount: Amount,
}

impl NewEntry {
    pub fn new<C, D, A>(date: NaiveDate, category: C, description: D, amount: A) -> Self
    where
        C: Into<String>,
        D: Into<String>,
        A: Into<Amount>,
    {
        Self {
            date,
            category: category.into(),
            description: description.into(),
            amount: amount.into(),
        }
    }
}

// Requests

#[derive(Debug, Clone)]
pub struct ListEntries {
    kind: EntryKind,
    filter: FilterCriteria,
}

impl ListEntries {
    pub fn new(kind: EntryKind) -> Self {
        Self {
            kind,
            filter: FilterCriteria::default(),
        }
    }

    setter!(filter: FilterCriteria);
}

impl Request for ListEntries {
    type Data = FilterCriteria;
    type Response = Vec<Entry>;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/api/{}", self.kind.resource()).into()
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
pub struct CreateEntry {
    kind: EntryKind,
    entry: NewEntry,
}

impl CreateEntry {
    pub fn new(kind: EntryKind, entry: NewEntry) -> Self {
        Self { kind, entry }
    }
}

impl Request for CreateEntry {
    type Data = NewEntry;
    type Response = Entry;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/api/{}", self.kind.resource()).into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Json(&self.entry)
    }
}

#[derive(Debug, Clone)]
pub struct UpdateEntry {
    kind: EntryKind,
    id: EntryId,
    entry: NewEntry,
}

impl UpdateEntry {
    pub fn new(kind: EntryKind, id: EntryId, entry: NewEntry) -> Self {
        Self { kind, id, entry }
    }
}

impl Request for UpdateEntry {
    type Data = NewEntry;
    type Response = Entry;
    const METHOD: Method = Method::PUT;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/api/{}/{}", self.kind.resource(), self.id).into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Json(&self.entry)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteEntry {
    kind: EntryKind,
    id: EntryId,
}

impl DeleteEntry {
    pub fn new(kind: EntryKind, id: EntryId) -> Self {
        Self { kind, id }
    }
}

/// Delete acknowledgement, `{"message": "..."}`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DeleteResponse {
    #[serde(default)]
    pub message: Option<String>,
}

impl Request for DeleteEntry {
    type Data = ();
    type Response = DeleteResponse;
    const METHOD: Method = Method::DELETE;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/api/{}/{}", self.kind.resource(), self.id).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry() -> NewEntry {
        NewEntry::new(
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            "Alimentação",
            "Mercado",
            42.5,
        )
    }

    #[test]
    fn entry_deserializes_from_backend_record() {
        let json = r#"{
            "id": 7,
            "data": "2024-03-05",
            "categoria": "Transporte",
            "descricao": "Uber",
            "valor": 23.9,
            "created_at": "2024-03-05T10:11:12"
        }"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, EntryId::from(7));
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(entry.category, "Transporte");
        assert_eq!(entry.description, "Uber");
        assert_eq!(entry.amount, Amount::new(23.9));
        assert_eq!(entry.created_at.as_deref(), Some("2024-03-05T10:11:12"));
    }

    #[test]
    fn entry_without_created_at_is_accepted() {
        let json = r#"{"id": 1, "data": "2024-01-01", "categoria": "Outros", "descricao": "x", "valor": 10}"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.created_at, None);
        assert_eq!(entry.amount, Amount::new(10.0));
    }

    #[test]
    fn new_entry_body_uses_wire_names() {
        let body = serde_json::to_value(sample_entry()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "data": "2024-03-05",
                "categoria": "Alimentação",
                "descricao": "Mercado",
                "valor": 42.5
            })
        );
    }

    #[test]
    fn list_endpoint_per_kind() {
        assert_eq!(ListEntries::new(EntryKind::Purchase).endpoint(), "/api/gastos");
        assert_eq!(ListEntries::new(EntryKind::Bill).endpoint(), "/api/despesas");
        assert_eq!(ListEntries::METHOD, Method::GET);
    }

    #[test]
    fn list_without_filter_sends_no_query() {
        let request = ListEntries::new(EntryKind::Purchase);
        assert!(matches!(request.data(), RequestData::Empty));

        let request = request.filter(FilterCriteria::new().category("Saúde"));
        match request.data() {
            RequestData::Query(criteria) => {
                assert_eq!(criteria.category.as_deref(), Some("Saúde"))
            }
            _ => panic!("expected query data"),
        }
    }

    #[test]
    fn mutation_endpoints() {
        let id = EntryId::from(12);
        let create = CreateEntry::new(EntryKind::Bill, sample_entry());
        assert_eq!(create.endpoint(), "/api/despesas");
        assert_eq!(CreateEntry::METHOD, Method::POST);

        let update = UpdateEntry::new(EntryKind::Purchase, id, sample_entry());
        assert_eq!(update.endpoint(), "/api/gastos/12");
        assert_eq!(UpdateEntry::METHOD, Method::PUT);

        let delete = DeleteEntry::new(EntryKind::Bill, id);
        assert_eq!(delete.endpoint(), "/api/despesas/12");
        assert_eq!(DeleteEntry::METHOD, Method::DELETE);
    }

    #[test]
    fn delete_acknowledgement_decodes() {
        let json = r#"{"message": "Gasto deleted successfully"}"#;
        let response: DeleteResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.message.as_deref(), Some("Gasto deleted successfully"));

        let response: DeleteResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.message, None);
    }

    #[test]
    fn to_new_entry_copies_editable_fields() {
        let entry = Entry {
            id: EntryId::from(3),
            date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            category: "Moradia".to_string(),
            description: "Aluguel".to_string(),
            amount: Amount::new(1500.0),
            created_at: None,
        };
        let body = entry.to_new_entry();
        assert_eq!(body.date, entry.date);
        assert_eq!(body.category, "Moradia");
        assert_eq!(body.description, "Aluguel");
        assert_eq!(body.amount, Amount::new(1500.0));
    }
}
