pub mod categories;
pub mod entries;
pub mod reports;

use crate::macros::setter;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The two ledgers the backend keeps. They share one record shape and differ
/// only in their resource paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryKind {
    #[serde(rename = "gastos")]
    Purchase,
    #[serde(rename = "despesas")]
    Bill,
}

impl EntryKind {
    pub const ALL: [EntryKind; 2] = [EntryKind::Purchase, EntryKind::Bill];

    pub fn resource(&self) -> &'static str {
        match self {
            Self::Purchase => "gastos",
            Self::Bill => "despesas",
        }
    }

    pub fn report_resource(&self) -> &'static str {
        match self {
            Self::Purchase => "gastos-por-categoria",
            Self::Bill => "despesas-por-categoria",
        }
    }
}

impl Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.resource())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(i64);

impl From<i64> for EntryId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<EntryId> for i64 {
    fn from(value: EntryId) -> Self {
        value.0
    }
}

impl Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Monetary value in reais as the backend sends it
#[derive(Default, Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn as_f64(&self) -> f64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Whole cents, rounded half away from zero
    pub fn cents(&self) -> i64 {
        (self.0 * 100.0).round() as i64
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<Amount> for f64 {
    fn from(value: Amount) -> Self {
        value.0
    }
}

impl std::ops::Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Amount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, x| acc + x)
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Query parameters shared by the list and report endpoints.
///
/// Values are passed through verbatim; empty fields are left out of the query.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(rename = "data_inicio", skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(rename = "data_fim", skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(rename = "categoria", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    setter!(opt start: String);
    setter!(opt end: String);
    setter!(opt category: String);

    /// Build criteria from raw field values. Blank fields are absent, the
    /// others are sent exactly as typed.
    pub fn from_fields(start: &str, end: &str, category: &str) -> Self {
        let non_empty =
            |value: &str| (!value.trim().is_empty()).then(|| value.to_string());
        Self {
            start: non_empty(start),
            end: non_empty(end),
            category: non_empty(category),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none() && self.category.is_none()
    }

    /// Present fields in wire order: start, end, category
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("data_inicio", self.start.as_deref()),
            ("data_fim", self.end.as_deref()),
            ("categoria", self.category.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect()
    }

    /// URL-encoded query without the leading `?`
    pub fn query_string(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.pairs() {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}
