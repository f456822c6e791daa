//! Display formatting for dates and Brazilian real amounts.

use chrono::NaiveDate;
use contas_api::endpoints::Amount;

/// Two fraction digits, comma decimal separator, no grouping: `1234.5` → `1234,50`
pub fn format_currency(value: f64) -> String {
    let formatted = format!("{:.2}", value).replace('.', ",");
    // Values that round to zero keep no sign
    if formatted == "-0,00" {
        "0,00".to_string()
    } else {
        formatted
    }
}

/// `R$ ` prefixed currency text
pub fn currency_text(amount: Amount) -> String {
    format!("R$ {}", format_currency(amount.as_f64()))
}

/// ISO `YYYY-MM-DD` → `DD/MM/YYYY`. Input that is not an ISO date is returned as is.
pub fn format_date(iso: &str) -> String {
    match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(date) => display_date(date),
        Err(_) => iso.to_string(),
    }
}

pub fn display_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceState {
    Positive,
    Negative,
    Neutral,
}

impl BalanceState {
    pub fn of(balance: Amount) -> Self {
        if balance.is_positive() {
            Self::Positive
        } else if balance.is_negative() {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

/// Balance magnitude as currency text; the sign is carried by [`BalanceState`]
pub fn balance_text(balance: Amount) -> String {
    currency_text(balance.abs())
}
