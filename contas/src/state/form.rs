use chrono::NaiveDate;
use contas_api::endpoints::{
    entries::{Entry, NewEntry},
    Amount, EntryId, EntryKind,
};

use crate::labels::labels;
use crate::state::RequestId;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Date,
    Category,
    Description,
    Amount,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Date,
        FormField::Category,
        FormField::Description,
        FormField::Amount,
    ];

    pub fn next(&self) -> Self {
        match self {
            Self::Date => Self::Category,
            Self::Category => Self::Description,
            Self::Description => Self::Amount,
            Self::Amount => Self::Date,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Date => Self::Amount,
            Self::Category => Self::Date,
            Self::Description => Self::Category,
            Self::Amount => Self::Description,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Date => "Data",
            Self::Category => "Categoria",
            Self::Description => "Descrição",
            Self::Amount => "Valor (R$)",
        }
    }
}

/// Create/edit form for one entry. `editing_id` decides between POST and PUT.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryFormState {
    pub kind: EntryKind,
    pub editing_id: Option<EntryId>,
    pub current_field: FormField,
    pub date: String,
    pub category: String,
    pub description: String,
    pub amount: String,
    pub validation_error: Option<String>,
    /// Save in flight for this form. Only its response may close the form.
    pub submission: Option<RequestId>,
}

impl EntryFormState {
    pub fn new(kind: EntryKind, today: NaiveDate) -> Self {
        Self {
            kind,
            editing_id: None,
            current_field: FormField::default(),
            date: today.format("%Y-%m-%d").to_string(),
            category: String::new(),
            description: String::new(),
            amount: String::new(),
            validation_error: None,
            submission: None,
        }
    }

    pub fn from_entry(kind: EntryKind, entry: &Entry) -> Self {
        Self {
            kind,
            editing_id: Some(entry.id),
            current_field: FormField::default(),
            date: entry.date.format("%Y-%m-%d").to_string(),
            category: entry.category.clone(),
            description: entry.description.clone(),
            amount: entry.amount.as_f64().to_string(),
            validation_error: None,
            submission: None,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn is_submitting(&self) -> bool {
        self.submission.is_some()
    }

    pub fn title(&self) -> &'static str {
        let labels = labels(self.kind);
        if self.is_edit_mode() {
            labels.edit_title
        } else {
            labels.create_title
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Date => &self.date,
            FormField::Category => &self.category,
            FormField::Description => &self.description,
            FormField::Amount => &self.amount,
        }
    }

    pub fn focused_value_mut(&mut self) -> &mut String {
        match self.current_field {
            FormField::Date => &mut self.date,
            FormField::Category => &mut self.category,
            FormField::Description => &mut self.description,
            FormField::Amount => &mut self.amount,
        }
    }

    pub fn cycle_category(&mut self, categories: &[String], forward: bool) {
        if let Some(next) = super::cycle_choice(&self.category, categories, forward) {
            self.category = next;
        }
    }

    /// Apply the input constraints and build the request body
    pub fn to_new_entry(&self) -> Result<NewEntry, String> {
        for field in FormField::ALL {
            if self.value(field).trim().is_empty() {
                return Err(format!("Preencha o campo {}", field.label()));
            }
        }

        let date = validate_date(&self.date)?;
        let amount = validate_amount(&self.amount)?;

        Ok(NewEntry::new(
            date,
            self.category.trim(),
            self.description.trim(),
            amount,
        ))
    }
}

/// Parse an ISO `YYYY-MM-DD` date
pub fn validate_date(input: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| "Data inválida (use AAAA-MM-DD)".to_string())
}

/// Parse a non-negative amount written with `,` or `.` as decimal separator
pub fn validate_amount(input: &str) -> Result<Amount, String> {
    let normalized = input.trim().replace(',', ".");
    let value: f64 = normalized
        .parse()
        .map_err(|_| "Valor inválido".to_string())?;

    if !value.is_finite() {
        return Err("Valor inválido".to_string());
    }
    if value < 0.0 {
        return Err("O valor não pode ser negativo".to_string());
    }

    Ok(Amount::new(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> EntryFormState {
        EntryFormState {
            category: "Transporte".to_string(),
            description: " Ônibus ".to_string(),
            amount: "4,40".to_string(),
            ..EntryFormState::new(EntryKind::Purchase, NaiveDate::from_ymd_opt(2024, 5, 2).unwrap())
        }
    }

    #[test]
    fn new_form_defaults_to_today() {
        let form = EntryFormState::new(EntryKind::Bill, NaiveDate::from_ymd_opt(2024, 5, 2).unwrap());
        assert_eq!(form.date, "2024-05-02");
        assert!(!form.is_edit_mode());
        assert_eq!(form.title(), "Adicionar Despesa");
        assert_eq!(form.current_field, FormField::Date);
    }

    #[test]
    fn builds_entry_from_valid_input() {
        let entry = filled_form().to_new_entry().unwrap();
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2024, 5, 2).unwrap());
        assert_eq!(entry.category, "Transporte");
        assert_eq!(entry.description, "Ônibus");
        assert_eq!(entry.amount, Amount::new(4.4));
    }

    #[test]
    fn every_field_is_required() {
        let mut form = filled_form();
        form.description = "   ".to_string();
        assert_eq!(
            form.to_new_entry().unwrap_err(),
            "Preencha o campo Descrição"
        );
    }

    #[test]
    fn rejects_bad_date_and_amount() {
        let mut form = filled_form();
        form.date = "02/05/2024".to_string();
        assert!(form.to_new_entry().unwrap_err().starts_with("Data inválida"));

        let mut form = filled_form();
        form.amount = "dez".to_string();
        assert_eq!(form.to_new_entry().unwrap_err(), "Valor inválido");

        let mut form = filled_form();
        form.amount = "-3".to_string();
        assert_eq!(
            form.to_new_entry().unwrap_err(),
            "O valor não pode ser negativo"
        );

        assert_eq!(validate_amount("inf").unwrap_err(), "Valor inválido");
    }

    #[test]
    fn accepts_dot_or_comma() {
        assert_eq!(validate_amount("12.5").unwrap(), Amount::new(12.5));
        assert_eq!(validate_amount("12,5").unwrap(), Amount::new(12.5));
        assert_eq!(validate_amount("0").unwrap(), Amount::new(0.0));
    }

    #[test]
    fn edit_form_prefills_entry() {
        let entry = Entry {
            id: EntryId::from(9),
            date: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
            category: "Moradia".to_string(),
            description: "Luz".to_string(),
            amount: Amount::new(120.5),
            created_at: None,
        };
        let form = EntryFormState::from_entry(EntryKind::Bill, &entry);
        assert_eq!(form.editing_id, Some(EntryId::from(9)));
        assert_eq!(form.date, "2024-01-20");
        assert_eq!(form.amount, "120.5");
        assert_eq!(form.title(), "Editar Despesa");
    }

    #[test]
    fn field_navigation_wraps() {
        assert_eq!(FormField::Amount.next(), FormField::Date);
        assert_eq!(FormField::Date.prev(), FormField::Amount);
    }
}
