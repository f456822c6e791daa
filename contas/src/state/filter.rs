use chrono::{Days, NaiveDate};
use contas_api::endpoints::FilterCriteria;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    #[default]
    Start,
    End,
    Category,
}

impl FilterField {
    pub fn next(&self) -> Self {
        match self {
            Self::Start => Self::End,
            Self::End => Self::Category,
            Self::Category => Self::Start,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Start => Self::Category,
            Self::End => Self::Start,
            Self::Category => Self::End,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Start => "Data Início",
            Self::End => "Data Fim",
            Self::Category => "Categoria",
        }
    }
}

/// The filter bar's text fields. Requests read criteria from here at the
/// moment they are issued.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct FilterForm {
    pub start: String,
    pub end: String,
    pub category: String,
    pub focused: FilterField,
}

impl FilterForm {
    /// Pre-fill the range ending `today` and starting `days` before it.
    /// `days == 0` leaves the form empty.
    pub fn with_default_range(days: u32, today: NaiveDate) -> Self {
        if days == 0 {
            return Self::default();
        }
        let start = today
            .checked_sub_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MIN);
        Self {
            start: start.format("%Y-%m-%d").to_string(),
            end: today.format("%Y-%m-%d").to_string(),
            ..Default::default()
        }
    }

    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::from_fields(&self.start, &self.end, &self.category)
    }

    pub fn query_string(&self) -> String {
        self.criteria().query_string()
    }

    pub fn clear(&mut self) {
        self.start.clear();
        self.end.clear();
        self.category.clear();
        self.focused = FilterField::default();
    }

    pub fn is_empty(&self) -> bool {
        self.criteria().is_empty()
    }

    pub fn value(&self, field: FilterField) -> &str {
        match field {
            FilterField::Start => &self.start,
            FilterField::End => &self.end,
            FilterField::Category => &self.category,
        }
    }

    pub fn focused_value_mut(&mut self) -> &mut String {
        match self.focused {
            FilterField::Start => &mut self.start,
            FilterField::End => &mut self.end,
            FilterField::Category => &mut self.category,
        }
    }

    /// Step the category through "all categories" (empty) and the known names
    pub fn cycle_category(&mut self, categories: &[String], forward: bool) {
        let mut choices = Vec::with_capacity(categories.len() + 1);
        choices.push(String::new());
        choices.extend(categories.iter().cloned());
        if let Some(next) = super::cycle_choice(&self.category, &choices, forward) {
            self.category = next;
        }
    }
}
