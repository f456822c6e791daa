pub mod charts;
pub mod filter;
pub mod form;
pub mod reducer;
mod request;

pub use charts::{Chart, ChartSegment, ChartSlot, ChartStyle, ReportsState};
pub use filter::{FilterField, FilterForm};
pub use form::{EntryFormState, FormField};
pub use request::{RequestId, RequestTracker};

use crate::labels::{self, labels};
use crate::utils::format;
use contas_api::endpoints::{entries::Entry, reports::Summary, EntryId, EntryKind};
use ratatui::widgets::TableState;
use std::cell::RefCell;
use throbber_widgets_tui::ThrobberState;

/// Represents loading state separate from data state
#[derive(Default, Debug, Clone, PartialEq)]
pub enum LoadingState {
    #[default]
    NotStarted,
    Loading(ThrobberState),
    Loaded,
    Error(String),
}

impl LoadingState {
    pub fn loading() -> Self {
        Self::Loading(ThrobberState::default())
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading(_))
    }

    fn throbber_mut(&mut self) -> Option<&mut ThrobberState> {
        match self {
            Self::Loading(throbber_state) => Some(throbber_state),
            _ => None,
        }
    }
}

/// Which overlay, if any, receives key input
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Normal,
    Filter,
    EntryForm,
    DeleteConfirmation,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Purchases,
    Bills,
    Reports,
    Logs,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Purchases, Tab::Bills, Tab::Reports, Tab::Logs];

    pub fn index(&self) -> usize {
        match self {
            Self::Purchases => 0,
            Self::Bills => 1,
            Self::Reports => 2,
            Self::Logs => 3,
        }
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Purchases => labels(EntryKind::Purchase).tab_title,
            Self::Bills => labels(EntryKind::Bill).tab_title,
            Self::Reports => labels::REPORTS_TAB_TITLE,
            Self::Logs => labels::LOGS_TAB_TITLE,
        }
    }

    pub fn entry_kind(&self) -> Option<EntryKind> {
        match self {
            Self::Purchases => Some(EntryKind::Purchase),
            Self::Bills => Some(EntryKind::Bill),
            Self::Reports | Self::Logs => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

/// Display row of an entry table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    /// Single row spanning every column when there is nothing to list
    Placeholder(&'static str),
    Entry(EntryRow),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRow {
    pub id: EntryId,
    pub date: String,
    pub category: String,
    pub description: String,
    pub amount: String,
}

impl From<&Entry> for EntryRow {
    fn from(entry: &Entry) -> Self {
        Self {
            id: entry.id,
            date: format::display_date(entry.date),
            category: entry.category.clone(),
            description: entry.description.clone(),
            amount: format::currency_text(entry.amount),
        }
    }
}

/// Table of one ledger, in backend order
#[derive(Debug, Clone)]
pub struct EntryListState {
    pub kind: EntryKind,
    pub entries: Vec<Entry>,
    pub loading: LoadingState,
    pub tracker: RequestTracker,
    pub table_state: RefCell<TableState>,
}

impl EntryListState {
    pub fn new(kind: EntryKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
            loading: LoadingState::default(),
            tracker: RequestTracker::default(),
            table_state: RefCell::default(),
        }
    }

    pub fn rows(&self) -> Vec<TableRow> {
        if self.entries.is_empty() {
            return vec![TableRow::Placeholder(labels(self.kind).empty)];
        }
        self.entries
            .iter()
            .map(|entry| TableRow::Entry(EntryRow::from(entry)))
            .collect()
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        let selected = self.table_state.borrow().selected()?;
        self.entries.get(selected)
    }

    /// Replace the rows, keeping the selection inside the new bounds
    pub fn replace_entries(&mut self, entries: Vec<Entry>) {
        self.entries = entries;
        let mut table_state = self.table_state.borrow_mut();
        if self.entries.is_empty() {
            table_state.select(None);
        } else {
            let last = self.entries.len() - 1;
            let selected = table_state.selected().map_or(0, |i| i.min(last));
            table_state.select(Some(selected));
        }
    }
}

#[derive(Default, Debug, Clone)]
pub struct SummaryState {
    pub summary: Option<Summary>,
    pub loading: LoadingState,
    pub tracker: RequestTracker,
}

#[derive(Default, Debug, Clone)]
pub struct LogsState {
    pub scroll_offset: usize,
    pub total_entries: usize,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub active_tab: Tab,
    pub input_mode: InputMode,
    pub filter: FilterForm,

    pub purchases: EntryListState,
    pub bills: EntryListState,
    pub summary: SummaryState,
    pub reports: ReportsState,
    pub logs: LogsState,
    pub categories: Vec<String>,

    // Overlays
    pub form: Option<EntryFormState>,
    pub pending_delete: Option<(EntryKind, EntryId)>,
    pub notification: Option<Notification>,
    pub help_visible: bool,
    /// Issues ids for saves so late responses find their own form
    pub saves: RequestTracker,

    // System
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            active_tab: Tab::default(),
            input_mode: InputMode::default(),
            filter: FilterForm::default(),

            purchases: EntryListState::new(EntryKind::Purchase),
            bills: EntryListState::new(EntryKind::Bill),
            summary: SummaryState::default(),
            reports: ReportsState::default(),
            logs: LogsState::default(),
            categories: Vec::new(),

            form: None,
            pending_delete: None,
            notification: None,
            help_visible: false,
            saves: RequestTracker::default(),

            should_quit: false,
        }
    }

    pub fn with_filter(mut self, filter: FilterForm) -> Self {
        self.filter = filter;
        self
    }

    pub fn entries(&self, kind: EntryKind) -> &EntryListState {
        match kind {
            EntryKind::Purchase => &self.purchases,
            EntryKind::Bill => &self.bills,
        }
    }

    pub fn entries_mut(&mut self, kind: EntryKind) -> &mut EntryListState {
        match kind {
            EntryKind::Purchase => &mut self.purchases,
            EntryKind::Bill => &mut self.bills,
        }
    }

    /// Entry list of the active tab, if it shows one
    pub fn active_entries(&self) -> Option<&EntryListState> {
        self.active_tab.entry_kind().map(|kind| self.entries(kind))
    }

    pub fn active_entries_mut(&mut self) -> Option<&mut EntryListState> {
        let kind = self.active_tab.entry_kind()?;
        Some(self.entries_mut(kind))
    }

    pub fn notify(&mut self, notification: Notification) {
        if let Some(previous) = self.notification.replace(notification) {
            tracing::debug!("Replacing notification: {}", previous.message);
        }
    }

    /// Throbber of whichever visible panel is loading, for animation
    pub fn loading_state(&mut self) -> Option<&mut ThrobberState> {
        match self.active_tab {
            Tab::Purchases => self.purchases.loading.throbber_mut(),
            Tab::Bills => self.bills.loading.throbber_mut(),
            Tab::Reports => {
                if self.reports.purchases.loading.is_loading() {
                    self.reports.purchases.loading.throbber_mut()
                } else {
                    self.reports.bills.loading.throbber_mut()
                }
            }
            Tab::Logs => None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Next (or previous) value of `choices` after `current`, wrapping around.
/// Unknown values jump to the first (or last) choice.
pub(crate) fn cycle_choice(current: &str, choices: &[String], forward: bool) -> Option<String> {
    if choices.is_empty() {
        return None;
    }
    let len = choices.len();
    let index = match choices.iter().position(|c| c == current) {
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
        None if forward => 0,
        None => len - 1,
    };
    Some(choices[index].clone())
}

pub trait Scrollable {
    fn num_items(&self) -> usize;
    fn table_state(&self) -> &RefCell<TableState>;

    fn select_prev(&mut self) {
        let mut table_state = self.table_state().borrow_mut();
        if self.num_items() > 0 {
            if table_state.selected().unwrap_or(0) == 0 {
                table_state.select(Some(self.num_items() - 1));
            } else {
                table_state.scroll_up_by(1)
            }
        }
    }

    fn select_next(&mut self) {
        let num_items = self.num_items();
        let mut table_state = self.table_state().borrow_mut();
        if num_items > 0 {
            if table_state.selected().unwrap_or(num_items - 1) == num_items - 1 {
                table_state.select_first();
            } else {
                table_state.scroll_down_by(1)
            }
        }
    }

    fn select_first(&mut self) {
        if self.num_items() > 0 {
            self.table_state().borrow_mut().select(Some(0));
        }
    }

    fn select_last(&mut self) {
        let num_items = self.num_items();
        if num_items > 0 {
            self.table_state().borrow_mut().select(Some(num_items - 1));
        }
    }
}

impl Scrollable for EntryListState {
    fn num_items(&self) -> usize {
        self.entries.len()
    }

    fn table_state(&self) -> &RefCell<TableState> {
        &self.table_state
    }
}
