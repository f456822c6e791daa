use crate::state::{RequestId, Tab};
use contas_api::endpoints::{
    entries::Entry,
    reports::{CategoryTotal, Summary},
    EntryId, EntryKind,
};

/// Commands to execute (user actions → state changes and background tasks)
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    SelectNext,
    SelectPrevious,
    NavigateToTop,
    NavigateToBottom,

    // Tabs
    ActivateTab(Tab),

    // Data loading
    LoadEntries {
        kind: EntryKind,
    },
    LoadSummary,
    LoadReports,
    LoadCategories,
    /// Reload whatever the active tab shows
    Refresh,

    // Filter bar
    EnterFilterMode,
    ExitFilterMode,
    NavigateFilterField {
        forward: bool,
    },
    AppendFilterChar(char),
    DeleteFilterChar,
    CycleFilterCategory {
        forward: bool,
    },
    ApplyFilters,
    ClearFilters,

    // Entry form
    OpenCreateForm {
        kind: EntryKind,
    },
    InitiateEdit {
        kind: EntryKind,
        id: EntryId,
    },
    NavigateFormField {
        forward: bool,
    },
    AppendFormFieldChar(char),
    DeleteFormFieldChar,
    ClearFormField,
    CycleFormCategory {
        forward: bool,
    },
    SubmitForm,
    CancelForm,

    // Deletion
    InitiateDelete {
        kind: EntryKind,
        id: EntryId,
    },
    ConfirmDelete,
    CancelDelete,

    // UI
    DismissNotification,
    ToggleHelp,

    // Log tab
    ScrollLogsUp,
    ScrollLogsDown,
    ScrollLogsPageUp,
    ScrollLogsPageDown,
    ScrollLogsToTop,
    ScrollLogsToBottom,

    // System
    Quit,
}

/// Events from background tasks (responses to commands)
#[derive(Debug, Clone)]
pub enum DataEvent {
    // Entry lists
    EntriesLoaded {
        kind: EntryKind,
        request_id: RequestId,
        entries: Vec<Entry>,
    },
    EntriesLoadFailed {
        kind: EntryKind,
        request_id: RequestId,
        error: String,
    },

    // Edit form lookup
    EditEntryLoaded {
        kind: EntryKind,
        id: EntryId,
        entries: Vec<Entry>,
    },
    EditEntryLoadFailed {
        kind: EntryKind,
        id: EntryId,
        error: String,
    },

    // Mutations
    EntryCreated {
        request_id: RequestId,
        kind: EntryKind,
        entry: Entry,
    },
    EntryUpdated {
        request_id: RequestId,
        kind: EntryKind,
        entry: Entry,
    },
    EntrySaveFailed {
        request_id: RequestId,
        kind: EntryKind,
        /// `{"error": ...}` text from the backend, when it sent one
        message: Option<String>,
        error: String,
    },
    EntryDeleted {
        kind: EntryKind,
        id: EntryId,
    },
    EntryDeleteFailed {
        kind: EntryKind,
        id: EntryId,
        error: String,
    },

    // Summary
    SummaryLoaded {
        request_id: RequestId,
        summary: Summary,
    },
    SummaryLoadFailed {
        request_id: RequestId,
        error: String,
    },

    // Reports
    CategoryTotalsLoaded {
        kind: EntryKind,
        request_id: RequestId,
        totals: Vec<CategoryTotal>,
    },
    CategoryTotalsLoadFailed {
        kind: EntryKind,
        request_id: RequestId,
        error: String,
    },

    // Category names
    CategoriesLoaded {
        categories: Vec<String>,
    },
    CategoriesLoadFailed {
        error: String,
    },
}
