pub mod data_loader;

use crate::state::RequestId;
use contas_api::endpoints::{entries::NewEntry, EntryId, EntryKind, FilterCriteria};
use std::collections::HashMap;
use std::future::Future;
use tokio::task::JoinHandle;

/// Work a command asks the background to do. Carries everything the request
/// needs, so filter criteria are fixed at the moment the command ran.
#[derive(Debug, Clone, PartialEq)]
pub enum BackgroundJob {
    LoadEntries {
        kind: EntryKind,
        request_id: RequestId,
        filter: FilterCriteria,
    },
    /// Re-fetch the list to find the row being edited
    FetchEntryForEdit {
        kind: EntryKind,
        id: EntryId,
        filter: FilterCriteria,
    },
    CreateEntry {
        request_id: RequestId,
        kind: EntryKind,
        entry: NewEntry,
    },
    UpdateEntry {
        request_id: RequestId,
        kind: EntryKind,
        id: EntryId,
        entry: NewEntry,
    },
    DeleteEntry {
        kind: EntryKind,
        id: EntryId,
    },
    LoadSummary {
        request_id: RequestId,
        filter: FilterCriteria,
    },
    LoadCategoryTotals {
        kind: EntryKind,
        request_id: RequestId,
        filter: FilterCriteria,
    },
    LoadCategories,
}

impl BackgroundJob {
    /// Reads sharing a key supersede each other. Mutations have no key and
    /// always run to completion.
    pub fn task_key(&self) -> Option<String> {
        match self {
            Self::LoadEntries { kind, .. } => Some(format!("load_entries_{}", kind)),
            Self::FetchEntryForEdit { kind, .. } => Some(format!("edit_lookup_{}", kind)),
            Self::LoadSummary { .. } => Some("load_summary".to_string()),
            Self::LoadCategoryTotals { kind, .. } => Some(format!("load_report_{}", kind)),
            Self::LoadCategories => Some("load_categories".to_string()),
            Self::CreateEntry { .. } | Self::UpdateEntry { .. } | Self::DeleteEntry { .. } => None,
        }
    }
}

/// Manages background tasks for data loading
/// Tracks running tasks and provides cancellation support
pub struct BackgroundTaskManager {
    tasks: HashMap<String, JoinHandle<()>>,
    mutations: usize,
}

impl BackgroundTaskManager {
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
            mutations: 0,
        }
    }

    /// Spawn a background data loading task
    /// If a task with the same ID already exists, it will be cancelled first
    pub fn spawn_load_task<F>(&mut self, task_id: String, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        // Its response would be discarded as stale anyway
        if let Some(handle) = self.tasks.remove(&task_id) {
            handle.abort();
        }

        let handle = tokio::spawn(future);
        self.tasks.insert(task_id, handle);
    }

    /// Spawn a write. Never replaces a running task.
    pub fn spawn_mutation_task<F>(&mut self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.tasks.retain(|_, handle| !handle.is_finished());

        self.mutations += 1;
        let task_id = format!("mutation_{}", self.mutations);
        let handle = tokio::spawn(future);
        self.tasks.insert(task_id, handle);
    }

    /// Cancel all running tasks (used on shutdown)
    pub fn cancel_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

impl Default for BackgroundTaskManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for BackgroundTaskManager {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
