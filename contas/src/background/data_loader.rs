use super::BackgroundJob;
use crate::events::DataEvent;
use crate::state::RequestId;
use contas_api::{
    endpoints::{entries::NewEntry, EntryId, EntryKind, FilterCriteria},
    Client, Request,
};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Runs [`BackgroundJob`]s against the backend and reports the outcome as
/// [`DataEvent`]s
#[derive(Clone)]
pub struct DataLoader {
    pub api_client: Arc<Client>,
    pub data_tx: mpsc::UnboundedSender<DataEvent>,
}

impl DataLoader {
    pub fn new(api_client: Arc<Client>, data_tx: mpsc::UnboundedSender<DataEvent>) -> Self {
        Self {
            api_client,
            data_tx,
        }
    }

    pub async fn run(&self, job: BackgroundJob) {
        match job {
            BackgroundJob::LoadEntries {
                kind,
                request_id,
                filter,
            } => self.load_entries(kind, request_id, filter).await,
            BackgroundJob::FetchEntryForEdit { kind, id, filter } => {
                self.fetch_entry_for_edit(kind, id, filter).await
            }
            BackgroundJob::CreateEntry {
                request_id,
                kind,
                entry,
            } => self.create_entry(request_id, kind, entry).await,
            BackgroundJob::UpdateEntry {
                request_id,
                kind,
                id,
                entry,
            } => self.update_entry(request_id, kind, id, entry).await,
            BackgroundJob::DeleteEntry { kind, id } => self.delete_entry(kind, id).await,
            BackgroundJob::LoadSummary { request_id, filter } => {
                self.load_summary(request_id, filter).await
            }
            BackgroundJob::LoadCategoryTotals {
                kind,
                request_id,
                filter,
            } => self.load_category_totals(kind, request_id, filter).await,
            BackgroundJob::LoadCategories => self.load_categories().await,
        }
    }

    fn emit(&self, event: DataEvent) {
        if self.data_tx.send(event).is_err() {
            tracing::debug!("Event loop is gone, dropping data event");
        }
    }

    pub async fn load_entries(&self, kind: EntryKind, request_id: RequestId, filter: FilterCriteria) {
        tracing::info!("Loading {} {} ({:?})", kind, request_id, filter.query_string());

        let req = Request::entries(kind).list(filter);
        match self.api_client.send(req).await {
            Ok(entries) => {
                tracing::info!("Loaded {} {} from API", entries.len(), kind);
                self.emit(DataEvent::EntriesLoaded {
                    kind,
                    request_id,
                    entries,
                });
            }
            Err(e) => {
                tracing::error!("Failed to load {}: {}", kind, e);
                self.emit(DataEvent::EntriesLoadFailed {
                    kind,
                    request_id,
                    error: e.to_string(),
                });
            }
        }
    }

    /// There is no single-entry endpoint, so the edit form is filled from
    /// the list under the current filter
    pub async fn fetch_entry_for_edit(&self, kind: EntryKind, id: EntryId, filter: FilterCriteria) {
        tracing::debug!("Looking up {} {} for editing", kind, id);

        let req = Request::entries(kind).list(filter);
        match self.api_client.send(req).await {
            Ok(entries) => self.emit(DataEvent::EditEntryLoaded { kind, id, entries }),
            Err(e) => self.emit(DataEvent::EditEntryLoadFailed {
                kind,
                id,
                error: e.to_string(),
            }),
        }
    }

    pub async fn create_entry(&self, request_id: RequestId, kind: EntryKind, entry: NewEntry) {
        tracing::info!("Creating {} in category {}", kind, entry.category);

        let req = Request::entries(kind).create(entry);
        match self.api_client.send(req).await {
            Ok(entry) => self.emit(DataEvent::EntryCreated {
                request_id,
                kind,
                entry,
            }),
            Err(e) => {
                tracing::error!("Failed to create {}: {}", kind, e);
                self.emit(DataEvent::EntrySaveFailed {
                    request_id,
                    kind,
                    message: e.backend_message().map(str::to_string),
                    error: e.to_string(),
                });
            }
        }
    }

    pub async fn update_entry(
        &self,
        request_id: RequestId,
        kind: EntryKind,
        id: EntryId,
        entry: NewEntry,
    ) {
        tracing::info!("Updating {} {}", kind, id);

        let req = Request::entries(kind).update(id, entry);
        match self.api_client.send(req).await {
            Ok(entry) => self.emit(DataEvent::EntryUpdated {
                request_id,
                kind,
                entry,
            }),
            Err(e) => {
                tracing::error!("Failed to update {} {}: {}", kind, id, e);
                self.emit(DataEvent::EntrySaveFailed {
                    request_id,
                    kind,
                    message: e.backend_message().map(str::to_string),
                    error: e.to_string(),
                });
            }
        }
    }

    pub async fn delete_entry(&self, kind: EntryKind, id: EntryId) {
        tracing::info!("Deleting {} {}", kind, id);

        let req = Request::entries(kind).delete(id);
        match self.api_client.send(req).await {
            Ok(_) => self.emit(DataEvent::EntryDeleted { kind, id }),
            Err(e) => {
                tracing::error!("Failed to delete {} {}: {}", kind, id, e);
                self.emit(DataEvent::EntryDeleteFailed {
                    kind,
                    id,
                    error: e.to_string(),
                });
            }
        }
    }

    pub async fn load_summary(&self, request_id: RequestId, filter: FilterCriteria) {
        tracing::debug!("Loading summary {}", request_id);

        let req = Request::reports().summary(filter);
        match self.api_client.send(req).await {
            Ok(summary) => self.emit(DataEvent::SummaryLoaded {
                request_id,
                summary,
            }),
            Err(e) => self.emit(DataEvent::SummaryLoadFailed {
                request_id,
                error: e.to_string(),
            }),
        }
    }

    pub async fn load_category_totals(
        &self,
        kind: EntryKind,
        request_id: RequestId,
        filter: FilterCriteria,
    ) {
        tracing::debug!("Loading {} report {}", kind, request_id);

        let req = Request::reports().by_category(kind, filter);
        match self.api_client.send(req).await {
            Ok(totals) => self.emit(DataEvent::CategoryTotalsLoaded {
                kind,
                request_id,
                totals,
            }),
            Err(e) => self.emit(DataEvent::CategoryTotalsLoadFailed {
                kind,
                request_id,
                error: e.to_string(),
            }),
        }
    }

    pub async fn load_categories(&self) {
        match self.api_client.send(Request::categories().list()).await {
            Ok(categories) => self.emit(DataEvent::CategoriesLoaded { categories }),
            Err(e) => self.emit(DataEvent::CategoriesLoadFailed {
                error: e.to_string(),
            }),
        }
    }
}
