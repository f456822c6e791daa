use super::{
    AppState, Chart, ChartStyle, EntryFormState, InputMode, LoadingState, Notification, RequestId,
};
use crate::events::{AppCommand, DataEvent};
use crate::labels::{self, labels};
use contas_api::endpoints::EntryKind;

/// Pure state transition for data events.
///
/// Returns the follow-up commands the event calls for (reloads after a
/// mutation); the caller executes them like user commands.
pub fn reduce_data_event(state: &mut AppState, event: DataEvent) -> Vec<AppCommand> {
    match event {
        DataEvent::EntriesLoaded {
            kind,
            request_id,
            entries,
        } => {
            let list = state.entries_mut(kind);
            if !list.tracker.is_current(request_id) {
                tracing::debug!("Discarding stale {} list response {}", kind, request_id);
                return Vec::new();
            }
            tracing::debug!("Showing {} {} entries", entries.len(), kind);
            list.replace_entries(entries);
            list.loading = LoadingState::Loaded;
        }

        DataEvent::EntriesLoadFailed {
            kind,
            request_id,
            error,
        } => {
            let list = state.entries_mut(kind);
            if !list.tracker.is_current(request_id) {
                tracing::debug!("Discarding stale {} list failure {}", kind, request_id);
                return Vec::new();
            }
            // Previous rows stay on screen
            list.loading = LoadingState::Error(error);
            state.notify(Notification::error(labels(kind).load_failed));
        }

        DataEvent::EditEntryLoaded { kind, id, entries } => {
            if state.input_mode != InputMode::Normal {
                tracing::debug!("Ignoring edit lookup for {} {}, another overlay is open", kind, id);
                return Vec::new();
            }
            match entries.iter().find(|entry| entry.id == id) {
                Some(entry) => {
                    state.form = Some(EntryFormState::from_entry(kind, entry));
                    state.input_mode = InputMode::EntryForm;
                }
                None => {
                    tracing::warn!("{} {} is not listed under the current filter", kind, id);
                    state.notify(Notification::error(labels(kind).edit_not_found));
                }
            }
        }

        DataEvent::EditEntryLoadFailed { kind, id, error } => {
            tracing::error!("Failed to load {} {} for editing: {}", kind, id, error);
            state.notify(Notification::error(labels(kind).edit_load_failed));
        }

        DataEvent::EntryCreated {
            request_id,
            kind,
            entry,
        } => {
            tracing::info!("Created {} {}", kind, entry.id);
            close_form(state, request_id);
            state.notify(Notification::success(labels(kind).created));
            return reload_after_mutation(kind);
        }

        DataEvent::EntryUpdated {
            request_id,
            kind,
            entry,
        } => {
            tracing::info!("Updated {} {}", kind, entry.id);
            close_form(state, request_id);
            state.notify(Notification::success(labels(kind).updated));
            return reload_after_mutation(kind);
        }

        DataEvent::EntrySaveFailed {
            request_id,
            kind,
            message,
            error,
        } => {
            tracing::error!("Failed to save {}: {}", kind, error);
            // Form stays open with the user's input
            let Some(form) = state
                .form
                .as_mut()
                .filter(|form| form.submission == Some(request_id))
            else {
                tracing::debug!("Save {} failed after its form was closed", request_id);
                return Vec::new();
            };
            form.submission = None;
            let text = match message {
                Some(message) => format!("Erro: {}", message),
                None => labels(kind).save_failed.to_string(),
            };
            state.notify(Notification::error(text));
        }

        DataEvent::EntryDeleted { kind, id } => {
            tracing::info!("Deleted {} {}", kind, id);
            state.notify(Notification::success(labels(kind).deleted));
            return reload_after_mutation(kind);
        }

        DataEvent::EntryDeleteFailed { kind, id, error } => {
            tracing::error!("Failed to delete {} {}: {}", kind, id, error);
            state.notify(Notification::error(labels(kind).delete_failed));
        }

        DataEvent::SummaryLoaded {
            request_id,
            summary,
        } => {
            if !state.summary.tracker.is_current(request_id) {
                tracing::debug!("Discarding stale summary response {}", request_id);
                return Vec::new();
            }
            state.summary.summary = Some(summary);
            state.summary.loading = LoadingState::Loaded;
        }

        DataEvent::SummaryLoadFailed { request_id, error } => {
            if !state.summary.tracker.is_current(request_id) {
                tracing::debug!("Discarding stale summary failure {}", request_id);
                return Vec::new();
            }
            // Logged only; the previous summary stays
            tracing::error!("Failed to load summary: {}", error);
            state.summary.loading = LoadingState::Error(error);
        }

        DataEvent::CategoryTotalsLoaded {
            kind,
            request_id,
            totals,
        } => {
            let slot = state.reports.slot_mut(kind);
            if !slot.tracker.is_current(request_id) {
                tracing::debug!("Discarding stale {} report {}", kind, request_id);
                return Vec::new();
            }
            slot.install(Chart::build(ChartStyle::for_kind(kind), &totals));
            slot.loading = LoadingState::Loaded;
        }

        DataEvent::CategoryTotalsLoadFailed {
            kind,
            request_id,
            error,
        } => {
            let slot = state.reports.slot_mut(kind);
            if !slot.tracker.is_current(request_id) {
                tracing::debug!("Discarding stale {} report failure {}", kind, request_id);
                return Vec::new();
            }
            tracing::error!("Failed to load {} report: {}", kind, error);
            slot.loading = LoadingState::Error(error);
            state.notify(Notification::error(labels::REPORTS_LOAD_FAILED));
        }

        DataEvent::CategoriesLoaded { categories } => {
            tracing::debug!("Loaded {} categories", categories.len());
            state.categories = categories;
        }

        DataEvent::CategoriesLoadFailed { error } => {
            tracing::warn!("Failed to load categories: {}", error);
        }
    }

    Vec::new()
}

/// A saved or deleted entry refreshes its own list and the summary, nothing else
fn reload_after_mutation(kind: EntryKind) -> Vec<AppCommand> {
    vec![AppCommand::LoadEntries { kind }, AppCommand::LoadSummary]
}

/// Close the form only if it is the one that issued this save
fn close_form(state: &mut AppState, request_id: RequestId) {
    if state
        .form
        .as_ref()
        .is_some_and(|form| form.submission == Some(request_id))
    {
        state.form = None;
        if state.input_mode == InputMode::EntryForm {
            state.input_mode = InputMode::Normal;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{NotificationKind, RequestId};
    use chrono::NaiveDate;
    use contas_api::endpoints::{
        entries::Entry,
        reports::{CategoryTotal, Summary},
        Amount, EntryId,
    };

    fn entry(id: i64) -> Entry {
        Entry {
            id: EntryId::from(id),
            date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            category: "Outros".to_string(),
            description: "teste".to_string(),
            amount: Amount::new(5.0),
            created_at: None,
        }
    }

    fn issue(state: &mut AppState, kind: EntryKind) -> RequestId {
        state.entries_mut(kind).tracker.issue()
    }

    #[test]
    fn applies_current_list_response() {
        let mut state = AppState::new();
        let request_id = issue(&mut state, EntryKind::Purchase);

        let follow_up = reduce_data_event(
            &mut state,
            DataEvent::EntriesLoaded {
                kind: EntryKind::Purchase,
                request_id,
                entries: vec![entry(1), entry(2)],
            },
        );

        assert!(follow_up.is_empty());
        assert_eq!(state.purchases.entries.len(), 2);
        assert_eq!(state.purchases.loading, LoadingState::Loaded);
        assert!(state.bills.entries.is_empty());
    }

    #[test]
    fn discards_stale_list_response() {
        let mut state = AppState::new();
        let stale = issue(&mut state, EntryKind::Bill);
        let current = issue(&mut state, EntryKind::Bill);

        reduce_data_event(
            &mut state,
            DataEvent::EntriesLoaded {
                kind: EntryKind::Bill,
                request_id: current,
                entries: vec![entry(7)],
            },
        );
        reduce_data_event(
            &mut state,
            DataEvent::EntriesLoaded {
                kind: EntryKind::Bill,
                request_id: stale,
                entries: vec![entry(1), entry(2), entry(3)],
            },
        );

        assert_eq!(state.bills.entries, vec![entry(7)]);
    }

    #[test]
    fn list_failure_keeps_rows_and_notifies() {
        let mut state = AppState::new();
        let first = issue(&mut state, EntryKind::Purchase);
        reduce_data_event(
            &mut state,
            DataEvent::EntriesLoaded {
                kind: EntryKind::Purchase,
                request_id: first,
                entries: vec![entry(1)],
            },
        );

        let second = issue(&mut state, EntryKind::Purchase);
        reduce_data_event(
            &mut state,
            DataEvent::EntriesLoadFailed {
                kind: EntryKind::Purchase,
                request_id: second,
                error: "connection refused".to_string(),
            },
        );

        assert_eq!(state.purchases.entries.len(), 1);
        assert!(matches!(state.purchases.loading, LoadingState::Error(_)));
        assert_eq!(
            state.notification,
            Some(Notification::error("Erro ao carregar gastos"))
        );
    }

    #[test]
    fn create_reloads_own_list_and_summary() {
        let mut state = AppState::new();
        let request_id = state.saves.issue();
        let mut form = EntryFormState::new(
            EntryKind::Bill,
            NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
        );
        form.submission = Some(request_id);
        state.form = Some(form);
        state.input_mode = InputMode::EntryForm;

        let follow_up = reduce_data_event(
            &mut state,
            DataEvent::EntryCreated {
                request_id,
                kind: EntryKind::Bill,
                entry: entry(3),
            },
        );

        assert_eq!(
            follow_up,
            vec![
                AppCommand::LoadEntries {
                    kind: EntryKind::Bill
                },
                AppCommand::LoadSummary
            ]
        );
        assert!(state.form.is_none());
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(
            state.notification,
            Some(Notification::success("Despesa adicionada com sucesso!"))
        );
    }

    #[test]
    fn save_failure_keeps_form_and_shows_backend_message() {
        let mut state = AppState::new();
        let mut form = EntryFormState::new(
            EntryKind::Purchase,
            NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
        );
        form.description = "Cinema".to_string();
        let request_id = state.saves.issue();
        form.submission = Some(request_id);
        state.form = Some(form);
        state.input_mode = InputMode::EntryForm;

        let follow_up = reduce_data_event(
            &mut state,
            DataEvent::EntrySaveFailed {
                request_id,
                kind: EntryKind::Purchase,
                message: Some("Valor must be positive".to_string()),
                error: "(400 Bad Request) Valor must be positive".to_string(),
            },
        );

        assert!(follow_up.is_empty());
        let form = state.form.as_ref().unwrap();
        assert!(!form.is_submitting());
        assert_eq!(form.description, "Cinema");
        assert_eq!(state.input_mode, InputMode::EntryForm);
        assert_eq!(
            state.notification,
            Some(Notification::error("Erro: Valor must be positive"))
        );
    }

    #[test]
    fn save_failure_without_message_is_generic() {
        let mut state = AppState::new();
        let request_id = state.saves.issue();
        let mut form = EntryFormState::new(
            EntryKind::Bill,
            NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
        );
        form.submission = Some(request_id);
        state.form = Some(form);
        reduce_data_event(
            &mut state,
            DataEvent::EntrySaveFailed {
                request_id,
                kind: EntryKind::Bill,
                message: None,
                error: "timeout".to_string(),
            },
        );
        assert_eq!(
            state.notification,
            Some(Notification::error("Erro ao salvar despesa"))
        );
    }

    #[test]
    fn edit_lookup_opens_form_or_reports_missing() {
        let mut state = AppState::new();
        reduce_data_event(
            &mut state,
            DataEvent::EditEntryLoaded {
                kind: EntryKind::Purchase,
                id: EntryId::from(2),
                entries: vec![entry(1)],
            },
        );
        assert!(state.form.is_none());
        assert_eq!(
            state.notification.as_ref().map(|n| n.kind),
            Some(NotificationKind::Error)
        );

        state.notification = None;
        reduce_data_event(
            &mut state,
            DataEvent::EditEntryLoaded {
                kind: EntryKind::Purchase,
                id: EntryId::from(1),
                entries: vec![entry(1)],
            },
        );
        let form = state.form.as_ref().unwrap();
        assert_eq!(form.editing_id, Some(EntryId::from(1)));
        assert_eq!(form.title(), "Editar Gasto");
        assert_eq!(state.input_mode, InputMode::EntryForm);
    }

    #[test]
    fn summary_failure_is_silent() {
        let mut state = AppState::new();
        let first = state.summary.tracker.issue();
        let summary = Summary {
            total_purchases: Amount::new(100.0),
            total_bills: Amount::new(150.0),
            balance: Amount::new(-50.0),
        };
        reduce_data_event(
            &mut state,
            DataEvent::SummaryLoaded {
                request_id: first,
                summary,
            },
        );

        let second = state.summary.tracker.issue();
        reduce_data_event(
            &mut state,
            DataEvent::SummaryLoadFailed {
                request_id: second,
                error: "boom".to_string(),
            },
        );

        assert_eq!(state.summary.summary, Some(summary));
        assert!(state.notification.is_none());
    }

    #[test]
    fn report_refresh_replaces_chart() {
        let mut state = AppState::new();
        for total in [10.0, 20.0] {
            let request_id = state.reports.purchases.tracker.issue();
            reduce_data_event(
                &mut state,
                DataEvent::CategoryTotalsLoaded {
                    kind: EntryKind::Purchase,
                    request_id,
                    totals: vec![CategoryTotal {
                        category: "Saúde".to_string(),
                        total: Amount::new(total),
                    }],
                },
            );
        }

        let slot = &state.reports.purchases;
        assert_eq!(slot.disposed_count(), 1);
        assert_eq!(slot.chart().unwrap().total(), Amount::new(20.0));
        assert_eq!(slot.chart().unwrap().style, ChartStyle::Proportion);
        assert!(state.reports.bills.chart().is_none());
    }

    #[test]
    fn report_failure_notifies() {
        let mut state = AppState::new();
        let request_id = state.reports.bills.tracker.issue();
        reduce_data_event(
            &mut state,
            DataEvent::CategoryTotalsLoadFailed {
                kind: EntryKind::Bill,
                request_id,
                error: "502".to_string(),
            },
        );
        assert_eq!(
            state.notification,
            Some(Notification::error("Erro ao carregar relatórios"))
        );
    }

    #[test]
    fn late_save_leaves_newer_form_alone() {
        let mut state = AppState::new();
        let abandoned = state.saves.issue();

        // The user cancelled the first form and started typing a new one
        let mut form = EntryFormState::new(
            EntryKind::Purchase,
            NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
        );
        form.category = "Saude".to_string();
        state.form = Some(form);
        state.input_mode = InputMode::EntryForm;

        let follow_up = reduce_data_event(
            &mut state,
            DataEvent::EntryCreated {
                request_id: abandoned,
                kind: EntryKind::Purchase,
                entry: entry(9),
            },
        );

        // The entry exists now, so lists still refresh
        assert_eq!(follow_up.len(), 2);
        assert_eq!(state.input_mode, InputMode::EntryForm);
        assert_eq!(state.form.as_ref().unwrap().category, "Saude");

        state.notification = None;
        let follow_up = reduce_data_event(
            &mut state,
            DataEvent::EntrySaveFailed {
                request_id: abandoned,
                kind: EntryKind::Purchase,
                message: Some("Valor must be positive".to_string()),
                error: "(400 Bad Request) Valor must be positive".to_string(),
            },
        );
        assert!(follow_up.is_empty());
        assert!(state.notification.is_none());
        assert_eq!(state.form.as_ref().unwrap().category, "Saude");
    }
}
