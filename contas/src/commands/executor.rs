use crate::background::{data_loader::DataLoader, BackgroundJob, BackgroundTaskManager};
use crate::events::AppCommand;
use crate::state::*;
use chrono::Local;
use contas_api::endpoints::EntryKind;

const LOG_PAGE_SIZE: usize = 20;

/// Execute a command by updating state and spawning the background jobs it
/// asks for
pub fn execute_command(
    command: AppCommand,
    state: &mut AppState,
    task_manager: &mut BackgroundTaskManager,
    data_loader: &DataLoader,
) {
    for job in apply_command(command, state) {
        let loader = data_loader.clone();
        match job.task_key() {
            Some(task_id) => {
                task_manager.spawn_load_task(task_id, async move { loader.run(job).await })
            }
            None => task_manager.spawn_mutation_task(async move { loader.run(job).await }),
        }
    }
}

/// Synchronous execution for tests: state changes happen, jobs are returned
/// instead of spawned
pub fn execute_command_sync(command: AppCommand, state: &mut AppState) -> Vec<BackgroundJob> {
    apply_command(command, state)
}

/// Apply a command to the state and collect the background work it needs
pub fn apply_command(command: AppCommand, state: &mut AppState) -> Vec<BackgroundJob> {
    match command {
        AppCommand::SelectNext => {
            if let Some(list) = state.active_entries_mut() {
                list.select_next();
            }
        }

        AppCommand::SelectPrevious => {
            if let Some(list) = state.active_entries_mut() {
                list.select_prev();
            }
        }

        AppCommand::NavigateToTop => {
            if let Some(list) = state.active_entries_mut() {
                list.select_first();
            }
        }

        AppCommand::NavigateToBottom => {
            if let Some(list) = state.active_entries_mut() {
                list.select_last();
            }
        }

        AppCommand::ActivateTab(tab) => {
            tracing::debug!("Activating tab {:?}", tab);
            state.active_tab = tab;
            if tab == Tab::Reports {
                return load_reports(state);
            }
        }

        AppCommand::LoadEntries { kind } => return vec![load_entries(state, kind)],

        AppCommand::LoadSummary => return vec![load_summary(state)],

        AppCommand::LoadReports => return load_reports(state),

        AppCommand::LoadCategories => return vec![BackgroundJob::LoadCategories],

        AppCommand::Refresh => {
            return match state.active_tab {
                Tab::Purchases | Tab::Bills => {
                    let mut jobs = Vec::new();
                    if let Some(kind) = state.active_tab.entry_kind() {
                        jobs.push(load_entries(state, kind));
                    }
                    jobs.push(load_summary(state));
                    jobs
                }
                Tab::Reports => {
                    let mut jobs = load_reports(state);
                    jobs.push(load_summary(state));
                    jobs
                }
                Tab::Logs => Vec::new(),
            };
        }

        AppCommand::EnterFilterMode => {
            state.input_mode = InputMode::Filter;
        }

        AppCommand::ExitFilterMode => {
            state.input_mode = InputMode::Normal;
        }

        AppCommand::NavigateFilterField { forward } => {
            state.filter.focused = if forward {
                state.filter.focused.next()
            } else {
                state.filter.focused.prev()
            };
        }

        AppCommand::AppendFilterChar(c) => {
            state.filter.focused_value_mut().push(c);
        }

        AppCommand::DeleteFilterChar => {
            state.filter.focused_value_mut().pop();
        }

        AppCommand::CycleFilterCategory { forward } => {
            let categories = state.categories.clone();
            state.filter.cycle_category(&categories, forward);
        }

        AppCommand::ApplyFilters => return apply_filters(state),

        AppCommand::ClearFilters => {
            state.filter.clear();
            return apply_filters(state);
        }

        AppCommand::OpenCreateForm { kind } => {
            state.form = Some(EntryFormState::new(kind, Local::now().date_naive()));
            state.input_mode = InputMode::EntryForm;
        }

        AppCommand::InitiateEdit { kind, id } => {
            return vec![BackgroundJob::FetchEntryForEdit {
                kind,
                id,
                filter: state.filter.criteria(),
            }];
        }

        AppCommand::NavigateFormField { forward } => {
            if let Some(form) = state.form.as_mut() {
                form.current_field = if forward {
                    form.current_field.next()
                } else {
                    form.current_field.prev()
                };
            }
        }

        AppCommand::AppendFormFieldChar(c) => {
            if let Some(form) = state.form.as_mut() {
                form.focused_value_mut().push(c);
                form.validation_error = None;
            }
        }

        AppCommand::DeleteFormFieldChar => {
            if let Some(form) = state.form.as_mut() {
                form.focused_value_mut().pop();
                form.validation_error = None;
            }
        }

        AppCommand::ClearFormField => {
            if let Some(form) = state.form.as_mut() {
                form.focused_value_mut().clear();
            }
        }

        AppCommand::CycleFormCategory { forward } => {
            let categories = state.categories.clone();
            if let Some(form) = state.form.as_mut() {
                form.cycle_category(&categories, forward);
            }
        }

        AppCommand::SubmitForm => {
            let Some(form) = state.form.as_mut() else {
                return Vec::new();
            };
            if form.is_submitting() {
                tracing::debug!("Ignoring submit, a save is already in flight");
                return Vec::new();
            }

            match form.to_new_entry() {
                Ok(entry) => {
                    form.validation_error = None;
                    let request_id = state.saves.issue();
                    form.submission = Some(request_id);
                    let kind = form.kind;
                    return vec![match form.editing_id {
                        Some(id) => BackgroundJob::UpdateEntry {
                            request_id,
                            kind,
                            id,
                            entry,
                        },
                        None => BackgroundJob::CreateEntry {
                            request_id,
                            kind,
                            entry,
                        },
                    }];
                }
                Err(message) => {
                    tracing::debug!("Form rejected: {}", message);
                    form.validation_error = Some(message);
                }
            }
        }

        AppCommand::CancelForm => {
            state.form = None;
            state.input_mode = InputMode::Normal;
        }

        AppCommand::InitiateDelete { kind, id } => {
            state.pending_delete = Some((kind, id));
            state.input_mode = InputMode::DeleteConfirmation;
        }

        AppCommand::ConfirmDelete => {
            state.input_mode = InputMode::Normal;
            if let Some((kind, id)) = state.pending_delete.take() {
                return vec![BackgroundJob::DeleteEntry { kind, id }];
            }
        }

        AppCommand::CancelDelete => {
            if let Some((kind, id)) = state.pending_delete.take() {
                tracing::debug!("Delete of {} {} declined", kind, id);
            }
            state.input_mode = InputMode::Normal;
        }

        AppCommand::DismissNotification => {
            state.notification = None;
        }

        AppCommand::ToggleHelp => {
            state.help_visible = !state.help_visible;
        }

        AppCommand::ScrollLogsUp => {
            // Up means back in time (larger offset from the newest entry)
            let logs = &mut state.logs;
            if logs.scroll_offset < logs.total_entries.saturating_sub(1) {
                logs.scroll_offset += 1;
            }
        }

        AppCommand::ScrollLogsDown => {
            state.logs.scroll_offset = state.logs.scroll_offset.saturating_sub(1);
        }

        AppCommand::ScrollLogsPageUp => {
            let logs = &mut state.logs;
            logs.scroll_offset =
                (logs.scroll_offset + LOG_PAGE_SIZE).min(logs.total_entries.saturating_sub(1));
        }

        AppCommand::ScrollLogsPageDown => {
            state.logs.scroll_offset = state.logs.scroll_offset.saturating_sub(LOG_PAGE_SIZE);
        }

        AppCommand::ScrollLogsToTop => {
            state.logs.scroll_offset = state.logs.total_entries.saturating_sub(1);
        }

        AppCommand::ScrollLogsToBottom => {
            state.logs.scroll_offset = 0;
        }

        AppCommand::Quit => {
            state.should_quit = true;
        }
    }

    Vec::new()
}

/// Both lists and the summary, plus the charts when they are on screen
fn apply_filters(state: &mut AppState) -> Vec<BackgroundJob> {
    if state.input_mode == InputMode::Filter {
        state.input_mode = InputMode::Normal;
    }
    tracing::info!("Applying filters: {:?}", state.filter.query_string());

    let mut jobs = vec![
        load_entries(state, EntryKind::Purchase),
        load_entries(state, EntryKind::Bill),
        load_summary(state),
    ];
    if state.active_tab == Tab::Reports {
        jobs.extend(load_reports(state));
    }
    jobs
}

fn load_entries(state: &mut AppState, kind: EntryKind) -> BackgroundJob {
    let filter = state.filter.criteria();
    let list = state.entries_mut(kind);
    let request_id = list.tracker.issue();
    list.loading = LoadingState::loading();
    BackgroundJob::LoadEntries {
        kind,
        request_id,
        filter,
    }
}

fn load_summary(state: &mut AppState) -> BackgroundJob {
    let filter = state.filter.criteria();
    let request_id = state.summary.tracker.issue();
    state.summary.loading = LoadingState::loading();
    BackgroundJob::LoadSummary { request_id, filter }
}

fn load_reports(state: &mut AppState) -> Vec<BackgroundJob> {
    EntryKind::ALL
        .into_iter()
        .map(|kind| {
            let filter = state.filter.criteria();
            let slot = state.reports.slot_mut(kind);
            let request_id = slot.tracker.issue();
            slot.loading = LoadingState::loading();
            BackgroundJob::LoadCategoryTotals {
                kind,
                request_id,
                filter,
            }
        })
        .collect()
}
