use crate::events::AppCommand;
use crate::input::{Key, KeyEvent};
use crate::state::*;

/// Map user input (KeyEvent) to AppCommand based on current UI state
/// Returns None if the key should be ignored
pub fn handle_key_input(event: KeyEvent, state: &AppState) -> Option<AppCommand> {
    let key = event.key;

    // Priority 0: an open notification swallows the next key
    if state.notification.is_some() {
        return Some(AppCommand::DismissNotification);
    }

    match state.input_mode {
        // Priority 1: entry form
        InputMode::EntryForm => return handle_entry_form_keys(event, state),
        // Priority 2: delete confirmation popup
        InputMode::DeleteConfirmation => return handle_delete_confirmation_keys(key),
        // Priority 3: filter bar
        InputMode::Filter => return handle_filter_keys(key, state),
        InputMode::Normal => {}
    }

    // Priority 4: help popup
    if state.help_visible {
        return match key {
            Key::Char('?') | Key::Esc => Some(AppCommand::ToggleHelp),
            Key::Char('q') => Some(AppCommand::Quit),
            _ => None,
        };
    }

    // Priority 5: global keys
    match key {
        Key::Char('q') => return Some(AppCommand::Quit),
        Key::Char('?') => return Some(AppCommand::ToggleHelp),
        Key::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            return Some(AppCommand::ActivateTab(Tab::ALL[index]));
        }
        Key::Tab => return Some(AppCommand::ActivateTab(state.active_tab.next())),
        Key::BackTab => return Some(AppCommand::ActivateTab(state.active_tab.prev())),
        Key::Char('f') => return Some(AppCommand::EnterFilterMode),
        Key::Char('x') => return Some(AppCommand::ClearFilters),
        Key::Char('r') => return Some(AppCommand::Refresh),
        _ => {}
    }

    // Priority 6: tab-specific keys
    match state.active_tab {
        Tab::Purchases | Tab::Bills => handle_entries_keys(key, state),
        Tab::Logs => handle_logs_keys(key),
        Tab::Reports => None,
    }
}

fn handle_entries_keys(key: Key, state: &AppState) -> Option<AppCommand> {
    let list = state.active_entries()?;
    let kind = list.kind;

    match key {
        Key::Char('j') | Key::Down => Some(AppCommand::SelectNext),
        Key::Char('k') | Key::Up => Some(AppCommand::SelectPrevious),
        Key::Char('g') | Key::Home => Some(AppCommand::NavigateToTop),
        Key::Char('G') | Key::End => Some(AppCommand::NavigateToBottom),
        Key::Char('n') => Some(AppCommand::OpenCreateForm { kind }),
        Key::Char('e') | Key::Enter => list
            .selected_entry()
            .map(|entry| AppCommand::InitiateEdit { kind, id: entry.id }),
        Key::Char('d') | Key::Backspace => list
            .selected_entry()
            .map(|entry| AppCommand::InitiateDelete { kind, id: entry.id }),
        _ => None,
    }
}

fn handle_logs_keys(key: Key) -> Option<AppCommand> {
    match key {
        Key::Char('k') | Key::Up => Some(AppCommand::ScrollLogsUp),
        Key::Char('j') | Key::Down => Some(AppCommand::ScrollLogsDown),
        Key::PageUp => Some(AppCommand::ScrollLogsPageUp),
        Key::PageDown => Some(AppCommand::ScrollLogsPageDown),
        Key::Char('g') | Key::Home => Some(AppCommand::ScrollLogsToTop),
        Key::Char('G') | Key::End => Some(AppCommand::ScrollLogsToBottom),
        _ => None,
    }
}

fn handle_entry_form_keys(event: KeyEvent, state: &AppState) -> Option<AppCommand> {
    let form = state.form.as_ref()?;
    let on_category = form.current_field == FormField::Category;

    match event.key {
        Key::Esc => Some(AppCommand::CancelForm),
        Key::Enter => Some(AppCommand::SubmitForm),
        Key::Tab => Some(AppCommand::NavigateFormField { forward: true }),
        Key::BackTab => Some(AppCommand::NavigateFormField { forward: false }),
        Key::Down if on_category => Some(AppCommand::CycleFormCategory { forward: true }),
        Key::Up if on_category => Some(AppCommand::CycleFormCategory { forward: false }),
        Key::Down => Some(AppCommand::NavigateFormField { forward: true }),
        Key::Up => Some(AppCommand::NavigateFormField { forward: false }),
        Key::Backspace => Some(AppCommand::DeleteFormFieldChar),
        Key::Char('u') if event.modifiers.ctrl => Some(AppCommand::ClearFormField),
        Key::Char(c) => Some(AppCommand::AppendFormFieldChar(c)),
        _ => None,
    }
}

fn handle_delete_confirmation_keys(key: Key) -> Option<AppCommand> {
    match key {
        Key::Char('y') | Key::Char('Y') => Some(AppCommand::ConfirmDelete),
        Key::Char('n') | Key::Char('N') | Key::Esc => Some(AppCommand::CancelDelete),
        _ => None,
    }
}

fn handle_filter_keys(key: Key, state: &AppState) -> Option<AppCommand> {
    let on_category = state.filter.focused == FilterField::Category;

    match key {
        Key::Esc => Some(AppCommand::ExitFilterMode),
        Key::Enter => Some(AppCommand::ApplyFilters),
        Key::Tab => Some(AppCommand::NavigateFilterField { forward: true }),
        Key::BackTab => Some(AppCommand::NavigateFilterField { forward: false }),
        Key::Down if on_category => Some(AppCommand::CycleFilterCategory { forward: true }),
        Key::Up if on_category => Some(AppCommand::CycleFilterCategory { forward: false }),
        Key::Backspace => Some(AppCommand::DeleteFilterChar),
        Key::Char(c) => Some(AppCommand::AppendFilterChar(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contas_api::endpoints::{entries::Entry, Amount, EntryId, EntryKind};

    fn state_with_purchase() -> AppState {
        let mut state = AppState::new();
        state.purchases.replace_entries(vec![Entry {
            id: EntryId::from(12),
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            category: "Lazer".to_string(),
            description: "Show".to_string(),
            amount: Amount::new(80.0),
            created_at: None,
        }]);
        state
    }

    #[test]
    fn test_quit_command() {
        let state = AppState::new();
        assert_eq!(
            handle_key_input(KeyEvent::new(Key::Char('q')), &state),
            Some(AppCommand::Quit)
        );
    }

    #[test]
    fn test_number_keys_activate_tabs() {
        let state = AppState::new();
        assert_eq!(
            handle_key_input(KeyEvent::new(Key::Char('3')), &state),
            Some(AppCommand::ActivateTab(Tab::Reports))
        );
        assert_eq!(
            handle_key_input(KeyEvent::new(Key::Char('4')), &state),
            Some(AppCommand::ActivateTab(Tab::Logs))
        );
        assert_eq!(
            handle_key_input(KeyEvent::new(Key::BackTab), &state),
            Some(AppCommand::ActivateTab(Tab::Logs))
        );
    }

    #[test]
    fn test_notification_swallows_key() {
        let mut state = state_with_purchase();
        state.notification = Some(Notification::success("ok"));
        assert_eq!(
            handle_key_input(KeyEvent::new(Key::Char('q')), &state),
            Some(AppCommand::DismissNotification)
        );
    }

    #[test]
    fn test_edit_and_delete_target_selected_row() {
        let state = state_with_purchase();
        let id = EntryId::from(12);
        assert_eq!(
            handle_key_input(KeyEvent::new(Key::Char('e')), &state),
            Some(AppCommand::InitiateEdit {
                kind: EntryKind::Purchase,
                id
            })
        );
        assert_eq!(
            handle_key_input(KeyEvent::new(Key::Char('d')), &state),
            Some(AppCommand::InitiateDelete {
                kind: EntryKind::Purchase,
                id
            })
        );
    }

    #[test]
    fn test_edit_without_rows_is_ignored() {
        let mut state = AppState::new();
        state.active_tab = Tab::Bills;
        assert_eq!(handle_key_input(KeyEvent::new(Key::Char('e')), &state), None);
        assert_eq!(
            handle_key_input(KeyEvent::new(Key::Char('n')), &state),
            Some(AppCommand::OpenCreateForm {
                kind: EntryKind::Bill
            })
        );
    }

    #[test]
    fn test_form_keys() {
        let mut state = AppState::new();
        state.form = Some(EntryFormState::new(
            EntryKind::Purchase,
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        ));
        state.input_mode = InputMode::EntryForm;

        // q is text inside the form
        assert_eq!(
            handle_key_input(KeyEvent::new(Key::Char('q')), &state),
            Some(AppCommand::AppendFormFieldChar('q'))
        );
        assert_eq!(
            handle_key_input(KeyEvent::with_ctrl(Key::Char('u')), &state),
            Some(AppCommand::ClearFormField)
        );
        assert_eq!(
            handle_key_input(KeyEvent::new(Key::Down), &state),
            Some(AppCommand::NavigateFormField { forward: true })
        );

        if let Some(form) = state.form.as_mut() {
            form.current_field = FormField::Category;
        }
        assert_eq!(
            handle_key_input(KeyEvent::new(Key::Down), &state),
            Some(AppCommand::CycleFormCategory { forward: true })
        );
    }

    #[test]
    fn test_delete_confirmation_keys() {
        let mut state = state_with_purchase();
        state.input_mode = InputMode::DeleteConfirmation;
        assert_eq!(
            handle_key_input(KeyEvent::new(Key::Char('y')), &state),
            Some(AppCommand::ConfirmDelete)
        );
        assert_eq!(
            handle_key_input(KeyEvent::new(Key::Esc), &state),
            Some(AppCommand::CancelDelete)
        );
        assert_eq!(handle_key_input(KeyEvent::new(Key::Char('q')), &state), None);
    }

    #[test]
    fn test_filter_mode_keys() {
        let mut state = AppState::new();
        state.input_mode = InputMode::Filter;
        assert_eq!(
            handle_key_input(KeyEvent::new(Key::Char('2')), &state),
            Some(AppCommand::AppendFilterChar('2'))
        );
        assert_eq!(
            handle_key_input(KeyEvent::new(Key::Enter), &state),
            Some(AppCommand::ApplyFilters)
        );
        assert_eq!(
            handle_key_input(KeyEvent::new(Key::Esc), &state),
            Some(AppCommand::ExitFilterMode)
        );
    }

    #[test]
    fn test_help_visible_blocks_other_commands() {
        let mut state = state_with_purchase();
        state.help_visible = true;
        assert_eq!(handle_key_input(KeyEvent::new(Key::Char('n')), &state), None);
        assert_eq!(
            handle_key_input(KeyEvent::new(Key::Esc), &state),
            Some(AppCommand::ToggleHelp)
        );
    }

    #[test]
    fn test_logs_tab_scroll_keys() {
        let mut state = AppState::new();
        state.active_tab = Tab::Logs;
        assert_eq!(
            handle_key_input(KeyEvent::new(Key::Char('k')), &state),
            Some(AppCommand::ScrollLogsUp)
        );
        assert_eq!(
            handle_key_input(KeyEvent::new(Key::PageDown), &state),
            Some(AppCommand::ScrollLogsPageDown)
        );
    }
}
