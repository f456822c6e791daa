use crate::app_core::{AppCore, DataEventHandler};
use crate::background::BackgroundJob;
use crate::commands::executor;
use crate::events::{AppCommand, DataEvent};
use crate::input::{Key, KeyEvent};
use crate::state::{AppState, Tab};

/// Mock data event handler for tests (no real async tasks)
///
/// Executes commands synchronously and records every command and the
/// background jobs it would have spawned.
#[derive(Default)]
pub struct MockDataHandler {
    pub commands: Vec<AppCommand>,
    pub jobs: Vec<BackgroundJob>,
}

impl MockDataHandler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataEventHandler for MockDataHandler {
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState) {
        self.commands.push(command.clone());
        let jobs = executor::execute_command_sync(command, state);
        self.jobs.extend(jobs);
    }
}

pub struct TestApp {
    core: AppCore<MockDataHandler>,
}

impl TestApp {
    /// Create a new test app with mock handler
    pub fn new() -> Self {
        Self {
            core: AppCore::new(MockDataHandler::new()),
        }
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            core: AppCore::with_state(MockDataHandler::new(), state),
        }
    }

    /// Send a single key event
    pub fn send_key(&mut self, key: Key) {
        self.core.handle_key(KeyEvent::new(key));
    }

    /// Send a key event with modifiers
    pub fn send_key_event(&mut self, event: KeyEvent) {
        self.core.handle_key(event);
    }

    /// Send multiple keys in sequence
    pub fn send_keys(&mut self, keys: &[Key]) {
        for key in keys {
            self.send_key(*key);
        }
    }

    /// Type text one character at a time
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send_key(Key::Char(c));
        }
    }

    /// Inject a data event (simulate an API response)
    pub fn send_data_event(&mut self, event: DataEvent) {
        self.core.handle_data_event(event);
    }

    /// Get read-only access to current state
    pub fn state(&self) -> &AppState {
        self.core.state()
    }

    /// Jobs requested so far
    pub fn jobs(&self) -> &[BackgroundJob] {
        &self.core.handler().jobs
    }

    /// Drain the recorded jobs, so a test can look at one step at a time
    pub fn take_jobs(&mut self) -> Vec<BackgroundJob> {
        std::mem::take(&mut self.core.handler_mut().jobs)
    }

    pub fn commands(&self) -> &[AppCommand] {
        &self.core.handler().commands
    }

    pub fn assert_tab(&self, expected: Tab) {
        assert_eq!(
            self.state().active_tab,
            expected,
            "Expected a different active tab"
        );
    }

    /// Assert that the app should quit
    pub fn assert_should_quit(&self) {
        assert!(
            self.core.should_quit(),
            "App should be marked for quit but is not"
        );
    }

    /// Assert that the app should NOT quit
    pub fn assert_not_quit(&self) {
        assert!(
            !self.core.should_quit(),
            "App should NOT be marked for quit but is"
        );
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
