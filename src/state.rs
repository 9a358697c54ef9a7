//! Application state management module.
//!
//! Houses the UI state scoped to the running application: the input buffer,
//! focus, list selection over the visible tasks, and the log-view toggle.
//! All task mutations are delegated to the owned `TaskStore`; store errors
//! are logged rather than surfaced to the interface.

use crate::logger::LogBuffer;
use crate::store::{Filter, TaskStore};
use crate::ui::Theme;
use log::*;
use ratatui::widgets::ListState;

/// Specifying the different foci.
///
#[derive(Debug, PartialEq, Eq)]
pub enum Focus {
    Input,
    List,
}

/// Houses data representative of application state.
///
pub struct State {
    store: TaskStore,
    current_focus: Focus,
    input_value: String,
    selected_index: usize,
    tasks_list_state: ListState,
    show_log: bool,
    log_entries: LogBuffer,
    theme: Theme,
}

impl State {
    /// Return a new instance wrapping the given store.
    ///
    pub fn new(store: TaskStore, theme: Theme, log_entries: LogBuffer) -> State {
        let current_focus = if store.is_empty() {
            Focus::Input
        } else {
            Focus::List
        };
        State {
            store,
            current_focus,
            input_value: String::new(),
            selected_index: 0,
            tasks_list_state: ListState::default(),
            show_log: false,
            log_entries,
            theme,
        }
    }

    /// Return the task store.
    ///
    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Return the current theme.
    ///
    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    /// Return the current focus.
    ///
    pub fn current_focus(&self) -> &Focus {
        &self.current_focus
    }

    /// Focus the input line.
    ///
    pub fn focus_input(&mut self) -> &mut Self {
        self.current_focus = Focus::Input;
        self
    }

    /// Focus the task list.
    ///
    pub fn focus_list(&mut self) -> &mut Self {
        self.current_focus = Focus::List;
        self
    }

    /// Return the current contents of the input line.
    ///
    pub fn input_value(&self) -> &str {
        &self.input_value
    }

    /// Append a character to the input line.
    ///
    pub fn add_input_char(&mut self, c: char) -> &mut Self {
        self.input_value.push(c);
        self
    }

    /// Delete the last character of the input line.
    ///
    pub fn delete_input_char(&mut self) -> &mut Self {
        self.input_value.pop();
        self
    }

    /// Submit the input line as a new task. An empty input is a no-op; the
    /// line is cleared only when a task was actually added.
    ///
    pub fn submit_input(&mut self) -> &mut Self {
        let title = self.input_value.clone();
        match self.store.add(&title) {
            Ok(Some(_)) => {
                self.input_value.clear();
                self.clamp_selection();
            }
            Ok(None) => {}
            Err(e) => error!("Failed to add task: {}", e),
        }
        self
    }

    /// Return the key of the currently selected visible task.
    ///
    pub fn selected_key(&self) -> Option<u64> {
        self.store
            .visible_tasks()
            .get(self.selected_index)
            .map(|task| task.key)
    }

    /// Return the selection index into the visible tasks.
    ///
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Move the selection to the next visible task, wrapping at the end.
    ///
    pub fn next_task_index(&mut self) -> &mut Self {
        let len = self.store.visible_tasks().len();
        if len > 0 {
            self.selected_index = (self.selected_index + 1) % len;
        }
        self
    }

    /// Move the selection to the previous visible task, wrapping at the start.
    ///
    pub fn previous_task_index(&mut self) -> &mut Self {
        let len = self.store.visible_tasks().len();
        if len > 0 {
            self.selected_index = self.selected_index.checked_sub(1).unwrap_or(len - 1);
        }
        self
    }

    /// Return the list state for stateful rendering of the task list.
    ///
    pub fn get_tasks_list_state(&mut self) -> &mut ListState {
        let selection = if self.store.visible_tasks().is_empty() {
            None
        } else {
            Some(self.selected_index)
        };
        self.tasks_list_state.select(selection);
        &mut self.tasks_list_state
    }

    /// Flip the completion state of the selected task.
    ///
    pub fn toggle_selected(&mut self) -> &mut Self {
        if let Some(key) = self.selected_key() {
            if let Err(e) = self.store.toggle_active(key) {
                error!("Failed to toggle task: {}", e);
            }
            self.clamp_selection();
        }
        self
    }

    /// Open an edit session on the selected task.
    ///
    pub fn begin_edit_selected(&mut self) -> &mut Self {
        if self.store.editing().is_some() {
            return self;
        }
        if let Some(key) = self.selected_key() {
            if let Err(e) = self.store.toggle_editing(key, false) {
                error!("Failed to open edit session: {}", e);
            }
        }
        self
    }

    /// Close the open edit session, committing the buffer to the title.
    ///
    pub fn commit_edit(&mut self) -> &mut Self {
        self.close_edit(true)
    }

    /// Close the open edit session, discarding the buffer.
    ///
    pub fn discard_edit(&mut self) -> &mut Self {
        self.close_edit(false)
    }

    fn close_edit(&mut self, commit: bool) -> &mut Self {
        if let Some(key) = self.store.editing().map(|session| session.key) {
            if let Err(e) = self.store.toggle_editing(key, commit) {
                error!("Failed to close edit session: {}", e);
            }
        }
        self
    }

    /// Return whether an edit session is open.
    ///
    pub fn is_editing(&self) -> bool {
        self.store.editing().is_some()
    }

    /// Append a character to the edit buffer.
    ///
    pub fn add_edit_char(&mut self, c: char) -> &mut Self {
        if let Some(session) = self.store.editing() {
            let mut buffer = session.buffer.clone();
            buffer.push(c);
            self.store.set_editing_value(buffer);
        }
        self
    }

    /// Delete the last character of the edit buffer.
    ///
    pub fn delete_edit_char(&mut self) -> &mut Self {
        if let Some(session) = self.store.editing() {
            let mut buffer = session.buffer.clone();
            buffer.pop();
            self.store.set_editing_value(buffer);
        }
        self
    }

    /// Delete the selected task.
    ///
    pub fn remove_selected(&mut self) -> &mut Self {
        if let Some(key) = self.selected_key() {
            if let Err(e) = self.store.remove(key) {
                error!("Failed to remove task: {}", e);
            }
            self.clamp_selection();
        }
        self
    }

    /// Set every task's completion state at once.
    ///
    pub fn toggle_all_complete(&mut self) -> &mut Self {
        if let Err(e) = self.store.toggle_all_complete() {
            error!("Failed to toggle all tasks: {}", e);
        }
        self.clamp_selection();
        self
    }

    /// Remove every completed task.
    ///
    pub fn clear_completed(&mut self) -> &mut Self {
        if let Err(e) = self.store.clear_completed() {
            error!("Failed to clear completed tasks: {}", e);
        }
        self.clamp_selection();
        self
    }

    /// Select the given filter.
    ///
    pub fn set_filter(&mut self, filter: Filter) -> &mut Self {
        self.store.set_filter(filter);
        self.clamp_selection();
        self
    }

    /// Cycle to the next filter.
    ///
    pub fn next_filter(&mut self) -> &mut Self {
        self.store.next_filter();
        self.clamp_selection();
        self
    }

    /// Return whether the log view is shown.
    ///
    pub fn is_log_shown(&self) -> bool {
        self.show_log
    }

    /// Toggle the log view.
    ///
    pub fn toggle_log_view(&mut self) -> &mut Self {
        self.show_log = !self.show_log;
        self
    }

    /// Return a snapshot of the captured log entries.
    ///
    pub fn get_log_entries(&self) -> Vec<String> {
        self.log_entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// Keep the selection inside the visible task range after a mutation or
    /// filter change.
    ///
    fn clamp_selection(&mut self) {
        let len = self.store.visible_tasks().len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Persistence;
    use std::fs;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    fn test_state() -> (State, PathBuf) {
        let path = std::env::temp_dir().join(format!(
            "todui-state-test-{}.json",
            rand::random::<u64>()
        ));
        let store = TaskStore::load(Persistence::with_path(path.clone()));
        let log_entries = Arc::new(Mutex::new(vec![]));
        (State::new(store, Theme::default(), log_entries), path)
    }

    #[test]
    fn test_new_state_focuses_input_when_empty() {
        let (state, path) = test_state();
        assert_eq!(*state.current_focus(), Focus::Input);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_submit_input_adds_and_clears() {
        let (mut state, path) = test_state();
        state.add_input_char('h').add_input_char('i');
        state.submit_input();
        assert_eq!(state.store().tasks().len(), 1);
        assert_eq!(state.store().tasks()[0].title, "hi");
        assert_eq!(state.input_value(), "");
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_submit_empty_input_is_noop() {
        let (mut state, path) = test_state();
        state.submit_input();
        assert!(state.store().tasks().is_empty());
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_selection_wraps_over_visible_tasks() {
        let (mut state, path) = test_state();
        state.add_input_char('a');
        state.submit_input();
        state.add_input_char('b');
        state.submit_input();
        assert_eq!(state.selected_index(), 0);
        state.next_task_index();
        assert_eq!(state.selected_index(), 1);
        state.next_task_index();
        assert_eq!(state.selected_index(), 0);
        state.previous_task_index();
        assert_eq!(state.selected_index(), 1);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_remove_selected_clamps_selection() {
        let (mut state, path) = test_state();
        state.add_input_char('a');
        state.submit_input();
        state.add_input_char('b');
        state.submit_input();
        state.next_task_index();
        state.remove_selected();
        assert_eq!(state.selected_index(), 0);
        assert_eq!(state.store().tasks().len(), 1);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_edit_flow_commit() {
        let (mut state, path) = test_state();
        state.add_input_char('a');
        state.submit_input();
        state.begin_edit_selected();
        assert!(state.is_editing());
        state.add_edit_char('b').add_edit_char('c');
        state.commit_edit();
        assert!(!state.is_editing());
        assert_eq!(state.store().tasks()[0].title, "abc");
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_edit_flow_discard() {
        let (mut state, path) = test_state();
        state.add_input_char('a');
        state.submit_input();
        state.begin_edit_selected();
        state.add_edit_char('z');
        state.discard_edit();
        assert_eq!(state.store().tasks()[0].title, "a");
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_filter_change_clamps_selection() {
        let (mut state, path) = test_state();
        state.add_input_char('a');
        state.submit_input();
        state.add_input_char('b');
        state.submit_input();
        state.next_task_index();
        // Under the Active filter, not-yet-completed tasks are hidden
        state.set_filter(Filter::Active);
        assert!(state.store().visible_tasks().is_empty());
        assert_eq!(state.selected_index(), 0);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_log_view_toggle() {
        let (mut state, path) = test_state();
        assert!(!state.is_log_shown());
        state.toggle_log_view();
        assert!(state.is_log_shown());
        state.toggle_log_view();
        assert!(!state.is_log_shown());
        let _ = fs::remove_file(path);
    }
}
