use super::error::StoreError;
use super::persist::Persistence;
use super::task::{EditSession, Filter, Task};
use chrono::Utc;
use log::*;

/// Houses the task collection and all mutating operations.
///
/// Every mutation rewrites the data file with the full serialized collection
/// before returning, so the persisted form always matches memory.
pub struct TaskStore {
    tasks: Vec<Task>,
    editing: Option<EditSession>,
    current_filter: Filter,
    persist: Persistence,
}

impl TaskStore {
    /// Return a new store populated from the persisted collection. Absent or
    /// unparseable data starts the store empty.
    ///
    pub fn load(persist: Persistence) -> TaskStore {
        let tasks = persist.load();
        debug!("Loaded {} task(s) from {:?}.", tasks.len(), persist.file_path());
        TaskStore {
            tasks,
            editing: None,
            current_filter: Filter::All,
            persist,
        }
    }

    /// Return the full ordered collection.
    ///
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Return whether the collection is empty.
    ///
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Append a new task with the given title and a fresh key. An empty title
    /// is a defined no-op, not an error. Returns the new key when a task was
    /// added.
    ///
    pub fn add(&mut self, title: &str) -> Result<Option<u64>, StoreError> {
        if title.is_empty() {
            return Ok(None);
        }
        let key = self.next_key();
        self.tasks.push(Task::new(key, title.to_string()));
        self.save()?;
        info!("Added task {}.", key);
        Ok(Some(key))
    }

    /// Flip the completion state of the task with the given key.
    ///
    pub fn toggle_active(&mut self, key: u64) -> Result<(), StoreError> {
        let index = self.find(key)?;
        self.tasks[index].active = !self.tasks[index].active;
        self.save()
    }

    /// Toggle the edit session for the task with the given key. Opening a
    /// session stages the task's current title into the edit buffer,
    /// discarding any session open on another task. Closing with `commit`
    /// overwrites the title with the buffer contents and persists; closing
    /// without it discards the buffer.
    ///
    pub fn toggle_editing(&mut self, key: u64, commit: bool) -> Result<(), StoreError> {
        let index = self.find(key)?;
        match self.editing.take() {
            Some(session) if session.key == key => {
                if commit {
                    self.tasks[index].title = session.buffer;
                    self.save()?;
                }
            }
            previous => {
                if let Some(session) = previous {
                    debug!("Discarding open edit session for task {}.", session.key);
                }
                self.editing = Some(EditSession {
                    key,
                    buffer: self.tasks[index].title.clone(),
                });
            }
        }
        Ok(())
    }

    /// Return the open edit session, if any.
    ///
    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    /// Replace the contents of the edit buffer. The buffer is transient and
    /// never persisted.
    ///
    pub fn set_editing_value(&mut self, text: String) -> &mut Self {
        if let Some(session) = self.editing.as_mut() {
            session.buffer = text;
        }
        self
    }

    /// Delete the task with the given key from the collection.
    ///
    pub fn remove(&mut self, key: u64) -> Result<(), StoreError> {
        let index = self.find(key)?;
        self.tasks.remove(index);
        if self.editing.as_ref().map(|s| s.key) == Some(key) {
            self.editing = None;
        }
        self.save()?;
        info!("Removed task {}.", key);
        Ok(())
    }

    /// Remove every completed task from the collection. Idempotent.
    ///
    pub fn clear_completed(&mut self) -> Result<(), StoreError> {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.active);
        if let Some(session) = self.editing.as_ref() {
            if !self.tasks.iter().any(|task| task.key == session.key) {
                self.editing = None;
            }
        }
        self.save()?;
        info!("Cleared {} completed task(s).", before - self.tasks.len());
        Ok(())
    }

    /// Set every task's completion state at once: all tasks become active
    /// when none currently are, otherwise all become completed.
    ///
    pub fn toggle_all_complete(&mut self) -> Result<(), StoreError> {
        let make_active = self.active_count() == 0;
        for task in self.tasks.iter_mut() {
            task.active = make_active;
        }
        self.save()
    }

    /// Return the count of tasks not yet completed. Pure query.
    ///
    pub fn active_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.active).count()
    }

    /// Return whether the task is shown under the given filter.
    ///
    pub fn is_visible(task: &Task, filter: Filter) -> bool {
        match filter {
            Filter::All => true,
            Filter::Active => !task.active,
            Filter::Completed => task.active,
        }
    }

    /// Return the currently selected filter.
    ///
    pub fn current_filter(&self) -> Filter {
        self.current_filter
    }

    /// Select the given filter.
    ///
    pub fn set_filter(&mut self, filter: Filter) -> &mut Self {
        self.current_filter = filter;
        self
    }

    /// Cycle to the next filter.
    ///
    pub fn next_filter(&mut self) -> &mut Self {
        self.current_filter = self.current_filter.next();
        self
    }

    /// Return the tasks shown under the current filter, in insertion order.
    ///
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| TaskStore::is_visible(task, self.current_filter))
            .collect()
    }

    /// Return the index of the task with the given key or an explicit
    /// not-found error.
    ///
    fn find(&self, key: u64) -> Result<usize, StoreError> {
        self.tasks
            .iter()
            .position(|task| task.key == key)
            .ok_or(StoreError::TaskNotFound { key })
    }

    /// Return a fresh key derived from the creation timestamp, bumped past
    /// the largest existing key so same-millisecond adds stay unique.
    ///
    fn next_key(&self) -> u64 {
        let now = Utc::now().timestamp_millis() as u64;
        match self.tasks.iter().map(|task| task.key).max() {
            Some(max) => now.max(max + 1),
            None => now,
        }
    }

    /// Overwrite the data file with the full serialized collection.
    ///
    fn save(&self) -> Result<(), StoreError> {
        self.persist.save(&self.tasks)
    }
}
