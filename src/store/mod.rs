//! Persistent task store

use crate::storage::backend::JsonFileBackend;
use crate::storage::Storage;
use crate::task::Task;
use crate::TodoError;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Counts of tasks by completion state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskCounts {
    /// Number of tasks in the list
    pub total: usize,
    /// Number of tasks marked done
    pub completed: usize,
    /// Number of tasks not yet done
    pub pending: usize,
}

/// Outcome of marking a task as done
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkOutcome {
    /// The task was newly marked as done; carries its description
    Marked(String),
    /// The task was already done; nothing changed or was persisted
    AlreadyDone(String),
}

/// An ordered task list with write-through persistence.
///
/// The list is loaded once at construction and flushed to the backend after
/// every mutation. Tasks are addressed by 1-based position in the list;
/// removing a task shifts the positions of all later tasks down by one.
pub struct TaskStore<S: Storage> {
    storage: S,
    tasks: Vec<Task>,
}

impl TaskStore<JsonFileBackend> {
    /// Open a store backed by a JSON file at the given path.
    ///
    /// A missing file starts the store empty. Unreadable or malformed
    /// content also starts the store empty, with a warning, so a corrupted
    /// file never blocks startup.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::with_storage(JsonFileBackend::new(path))
    }
}

impl<S: Storage> TaskStore<S> {
    /// Create a store over the given backend, loading its current contents
    pub fn with_storage(storage: S) -> Self {
        let tasks = match storage.load() {
            Ok(tasks) => tasks,
            Err(e) => {
                warn!("Could not load tasks: {}", e);
                Vec::new()
            }
        };

        debug!("Loaded {} task(s)", tasks.len());
        Self { storage, tasks }
    }

    /// Add a new task to the end of the list and persist.
    ///
    /// Fails if the description is empty after stripping whitespace, or if
    /// the save fails. Returns the stored task.
    pub fn add_task(&mut self, description: &str) -> crate::Result<&Task> {
        let task = Task::new(description)?;
        let slot = self.tasks.len();
        self.tasks.push(task);
        self.save()?;
        Ok(&self.tasks[slot])
    }

    /// Mark the task at a 1-based index as done and persist.
    ///
    /// An already-done task is reported as [`MarkOutcome::AlreadyDone`]
    /// without mutating or saving, so repeated calls never toggle the flag
    /// back.
    pub fn mark_task_done(&mut self, index: usize) -> crate::Result<MarkOutcome> {
        let slot = self.checked_index(index, TodoError::NoTasksToMark)?;

        if !self.tasks[slot].mark_done() {
            return Ok(MarkOutcome::AlreadyDone(
                self.tasks[slot].description.clone(),
            ));
        }

        self.save()?;
        Ok(MarkOutcome::Marked(self.tasks[slot].description.clone()))
    }

    /// Remove the task at a 1-based index and persist.
    ///
    /// Later tasks shift down by one position. Returns the removed task.
    pub fn remove_task(&mut self, index: usize) -> crate::Result<Task> {
        let slot = self.checked_index(index, TodoError::NoTasksToRemove)?;
        let removed = self.tasks.remove(slot);
        self.save()?;
        Ok(removed)
    }

    /// Count total, completed, and pending tasks
    pub fn task_counts(&self) -> TaskCounts {
        let total = self.tasks.len();
        let completed = self.tasks.iter().filter(|task| task.done).count();

        TaskCounts {
            total,
            completed,
            pending: total - completed,
        }
    }

    /// All tasks in display order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks in the list
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Convert a 1-based index into a list position, or fail.
    ///
    /// `on_empty` is returned when the list has no tasks at all, so callers
    /// can report that case distinctly from an out-of-range index.
    fn checked_index(&self, index: usize, on_empty: TodoError) -> crate::Result<usize> {
        if self.tasks.is_empty() {
            return Err(on_empty);
        }

        if index < 1 || index > self.tasks.len() {
            return Err(TodoError::InvalidIndex(self.tasks.len()));
        }

        Ok(index - 1)
    }

    fn save(&self) -> crate::Result<()> {
        self.storage.save(&self.tasks)
    }
}
