use serde::{Deserialize, Serialize};

use crate::TodoError;

/// A single to-do entry: a description and a completion flag.
///
/// This is exactly the record shape persisted to disk. `done` defaults to
/// `false` so records written without the flag still load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// What needs to be done, never empty or whitespace-only
    pub description: String,

    /// Whether the task has been completed
    #[serde(default)]
    pub done: bool,
}

impl Task {
    /// Create a new pending task from the given description.
    ///
    /// Surrounding whitespace is stripped. Fails if the stripped
    /// description is empty.
    pub fn new(description: &str) -> crate::Result<Self> {
        let description = description.trim();
        if description.is_empty() {
            return Err(TodoError::EmptyDescription);
        }

        Ok(Self {
            description: description.to_string(),
            done: false,
        })
    }

    /// Mark the task as done.
    ///
    /// Returns `false` if the task was already done (no state change).
    pub fn mark_done(&mut self) -> bool {
        if self.done {
            return false;
        }
        self.done = true;
        true
    }

    /// Status icon used when rendering the task list
    pub fn status_icon(&self) -> &'static str {
        if self.done {
            "✔️"
        } else {
            "❌"
        }
    }
}
