//! Backend

use crate::storage::Storage;
use crate::task::Task;
use std::cell::RefCell;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// JSON file storage backend.
///
/// The task list is stored as a pretty-printed JSON array of
/// `{description, done}` records. Non-ASCII text round-trips intact.
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    /// Create a backend for the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for JsonFileBackend {
    fn load(&self) -> crate::Result<Vec<Task>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let tasks = serde_json::from_str(&content)?;
        Ok(tasks)
    }

    fn save(&self, tasks: &[Task]) -> crate::Result<()> {
        let json = serde_json::to_vec_pretty(tasks)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-memory storage backend (non-persistent)
pub struct MemoryBackend {
    tasks: RefCell<Vec<Task>>,
}

impl MemoryBackend {
    /// Create a new in-memory storage backend
    pub fn new() -> Self {
        Self {
            tasks: RefCell::new(Vec::new()),
        }
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for MemoryBackend {
    fn load(&self) -> crate::Result<Vec<Task>> {
        Ok(self.tasks.borrow().clone())
    }

    fn save(&self, tasks: &[Task]) -> crate::Result<()> {
        *self.tasks.borrow_mut() = tasks.to_vec();
        Ok(())
    }
}
