/// Backend implementations
pub mod backend;

use crate::task::Task;

/// Trait for storage backend implementations.
///
/// Backends persist the full task list as a unit: `save` always replaces
/// the previous contents, it never appends.
pub trait Storage {
    /// Load the full task list from storage.
    ///
    /// A missing file is not an error and yields an empty list; unreadable
    /// or malformed content is an error the caller may degrade from.
    fn load(&self) -> crate::Result<Vec<Task>>;

    /// Persist the full task list, overwriting previous contents
    fn save(&self, tasks: &[Task]) -> crate::Result<()>;
}
