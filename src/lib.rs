//! Todo CLI RS - A persistent command-line to-do list manager
//!
//! This library provides an ordered task list with JSON file persistence.
//! Every mutation is written back to disk before the operation returns, so
//! the file always reflects the last successful change.

/// Configuration management for the to-do list
pub mod config;
/// Storage backend implementations
pub mod storage;
/// The persistent task store
pub mod store;
/// Task definitions
pub mod task;

pub use config::Config;
pub use storage::backend::JsonFileBackend;
pub use store::{MarkOutcome, TaskCounts, TaskStore};
pub use task::Task;

use thiserror::Error;

/// Result type for to-do list operations
pub type Result<T> = std::result::Result<T, TodoError>;

/// Error types for the to-do list
#[derive(Error, Debug)]
pub enum TodoError {
    /// Task description was empty or whitespace-only
    #[error("Task description cannot be empty")]
    EmptyDescription,

    /// The task list is empty, nothing to mark as done
    #[error("No tasks available to mark as done")]
    NoTasksToMark,

    /// The task list is empty, nothing to remove
    #[error("No tasks available to remove")]
    NoTasksToRemove,

    /// A 1-based task index was outside the valid range
    #[error("Invalid task index. Please choose a number between 1 and {0}")]
    InvalidIndex(usize),

    /// Reading or writing the tasks file failed
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
