//! Core domain errors.

use thiserror::Error;

use crate::TaskStatus;

/// Core domain errors for TaskBoard.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A move referenced a source slot that holds no task.
    #[error("No task found at index {index} of column {status}")]
    TaskNotFoundAtIndex { status: TaskStatus, index: usize },

    /// A status name did not match any board column.
    #[error("Unknown task status: {0}")]
    UnknownStatus(String),
}
