//! Fault and parse error types for the task execution domain.

use std::sync::Arc;
use thiserror::Error;

use super::TaskName;

/// Result type produced by running a task.
pub type TaskOutcome = Result<super::TaskResult, TaskError>;

/// Faults raised while executing a task tree.
///
/// Every fault is recorded on the failing node as the cause of a
/// [`super::TaskStatus::Fail`] result and then propagated unchanged, which
/// is why the type is cheap to clone.
#[derive(Debug, Clone, Error)]
pub enum TaskError {
    /// Structured domain failure raised by a migration task.
    #[error(transparent)]
    Migration(#[from] MigrationFailure),

    /// Any other error escaping a task.
    #[error("unexpected failure: {0}")]
    Unexpected(Arc<dyn std::error::Error + Send + Sync>),

    /// The task panicked; the unwind is resumed after recording it.
    #[error("task panicked: {0}")]
    Panicked(String),

    /// `run` was invoked more than once on the same execution node.
    #[error("task execution #{number} ({name}) already started")]
    AlreadyStarted {
        /// Sequence number of the node.
        number: u64,
        /// Name of the node's task.
        name: TaskName,
    },

    /// A subtask was submitted after the node's result was recorded.
    #[error("task {0} already completed, subtasks can no longer be executed")]
    ResultAlreadySet(TaskName),

    /// A task without a name was submitted for execution.
    #[error("task to execute has no name")]
    UnnamedTask,
}

impl TaskError {
    /// Wraps an arbitrary error as an unexpected fault.
    pub fn unexpected(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unexpected(Arc::new(err))
    }

    /// Creates a structured migration failure from a message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Migration(MigrationFailure::new(message))
    }
}

/// Structured failure raised by a migration task.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct MigrationFailure {
    message: String,
    cause: Option<Arc<dyn std::error::Error + Send + Sync>>,
}

impl MigrationFailure {
    /// Creates a failure with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Attaches the underlying error that caused the failure.
    #[must_use]
    pub fn with_cause(mut self, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.cause = Some(Arc::new(cause));
        self
    }

    /// Returns the failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the underlying error, if any.
    #[must_use]
    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync)> {
        self.cause.as_deref()
    }
}

/// Error returned while parsing task statuses from their string form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
