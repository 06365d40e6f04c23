//! Task results and statuses.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{ParseTaskStatusError, TaskError};

/// Outcome category of a task execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// The task did its work.
    Success,
    /// The task did nothing, by policy or because no subtask succeeded.
    Skipped,
    /// The task or one of its descendants raised a fault.
    Fail,
}

impl TaskStatus {
    /// Returns the canonical report representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::Skipped => "SKIPPED",
            Self::Fail => "FAIL",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "SUCCESS" => Ok(Self::Success),
            "SKIPPED" => Ok(Self::Skipped),
            "FAIL" => Ok(Self::Fail),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable result of a task execution.
#[derive(Debug, Clone)]
pub struct TaskResult {
    status: TaskStatus,
    fail_cause: Option<TaskError>,
    attributes: BTreeMap<String, String>,
}

impl TaskResult {
    /// Attribute-free success result.
    pub const SUCCESS: Self = Self::of(TaskStatus::Success);

    /// Attribute-free skipped result.
    pub const SKIPPED: Self = Self::of(TaskStatus::Skipped);

    const fn of(status: TaskStatus) -> Self {
        Self {
            status,
            fail_cause: None,
            attributes: BTreeMap::new(),
        }
    }

    /// Creates a failed result carrying `cause`.
    #[must_use]
    pub const fn fail(cause: TaskError) -> Self {
        Self {
            status: TaskStatus::Fail,
            fail_cause: Some(cause),
            attributes: BTreeMap::new(),
        }
    }

    /// Starts building a result with attributes.
    #[must_use]
    pub const fn builder(status: TaskStatus) -> TaskResultBuilder {
        TaskResultBuilder {
            result: Self::of(status),
        }
    }

    /// Returns the result status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the fault that failed the task, if any.
    #[must_use]
    pub const fn fail_cause(&self) -> Option<&TaskError> {
        self.fail_cause.as_ref()
    }

    /// Returns the result attributes sorted by name.
    #[must_use]
    pub const fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    /// Returns `true` when the status is [`TaskStatus::Success`].
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == TaskStatus::Success
    }
}

/// Builder for results that carry attributes.
#[derive(Debug, Clone)]
pub struct TaskResultBuilder {
    result: TaskResult,
}

impl TaskResultBuilder {
    /// Sets the fault that failed the task and marks the status as failed.
    #[must_use]
    pub fn fail_cause(mut self, cause: TaskError) -> Self {
        self.result.status = TaskStatus::Fail;
        self.result.fail_cause = Some(cause);
        self
    }

    /// Adds a result attribute, replacing any previous value.
    #[must_use]
    pub fn attribute(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.result
            .attributes
            .insert(name.into(), value.to_string());
        self
    }

    /// Finishes the result.
    #[must_use]
    pub fn build(self) -> TaskResult {
        self.result
    }
}
