//! Per-node log channels.

use std::fmt;

use tracing::Span;

use crate::task::domain::TaskName;

/// Log channel owned by one execution node.
///
/// Every event is emitted inside the node's span and tagged with the
/// generated channel name, so subscribers can filter a single task's output.
#[derive(Debug, Clone)]
pub struct TaskLogger {
    name: String,
    span: Span,
}

impl TaskLogger {
    pub(crate) fn new(name: String, task: &TaskName, number: u64) -> Self {
        let span = tracing::info_span!("task", logger = %name, task = %task, number);
        Self { name, span }
    }

    /// Returns the channel name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the span events are emitted in.
    #[must_use]
    pub const fn span(&self) -> &Span {
        &self.span
    }

    /// Emits a debug event.
    pub fn debug(&self, message: impl fmt::Display) {
        self.span
            .in_scope(|| tracing::debug!(logger = %self.name, "{message}"));
    }

    /// Emits an info event.
    pub fn info(&self, message: impl fmt::Display) {
        self.span
            .in_scope(|| tracing::info!(logger = %self.name, "{message}"));
    }

    /// Emits a warning event.
    pub fn warn(&self, message: impl fmt::Display) {
        self.span
            .in_scope(|| tracing::warn!(logger = %self.name, "{message}"));
    }

    /// Emits an error event.
    pub fn error(&self, message: impl fmt::Display) {
        self.span
            .in_scope(|| tracing::error!(logger = %self.name, "{message}"));
    }
}
