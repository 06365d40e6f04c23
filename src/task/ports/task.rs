//! Contract implemented by every unit of migration work.

use std::sync::Arc;

use crate::task::{
    domain::{TaskName, TaskOutcome},
    services::TaskContext,
};

/// A named unit of work producing a [`crate::task::domain::TaskResult`].
///
/// Tasks are run by an execution node, which hands them a [`TaskContext`]
/// scoped to that node. A task spawns subtasks through the context; each
/// subtask runs to completion before `execute` returns.
pub trait Task: Send + Sync {
    /// Returns the task identity.
    ///
    /// A task without a name cannot be executed; the engine rejects it with
    /// [`crate::task::domain::TaskError::UnnamedTask`].
    fn name(&self) -> Option<&TaskName>;

    /// Runs the task.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::task::domain::TaskError`] when the task, or one
    /// of the subtasks it executed, fails.
    fn run(&self, context: &TaskContext<'_>) -> TaskOutcome;
}

impl<T: Task + ?Sized> Task for Arc<T> {
    fn name(&self) -> Option<&TaskName> {
        (**self).name()
    }

    fn run(&self, context: &TaskContext<'_>) -> TaskOutcome {
        (**self).run(context)
    }
}

impl<T: Task + ?Sized> Task for Box<T> {
    fn name(&self) -> Option<&TaskName> {
        (**self).name()
    }

    fn run(&self, context: &TaskContext<'_>) -> TaskOutcome {
        (**self).run(context)
    }
}
