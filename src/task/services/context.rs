//! Handles passed to running tasks.

use std::sync::Arc;

use mockable::Clock;

use super::{ExecutionNode, TaskLogger};
use crate::task::{
    domain::{TaskName, TaskOutcome},
    ports::{Environment, Task},
};

/// Collaborators shared by every node of one migration run.
#[derive(Clone)]
pub struct MigrationContext {
    environment: Arc<dyn Environment>,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl MigrationContext {
    /// Creates a run context.
    #[must_use]
    pub fn new(environment: Arc<dyn Environment>, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self { environment, clock }
    }

    /// Returns the environment tasks read their properties from.
    #[must_use]
    pub fn environment(&self) -> &dyn Environment {
        &*self.environment
    }

    /// Returns the clock used for start times.
    #[must_use]
    pub fn clock(&self) -> &(dyn Clock + Send + Sync) {
        &*self.clock
    }
}

/// Execution handle given to a running task.
///
/// The handle is scoped to the node running the task; subtasks executed
/// through it become that node's children.
pub struct TaskContext<'a> {
    node: &'a Arc<ExecutionNode>,
}

impl<'a> TaskContext<'a> {
    pub(crate) const fn new(node: &'a Arc<ExecutionNode>) -> Self {
        Self { node }
    }

    /// Executes a subtask synchronously and returns its result.
    ///
    /// # Errors
    ///
    /// Returns the subtask's fault unchanged, or
    /// [`crate::task::domain::TaskError::UnnamedTask`] when the subtask has
    /// no name.
    pub fn execute(&self, task: impl Task + 'static) -> TaskOutcome {
        self.node.execute(Arc::new(task))
    }

    /// Executes an ad-hoc leaf subtask built from a name and a closure.
    ///
    /// # Errors
    ///
    /// Returns the fault raised by `body` unchanged.
    pub fn execute_fn<F>(&self, name: impl Into<TaskName>, body: F) -> TaskOutcome
    where
        F: Fn(&TaskContext<'_>) -> TaskOutcome + Send + Sync + 'static,
    {
        self.execute(FnTask {
            name: name.into(),
            body,
        })
    }

    /// Returns `true` if any subtask executed so far succeeded.
    #[must_use]
    pub fn has_successful_subtasks(&self) -> bool {
        self.node.has_successful_subtasks()
    }

    /// Returns the execution record of the task owning this handle.
    ///
    /// It is the parent of every subtask executed through the handle.
    #[must_use]
    pub const fn parent_task(&self) -> &Arc<ExecutionNode> {
        self.node
    }

    /// Returns the subtasks executed so far, in execution order.
    #[must_use]
    pub fn subtasks(&self) -> Vec<Arc<ExecutionNode>> {
        self.node.children()
    }

    /// Returns the log channel of the running task.
    #[must_use]
    pub fn logger(&self) -> &TaskLogger {
        self.node.logger()
    }

    /// Returns the name of the running task.
    #[must_use]
    pub fn task_name(&self) -> &TaskName {
        self.node.name()
    }

    /// Returns the migration environment.
    #[must_use]
    pub fn environment(&self) -> &dyn Environment {
        self.node.migration_context().environment()
    }
}

struct FnTask<F> {
    name: TaskName,
    body: F,
}

impl<F> Task for FnTask<F>
where
    F: Fn(&TaskContext<'_>) -> TaskOutcome + Send + Sync,
{
    fn name(&self) -> Option<&TaskName> {
        Some(&self.name)
    }

    fn run(&self, context: &TaskContext<'_>) -> TaskOutcome {
        (self.body)(context)
    }
}
