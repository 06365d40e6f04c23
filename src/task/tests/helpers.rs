//! Shared fixtures for task execution tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;

use crate::task::{
    adapters::memory::InMemoryEnvironment,
    domain::{TaskName, TaskOutcome, TaskResult},
    ports::{Environment, Task},
    services::{ExecutionNode, MigrationContext, TaskContext},
};

/// Provides an empty in-memory environment.
#[fixture]
pub fn environment() -> InMemoryEnvironment {
    InMemoryEnvironment::new()
}

/// Builds a run context over `environment` with the system clock.
pub fn context_for(environment: impl Environment + 'static) -> MigrationContext {
    MigrationContext::new(Arc::new(environment), Arc::new(DefaultClock))
}

/// Creates and runs a root node, returning the node and its outcome.
pub fn run_root(
    task: impl Task + 'static,
    environment: impl Environment + 'static,
) -> (Arc<ExecutionNode>, TaskOutcome) {
    let root = ExecutionNode::root(Arc::new(task), context_for(environment))
        .expect("root task should be named");
    let outcome = root.run();
    (root, outcome)
}

/// Task returning a fixed result.
pub struct FixedTask {
    name: TaskName,
    result: TaskResult,
}

impl FixedTask {
    pub fn new(name: &str, result: TaskResult) -> Self {
        Self {
            name: TaskName::new(name),
            result,
        }
    }
}

impl Task for FixedTask {
    fn name(&self) -> Option<&TaskName> {
        Some(&self.name)
    }

    fn run(&self, _context: &TaskContext<'_>) -> TaskOutcome {
        Ok(self.result.clone())
    }
}

/// Task without a name.
pub struct UnnamedTask;

impl Task for UnnamedTask {
    fn name(&self) -> Option<&TaskName> {
        None
    }

    fn run(&self, _context: &TaskContext<'_>) -> TaskOutcome {
        Ok(TaskResult::SUCCESS)
    }
}
