//! Execution trees and reports shared by the report writer tests.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use mockable::DefaultClock;
use rstest::fixture;

use crate::report::domain::{MigrationReport, MigrationReportData, ServerDescriptor};
use crate::task::{
    adapters::memory::InMemoryEnvironment,
    domain::{TaskName, TaskOutcome, TaskResult},
    ports::{Environment, Task},
    services::{ExecutionNode, MigrationContext, TaskContext},
};

/// Task named `level-<depth>` that executes the next level until `deepest`.
pub struct ChainTask {
    name: TaskName,
    depth: usize,
    deepest: usize,
}

impl ChainTask {
    pub fn new(deepest: usize) -> Self {
        Self::at(1, deepest)
    }

    fn at(depth: usize, deepest: usize) -> Self {
        Self {
            name: TaskName::new(format!("level-{depth}")),
            depth,
            deepest,
        }
    }
}

impl Task for ChainTask {
    fn name(&self) -> Option<&TaskName> {
        Some(&self.name)
    }

    fn run(&self, context: &TaskContext<'_>) -> TaskOutcome {
        if self.depth < self.deepest {
            context.execute(Self::at(self.depth + 1, self.deepest))?;
        }
        Ok(TaskResult::SUCCESS)
    }
}

/// Task running a closure.
pub struct ScriptedTask<F> {
    name: TaskName,
    body: F,
}

impl<F> Task for ScriptedTask<F>
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

pub fn scripted<F>(name: &str, body: F) -> ScriptedTask<F>
where
    F: Fn(&TaskContext<'_>) -> TaskOutcome + Send + Sync,
{
    ScriptedTask {
        name: TaskName::new(name),
        body,
    }
}

#[fixture]
pub fn environment() -> InMemoryEnvironment {
    InMemoryEnvironment::new()
}

/// Runs `task` as a root, ignoring its outcome.
pub fn run(task: impl Task + 'static, environment: &InMemoryEnvironment) -> Arc<ExecutionNode> {
    let context = MigrationContext::new(Arc::new(environment.clone()), Arc::new(DefaultClock));
    let root = ExecutionNode::root(Arc::new(task), context).expect("root task should be named");
    let _outcome = root.run();
    root
}

/// Runs `task` and wraps the tree in a report with fixed metadata.
pub fn report_for(task: impl Task + 'static, environment: &InMemoryEnvironment) -> MigrationReport {
    let root = run(task, environment);
    MigrationReport::new(MigrationReportData {
        root,
        start_time: Utc
            .with_ymd_and_hms(2026, 1, 2, 3, 4, 5)
            .single()
            .expect("valid timestamp"),
        source: ServerDescriptor::new("WildFly", "26.1", "/opt/source"),
        target: ServerDescriptor::new("WildFly", "31.0", "/opt/target"),
        environment: environment.properties_read(),
    })
}

/// Returns the node at `path` of child indices below `root`.
pub fn node_at(root: &Arc<ExecutionNode>, path: &[usize]) -> Arc<ExecutionNode> {
    path.iter().fold(Arc::clone(root), |node, index| {
        node.children()
            .get(*index)
            .cloned()
            .expect("child index should exist")
    })
}
