//! Builder for tasks with a single unit of work.

use std::sync::Arc;

use super::{
    BuildTask, ComponentTask, ConfigureTask, Runnable, TaskParams, TaskRules,
    component::TaskBody,
};
use crate::task::{
    domain::{TaskName, TaskOutcome},
    services::TaskContext,
};

/// Builds [`ComponentTask`]s whose body is one runnable.
pub struct LeafTaskBuilder<P> {
    rules: TaskRules<P>,
    runnable: Option<Runnable<P>>,
}

impl<P: TaskParams> LeafTaskBuilder<P> {
    /// Creates a builder without rules.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rules: TaskRules::new(),
            runnable: None,
        }
    }

    /// Creates a builder naming its tasks `name`.
    #[must_use]
    pub fn named(name: impl Into<TaskName>) -> Self {
        Self::new().with_name(name)
    }

    /// Sets the unit of work.
    #[must_use]
    pub fn with_runnable(
        mut self,
        runnable: impl Fn(&P, &TaskContext<'_>) -> TaskOutcome + Send + Sync + 'static,
    ) -> Self {
        self.runnable = Some(Arc::new(runnable));
        self
    }
}

impl<P: TaskParams> Default for LeafTaskBuilder<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Clone for LeafTaskBuilder<P> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
            runnable: self.runnable.clone(),
        }
    }
}

impl<P: TaskParams> ConfigureTask<P> for LeafTaskBuilder<P> {
    fn rules_mut(&mut self) -> &mut TaskRules<P> {
        &mut self.rules
    }
}

impl<P: TaskParams> BuildTask<P> for LeafTaskBuilder<P> {
    fn build(&self, params: P) -> ComponentTask<P> {
        ComponentTask::new(
            params,
            self.rules.clone(),
            TaskBody::Leaf(self.runnable.clone()),
        )
    }
}
