//! Builder for tasks aggregating subtasks.

use std::sync::Arc;

use super::{
    BuildTask, ComponentTask, ConfigureTask, SubtaskFactory, TaskParams, TaskRules,
    component::TaskBody,
};
use crate::task::{
    domain::{TaskError, TaskName},
    ports::Task,
    services::TaskContext,
};

/// Builds [`ComponentTask`]s whose body is an ordered list of subtask
/// factories.
///
/// The built task succeeds when at least one subtask succeeded and skips
/// otherwise. A failing subtask aborts the remaining factories.
///
/// Cloning yields an independent builder, so a partially configured builder
/// works as a template:
///
/// ```
/// use server_migration::task::builder::{
///     BuildTask, CompositeTaskBuilder, ConfigureTask, LeafTaskBuilder,
/// };
/// use server_migration::task::domain::TaskResult;
///
/// let logging = LeafTaskBuilder::<()>::named("logging")
///     .with_runnable(|_, _| Ok(TaskResult::SUCCESS));
/// let security = LeafTaskBuilder::<()>::named("security")
///     .with_runnable(|_, _| Ok(TaskResult::SKIPPED));
///
/// let template = CompositeTaskBuilder::<()>::named("subsystems").with_subtask(logging);
/// let extended = template.clone().with_subtask(security);
///
/// assert_eq!(template.subtask_count(), 1);
/// assert_eq!(extended.subtask_count(), 2);
/// ```
pub struct CompositeTaskBuilder<P> {
    rules: TaskRules<P>,
    subtasks: Vec<SubtaskFactory<P>>,
}

impl<P: TaskParams> CompositeTaskBuilder<P> {
    /// Creates a builder without rules or subtasks.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rules: TaskRules::new(),
            subtasks: Vec::new(),
        }
    }

    /// Creates a builder naming its tasks `name`.
    #[must_use]
    pub fn named(name: impl Into<TaskName>) -> Self {
        Self::new().with_name(name)
    }

    /// Appends a subtask factory.
    #[must_use]
    pub fn with_subtask_factory(
        mut self,
        factory: impl Fn(&P, &TaskContext<'_>) -> Result<(), TaskError> + Send + Sync + 'static,
    ) -> Self {
        self.subtasks.push(Arc::new(factory));
        self
    }

    /// Appends a subtask built from `builder` with the composite's
    /// parameters.
    #[must_use]
    pub fn with_subtask(self, builder: impl BuildTask<P> + 'static) -> Self {
        self.with_subtask_factory(move |params, context| {
            context.execute(builder.build(params.clone()))?;
            Ok(())
        })
    }

    /// Appends a subtask whose parameters are derived from the composite's.
    #[must_use]
    pub fn with_mapped_subtask<Q: TaskParams>(
        self,
        builder: impl BuildTask<Q> + 'static,
        map: impl Fn(&P) -> Q + Send + Sync + 'static,
    ) -> Self {
        self.with_subtask_factory(move |params, context| {
            context.execute(builder.build(map(params)))?;
            Ok(())
        })
    }

    /// Appends a ready-made task, executed once per composite run.
    #[must_use]
    pub fn with_task(self, task: Arc<dyn Task>) -> Self {
        self.with_subtask_factory(move |_, context| {
            context.execute(Arc::clone(&task))?;
            Ok(())
        })
    }

    /// Returns the number of registered subtask factories.
    #[must_use]
    pub fn subtask_count(&self) -> usize {
        self.subtasks.len()
    }
}

impl<P: TaskParams> Default for CompositeTaskBuilder<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Clone for CompositeTaskBuilder<P> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
            subtasks: self.subtasks.clone(),
        }
    }
}

impl<P: TaskParams> ConfigureTask<P> for CompositeTaskBuilder<P> {
    fn rules_mut(&mut self) -> &mut TaskRules<P> {
        &mut self.rules
    }
}

impl<P: TaskParams> BuildTask<P> for CompositeTaskBuilder<P> {
    fn build(&self, params: P) -> ComponentTask<P> {
        ComponentTask::new(
            params,
            self.rules.clone(),
            TaskBody::Composite(self.subtasks.clone()),
        )
    }
}
