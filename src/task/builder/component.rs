//! Tasks assembled from builder rules.

use super::{Runnable, SubtaskFactory, TaskParams, TaskRules, skip};
use crate::task::{
    domain::{TaskName, TaskOutcome, TaskResult},
    ports::Task,
    services::TaskContext,
};

/// Body of a component task.
pub(crate) enum TaskBody<P> {
    /// A single unit of work; a leaf without one does nothing and skips.
    Leaf(Option<Runnable<P>>),
    /// Ordered subtask factories.
    Composite(Vec<SubtaskFactory<P>>),
}

/// Task built by [`super::LeafTaskBuilder`] or
/// [`super::CompositeTaskBuilder`].
///
/// Running it evaluates the skip policy, the before hook, the body and the
/// after hook in that order. Any fault aborts the remaining steps.
pub struct ComponentTask<P> {
    name: Option<TaskName>,
    params: P,
    rules: TaskRules<P>,
    body: TaskBody<P>,
}

impl<P: TaskParams> ComponentTask<P> {
    pub(crate) fn new(params: P, rules: TaskRules<P>, body: TaskBody<P>) -> Self {
        Self {
            name: rules.name_for(&params),
            params,
            rules,
            body,
        }
    }

    /// Returns the parameters the task was built with.
    #[must_use]
    pub const fn params(&self) -> &P {
        &self.params
    }

    fn is_skipped(&self, context: &TaskContext<'_>) -> bool {
        match &self.rules.skip {
            Some(policy) => policy(&self.params, context),
            None => skip::is_skipped_by_property(context),
        }
    }

    fn run_body(&self, context: &TaskContext<'_>) -> TaskOutcome {
        match &self.body {
            TaskBody::Leaf(Some(runnable)) => runnable(&self.params, context),
            TaskBody::Leaf(None) => Ok(TaskResult::SKIPPED),
            TaskBody::Composite(factories) => {
                for factory in factories {
                    factory(&self.params, context)?;
                }
                if context.has_successful_subtasks() {
                    Ok(TaskResult::SUCCESS)
                } else {
                    Ok(TaskResult::SKIPPED)
                }
            }
        }
    }
}

impl<P: TaskParams> Task for ComponentTask<P> {
    fn name(&self) -> Option<&TaskName> {
        self.name.as_ref()
    }

    fn run(&self, context: &TaskContext<'_>) -> TaskOutcome {
        if self.is_skipped(context) {
            context.logger().debug("task skipped by policy");
            return Ok(TaskResult::SKIPPED);
        }
        if let Some(hook) = &self.rules.before {
            hook(&self.params, context)?;
        }
        let result = self.run_body(context)?;
        if let Some(hook) = &self.rules.after {
            hook(&self.params, context)?;
        }
        Ok(result)
    }
}
