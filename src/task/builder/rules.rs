//! Rule set shared by every component task builder.

use std::sync::Arc;

use crate::task::{
    domain::{TaskError, TaskName, TaskOutcome},
    services::TaskContext,
};

/// Bound satisfied by the parameters a component task is built with.
///
/// Parameters are cloned into every subtask built from a composite, so they
/// are usually small values or shared handles.
pub trait TaskParams: Clone + Send + Sync + 'static {}

impl<T: Clone + Send + Sync + 'static> TaskParams for T {}

/// Computes a task name from build parameters.
pub type NameRule<P> = Arc<dyn Fn(&P) -> TaskName + Send + Sync>;

/// Decides whether a task is skipped.
pub type SkipRule<P> = Arc<dyn Fn(&P, &TaskContext<'_>) -> bool + Send + Sync>;

/// Runs before or after a task body.
pub type TaskHook<P> = Arc<dyn Fn(&P, &TaskContext<'_>) -> Result<(), TaskError> + Send + Sync>;

/// Body of a leaf task.
pub type Runnable<P> = Arc<dyn Fn(&P, &TaskContext<'_>) -> TaskOutcome + Send + Sync>;

/// One step of a composite task, executing zero or more subtasks.
pub type SubtaskFactory<P> =
    Arc<dyn Fn(&P, &TaskContext<'_>) -> Result<(), TaskError> + Send + Sync>;

/// Name, skip and hook rules of a component task.
pub struct TaskRules<P> {
    pub(crate) name: Option<NameRule<P>>,
    pub(crate) skip: Option<SkipRule<P>>,
    pub(crate) before: Option<TaskHook<P>>,
    pub(crate) after: Option<TaskHook<P>>,
}

impl<P> TaskRules<P> {
    pub(crate) const fn new() -> Self {
        Self {
            name: None,
            skip: None,
            before: None,
            after: None,
        }
    }

    pub(crate) fn name_for(&self, params: &P) -> Option<TaskName> {
        self.name.as_ref().map(|rule| rule(params))
    }
}

impl<P> Clone for TaskRules<P> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            skip: self.skip.clone(),
            before: self.before.clone(),
            after: self.after.clone(),
        }
    }
}

impl<P> Default for TaskRules<P> {
    fn default() -> Self {
        Self::new()
    }
}

/// Rule configuration shared by the leaf and composite builders.
pub trait ConfigureTask<P: TaskParams>: Sized {
    /// Gives access to the builder's rule set.
    fn rules_mut(&mut self) -> &mut TaskRules<P>;

    /// Names every built task `name`.
    #[must_use]
    fn with_name(self, name: impl Into<TaskName>) -> Self {
        let fixed: TaskName = name.into();
        self.with_name_rule(move |_: &P| fixed.clone())
    }

    /// Names built tasks from their parameters.
    #[must_use]
    fn with_name_rule(mut self, rule: impl Fn(&P) -> TaskName + Send + Sync + 'static) -> Self {
        self.rules_mut().name = Some(Arc::new(rule));
        self
    }

    /// Replaces the default skip policy.
    #[must_use]
    fn with_skip_policy(mut self, policy: SkipRule<P>) -> Self {
        self.rules_mut().skip = Some(policy);
        self
    }

    /// Replaces the default skip policy with a predicate.
    #[must_use]
    fn with_skip_when(
        self,
        predicate: impl Fn(&P, &TaskContext<'_>) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.with_skip_policy(Arc::new(predicate))
    }

    /// Runs `hook` before the body of a non-skipped task.
    #[must_use]
    fn with_before_hook(
        mut self,
        hook: impl Fn(&P, &TaskContext<'_>) -> Result<(), TaskError> + Send + Sync + 'static,
    ) -> Self {
        self.rules_mut().before = Some(Arc::new(hook));
        self
    }

    /// Runs `hook` after the body completed without a fault.
    #[must_use]
    fn with_after_hook(
        mut self,
        hook: impl Fn(&P, &TaskContext<'_>) -> Result<(), TaskError> + Send + Sync + 'static,
    ) -> Self {
        self.rules_mut().after = Some(Arc::new(hook));
        self
    }
}
