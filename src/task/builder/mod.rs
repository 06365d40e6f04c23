//! Composition layer: tasks assembled from name, skip, hook and body rules.
//!
//! There is one concrete builder per task kind, [`LeafTaskBuilder`] and
//! [`CompositeTaskBuilder`]. Both share the rule set configured through
//! [`ConfigureTask`] and produce [`ComponentTask`]s through [`BuildTask`].
//! Unless a skip policy is set, a task is skipped when the environment
//! property `<task-name>.skip` is true.

mod component;
mod composite;
mod leaf;
mod rules;
pub mod skip;

pub use component::ComponentTask;
pub use composite::CompositeTaskBuilder;
pub use leaf::LeafTaskBuilder;
pub use rules::{
    ConfigureTask, NameRule, Runnable, SkipRule, SubtaskFactory, TaskHook, TaskParams, TaskRules,
};

/// Produces tasks from build parameters.
pub trait BuildTask<P: TaskParams>: Send + Sync {
    /// Builds a task for `params`.
    fn build(&self, params: P) -> ComponentTask<P>;
}
