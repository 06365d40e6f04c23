//! Skip policies.
//!
//! A policy is evaluated before anything else when a component task runs.
//! Tasks without an explicit policy use [`by_task_name_property`].

use std::sync::Arc;

use super::{SkipRule, TaskParams};
use crate::task::{domain::TaskName, services::TaskContext};

/// Suffix appended to a task name to form its skip property.
pub const SKIP_PROPERTY_SUFFIX: &str = ".skip";

/// Returns the environment property that skips tasks named `name`.
#[must_use]
pub fn skip_property_name(name: &TaskName) -> String {
    format!("{}{SKIP_PROPERTY_SUFFIX}", name.name())
}

/// Returns `true` when the running task's `<name>.skip` property is true.
#[must_use]
pub fn is_skipped_by_property(context: &TaskContext<'_>) -> bool {
    context
        .environment()
        .property_as_boolean(&skip_property_name(context.task_name()))
        .unwrap_or(false)
}

/// Default policy: skip when the `<task-name>.skip` property is true.
#[must_use]
pub fn by_task_name_property<P: TaskParams>() -> SkipRule<P> {
    Arc::new(|_: &P, context: &TaskContext<'_>| is_skipped_by_property(context))
}

/// Never skips.
#[must_use]
pub fn never<P: TaskParams>() -> SkipRule<P> {
    Arc::new(|_: &P, _: &TaskContext<'_>| false)
}

/// Skips when the named boolean property is true.
#[must_use]
pub fn by_property<P: TaskParams>(property: impl Into<String>) -> SkipRule<P> {
    let name: String = property.into();
    Arc::new(move |_: &P, context: &TaskContext<'_>| {
        context
            .environment()
            .property_as_boolean(&name)
            .unwrap_or(false)
    })
}

/// Skips when any of `policies` skips; policies are evaluated in order.
#[must_use]
pub fn any_of<P: TaskParams>(policies: Vec<SkipRule<P>>) -> SkipRule<P> {
    Arc::new(move |params: &P, context: &TaskContext<'_>| {
        policies.iter().any(|policy| policy(params, context))
    })
}
