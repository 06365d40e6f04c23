//! Task execution services.
//!
//! [`ExecutionNode`] runs tasks depth-first and records the resulting tree;
//! [`TaskContext`] is the handle a running task uses to execute subtasks.

mod context;
mod execution;
mod logger;

pub use context::{MigrationContext, TaskContext};
pub use execution::{ExecutionNode, LOGGER_NAME_PREFIX};
pub use logger::TaskLogger;
