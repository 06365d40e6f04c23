//! Value types for task execution.
//!
//! Names, paths and results are immutable once built; the execution tree in
//! [`crate::task::services`] is the only place they are assembled.

mod error;
mod name;
mod path;
mod result;

pub use error::{MigrationFailure, ParseTaskStatusError, TaskError, TaskOutcome};
pub use name::TaskName;
pub use path::TaskPath;
pub use result::{TaskResult, TaskResultBuilder, TaskStatus};
