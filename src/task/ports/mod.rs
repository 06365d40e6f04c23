//! Port contracts for task execution.
//!
//! Ports define the interfaces the engine consumes: the tasks it runs and
//! the environment those tasks read their properties from.

pub mod environment;
pub mod task;

pub use environment::Environment;
pub use task::Task;
