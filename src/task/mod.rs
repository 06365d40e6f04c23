//! Hierarchical task execution.
//!
//! A migration is a tree of tasks run strictly depth-first. Each run of a
//! task is recorded as an execution node holding its result and the nodes of
//! the subtasks it executed, and the finished tree is what the report
//! writers consume. The module follows hexagonal architecture:
//!
//! - Value types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The execution engine in [`services`]
//! - Task composition in [`builder`]

pub mod adapters;
pub mod builder;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
