//! Server migration: hierarchical task execution with run reports.
//!
//! A migration is expressed as a tree of named tasks. The engine runs the
//! tree strictly depth-first, records every task run with its sequence
//! number, result and children, and hands the finished tree to report
//! writers that produce a plain-text summary, an XML document and an HTML
//! page.
//!
//! # Architecture
//!
//! Modules follow hexagonal architecture principles:
//!
//! - **Domain**: Value types with no infrastructure dependencies
//! - **Ports**: Trait interfaces for tasks, environments and report writers
//! - **Adapters**: Concrete implementations of ports
//! - **Services**: The execution engine and the report writers
//!
//! # Modules
//!
//! - [`task`]: Task execution engine and task composition builders
//! - [`report`]: Summary, XML and HTML reports over a finished run
//! - [`migration`]: Runs a root task and emits its reports

pub mod migration;
pub mod report;
pub mod task;
