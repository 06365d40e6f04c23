//! Running a whole migration and producing its reports.
//!
//! [`ServerMigration`] executes a root task through the task engine, then
//! hands the finished tree to the report writers: the summary is logged and
//! the XML and HTML documents are written to the report directory.

mod error;
mod service;

pub use error::MigrationError;
pub use service::{MigrationOutcome, SUMMARY_LOG_TARGET, ServerMigration};

#[cfg(test)]
mod tests;
