//! Errors raised around a migration run.

use thiserror::Error;

use super::MigrationOutcome;
use crate::report::domain::{ReportConfigError, ReportError};
use crate::task::domain::TaskError;

/// Errors that prevent a migration run from completing its bookkeeping.
///
/// A fault raised by a task does not produce this error; it is carried in
/// the [`MigrationOutcome`] alongside the report.
#[derive(Debug, Error)]
pub enum MigrationError {
    /// The root task could not be executed.
    #[error(transparent)]
    Task(#[from] TaskError),

    /// Report configuration properties are invalid; no task was run.
    #[error(transparent)]
    Config(#[from] ReportConfigError),

    /// A report could not be rendered or written after the run finished.
    #[error("migration report could not be written: {source}")]
    Report {
        /// The finished run the report was produced from.
        outcome: Box<MigrationOutcome>,
        /// Why the report failed.
        #[source]
        source: ReportError,
    },
}

impl MigrationError {
    /// Returns the finished run when the error was raised after it.
    #[must_use]
    pub fn outcome(&self) -> Option<&MigrationOutcome> {
        match self {
            Self::Report { outcome, .. } => Some(outcome.as_ref()),
            Self::Task(_) | Self::Config(_) => None,
        }
    }
}
