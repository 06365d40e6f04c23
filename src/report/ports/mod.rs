//! Port contract shared by the report writers.

use super::domain::{MigrationReport, ReportError};

/// Renders a finished run into a report document.
pub trait ReportWriter: Send + Sync {
    /// Renders the report.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] when the document cannot be produced.
    fn render(&self, report: &MigrationReport) -> Result<String, ReportError>;
}
