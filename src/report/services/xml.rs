//! Lossless XML rendering of a finished run.

use super::{render::render_template, view::ReportView};
use crate::report::{
    domain::{MigrationReport, ReportError},
    ports::ReportWriter,
};

const TEMPLATE_NAME: &str = "report.xml";
const TEMPLATE: &str = include_str!("../templates/report.xml");

/// Writes every task, skipped ones included, as nested `task` elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct XmlReportWriter;

impl ReportWriter for XmlReportWriter {
    fn render(&self, report: &MigrationReport) -> Result<String, ReportError> {
        render_template(TEMPLATE_NAME, TEMPLATE, &ReportView::new(report, usize::MAX))
    }
}
