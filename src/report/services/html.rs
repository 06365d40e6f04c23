//! HTML rendering of a finished run over a marker template.

use std::borrow::Cow;

use super::{render::render_template, view::ReportView};
use crate::report::{
    domain::{MigrationReport, ReportError},
    ports::ReportWriter,
};

/// Marker replaced by the run summary.
pub const SUMMARY_MARKER: &str = "$SUMMARY";
/// Marker replaced by the collapsible task tables.
pub const TASK_SUMMARY_MARKER: &str = "$TASK_SUMMARY";
/// Marker replaced by the per-task details panels.
pub const TASK_MAP_MARKER: &str = "$TASK_MAP";

/// Template used when no custom one is configured.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/report.html");

const SUMMARY_FRAGMENT: &str = include_str!("../templates/summary.html");
const TASK_SUMMARY_FRAGMENT: &str = include_str!("../templates/task_summary.html");
const TASK_MAP_FRAGMENT: &str = include_str!("../templates/task_map.html");

/// Template text around the three markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TemplateParts<'a> {
    header: &'a str,
    summary_separator: &'a str,
    task_summary_separator: &'a str,
    footer: &'a str,
}

fn split_template(template: &str) -> Result<TemplateParts<'_>, ReportError> {
    let (header, after_summary) = template
        .split_once(SUMMARY_MARKER)
        .ok_or(ReportError::MissingMarker(SUMMARY_MARKER))?;
    let (summary_separator, after_task_summary) = after_summary
        .split_once(TASK_SUMMARY_MARKER)
        .ok_or(ReportError::MissingMarker(TASK_SUMMARY_MARKER))?;
    let (task_summary_separator, footer) = after_task_summary
        .split_once(TASK_MAP_MARKER)
        .ok_or(ReportError::MissingMarker(TASK_MAP_MARKER))?;
    Ok(TemplateParts {
        header,
        summary_separator,
        task_summary_separator,
        footer,
    })
}

/// Writes a browsable page with nested collapsible task tables.
///
/// The subtask table of a node starts expanded when the node's path size is
/// below the configured maximum and collapsed otherwise, so nodes deeper
/// than that maximum are initially hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlReportWriter {
    template: Cow<'static, str>,
    max_task_path_size_to_display_subtasks: usize,
}

impl Default for HtmlReportWriter {
    fn default() -> Self {
        Self::new(4)
    }
}

impl HtmlReportWriter {
    /// Creates a writer using the built-in template.
    #[must_use]
    pub const fn new(max_task_path_size_to_display_subtasks: usize) -> Self {
        Self {
            template: Cow::Borrowed(DEFAULT_TEMPLATE),
            max_task_path_size_to_display_subtasks,
        }
    }

    /// Replaces the built-in template.
    ///
    /// The template must contain [`SUMMARY_MARKER`], [`TASK_SUMMARY_MARKER`]
    /// and [`TASK_MAP_MARKER`] in that order; this is checked on render.
    #[must_use]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Cow::Owned(template.into());
        self
    }
}

impl ReportWriter for HtmlReportWriter {
    fn render(&self, report: &MigrationReport) -> Result<String, ReportError> {
        let parts = split_template(&self.template)?;
        let view = ReportView::new(report, self.max_task_path_size_to_display_subtasks);
        let summary = render_template("summary.html", SUMMARY_FRAGMENT, &view)?;
        let task_summary = render_template("task_summary.html", TASK_SUMMARY_FRAGMENT, &view)?;
        let task_map = render_template("task_map.html", TASK_MAP_FRAGMENT, &view)?;
        Ok([
            parts.header,
            summary.as_str(),
            parts.summary_separator,
            task_summary.as_str(),
            parts.task_summary_separator,
            task_map.as_str(),
            parts.footer,
        ]
        .concat())
    }
}
