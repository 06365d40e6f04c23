//! Plain-text summary of a finished run.

use crate::report::{
    domain::{MigrationReport, ReportError},
    ports::ReportWriter,
};
use crate::task::{domain::TaskStatus, services::ExecutionNode};

const INDENT: &str = "  ";
const MIN_SEPARATOR: usize = 3;
const UNKNOWN_STATUS: &str = "UNKNOWN";

/// One task row of the summary table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    /// Nesting depth, 0 for direct children of the root.
    pub depth: usize,
    /// Task name as displayed.
    pub label: String,
    /// Recorded status, absent if the task never finished.
    pub status: Option<TaskStatus>,
}

impl SummaryLine {
    fn prefix_width(&self) -> usize {
        self.depth * INDENT.len() + self.label.chars().count()
    }
}

/// Rows of the summary table together with the dotted column width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryTable {
    /// Combined width of indent, label and dots on every row.
    pub width: usize,
    /// Rows in depth-first order.
    pub lines: Vec<SummaryLine>,
}

impl SummaryTable {
    /// Formats every row as `<indent><label> <dots> <STATUS>`.
    #[must_use]
    pub fn formatted(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| {
                let dots = ".".repeat(self.width.saturating_sub(line.prefix_width()));
                format!(
                    "{}{} {dots} {}",
                    INDENT.repeat(line.depth),
                    line.label,
                    status_label(line.status)
                )
            })
            .collect()
    }
}

/// Writes the indented summary table logged at the end of a run.
///
/// Skipped tasks and everything below them are left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryReportWriter {
    max_task_path_size_to_display_subtasks: usize,
}

impl Default for SummaryReportWriter {
    fn default() -> Self {
        Self::new(5)
    }
}

impl SummaryReportWriter {
    /// Creates a writer listing subtasks of nodes whose path size is below
    /// `max_task_path_size_to_display_subtasks`.
    #[must_use]
    pub const fn new(max_task_path_size_to_display_subtasks: usize) -> Self {
        Self {
            max_task_path_size_to_display_subtasks,
        }
    }

    /// Builds the table for the subtasks of `root`.
    #[must_use]
    pub fn table(&self, root: &ExecutionNode) -> SummaryTable {
        let mut lines = Vec::new();
        self.collect(root, 0, &mut lines);
        let width = lines
            .iter()
            .map(SummaryLine::prefix_width)
            .max()
            .unwrap_or(0)
            + MIN_SEPARATOR;
        SummaryTable { width, lines }
    }

    /// Returns the report as individual lines, ready to be logged.
    #[must_use]
    pub fn lines(&self, report: &MigrationReport) -> Vec<String> {
        let mut lines = self.table(report.root()).formatted();
        lines.push(String::new());
        lines.push(format!("Migration Result: {}", status_label(report.status())));
        lines
    }

    fn collect(&self, node: &ExecutionNode, depth: usize, lines: &mut Vec<SummaryLine>) {
        if node.path().size() >= self.max_task_path_size_to_display_subtasks {
            return;
        }
        for child in node.children() {
            let status = child.status();
            if status == Some(TaskStatus::Skipped) {
                continue;
            }
            lines.push(SummaryLine {
                depth,
                label: child.name().to_string(),
                status,
            });
            self.collect(&child, depth + 1, lines);
        }
    }
}

impl ReportWriter for SummaryReportWriter {
    fn render(&self, report: &MigrationReport) -> Result<String, ReportError> {
        let mut text = self.lines(report).join("\n");
        text.push('\n');
        Ok(text)
    }
}

fn status_label(status: Option<TaskStatus>) -> &'static str {
    status.map_or(UNKNOWN_STATUS, TaskStatus::as_str)
}
