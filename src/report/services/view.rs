//! Serializable snapshots of a finished run handed to the templates.

use serde::Serialize;

use crate::report::domain::{MigrationReport, ServerDescriptor};
use crate::task::{
    domain::{TaskError, TaskStatus},
    services::ExecutionNode,
};

const XML_INDENT: &str = "    ";

#[derive(Debug, Serialize)]
pub(crate) struct ReportView {
    start_time: String,
    status: &'static str,
    source: ServerView,
    target: ServerView,
    environment: Vec<PropertyView>,
    task: TaskView,
}

impl ReportView {
    /// Snapshots `report`; task tables of nodes whose path size is below
    /// `expand_below` are marked expanded.
    pub(crate) fn new(report: &MigrationReport, expand_below: usize) -> Self {
        Self {
            start_time: report
                .start_time()
                .to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            status: status_label(report.status()),
            source: ServerView::from(report.source()),
            target: ServerView::from(report.target()),
            environment: report
                .environment()
                .iter()
                .map(|(name, value)| PropertyView {
                    name: name.clone(),
                    value: value.clone(),
                })
                .collect(),
            task: TaskView::new(report.root(), expand_below),
        }
    }
}

#[derive(Debug, Serialize)]
struct ServerView {
    name: String,
    version: String,
    base_dir: String,
}

impl From<&ServerDescriptor> for ServerView {
    fn from(server: &ServerDescriptor) -> Self {
        Self {
            name: server.name().to_owned(),
            version: server.version().to_owned(),
            base_dir: server.base_dir().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct PropertyView {
    name: String,
    /// `None` when the property was read but never set.
    value: Option<String>,
}

#[derive(Debug, Serialize)]
struct AttributeView {
    name: String,
    value: String,
}

#[derive(Debug, Serialize)]
struct TaskView {
    number: u64,
    name: String,
    path: String,
    logger_name: String,
    status: &'static str,
    fail_reason: Option<String>,
    attributes: Vec<AttributeView>,
    expanded: bool,
    indent: String,
    subtasks: Vec<TaskView>,
}

impl TaskView {
    fn new(node: &ExecutionNode, expand_below: usize) -> Self {
        let path_size = node.path().size();
        let result = node.result();
        Self {
            number: node.number(),
            name: node.name().to_string(),
            path: node.path().to_string(),
            logger_name: node.logger_name().to_owned(),
            status: status_label(node.status()),
            fail_reason: result.and_then(|recorded| recorded.fail_cause()).map(fail_reason),
            attributes: result
                .map(|recorded| {
                    recorded
                        .attributes()
                        .iter()
                        .map(|(name, value)| AttributeView {
                            name: name.clone(),
                            value: value.clone(),
                        })
                        .collect()
                })
                .unwrap_or_default(),
            expanded: path_size < expand_below,
            indent: XML_INDENT.repeat((2 * path_size).saturating_sub(1)),
            subtasks: node
                .children()
                .iter()
                .map(|child| Self::new(child, expand_below))
                .collect(),
        }
    }
}

fn fail_reason(fault: &TaskError) -> String {
    match fault {
        TaskError::Migration(failure) => failure.cause().map_or_else(
            || failure.message().to_owned(),
            |cause| format!("{}: {cause}", failure.message()),
        ),
        other => other.to_string(),
    }
}

fn status_label(status: Option<TaskStatus>) -> &'static str {
    status.map_or("UNKNOWN", TaskStatus::as_str)
}
