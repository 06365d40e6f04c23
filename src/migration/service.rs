//! Orchestration of a migration run.

use std::sync::Arc;

use cap_std::fs_utf8::Dir;
use tracing::{error, info};

use super::MigrationError;
use crate::report::{
    domain::{MigrationReport, MigrationReportData, ReportConfig, ReportError, ServerDescriptor},
    ports::ReportWriter,
    services::{HtmlReportWriter, SummaryReportWriter, XmlReportWriter, read_template, write_report},
};
use crate::task::{
    domain::{TaskOutcome, TaskStatus},
    ports::Task,
    services::{ExecutionNode, MigrationContext},
};

/// Tracing target the summary table is logged under.
pub const SUMMARY_LOG_TARGET: &str = "server_migration::summary";

/// Result of a migration run: the report plus the root task's outcome.
#[derive(Debug)]
pub struct MigrationOutcome {
    report: MigrationReport,
    result: TaskOutcome,
}

impl MigrationOutcome {
    /// Returns the report built from the finished tree.
    #[must_use]
    pub const fn report(&self) -> &MigrationReport {
        &self.report
    }

    /// Returns the root task's result, or the fault that aborted the run.
    #[must_use]
    pub const fn result(&self) -> &TaskOutcome {
        &self.result
    }

    /// Returns the root task's status.
    #[must_use]
    pub fn status(&self) -> Option<TaskStatus> {
        self.report.status()
    }

    /// Consumes the outcome, returning the root task's result.
    ///
    /// # Errors
    ///
    /// Returns the fault that aborted the run.
    pub fn into_result(self) -> TaskOutcome {
        self.result
    }
}

/// Runs migrations between two servers and reports on them.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use mockable::DefaultClock;
/// use server_migration::migration::ServerMigration;
/// use server_migration::report::domain::ServerDescriptor;
/// use server_migration::task::{
///     adapters::memory::InMemoryEnvironment,
///     builder::{BuildTask, LeafTaskBuilder},
///     domain::{TaskResult, TaskStatus},
///     services::MigrationContext,
/// };
///
/// let context = MigrationContext::new(
///     Arc::new(InMemoryEnvironment::new()),
///     Arc::new(DefaultClock),
/// );
/// let migration = ServerMigration::new(
///     context,
///     ServerDescriptor::new("WildFly", "26.1", "/opt/source"),
///     ServerDescriptor::new("WildFly", "31.0", "/opt/target"),
/// );
/// let task = LeafTaskBuilder::<()>::named("server")
///     .with_runnable(|_, _| Ok(TaskResult::SUCCESS))
///     .build(());
///
/// let outcome = migration.run(Arc::new(task)).expect("run completes");
/// assert_eq!(outcome.status(), Some(TaskStatus::Success));
/// ```
pub struct ServerMigration {
    context: MigrationContext,
    source: ServerDescriptor,
    target: ServerDescriptor,
    report_dir: Option<Dir>,
}

impl ServerMigration {
    /// Creates a migration that only logs its summary.
    #[must_use]
    pub const fn new(
        context: MigrationContext,
        source: ServerDescriptor,
        target: ServerDescriptor,
    ) -> Self {
        Self {
            context,
            source,
            target,
            report_dir: None,
        }
    }

    /// Writes the XML and HTML reports into `report_dir`.
    ///
    /// Custom HTML templates are also read from this directory.
    #[must_use]
    pub fn with_report_dir(mut self, report_dir: Dir) -> Self {
        self.report_dir = Some(report_dir);
        self
    }

    /// Runs `task` as the root of a new execution tree and reports on it.
    ///
    /// Report properties are read before any task runs. The tree is kept and
    /// reported whether or not the run fails; a task fault is returned inside
    /// the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`MigrationError::Task`] when the root task has no name and
    /// [`MigrationError::Config`] when report properties are invalid; in both
    /// cases nothing runs. Returns [`MigrationError::Report`], carrying the
    /// finished outcome, when a report cannot be written.
    pub fn run(&self, task: Arc<dyn Task>) -> Result<MigrationOutcome, MigrationError> {
        let start_time = self.context.clock().utc();
        let root = ExecutionNode::root(task, self.context.clone())?;
        let config = ReportConfig::from_environment(self.context.environment())?;
        info!(
            task = %root.name(),
            source = %self.source.name(),
            target = %self.target.name(),
            "server migration started"
        );
        let result = root.run();
        if let Err(fault) = &result {
            error!(task = %root.name(), error = %fault, "server migration failed");
        }

        let outcome = MigrationOutcome {
            report: MigrationReport::new(MigrationReportData {
                root,
                start_time,
                source: self.source.clone(),
                target: self.target.clone(),
                environment: self.context.environment().properties_read(),
            }),
            result,
        };
        match self.emit_reports(&config, &outcome.report) {
            Ok(()) => Ok(outcome),
            Err(source) => {
                error!(error = %source, "server migration report failed");
                Err(MigrationError::Report {
                    outcome: Box::new(outcome),
                    source,
                })
            }
        }
    }

    fn emit_reports(
        &self,
        config: &ReportConfig,
        report: &MigrationReport,
    ) -> Result<(), ReportError> {
        if !config.summary.skip {
            let writer =
                SummaryReportWriter::new(config.summary.max_task_path_size_to_display_subtasks);
            for line in writer.lines(report) {
                info!(target: SUMMARY_LOG_TARGET, "{line}");
            }
        }

        let Some(report_dir) = &self.report_dir else {
            return Ok(());
        };
        if !config.xml.skip {
            write_report(report_dir, &config.xml.file_name, &XmlReportWriter.render(report)?)?;
            info!(file = %config.xml.file_name, "XML report written");
        }
        if !config.html.skip {
            let mut writer =
                HtmlReportWriter::new(config.html.max_task_path_size_to_display_subtasks);
            if let Some(template) = &config.html.template_file_name {
                writer = writer.with_template(read_template(report_dir, template)?);
            }
            write_report(report_dir, &config.html.file_name, &writer.render(report)?)?;
            info!(file = %config.html.file_name, "HTML report written");
        }
        Ok(())
    }
}
