//! Tests for the migration service.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::{fixture, rstest};

use super::{MigrationError, ServerMigration};
use crate::report::domain::{ReportConfigError, ServerDescriptor};
use crate::task::{
    adapters::memory::InMemoryEnvironment,
    builder::{BuildTask, CompositeTaskBuilder, LeafTaskBuilder},
    domain::{TaskError, TaskName, TaskOutcome, TaskResult, TaskStatus},
    ports::Task,
    services::{MigrationContext, TaskContext},
};

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

struct NamelessTask;

impl Task for NamelessTask {
    fn name(&self) -> Option<&TaskName> {
        None
    }

    fn run(&self, _context: &TaskContext<'_>) -> TaskOutcome {
        Ok(TaskResult::SUCCESS)
    }
}

#[fixture]
fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 4, 5, 6, 7)
        .single()
        .expect("valid timestamp")
}

fn migration(environment: InMemoryEnvironment, start_time: DateTime<Utc>) -> ServerMigration {
    let context = MigrationContext::new(Arc::new(environment), Arc::new(FixedClock(start_time)));
    ServerMigration::new(
        context,
        ServerDescriptor::new("WildFly", "26.1", "/opt/source"),
        ServerDescriptor::new("WildFly", "31.0", "/opt/target"),
    )
}

fn server_task(second: LeafTaskBuilder<()>) -> Arc<dyn Task> {
    Arc::new(
        CompositeTaskBuilder::<()>::named("server")
            .with_subtask(LeafTaskBuilder::named("copy").with_runnable(|_, _| Ok(TaskResult::SUCCESS)))
            .with_subtask(second)
            .build(()),
    )
}

#[rstest]
fn successful_run_reports_tree_and_metadata(start_time: DateTime<Utc>) {
    let service = migration(InMemoryEnvironment::new(), start_time);
    let task = server_task(LeafTaskBuilder::named("skip-me"));

    let outcome = service.run(task).expect("run completes");

    assert_eq!(outcome.status(), Some(TaskStatus::Success));
    assert!(outcome.result().is_ok());
    let report = outcome.report();
    assert_eq!(report.start_time(), start_time);
    assert_eq!(report.source().version(), "26.1");
    assert_eq!(report.target().base_dir().as_str(), "/opt/target");
    assert_eq!(report.root().children().len(), 2);
    assert!(report.environment().contains_key("copy.skip"));
}

#[rstest]
fn task_fault_is_returned_in_outcome(start_time: DateTime<Utc>) {
    let service = migration(InMemoryEnvironment::new(), start_time);
    let task = server_task(
        LeafTaskBuilder::named("broken").with_runnable(|_, _| Err(TaskError::failure("boom"))),
    );

    let outcome = service.run(task).expect("bookkeeping completes");

    assert_eq!(outcome.status(), Some(TaskStatus::Fail));
    assert_eq!(
        outcome.into_result().map_err(|fault| fault.to_string()),
        Err("boom".to_owned())
    );
}

#[rstest]
fn unnamed_root_task_is_rejected(start_time: DateTime<Utc>) {
    let service = migration(InMemoryEnvironment::new(), start_time);

    let result = service.run(Arc::new(NamelessTask));

    assert!(matches!(
        result,
        Err(MigrationError::Task(TaskError::UnnamedTask))
    ));
}

#[rstest]
fn invalid_report_configuration_fails_before_tasks_run(start_time: DateTime<Utc>) {
    let environment = InMemoryEnvironment::new()
        .with_property("report.summary.maxTaskPathSizeToDisplaySubtasks", "deep");
    let service = migration(environment, start_time);
    let ran = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&ran);
    let task = server_task(LeafTaskBuilder::named("mark").with_runnable(move |_, _| {
        flag.store(true, Ordering::SeqCst);
        Ok(TaskResult::SUCCESS)
    }));

    let result = service.run(task);

    assert!(matches!(
        result,
        Err(MigrationError::Config(ReportConfigError::InvalidNumber { .. }))
    ));
    assert!(!ran.load(Ordering::SeqCst));
}
