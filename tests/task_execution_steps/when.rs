//! When steps for task execution BDD scenarios.

use std::sync::Arc;

use super::world::MigrationWorld;
use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8::Dir};
use eyre::WrapErr;
use mockable::DefaultClock;
use rstest_bdd_macros::when;
use server_migration::{
    migration::ServerMigration,
    report::domain::ServerDescriptor,
    task::{
        adapters::memory::InMemoryEnvironment,
        builder::{BuildTask, CompositeTaskBuilder, LeafTaskBuilder},
        domain::{TaskError, TaskOutcome, TaskResult, TaskStatus},
        services::MigrationContext,
    },
};

fn outcome_for(name: &str, status: TaskStatus) -> TaskOutcome {
    match status {
        TaskStatus::Success => Ok(TaskResult::SUCCESS),
        TaskStatus::Skipped => Ok(TaskResult::SKIPPED),
        TaskStatus::Fail => Err(TaskError::failure(format!("{name} failed"))),
    }
}

#[when("the migration runs")]
fn migration_runs(world: &mut MigrationWorld) -> Result<(), eyre::Report> {
    let name = world
        .composite_name
        .clone()
        .ok_or_else(|| eyre::eyre!("missing composite task in scenario world"))?;
    let mut builder = CompositeTaskBuilder::<()>::named(name.as_str());
    for subtask in &world.subtasks {
        let outcome = outcome_for(&subtask.name, subtask.status);
        builder = builder.with_subtask(
            LeafTaskBuilder::named(subtask.name.as_str())
                .with_runnable(move |_, _| outcome.clone()),
        );
    }

    let environment = InMemoryEnvironment::from_properties(
        world
            .properties
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str())),
    );
    let context = MigrationContext::new(Arc::new(environment), Arc::new(DefaultClock));
    let mut migration = ServerMigration::new(
        context,
        ServerDescriptor::new("WildFly", "26.1", "/opt/source"),
        ServerDescriptor::new("WildFly", "31.0", "/opt/target"),
    );
    if let Some(temp) = &world.report_dir {
        let path = Utf8Path::from_path(temp.path())
            .ok_or_else(|| eyre::eyre!("report directory is not UTF-8"))?;
        let dir = Dir::open_ambient_dir(path, ambient_authority())
            .wrap_err("open report directory")?;
        migration = migration.with_report_dir(dir);
    }

    world.outcome = Some(migration.run(Arc::new(builder.build(()))));
    Ok(())
}
