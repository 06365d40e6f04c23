//! Given steps for task execution BDD scenarios.

use super::world::{MigrationWorld, PendingSubtask};
use rstest_bdd_macros::given;
use server_migration::task::domain::TaskStatus;

#[given(r#"a composite task "{name}""#)]
fn composite_task(world: &mut MigrationWorld, name: String) {
    world.composite_name = Some(name);
}

#[given(r#"a subtask "{name}" that ends with "{status}""#)]
fn subtask(world: &mut MigrationWorld, name: String, status: String) -> Result<(), eyre::Report> {
    let parsed = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    world.subtasks.push(PendingSubtask {
        name,
        status: parsed,
    });
    Ok(())
}

#[given(r#"the property "{name}" is "{value}""#)]
fn property(world: &mut MigrationWorld, name: String, value: String) {
    world.properties.push((name, value));
}

#[given("a report directory")]
fn report_directory(world: &mut MigrationWorld) -> Result<(), eyre::Report> {
    world.report_dir = Some(tempfile::tempdir()?);
    Ok(())
}
