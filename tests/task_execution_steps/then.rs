//! Then steps for task execution BDD scenarios.

use super::world::MigrationWorld;
use rstest_bdd_macros::then;
use server_migration::{report::services::SummaryReportWriter, task::domain::TaskStatus};

fn summary_labels(world: &MigrationWorld) -> Result<Vec<String>, eyre::Report> {
    let outcome = world.completed()?;
    Ok(SummaryReportWriter::default()
        .table(outcome.report().root())
        .lines
        .into_iter()
        .map(|line| line.label)
        .collect())
}

fn report_file(world: &MigrationWorld, file: &str) -> Result<std::path::PathBuf, eyre::Report> {
    let dir = world
        .report_dir
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing report directory in scenario world"))?;
    Ok(dir.path().join(file))
}

#[then(r#"the migration result is "{status}""#)]
fn migration_result_is(world: &MigrationWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let actual = world.completed()?.status();
    if actual != Some(expected) {
        return Err(eyre::eyre!("expected status {expected}, found {actual:?}"));
    }
    Ok(())
}

#[then(r#"the executed subtasks are "{names}""#)]
fn executed_subtasks_are(world: &MigrationWorld, names: String) -> Result<(), eyre::Report> {
    let expected: Vec<&str> = names.split(',').collect();
    let actual: Vec<String> = world
        .completed()?
        .report()
        .root()
        .children()
        .iter()
        .map(|child| child.name().to_string())
        .collect();
    if actual != expected {
        return Err(eyre::eyre!("expected subtasks {expected:?}, found {actual:?}"));
    }
    Ok(())
}

#[then("no subtasks were executed")]
fn no_subtasks_executed(world: &MigrationWorld) -> Result<(), eyre::Report> {
    let count = world.completed()?.report().root().children().len();
    if count != 0 {
        return Err(eyre::eyre!("expected no subtasks, found {count}"));
    }
    Ok(())
}

#[then(r#"the summary lists "{name}""#)]
fn summary_lists(world: &MigrationWorld, name: String) -> Result<(), eyre::Report> {
    let labels = summary_labels(world)?;
    if !labels.contains(&name) {
        return Err(eyre::eyre!("summary {labels:?} does not list {name}"));
    }
    Ok(())
}

#[then(r#"the summary omits "{name}""#)]
fn summary_omits(world: &MigrationWorld, name: String) -> Result<(), eyre::Report> {
    let labels = summary_labels(world)?;
    if labels.contains(&name) {
        return Err(eyre::eyre!("summary {labels:?} unexpectedly lists {name}"));
    }
    Ok(())
}

#[then(r#"the report file "{file}" exists"#)]
fn report_file_exists(world: &MigrationWorld, file: String) -> Result<(), eyre::Report> {
    world.completed()?;
    if !report_file(world, &file)?.is_file() {
        return Err(eyre::eyre!("report file {file} was not written"));
    }
    Ok(())
}

#[then(r#"the report file "{file}" does not exist"#)]
fn report_file_absent(world: &MigrationWorld, file: String) -> Result<(), eyre::Report> {
    world.completed()?;
    if report_file(world, &file)?.exists() {
        return Err(eyre::eyre!("report file {file} should not have been written"));
    }
    Ok(())
}

#[then(r#"the report file "{file}" contains "{text}""#)]
fn report_file_contains(
    world: &MigrationWorld,
    file: String,
    text: String,
) -> Result<(), eyre::Report> {
    let contents = std::fs::read_to_string(report_file(world, &file)?)?;
    if !contents.contains(&text) {
        return Err(eyre::eyre!("report file {file} does not contain {text}"));
    }
    Ok(())
}
