//! Shared world state for task execution BDD scenarios.

use server_migration::{
    migration::{MigrationError, MigrationOutcome},
    task::domain::TaskStatus,
};
use rstest::fixture;
use tempfile::TempDir;

/// Subtask queued for the composite task under test.
pub struct PendingSubtask {
    /// Subtask name.
    pub name: String,
    /// Status the subtask ends with.
    pub status: TaskStatus,
}

/// Scenario world for task execution behaviour tests.
#[derive(Default)]
pub struct MigrationWorld {
    /// Name of the composite root task.
    pub composite_name: Option<String>,
    /// Subtasks in execution order.
    pub subtasks: Vec<PendingSubtask>,
    /// Environment properties.
    pub properties: Vec<(String, String)>,
    /// Directory reports are written to, if any.
    pub report_dir: Option<TempDir>,
    /// Result of the last migration run.
    pub outcome: Option<Result<MigrationOutcome, MigrationError>>,
}

impl MigrationWorld {
    /// Returns the outcome of a completed run.
    pub fn completed(&self) -> Result<&MigrationOutcome, eyre::Report> {
        match self.outcome.as_ref() {
            Some(Ok(outcome)) => Ok(outcome),
            Some(Err(err)) => Err(eyre::eyre!("migration run failed: {err}")),
            None => Err(eyre::eyre!("migration has not run")),
        }
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> MigrationWorld {
    MigrationWorld::default()
}
