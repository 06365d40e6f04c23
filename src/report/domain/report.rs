//! Finished migration run as consumed by the report writers.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::ServerDescriptor;
use crate::task::{domain::TaskStatus, services::ExecutionNode};

/// Parameter object for assembling a [`MigrationReport`].
#[derive(Debug, Clone)]
pub struct MigrationReportData {
    /// Root node of the finished execution tree.
    pub root: Arc<ExecutionNode>,
    /// When the run started.
    pub start_time: DateTime<Utc>,
    /// Server migrated from.
    pub source: ServerDescriptor,
    /// Server migrated to.
    pub target: ServerDescriptor,
    /// Environment properties read during the run with their values.
    pub environment: BTreeMap<String, Option<String>>,
}

/// Read-only view of a finished run.
#[derive(Debug, Clone)]
pub struct MigrationReport {
    root: Arc<ExecutionNode>,
    start_time: DateTime<Utc>,
    source: ServerDescriptor,
    target: ServerDescriptor,
    environment: BTreeMap<String, Option<String>>,
}

impl MigrationReport {
    /// Creates a report from run data.
    #[must_use]
    pub fn new(data: MigrationReportData) -> Self {
        Self {
            root: data.root,
            start_time: data.start_time,
            source: data.source,
            target: data.target,
            environment: data.environment,
        }
    }

    /// Returns the root node of the execution tree.
    #[must_use]
    pub const fn root(&self) -> &Arc<ExecutionNode> {
        &self.root
    }

    /// Returns the run start time.
    #[must_use]
    pub const fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    /// Returns the source server.
    #[must_use]
    pub const fn source(&self) -> &ServerDescriptor {
        &self.source
    }

    /// Returns the target server.
    #[must_use]
    pub const fn target(&self) -> &ServerDescriptor {
        &self.target
    }

    /// Returns the environment properties read during the run.
    #[must_use]
    pub const fn environment(&self) -> &BTreeMap<String, Option<String>> {
        &self.environment
    }

    /// Returns the status of the root task, absent if it never finished.
    #[must_use]
    pub fn status(&self) -> Option<TaskStatus> {
        self.root.status()
    }
}
