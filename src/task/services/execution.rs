//! Execution tree: one node per task run.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::sync::{Arc, OnceLock, PoisonError, RwLock, Weak};

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use super::{MigrationContext, TaskContext, TaskLogger};
use crate::task::{
    domain::{TaskError, TaskName, TaskOutcome, TaskPath, TaskResult, TaskStatus},
    ports::Task,
};

/// Prefix of the log channel names generated for execution nodes.
pub const LOGGER_NAME_PREFIX: &str = "server_migration.task.";

/// Source of node sequence numbers, shared by every run in the process.
static NEXT_NUMBER: AtomicU64 = AtomicU64::new(1);

const UNSTARTED: i64 = 0;

/// Runtime record of one task execution and its subtree.
///
/// Nodes are created when a parent executes a subtask, run exactly once and
/// then stay in the tree as the permanent record consumed by the report
/// writers. A parent owns its children; a child only keeps a weak
/// reference back to its parent.
pub struct ExecutionNode {
    task: Arc<dyn Task>,
    path: TaskPath,
    number: u64,
    logger: TaskLogger,
    parent: Weak<ExecutionNode>,
    context: MigrationContext,
    start_time: AtomicI64,
    result: OnceLock<TaskResult>,
    children: RwLock<Vec<Arc<ExecutionNode>>>,
}

impl ExecutionNode {
    /// Creates the root node of a migration run.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::UnnamedTask`] when the task has no name.
    pub fn root(task: Arc<dyn Task>, context: MigrationContext) -> Result<Arc<Self>, TaskError> {
        let name = task.name().cloned().ok_or(TaskError::UnnamedTask)?;
        Ok(Arc::new(Self::new(
            task,
            TaskPath::root(name),
            Weak::new(),
            context,
        )))
    }

    fn new(
        task: Arc<dyn Task>,
        path: TaskPath,
        parent: Weak<Self>,
        context: MigrationContext,
    ) -> Self {
        let number = NEXT_NUMBER.fetch_add(1, Ordering::SeqCst);
        let logger = TaskLogger::new(format!("{LOGGER_NAME_PREFIX}{number}"), path.name(), number);
        Self {
            task,
            path,
            number,
            logger,
            parent,
            context,
            start_time: AtomicI64::new(UNSTARTED),
            result: OnceLock::new(),
            children: RwLock::new(Vec::new()),
        }
    }

    /// Runs the node's task and records its result.
    ///
    /// Faults are recorded as a [`TaskStatus::Fail`] result carrying the
    /// fault, then returned unchanged. A panic inside the task is recorded
    /// the same way before the unwind resumes.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::AlreadyStarted`] when the node was already run,
    /// otherwise the task's own fault.
    pub fn run(self: &Arc<Self>) -> TaskOutcome {
        let started_at = self.context.clock().utc().timestamp_millis().max(1);
        if self
            .start_time
            .compare_exchange(UNSTARTED, started_at, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(TaskError::AlreadyStarted {
                number: self.number,
                name: self.name().clone(),
            });
        }

        let _entered = self.logger.span().enter();
        debug!(task = %self.name(), number = self.number, "task started");

        let context = TaskContext::new(self);
        let outcome = match panic::catch_unwind(AssertUnwindSafe(|| self.task.run(&context))) {
            Ok(outcome) => outcome,
            Err(payload) => {
                let fault = TaskError::Panicked(panic_message(payload.as_ref()));
                warn!(task = %self.name(), error = %fault, "task panicked");
                self.record(TaskResult::fail(fault));
                panic::resume_unwind(payload)
            }
        };

        match outcome {
            Ok(result) => {
                debug!(task = %self.name(), status = %result.status(), "task completed");
                self.record(result.clone());
                Ok(result)
            }
            Err(fault) => {
                warn!(task = %self.name(), error = %fault, "task failed");
                self.record(TaskResult::fail(fault.clone()));
                Err(fault)
            }
        }
    }

    /// Executes `task` as a new child of this node.
    ///
    /// The child is appended before it runs, so an aborted run still shows
    /// every attempted subtask.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::ResultAlreadySet`] when this node already has a
    /// result, [`TaskError::UnnamedTask`] when `task` has no name, or the
    /// child's fault unchanged.
    pub fn execute(self: &Arc<Self>, task: Arc<dyn Task>) -> TaskOutcome {
        if self.result.get().is_some() {
            return Err(TaskError::ResultAlreadySet(self.name().clone()));
        }
        let name = task.name().cloned().ok_or(TaskError::UnnamedTask)?;
        let child = Arc::new(Self::new(
            task,
            self.path.child(name),
            Arc::downgrade(self),
            self.context.clone(),
        ));
        self.children
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::clone(&child));
        child.run()
    }

    /// Returns `true` if any direct child succeeded.
    #[must_use]
    pub fn has_successful_subtasks(&self) -> bool {
        self.children
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|child| child.status() == Some(TaskStatus::Success))
    }

    /// Returns the node's sequence number.
    #[must_use]
    pub const fn number(&self) -> u64 {
        self.number
    }

    /// Returns the task name.
    #[must_use]
    pub fn name(&self) -> &TaskName {
        self.path.name()
    }

    /// Returns the path from the root task to this node.
    #[must_use]
    pub const fn path(&self) -> &TaskPath {
        &self.path
    }

    /// Returns the node's log channel.
    #[must_use]
    pub const fn logger(&self) -> &TaskLogger {
        &self.logger
    }

    /// Returns the node's log channel name.
    #[must_use]
    pub fn logger_name(&self) -> &str {
        self.logger.name()
    }

    /// Returns when the node started running, if it did.
    #[must_use]
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        match self.start_time.load(Ordering::Acquire) {
            UNSTARTED => None,
            millis => DateTime::from_timestamp_millis(millis),
        }
    }

    /// Returns the recorded result, absent until the run completes.
    #[must_use]
    pub fn result(&self) -> Option<&TaskResult> {
        self.result.get()
    }

    /// Returns the recorded result status.
    #[must_use]
    pub fn status(&self) -> Option<TaskStatus> {
        self.result().map(TaskResult::status)
    }

    /// Returns the parent node, absent at the root.
    #[must_use]
    pub fn parent(&self) -> Option<Arc<Self>> {
        self.parent.upgrade()
    }

    /// Returns the children in execution order.
    #[must_use]
    pub fn children(&self) -> Vec<Arc<Self>> {
        self.children
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub(crate) const fn migration_context(&self) -> &MigrationContext {
        &self.context
    }

    fn record(&self, result: TaskResult) {
        if self.result.set(result).is_err() {
            warn!(task = %self.name(), number = self.number, "task result already recorded");
        }
    }
}

impl fmt::Debug for ExecutionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutionNode")
            .field("number", &self.number)
            .field("path", &self.path.to_string())
            .field("status", &self.status())
            .field("children", &self.children())
            .finish_non_exhaustive()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_owned())
}
