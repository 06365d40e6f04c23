//! Persistent path from the root task to a node.

use std::fmt;
use std::sync::Arc;

use super::TaskName;

/// Immutable chain of task names from the root to a node.
///
/// Extending a path shares the parent's segments, so every node in a tree
/// can hold its own path without copying its ancestors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskPath {
    segment: Arc<PathSegment>,
}

#[derive(Debug, PartialEq, Eq)]
struct PathSegment {
    name: TaskName,
    parent: Option<TaskPath>,
    size: usize,
}

impl TaskPath {
    /// Creates a single-element path for a root task.
    #[must_use]
    pub fn root(name: TaskName) -> Self {
        Self {
            segment: Arc::new(PathSegment {
                name,
                parent: None,
                size: 1,
            }),
        }
    }

    /// Returns a new path extending this one with `name`.
    #[must_use]
    pub fn child(&self, name: TaskName) -> Self {
        Self {
            segment: Arc::new(PathSegment {
                name,
                parent: Some(self.clone()),
                size: self.segment.size + 1,
            }),
        }
    }

    /// Number of names in the path; a root path has size 1.
    #[must_use]
    pub fn size(&self) -> usize {
        self.segment.size
    }

    /// Name of the last task in the path.
    #[must_use]
    pub fn name(&self) -> &TaskName {
        &self.segment.name
    }

    /// Path of the parent task, absent at the root.
    #[must_use]
    pub fn parent(&self) -> Option<&Self> {
        self.segment.parent.as_ref()
    }

    /// Returns the names ordered from the root to this node.
    #[must_use]
    pub fn names(&self) -> Vec<&TaskName> {
        let mut names = Vec::with_capacity(self.size());
        let mut current = Some(self);
        while let Some(path) = current {
            names.push(path.name());
            current = path.parent();
        }
        names.reverse();
        names
    }
}

impl fmt::Display for TaskPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, name) in self.names().into_iter().enumerate() {
            if index > 0 {
                f.write_str(" > ")?;
            }
            write!(f, "{name}")?;
        }
        Ok(())
    }
}
