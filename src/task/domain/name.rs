//! Task identity: a name plus descriptive attributes.

use std::collections::BTreeMap;
use std::fmt;

/// Identity of a task.
///
/// Two tasks with the same name are told apart by their attributes, for
/// example `deployment(name=app.war)`. Attributes are kept sorted by key so
/// the canonical string form is stable across runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskName {
    name: String,
    attributes: BTreeMap<String, String>,
}

impl TaskName {
    /// Creates a name without attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Adds an attribute, replacing any previous value for the key.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Returns the bare task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the attributes sorted by key.
    #[must_use]
    pub const fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    /// Returns the attribute value for `key`.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

impl From<&str> for TaskName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TaskName {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if self.attributes.is_empty() {
            return Ok(());
        }
        f.write_str("(")?;
        for (index, (key, value)) in self.attributes.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}={value}")?;
        }
        f.write_str(")")
    }
}
