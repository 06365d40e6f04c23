//! In-memory environment for tests and embedded runs.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, PoisonError, RwLock};

use crate::task::ports::Environment;

/// Thread-safe environment backed by an in-memory property map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEnvironment {
    properties: Arc<BTreeMap<String, String>>,
    read: Arc<RwLock<BTreeSet<String>>>,
}

impl InMemoryEnvironment {
    /// Creates an environment without properties.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an environment from name/value pairs.
    pub fn from_properties<K, V>(properties: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            properties: Arc::new(
                properties
                    .into_iter()
                    .map(|(key, value)| (key.into(), value.into()))
                    .collect(),
            ),
            read: Arc::default(),
        }
    }

    /// Sets a property, replacing any previous value.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.properties).insert(name.into(), value.into());
        self
    }
}

impl Environment for InMemoryEnvironment {
    fn property_as_string(&self, name: &str) -> Option<String> {
        self.read
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.to_owned());
        self.properties.get(name).cloned()
    }

    fn properties_read(&self) -> BTreeMap<String, Option<String>> {
        self.read
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|name| (name.clone(), self.properties.get(name).cloned()))
            .collect()
    }
}
