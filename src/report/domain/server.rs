//! Server descriptors shown in reports.

use camino::{Utf8Path, Utf8PathBuf};

/// Product name, version and base directory of a migrated server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerDescriptor {
    name: String,
    version: String,
    base_dir: Utf8PathBuf,
}

impl ServerDescriptor {
    /// Creates a descriptor.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        base_dir: impl Into<Utf8PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            base_dir: base_dir.into(),
        }
    }

    /// Returns the product name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the product version.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the server base directory.
    #[must_use]
    pub fn base_dir(&self) -> &Utf8Path {
        &self.base_dir
    }
}
