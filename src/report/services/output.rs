//! Report files inside a capability-scoped output directory.

use camino::Utf8Path;
use cap_std::fs_utf8::Dir;

use crate::report::domain::ReportError;

/// Writes `contents` to `file_name` inside `directory`, replacing any
/// existing file.
///
/// # Errors
///
/// Returns [`ReportError::Io`] when the file cannot be written.
pub fn write_report(directory: &Dir, file_name: &str, contents: &str) -> Result<(), ReportError> {
    directory
        .write(file_name, contents)
        .map_err(|source| ReportError::Io {
            file: file_name.to_owned(),
            source,
        })
}

/// Reads a custom template relative to `directory`.
///
/// # Errors
///
/// Returns [`ReportError::Io`] when the file cannot be read.
pub fn read_template(directory: &Dir, file_name: &Utf8Path) -> Result<String, ReportError> {
    directory
        .read_to_string(file_name)
        .map_err(|source| ReportError::Io {
            file: file_name.to_string(),
            source,
        })
}
