//! Error types for report rendering and configuration.

use thiserror::Error;

/// Errors raised while rendering or writing reports.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A template failed to render.
    #[error("failed to render report template '{template}': {reason}")]
    Render {
        /// Template name.
        template: String,
        /// Renderer message.
        reason: String,
    },

    /// An HTML report template lacks one of the substitution markers.
    #[error("report template is missing the {0} marker")]
    MissingMarker(&'static str),

    /// Reading a template or writing a report file failed.
    #[error("failed to access report file '{file}'")]
    Io {
        /// File name relative to the report directory.
        file: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while reading report configuration properties.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReportConfigError {
    /// A numeric property holds something other than a positive integer.
    #[error("property '{property}' must be a positive integer, got '{value}'")]
    InvalidNumber {
        /// Property name.
        property: String,
        /// Offending value.
        value: String,
    },
}
