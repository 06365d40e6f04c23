//! Report value types: the finished run, server descriptors and settings.

pub mod config;
mod error;
mod report;
mod server;

pub use config::{HtmlReportConfig, ReportConfig, SummaryReportConfig, XmlReportConfig};
pub use error::{ReportConfigError, ReportError};
pub use report::{MigrationReport, MigrationReportData};
pub use server::ServerDescriptor;
