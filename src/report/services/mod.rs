//! Report writers and output helpers.

pub mod html;
pub mod output;
mod render;
pub mod summary;
mod view;
pub mod xml;

pub use html::HtmlReportWriter;
pub use output::{read_template, write_report};
pub use summary::{SummaryLine, SummaryReportWriter, SummaryTable};
pub use xml::XmlReportWriter;
