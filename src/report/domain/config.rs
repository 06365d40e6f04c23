//! Report configuration read from environment properties.

use camino::Utf8PathBuf;

use super::ReportConfigError;
use crate::task::ports::Environment;

/// Property controlling how deep the summary lists subtasks.
pub const SUMMARY_MAX_PATH_SIZE_PROPERTY: &str = "report.summary.maxTaskPathSizeToDisplaySubtasks";
/// Property disabling the summary report.
pub const SUMMARY_SKIP_PROPERTY: &str = "report.summary.skip";
/// Property naming the XML report file.
pub const XML_FILE_NAME_PROPERTY: &str = "report.xml.fileName";
/// Property disabling the XML report.
pub const XML_SKIP_PROPERTY: &str = "report.xml.skip";
/// Property controlling which HTML task tables start expanded.
pub const HTML_MAX_PATH_SIZE_PROPERTY: &str = "report.html.maxTaskPathSizeToDisplaySubtasks";
/// Property naming the HTML report file.
pub const HTML_FILE_NAME_PROPERTY: &str = "report.html.fileName";
/// Property naming a custom HTML template, relative to the report directory.
pub const HTML_TEMPLATE_FILE_NAME_PROPERTY: &str = "report.html.templateFileName";
/// Property disabling the HTML report.
pub const HTML_SKIP_PROPERTY: &str = "report.html.skip";

/// Summary report settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryReportConfig {
    /// Whether the summary is suppressed.
    pub skip: bool,
    /// Subtasks are listed only for nodes whose path size is below this.
    pub max_task_path_size_to_display_subtasks: usize,
}

impl Default for SummaryReportConfig {
    fn default() -> Self {
        Self {
            skip: false,
            max_task_path_size_to_display_subtasks: 5,
        }
    }
}

/// XML report settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlReportConfig {
    /// Whether the XML report is suppressed.
    pub skip: bool,
    /// Output file name.
    pub file_name: String,
}

impl Default for XmlReportConfig {
    fn default() -> Self {
        Self {
            skip: false,
            file_name: "migration-report.xml".to_owned(),
        }
    }
}

/// HTML report settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlReportConfig {
    /// Whether the HTML report is suppressed.
    pub skip: bool,
    /// Output file name.
    pub file_name: String,
    /// Custom template, or `None` for the built-in one.
    pub template_file_name: Option<Utf8PathBuf>,
    /// Subtask tables start expanded for nodes whose path size is below this.
    pub max_task_path_size_to_display_subtasks: usize,
}

impl Default for HtmlReportConfig {
    fn default() -> Self {
        Self {
            skip: false,
            file_name: "migration-report.html".to_owned(),
            template_file_name: None,
            max_task_path_size_to_display_subtasks: 4,
        }
    }
}

/// Settings for all report writers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportConfig {
    /// Summary report settings.
    pub summary: SummaryReportConfig,
    /// XML report settings.
    pub xml: XmlReportConfig,
    /// HTML report settings.
    pub html: HtmlReportConfig,
}

impl ReportConfig {
    /// Reads report settings, falling back to defaults for absent properties.
    ///
    /// # Errors
    ///
    /// Returns [`ReportConfigError::InvalidNumber`] when a numeric property
    /// is not a positive integer.
    pub fn from_environment(environment: &dyn Environment) -> Result<Self, ReportConfigError> {
        let defaults = Self::default();
        Ok(Self {
            summary: SummaryReportConfig {
                skip: flag(environment, SUMMARY_SKIP_PROPERTY),
                max_task_path_size_to_display_subtasks: number(
                    environment,
                    SUMMARY_MAX_PATH_SIZE_PROPERTY,
                    defaults.summary.max_task_path_size_to_display_subtasks,
                )?,
            },
            xml: XmlReportConfig {
                skip: flag(environment, XML_SKIP_PROPERTY),
                file_name: environment
                    .property_as_string(XML_FILE_NAME_PROPERTY)
                    .unwrap_or(defaults.xml.file_name),
            },
            html: HtmlReportConfig {
                skip: flag(environment, HTML_SKIP_PROPERTY),
                file_name: environment
                    .property_as_string(HTML_FILE_NAME_PROPERTY)
                    .unwrap_or(defaults.html.file_name),
                template_file_name: environment
                    .property_as_string(HTML_TEMPLATE_FILE_NAME_PROPERTY)
                    .map(Utf8PathBuf::from),
                max_task_path_size_to_display_subtasks: number(
                    environment,
                    HTML_MAX_PATH_SIZE_PROPERTY,
                    defaults.html.max_task_path_size_to_display_subtasks,
                )?,
            },
        })
    }
}

fn flag(environment: &dyn Environment, property: &str) -> bool {
    environment.property_as_boolean(property).unwrap_or(false)
}

fn number(
    environment: &dyn Environment,
    property: &str,
    default: usize,
) -> Result<usize, ReportConfigError> {
    let Some(raw) = environment.property_as_string(property) else {
        return Ok(default);
    };
    match raw.trim().parse::<usize>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ReportConfigError::InvalidNumber {
            property: property.to_owned(),
            value: raw,
        }),
    }
}
