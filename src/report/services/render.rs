//! Template rendering shared by the XML and HTML writers.

use minijinja::{Environment, Error, ErrorKind, Output, State, Value, context, escape_formatter};

use super::view::ReportView;
use crate::report::domain::ReportError;

/// Renders `source` against the report view.
///
/// Strings are escaped for both XML and HTML content; values already marked
/// safe, such as the output of recursive loops, are written unchanged.
pub(crate) fn render_template(
    name: &str,
    source: &str,
    view: &ReportView,
) -> Result<String, ReportError> {
    let mut environment = Environment::new();
    environment.set_trim_blocks(true);
    environment.set_lstrip_blocks(true);
    environment.set_formatter(markup_formatter);
    environment
        .render_named_str(name, source, context! { report => view })
        .map_err(|error| ReportError::Render {
            template: name.to_owned(),
            reason: error.to_string(),
        })
}

fn markup_formatter(output: &mut Output<'_>, state: &State<'_, '_>, value: &Value) -> Result<(), Error> {
    match value.as_str() {
        Some(text) if !value.is_safe() => output
            .write_str(&escape_markup(text))
            .map_err(|_| Error::new(ErrorKind::WriteFailure, "failed to write template output")),
        _ => escape_formatter(output, state, value),
    }
}

/// Escapes the five characters with predefined XML entities.
fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for character in text.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
