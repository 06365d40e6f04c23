//! Reports over a finished migration run.
//!
//! A [`domain::MigrationReport`] bundles the execution tree with run
//! metadata. Writers implementing [`ports::ReportWriter`] turn it into a
//! plain-text summary, a lossless XML document or a browsable HTML page.

pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
