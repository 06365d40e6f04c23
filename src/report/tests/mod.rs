//! Unit tests for the report writers.

mod helpers;
mod output_tests;
