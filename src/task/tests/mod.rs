//! Unit tests for task execution.

mod helpers;
