//! Adapter implementations for task execution ports.

pub mod memory;
