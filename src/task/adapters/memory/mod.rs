//! In-memory adapters.

mod environment;

pub use environment::InMemoryEnvironment;
