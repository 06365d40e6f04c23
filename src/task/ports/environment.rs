//! Environment port for property lookup.

use std::collections::BTreeMap;

/// Read access to the migration environment properties.
///
/// Implementations record every property name looked up so reports can list
/// exactly the configuration a run depended on.
pub trait Environment: Send + Sync {
    /// Returns the raw value of a property.
    fn property_as_string(&self, name: &str) -> Option<String>;

    /// Returns a property parsed as a boolean.
    ///
    /// `true` and `false` are accepted in any letter case; any other value
    /// reads as absent.
    fn property_as_boolean(&self, name: &str) -> Option<bool> {
        self.property_as_string(name)
            .and_then(|value| parse_boolean(&value))
    }

    /// Returns every property name read so far with its resolved value.
    fn properties_read(&self) -> BTreeMap<String, Option<String>>;
}

fn parse_boolean(value: &str) -> Option<bool> {
    let normalized = value.trim();
    if normalized.eq_ignore_ascii_case("true") {
        Some(true)
    } else if normalized.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
