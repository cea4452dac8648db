//! Public AST types for country table and translation catalog files.
//!
//! These types are public to enable external tooling (checkers, formatters, etc.).

/// A `[name]` section and the `key=value` entries that follow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Section name as written between the brackets, trimmed.
    pub name: String,
    /// Entries in file order.
    pub entries: Vec<Entry>,
}

/// A single `key=value` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    /// Value with surrounding whitespace removed. May be empty.
    pub value: String,
}

impl Section {
    /// Get the value of the first entry with `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value.as_str())
    }
}
