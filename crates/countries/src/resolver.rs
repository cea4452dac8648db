//! Resolution of raw user input to a selection.
//!
//! Unresolvable input is never an error: blank tokens and unknown codes are
//! dropped, and an empty result simply means nothing was selected. Whether a
//! selection is required is decided by [`crate::validation`].

use crate::catalog::CountryRegistry;
use crate::types::SelectionSet;

/// Raw submitted value for a country attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    /// A list of alpha-2 codes, e.g. from a multi-select.
    Codes(Vec<String>),
    /// A single free-text country name.
    Name(String),
}

/// Resolve a list of codes against the registry.
///
/// Tokens are trimmed and matched case-insensitively. Empty and unknown
/// tokens are dropped. The result keeps input order and keys each entry by
/// its upper-cased code, so repeated codes collapse into one entry.
///
/// # Example
///
/// ```
/// use countries::{CountryLocale, CountryRegistry, CountryTable, resolve_codes};
///
/// let table = CountryTable::parse("[US]\nName=United States\n[FR]\nName=France\n").unwrap();
/// let registry = CountryRegistry::build(&table, &CountryLocale::new());
///
/// let selection = resolve_codes(&registry, ["US", "", "ZZ", "fr"]);
/// assert_eq!(selection.codes().collect::<Vec<_>>(), ["US", "FR"]);
/// ```
pub fn resolve_codes<I>(registry: &CountryRegistry, tokens: I) -> SelectionSet
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut selection = SelectionSet::new();
    for token in tokens {
        let token = token.as_ref().trim();
        if token.is_empty() {
            continue;
        }
        if let Some(record) = registry.find_by_alpha2(token) {
            selection.insert(record.clone());
        }
    }
    selection
}

/// Resolve a free-text country name against the registry.
///
/// Only exact matches on the display name count; there is no partial or
/// case-insensitive matching.
pub fn resolve_name(registry: &CountryRegistry, name: &str) -> SelectionSet {
    registry
        .all()
        .iter()
        .filter(|record| record.name() == name)
        .cloned()
        .collect()
}

/// Resolve either input shape.
pub fn resolve_input(registry: &CountryRegistry, input: &RawInput) -> SelectionSet {
    match input {
        RawInput::Codes(tokens) => resolve_codes(registry, tokens),
        RawInput::Name(name) => resolve_name(registry, name),
    }
}
