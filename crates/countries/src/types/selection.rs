use indexmap::IndexMap;

use super::CountryRecord;

/// The chosen countries of one attribute, in input order.
///
/// Keys are unique: selecting an already present code again keeps the first
/// entry and its position. An entry is either a resolved [`CountryRecord`] or
/// an unresolved placeholder, which only appears when a stored value names a
/// code the registry no longer knows.
///
/// # Example
///
/// ```
/// use countries::{CountryRecord, SelectionSet};
///
/// let mut selection = SelectionSet::new();
/// selection.insert(CountryRecord::new("FR", "France"));
/// selection.insert(CountryRecord::new("US", "United States"));
/// selection.insert(CountryRecord::new("FR", "France"));
///
/// assert_eq!(selection.codes().collect::<Vec<_>>(), ["FR", "US"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    entries: IndexMap<String, Option<CountryRecord>>,
}

impl SelectionSet {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resolved country keyed by its code.
    ///
    /// Returns false if the code was already selected; the selection is left
    /// unchanged in that case.
    pub fn insert(&mut self, record: CountryRecord) -> bool {
        self.insert_entry(record.alpha2().to_string(), Some(record))
    }

    /// Add a placeholder for a stored key that did not resolve.
    ///
    /// Returns false if the key was already present.
    pub fn insert_unresolved(&mut self, key: impl Into<String>) -> bool {
        self.insert_entry(key.into(), None)
    }

    fn insert_entry(&mut self, key: String, value: Option<CountryRecord>) -> bool {
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, value);
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if `code` is a key of this selection.
    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    /// Get the resolved record for `code`, if selected and resolved.
    pub fn get(&self, code: &str) -> Option<&CountryRecord> {
        self.entries.get(code).and_then(Option::as_ref)
    }

    /// Iterate over all keys in selection order, placeholders included.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over keys and their records in selection order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Option<&CountryRecord>)> {
        self.entries
            .iter()
            .map(|(key, record)| (key.as_str(), record.as_ref()))
    }

    /// Iterate over resolved records, skipping placeholders.
    pub fn records(&self) -> impl Iterator<Item = &CountryRecord> {
        self.entries.values().filter_map(Option::as_ref)
    }

    /// Iterate over keys that did not resolve.
    pub fn unresolved(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, record)| record.is_none())
            .map(|(key, _)| key.as_str())
    }

    /// Iterate over display names in selection order.
    ///
    /// Placeholders contribute an empty name.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries
            .values()
            .map(|record| record.as_ref().map(CountryRecord::name).unwrap_or_default())
    }
}

impl PartialEq for SelectionSet {
    /// Selections are equal when they hold the same entries in the same order.
    fn eq(&self, other: &Self) -> bool {
        self.entries.iter().eq(other.entries.iter())
    }
}

impl Eq for SelectionSet {}

impl FromIterator<CountryRecord> for SelectionSet {
    fn from_iter<T: IntoIterator<Item = CountryRecord>>(iter: T) -> Self {
        let mut selection = SelectionSet::new();
        for record in iter {
            selection.insert(record);
        }
        selection
    }
}

/// The content of a country attribute.
///
/// Current values are a [`SelectionSet`]. Values written before codes were
/// stored hold a free-text country name, kept verbatim as `Legacy`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Set(SelectionSet),
    Legacy(String),
}

impl Selection {
    /// Wrap a plain string imported through a simple-string interface.
    ///
    /// The string is kept as a bare value; it is not resolved against the
    /// registry.
    pub fn from_simple_string(value: impl Into<String>) -> Self {
        Selection::Legacy(value.into())
    }

    /// Get the selection set, or `None` for a legacy value.
    pub fn as_set(&self) -> Option<&SelectionSet> {
        match self {
            Selection::Set(set) => Some(set),
            Selection::Legacy(_) => None,
        }
    }

    /// Get the legacy string, or `None` for a selection set.
    pub fn as_legacy(&self) -> Option<&str> {
        match self {
            Selection::Set(_) => None,
            Selection::Legacy(value) => Some(value),
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Set(SelectionSet::new())
    }
}

impl From<SelectionSet> for Selection {
    fn from(set: SelectionSet) -> Self {
        Selection::Set(set)
    }
}
