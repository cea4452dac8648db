//! Storage encoding of selections.
//!
//! A selection is stored as its codes joined by `,`. Values written before
//! codes were stored hold a free-text country name; decoding keeps such a
//! value as [`Selection::Legacy`] instead of discarding it.

use crate::catalog::CountryRegistry;
use crate::types::{Selection, SelectionSet};

/// Separator between codes in a stored value.
pub const SEPARATOR: char = ',';

/// Encode a selection's keys in selection order.
///
/// An empty selection encodes to the empty string.
pub fn encode(selection: &SelectionSet) -> String {
    join(selection.codes())
}

/// Encode attribute content for storage.
///
/// Legacy values are stored unchanged.
pub fn encode_selection(selection: &Selection) -> String {
    match selection {
        Selection::Set(set) => encode(set),
        Selection::Legacy(value) => value.clone(),
    }
}

/// Join raw submitted tokens without resolving them.
///
/// Used for information-collection submissions, which store what was posted.
pub fn encode_collected<I>(tokens: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let tokens: Vec<I::Item> = tokens.into_iter().collect();
    join(tokens.iter().map(AsRef::as_ref))
}

/// Decode a stored value.
///
/// Each piece is resolved against the registry. A piece that does not
/// resolve is kept as an unresolved entry under its original text. When the
/// whole value is a single unresolved piece it is a legacy free-text value
/// and is returned verbatim as [`Selection::Legacy`]. The empty string
/// decodes to an empty selection.
///
/// Entries are keyed by canonical code, so repeated pieces collapse:
/// `"FR,fr"` decodes to one entry and re-encodes as `"FR"`, and `"FR,ZZ,ZZ"`
/// re-encodes as `"FR,ZZ"`. Only values made of distinct known codes survive
/// a decode and encode unchanged.
///
/// # Example
///
/// ```
/// use countries::{CountryLocale, CountryRegistry, CountryTable, Selection, decode};
///
/// let table = CountryTable::parse("[FR]\nName=France\n").unwrap();
/// let registry = CountryRegistry::build(&table, &CountryLocale::new());
///
/// assert_eq!(decode(&registry, "Elbonia"), Selection::Legacy("Elbonia".to_string()));
/// assert_eq!(decode(&registry, "FR").as_set().map(|s| s.len()), Some(1));
/// ```
pub fn decode(registry: &CountryRegistry, stored: &str) -> Selection {
    if stored.is_empty() {
        return Selection::Set(SelectionSet::new());
    }

    let mut selection = SelectionSet::new();
    for piece in stored.split(SEPARATOR) {
        match registry.find_by_alpha2(piece) {
            Some(record) => selection.insert(record.clone()),
            None => selection.insert_unresolved(piece),
        };
    }

    if selection.len() == 1 && selection.unresolved().next().is_some() {
        return Selection::Legacy(stored.to_string());
    }
    Selection::Set(selection)
}

/// Decode a stored default list, dropping codes that do not resolve.
///
/// Defaults never fall back to a legacy value.
pub fn decode_known(registry: &CountryRegistry, stored: &str) -> SelectionSet {
    stored
        .split(SEPARATOR)
        .filter_map(|piece| registry.find_by_alpha2(piece))
        .cloned()
        .collect()
}

fn join<'a>(pieces: impl Iterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for (index, piece) in pieces.enumerate() {
        if index > 0 {
            out.push(SEPARATOR);
        }
        out.push_str(piece);
    }
    out
}
