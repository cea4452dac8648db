//! String projections of attribute content.
//!
//! Title, sort key and search metadata all start from the same string: the
//! display names of the selection joined by `,`, or the legacy value as-is.

use std::borrow::Cow;

use crate::catalog::CountryLocale;
use crate::types::Selection;

/// Separator between names in projected strings.
const NAME_SEPARATOR: &str = ",";

/// Display names joined in selection order, or the legacy value unchanged.
///
/// Every entry contributes, so an unresolved entry leaves an empty slot:
/// `"ZZ,FR"` projects to `",France"`, not `"France"`.
fn joined_names(selection: &Selection) -> Cow<'_, str> {
    match selection {
        Selection::Set(set) => Cow::Owned(set.names().collect::<Vec<_>>().join(NAME_SEPARATOR)),
        Selection::Legacy(value) => Cow::Borrowed(value),
    }
}

/// The display title of the content.
///
/// Unresolved entries keep their empty slot in the joined string.
pub fn title(selection: &Selection) -> String {
    joined_names(selection).into_owned()
}

/// The string indexed for search.
pub fn metadata(selection: &Selection) -> String {
    joined_names(selection).into_owned()
}

/// The sort key, normalized by `transform`.
pub fn sort_key(selection: &Selection, transform: impl FnOnce(&str) -> String) -> String {
    transform(&joined_names(selection))
}

/// The sort key, lowercased under `locale`'s case rules.
///
/// # Example
///
/// ```
/// use countries::{CountryLocale, CountryRecord, Selection, SelectionSet, sort_key_for_locale};
///
/// let set: SelectionSet = [CountryRecord::new("FR", "France")].into_iter().collect();
/// let key = sort_key_for_locale(&Selection::Set(set), &CountryLocale::new());
/// assert_eq!(key, "france");
/// ```
pub fn sort_key_for_locale(selection: &Selection, locale: &CountryLocale) -> String {
    sort_key(selection, |text| locale.lowercase(text))
}

/// Returns true if the content holds a selection or a non-blank legacy value.
pub fn has_content(selection: &Selection) -> bool {
    match selection {
        Selection::Set(set) => !set.is_empty(),
        Selection::Legacy(value) => !value.trim().is_empty(),
    }
}
