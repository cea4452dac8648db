//! The locale-sorted country registry.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::catalog::locale::{CountryLocale, NameCollator};
use crate::catalog::table::CountryTable;
use crate::types::{CountryCode, CountryField, CountryRecord};

/// The country reference list for one locale.
///
/// Built once from a [`CountryTable`] and a [`CountryLocale`]: names are
/// translated where the locale has a translation, then the list is sorted by
/// name under the locale's collation. A registry is never mutated after it is
/// built.
///
/// # Example
///
/// ```
/// use countries::{CountryLocale, CountryRegistry, CountryTable};
///
/// let table = CountryTable::parse(r#"
/// [US]
/// Name=United States
/// [FR]
/// Name=France
/// "#).unwrap();
/// let registry = CountryRegistry::build(&table, &CountryLocale::new());
///
/// let names: Vec<&str> = registry.all().iter().map(|c| c.name()).collect();
/// assert_eq!(names, ["France", "United States"]);
/// assert_eq!(registry.find_by_alpha2("us").unwrap().name(), "United States");
/// ```
#[derive(Debug, Clone)]
pub struct CountryRegistry {
    /// Language the names and order were built for.
    language: String,
    /// Records sorted by name.
    countries: Vec<CountryRecord>,
    /// Maps each code to its position in `countries`.
    by_code: HashMap<CountryCode, usize>,
}

impl CountryRegistry {
    /// Build a registry from a table for the given locale.
    pub fn build(table: &CountryTable, locale: &CountryLocale) -> Self {
        let mut countries = table.records().to_vec();
        let translated = apply_translations(&mut countries, locale.translations());
        sort_by_name(&mut countries, &locale.collator());

        let by_code = countries
            .iter()
            .enumerate()
            .map(|(index, record)| (record.code().clone(), index))
            .collect();

        debug!(
            language = locale.language(),
            countries = countries.len(),
            translated,
            "built country registry"
        );

        Self {
            language: locale.language().to_string(),
            countries,
            by_code,
        }
    }

    /// The language this registry was built for.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// All countries, sorted by name.
    pub fn all(&self) -> &[CountryRecord] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Find a country whose `field` equals `value`.
    ///
    /// `Alpha2` lookups upper-case `value` first. Every other field is
    /// compared exactly. Returns `None` when nothing matches, which is an
    /// ordinary outcome for blank or unknown input.
    pub fn find_by(&self, field: &CountryField, value: &str) -> Option<&CountryRecord> {
        match field {
            CountryField::Alpha2 => self.find_by_alpha2(value),
            _ => self
                .countries
                .iter()
                .find(|record| record.field(field) == Some(value)),
        }
    }

    /// Find a country by code, case-insensitively.
    pub fn find_by_alpha2(&self, code: &str) -> Option<&CountryRecord> {
        self.by_code
            .get(code.to_ascii_uppercase().as_str())
            .map(|&index| &self.countries[index])
    }

    /// Find a country by exact display name.
    pub fn find_by_name(&self, name: &str) -> Option<&CountryRecord> {
        self.find_by(&CountryField::Name, name)
    }
}

/// Replace default names with translations where one exists.
///
/// Returns the number of records that were translated.
pub fn apply_translations(
    records: &mut [CountryRecord],
    translations: &BTreeMap<CountryCode, String>,
) -> usize {
    let mut translated = 0;
    for record in records.iter_mut() {
        if let Some(name) = translations.get(record.code()).filter(|name| !name.is_empty()) {
            record.set_name(name.clone());
            translated += 1;
        }
    }
    translated
}

/// Stable sort of records by name under `collator`.
pub fn sort_by_name(records: &mut [CountryRecord], collator: &NameCollator) {
    records.sort_by(|a, b| collator.compare(a.name(), b.name()));
}
