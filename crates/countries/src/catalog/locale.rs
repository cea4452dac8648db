//! Locale context for country names.
//!
//! The CountryLocale struct provides the locale collaborator of the registry:
//! translated country names, collation for sorting them, and text-transform
//! groups for deriving sort keys.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use bon::Builder;
use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};
use icu_locale_core::{LanguageIdentifier, Locale, locale};
use tracing::{debug, warn};

use crate::catalog::error::{LoadError, LoadWarning, TransformError};
use crate::catalog::table::CountryTable;
use crate::catalog::transforms::{LOWERCASE, TransformRegistry};
use crate::parser::parse_file;
use crate::types::CountryCode;

/// Section of a translation catalog holding `CODE=Translated name` entries.
pub const CATALOG_SECTION: &str = "CountryNames";

/// Locale context used to build a country registry.
///
/// Holds the active language, the translated country names for that
/// language, and the transform groups used for sort keys.
///
/// # Example
///
/// ```
/// use countries::CountryLocale;
///
/// let mut locale = CountryLocale::builder().language("de").build();
/// locale.load_translations_str(r#"
/// [CountryNames]
/// DE=Deutschland
/// FR=Frankreich
/// "#).unwrap();
///
/// assert_eq!(locale.translated_name("fr"), Some("Frankreich"));
/// assert_eq!(locale.language(), "de");
/// ```
#[derive(Builder)]
#[builder(on(String, into))]
pub struct CountryLocale {
    /// Current language tag (e.g., "en", "de", "pt-BR").
    #[builder(default = "en".to_string())]
    language: String,

    /// Translated names keyed by code.
    #[builder(default)]
    translations: BTreeMap<CountryCode, String>,

    /// Catalog sections other than `[CountryNames]` seen by the last load.
    #[builder(skip)]
    ignored_sections: Vec<String>,

    /// Text-transform groups for sort keys.
    #[builder(skip)]
    transforms: TransformRegistry,

    /// Catalog file path for reload support.
    /// Only populated for file-loaded catalogs, not string-loaded.
    #[builder(skip)]
    loaded_path: Option<PathBuf>,
}

impl Default for CountryLocale {
    fn default() -> Self {
        CountryLocale::builder().build()
    }
}

impl CountryLocale {
    /// Create a new locale with default settings (English, no translations).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new locale with the specified language.
    pub fn with_language(language: impl Into<String>) -> Self {
        CountryLocale::builder().language(language.into()).build()
    }

    // =========================================================================
    // Language Management
    // =========================================================================

    /// Get the current language tag.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Change the current language.
    ///
    /// This does not reload translations; load the catalog for the new
    /// language separately.
    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    /// Parse the language tag as an ICU locale.
    ///
    /// `_` separators are accepted (`pt_BR`). An unparseable tag falls back
    /// to the root locale.
    pub fn icu_locale(&self) -> Locale {
        let tag = self.language.trim().replace('_', "-");
        match tag.parse::<Locale>() {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(
                    language = %self.language,
                    error = %e,
                    "invalid language tag; using root locale"
                );
                locale!("und")
            }
        }
    }

    /// The language identifier used for case mapping.
    pub fn language_identifier(&self) -> LanguageIdentifier {
        self.icu_locale().id
    }

    // =========================================================================
    // Translations
    // =========================================================================

    /// Get the translated name for `code`, if the catalog has one.
    pub fn translated_name(&self, code: &str) -> Option<&str> {
        self.translations
            .get(code.to_ascii_uppercase().as_str())
            .map(String::as_str)
    }

    /// All translations keyed by code.
    pub fn translations(&self) -> &BTreeMap<CountryCode, String> {
        &self.translations
    }

    /// Add or replace one translation.
    pub fn insert_translation(&mut self, code: impl Into<CountryCode>, name: impl Into<String>) {
        self.translations.insert(code.into(), name.into());
    }

    /// Load a translation catalog from a file.
    ///
    /// Loading **replaces** all previous translations. The path is stored
    /// for later `reload_translations()` support.
    pub fn load_translations(&mut self, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let count = self.load_translations_internal(&content, Some(path))?;
        self.loaded_path = Some(path.to_path_buf());
        Ok(count)
    }

    /// Load a translation catalog from a string.
    ///
    /// Catalogs loaded this way cannot be reloaded via `reload_translations()`.
    /// Loading **replaces** all previous translations.
    pub fn load_translations_str(&mut self, content: &str) -> Result<usize, LoadError> {
        self.loaded_path = None;
        self.load_translations_internal(content, None)
    }

    /// Reload the catalog from the file it was last loaded from.
    pub fn reload_translations(&mut self) -> Result<usize, LoadError> {
        let path = self
            .loaded_path
            .clone()
            .ok_or_else(|| LoadError::NoPathForReload {
                language: self.language.clone(),
            })?;
        self.load_translations(path)
    }

    /// Check the loaded catalog against a country table.
    ///
    /// Reports translations for codes the table does not define and catalog
    /// sections that were ignored. Warnings are sorted by code.
    pub fn validate_translations(&self, table: &CountryTable) -> Vec<LoadWarning> {
        let mut warnings: Vec<LoadWarning> = self
            .ignored_sections
            .iter()
            .map(|section| LoadWarning::IgnoredSection {
                section: section.clone(),
                language: self.language.clone(),
            })
            .collect();

        for code in self.translations.keys() {
            if !table.contains(code) {
                warnings.push(LoadWarning::UnknownCountry {
                    code: code.to_string(),
                    language: self.language.clone(),
                });
            }
        }
        warnings
    }

    fn load_translations_internal(
        &mut self,
        content: &str,
        path: Option<&Path>,
    ) -> Result<usize, LoadError> {
        let path_buf = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(format!("<{}>", self.language)));
        let sections = parse_file(content).map_err(|e| LoadError::from_parse(path_buf, e))?;

        self.translations.clear();
        self.ignored_sections.clear();
        for section in sections {
            if section.name != CATALOG_SECTION {
                self.ignored_sections.push(section.name);
                continue;
            }
            for entry in section.entries {
                // An empty translation keeps the table's default name.
                if entry.value.is_empty() {
                    continue;
                }
                self.translations
                    .insert(CountryCode::new(&entry.key), entry.value);
            }
        }

        debug!(
            language = %self.language,
            translations = self.translations.len(),
            "loaded country name catalog"
        );
        Ok(self.translations.len())
    }

    // =========================================================================
    // Collation and Transforms
    // =========================================================================

    /// Build the collator for the current language.
    pub fn collator(&self) -> NameCollator {
        NameCollator::new(self.icu_locale())
    }

    /// Compare two display names under the current language's collation.
    ///
    /// Builds a collator on every call. To compare many names, get one from
    /// [`CountryLocale::collator`] and reuse it, as [`sort_by_name`] does.
    ///
    /// [`sort_by_name`]: crate::catalog::sort_by_name
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator().compare(a, b)
    }

    /// Get the shared transform registry (read-only).
    pub fn transforms(&self) -> &TransformRegistry {
        &self.transforms
    }

    /// Get the transform registry (mutable) for registering custom groups.
    pub fn transforms_mut(&mut self) -> &mut TransformRegistry {
        &mut self.transforms
    }

    /// Apply a named transform group using the current language.
    pub fn transform(&self, text: &str, group: &str) -> Result<String, TransformError> {
        self.transforms
            .apply(group, text, &self.language_identifier())
    }

    /// Lowercase `text` under the current language's case rules.
    pub fn lowercase(&self, text: &str) -> String {
        self.transform(text, LOWERCASE)
            .unwrap_or_else(|_| text.to_lowercase())
    }
}

/// Collation-aware comparator for display names.
///
/// Falls back to code point order when no collator is available for the
/// locale.
pub struct NameCollator {
    collator: Option<CollatorBorrowed<'static>>,
}

impl NameCollator {
    /// Build a collator for `locale`.
    pub fn new(locale: Locale) -> Self {
        match Collator::try_new((&locale).into(), CollatorOptions::default()) {
            Ok(collator) => Self {
                collator: Some(collator),
            },
            Err(e) => {
                warn!(
                    locale = %locale,
                    error = %e,
                    "no collation data; sorting by code point"
                );
                Self { collator: None }
            }
        }
    }

    /// Compare two strings.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => a.cmp(b),
        }
    }
}
