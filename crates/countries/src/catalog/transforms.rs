//! Named text-transform groups used to derive sort keys.
//!
//! A group maps a display string to a normalized form (e.g. `lowercase`).
//! The built-in groups use ICU4X case mapping, so language-specific rules
//! such as the Turkish dotted and dotless i apply.

use std::collections::HashMap;

use icu_casemap::CaseMapper;
use icu_locale_core::LanguageIdentifier;

use crate::catalog::error::TransformError;

/// Group name of the lowercase transform used for sort keys.
pub const LOWERCASE: &str = "lowercase";

/// Group name of the uppercase transform.
pub const UPPERCASE: &str = "uppercase";

/// Group name of the transform that returns its input unchanged.
pub const IDENTITY: &str = "identity";

/// Transform function signature.
///
/// Takes the text to transform and the language whose case rules apply.
pub type TransformFn = fn(&str, &LanguageIdentifier) -> String;

/// Registry for text-transform groups.
///
/// Starts with the `lowercase`, `uppercase` and `identity` groups. Custom
/// groups registered under an existing name replace it.
pub struct TransformRegistry {
    groups: HashMap<String, TransformFn>,
}

impl TransformRegistry {
    /// Create a registry holding the built-in groups.
    pub fn new() -> Self {
        let mut registry = Self {
            groups: HashMap::new(),
        };
        registry.register(LOWERCASE, lowercase);
        registry.register(UPPERCASE, uppercase);
        registry.register(IDENTITY, identity);
        registry
    }

    /// Get a transform by group name.
    pub fn get(&self, name: &str) -> Option<TransformFn> {
        self.groups.get(name).copied()
    }

    /// Check if a group exists.
    pub fn has_group(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    /// Register a transform under `name`.
    pub fn register(&mut self, name: impl Into<String>, f: TransformFn) {
        self.groups.insert(name.into(), f);
    }

    /// Apply the group `name` to `text`.
    pub fn apply(
        &self,
        name: &str,
        text: &str,
        lang: &LanguageIdentifier,
    ) -> Result<String, TransformError> {
        let f = self.get(name).ok_or_else(|| TransformError::UnknownGroup {
            name: name.to_string(),
        })?;
        Ok(f(text, lang))
    }
}

impl Default for TransformRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn lowercase(text: &str, lang: &LanguageIdentifier) -> String {
    String::from(CaseMapper::new().lowercase_to_string(text, lang))
}

fn uppercase(text: &str, lang: &LanguageIdentifier) -> String {
    String::from(CaseMapper::new().uppercase_to_string(text, lang))
}

fn identity(text: &str, _lang: &LanguageIdentifier) -> String {
    text.to_string()
}
