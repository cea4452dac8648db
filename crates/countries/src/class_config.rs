//! Class-level defaults of a country attribute.

use serde::{Deserialize, Serialize};

use crate::catalog::CountryRegistry;
use crate::codec::{decode_known, encode};
use crate::resolver::resolve_codes;
use crate::types::SelectionSet;

/// Default selection and choice mode configured on a content class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassDefaultConfig {
    pub defaults: SelectionSet,
    pub multiple_choice: bool,
}

/// The two storage fields backing a [`ClassDefaultConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredClassFields {
    /// Default codes joined by `,`.
    pub default_list: String,
    /// `1` when several countries may be chosen, `0` otherwise.
    pub multiple_choice: i64,
}

impl ClassDefaultConfig {
    /// Build the configuration from submitted class settings.
    ///
    /// Default tokens resolve like object input: blank and unknown codes are
    /// dropped.
    pub fn from_input<I>(registry: &CountryRegistry, multiple_choice: bool, default_tokens: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self {
            defaults: resolve_codes(registry, default_tokens),
            multiple_choice,
        }
    }

    /// Convert to storage fields.
    pub fn to_stored(&self) -> StoredClassFields {
        StoredClassFields {
            default_list: encode(&self.defaults),
            multiple_choice: i64::from(self.multiple_choice),
        }
    }

    /// Read from storage fields.
    ///
    /// Codes that no longer resolve are dropped; any non-zero flag enables
    /// multiple choice.
    pub fn from_stored(registry: &CountryRegistry, fields: &StoredClassFields) -> Self {
        Self {
            defaults: decode_known(registry, &fields.default_list),
            multiple_choice: fields.multiple_choice != 0,
        }
    }
}
