use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use super::CountryCode;

/// Field name of the alpha-2 code in tables and lookups.
pub const ALPHA2_FIELD: &str = "Alpha2";

/// Field name of the display name in tables and lookups.
pub const NAME_FIELD: &str = "Name";

/// One entry of the country reference list.
///
/// A record carries its canonical code, a display name (translated for the
/// registry's locale when a translation exists, otherwise the table default)
/// and whatever auxiliary fields the table defines, such as `Alpha3` or `IDC`.
///
/// # Example
///
/// ```
/// use countries::CountryRecord;
///
/// let france = CountryRecord::new("fr", "France").with_attribute("Alpha3", "FRA");
/// assert_eq!(france.alpha2(), "FR");
/// assert_eq!(france.attribute("Alpha3"), Some("FRA"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    code: CountryCode,
    name: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    attributes: BTreeMap<String, String>,
}

impl CountryRecord {
    /// Create a record with no auxiliary fields.
    pub fn new(code: impl Into<CountryCode>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Add an auxiliary field, returning the updated record.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn code(&self) -> &CountryCode {
        &self.code
    }

    pub fn alpha2(&self) -> &str {
        self.code.as_str()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a field by its table name.
    ///
    /// `Alpha2` and `Name` resolve to the code and display name; every other
    /// key reads the auxiliary fields.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        match key {
            ALPHA2_FIELD => Some(self.alpha2()),
            NAME_FIELD => Some(self.name()),
            _ => self.attributes.get(key).map(String::as_str),
        }
    }

    /// Get a field value by [`CountryField`].
    pub fn field(&self, field: &CountryField) -> Option<&str> {
        match field {
            CountryField::Alpha2 => Some(self.alpha2()),
            CountryField::Name => Some(self.name()),
            CountryField::Attribute(key) => self.attribute(key),
        }
    }

    /// Iterate over the auxiliary fields in key order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

/// The field a registry lookup compares against.
///
/// Parsed from the table field names: `"Alpha2"`, `"Name"`, or any other
/// key as an auxiliary attribute. Lookups default to `Name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CountryField {
    Alpha2,
    #[default]
    Name,
    Attribute(String),
}

impl From<&str> for CountryField {
    fn from(s: &str) -> Self {
        match s {
            ALPHA2_FIELD => CountryField::Alpha2,
            NAME_FIELD => CountryField::Name,
            other => CountryField::Attribute(other.to_string()),
        }
    }
}

impl Display for CountryField {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            CountryField::Alpha2 => write!(f, "{ALPHA2_FIELD}"),
            CountryField::Name => write!(f, "{NAME_FIELD}"),
            CountryField::Attribute(key) => write!(f, "{key}"),
        }
    }
}
