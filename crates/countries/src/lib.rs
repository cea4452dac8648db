//! Country reference data for content fields whose value is one or more
//! countries.
//!
//! The crate loads a country table, sorts it by translated name under the
//! active locale, resolves submitted codes or names to a [`SelectionSet`],
//! encodes selections for storage, and derives title, sort key and search
//! metadata strings from them.
//!
//! # Example
//!
//! ```
//! use countries::{
//!     CountryLocale, CountryRegistry, CountryTable, decode, encode, resolve_codes, title,
//! };
//!
//! let table = CountryTable::parse(r#"
//! [US]
//! Name=United States
//! [FR]
//! Name=France
//! [DE]
//! Name=Germany
//! "#).unwrap();
//! let registry = CountryRegistry::build(&table, &CountryLocale::new());
//!
//! let selection = resolve_codes(&registry, ["FR", "US"]);
//! let stored = encode(&selection);
//! assert_eq!(stored, "FR,US");
//!
//! let content = decode(&registry, &stored);
//! assert_eq!(title(&content), "France,United States");
//! ```

pub mod catalog;
pub mod class_config;
pub mod codec;
pub mod global;
pub mod parser;
pub mod projection;
pub mod resolver;
pub mod types;
pub mod validation;

pub use catalog::{
    CountryLocale, CountryRegistry, CountryTable, LoadError, LoadWarning, RegistryCache,
    TransformError, TransformRegistry, compute_suggestions,
};
pub use class_config::{ClassDefaultConfig, StoredClassFields};
pub use codec::{decode, decode_known, encode, encode_collected, encode_selection};
pub use projection::{has_content, metadata, sort_key, sort_key_for_locale, title};
pub use resolver::{RawInput, resolve_codes, resolve_input, resolve_name};
pub use types::{CountryCode, CountryField, CountryRecord, Selection, SelectionSet};
pub use validation::{ValidationState, validate_required};
