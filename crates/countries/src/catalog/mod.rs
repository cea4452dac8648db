//! Country reference data: the configured table, locale context, and the
//! locale-sorted registry built from them.
//!
//! A [`CountryTable`] is read once from configuration. A [`CountryLocale`]
//! supplies translated names, collation and text transforms. Together they
//! build a [`CountryRegistry`], which a [`RegistryCache`] keeps per language.

mod cache;
mod error;
mod locale;
mod registry;
mod suggest;
mod table;
pub mod transforms;

pub use cache::RegistryCache;
pub use error::{LoadError, LoadWarning, TransformError};
pub use locale::{CATALOG_SECTION, CountryLocale, NameCollator};
pub use registry::{CountryRegistry, apply_translations, sort_by_name};
pub use suggest::compute_suggestions;
pub use table::CountryTable;
pub use transforms::TransformRegistry;
