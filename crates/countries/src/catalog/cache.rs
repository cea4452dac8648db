//! Per-language cache of built registries.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::catalog::locale::CountryLocale;
use crate::catalog::registry::CountryRegistry;
use crate::catalog::table::CountryTable;

/// Thread-safe cache of registries built from one table, keyed by language
/// tag.
///
/// The table is bound when the cache is created, so every registry in a
/// cache comes from the same table. Each language is built at most once;
/// later requests for the same language share the same `Arc`. Switching the
/// active language builds a separate registry with that language's names and
/// collation instead of serving a stale one.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use countries::{CountryLocale, CountryTable, RegistryCache};
///
/// let table = CountryTable::parse("[FR]\nName=France\n").unwrap();
/// let cache = RegistryCache::new(table);
///
/// let first = cache.get_or_build(&CountryLocale::new());
/// let second = cache.get_or_build(&CountryLocale::new());
/// assert!(Arc::ptr_eq(&first, &second));
/// ```
#[derive(Debug)]
pub struct RegistryCache {
    table: CountryTable,
    registries: RwLock<HashMap<String, Arc<CountryRegistry>>>,
}

impl RegistryCache {
    /// Create an empty cache for `table`.
    pub fn new(table: CountryTable) -> Self {
        Self {
            table,
            registries: RwLock::default(),
        }
    }

    /// The table every registry in this cache is built from.
    pub fn table(&self) -> &CountryTable {
        &self.table
    }

    /// Get the registry for `locale`'s language, building it on first use.
    ///
    /// Translations are read from `locale` only when the language is first
    /// built; call [`RegistryCache::invalidate`] after reloading a catalog.
    pub fn get_or_build(&self, locale: &CountryLocale) -> Arc<CountryRegistry> {
        if let Some(registry) = self.get(locale.language()) {
            return registry;
        }

        let mut registries = self
            .registries
            .write()
            .expect("registry cache lock poisoned");
        // Another thread may have built it between the read and write locks.
        let registry = registries
            .entry(locale.language().to_string())
            .or_insert_with(|| {
                debug!(language = locale.language(), "registry cache miss");
                Arc::new(CountryRegistry::build(&self.table, locale))
            });
        Arc::clone(registry)
    }

    /// Get a cached registry without building.
    pub fn get(&self, language: &str) -> Option<Arc<CountryRegistry>> {
        self.registries
            .read()
            .expect("registry cache lock poisoned")
            .get(language)
            .cloned()
    }

    /// Drop the cached registry for one language.
    pub fn invalidate(&self, language: &str) -> bool {
        self.registries
            .write()
            .expect("registry cache lock poisoned")
            .remove(language)
            .is_some()
    }

    /// Drop every cached registry.
    pub fn clear(&self) {
        self.registries
            .write()
            .expect("registry cache lock poisoned")
            .clear();
    }

    pub fn len(&self) -> usize {
        self.registries
            .read()
            .expect("registry cache lock poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
