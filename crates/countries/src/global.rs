//! Process-wide registry cache.
//!
//! Provides a shared [`RegistryCache`] for callers that cannot pass a
//! registry through explicitly. Code that can should build a
//! [`CountryRegistry`] once and pass it by reference instead.
//!
//! The shared cache is bound to the table passed to [`install`]. Until a
//! table is installed there is nothing to build from and lookups return
//! `None`.

use std::sync::{Arc, RwLock};

use crate::catalog::{CountryLocale, CountryRegistry, CountryTable, RegistryCache};

static GLOBAL_CACHE: RwLock<Option<Arc<RegistryCache>>> = RwLock::new(None);

/// Bind the shared cache to `table`.
///
/// Replaces any previously installed table together with every registry
/// built from it.
pub fn install(table: CountryTable) {
    let mut guard = GLOBAL_CACHE.write().expect("global cache lock poisoned");
    *guard = Some(Arc::new(RegistryCache::new(table)));
}

/// Get the shared registry for `locale`'s language, building it on first use.
///
/// Returns `None` when no table has been installed.
pub fn registry(locale: &CountryLocale) -> Option<Arc<CountryRegistry>> {
    with_cache(|cache| cache.get_or_build(locale))
}

/// Provides access to the shared cache, if a table has been installed.
pub fn with_cache<T>(f: impl FnOnce(&RegistryCache) -> T) -> Option<T> {
    let cache = GLOBAL_CACHE
        .read()
        .expect("global cache lock poisoned")
        .clone();
    cache.map(|cache| f(&cache))
}

/// Drop every registry in the shared cache, keeping the installed table.
pub fn clear() {
    with_cache(RegistryCache::clear);
}
