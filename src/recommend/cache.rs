//! Generation-stamped cache for derived similarity state.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Versions of the sources a cached value was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DataVersion {
    /// [`Catalog::version`](super::Catalog::version) at build time
    pub catalog: u64,
    /// [`RatingStore::version`](super::RatingStore::version) at build time
    pub ratings: u64,
}

impl DataVersion {
    /// Stamp for state derived from both sources.
    #[must_use]
    pub fn new(catalog: u64, ratings: u64) -> Self {
        Self { catalog, ratings }
    }

    /// Stamp for state derived from the catalog alone.
    #[must_use]
    pub fn catalog_only(catalog: u64) -> Self {
        Self {
            catalog,
            ratings: 0,
        }
    }
}

/// A value paired with the [`DataVersion`] it was built from.
///
/// `get_or_build` hands out the cached value while the stamp matches and
/// rebuilds it otherwise. The check and the rebuild run under one lock, so
/// concurrent readers never observe a matrix paired with another version's
/// row order.
///
/// # Examples
///
/// ```
/// use movierec::recommend::{DataVersion, VersionedCache};
/// use std::sync::Arc;
///
/// let cache = VersionedCache::new();
/// let a = cache.get_or_build(DataVersion::new(1, 1), || vec![1.0]);
/// let b = cache.get_or_build(DataVersion::new(1, 1), || vec![2.0]);
/// assert!(Arc::ptr_eq(&a, &b));
///
/// let c = cache.get_or_build(DataVersion::new(1, 2), || vec![3.0]);
/// assert_eq!(*c, vec![3.0]);
/// ```
#[derive(Debug)]
pub struct VersionedCache<T> {
    slot: Mutex<Option<(DataVersion, Arc<T>)>>,
}

impl<T> VersionedCache<T> {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<(DataVersion, Arc<T>)>> {
        // the slot is only ever replaced whole, so a poisoned value is still consistent
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Cached value for `version`, building it with `build` if stale or absent.
    pub fn get_or_build<F>(&self, version: DataVersion, build: F) -> Arc<T>
    where
        F: FnOnce() -> T,
    {
        let mut slot = self.lock();
        if let Some((stamp, value)) = slot.as_ref() {
            if *stamp == version {
                return Arc::clone(value);
            }
        }
        let value = Arc::new(build());
        *slot = Some((version, Arc::clone(&value)));
        value
    }

    /// Cached value, only if it was built from `version`.
    #[must_use]
    pub fn get_if_fresh(&self, version: DataVersion) -> Option<Arc<T>> {
        self.lock()
            .as_ref()
            .filter(|(stamp, _)| *stamp == version)
            .map(|(_, value)| Arc::clone(value))
    }

    /// Version of the cached value, if any.
    #[must_use]
    pub fn stamp(&self) -> Option<DataVersion> {
        self.lock().as_ref().map(|(stamp, _)| *stamp)
    }

    /// Drop the cached value.
    pub fn invalidate(&self) {
        *self.lock() = None;
    }
}

impl<T> Default for VersionedCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_builds_once_per_version() {
        let cache = VersionedCache::new();
        let builds = Cell::new(0);
        let build = || {
            builds.set(builds.get() + 1);
            builds.get()
        };

        assert_eq!(*cache.get_or_build(DataVersion::new(0, 1), build), 1);
        assert_eq!(*cache.get_or_build(DataVersion::new(0, 1), build), 1);
        assert_eq!(builds.get(), 1);

        assert_eq!(*cache.get_or_build(DataVersion::new(1, 1), build), 2);
        assert_eq!(builds.get(), 2);
    }

    #[test]
    fn test_get_if_fresh() {
        let cache = VersionedCache::new();
        assert!(cache.get_if_fresh(DataVersion::default()).is_none());

        cache.get_or_build(DataVersion::catalog_only(3), || "matrix");
        assert!(cache.get_if_fresh(DataVersion::catalog_only(3)).is_some());
        assert!(cache.get_if_fresh(DataVersion::catalog_only(4)).is_none());
        assert_eq!(cache.stamp(), Some(DataVersion::new(3, 0)));
    }

    #[test]
    fn test_invalidate() {
        let cache = VersionedCache::new();
        cache.get_or_build(DataVersion::new(1, 1), || 7);
        cache.invalidate();
        assert_eq!(cache.stamp(), None);
        assert_eq!(*cache.get_or_build(DataVersion::new(1, 1), || 8), 8);
    }
}
