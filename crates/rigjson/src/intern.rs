//! Session-scoped interning of decoded strings and numbers.
//!
//! Both caches are pure memoization: lookups never mutate decoded content,
//! and a miss always records the freshly produced canonical before returning
//! it. They live inside one `Scanner` and are dropped (or cleared) with it,
//! so canonical identity is guaranteed within a decode session only.

use std::sync::Arc;

use ahash::{AHashMap, AHashSet};

/// Canonicalizes decoded string content. Equal strings observed within one
/// session share a single allocation.
#[derive(Debug, Default)]
pub(crate) struct StringCache {
    canonical: AHashSet<Arc<str>>,
}

impl StringCache {
    /// Returns the canonical instance for `content`, allocating one on the
    /// first occurrence.
    pub(crate) fn intern(&mut self, content: &str) -> Arc<str> {
        if let Some(existing) = self.canonical.get(content) {
            return Arc::clone(existing);
        }
        let canonical: Arc<str> = Arc::from(content);
        self.canonical.insert(Arc::clone(&canonical));
        canonical
    }

    /// Registers an already-built canonical, so other entry paths that hold
    /// `canonical` hand out the same instance the cache does.
    pub(crate) fn seed(&mut self, canonical: Arc<str>) {
        self.canonical.insert(canonical);
    }

    pub(crate) fn clear(&mut self) {
        self.canonical.clear();
    }
}

/// Canonicalizes single-precision numbers, keyed by bit pattern so `-0.0`
/// and `0.0` stay distinct and NaN payloads intern stably.
#[derive(Debug, Default)]
pub(crate) struct FloatCache {
    canonical: AHashMap<u32, Arc<f32>>,
}

impl FloatCache {
    pub(crate) fn intern(&mut self, value: f32) -> Arc<f32> {
        Arc::clone(
            self.canonical
                .entry(value.to_bits())
                .or_insert_with(|| Arc::new(value)),
        )
    }

    pub(crate) fn clear(&mut self) {
        self.canonical.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_strings_share_one_allocation() {
        let mut cache = StringCache::default();
        let first = cache.intern("setup");
        let second = cache.intern("setup");
        assert!(Arc::ptr_eq(&first, &second));
        assert_ne!(first.as_ptr(), cache.intern("other").as_ptr());
    }

    #[test]
    fn seeded_canonicals_win_over_later_interns() {
        let mut cache = StringCache::default();
        let seeded: Arc<str> = Arc::from("time");
        cache.seed(Arc::clone(&seeded));
        assert!(Arc::ptr_eq(&seeded, &cache.intern("time")));
    }

    #[test]
    fn equal_floats_share_one_allocation() {
        let mut cache = FloatCache::default();
        let first = cache.intern(2.5);
        let second = cache.intern(2.5);
        assert!(Arc::ptr_eq(&first, &second));
        assert!(!Arc::ptr_eq(&first, &cache.intern(3.5)));
    }

    #[test]
    fn signed_zeros_intern_separately() {
        let mut cache = FloatCache::default();
        let positive = cache.intern(0.0);
        let negative = cache.intern(-0.0);
        assert!(!Arc::ptr_eq(&positive, &negative));
        assert_eq!(*positive, *negative);
    }

    #[test]
    fn clearing_ends_the_session() {
        let mut strings = StringCache::default();
        let before = strings.intern("walk");
        strings.clear();
        assert!(!Arc::ptr_eq(&before, &strings.intern("walk")));

        let mut floats = FloatCache::default();
        let before = floats.intern(1.5);
        floats.clear();
        assert!(!Arc::ptr_eq(&before, &floats.intern(1.5)));
    }
}
