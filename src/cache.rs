// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Style interning cache
//!
//! A [`StyleCache`] maps each distinct [`StyleKey`] to a single shared
//! [`TextStyle`]. A process-wide instance is available via [`cache()`];
//! independent instances may be constructed for injection or for tests.

use crate::{InvalidArgument, StyleKey, TextStyle};
use std::collections::hash_map::{Entry, HashMap};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lookup counters of a [`StyleCache`]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered with an existing style
    pub hits: u64,
    /// Lookups which installed a new style
    pub misses: u64,
}

/// A snapshot of the contents of a [`StyleCache`]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CacheInfo {
    /// Number of distinct styles
    pub size: usize,
    /// Keys of cached styles, sorted
    pub styles: Vec<String>,
}

impl fmt::Display for CacheInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "StyleCache{{size={}, styles=[{}]}}",
            self.size,
            self.styles.join(", ")
        )
    }
}

/// Cache of shared text styles
///
/// Thread-safety is handled via an internal lock. For any key, at most one
/// [`TextStyle`] is ever installed; all callers of [`Self::get_or_create`]
/// with that key receive the same [`Arc`].
///
/// ```
/// # use kas_text_style::StyleCache;
/// # use std::sync::Arc;
/// let cache = StyleCache::new();
/// let a = cache.get_or_create("Inter", 14, true).unwrap();
/// let b = cache.get_or_create("Inter", 14, true).unwrap();
/// assert!(Arc::ptr_eq(&a, &b));
/// assert_eq!(cache.size(), 1);
/// ```
#[derive(Debug, Default)]
pub struct StyleCache {
    styles: RwLock<HashMap<StyleKey, Arc<TextStyle>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl StyleCache {
    /// Construct an empty cache
    pub fn new() -> Self {
        StyleCache::default()
    }

    // The map is only modified by single `insert`/`clear` calls, so a
    // poisoned lock still guards a consistent map.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<StyleKey, Arc<TextStyle>>> {
        self.styles.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<StyleKey, Arc<TextStyle>>> {
        self.styles.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get the shared style for the given attributes, creating it if needed
    ///
    /// Fails with [`InvalidArgument`] under the same conditions as
    /// [`TextStyle::new`]; in this case the cache is not modified.
    pub fn get_or_create(
        &self,
        font: &str,
        size: i32,
        bold: bool,
    ) -> Result<Arc<TextStyle>, InvalidArgument> {
        let key = StyleKey::new(font, size, bold)?;

        // 1st lock: shared, for the common case of an existing style
        if let Some(style) = self.read().get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(style.clone());
        }

        // 2nd lock: exclusive. Another thread may have inserted the key
        // since the 1st lock was released; the entry decides who wins.
        let mut styles = self.write();
        let style = match styles.entry(key) {
            Entry::Occupied(entry) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                entry.get().clone()
            }
            Entry::Vacant(entry) => {
                log::debug!("StyleCache: new style {}", entry.key());
                self.misses.fetch_add(1, Ordering::Relaxed);
                let style = Arc::new(TextStyle::from(entry.key().clone()));
                entry.insert(style).clone()
            }
        };
        Ok(style)
    }

    /// Get the shared style for an optional font, creating it if needed
    ///
    /// Fails with [`InvalidArgument::AbsentFont`] if `font` is `None`,
    /// otherwise as [`Self::get_or_create`].
    pub fn try_get_or_create(
        &self,
        font: Option<&str>,
        size: i32,
        bold: bool,
    ) -> Result<Arc<TextStyle>, InvalidArgument> {
        let font = font.ok_or(InvalidArgument::AbsentFont)?;
        self.get_or_create(font, size, bold)
    }

    /// Get the shared style for the given attributes, if cached
    ///
    /// Does not insert. Returns `None` for invalid attributes.
    pub fn get(&self, font: &str, size: i32, bold: bool) -> Option<Arc<TextStyle>> {
        let key = StyleKey::new(font, size, bold).ok()?;
        self.read().get(&key).cloned()
    }

    /// Number of distinct cached styles
    pub fn size(&self) -> usize {
        self.read().len()
    }

    /// True if no style is cached
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Remove all entries and reset [`Self::stats`]
    ///
    /// Styles previously returned remain valid; only future lookups are
    /// affected. A later request for the same key installs a new instance,
    /// which is equal in value but not identical to the old one.
    pub fn clear(&self) {
        let mut styles = self.write();
        log::debug!("StyleCache: clearing {} styles", styles.len());
        styles.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    /// Get lookup counters
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    /// Get a snapshot of cached keys
    pub fn info(&self) -> CacheInfo {
        let styles = self.read();
        let mut keys: Vec<String> = styles.keys().map(|key| key.to_string()).collect();
        keys.sort();
        CacheInfo {
            size: styles.len(),
            styles: keys,
        }
    }
}

static CACHE: LazyLock<StyleCache> = LazyLock::new(StyleCache::new);

/// Access the process-wide [`StyleCache`]
pub fn cache() -> &'static StyleCache {
    &CACHE
}
