// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Bulk rendering
//!
//! The [`Renderer`] assigns a style to each char of a text via a
//! [`StylePolicy`], interns that style in a [`StyleCache`] and sums the draw
//! cost of the resulting [`Glyph`]s. Glyphs live only for the duration of a
//! pass; the cache grows with the number of distinct styles, not with the
//! length of the text.

use crate::{cache, CacheInfo, DefaultPolicy, Glyph, InvalidArgument, StyleCache, StylePolicy};

/// Renders text to a total draw cost
///
/// A renderer holds no state besides its cache reference and policy.
///
/// ```
/// # use kas_text_style::{Renderer, StyleCache};
/// let cache = StyleCache::new();
/// let renderer = Renderer::with_cache(&cache);
/// assert_eq!(renderer.render("Hello Flyweight! ").unwrap(), 268);
/// assert_eq!(renderer.style_count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Renderer<'a, P = DefaultPolicy> {
    cache: &'a StyleCache,
    policy: P,
}

impl Default for Renderer<'static> {
    fn default() -> Self {
        Renderer::with_cache(cache())
    }
}

impl Renderer<'static> {
    /// Construct over the process-wide [`cache()`] with [`DefaultPolicy`]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<'a> Renderer<'a> {
    /// Construct over `cache` with [`DefaultPolicy`]
    pub fn with_cache(cache: &'a StyleCache) -> Self {
        Renderer::with_policy(cache, DefaultPolicy::default())
    }
}

impl<'a, P: StylePolicy> Renderer<'a, P> {
    /// Construct over `cache` with a custom `policy`
    pub fn with_policy(cache: &'a StyleCache, policy: P) -> Self {
        Renderer { cache, policy }
    }

    /// Access the cache
    #[inline]
    pub fn cache(&self) -> &'a StyleCache {
        self.cache
    }

    /// Access the policy
    #[inline]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    fn glyph(&self, c: char) -> Result<Glyph, InvalidArgument> {
        let req = self.policy.select(c);
        let style = self.cache.get_or_create(req.font, req.size, req.bold)?;
        Ok(Glyph::new(c, style))
    }

    /// Render `text`, returning the total draw cost
    ///
    /// Fails on the first char for which the policy requests an invalid
    /// style. Styles interned before the failure remain cached.
    pub fn render(&self, text: &str) -> Result<u64, InvalidArgument> {
        let mut cost = 0;
        for c in text.chars() {
            cost += self.glyph(c)?.draw_cost();
        }
        log::trace!("Renderer::render: {} bytes, cost {cost}", text.len());
        Ok(cost)
    }

    /// Render `text` in parallel, returning the total draw cost
    ///
    /// The result equals that of [`Self::render`]: costs are summed, so the
    /// order of traversal does not matter.
    #[cfg(feature = "rayon")]
    #[cfg_attr(docsrs, doc(cfg(feature = "rayon")))]
    pub fn render_par(&self, text: &str) -> Result<u64, InvalidArgument>
    where
        P: Sync,
    {
        use rayon::prelude::*;

        text.par_chars()
            .map(|c| self.glyph(c).map(|glyph| glyph.draw_cost()))
            .try_reduce(|| 0, |a, b| Ok(a + b))
    }

    /// Get the glyphs of `text`
    pub fn glyphs(&self, text: &str) -> Result<Vec<Glyph>, InvalidArgument> {
        text.chars().map(|c| self.glyph(c)).collect()
    }

    /// Number of distinct styles in the cache
    #[inline]
    pub fn style_count(&self) -> usize {
        self.cache.size()
    }

    /// Get a snapshot of the cache
    #[inline]
    pub fn cache_info(&self) -> CacheInfo {
        self.cache.info()
    }
}
