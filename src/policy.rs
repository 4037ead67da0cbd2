// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Per-character style selection

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Style attributes requested for one character
///
/// Requests are validated when passed to the
/// [`StyleCache`](crate::StyleCache).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct StyleRequest<'a> {
    /// Font identifier
    pub font: &'a str,
    /// Font size; negative values are rejected by the cache
    pub size: i32,
    /// Weight flag
    pub bold: bool,
}

/// Selects a style for each character of a text
///
/// Implementations must be pure: the result may depend only on `c`. This
/// is implemented for closures `Fn(char) -> StyleRequest<'static>`:
/// ```
/// # use kas_text_style::{Renderer, StyleCache, StyleRequest};
/// let cache = StyleCache::new();
/// let policy = |c: char| StyleRequest {
///     font: "Mono",
///     size: 10,
///     bold: c.is_uppercase(),
/// };
/// let renderer = Renderer::with_policy(&cache, policy);
/// assert_eq!(renderer.render("Ab").unwrap(), 20 + 10);
/// ```
pub trait StylePolicy {
    /// Select the style for `c`
    fn select(&self, c: char) -> StyleRequest<'_>;
}

impl<F: Fn(char) -> StyleRequest<'static>> StylePolicy for F {
    #[inline]
    fn select(&self, c: char) -> StyleRequest<'_> {
        self(c)
    }
}

/// The default style policy
///
/// All characters use one font and size; a character is bold when its code
/// point is a multiple of `bold_divisor`. With `bold_divisor == 0` nothing is
/// bold.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DefaultPolicy {
    /// Font identifier
    ///
    /// Default value: `"Inter"`.
    pub font: String,
    /// Font size
    ///
    /// Default value: 14.
    pub size: i32,
    /// Divisor selecting bold characters
    ///
    /// Default value: 7.
    pub bold_divisor: u32,
}

impl Default for DefaultPolicy {
    fn default() -> Self {
        DefaultPolicy {
            font: "Inter".to_string(),
            size: 14,
            bold_divisor: 7,
        }
    }
}

impl DefaultPolicy {
    /// Alternative default constructor
    pub fn new() -> Self {
        Self::default()
    }

    /// True if `c` is selected as bold
    #[inline]
    pub fn is_bold(&self, c: char) -> bool {
        self.bold_divisor != 0 && u32::from(c) % self.bold_divisor == 0
    }
}

impl StylePolicy for DefaultPolicy {
    fn select(&self, c: char) -> StyleRequest<'_> {
        StyleRequest {
            font: &self.font,
            size: self.size,
            bold: self.is_bold(c),
        }
    }
}
