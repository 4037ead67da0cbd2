// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Text style values
//!
//! A [`TextStyle`] is the *intrinsic* part of a glyph: the state which many
//! glyphs may share. Instances are immutable; obtain shared instances from a
//! [`StyleCache`](crate::StyleCache).

use crate::InvalidArgument;
use easy_cast::Cast;
use std::fmt;

/// Cost added to [`TextStyle::cost`] for bold text
pub const BOLD_SURCHARGE: u32 = 10;

/// Check the size input, returning it as `u32`
fn validate(size: i32) -> Result<u32, InvalidArgument> {
    size.try_cast().map_err(|_| InvalidArgument::NegativeSize(size))
}

/// Canonical key of a [`TextStyle`]
///
/// Two keys are equal exactly when the font, size and weight flag are equal.
/// The [`Display`](fmt::Display) form is `font|size|B` (bold) or
/// `font|size|N` (normal); since neither size nor flag may contain `|` this
/// form is also unambiguous.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StyleKey {
    font: Box<str>,
    size: u32,
    bold: bool,
}

impl StyleKey {
    /// Construct a key from style attributes
    ///
    /// Validation matches [`TextStyle::new`].
    pub fn new(font: &str, size: i32, bold: bool) -> Result<Self, InvalidArgument> {
        let size = validate(size)?;
        Ok(StyleKey {
            font: font.into(),
            size,
            bold,
        })
    }

    /// Font identifier
    #[inline]
    pub fn font(&self) -> &str {
        &self.font
    }

    /// Font size
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Weight flag
    #[inline]
    pub fn is_bold(&self) -> bool {
        self.bold
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let weight = if self.bold { 'B' } else { 'N' };
        write!(f, "{}|{}|{}", self.font, self.size, weight)
    }
}

/// An immutable text style: font, size and weight
///
/// Equality and hashing compare content. Instances handed out by a
/// [`StyleCache`](crate::StyleCache) are additionally identical by reference
/// (compare with [`std::sync::Arc::ptr_eq`]).
///
/// ```
/// # use kas_text_style::TextStyle;
/// let style = TextStyle::new("Inter", 14, true).unwrap();
/// assert_eq!(style.cost(), 24);
/// assert_eq!(style.cache_key().to_string(), "Inter|14|B");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextStyle {
    font: Box<str>,
    size: u32,
    bold: bool,
}

impl TextStyle {
    /// Construct
    ///
    /// Any font identifier is accepted, including an empty one. Fails with
    /// [`InvalidArgument::NegativeSize`] if `size < 0`.
    pub fn new(font: &str, size: i32, bold: bool) -> Result<Self, InvalidArgument> {
        Ok(StyleKey::new(font, size, bold)?.into())
    }

    /// Construct from an optional font
    ///
    /// Fails with [`InvalidArgument::AbsentFont`] if `font` is `None`,
    /// otherwise as [`Self::new`].
    pub fn try_new(font: Option<&str>, size: i32, bold: bool) -> Result<Self, InvalidArgument> {
        let font = font.ok_or(InvalidArgument::AbsentFont)?;
        TextStyle::new(font, size, bold)
    }

    /// Font identifier
    #[inline]
    pub fn font(&self) -> &str {
        &self.font
    }

    /// Font size
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// True if bold
    #[inline]
    pub fn is_bold(&self) -> bool {
        self.bold
    }

    /// Draw cost of one glyph in this style
    ///
    /// This is `size`, plus [`BOLD_SURCHARGE`] when bold.
    #[inline]
    pub fn cost(&self) -> u64 {
        let surcharge = if self.bold { BOLD_SURCHARGE } else { 0 };
        let size: u64 = self.size.cast();
        size + u64::from(surcharge)
    }

    /// Get the canonical key
    pub fn cache_key(&self) -> StyleKey {
        StyleKey {
            font: self.font.clone(),
            size: self.size,
            bold: self.bold,
        }
    }
}

impl From<StyleKey> for TextStyle {
    fn from(key: StyleKey) -> Self {
        TextStyle {
            font: key.font,
            size: key.size,
            bold: key.bold,
        }
    }
}

impl fmt::Display for TextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TextStyle{{font='{}', size={}, bold={}}}",
            self.font, self.size, self.bold
        )
    }
}
