// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Glyphs: a char plus a shared style

use crate::{InvalidArgument, TextStyle};
use std::fmt;
use std::sync::Arc;

/// A character with a shared style
///
/// The char is the *extrinsic* state of a glyph; the [`TextStyle`] is the
/// *intrinsic* state and is shared (not owned) between many glyphs.
#[derive(Clone, Debug, PartialEq)]
pub struct Glyph {
    ch: char,
    style: Arc<TextStyle>,
}

impl Glyph {
    /// Construct
    #[inline]
    pub fn new(ch: char, style: Arc<TextStyle>) -> Self {
        Glyph { ch, style }
    }

    /// Construct from an optional style
    ///
    /// Fails with [`InvalidArgument::AbsentStyle`] if `style` is `None`.
    pub fn try_new(ch: char, style: Option<Arc<TextStyle>>) -> Result<Self, InvalidArgument> {
        let style = style.ok_or(InvalidArgument::AbsentStyle)?;
        Ok(Glyph::new(ch, style))
    }

    /// The character
    #[inline]
    pub fn ch(&self) -> char {
        self.ch
    }

    /// The shared style
    #[inline]
    pub fn style(&self) -> &Arc<TextStyle> {
        &self.style
    }

    /// Font identifier of the style
    #[inline]
    pub fn font(&self) -> &str {
        self.style.font()
    }

    /// Font size of the style
    #[inline]
    pub fn size(&self) -> u32 {
        self.style.size()
    }

    /// True if the style is bold
    #[inline]
    pub fn is_bold(&self) -> bool {
        self.style.is_bold()
    }

    /// Cost of drawing this glyph
    #[inline]
    pub fn draw_cost(&self) -> u64 {
        self.style.cost()
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Glyph{{ch='{}', style={}}}", self.ch, self.style)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn delegates_to_style() {
        let style = Arc::new(TextStyle::new("Inter", 14, true).unwrap());
        let glyph = Glyph::new('x', style.clone());
        assert_eq!(glyph.ch(), 'x');
        assert_eq!(glyph.font(), "Inter");
        assert_eq!(glyph.size(), 14);
        assert!(glyph.is_bold());
        assert_eq!(glyph.draw_cost(), 24);
        assert!(Arc::ptr_eq(glyph.style(), &style));
    }

    #[test]
    fn absent_style() {
        assert_eq!(Glyph::try_new('a', None), Err(InvalidArgument::AbsentStyle));

        let style = Arc::new(TextStyle::new("Inter", 14, false).unwrap());
        let glyph = Glyph::try_new('a', Some(style)).unwrap();
        assert_eq!(glyph.draw_cost(), 14);
    }

    #[test]
    fn display() {
        let style = Arc::new(TextStyle::new("Inter", 14, false).unwrap());
        assert_eq!(
            Glyph::new('H', style).to_string(),
            "Glyph{ch='H', style=TextStyle{font='Inter', size=14, bold=false}}"
        );
    }
}
