// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! KAS Text Style library
//!
//! Text is rendered by assigning each char a [`TextStyle`] and summing a
//! per-glyph draw cost. Since documents use few distinct styles, styles are
//! interned: a [`StyleCache`] holds one shared instance per distinct style
//! and every [`Glyph`] references that instance.
//!
//! ```
//! # use kas_text_style::{cache, Renderer};
//! let renderer = Renderer::new();
//! let text = "Hello Flyweight! ".repeat(2000);
//! assert_eq!(renderer.render(&text).unwrap(), 536000);
//! assert!(cache().get("Inter", 14, true).is_some());
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

mod error;
pub use error::InvalidArgument;

mod style;
pub use style::{StyleKey, TextStyle, BOLD_SURCHARGE};

mod cache;
pub use cache::{cache, CacheInfo, CacheStats, StyleCache};

mod glyph;
pub use glyph::Glyph;

mod policy;
pub use policy::{DefaultPolicy, StylePolicy, StyleRequest};

mod render;
pub use render::Renderer;
