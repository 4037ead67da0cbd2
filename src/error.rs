// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Error types

use thiserror::Error;

/// Invalid input to a style or glyph constructor
///
/// This is the only failure mode of the library. It is raised synchronously
/// where the bad input is observed and is never retried.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum InvalidArgument {
    /// No font identifier was given
    #[error("font identifier is absent")]
    AbsentFont,
    /// The font size is negative
    #[error("font size {0} is negative")]
    NegativeSize(i32),
    /// A glyph was constructed without a style
    #[error("glyph style is absent")]
    AbsentStyle,
}
