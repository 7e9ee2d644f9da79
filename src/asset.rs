//! Compile-time embedded assets.

use std::borrow::Cow;

use crate::error::GameResult;

/// Identifiers for all embedded assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Asset {
    /// The word dictionary, one lowercase word per line.
    Words,
}

impl Asset {
    /// Returns the asset decoded as UTF-8 text.
    pub fn get_text(&self) -> GameResult<Cow<'static, str>> {
        match self {
            Asset::Words => Ok(Cow::Borrowed(include_str!("../assets/words.txt"))),
        }
    }
}
