//! Icon identifiers carried by tiles.

use serde::{Deserialize, Serialize};

/// Opaque icon identifier (an emoji, a sprite key, a file name).
///
/// Two tiles match when their icons compare equal; no other
/// relationship between icons is meaningful to the engine.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct Icon(String);

impl Icon {
    /// Creates an icon from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Icon {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl AsRef<str> for Icon {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
