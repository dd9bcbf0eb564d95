/// Playlist naming types
use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison key for playlist names
///
/// Two playlists are the same identity when their keys are equal. The key is
/// the uppercased display name, so `"My List"` and `"MY LIST"` collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaylistKey(String);

impl PlaylistKey {
    /// Derive the comparison key for a display name
    pub fn of(name: &str) -> Self {
        Self(name.to_uppercase())
    }

    /// Get the normalized key
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaylistKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
