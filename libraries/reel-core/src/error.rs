/// Core error types for Reel Player
use crate::types::{reason_label, VideoId};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Result type alias using `ReelError`
pub type Result<T> = std::result::Result<T, ReelError>;

/// Kind of entity a lookup failed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Entity {
    /// A catalogue video
    Video,
    /// A user playlist
    Playlist,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Video => f.write_str("Video"),
            Entity::Playlist => f.write_str("Playlist"),
        }
    }
}

/// Core error type for Reel Player
///
/// None of these are fatal. Every command recovers them locally and reports
/// them to the user, so the `Display` text is the user-facing reason.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReelError {
    /// Video id or playlist name is unknown
    #[error("{entity} does not exist")]
    NotFound { entity: Entity, id: String },

    /// A playlist with the same comparison key already exists
    #[error("A playlist with the same name already exists")]
    DuplicateName { name: String },

    /// Video is already flagged
    #[error("Video is already flagged")]
    AlreadyFlagged { id: VideoId },

    /// Video is not flagged
    #[error("Video is not flagged")]
    NotFlagged { id: VideoId },

    /// Video is already a member of the playlist
    #[error("Video already added")]
    AlreadyPresent { id: VideoId },

    /// Video is not a member of the playlist
    #[error("Video is not in playlist")]
    NotPresent { id: VideoId },

    /// Operation blocked because the video is flagged
    #[error("Video is currently flagged (reason: {})", reason_label(.reason))]
    Flagged { id: VideoId, reason: String },

    /// Transport is stopped
    #[error("No video is currently playing")]
    NothingPlaying,

    /// Transport is already paused
    #[error("Video is already paused")]
    AlreadyPaused { id: VideoId },

    /// Transport is playing, not paused
    #[error("Video is not paused")]
    NotPaused { id: VideoId },

    /// No unflagged video exists
    #[error("No videos available")]
    NoneAvailable,
}

impl ReelError {
    /// Create a not found error for a video id
    pub fn video_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: Entity::Video,
            id: id.into(),
        }
    }

    /// Create a not found error for a playlist name
    pub fn playlist_not_found(name: impl Into<String>) -> Self {
        Self::NotFound {
            entity: Entity::Playlist,
            id: name.into(),
        }
    }

    /// Whether this is a `NotFound` of any entity
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
