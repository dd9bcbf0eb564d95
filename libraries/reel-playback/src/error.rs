//! Error types for the playback transport

use reel_core::{ReelError, VideoId};
use thiserror::Error;

/// Transport misuse errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// Nothing is loaded
    #[error("No video is currently playing")]
    NothingPlaying,

    /// Pause requested while already paused
    #[error("Video already paused: {0}")]
    AlreadyPaused(VideoId),

    /// Resume requested while playing
    #[error("Video is not paused: {0}")]
    NotPaused(VideoId),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;

impl From<PlaybackError> for ReelError {
    fn from(err: PlaybackError) -> Self {
        match err {
            PlaybackError::NothingPlaying => ReelError::NothingPlaying,
            PlaybackError::AlreadyPaused(id) => ReelError::AlreadyPaused { id },
            PlaybackError::NotPaused(id) => ReelError::NotPaused { id },
        }
    }
}
