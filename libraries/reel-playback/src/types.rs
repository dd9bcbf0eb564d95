//! Core types for the playback transport

use reel_core::VideoId;
use serde::{Deserialize, Serialize};

/// Full transport state
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TransportState {
    /// No video loaded
    #[default]
    Stopped,

    /// A video is loaded, playing or paused
    Active {
        /// The loaded video
        video: VideoId,
        /// Whether playback is paused
        paused: bool,
    },
}

impl TransportState {
    /// Coarse status without the video id
    pub fn status(&self) -> PlaybackStatus {
        match self {
            TransportState::Stopped => PlaybackStatus::Stopped,
            TransportState::Active { paused: false, .. } => PlaybackStatus::Playing,
            TransportState::Active { paused: true, .. } => PlaybackStatus::Paused,
        }
    }
}

/// Playback status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackStatus {
    /// No video loaded
    Stopped,

    /// Currently playing
    Playing,

    /// Paused mid-video
    Paused,
}
