//! Transport - the current-playback state machine
//!
//! ```text
//!            play(id)              pause()
//! Stopped ───────────▶ Playing ───────────▶ Paused
//!    ▲                  │  ▲     resume()     │
//!    │      stop()      │  └─────────────────┘
//!    └──────────────────┴──────────────────────┘
//! ```
//!
//! `play` is valid from every state and replaces whatever was loaded.

use crate::{
    error::{PlaybackError, Result},
    types::{PlaybackStatus, TransportState},
};
use reel_core::VideoId;

/// Current playback state holder
///
/// Never panics: invalid transitions return a [`PlaybackError`] and leave the
/// state untouched.
#[derive(Debug, Clone, Default)]
pub struct Transport {
    state: TransportState,
}

impl Transport {
    /// Create a stopped transport
    pub fn new() -> Self {
        Self::default()
    }

    /// Start playing `video`
    ///
    /// Any active video (playing or paused) is stopped first and returned.
    pub fn play(&mut self, video: VideoId) -> Option<VideoId> {
        let previous = self.take_active();
        tracing::debug!(video_id = %video, previous = ?previous, "transport play");
        self.state = TransportState::Active {
            video,
            paused: false,
        };
        previous
    }

    /// Stop playback, returning the video that was active
    pub fn stop(&mut self) -> Result<VideoId> {
        let stopped = self.take_active().ok_or(PlaybackError::NothingPlaying)?;
        tracing::debug!(video_id = %stopped, "transport stop");
        Ok(stopped)
    }

    /// Pause the playing video
    pub fn pause(&mut self) -> Result<&VideoId> {
        match &mut self.state {
            TransportState::Stopped => Err(PlaybackError::NothingPlaying),
            TransportState::Active { video, paused: true } => {
                Err(PlaybackError::AlreadyPaused(video.clone()))
            }
            TransportState::Active { video, paused } => {
                *paused = true;
                tracing::debug!(video_id = %video, "transport pause");
                Ok(&*video)
            }
        }
    }

    /// Resume the paused video
    pub fn resume(&mut self) -> Result<&VideoId> {
        match &mut self.state {
            TransportState::Stopped => Err(PlaybackError::NothingPlaying),
            TransportState::Active {
                video,
                paused: false,
            } => Err(PlaybackError::NotPaused(video.clone())),
            TransportState::Active { video, paused } => {
                *paused = false;
                tracing::debug!(video_id = %video, "transport resume");
                Ok(&*video)
            }
        }
    }

    /// Active video and whether it is paused
    pub fn current(&self) -> Option<(&VideoId, bool)> {
        match &self.state {
            TransportState::Stopped => None,
            TransportState::Active { video, paused } => Some((video, *paused)),
        }
    }

    /// Whether `id` is the active video (playing or paused)
    pub fn is_active(&self, id: &str) -> bool {
        self.current().is_some_and(|(video, _)| video.as_str() == id)
    }

    /// Full state
    pub fn state(&self) -> &TransportState {
        &self.state
    }

    /// Coarse status
    pub fn status(&self) -> PlaybackStatus {
        self.state.status()
    }

    fn take_active(&mut self) -> Option<VideoId> {
        match std::mem::take(&mut self.state) {
            TransportState::Stopped => None,
            TransportState::Active { video, .. } => Some(video),
        }
    }
}
