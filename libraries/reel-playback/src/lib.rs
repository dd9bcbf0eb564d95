//! Reel Player - Playback Transport
//!
//! The single "currently playing" state machine for Reel Player.
//!
//! This crate provides:
//! - Play (implicitly stopping whatever was active)
//! - Stop
//! - Pause / resume with descriptive errors on misuse
//! - Pure state queries
//!
//! # Architecture
//!
//! `reel-playback` knows nothing about the catalogue or flags. It holds at
//! most one video id; whether that id may be played is decided by the
//! command facade before calling [`Transport::play`].
//!
//! # Example
//!
//! ```rust
//! use reel_playback::{PlaybackStatus, Transport};
//! use reel_core::VideoId;
//!
//! let mut transport = Transport::new();
//! assert_eq!(transport.status(), PlaybackStatus::Stopped);
//!
//! transport.play(VideoId::new("v1"));
//! transport.pause().unwrap();
//! assert_eq!(transport.status(), PlaybackStatus::Paused);
//!
//! // Pausing twice is reported, not fatal
//! assert!(transport.pause().is_err());
//!
//! transport.resume().unwrap();
//! let stopped = transport.stop().unwrap();
//! assert_eq!(stopped.as_str(), "v1");
//! ```

mod error;
mod transport;
pub mod types;

// Public exports
pub use error::{PlaybackError, Result};
pub use transport::Transport;
pub use types::{PlaybackStatus, TransportState};
