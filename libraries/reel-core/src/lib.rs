//! Reel Player Core
//!
//! Shared domain types, traits, and error handling for Reel Player.
//!
//! This crate provides the building blocks used by the catalogue and
//! playlist stores (`reel-storage`), the transport state machine
//! (`reel-playback`), and the command facade (`reel-player`).
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `VideoId`, `VideoRecord`, `PlaylistKey`
//! - **Core Traits**: `RandomSource` (injectable randomness for "play random")
//! - **Error Handling**: Unified `ReelError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use reel_core::types::{PlaylistKey, VideoId, VideoRecord};
//!
//! let video = VideoRecord::new(VideoId::new("v1"), "Cat video", vec!["cat".into()]);
//! assert_eq!(video.display_line(), "Cat video (v1) [cat]");
//!
//! // Playlist names compare case-insensitively
//! assert_eq!(PlaylistKey::of("My List"), PlaylistKey::of("MY LIST"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{Entity, ReelError, Result};
pub use traits::RandomSource;
pub use types::{reason_label, PlaylistKey, VideoId, VideoRecord};
