//! Reel Player - Command Facade
//!
//! One stateful [`VideoPlayer`] per session, composing the catalogue and
//! playlist stores (`reel-storage`) with the transport (`reel-playback`).
//!
//! This crate provides:
//! - One operation per user-facing action, returning structured outcomes
//! - Cross-store rules (flagged videos cannot be played, added, or found)
//! - Search with an interactive follow-up selection
//! - Text command parsing and execution against an [`OutputSink`]
//!
//! # Example
//!
//! ```rust
//! use reel_player::{Command, Decline, SeededRandom, VideoPlayer};
//! use reel_storage::Catalogue;
//!
//! let catalogue = Catalogue::from_entries([("Cat video", "v1", vec!["cat".to_string()])]);
//! let mut player = VideoPlayer::new(catalogue, SeededRandom::new(1));
//!
//! let mut out: Vec<String> = Vec::new();
//! for line in ["PLAY v1", "PAUSE", "PAUSE"] {
//!     let command = Command::parse(line).unwrap();
//!     player.execute(&command, &mut out, &mut Decline);
//! }
//!
//! assert_eq!(
//!     out,
//!     vec![
//!         "Playing video: Cat video",
//!         "Pausing video: Cat video",
//!         "Video already paused: Cat video",
//!     ]
//! );
//! ```

mod command;
mod error;
mod notice;
mod player;
mod random;
mod search;
mod sink;

pub use command::{Command, CommandInfo, COMMANDS};
pub use error::{Action, CommandError, ParseError};
pub use notice::{Notice, SELECTION_PROMPT};
pub use player::{Delivery, Outcome, VideoPlayer};
pub use random::{SeededRandom, ThreadRandom};
pub use search::{parse_selection, SearchResults};
pub use sink::{Answers, Decline, OutputSink, SelectionPrompt};
