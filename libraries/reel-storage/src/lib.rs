//! Reel Player Storage
//!
//! In-memory stores owned by the command facade.
//!
//! # Architecture
//!
//! - **Catalogue**: fixed set of videos loaded once at startup, plus a
//!   mutable flag overlay per video
//! - **Playlists**: user-created, case-insensitively named, ordered and
//!   duplicate-free lists of video ids
//! - **Vertical Slicing**: each store owns its own operations and rules
//!
//! Nothing here is persisted; state lives for the lifetime of the process.
//!
//! # Example
//!
//! ```rust
//! use reel_storage::{Catalogue, PlaylistStore};
//!
//! let catalogue = Catalogue::from_reader("Funny Dogs | funny_dogs_video_id | #dog , #animal".as_bytes())?;
//! assert_eq!(catalogue.len(), 1);
//!
//! let mut playlists = PlaylistStore::new();
//! playlists.create("Fun").unwrap();
//! playlists.add_video("FUN", "funny_dogs_video_id".into()).unwrap();
//! assert_eq!(playlists.find("fun").unwrap().len(), 1);
//! # Ok::<(), reel_storage::StorageError>(())
//! ```

mod error;

// Vertical slices
pub mod catalogue;
pub mod playlists;

pub use catalogue::Catalogue;
pub use error::{Result, StorageError};
pub use playlists::{Playlist, PlaylistStore};
