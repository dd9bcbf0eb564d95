//! User playlists
//!
//! Names are unique under case-insensitive comparison. Membership is an
//! ordered list of video ids without duplicates. Whether an id exists in the
//! catalogue, or is flagged, is checked by the caller before adding.

use reel_core::{PlaylistKey, ReelError, Result, VideoId};

/// A named, ordered, duplicate-free list of video ids
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    key: PlaylistKey,
    name: String,
    videos: Vec<VideoId>,
}

impl Playlist {
    fn new(name: &str) -> Self {
        Self {
            key: PlaylistKey::of(name),
            name: name.to_string(),
            videos: Vec::new(),
        }
    }

    /// Display name, with the case it was created with
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Comparison key
    pub fn key(&self) -> &PlaylistKey {
        &self.key
    }

    /// Video ids in insertion order
    pub fn videos(&self) -> &[VideoId] {
        &self.videos
    }

    /// Whether `id` is a member
    pub fn contains(&self, id: &str) -> bool {
        self.videos.iter().any(|v| v.as_str() == id)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Whether the playlist has no entries
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

/// All playlists, in creation order
#[derive(Debug, Clone, Default)]
pub struct PlaylistStore {
    playlists: Vec<Playlist>,
}

impl PlaylistStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty playlist
    ///
    /// Fails with `DuplicateName` when a playlist with the same comparison
    /// key exists.
    pub fn create(&mut self, name: &str) -> Result<&Playlist> {
        if self.position(name).is_some() {
            return Err(ReelError::DuplicateName {
                name: name.to_string(),
            });
        }
        self.playlists.push(Playlist::new(name));
        tracing::debug!(playlist = name, "playlist created");
        Ok(&self.playlists[self.playlists.len() - 1])
    }

    /// Find a playlist by name, ignoring case
    pub fn find(&self, name: &str) -> Option<&Playlist> {
        self.position(name).map(|i| &self.playlists[i])
    }

    /// Delete a playlist, returning it
    pub fn delete(&mut self, name: &str) -> Result<Playlist> {
        let index = self
            .position(name)
            .ok_or_else(|| ReelError::playlist_not_found(name))?;
        let playlist = self.playlists.remove(index);
        tracing::debug!(playlist = playlist.name(), "playlist deleted");
        Ok(playlist)
    }

    /// Append a video id
    ///
    /// Fails with `NotFound` for an unknown playlist and `AlreadyPresent`
    /// when the id is already a member.
    pub fn add_video(&mut self, name: &str, id: VideoId) -> Result<()> {
        let playlist = self.get_mut(name)?;
        if playlist.contains(id.as_str()) {
            return Err(ReelError::AlreadyPresent { id });
        }
        playlist.videos.push(id);
        Ok(())
    }

    /// Remove a video id, returning it
    ///
    /// Fails with `NotFound` for an unknown playlist and `NotPresent` when
    /// the id is not a member.
    pub fn remove_video(&mut self, name: &str, id: &str) -> Result<VideoId> {
        let playlist = self.get_mut(name)?;
        let index = playlist
            .videos
            .iter()
            .position(|v| v.as_str() == id)
            .ok_or_else(|| ReelError::NotPresent {
                id: VideoId::new(id),
            })?;
        Ok(playlist.videos.remove(index))
    }

    /// Remove every entry, returning how many were removed
    pub fn clear(&mut self, name: &str) -> Result<usize> {
        let playlist = self.get_mut(name)?;
        let removed = playlist.videos.len();
        playlist.videos.clear();
        Ok(removed)
    }

    /// Display names in creation order
    pub fn list_names(&self) -> Vec<&str> {
        self.playlists.iter().map(Playlist::name).collect()
    }

    /// Number of playlists
    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    /// Whether no playlists exist
    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        let key = PlaylistKey::of(name);
        self.playlists.iter().position(|p| p.key == key)
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut Playlist> {
        match self.position(name) {
            Some(i) => Ok(&mut self.playlists[i]),
            None => Err(ReelError::playlist_not_found(name)),
        }
    }
}
