//! Video catalogue
//!
//! Records are fixed after load. The only mutation is the flag overlay.

mod loader;

use reel_core::{ReelError, Result, VideoId, VideoRecord};
use std::collections::HashMap;

/// The fixed collection of videos available to the player
///
/// Keeps first-seen load order, which is the order search results and
/// random selection are drawn from.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    videos: Vec<VideoRecord>,
    index: HashMap<VideoId, usize>,
}

impl Catalogue {
    /// Build a catalogue from records
    ///
    /// A record whose id was already seen replaces the earlier record but
    /// keeps its position.
    pub fn from_records(records: impl IntoIterator<Item = VideoRecord>) -> Self {
        let mut catalogue = Self::default();
        for record in records {
            catalogue.insert(record);
        }
        catalogue
    }

    fn insert(&mut self, record: VideoRecord) {
        if let Some(&position) = self.index.get(record.id()) {
            tracing::warn!(video_id = %record.id(), "duplicate video id in catalogue, keeping the later record");
            self.videos[position] = record;
        } else {
            self.index.insert(record.id().clone(), self.videos.len());
            self.videos.push(record);
        }
    }

    /// All videos in catalogue order
    pub fn get_all(&self) -> &[VideoRecord] {
        &self.videos
    }

    /// Look up a video by id
    pub fn get(&self, id: &str) -> Option<&VideoRecord> {
        self.index.get(id).map(|&i| &self.videos[i])
    }

    /// Videos that are not flagged, in catalogue order
    pub fn playable(&self) -> impl Iterator<Item = &VideoRecord> {
        self.videos.iter().filter(|v| !v.is_flagged())
    }

    /// Number of videos, flagged or not
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Whether the catalogue has no videos
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    /// Flag a video with an optional reason
    ///
    /// Fails with `NotFound` for an unknown id and `AlreadyFlagged` if the
    /// video is flagged already.
    pub fn flag(&mut self, id: &str, reason: impl Into<String>) -> Result<&VideoRecord> {
        let video = self.get_mut(id)?;
        if video.is_flagged() {
            return Err(ReelError::AlreadyFlagged {
                id: video.id().clone(),
            });
        }
        video.set_flag(reason);
        tracing::debug!(video_id = %video.id(), reason = video.flag_reason(), "video flagged");
        Ok(&*video)
    }

    /// Remove the flag from a video
    ///
    /// Fails with `NotFound` for an unknown id and `NotFlagged` if the video
    /// is not flagged.
    pub fn unflag(&mut self, id: &str) -> Result<&VideoRecord> {
        let video = self.get_mut(id)?;
        if !video.is_flagged() {
            return Err(ReelError::NotFlagged {
                id: video.id().clone(),
            });
        }
        video.clear_flag();
        tracing::debug!(video_id = %video.id(), "video flag removed");
        Ok(&*video)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut VideoRecord> {
        match self.index.get(id) {
            Some(&i) => Ok(&mut self.videos[i]),
            None => Err(ReelError::video_not_found(id)),
        }
    }
}
