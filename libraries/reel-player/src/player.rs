//! Video player - command facade
//!
//! Composes the catalogue, the playlist store, and the transport, and
//! enforces the rules that span them: flagged videos cannot be played,
//! added to playlists, or found by search, and flagging the active video
//! stops it.

use crate::{
    error::{Action, CommandError},
    notice::Notice,
    random::ThreadRandom,
    search::SearchResults,
};
use reel_core::{reason_label, RandomSource, ReelError, VideoId, VideoRecord};
use reel_playback::{PlaybackError, Transport};
use reel_storage::{Catalogue, PlaylistStore};

/// Result of a state-changing operation
///
/// Successful operations may report more than one notice, e.g. an implicit
/// stop followed by the new video starting.
pub type Outcome = std::result::Result<Vec<Notice>, CommandError>;

/// How removals from a playlist are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// One notice per removed entry
    Each,
    /// No per-entry notices; the caller reports a summary
    Batch,
}

/// The command facade
///
/// Owns all mutable state. Every operation runs to completion and reports
/// its outcome; nothing here is fatal.
#[derive(Debug)]
pub struct VideoPlayer<R = ThreadRandom> {
    catalogue: Catalogue,
    playlists: PlaylistStore,
    transport: Transport,
    random: R,
}

impl VideoPlayer<ThreadRandom> {
    /// Create a player using the thread-local RNG
    pub fn with_catalogue(catalogue: Catalogue) -> Self {
        Self::new(catalogue, ThreadRandom)
    }
}

impl<R: RandomSource> VideoPlayer<R> {
    /// Create a player with no playlists and nothing playing
    pub fn new(catalogue: Catalogue, random: R) -> Self {
        tracing::debug!(videos = catalogue.len(), "video player created");
        Self {
            catalogue,
            playlists: PlaylistStore::new(),
            transport: Transport::new(),
            random,
        }
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn playlists(&self) -> &PlaylistStore {
        &self.playlists
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    // ===== Catalogue listing =====

    pub fn number_of_videos(&self) -> Notice {
        Notice::VideoCount {
            count: self.catalogue.len(),
        }
    }

    /// Every video, flagged included, sorted by display line
    pub fn show_all_videos(&self) -> Notice {
        let mut lines: Vec<String> = self
            .catalogue
            .get_all()
            .iter()
            .map(VideoRecord::display_line)
            .collect();
        lines.sort();
        Notice::AllVideos { lines }
    }

    // ===== Transport =====

    /// Play a video, stopping whatever was active
    pub fn play(&mut self, id: &str) -> Outcome {
        self.start(id)
            .map_err(|error| CommandError::new(Action::Play, error))
    }

    /// Play a uniformly chosen unflagged video
    pub fn play_random(&mut self) -> Outcome {
        let playable: Vec<&VideoId> = self.catalogue.playable().map(VideoRecord::id).collect();
        if playable.is_empty() {
            return Err(CommandError::new(
                Action::PlayRandom,
                ReelError::NoneAvailable,
            ));
        }

        let index = self.random.pick_index(playable.len());
        let id = playable
            .get(index)
            .map(|id| (*id).clone())
            .ok_or_else(|| CommandError::new(Action::PlayRandom, ReelError::NoneAvailable))?;
        tracing::debug!(video_id = %id, index, candidates = playable.len(), "random pick");

        self.start(id.as_str())
            .map_err(|error| CommandError::new(Action::PlayRandom, error))
    }

    pub fn stop(&mut self) -> Outcome {
        match self.transport.stop() {
            Ok(id) => Ok(vec![Notice::Stopped {
                title: self.title_of(&id),
            }]),
            Err(err) => Err(self.transport_error(Action::Stop, err)),
        }
    }

    pub fn pause(&mut self) -> Outcome {
        match self.transport.pause().cloned() {
            Ok(id) => Ok(vec![Notice::Paused {
                title: self.title_of(&id),
            }]),
            Err(err) => Err(self.transport_error(Action::Pause, err)),
        }
    }

    /// Resume a paused video
    pub fn continue_video(&mut self) -> Outcome {
        match self.transport.resume().cloned() {
            Ok(id) => Ok(vec![Notice::Continued {
                title: self.title_of(&id),
            }]),
            Err(err) => Err(self.transport_error(Action::Continue, err)),
        }
    }

    pub fn show_playing(&self) -> Notice {
        match self.transport.current() {
            Some((id, paused)) => Notice::NowPlaying {
                line: self
                    .catalogue
                    .get(id.as_str())
                    .map_or_else(|| id.to_string(), VideoRecord::summary_line),
                paused,
            },
            None => Notice::NothingPlaying,
        }
    }

    // ===== Playlists =====

    pub fn create_playlist(&mut self, name: &str) -> Outcome {
        self.playlists
            .create(name)
            .map(|_| {
                vec![Notice::PlaylistCreated {
                    name: name.to_string(),
                }]
            })
            .map_err(|error| CommandError::new(Action::CreatePlaylist, error))
    }

    /// Append a video to a playlist
    ///
    /// Checks run in order: playlist exists, video exists, video is not
    /// flagged, video is not already in the playlist.
    pub fn add_to_playlist(&mut self, name: &str, id: &str) -> Outcome {
        let fail = |error: ReelError| CommandError::new(Action::AddToPlaylist(name.to_string()), error);

        if self.playlists.find(name).is_none() {
            return Err(fail(ReelError::playlist_not_found(name)));
        }
        let video = self
            .catalogue
            .get(id)
            .ok_or_else(|| fail(ReelError::video_not_found(id)))?;
        if video.is_flagged() {
            return Err(fail(flagged(video)));
        }

        let title = video.title().to_string();
        let video_id = video.id().clone();
        self.playlists.add_video(name, video_id).map_err(fail)?;

        Ok(vec![Notice::VideoAdded {
            playlist: name.to_string(),
            title,
        }])
    }

    /// Remove a video from a playlist
    ///
    /// Checks run in order: playlist exists, video exists, video is in the
    /// playlist.
    pub fn remove_from_playlist(&mut self, name: &str, id: &str) -> Outcome {
        let mut notices = Vec::new();
        self.remove_entry(name, id, Delivery::Each, &mut notices)
            .map_err(|error| CommandError::new(Action::RemoveFromPlaylist(name.to_string()), error))?;
        Ok(notices)
    }

    /// Empty a playlist, reporting a single summary
    pub fn clear_playlist(&mut self, name: &str) -> Outcome {
        let fail = |error: ReelError| CommandError::new(Action::ClearPlaylist(name.to_string()), error);

        let entries: Vec<VideoId> = self
            .playlists
            .find(name)
            .ok_or_else(|| fail(ReelError::playlist_not_found(name)))?
            .videos()
            .to_vec();

        let mut notices = Vec::new();
        for id in &entries {
            self.remove_entry(name, id.as_str(), Delivery::Batch, &mut notices)
                .map_err(fail)?;
        }
        tracing::debug!(playlist = name, removed = entries.len(), "playlist cleared");

        notices.push(Notice::PlaylistCleared {
            playlist: name.to_string(),
        });
        Ok(notices)
    }

    pub fn delete_playlist(&mut self, name: &str) -> Outcome {
        self.playlists
            .delete(name)
            .map(|_| {
                vec![Notice::PlaylistDeleted {
                    playlist: name.to_string(),
                }]
            })
            .map_err(|error| CommandError::new(Action::DeletePlaylist(name.to_string()), error))
    }

    /// Playlist names, sorted
    pub fn show_all_playlists(&self) -> Notice {
        let mut names: Vec<String> = self
            .playlists
            .list_names()
            .into_iter()
            .map(str::to_string)
            .collect();
        names.sort();
        Notice::Playlists { names }
    }

    /// Playlist entries in insertion order, with flag state
    pub fn show_playlist(&self, name: &str) -> Outcome {
        let playlist = self.playlists.find(name).ok_or_else(|| {
            CommandError::new(
                Action::ShowPlaylist(name.to_string()),
                ReelError::playlist_not_found(name),
            )
        })?;

        let lines = playlist
            .videos()
            .iter()
            .map(|id| {
                self.catalogue
                    .get(id.as_str())
                    .map_or_else(|| id.to_string(), VideoRecord::display_line)
            })
            .collect();

        Ok(vec![Notice::PlaylistContents {
            playlist: name.to_string(),
            lines,
        }])
    }

    // ===== Search =====

    /// Unflagged videos whose title contains `term`, ignoring case
    pub fn search_videos(&self, term: &str) -> SearchResults {
        SearchResults::collect(
            term,
            self.catalogue.playable().filter(|v| v.title_contains(term)),
        )
    }

    /// Unflagged videos carrying exactly `tag`
    pub fn search_videos_with_tag(&self, tag: &str) -> SearchResults {
        SearchResults::collect(tag, self.catalogue.playable().filter(|v| v.has_tag(tag)))
    }

    /// Play the search result chosen by `answer`
    ///
    /// Returns `None` when the answer declines.
    pub fn play_selection(&mut self, results: &SearchResults, answer: &str) -> Option<Outcome> {
        let id = results.select(answer)?.clone();
        Some(self.play(id.as_str()))
    }

    // ===== Flags =====

    /// Flag a video, stopping it first if it is active
    pub fn flag_video(&mut self, id: &str, reason: &str) -> Outcome {
        let video = self
            .catalogue
            .flag(id, reason)
            .map_err(|error| CommandError::new(Action::Flag, error))?;
        let title = video.title().to_string();
        let reason = reason_label(video.flag_reason()).to_string();

        let mut notices = Vec::new();
        if self.transport.is_active(id) && self.transport.stop().is_ok() {
            notices.push(Notice::Stopped {
                title: title.clone(),
            });
        }
        notices.push(Notice::Flagged { title, reason });
        Ok(notices)
    }

    /// Remove a video's flag
    pub fn allow_video(&mut self, id: &str) -> Outcome {
        self.catalogue
            .unflag(id)
            .map(|video| {
                vec![Notice::Unflagged {
                    title: video.title().to_string(),
                }]
            })
            .map_err(|error| CommandError::new(Action::Allow, error))
    }

    // ===== Internals =====

    fn start(&mut self, id: &str) -> reel_core::Result<Vec<Notice>> {
        let video = self
            .catalogue
            .get(id)
            .ok_or_else(|| ReelError::video_not_found(id))?;
        if video.is_flagged() {
            return Err(flagged(video));
        }
        let title = video.title().to_string();
        let video_id = video.id().clone();

        let mut notices = Vec::with_capacity(2);
        if let Some(previous) = self.transport.play(video_id) {
            notices.push(Notice::Stopped {
                title: self.title_of(&previous),
            });
        }
        notices.push(Notice::Playing { title });
        Ok(notices)
    }

    fn remove_entry(
        &mut self,
        name: &str,
        id: &str,
        delivery: Delivery,
        notices: &mut Vec<Notice>,
    ) -> reel_core::Result<()> {
        if self.playlists.find(name).is_none() {
            return Err(ReelError::playlist_not_found(name));
        }
        let title = self
            .catalogue
            .get(id)
            .ok_or_else(|| ReelError::video_not_found(id))?
            .title()
            .to_string();

        self.playlists.remove_video(name, id)?;

        match delivery {
            Delivery::Each => notices.push(Notice::VideoRemoved {
                playlist: name.to_string(),
                title,
            }),
            Delivery::Batch => {
                tracing::trace!(playlist = name, video_id = id, "removed in batch");
            }
        }
        Ok(())
    }

    fn title_of(&self, id: &VideoId) -> String {
        self.catalogue
            .get(id.as_str())
            .map_or_else(|| id.to_string(), |video| video.title().to_string())
    }

    fn transport_error(&self, action: Action, err: PlaybackError) -> CommandError {
        let title = match &err {
            PlaybackError::AlreadyPaused(id) | PlaybackError::NotPaused(id) => {
                Some(self.title_of(id))
            }
            PlaybackError::NothingPlaying => None,
        };
        let error = CommandError::new(action, err);
        match title {
            Some(title) => error.with_title(title),
            None => error,
        }
    }
}

fn flagged(video: &VideoRecord) -> ReelError {
    ReelError::Flagged {
        id: video.id().clone(),
        reason: video.flag_reason().to_string(),
    }
}
