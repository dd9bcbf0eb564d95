//! Successful command outcomes
//!
//! Each notice renders to one or more status lines through [`Notice::lines`].

use serde::Serialize;

/// Lines appended to every non-empty search result
pub const SELECTION_PROMPT: [&str; 2] = [
    "Would you like to play any of the above? If yes, specify the number of the video.",
    "If your answer is not a valid number, we will assume it's a no.",
];

/// A successful outcome of a facade operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    VideoCount {
        count: usize,
    },
    /// Every video, already sorted by display line
    AllVideos {
        lines: Vec<String>,
    },
    Playing {
        title: String,
    },
    Stopped {
        title: String,
    },
    Paused {
        title: String,
    },
    Continued {
        title: String,
    },
    NowPlaying {
        line: String,
        paused: bool,
    },
    NothingPlaying,
    PlaylistCreated {
        name: String,
    },
    VideoAdded {
        playlist: String,
        title: String,
    },
    VideoRemoved {
        playlist: String,
        title: String,
    },
    PlaylistCleared {
        playlist: String,
    },
    PlaylistDeleted {
        playlist: String,
    },
    /// Playlist display names, already sorted
    Playlists {
        names: Vec<String>,
    },
    PlaylistContents {
        playlist: String,
        lines: Vec<String>,
    },
    /// Numbered search matches, followed by the selection prompt
    SearchResults {
        term: String,
        lines: Vec<String>,
    },
    NoSearchResults {
        term: String,
    },
    Flagged {
        title: String,
        /// Display form of the reason
        reason: String,
    },
    Unflagged {
        title: String,
    },
}

impl Notice {
    /// Status lines, in output order
    pub fn lines(&self) -> Vec<String> {
        match self {
            Notice::VideoCount { count } => vec![format!("{count} videos in the library")],
            Notice::AllVideos { lines } => {
                header("Here's a list of all available videos:", lines.iter().cloned())
            }
            Notice::Playing { title } => vec![format!("Playing video: {title}")],
            Notice::Stopped { title } => vec![format!("Stopping video: {title}")],
            Notice::Paused { title } => vec![format!("Pausing video: {title}")],
            Notice::Continued { title } => vec![format!("Continuing video: {title}")],
            Notice::NowPlaying { line, paused } => {
                let suffix = if *paused { " - PAUSED" } else { "" };
                vec![format!("Currently playing: {line}{suffix}")]
            }
            Notice::NothingPlaying => vec!["No video is currently playing".to_string()],
            Notice::PlaylistCreated { name } => {
                vec![format!("Successfully created new playlist: {name}")]
            }
            Notice::VideoAdded { playlist, title } => {
                vec![format!("Added video to {playlist}: {title}")]
            }
            Notice::VideoRemoved { playlist, title } => {
                vec![format!("Removed video from {playlist}: {title}")]
            }
            Notice::PlaylistCleared { playlist } => {
                vec![format!("Successfully removed all videos from {playlist}")]
            }
            Notice::PlaylistDeleted { playlist } => vec![format!("Deleted playlist: {playlist}")],
            Notice::Playlists { names } if names.is_empty() => {
                vec!["No playlists exist yet".to_string()]
            }
            Notice::Playlists { names } => header("Showing all playlists:", names.iter().cloned()),
            Notice::PlaylistContents { playlist, lines } if lines.is_empty() => vec![
                format!("Showing playlist: {playlist}"),
                "No videos here yet".to_string(),
            ],
            Notice::PlaylistContents { playlist, lines } => {
                header(&format!("Showing playlist: {playlist}"), lines.iter().cloned())
            }
            Notice::SearchResults { term, lines } => {
                let numbered = lines
                    .iter()
                    .enumerate()
                    .map(|(i, line)| format!("{}) {line}", i + 1));
                let mut out = header(&format!("Here are the results for {term}:"), numbered);
                out.extend(SELECTION_PROMPT.iter().map(ToString::to_string));
                out
            }
            Notice::NoSearchResults { term } => vec![format!("No search results for {term}")],
            Notice::Flagged { title, reason } => {
                vec![format!("Successfully flagged video: {title} (reason: {reason})")]
            }
            Notice::Unflagged { title } => {
                vec![format!("Successfully removed flag from video: {title}")]
            }
        }
    }
}

fn header(first: &str, rest: impl Iterator<Item = String>) -> Vec<String> {
    std::iter::once(first.to_string()).chain(rest).collect()
}
