//! Error types for the command facade

use reel_core::ReelError;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// The user-facing action a failure is reported against
///
/// Playlist-scoped actions carry the playlist name exactly as the user typed
/// it, because the failure line echoes it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "playlist", rename_all = "snake_case")]
pub enum Action {
    Play,
    PlayRandom,
    Stop,
    Pause,
    Continue,
    CreatePlaylist,
    AddToPlaylist(String),
    RemoveFromPlaylist(String),
    ClearPlaylist(String),
    DeletePlaylist(String),
    ShowPlaylist(String),
    Flag,
    Allow,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Play | Action::PlayRandom => f.write_str("Cannot play video"),
            Action::Stop => f.write_str("Cannot stop video"),
            Action::Pause => f.write_str("Cannot pause video"),
            Action::Continue => f.write_str("Cannot continue video"),
            Action::CreatePlaylist => f.write_str("Cannot create playlist"),
            Action::AddToPlaylist(name) => write!(f, "Cannot add video to {name}"),
            Action::RemoveFromPlaylist(name) => write!(f, "Cannot remove video from {name}"),
            Action::ClearPlaylist(name) => write!(f, "Cannot clear playlist {name}"),
            Action::DeletePlaylist(name) => write!(f, "Cannot delete playlist {name}"),
            Action::ShowPlaylist(name) => write!(f, "Cannot show playlist {name}"),
            Action::Flag => f.write_str("Cannot flag video"),
            Action::Allow => f.write_str("Cannot remove flag from video"),
        }
    }
}

/// A failed command: the action plus the domain reason
///
/// `Display` renders the exact status line shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandError {
    action: Action,
    error: ReelError,
    /// Title of the video involved, for lines that name it
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
}

impl CommandError {
    pub fn new(action: Action, error: impl Into<ReelError>) -> Self {
        Self {
            action,
            error: error.into(),
            title: None,
        }
    }

    /// Attach the title of the video the failure is about
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn action(&self) -> &Action {
        &self.action
    }

    /// The underlying domain error
    pub fn error(&self) -> &ReelError {
        &self.error
    }

    /// Status lines for this failure
    pub fn lines(&self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            ReelError::NoneAvailable => write!(f, "{}", self.error),
            ReelError::AlreadyPaused { id } => {
                let title = self.title.as_deref().unwrap_or(id.as_str());
                write!(f, "Video already paused: {title}")
            }
            error => write!(f, "{}: {}", self.action, error),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Errors from turning a line of input into a [`Command`](crate::Command)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// First word is not a known command
    #[error("Please enter a valid command, type HELP for a list of available commands.")]
    Unknown { word: String },

    /// Known command without its required arguments
    #[error("Usage: {usage}")]
    MissingArgument { usage: &'static str },
}
