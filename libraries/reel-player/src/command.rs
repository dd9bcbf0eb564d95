//! Text commands and their execution against the facade

use crate::{
    error::ParseError,
    player::{Outcome, VideoPlayer},
    search::SearchResults,
    sink::{OutputSink, SelectionPrompt},
};
use reel_core::RandomSource;
use serde::Serialize;

/// Name, usage, and one-line description of a command
#[derive(Debug, Clone, Copy)]
pub struct CommandInfo {
    pub name: &'static str,
    pub usage: &'static str,
    pub summary: &'static str,
}

const fn info(name: &'static str, usage: &'static str, summary: &'static str) -> CommandInfo {
    CommandInfo {
        name,
        usage,
        summary,
    }
}

/// Every command understood by [`Command::parse`], in help order
pub const COMMANDS: &[CommandInfo] = &[
    info("NUMBER_OF_VIDEOS", "NUMBER_OF_VIDEOS", "Shows how many videos are in the library."),
    info("SHOW_ALL_VIDEOS", "SHOW_ALL_VIDEOS", "Lists all videos from the library."),
    info("PLAY", "PLAY <video_id>", "Plays specified video."),
    info("PLAY_RANDOM", "PLAY_RANDOM", "Plays a random video from the library."),
    info("STOP", "STOP", "Stop the current video."),
    info("PAUSE", "PAUSE", "Pause the current video."),
    info("CONTINUE", "CONTINUE", "Resume the current paused video."),
    info("SHOW_PLAYING", "SHOW_PLAYING", "Displays the title, video_id, video tags and paused status of the video that is currently playing (or paused)."),
    info("CREATE_PLAYLIST", "CREATE_PLAYLIST <playlist_name>", "Creates a new (empty) playlist with the provided name."),
    info("ADD_TO_PLAYLIST", "ADD_TO_PLAYLIST <playlist_name> <video_id>", "Adds the requested video to the playlist."),
    info("REMOVE_FROM_PLAYLIST", "REMOVE_FROM_PLAYLIST <playlist_name> <video_id>", "Removes the specified video from the specified playlist."),
    info("CLEAR_PLAYLIST", "CLEAR_PLAYLIST <playlist_name>", "Removes all the videos from the playlist."),
    info("DELETE_PLAYLIST", "DELETE_PLAYLIST <playlist_name>", "Deletes the playlist."),
    info("SHOW_PLAYLIST", "SHOW_PLAYLIST <playlist_name>", "List all the videos in this playlist."),
    info("SHOW_ALL_PLAYLISTS", "SHOW_ALL_PLAYLISTS", "Display all the available playlists."),
    info("SEARCH_VIDEOS", "SEARCH_VIDEOS <search_term>", "Display all the videos whose titles contain the search_term."),
    info("SEARCH_VIDEOS_WITH_TAG", "SEARCH_VIDEOS_WITH_TAG <tag_name>", "Display all videos whose tags contains the provided tag."),
    info("FLAG_VIDEO", "FLAG_VIDEO <video_id> <flag_reason>", "Mark a video as flagged with a supplied reason. Reason is optional."),
    info("ALLOW_VIDEO", "ALLOW_VIDEO <video_id>", "Removes a flag from a video."),
];

/// A parsed facade command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    NumberOfVideos,
    ShowAllVideos,
    Play { video_id: String },
    PlayRandom,
    Stop,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist { name: String },
    AddToPlaylist { playlist: String, video_id: String },
    RemoveFromPlaylist { playlist: String, video_id: String },
    ClearPlaylist { name: String },
    DeletePlaylist { name: String },
    ShowPlaylist { name: String },
    ShowAllPlaylists,
    SearchVideos { term: String },
    SearchVideosWithTag { tag: String },
    FlagVideo { video_id: String, reason: String },
    AllowVideo { video_id: String },
}

impl Command {
    /// Parse one line of input
    ///
    /// The command word is case-insensitive; arguments are split on
    /// whitespace. A flag reason is every word after the id, joined by
    /// single spaces.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let mut words = line.split_whitespace();
        let word = words.next().unwrap_or_default();
        let name = word.to_uppercase();
        let info = COMMANDS
            .iter()
            .find(|info| info.name == name)
            .ok_or_else(|| ParseError::Unknown {
                word: word.to_string(),
            })?;

        let mut arg = || {
            words
                .next()
                .map(str::to_string)
                .ok_or(ParseError::MissingArgument { usage: info.usage })
        };

        let command = match info.name {
            "NUMBER_OF_VIDEOS" => Command::NumberOfVideos,
            "SHOW_ALL_VIDEOS" => Command::ShowAllVideos,
            "PLAY" => Command::Play { video_id: arg()? },
            "PLAY_RANDOM" => Command::PlayRandom,
            "STOP" => Command::Stop,
            "PAUSE" => Command::Pause,
            "CONTINUE" => Command::Continue,
            "SHOW_PLAYING" => Command::ShowPlaying,
            "CREATE_PLAYLIST" => Command::CreatePlaylist { name: arg()? },
            "ADD_TO_PLAYLIST" => Command::AddToPlaylist {
                playlist: arg()?,
                video_id: arg()?,
            },
            "REMOVE_FROM_PLAYLIST" => Command::RemoveFromPlaylist {
                playlist: arg()?,
                video_id: arg()?,
            },
            "CLEAR_PLAYLIST" => Command::ClearPlaylist { name: arg()? },
            "DELETE_PLAYLIST" => Command::DeletePlaylist { name: arg()? },
            "SHOW_PLAYLIST" => Command::ShowPlaylist { name: arg()? },
            "SHOW_ALL_PLAYLISTS" => Command::ShowAllPlaylists,
            "SEARCH_VIDEOS" => Command::SearchVideos { term: arg()? },
            "SEARCH_VIDEOS_WITH_TAG" => Command::SearchVideosWithTag { tag: arg()? },
            "FLAG_VIDEO" => {
                let video_id = arg()?;
                let reason = words.collect::<Vec<_>>().join(" ");
                Command::FlagVideo { video_id, reason }
            }
            "ALLOW_VIDEO" => Command::AllowVideo { video_id: arg()? },
            other => {
                return Err(ParseError::Unknown {
                    word: other.to_string(),
                })
            }
        };
        Ok(command)
    }
}

impl<R: RandomSource> VideoPlayer<R> {
    /// Run a command, writing every outcome to `sink`
    ///
    /// Search commands with results read one answer from `prompt` and play
    /// the chosen video when the answer is a valid selection.
    pub fn execute(
        &mut self,
        command: &Command,
        sink: &mut dyn OutputSink,
        prompt: &mut dyn SelectionPrompt,
    ) {
        tracing::debug!(?command, "executing command");
        match command {
            Command::NumberOfVideos => sink.notice(&self.number_of_videos()),
            Command::ShowAllVideos => sink.notice(&self.show_all_videos()),
            Command::Play { video_id } => deliver(sink, self.play(video_id)),
            Command::PlayRandom => deliver(sink, self.play_random()),
            Command::Stop => deliver(sink, self.stop()),
            Command::Pause => deliver(sink, self.pause()),
            Command::Continue => deliver(sink, self.continue_video()),
            Command::ShowPlaying => sink.notice(&self.show_playing()),
            Command::CreatePlaylist { name } => deliver(sink, self.create_playlist(name)),
            Command::AddToPlaylist { playlist, video_id } => {
                deliver(sink, self.add_to_playlist(playlist, video_id));
            }
            Command::RemoveFromPlaylist { playlist, video_id } => {
                deliver(sink, self.remove_from_playlist(playlist, video_id));
            }
            Command::ClearPlaylist { name } => deliver(sink, self.clear_playlist(name)),
            Command::DeletePlaylist { name } => deliver(sink, self.delete_playlist(name)),
            Command::ShowPlaylist { name } => deliver(sink, self.show_playlist(name)),
            Command::ShowAllPlaylists => sink.notice(&self.show_all_playlists()),
            Command::SearchVideos { term } => {
                let results = self.search_videos(term);
                self.offer_selection(&results, sink, prompt);
            }
            Command::SearchVideosWithTag { tag } => {
                let results = self.search_videos_with_tag(tag);
                self.offer_selection(&results, sink, prompt);
            }
            Command::FlagVideo { video_id, reason } => {
                deliver(sink, self.flag_video(video_id, reason));
            }
            Command::AllowVideo { video_id } => deliver(sink, self.allow_video(video_id)),
        }
    }

    fn offer_selection(
        &mut self,
        results: &SearchResults,
        sink: &mut dyn OutputSink,
        prompt: &mut dyn SelectionPrompt,
    ) {
        sink.notice(&results.notice());
        if results.is_empty() {
            return;
        }
        let Some(answer) = prompt.read_selection() else {
            return;
        };
        if let Some(outcome) = self.play_selection(results, &answer) {
            deliver(sink, outcome);
        }
    }
}

fn deliver(sink: &mut dyn OutputSink, outcome: Outcome) {
    match outcome {
        Ok(notices) => notices.iter().for_each(|notice| sink.notice(notice)),
        Err(error) => sink.failure(&error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_word_is_case_insensitive() {
        assert_eq!(Command::parse("play v1"), Ok(Command::Play { video_id: "v1".into() }));
        assert_eq!(Command::parse("Show_Playing"), Ok(Command::ShowPlaying));
    }

    #[test]
    fn arguments_keep_their_case() {
        assert_eq!(
            Command::parse("ADD_TO_PLAYLIST My_List amazing_cats_video_id"),
            Ok(Command::AddToPlaylist {
                playlist: "My_List".into(),
                video_id: "amazing_cats_video_id".into(),
            })
        );
    }

    #[test]
    fn flag_reason_joins_remaining_words() {
        assert_eq!(
            Command::parse("FLAG_VIDEO v1   dont   like cats"),
            Ok(Command::FlagVideo {
                video_id: "v1".into(),
                reason: "dont like cats".into(),
            })
        );
        assert_eq!(
            Command::parse("FLAG_VIDEO v1"),
            Ok(Command::FlagVideo {
                video_id: "v1".into(),
                reason: String::new(),
            })
        );
    }

    #[test]
    fn missing_argument_reports_usage() {
        let err = Command::parse("ADD_TO_PLAYLIST fun").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Usage: ADD_TO_PLAYLIST <playlist_name> <video_id>"
        );
    }

    #[test]
    fn unknown_word_is_rejected() {
        let err = Command::parse("DANCE").unwrap_err();
        assert_eq!(err, ParseError::Unknown { word: "DANCE".into() });
        assert_eq!(
            err.to_string(),
            "Please enter a valid command, type HELP for a list of available commands."
        );
        assert!(Command::parse("").is_err());
    }

    #[test]
    fn every_listed_command_parses_with_arguments() {
        for info in COMMANDS {
            let line = format!("{} a b c", info.name.to_lowercase());
            assert!(Command::parse(&line).is_ok(), "{} did not parse", info.name);
        }
    }
}
