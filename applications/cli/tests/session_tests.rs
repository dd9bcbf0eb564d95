//! End-to-end tests for the command loop
//!
//! Feeds whole sessions through `repl::run` and checks stdout.


use reel_cli::repl::{GOODBYE, GREETING};
use reel_cli::{CliConfig, OutputFormat};
use test_helpers::{session, session_with, temp_file, text_lines};

const PROMPT: &str = "REEL> ";

#[test]
fn greets_runs_commands_and_says_goodbye() {
    let out = session("NUMBER_OF_VIDEOS\nplay amazing_cats_video_id\nEXIT\nSTOP\n", OutputFormat::Text);
    assert_eq!(
        text_lines(&out, PROMPT),
        vec![
            GREETING,
            "5 videos in the library",
            "Playing video: Amazing Cats",
            GOODBYE,
        ]
    );
}

#[test]
fn end_of_input_ends_the_session() {
    let out = session("STOP", OutputFormat::Text);
    assert_eq!(
        text_lines(&out, PROMPT),
        vec![GREETING, "Cannot stop video: No video is currently playing", GOODBYE]
    );
}

#[test]
fn unknown_and_incomplete_commands_are_reported() {
    let out = session("DANCE\nCREATE_PLAYLIST\n\n   \nEXIT\n", OutputFormat::Text);
    assert_eq!(
        text_lines(&out, PROMPT),
        vec![
            GREETING,
            "Please enter a valid command, type HELP for a list of available commands.",
            "Usage: CREATE_PLAYLIST <playlist_name>",
            GOODBYE,
        ]
    );
}

#[test]
fn search_selection_reads_the_next_line() {
    let out = session("SEARCH_VIDEOS_WITH_TAG #dog\n1\nSHOW_PLAYING\nEXIT\n", OutputFormat::Text);
    assert_eq!(
        text_lines(&out, PROMPT),
        vec![
            GREETING,
            "Here are the results for #dog:",
            "1) Funny Dogs (funny_dogs_video_id) [#dog #animal]",
            "Would you like to play any of the above? If yes, specify the number of the video.",
            "If your answer is not a valid number, we will assume it's a no.",
            "Playing video: Funny Dogs",
            "Currently playing: Funny Dogs (funny_dogs_video_id) [#dog #animal]",
            GOODBYE,
        ]
    );
}

#[test]
fn declined_selection_is_not_run_as_a_command() {
    let out = session("SEARCH_VIDEOS cat\nSTOP\nSHOW_PLAYING\nEXIT\n", OutputFormat::Text);
    let lines = text_lines(&out, PROMPT);
    assert!(!lines.iter().any(|l| l.starts_with("Cannot stop video")));
    assert!(lines.contains(&"No video is currently playing".to_string()));
}

#[test]
fn help_lists_commands() {
    let out = session("HELP\nEXIT\n", OutputFormat::Text);
    let lines = text_lines(&out, PROMPT);
    assert_eq!(lines[1], "Available commands:");
    assert!(lines.iter().any(|l| l.contains("FLAG_VIDEO <video_id> <flag_reason>")));
}

#[test]
fn json_output_has_one_object_per_outcome() {
    let out = session("PLAY nope\nCREATE_PLAYLIST Fun\nEXIT\n", OutputFormat::Json);
    let objects: Vec<serde_json::Value> = out
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line is JSON"))
        .collect();

    assert_eq!(
        objects,
        vec![
            serde_json::json!({"ok": true, "lines": [GREETING]}),
            serde_json::json!({"ok": false, "lines": ["Cannot play video: Video does not exist"]}),
            serde_json::json!({"ok": true, "lines": ["Successfully created new playlist: Fun"]}),
            serde_json::json!({"ok": true, "lines": [GOODBYE]}),
        ]
    );
}

#[test]
fn custom_catalogue_and_prompt() {
    let (_dir, path) = temp_file("videos.txt", "Cat video | v1 | cat, animal\nDog video | v2 | dog\n");
    let config = CliConfig {
        catalogue_path: Some(path),
        prompt: "> ".to_string(),
        ..CliConfig::default()
    };
    config.validate().unwrap();

    let out = session_with(&config, "SHOW_ALL_VIDEOS\nEXIT\n");
    assert_eq!(
        text_lines(&out, "> "),
        vec![
            GREETING,
            "Here's a list of all available videos:",
            "Cat video (v1) [cat animal]",
            "Dog video (v2) [dog]",
            GOODBYE,
        ]
    );
}
