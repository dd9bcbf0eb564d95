//! Integration tests for the catalogue slice
//!
//! Covers:
//! - Loading from files and readers
//! - Lookup and ordering
//! - Flag / unflag lifecycle and its failure modes


use reel_core::{Entity, ReelError, VideoId};
use reel_storage::{Catalogue, StorageError};
use test_helpers::*;

#[test]
fn test_load_sample_catalogue_from_file() {
    let file = catalogue_file(SAMPLE_CATALOGUE);

    let catalogue = Catalogue::load(file.path()).expect("Failed to load catalogue");

    assert_eq!(catalogue.len(), 5);
    let cats = catalogue.get("amazing_cats_video_id").unwrap();
    assert_eq!(cats.title(), "Amazing Cats");
    assert_eq!(cats.tags(), ["#cat", "#animal"]);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Catalogue::load(dir.path().join("missing.txt")).unwrap_err();
    assert!(matches!(err, StorageError::Io(_)));
}

#[test]
fn test_malformed_line_reports_line_number() {
    let contents = "Funny Dogs | funny_dogs_video_id | #dog\n\nBroken line without fields\n";
    let err = Catalogue::from_reader(contents.as_bytes()).unwrap_err();
    assert!(matches!(
        err,
        StorageError::MalformedRecord { line: 3, fields: 1 }
    ));
    assert_eq!(
        err.to_string(),
        "Malformed catalogue record on line 3: expected 3 fields, found 1"
    );
}

#[test]
fn test_get_all_keeps_file_order() {
    let catalogue = sample_catalogue();
    let ids: Vec<&str> = catalogue
        .get_all()
        .iter()
        .map(|v| v.id().as_str())
        .collect();

    assert_eq!(
        ids,
        [
            "funny_dogs_video_id",
            "amazing_cats_video_id",
            "another_cat_video_id",
            "life_at_google_video_id",
            "nothing_video_id",
        ]
    );
}

#[test]
fn test_get_unknown_id_is_none() {
    assert!(sample_catalogue().get("does_not_exist").is_none());
}

#[test]
fn test_from_entries_builds_unflagged_records() {
    let catalogue = Catalogue::from_entries([
        ("Cat video", "v1", vec!["cat".to_string(), "animal".to_string()]),
        ("Dog video", "v2", vec!["dog".to_string()]),
    ]);

    assert_eq!(catalogue.len(), 2);
    assert!(catalogue.get_all().iter().all(|v| !v.is_flagged()));
}

#[test]
fn test_flag_then_unflag_restores_state() {
    let mut catalogue = sample_catalogue();

    let flagged = catalogue.flag("funny_dogs_video_id", "dont_like_dogs").unwrap();
    assert!(flagged.is_flagged());
    assert_eq!(flagged.flag_reason(), "dont_like_dogs");

    let allowed = catalogue.unflag("funny_dogs_video_id").unwrap();
    assert!(!allowed.is_flagged());
    assert_eq!(allowed.flag_reason(), "");

    // Second unflag has nothing to undo
    let err = catalogue.unflag("funny_dogs_video_id").unwrap_err();
    assert_eq!(
        err,
        ReelError::NotFlagged {
            id: VideoId::new("funny_dogs_video_id")
        }
    );
}

#[test]
fn test_flag_twice_fails_and_keeps_first_reason() {
    let mut catalogue = sample_catalogue();
    catalogue.flag("nothing_video_id", "boring").unwrap();

    let err = catalogue.flag("nothing_video_id", "other").unwrap_err();
    assert!(matches!(err, ReelError::AlreadyFlagged { .. }));
    assert_eq!(
        catalogue.get("nothing_video_id").unwrap().flag_reason(),
        "boring"
    );
}

#[test]
fn test_flag_with_empty_reason() {
    let mut catalogue = sample_catalogue();
    let video = catalogue.flag("amazing_cats_video_id", "").unwrap();
    assert!(video.is_flagged());
    assert_eq!(video.flag_reason(), "");
    assert!(video.display_line().ends_with("- FLAGGED (reason: Not supplied)"));
}

#[test]
fn test_flag_and_unflag_unknown_video() {
    let mut catalogue = sample_catalogue();

    let err = catalogue.flag("nope", "x").unwrap_err();
    assert_eq!(
        err,
        ReelError::NotFound {
            entity: Entity::Video,
            id: "nope".to_string()
        }
    );

    let err = catalogue.unflag("nope").unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_playable_excludes_flagged_in_order() {
    let mut catalogue = sample_catalogue();
    catalogue.flag("amazing_cats_video_id", "").unwrap();
    catalogue.flag("nothing_video_id", "").unwrap();

    let ids: Vec<&str> = catalogue.playable().map(|v| v.id().as_str()).collect();
    assert_eq!(
        ids,
        [
            "funny_dogs_video_id",
            "another_cat_video_id",
            "life_at_google_video_id",
        ]
    );
    // Flagging never removes records
    assert_eq!(catalogue.len(), 5);
}
