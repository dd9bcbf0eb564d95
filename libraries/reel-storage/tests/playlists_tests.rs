//! Integration tests for the playlists slice
//!
//! Tests playlist operations including:
//! - Case-insensitive name identity
//! - Membership ordering and de-duplication
//! - Clear / delete lifecycle

use proptest::prelude::*;
use reel_core::{Entity, ReelError, VideoId};
use reel_storage::PlaylistStore;
use std::collections::HashSet;

#[test]
fn test_create_and_find_playlist() {
    let mut store = PlaylistStore::new();
    store.create("My Favorites").expect("Failed to create playlist");

    let found = store.find("my favorites").expect("lookup ignores case");
    assert_eq!(found.name(), "My Favorites");
    assert!(found.is_empty());
}

#[test]
fn test_duplicate_name_ignores_case() {
    let mut store = PlaylistStore::new();
    store.create("My List").unwrap();

    let err = store.create("MY LIST").unwrap_err();
    assert_eq!(
        err,
        ReelError::DuplicateName {
            name: "MY LIST".to_string()
        }
    );
    assert_eq!(store.len(), 1);
    assert_eq!(store.list_names(), ["My List"]);
}

#[test]
fn test_add_videos_keeps_insertion_order() {
    let mut store = PlaylistStore::new();
    store.create("Mix").unwrap();

    for id in ["c", "a", "b"] {
        store.add_video("mix", VideoId::new(id)).unwrap();
    }

    let videos: Vec<&str> = store
        .find("Mix")
        .unwrap()
        .videos()
        .iter()
        .map(VideoId::as_str)
        .collect();
    assert_eq!(videos, ["c", "a", "b"]);
}

#[test]
fn test_add_same_video_twice() {
    let mut store = PlaylistStore::new();
    store.create("Fun").unwrap();
    store.add_video("Fun", VideoId::new("v1")).unwrap();

    let err = store.add_video("FUN", VideoId::new("v1")).unwrap_err();
    assert_eq!(
        err,
        ReelError::AlreadyPresent {
            id: VideoId::new("v1")
        }
    );
    assert_eq!(store.find("Fun").unwrap().len(), 1);
}

#[test]
fn test_membership_ops_on_missing_playlist() {
    let mut store = PlaylistStore::new();

    let expected = ReelError::NotFound {
        entity: Entity::Playlist,
        id: "Ghost".to_string(),
    };
    assert_eq!(store.add_video("Ghost", VideoId::new("v1")), Err(expected.clone()));
    assert_eq!(store.remove_video("Ghost", "v1"), Err(expected.clone()));
    assert_eq!(store.clear("Ghost"), Err(expected.clone()));
    assert_eq!(store.delete("Ghost").map(|_| ()), Err(expected));
}

#[test]
fn test_remove_missing_member() {
    let mut store = PlaylistStore::new();
    store.create("Fun").unwrap();
    store.add_video("Fun", VideoId::new("v1")).unwrap();

    let err = store.remove_video("Fun", "v2").unwrap_err();
    assert_eq!(
        err,
        ReelError::NotPresent {
            id: VideoId::new("v2")
        }
    );
    assert_eq!(store.find("Fun").unwrap().len(), 1);
}

#[test]
fn test_clear_empties_but_keeps_playlist() {
    let mut store = PlaylistStore::new();
    store.create("Fun").unwrap();
    store.add_video("Fun", VideoId::new("v1")).unwrap();
    store.add_video("Fun", VideoId::new("v2")).unwrap();

    assert_eq!(store.clear("fun").unwrap(), 2);

    let playlist = store.find("Fun").expect("clear keeps the playlist");
    assert!(playlist.is_empty());

    // Clearing an empty playlist is fine
    assert_eq!(store.clear("Fun").unwrap(), 0);
}

#[test]
fn test_delete_frees_the_name() {
    let mut store = PlaylistStore::new();
    store.create("Fun").unwrap();
    store.add_video("Fun", VideoId::new("v1")).unwrap();

    let deleted = store.delete("FUN").unwrap();
    assert_eq!(deleted.name(), "Fun");
    assert!(store.find("Fun").is_none());
    assert!(store.is_empty());

    let recreated = store.create("fun").unwrap();
    assert_eq!(recreated.name(), "fun");
    assert!(recreated.is_empty());
}

#[derive(Debug, Clone)]
enum Op {
    Create(String),
    Delete(String),
    Add(String, String),
    Remove(String, String),
    Clear(String),
}

fn arbitrary_name() -> impl Strategy<Value = String> {
    prop_oneof![Just("fun"), Just("FUN"), Just("Fun"), Just("mix"), Just("Mix")]
        .prop_map(String::from)
}

fn arbitrary_id() -> impl Strategy<Value = String> {
    "v[0-4]"
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        arbitrary_name().prop_map(Op::Create),
        arbitrary_name().prop_map(Op::Delete),
        (arbitrary_name(), arbitrary_id()).prop_map(|(n, v)| Op::Add(n, v)),
        (arbitrary_name(), arbitrary_id()).prop_map(|(n, v)| Op::Remove(n, v)),
        arbitrary_name().prop_map(Op::Clear),
    ]
}

proptest! {
    /// Property: names stay unique by comparison key and members stay unique
    #[test]
    fn store_invariants_hold(ops in prop::collection::vec(arbitrary_op(), 1..60)) {
        let mut store = PlaylistStore::new();

        for op in ops {
            // Failures are expected outcomes, never panics
            let _ = match op {
                Op::Create(name) => store.create(&name).map(|_| ()),
                Op::Delete(name) => store.delete(&name).map(|_| ()),
                Op::Add(name, id) => store.add_video(&name, VideoId::new(id)),
                Op::Remove(name, id) => store.remove_video(&name, &id).map(|_| ()),
                Op::Clear(name) => store.clear(&name).map(|_| ()),
            };

            let keys: HashSet<String> = store
                .list_names()
                .iter()
                .map(|n| n.to_uppercase())
                .collect();
            prop_assert_eq!(keys.len(), store.len());

            for name in store.list_names() {
                let playlist = store.find(name).unwrap();
                let unique: HashSet<&VideoId> = playlist.videos().iter().collect();
                prop_assert_eq!(unique.len(), playlist.len());
            }
        }
    }
}
