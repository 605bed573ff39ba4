//! Unit tests for the browse/search projection.
//!
//! `ClipView` is a pure view over mediator data. These tests cover folder
//! filtering, case-insensitive substring search, timestamp sorting, and the
//! count/recent helpers the popup and full view render from.

use rstest::rstest;
use std::sync::Arc;

use textclipper::database::{Database, KvStore};
use textclipper::managers::clip_manager::{ClipManager, ClipManagerTrait};
use textclipper::services::clip_view::{
    filter_clips, matches_query, sort_clips, ClipView, FolderFilter, SortOrder,
};
use textclipper::types::clip::{Clip, Folder};

fn clip(id: &str, folder_id: &str, folder_name: &str, text: &str, timestamp: i64) -> Clip {
    Clip {
        id: id.to_string(),
        text: text.to_string(),
        url: format!("https://example.com/{}", id),
        page_title: format!("Page {}", id),
        folder_id: folder_id.to_string(),
        folder_name: folder_name.to_string(),
        timestamp,
    }
}

// ─── Query matching ───

/// Case-insensitive substring search across text, title, URL, and folder name.
#[rstest]
#[case("ab", true)] // matches text "abc"
#[case("AB", true)] // case-insensitive
#[case("page c1", true)] // matches page title
#[case("example.com/c1", true)] // matches url
#[case("work", true)] // matches folder name
#[case("xyz", false)]
#[case("", true)] // empty query matches everything
fn test_matches_query(#[case] query: &str, #[case] expected: bool) {
    let c = clip("c1", "f1", "Work", "abc", 100);
    assert_eq!(matches_query(&c, query), expected);
}

#[test]
fn test_search_filters_to_matching_clips() {
    let clips = vec![clip("c1", "f1", "Work", "abc", 100), clip("c2", "f1", "Work", "xyz", 200)];

    let visible = filter_clips(&clips, &FolderFilter::All, "ab");
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "c1");
}

// ─── Folder filter ───

#[test]
fn test_folder_filter_limits_to_one_folder() {
    let clips = vec![
        clip("c1", "f1", "Work", "one", 100),
        clip("c2", "f2", "Personal", "two", 200),
        clip("c3", "f1", "Work", "three", 300),
    ];

    let visible = filter_clips(&clips, &FolderFilter::Folder("f1".to_string()), "");
    let ids: Vec<&str> = visible.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["c1", "c3"]);

    let all = filter_clips(&clips, &FolderFilter::All, "");
    assert_eq!(all.len(), 3);
}

// ─── Sorting ───

#[test]
fn test_sort_newest_and_oldest_first() {
    let clips = vec![
        clip("c1", "f1", "Work", "one", 200),
        clip("c2", "f1", "Work", "two", 100),
        clip("c3", "f1", "Work", "three", 300),
    ];
    let mut refs: Vec<&Clip> = clips.iter().collect();

    sort_clips(&mut refs, SortOrder::NewestFirst);
    let ids: Vec<&str> = refs.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["c3", "c1", "c2"]);

    sort_clips(&mut refs, SortOrder::OldestFirst);
    let ids: Vec<&str> = refs.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["c2", "c1", "c3"]);
}

// ─── View state over a real mediator ───

fn populated_view() -> ClipView {
    let db = Arc::new(Database::open_in_memory().expect("open in-memory database"));
    let mut mediator = ClipManager::new(KvStore::new(db));

    mediator
        .save_folder(Folder { id: "f1".to_string(), name: "Work".to_string(), created_at: 1 })
        .unwrap();
    mediator
        .save_folder(Folder { id: "f2".to_string(), name: "Personal".to_string(), created_at: 2 })
        .unwrap();
    mediator.save_clip(clip("c1", "f1", "Work", "alpha", 100)).unwrap();
    mediator.save_clip(clip("c2", "f1", "Work", "beta", 200)).unwrap();
    mediator.save_clip(clip("c3", "f2", "Personal", "gamma", 300)).unwrap();

    let mut view = ClipView::new();
    view.refresh(&mediator).expect("refresh view");
    view
}

#[test]
fn test_refresh_copies_both_collections() {
    let view = populated_view();
    assert_eq!(view.total_folders(), 2);
    assert_eq!(view.total_clips(), 3);
    assert_eq!(view.folders()[0].id, "f1");
}

#[test]
fn test_visible_clips_applies_filter_query_and_sort() {
    let mut view = populated_view();

    view.set_folder_filter(FolderFilter::Folder("f1".to_string()));
    view.set_sort(SortOrder::OldestFirst);
    let ids: Vec<&str> = view.visible_clips().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["c1", "c2"]);

    view.set_query("beta");
    let ids: Vec<&str> = view.visible_clips().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["c2"]);
}

/// recent_clips is the head of the stored most-recent-first order,
/// unaffected by the active filter or sort.
#[test]
fn test_recent_clips_head_of_stored_order() {
    let mut view = populated_view();
    view.set_folder_filter(FolderFilter::Folder("f2".to_string()));

    let recent: Vec<&str> = view.recent_clips(2).iter().map(|c| c.id.as_str()).collect();
    assert_eq!(recent, vec!["c3", "c2"]);

    // Asking for more than exist returns everything
    assert_eq!(view.recent_clips(10).len(), 3);
}

#[test]
fn test_folder_clip_counts() {
    let view = populated_view();
    let counts = view.folder_clip_counts();
    assert_eq!(counts.get("f1"), Some(&2));
    assert_eq!(counts.get("f2"), Some(&1));
    assert_eq!(counts.get("f3"), None);
}

/// The view is a transient copy: mediator-side changes are invisible until
/// the next refresh.
#[test]
fn test_view_copy_is_stale_until_refresh() {
    let db = Arc::new(Database::open_in_memory().expect("open in-memory database"));
    let mut mediator = ClipManager::new(KvStore::new(db));
    mediator.save_clip(clip("c1", "f1", "Work", "one", 100)).unwrap();

    let mut view = ClipView::new();
    view.refresh(&mediator).unwrap();
    assert_eq!(view.total_clips(), 1);

    mediator.delete_clip("c1").unwrap();
    assert_eq!(view.total_clips(), 1, "stale copy until refresh");

    view.refresh(&mediator).unwrap();
    assert_eq!(view.total_clips(), 0);
}
