//! textclipper — local data engine for a text-clipping browser tool.
//!
//! Entry point: runs an interactive console demo walking through each
//! component against an in-memory database.

fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║              textclipper v{} — Demo Mode                  ║", env!("CARGO_PKG_VERSION"));
    println!("║     Clip selected text into folders, browse and search      ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    demo_database();
    demo_kv_store();
    demo_mediator();
    demo_capture_flow();
    demo_clip_view();

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All 5 components demonstrated successfully!");
    println!("═══════════════════════════════════════════════════════════════");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn demo_database() {
    use textclipper::database::Database;

    section("Database Layer");
    let db = Database::open_in_memory().expect("open in-memory database");
    let version = textclipper::database::migrations::get_schema_version(db.connection());
    println!("  Opened in-memory database, schema version {}", version);
}

fn demo_kv_store() {
    use std::sync::Arc;
    use serde_json::json;
    use textclipper::database::{Database, KvStore};

    section("Key-Value Store");
    let db = Arc::new(Database::open_in_memory().expect("open in-memory database"));
    let store = KvStore::new(db);

    store
        .set(&[("clips", json!([{"id": "demo"}]))])
        .expect("set clips");
    let values = store.get(&["clips", "folders"]).expect("get collections");
    println!("  Stored `clips`, read back {} of 2 requested keys", values.len());
}

fn demo_mediator() {
    use std::sync::Arc;
    use textclipper::database::{Database, KvStore};
    use textclipper::managers::clip_manager::{ClipManager, ClipManagerTrait};
    use textclipper::types::clip::{Clip, Folder};

    section("Mediator");
    let db = Arc::new(Database::open_in_memory().expect("open in-memory database"));
    let mut mediator = ClipManager::new(KvStore::new(db));

    mediator
        .save_folder(Folder {
            id: "f1".to_string(),
            name: "Work".to_string(),
            created_at: 1,
        })
        .expect("save folder");
    mediator
        .save_clip(Clip {
            id: "c1".to_string(),
            text: "hello".to_string(),
            url: "https://example.com".to_string(),
            page_title: "Example".to_string(),
            folder_id: "f1".to_string(),
            folder_name: "Work".to_string(),
            timestamp: 2,
        })
        .expect("save clip");
    println!(
        "  Saved 1 folder and 1 clip; getClips returns {} clip(s)",
        mediator.get_clips().expect("get clips").len()
    );

    mediator.delete_folder("f1").expect("delete folder");
    println!(
        "  Cascade delete of folder left {} clip(s)",
        mediator.get_clips().expect("get clips").len()
    );
}

fn demo_capture_flow() {
    use std::sync::Arc;
    use textclipper::database::{Database, KvStore};
    use textclipper::managers::clip_manager::ClipManager;
    use textclipper::services::capture_flow::CaptureFlow;
    use textclipper::types::capture::{FolderChoice, SelectionCapture};

    section("Capture Flow");
    let db = Arc::new(Database::open_in_memory().expect("open in-memory database"));
    let mut mediator = ClipManager::new(KvStore::new(db));

    let capture = SelectionCapture {
        selected_text: "a memorable sentence".to_string(),
        page_url: "https://example.com/article".to_string(),
        page_title: "An Article".to_string(),
    };
    let clip = CaptureFlow::save_selection(
        &mut mediator,
        &capture,
        Some(FolderChoice::New { name: "Reading".to_string() }),
    )
    .expect("save selection");
    println!("  Captured clip {} into new folder \"{}\"", clip.id, clip.folder_name);
}

fn demo_clip_view() {
    use std::sync::Arc;
    use textclipper::database::{Database, KvStore};
    use textclipper::managers::clip_manager::ClipManager;
    use textclipper::services::capture_flow::CaptureFlow;
    use textclipper::services::clip_view::ClipView;
    use textclipper::types::capture::{FolderChoice, SelectionCapture};

    section("Clip View");
    let db = Arc::new(Database::open_in_memory().expect("open in-memory database"));
    let mut mediator = ClipManager::new(KvStore::new(db));

    for text in ["first snippet", "second snippet", "something else"] {
        let capture = SelectionCapture {
            selected_text: text.to_string(),
            page_url: "https://example.com".to_string(),
            page_title: "Example".to_string(),
        };
        CaptureFlow::save_selection(
            &mut mediator,
            &capture,
            Some(FolderChoice::New { name: format!("Folder for {}", text) }),
        )
        .expect("save selection");
    }

    let mut view = ClipView::new();
    view.refresh(&mediator).expect("refresh view");
    view.set_query("snippet");
    println!(
        "  View holds {} clips in {} folders; query \"snippet\" matches {}",
        view.total_clips(),
        view.total_folders(),
        view.visible_clips().len()
    );
}
