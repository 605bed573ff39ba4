//! Property-based tests for the folder→clips cascade delete.
//!
//! For any assignment of clips to folders, deleting one folder removes that
//! folder and exactly its clips; every other clip survives in its original
//! relative order, and repeating the delete is a no-op.

use std::sync::Arc;

use proptest::prelude::*;

use textclipper::database::{Database, KvStore};
use textclipper::managers::clip_manager::{ClipManager, ClipManagerTrait};
use textclipper::types::clip::{Clip, Folder};

fn setup() -> ClipManager {
    let db = Arc::new(Database::open_in_memory().expect("open in-memory database"));
    ClipManager::new(KvStore::new(db))
}

fn folder(index: usize) -> Folder {
    Folder {
        id: format!("f{}", index),
        name: format!("Folder {}", index),
        created_at: index as i64,
    }
}

fn clip(index: usize, folder_index: usize) -> Clip {
    Clip {
        id: format!("c{}", index),
        text: format!("text {}", index),
        url: "https://example.com".to_string(),
        page_title: "Example".to_string(),
        folder_id: format!("f{}", folder_index),
        folder_name: format!("Folder {}", folder_index),
        timestamp: index as i64,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn delete_folder_removes_exactly_its_clips(
        folder_count in 1usize..5,
        assignments in proptest::collection::vec(0usize..5, 0..12),
        victim_seed in 0usize..5,
    ) {
        let mut mediator = setup();

        // Keep assignments within the generated folder count
        let assignments: Vec<usize> =
            assignments.into_iter().map(|a| a % folder_count).collect();
        let victim = victim_seed % folder_count;

        for i in 0..folder_count {
            mediator.save_folder(folder(i)).expect("save_folder should succeed");
        }
        for (i, &folder_index) in assignments.iter().enumerate() {
            mediator.save_clip(clip(i, folder_index)).expect("save_clip should succeed");
        }

        mediator
            .delete_folder(&format!("f{}", victim))
            .expect("delete_folder should succeed");

        // The victim folder is gone; the rest remain in creation order
        let expected_folders: Vec<String> = (0..folder_count)
            .filter(|&i| i != victim)
            .map(|i| format!("f{}", i))
            .collect();
        let actual_folders: Vec<String> = mediator
            .get_folders()
            .expect("get_folders should succeed")
            .into_iter()
            .map(|f| f.id)
            .collect();
        prop_assert_eq!(actual_folders, expected_folders);

        // Surviving clips are exactly the non-victim ones, newest first
        let expected_clips: Vec<String> = (0..assignments.len())
            .rev()
            .filter(|&i| assignments[i] != victim)
            .map(|i| format!("c{}", i))
            .collect();
        let actual_clips: Vec<String> = mediator
            .get_clips()
            .expect("get_clips should succeed")
            .into_iter()
            .map(|c| c.id)
            .collect();
        prop_assert_eq!(&actual_clips, &expected_clips);

        // Repeating the delete changes nothing
        mediator
            .delete_folder(&format!("f{}", victim))
            .expect("repeated delete_folder should succeed");
        let after_repeat: Vec<String> = mediator
            .get_clips()
            .expect("get_clips should succeed")
            .into_iter()
            .map(|c| c.id)
            .collect();
        prop_assert_eq!(after_repeat, expected_clips);
    }
}
