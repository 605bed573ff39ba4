//! Data-access mediator for folders and clips.
//!
//! Implements `ClipManagerTrait` — the six operations every UI surface goes
//! through. The mediator is the sole owner of the `folders` and `clips`
//! collections; nothing else reads or writes the store. Each mutation is a
//! full read-modify-write of the affected collection(s), since the store's
//! `set` replaces a key's whole value.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::database::kv::KvStore;
use crate::types::clip::{Clip, Folder};
use crate::types::errors::ClipError;

/// Store key of the folder collection.
pub const FOLDERS_KEY: &str = "folders";
/// Store key of the clip collection.
pub const CLIPS_KEY: &str = "clips";

/// Trait defining the mediator operations.
///
/// ID uniqueness is the caller's responsibility; the mediator does not
/// verify it, nor does it check that a clip's `folder_id` exists.
pub trait ClipManagerTrait {
    fn get_folders(&self) -> Result<Vec<Folder>, ClipError>;
    fn get_clips(&self) -> Result<Vec<Clip>, ClipError>;
    fn save_folder(&mut self, folder: Folder) -> Result<(), ClipError>;
    fn save_clip(&mut self, clip: Clip) -> Result<(), ClipError>;
    fn delete_clip(&mut self, clip_id: &str) -> Result<(), ClipError>;
    fn delete_folder(&mut self, folder_id: &str) -> Result<(), ClipError>;
}

/// Mediator backed by the key-value store adapter.
pub struct ClipManager {
    store: KvStore,
}

impl ClipManager {
    /// Creates a new `ClipManager` over the injected store.
    pub fn new(store: KvStore) -> Self {
        Self { store }
    }

    /// Reads one collection, defaulting to empty when the key is absent.
    fn read_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, ClipError> {
        let mut values = self.store.get(&[key])?;
        match values.remove(key) {
            Some(value) => serde_json::from_value(value)
                .map_err(|e| ClipError::SerializationError(e.to_string())),
            None => Ok(Vec::new()),
        }
    }

    fn to_value<T: Serialize>(items: &[T]) -> Result<Value, ClipError> {
        serde_json::to_value(items).map_err(|e| ClipError::SerializationError(e.to_string()))
    }

    /// Writes one collection back in full.
    fn write_collection<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), ClipError> {
        let value = Self::to_value(items)?;
        self.store.set(&[(key, value)])?;
        Ok(())
    }
}

impl ClipManagerTrait for ClipManager {
    /// Returns all folders in stored (creation) order.
    fn get_folders(&self) -> Result<Vec<Folder>, ClipError> {
        self.read_collection(FOLDERS_KEY)
    }

    /// Returns all clips in stored order, most recent first.
    fn get_clips(&self) -> Result<Vec<Clip>, ClipError> {
        self.read_collection(CLIPS_KEY)
    }

    /// Appends the folder to the end of the folder collection.
    fn save_folder(&mut self, folder: Folder) -> Result<(), ClipError> {
        let mut folders: Vec<Folder> = self.read_collection(FOLDERS_KEY)?;
        folders.push(folder);
        self.write_collection(FOLDERS_KEY, &folders)
    }

    /// Inserts the clip at the FRONT of the clip collection, keeping the
    /// stored order most-recent-first.
    fn save_clip(&mut self, clip: Clip) -> Result<(), ClipError> {
        let mut clips: Vec<Clip> = self.read_collection(CLIPS_KEY)?;
        clips.insert(0, clip);
        self.write_collection(CLIPS_KEY, &clips)
    }

    /// Removes the clip with the given id, leaving all others (and their
    /// order) untouched. Removing an unknown id is a no-op success.
    fn delete_clip(&mut self, clip_id: &str) -> Result<(), ClipError> {
        let mut clips: Vec<Clip> = self.read_collection(CLIPS_KEY)?;
        clips.retain(|clip| clip.id != clip_id);
        self.write_collection(CLIPS_KEY, &clips)
    }

    /// Removes the folder with the given id and every clip filed under it,
    /// writing both collections back in a single store call. Removing an
    /// unknown id is a no-op success.
    fn delete_folder(&mut self, folder_id: &str) -> Result<(), ClipError> {
        let mut values = self.store.get(&[FOLDERS_KEY, CLIPS_KEY])?;

        let mut folders: Vec<Folder> = match values.remove(FOLDERS_KEY) {
            Some(value) => serde_json::from_value(value)
                .map_err(|e| ClipError::SerializationError(e.to_string()))?,
            None => Vec::new(),
        };
        let mut clips: Vec<Clip> = match values.remove(CLIPS_KEY) {
            Some(value) => serde_json::from_value(value)
                .map_err(|e| ClipError::SerializationError(e.to_string()))?,
            None => Vec::new(),
        };

        folders.retain(|folder| folder.id != folder_id);
        clips.retain(|clip| clip.folder_id != folder_id);

        let pairs = [
            (FOLDERS_KEY, Self::to_value(&folders)?),
            (CLIPS_KEY, Self::to_value(&clips)?),
        ];
        self.store.set(&pairs)?;
        Ok(())
    }
}
