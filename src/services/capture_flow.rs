//! Capture flow: turns a "selection captured" trigger into persisted data.
//!
//! Drives the mediator the way the in-page save dialog does: list folders to
//! populate the chooser, create a folder first if the user typed a new name,
//! then save the clip with the folder's name denormalized onto it. The two
//! saves are separate requests; there is no atomicity between them.
//!
//! Validation happens here, at the UI boundary; the mediator is never
//! called with an empty selection or without a folder decision.

use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

use crate::managers::clip_manager::ClipManagerTrait;
use crate::types::capture::{FolderChoice, SelectionCapture};
use crate::types::clip::{Clip, Folder};
use crate::types::errors::{CaptureError, ClipError};

/// Length of the random suffix appended to generated IDs.
const ID_SUFFIX_LEN: usize = 9;

/// Returns the current UNIX timestamp in milliseconds.
fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}

/// Generates an entry ID: millisecond timestamp plus a short random suffix.
///
/// Uniqueness is this side's responsibility; the mediator never checks it.
pub fn new_entry_id() -> String {
    let suffix: String = Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(ID_SUFFIX_LEN)
        .collect();
    format!("{}{}", now_millis(), suffix)
}

/// The capture-side save dialog logic, spec'd against the mediator trait.
pub struct CaptureFlow;

impl CaptureFlow {
    /// Lists the folders shown in the capture dialog's chooser.
    pub fn folder_choices(mediator: &impl ClipManagerTrait) -> Result<Vec<Folder>, ClipError> {
        mediator.get_folders()
    }

    /// Saves the captured selection under the chosen folder.
    ///
    /// `choice` is `None` when the user neither picked an existing folder
    /// nor typed a new name; that blocks the save before any request is
    /// issued. With `FolderChoice::New`, the folder is created first and the
    /// clip save follows as an independent second request.
    ///
    /// Returns the saved clip.
    pub fn save_selection(
        mediator: &mut impl ClipManagerTrait,
        capture: &SelectionCapture,
        choice: Option<FolderChoice>,
    ) -> Result<Clip, CaptureError> {
        if capture.selected_text.trim().is_empty() {
            return Err(CaptureError::EmptySelection);
        }

        let (folder_id, folder_name) = match choice {
            None => return Err(CaptureError::NoFolderSelected),
            Some(FolderChoice::Existing { id, name }) => {
                if id.is_empty() {
                    return Err(CaptureError::NoFolderSelected);
                }
                (id, name)
            }
            Some(FolderChoice::New { name }) => {
                let name = name.trim().to_string();
                if name.is_empty() {
                    return Err(CaptureError::EmptyFolderName);
                }
                let folder = Folder {
                    id: new_entry_id(),
                    name: name.clone(),
                    created_at: now_millis(),
                };
                let id = folder.id.clone();
                mediator
                    .save_folder(folder)
                    .map_err(|e| CaptureError::SaveFailed(e.to_string()))?;
                (id, name)
            }
        };

        let clip = Clip {
            id: new_entry_id(),
            text: capture.selected_text.clone(),
            url: capture.page_url.clone(),
            page_title: capture.page_title.clone(),
            folder_id,
            folder_name,
            timestamp: now_millis(),
        };

        mediator
            .save_clip(clip.clone())
            .map_err(|e| CaptureError::SaveFailed(e.to_string()))?;
        Ok(clip)
    }
}
