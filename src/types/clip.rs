use serde::{Deserialize, Serialize};

/// A user-named grouping container for clips.
///
/// Field names are serialized in camelCase to match the persisted JSON
/// layout of the `folders` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: String,
    pub name: String,
    /// Creation time, Unix milliseconds.
    pub created_at: i64,
}

/// A saved snippet of selected text plus its source metadata and folder
/// assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clip {
    pub id: String,
    pub text: String,
    /// Source page URL at capture time.
    pub url: String,
    /// Source page title at capture time.
    pub page_title: String,
    /// ID of the folder this clip belongs to.
    pub folder_id: String,
    /// Folder name copied at save time. Intentionally NOT kept in sync with
    /// the folder afterwards.
    pub folder_name: String,
    /// Capture time, Unix milliseconds.
    pub timestamp: i64,
}
