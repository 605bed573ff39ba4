use serde::{Deserialize, Serialize};

/// Payload of a "selection captured" trigger (e.g. a context-menu action on
/// selected page text), delivered to the capture flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionCapture {
    pub selected_text: String,
    pub page_url: String,
    pub page_title: String,
}

/// The user's folder decision in the capture dialog: either an existing
/// folder picked from the chooser, or a freshly typed folder name.
#[derive(Debug, Clone, PartialEq)]
pub enum FolderChoice {
    /// An existing folder, identified by id plus the display name shown in
    /// the chooser (denormalized onto the clip).
    Existing { id: String, name: String },
    /// Create a new folder with this name, then file the clip under it.
    New { name: String },
}
