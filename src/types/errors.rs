use std::fmt;

// === StoreError ===

/// Errors from the persistent key-value store adapter.
#[derive(Debug)]
pub enum StoreError {
    /// Database operation failed.
    DatabaseError(String),
    /// A stored value could not be serialized or deserialized.
    SerializationError(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::DatabaseError(msg) => write!(f, "Store database error: {}", msg),
            StoreError::SerializationError(msg) => {
                write!(f, "Store serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for StoreError {}

// === ClipError ===

/// Errors from the clip/folder mediator operations.
#[derive(Debug)]
pub enum ClipError {
    /// The underlying store failed; persisted state is unchanged.
    StorageError(String),
    /// A collection could not be decoded into its entity type.
    SerializationError(String),
}

impl fmt::Display for ClipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipError::StorageError(msg) => write!(f, "Clip storage error: {}", msg),
            ClipError::SerializationError(msg) => {
                write!(f, "Clip serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ClipError {}

impl From<StoreError> for ClipError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DatabaseError(msg) => ClipError::StorageError(msg),
            StoreError::SerializationError(msg) => ClipError::SerializationError(msg),
        }
    }
}

// === CaptureError ===

/// Errors raised at the capture-flow boundary, before any request reaches
/// the mediator, plus save failures reported back from it.
#[derive(Debug)]
pub enum CaptureError {
    /// The captured selection is empty or whitespace-only.
    EmptySelection,
    /// Neither an existing folder nor a new folder name was provided.
    NoFolderSelected,
    /// A new folder name was provided but is empty after trimming.
    EmptyFolderName,
    /// The mediator rejected a save; nothing further was attempted.
    SaveFailed(String),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::EmptySelection => write!(f, "Selection is empty"),
            CaptureError::NoFolderSelected => {
                write!(f, "No folder selected or created")
            }
            CaptureError::EmptyFolderName => write!(f, "Folder name is empty"),
            CaptureError::SaveFailed(msg) => write!(f, "Save failed: {}", msg),
        }
    }
}

impl std::error::Error for CaptureError {}
