//! Action-message handler for the textclipper RPC protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! `handle_action` dispatches the action messages UI surfaces send to the
//! mediator via the `App` struct. The request object carries its payload
//! fields at the top level: `folder`, `clip`, `clipId`, or `folderId`.

use std::sync::Mutex;

use crate::app::App;
use crate::managers::clip_manager::ClipManagerTrait;
use crate::types::clip::{Clip, Folder};

use serde_json::{json, Value};

/// Dispatch an action message to the mediator.
///
/// Returns `Ok(Value)` with the response body on success or `Err(String)`
/// with an error message. A failed operation leaves persisted state
/// unchanged; nothing is retried.
pub fn handle_action(app: &Mutex<App>, action: &str, request: &Value) -> Result<Value, String> {
    match action {
        // ─── Queries ───
        "getFolders" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let folders = a.clips.get_folders().map_err(|e| e.to_string())?;
            Ok(json!({ "folders": folders }))
        }
        "getClips" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let clips = a.clips.get_clips().map_err(|e| e.to_string())?;
            Ok(json!({ "clips": clips }))
        }

        // ─── Saves ───
        "saveFolder" => {
            let payload = request.get("folder").cloned().ok_or("missing folder")?;
            let folder: Folder = serde_json::from_value(payload)
                .map_err(|e| format!("invalid folder: {}", e))?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.clips.save_folder(folder).map_err(|e| e.to_string())?;
            Ok(json!({ "success": true }))
        }
        "saveClip" => {
            let payload = request.get("clip").cloned().ok_or("missing clip")?;
            let clip: Clip =
                serde_json::from_value(payload).map_err(|e| format!("invalid clip: {}", e))?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.clips.save_clip(clip).map_err(|e| e.to_string())?;
            Ok(json!({ "success": true }))
        }

        // ─── Deletes (idempotent) ───
        "deleteClip" => {
            let clip_id = request
                .get("clipId")
                .and_then(|v| v.as_str())
                .ok_or("missing clipId")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.clips.delete_clip(clip_id).map_err(|e| e.to_string())?;
            Ok(json!({ "success": true }))
        }
        "deleteFolder" => {
            let folder_id = request
                .get("folderId")
                .and_then(|v| v.as_str())
                .ok_or("missing folderId")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.clips.delete_folder(folder_id).map_err(|e| e.to_string())?;
            Ok(json!({ "success": true }))
        }

        // ─── Ping ───
        "ping" => Ok(json!({ "pong": true })),

        _ => Err(format!("unknown action: {}", action)),
    }
}
