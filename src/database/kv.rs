//! Key-value store adapter, the only persistence surface the mediator uses.
//!
//! Each key names one collection, stored as a single JSON document in the
//! `kv_store` table. `get` returns the values that exist; `set` blindly
//! overwrites each key's whole value. A caller's `get`/`set` pair is not
//! atomic with respect to other callers of the same connection.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::params;
use serde_json::Value;

use crate::database::connection::Database;
use crate::types::errors::StoreError;

/// Persistent store adapter backed by the `kv_store` table.
pub struct KvStore {
    db: Arc<Database>,
}

impl KvStore {
    /// Creates a new `KvStore` over the given database.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Returns the current UNIX timestamp in seconds.
    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    /// Reads the requested keys. Keys with no stored value are simply absent
    /// from the returned map; callers supply their own default.
    pub fn get(&self, keys: &[&str]) -> Result<HashMap<String, Value>, StoreError> {
        let conn = self.db.connection();
        let mut stmt = conn
            .prepare("SELECT value FROM kv_store WHERE key = ?1")
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        let mut result = HashMap::new();
        for key in keys {
            let stored: Option<String> = stmt
                .query_row(params![key], |row| row.get(0))
                .map(Some)
                .or_else(|e| match e {
                    rusqlite::Error::QueryReturnedNoRows => Ok(None),
                    other => Err(StoreError::DatabaseError(other.to_string())),
                })?;

            if let Some(text) = stored {
                let value: Value = serde_json::from_str(&text)
                    .map_err(|e| StoreError::SerializationError(e.to_string()))?;
                result.insert((*key).to_string(), value);
            }
        }
        Ok(result)
    }

    /// Writes each pair, replacing the prior value of the key in full.
    pub fn set(&self, pairs: &[(&str, Value)]) -> Result<(), StoreError> {
        let conn = self.db.connection();
        let now = Self::now();

        for (key, value) in pairs {
            let text = serde_json::to_string(value)
                .map_err(|e| StoreError::SerializationError(e.to_string()))?;
            conn.execute(
                "INSERT OR REPLACE INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)",
                params![key, text, now],
            )
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;
        }
        Ok(())
    }
}
