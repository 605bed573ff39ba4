//! App core for textclipper.
//!
//! Central struct owning the database and the mediator. One `App` exists per
//! process; every UI surface reaches the stored collections through its
//! mediator and nothing else.

use std::sync::Arc;

use crate::database::connection::Database;
use crate::database::kv::KvStore;
use crate::managers::clip_manager::ClipManager;

/// Central application struct: the database plus the single mediator.
pub struct App {
    pub db: Arc<Database>,
    pub clips: ClipManager,
}

impl App {
    /// Creates a new App over the database at `db_path`, initializing the
    /// store adapter and injecting it into the mediator.
    pub fn new(db_path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Arc::new(Database::open(db_path)?);
        let clips = ClipManager::new(KvStore::new(db.clone()));
        Ok(Self { db, clips })
    }
}
