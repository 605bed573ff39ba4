//! textclipper database layer.
//!
//! Provides SQLite connection management, schema migrations, and the
//! key-value store adapter that the mediator persists through.
//!
//! # Usage
//!
//! ```no_run
//! use textclipper::database::Database;
//!
//! // Open a persistent database
//! let db = Database::open("textclipper.db").expect("failed to open database");
//!
//! // Or use an in-memory database for testing
//! let db = Database::open_in_memory().expect("failed to open in-memory database");
//! ```

pub mod connection;
pub mod kv;
pub mod migrations;

pub use connection::Database;
pub use kv::KvStore;
