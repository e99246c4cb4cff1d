//! SQLite storage backend for the launchpad fixture seeder.
//!
//! [`SqliteStore`] implements [`seed_core::FixtureStore`] on top of a
//! single `rusqlite` connection with foreign keys enforced:
//!
//! - missing tables are created from the schema (`CREATE TABLE IF NOT EXISTS`)
//! - every `insert_rows` call is one transaction, rolled back on failure
//! - driver errors are classified as constraint, connectivity or backend errors
//!
//! # Example
//!
//! ```rust
//! use seed_core::{DatabaseSchema, FixtureStore, OnConflict, SeedRow};
//! use seed_store_sqlite::SqliteStore;
//!
//! let schema = DatabaseSchema::from_yaml(r#"
//! version: 1
//! tables:
//!   - name: users
//!     columns:
//!       - { name: email, type: text }
//! "#).unwrap();
//!
//! let mut store = SqliteStore::open_in_memory().unwrap();
//! store.prepare(&schema).unwrap();
//!
//! let users = schema.get_table("users").unwrap();
//! let row = SeedRow::builder("users", 0).field("email", "a@example.com").build();
//! let ids = store.insert_rows(users, &[row], OnConflict::Abort).unwrap();
//! assert_eq!(ids, vec![Some(1)]);
//! ```

pub mod ddl;
pub mod error;
pub mod insert;
pub mod store;

pub use ddl::SqliteDdl;
pub use error::SqliteStoreError;
pub use store::SqliteStore;

pub use rusqlite;
