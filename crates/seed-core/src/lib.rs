//! Core types for the launchpad fixture seeder.
//!
//! This crate provides the foundational types shared by the generator and
//! the storage backends:
//!
//! - [`ColumnType`] - Column types understood by the schema and DDL generators
//! - [`SeedValue`] / [`SeedRow`] - Generated values and rows before insertion
//! - [`DatabaseSchema`] - Table and foreign-key definitions loaded from YAML
//! - [`SeedCounts`] - How many rows of each entity to generate
//! - [`FixtureStore`] - The seam every storage backend implements
//!
//! # Architecture
//!
//! ```text
//! seed-core (this crate)
//!    │
//!    ├─── seed-generator      (builds rows, drives the topological pass)
//!    │
//!    └─── seed-store-sqlite   (implements FixtureStore for SQLite)
//! ```
//!
//! # Example
//!
//! ```rust
//! use seed_core::{DatabaseSchema, SeedRow, SeedValue};
//!
//! let schema = DatabaseSchema::from_yaml(r#"
//! version: 1
//! tables:
//!   - name: users
//!     columns:
//!       - name: email
//!         type: text
//! "#).unwrap();
//!
//! let row = SeedRow::builder("users", 0)
//!     .field("email", SeedValue::text("a@example.com"))
//!     .build();
//! assert!(schema.get_table("users").is_some());
//! assert_eq!(row.get_field("email"), Some(&SeedValue::text("a@example.com")));
//! ```

pub mod counts;
pub mod domain;
pub mod schema;
pub mod store;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use counts::{ApplicationPositionMode, ConfigError, CountRange, SeedCounts};
pub use schema::{ColumnDefinition, DatabaseSchema, ForeignKey, SchemaError, TableDefinition};
pub use store::{FixtureStore, OnConflict, StoreError};
pub use types::{ColumnType, ToDdl};
pub use values::{SeedRow, SeedRowBuilder, SeedValue};
