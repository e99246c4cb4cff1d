//! Fixture generator for the launchpad schema.
//!
//! This crate fills a [`FixtureStore`](seed_core::FixtureStore) with fake
//! but referentially consistent data. Tables are cleared in reverse
//! dependency order, then populated parent-first so every foreign key
//! points at a row the store has already assigned an id to.
//!
//! # Architecture
//!
//! ```text
//! launchpad.yaml ──► DatabaseSchema
//!                          │
//! SeedCounts ──────────────┤
//!                          ▼
//! GenerationContext ──► FixtureGenerator ──► FixtureStore
//!  (seed, locale,          │                  (SQLite, memory)
//!   today)                 ▼
//!                      SeedReport
//! ```
//!
//! # Example
//!
//! ```rust
//! use seed_core::SeedCounts;
//! use seed_generator::{launchpad_schema, FixtureGenerator, GenerationContext, Locale, MemoryStore};
//!
//! let schema = launchpad_schema().unwrap();
//! let ctx = GenerationContext::seeded(42, Locale::EnIn);
//! let mut generator = FixtureGenerator::new(schema, SeedCounts::default(), ctx).unwrap();
//!
//! let mut store = MemoryStore::new();
//! let report = generator.generate(&mut store).unwrap();
//! assert_eq!(report.rows("users"), 15);
//! ```

pub mod context;
pub mod entities;
pub mod error;
pub mod fake;
pub mod fixture;
pub mod generators;
pub mod memory;

pub use context::{GenerationContext, Locale};
pub use error::GeneratorError;
pub use fixture::{generate, FixtureGenerator, SeedReport, TableReport};
pub use memory::MemoryStore;

use seed_core::{DatabaseSchema, SchemaError};

/// The launchpad schema definition, embedded at build time.
pub const LAUNCHPAD_SCHEMA_YAML: &str = include_str!("../schemas/launchpad.yaml");

/// Parse and validate the embedded launchpad schema.
pub fn launchpad_schema() -> Result<DatabaseSchema, SchemaError> {
    DatabaseSchema::from_yaml(LAUNCHPAD_SCHEMA_YAML)
}
