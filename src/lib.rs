//! Launchpad fixture seeder.
//!
//! Clears the launchpad database and repopulates it with fake but
//! referentially consistent data: users, projects with their members and
//! open positions, blog posts and likes, conversations and messages,
//! mentorship requests, applications, and per-user skills, achievements
//! and languages.
//!
//! # Crates
//!
//! - `seed_core` - schema, column types, values, counts and the store seam
//! - `seed_generator` - the fake-data vocabulary and the topological pass
//! - `seed_store_sqlite` - the SQLite backend
//!
//! # CLI Usage
//!
//! ```bash
//! # Seed ./launchpad.db with default counts
//! launchpad-seed
//!
//! # Reproducible run against another file
//! launchpad-seed --database /tmp/dev.db --seed 42
//!
//! # Counts from a file, applications only for their project's positions
//! launchpad-seed --config seed.toml --application-positions same-project
//!
//! # Generate without touching the database
//! launchpad-seed --dry-run
//! ```

pub mod config;
pub mod seed;

pub use config::{Overrides, SeedConfig, DEFAULT_DATABASE};
pub use seed::run_seed;
pub use seed_generator::SeedReport;
