//! Seed run configuration.
//!
//! Settings come from an optional TOML file and are then overridden by
//! command-line flags:
//!
//! ```toml
//! database = "launchpad.db"
//! seed = 42
//! locale = "en-IN"
//!
//! [counts]
//! user_count = 30
//! messages_per_conversation = [3, 7]
//! application_positions = "same_project"
//! ```

use anyhow::Context;
use seed_core::{ApplicationPositionMode, SeedCounts};
use seed_generator::Locale;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Database file used when neither the config file nor the CLI names one.
pub const DEFAULT_DATABASE: &str = "launchpad.db";

/// Settings of one seed run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeedConfig {
    /// SQLite database file
    pub database: Option<PathBuf>,
    /// RNG seed; unseeded when absent
    pub seed: Option<u64>,
    /// Fake-data locale
    pub locale: Option<Locale>,
    /// Row counts per entity
    pub counts: SeedCounts,
}

/// Values given on the command line; each one wins over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub database: Option<PathBuf>,
    pub seed: Option<u64>,
    pub locale: Option<Locale>,
    pub application_positions: Option<ApplicationPositionMode>,
}

impl SeedConfig {
    /// Load settings from a TOML file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Parse settings from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply command-line overrides.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(database) = overrides.database {
            self.database = Some(database);
        }
        if let Some(seed) = overrides.seed {
            self.seed = Some(seed);
        }
        if let Some(locale) = overrides.locale {
            self.locale = Some(locale);
        }
        if let Some(mode) = overrides.application_positions {
            self.counts.application_positions = mode;
        }
        self
    }

    /// The database file to seed.
    pub fn database_path(&self) -> PathBuf {
        self.database
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE))
    }

    /// The locale to generate with.
    pub fn locale(&self) -> Locale {
        self.locale.unwrap_or_default()
    }
}
