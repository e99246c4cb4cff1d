//! Error types for fixture generation.

use seed_core::{ConfigError, SchemaError, StoreError};
use thiserror::Error;

/// Errors that can occur while generating fixture data.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Counts or other settings are unusable.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Schema is invalid or lacks a table the generator writes to.
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// The store rejected an operation.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl GeneratorError {
    /// True when the store refused a row because of a constraint.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, GeneratorError::Store(e) if e.is_constraint_violation())
    }
}
