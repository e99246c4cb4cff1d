//! The storage seam the generator writes through.

use crate::schema::{DatabaseSchema, TableDefinition};
use crate::values::SeedRow;

/// Errors surfaced by a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A row broke a NOT NULL, CHECK, UNIQUE or FOREIGN KEY constraint
    #[error("Constraint violation in table '{table}': {message}")]
    ConstraintViolation { table: String, message: String },

    /// The backend could not be reached or opened
    #[error("Storage backend unreachable: {0}")]
    Connectivity(String),

    /// Any other backend failure
    #[error("Storage backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Create a constraint violation error.
    pub fn constraint(table: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConstraintViolation {
            table: table.into(),
            message: message.into(),
        }
    }

    /// Check if this is a constraint violation.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::ConstraintViolation { .. })
    }
}

/// What to do when a row would break a uniqueness constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnConflict {
    /// Fail the whole insert call
    Abort,
    /// Skip the offending row silently
    Ignore,
}

/// A relational store the fixture generator can clear and fill.
///
/// Implementations hold the store connection exclusively for the
/// duration of a run.
pub trait FixtureStore {
    /// Create any table of the schema that does not exist yet.
    fn prepare(&mut self, schema: &DatabaseSchema) -> Result<(), StoreError>;

    /// Delete every row of a table, returning how many were removed.
    fn clear_table(&mut self, table: &TableDefinition) -> Result<u64, StoreError>;

    /// Insert rows atomically.
    ///
    /// Returns the id assigned to each row in input order. Under
    /// [`OnConflict::Ignore`] a row skipped because of a uniqueness
    /// constraint yields `None`; every other failure aborts the call
    /// without leaving any of its rows behind.
    fn insert_rows(
        &mut self,
        table: &TableDefinition,
        rows: &[SeedRow],
        on_conflict: OnConflict,
    ) -> Result<Vec<Option<i64>>, StoreError>;

    /// Number of rows currently in a table.
    fn row_count(&self, table: &str) -> Result<u64, StoreError>;
}
