//! Error types for the SQLite store.

use rusqlite::ErrorCode;
use seed_core::StoreError;
use thiserror::Error;

/// Errors that can occur while talking to SQLite.
#[derive(Error, Debug)]
pub enum SqliteStoreError {
    /// The database file could not be opened or configured.
    #[error("Failed to open SQLite database '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: rusqlite::Error,
    },

    /// A statement against a table failed.
    #[error("SQLite error on table '{table}': {source}")]
    Statement {
        table: String,
        #[source]
        source: rusqlite::Error,
    },

    /// A row carries a column the table does not declare.
    #[error("Table '{table}' has no column named '{column}'")]
    UnknownColumn { table: String, column: String },

    /// Schema could not be ordered for table creation.
    #[error("Schema error: {0}")]
    Schema(#[from] seed_core::SchemaError),
}

impl SqliteStoreError {
    /// Wrap a driver error raised while working on `table`.
    pub fn statement(table: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::Statement {
            table: table.into(),
            source,
        }
    }
}

/// Whether an error code means the database itself is out of reach.
fn is_connectivity(code: ErrorCode) -> bool {
    matches!(
        code,
        ErrorCode::CannotOpen
            | ErrorCode::NotADatabase
            | ErrorCode::PermissionDenied
            | ErrorCode::DatabaseBusy
            | ErrorCode::DatabaseLocked
            | ErrorCode::ReadOnly
            | ErrorCode::SystemIoFailure
            | ErrorCode::DiskFull
    )
}

impl From<SqliteStoreError> for StoreError {
    fn from(err: SqliteStoreError) -> Self {
        match &err {
            SqliteStoreError::Open { .. } => StoreError::Connectivity(err.to_string()),
            SqliteStoreError::Statement {
                table,
                source: rusqlite::Error::SqliteFailure(failure, _),
            } => {
                if failure.code == ErrorCode::ConstraintViolation {
                    StoreError::constraint(table.clone(), err.to_string())
                } else if is_connectivity(failure.code) {
                    StoreError::Connectivity(err.to_string())
                } else {
                    StoreError::Backend(err.to_string())
                }
            }
            _ => StoreError::Backend(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(code: ErrorCode, extended: i32) -> rusqlite::Error {
        rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error {
                code,
                extended_code: extended,
            },
            Some("boom".to_string()),
        )
    }

    #[test]
    fn test_constraint_classified() {
        let err = SqliteStoreError::statement(
            "users",
            failure(ErrorCode::ConstraintViolation, rusqlite::ffi::SQLITE_CONSTRAINT_NOTNULL),
        );
        let store: StoreError = err.into();
        assert!(store.is_constraint_violation());
        assert!(store.to_string().contains("users"));
    }

    #[test]
    fn test_connectivity_classified() {
        let err = SqliteStoreError::statement(
            "users",
            failure(ErrorCode::DatabaseBusy, rusqlite::ffi::SQLITE_BUSY),
        );
        assert!(matches!(StoreError::from(err), StoreError::Connectivity(_)));

        let err = SqliteStoreError::Open {
            path: "/nowhere/db".to_string(),
            source: failure(ErrorCode::CannotOpen, rusqlite::ffi::SQLITE_CANTOPEN),
        };
        assert!(matches!(StoreError::from(err), StoreError::Connectivity(_)));
    }

    #[test]
    fn test_other_errors_are_backend() {
        let err = SqliteStoreError::UnknownColumn {
            table: "users".to_string(),
            column: "age".to_string(),
        };
        assert!(matches!(StoreError::from(err), StoreError::Backend(_)));

        let err = SqliteStoreError::statement("users", rusqlite::Error::QueryReturnedNoRows);
        assert!(matches!(StoreError::from(err), StoreError::Backend(_)));
    }
}
