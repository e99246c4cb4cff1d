//! [`FixtureStore`] implementation backed by a SQLite database.

use crate::ddl::{create_table_sql, delete_all_sql, quote_ident};
use crate::error::SqliteStoreError;
use crate::insert;
use rusqlite::{Connection, OptionalExtension};
use seed_core::{DatabaseSchema, FixtureStore, OnConflict, SeedRow, StoreError, TableDefinition};
use std::path::Path;
use tracing::{debug, info};

/// SQLite store holding one exclusive connection for the whole run.
pub struct SqliteStore {
    conn: Connection,
    location: String,
}

impl SqliteStore {
    /// Open (or create) a database file.
    ///
    /// Failing to open the file is reported as a connectivity error.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let location = path.as_ref().display().to_string();
        let conn = Connection::open(path).map_err(|source| SqliteStoreError::Open {
            path: location.clone(),
            source,
        })?;
        Self::configure(conn, location)
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let location = ":memory:".to_string();
        let conn = Connection::open_in_memory().map_err(|source| SqliteStoreError::Open {
            path: location.clone(),
            source,
        })?;
        Self::configure(conn, location)
    }

    fn configure(conn: Connection, location: String) -> Result<Self, StoreError> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")
            .map_err(|source| SqliteStoreError::Open {
                path: location.clone(),
                source,
            })?;
        info!("Opened SQLite database at {}", location);
        Ok(Self { conn, location })
    }

    /// Where the database lives (`:memory:` for in-memory stores).
    pub fn location(&self) -> &str {
        &self.location
    }

    /// The underlying connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Whether a table exists in the database.
    pub fn table_exists(&self, name: &str) -> Result<bool, StoreError> {
        let found = self
            .conn
            .query_row(
                "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1",
                [name],
                |_| Ok(()),
            )
            .optional()
            .map_err(|e| SqliteStoreError::statement(name, e))?;
        Ok(found.is_some())
    }
}

impl FixtureStore for SqliteStore {
    fn prepare(&mut self, schema: &DatabaseSchema) -> Result<(), StoreError> {
        for table in schema.creation_order().map_err(SqliteStoreError::from)? {
            if self.table_exists(&table.name)? {
                continue;
            }
            let sql = create_table_sql(table);
            debug!("Creating table '{}':\n{}", table.name, sql);
            self.conn
                .execute_batch(&sql)
                .map_err(|e| SqliteStoreError::statement(&table.name, e))?;
            info!("Created missing table '{}'", table.name);
        }
        Ok(())
    }

    fn clear_table(&mut self, table: &TableDefinition) -> Result<u64, StoreError> {
        let removed = self
            .conn
            .execute(&delete_all_sql(&table.name), [])
            .map_err(|e| SqliteStoreError::statement(&table.name, e))?;
        Ok(removed as u64)
    }

    fn insert_rows(
        &mut self,
        table: &TableDefinition,
        rows: &[SeedRow],
        on_conflict: OnConflict,
    ) -> Result<Vec<Option<i64>>, StoreError> {
        Ok(insert::insert_rows(&mut self.conn, table, rows, on_conflict)?)
    }

    fn row_count(&self, table: &str) -> Result<u64, StoreError> {
        let sql = format!("SELECT COUNT(*) FROM {}", quote_ident(table));
        let count: i64 = self
            .conn
            .query_row(&sql, [], |r| r.get(0))
            .map_err(|e| SqliteStoreError::statement(table, e))?;
        Ok(count as u64)
    }
}
