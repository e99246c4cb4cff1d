//! Schema definitions for the fixture seeder.
//!
//! A schema is an ordered list of tables. Each table has an implicit
//! integer primary key named `id`, a list of columns, the foreign keys
//! that point at other tables, and optional unique column groups.
//!
//! The foreign-key graph must be acyclic: generation is a single
//! topological pass, so a cycle can never be satisfied and is rejected
//! when the schema is loaded.

use crate::types::ColumnType;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

/// Name of the implicit primary key column.
pub const PRIMARY_KEY: &str = "id";

// ============================================================================
// Error Types
// ============================================================================

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Table not found in schema
    #[error("Table not found: {0}")]
    TableNotFound(String),

    /// Table declared twice
    #[error("Table '{0}' is declared more than once")]
    DuplicateTable(String),

    /// Column not found in table schema
    #[error("Column '{column}' not found in table '{table}'")]
    ColumnNotFound { table: String, column: String },

    /// Foreign key pointing at an undeclared table
    #[error("Foreign key '{table}.{column}' references unknown table '{references}'")]
    UnknownReference {
        table: String,
        column: String,
        references: String,
    },

    /// The foreign-key graph is not a DAG
    #[error("Foreign keys form a cycle through tables: {}", .0.join(", "))]
    Cycle(Vec<String>),
}

// ============================================================================
// Definitions
// ============================================================================

/// Column definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColumnDefinition {
    /// Column name
    pub name: String,

    /// Column type
    #[serde(rename = "type")]
    pub column_type: ColumnType,

    /// Whether this column is nullable
    #[serde(default)]
    pub nullable: bool,
}

impl ColumnDefinition {
    /// Create a new column definition.
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            nullable: false,
        }
    }

    /// Create a new nullable column definition.
    pub fn nullable(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            nullable: true,
        }
    }
}

/// Single-column foreign key referencing another table's primary key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForeignKey {
    /// Referencing column in the owning table
    pub column: String,

    /// Referenced table
    pub references: String,
}

impl ForeignKey {
    /// Create a new foreign key.
    pub fn new(column: impl Into<String>, references: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            references: references.into(),
        }
    }
}

/// Table definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableDefinition {
    /// Table name
    pub name: String,

    /// Column definitions (excluding the primary key)
    pub columns: Vec<ColumnDefinition>,

    /// Foreign keys owned by this table
    #[serde(default)]
    pub foreign_keys: Vec<ForeignKey>,

    /// Column groups that must be unique together
    #[serde(default)]
    pub unique: Vec<Vec<String>>,
}

impl TableDefinition {
    /// Create a new table definition without constraints.
    pub fn new(name: impl Into<String>, columns: Vec<ColumnDefinition>) -> Self {
        Self {
            name: name.into(),
            columns,
            foreign_keys: Vec::new(),
            unique: Vec::new(),
        }
    }

    /// Add a foreign key.
    pub fn with_foreign_key(mut self, column: &str, references: &str) -> Self {
        self.foreign_keys.push(ForeignKey::new(column, references));
        self
    }

    /// Add a unique column group.
    pub fn with_unique(mut self, columns: &[&str]) -> Self {
        self.unique
            .push(columns.iter().map(|c| c.to_string()).collect());
        self
    }

    /// Get a column by name.
    pub fn get_column(&self, name: &str) -> Option<&ColumnDefinition> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Get all column names (excluding the primary key).
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Get the foreign key declared on a column, if any.
    pub fn foreign_key(&self, column: &str) -> Option<&ForeignKey> {
        self.foreign_keys.iter().find(|fk| fk.column == column)
    }

    /// Names of the tables this table depends on (deduplicated).
    pub fn dependencies(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.foreign_keys
            .iter()
            .map(|fk| fk.references.as_str())
            .filter(|t| seen.insert(*t))
            .collect()
    }

    fn validate_columns(&self) -> Result<(), SchemaError> {
        let known = |column: &str| column == PRIMARY_KEY || self.get_column(column).is_some();

        for fk in &self.foreign_keys {
            if !known(&fk.column) {
                return Err(SchemaError::ColumnNotFound {
                    table: self.name.clone(),
                    column: fk.column.clone(),
                });
            }
        }
        for column in self.unique.iter().flatten() {
            if !known(column) {
                return Err(SchemaError::ColumnNotFound {
                    table: self.name.clone(),
                    column: column.clone(),
                });
            }
        }
        Ok(())
    }
}

fn default_version() -> u32 {
    1
}

/// Database schema (ordered collection of tables).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSchema {
    /// Schema version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Table definitions in declaration order
    pub tables: Vec<TableDefinition>,

    /// Cached table lookup (not serialized)
    #[serde(skip)]
    table_map: HashMap<String, usize>,
}

impl DatabaseSchema {
    /// Create and validate a schema from a list of table definitions.
    pub fn new(tables: Vec<TableDefinition>) -> Result<Self, SchemaError> {
        let mut schema = Self {
            version: default_version(),
            tables,
            table_map: HashMap::new(),
        };
        schema.build_table_map()?;
        schema.validate()?;
        Ok(schema)
    }

    /// Load schema from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse and validate schema from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        let mut schema: DatabaseSchema = serde_yaml::from_str(yaml)?;
        schema.build_table_map()?;
        schema.validate()?;
        Ok(schema)
    }

    /// Build the internal table lookup map.
    fn build_table_map(&mut self) -> Result<(), SchemaError> {
        self.table_map.clear();
        for (idx, table) in self.tables.iter().enumerate() {
            if self.table_map.insert(table.name.clone(), idx).is_some() {
                return Err(SchemaError::DuplicateTable(table.name.clone()));
            }
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), SchemaError> {
        for table in &self.tables {
            table.validate_columns()?;
            for fk in &table.foreign_keys {
                if !self.table_map.contains_key(&fk.references) {
                    return Err(SchemaError::UnknownReference {
                        table: table.name.clone(),
                        column: fk.column.clone(),
                        references: fk.references.clone(),
                    });
                }
            }
        }
        self.creation_order().map(|_| ())
    }

    /// Get a table schema by name.
    pub fn get_table(&self, name: &str) -> Option<&TableDefinition> {
        self.table_map
            .get(name)
            .and_then(|&idx| self.tables.get(idx))
    }

    /// Get a table schema by name or fail.
    pub fn require_table(&self, name: &str) -> Result<&TableDefinition, SchemaError> {
        self.get_table(name)
            .ok_or_else(|| SchemaError::TableNotFound(name.to_string()))
    }

    /// Get all table names in declaration order.
    pub fn table_names(&self) -> Vec<&str> {
        self.tables.iter().map(|t| t.name.as_str()).collect()
    }

    /// Tables ordered so every table comes after the tables it references.
    ///
    /// Kahn's algorithm; among tables that are ready at the same time the
    /// one declared first wins, so a schema that is already declared in
    /// dependency order keeps its order.
    pub fn creation_order(&self) -> Result<Vec<&TableDefinition>, SchemaError> {
        let mut pending: Vec<usize> = self
            .tables
            .iter()
            .map(|t| t.dependencies().len())
            .collect();
        let mut placed = vec![false; self.tables.len()];
        let mut order = Vec::with_capacity(self.tables.len());

        while order.len() < self.tables.len() {
            let next = (0..self.tables.len()).find(|&i| !placed[i] && pending[i] == 0);
            let Some(idx) = next else {
                let stuck = self
                    .tables
                    .iter()
                    .zip(&placed)
                    .filter(|(_, done)| !**done)
                    .map(|(t, _)| t.name.clone())
                    .collect();
                return Err(SchemaError::Cycle(stuck));
            };

            placed[idx] = true;
            let name = self.tables[idx].name.as_str();
            order.push(&self.tables[idx]);

            for (i, table) in self.tables.iter().enumerate() {
                if !placed[i] && table.dependencies().contains(&name) {
                    pending[i] -= 1;
                }
            }
        }

        Ok(order)
    }

    /// Tables ordered so every table is cleared before the tables it references.
    pub fn deletion_order(&self) -> Result<Vec<&TableDefinition>, SchemaError> {
        let mut order = self.creation_order()?;
        order.reverse();
        Ok(order)
    }
}

// ============================================================================
// Tests
// ============================================================================
