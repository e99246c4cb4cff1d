//! In-memory [`FixtureStore`].
//!
//! Enforces the same constraints a relational backend would (NOT NULL,
//! enum membership, foreign keys, unique groups), so a dry run fails the
//! same way a real run would.

use seed_core::{
    DatabaseSchema, FixtureStore, OnConflict, SeedRow, SeedValue, StoreError, TableDefinition,
};
use std::collections::{BTreeMap, HashMap};

type Fields = HashMap<String, SeedValue>;

#[derive(Debug, Default)]
struct MemoryTable {
    /// Last assigned id; ids are never reused, even after a clear.
    last_id: i64,
    rows: BTreeMap<i64, Fields>,
}

/// Store that keeps every table in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    schema: Option<DatabaseSchema>,
    tables: HashMap<String, MemoryTable>,
}

impl MemoryStore {
    /// Create an empty store with no tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids of every row in a table, ascending.
    pub fn ids(&self, table: &str) -> Vec<i64> {
        self.tables
            .get(table)
            .map(|t| t.rows.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Every row of a table with its id, ascending by id.
    pub fn rows(&self, table: &str) -> Vec<(i64, &Fields)> {
        self.tables
            .get(table)
            .map(|t| t.rows.iter().map(|(id, fields)| (*id, fields)).collect())
            .unwrap_or_default()
    }

    /// A single row by id.
    pub fn get(&self, table: &str, id: i64) -> Option<&Fields> {
        self.tables.get(table).and_then(|t| t.rows.get(&id))
    }

    fn table(&self, name: &str) -> Result<&MemoryTable, StoreError> {
        self.tables
            .get(name)
            .ok_or_else(|| StoreError::Backend(format!("no such table: {name}")))
    }

    fn check_row(
        &self,
        table: &TableDefinition,
        row: &SeedRow,
    ) -> Result<(), StoreError> {
        if let Some(unknown) = row.fields.keys().find(|k| table.get_column(k).is_none()) {
            return Err(StoreError::Backend(format!(
                "table {} has no column named {unknown}",
                table.name
            )));
        }

        for column in &table.columns {
            let value = row.get_field(&column.name).unwrap_or(&SeedValue::Null);
            if value.is_null() {
                if !column.nullable {
                    return Err(StoreError::constraint(
                        &table.name,
                        format!("NOT NULL constraint failed: {}.{}", table.name, column.name),
                    ));
                }
                continue;
            }
            if !column.column_type.allows(value) {
                return Err(StoreError::constraint(
                    &table.name,
                    format!(
                        "CHECK constraint failed: {}.{} = {value:?}",
                        table.name, column.name
                    ),
                ));
            }
        }

        for fk in &table.foreign_keys {
            let Some(id) = row.get_i64(&fk.column) else {
                continue;
            };
            let referenced = self.table(&fk.references)?;
            if !referenced.rows.contains_key(&id) {
                return Err(StoreError::constraint(
                    &table.name,
                    format!(
                        "FOREIGN KEY constraint failed: {}.{} = {id} not in {}",
                        table.name, fk.column, fk.references
                    ),
                ));
            }
        }

        Ok(())
    }
}

fn unique_key<'a>(group: &[String], fields: &'a Fields) -> Vec<&'a SeedValue> {
    group
        .iter()
        .map(|c| fields.get(c).unwrap_or(&SeedValue::Null))
        .collect()
}

/// A unique group only clashes when none of its values is null (SQL semantics).
fn clashes(group: &[String], a: &Fields, b: &Fields) -> bool {
    let key_a = unique_key(group, a);
    !key_a.iter().any(|v| v.is_null()) && key_a == unique_key(group, b)
}

impl FixtureStore for MemoryStore {
    fn prepare(&mut self, schema: &DatabaseSchema) -> Result<(), StoreError> {
        for table in &schema.tables {
            self.tables.entry(table.name.clone()).or_default();
        }
        self.schema = Some(schema.clone());
        Ok(())
    }

    fn clear_table(&mut self, table: &TableDefinition) -> Result<u64, StoreError> {
        if let Some(schema) = &self.schema {
            for other in &schema.tables {
                for fk in other.foreign_keys.iter().filter(|fk| fk.references == table.name) {
                    let referenced = self.tables.get(&other.name).is_some_and(|t| {
                        t.rows
                            .values()
                            .any(|r| r.get(&fk.column).is_some_and(|v| !v.is_null()))
                    });
                    if referenced {
                        return Err(StoreError::constraint(
                            &table.name,
                            format!(
                                "FOREIGN KEY constraint failed: rows of {} still reference {}",
                                other.name, table.name
                            ),
                        ));
                    }
                }
            }
        }

        let memory = self
            .tables
            .get_mut(&table.name)
            .ok_or_else(|| StoreError::Backend(format!("no such table: {}", table.name)))?;
        let removed = memory.rows.len() as u64;
        memory.rows.clear();
        Ok(removed)
    }

    fn insert_rows(
        &mut self,
        table: &TableDefinition,
        rows: &[SeedRow],
        on_conflict: OnConflict,
    ) -> Result<Vec<Option<i64>>, StoreError> {
        let existing = self.table(&table.name)?;
        let mut next_id = existing.last_id;
        let mut staged: Vec<(i64, Fields)> = Vec::new();
        let mut ids = Vec::with_capacity(rows.len());

        for row in rows {
            self.check_row(table, row)?;

            let fields: Fields = table
                .columns
                .iter()
                .map(|c| {
                    let value = row.get_field(&c.name).cloned().unwrap_or(SeedValue::Null);
                    (c.name.clone(), value)
                })
                .collect();

            let duplicate = table.unique.iter().find(|group| {
                existing.rows.values().any(|r| clashes(group, &fields, r))
                    || staged.iter().any(|(_, r)| clashes(group, &fields, r))
            });

            match (duplicate, on_conflict) {
                (Some(_), OnConflict::Ignore) => ids.push(None),
                (Some(group), OnConflict::Abort) => {
                    return Err(StoreError::constraint(
                        &table.name,
                        format!("UNIQUE constraint failed: {}({})", table.name, group.join(", ")),
                    ));
                }
                (None, _) => {
                    next_id += 1;
                    staged.push((next_id, fields));
                    ids.push(Some(next_id));
                }
            }
        }

        let memory = self
            .tables
            .get_mut(&table.name)
            .ok_or_else(|| StoreError::Backend(format!("no such table: {}", table.name)))?;
        memory.last_id = next_id;
        memory.rows.extend(staged);
        Ok(ids)
    }

    fn row_count(&self, table: &str) -> Result<u64, StoreError> {
        Ok(self.table(table)?.rows.len() as u64)
    }
}
