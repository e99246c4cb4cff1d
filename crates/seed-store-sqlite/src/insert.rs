//! Transactional INSERT logic for SQLite.

use crate::ddl::insert_sql;
use crate::error::SqliteStoreError;
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection};
use seed_core::{OnConflict, SeedRow, SeedValue, TableDefinition};
use tracing::debug;

/// Convert a generated value to its SQLite storage form.
///
/// Booleans become 0/1, dates and timestamps ISO 8601 text, and JSON
/// documents their serialized text.
pub fn to_sql_value(value: &SeedValue) -> Value {
    match value {
        SeedValue::Null => Value::Null,
        SeedValue::Bool(b) => Value::Integer(i64::from(*b)),
        SeedValue::Int(i) => Value::Integer(*i),
        SeedValue::Text(s) => Value::Text(s.clone()),
        SeedValue::Json(j) => Value::Text(j.to_string()),
        SeedValue::Date(d) => Value::Text(d.format("%Y-%m-%d").to_string()),
        SeedValue::DateTime(dt) => Value::Text(dt.format("%Y-%m-%d %H:%M:%S").to_string()),
    }
}

/// Column values of a row in table column order; missing fields are NULL.
fn row_values(table: &TableDefinition, row: &SeedRow) -> Result<Vec<Value>, SqliteStoreError> {
    if let Some(unknown) = row.fields.keys().find(|k| table.get_column(k).is_none()) {
        return Err(SqliteStoreError::UnknownColumn {
            table: table.name.clone(),
            column: unknown.clone(),
        });
    }

    Ok(table
        .columns
        .iter()
        .map(|c| row.get_field(&c.name).map_or(Value::Null, to_sql_value))
        .collect())
}

/// Insert rows into a table inside a single transaction.
///
/// Returns the rowid assigned to each row, or `None` for a row skipped
/// under [`OnConflict::Ignore`]. Any error rolls the whole group back.
pub fn insert_rows(
    conn: &mut Connection,
    table: &TableDefinition,
    rows: &[SeedRow],
    on_conflict: OnConflict,
) -> Result<Vec<Option<i64>>, SqliteStoreError> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let sql = insert_sql(table, on_conflict);
    let statement_error = |e: rusqlite::Error| SqliteStoreError::statement(&table.name, e);

    let tx = conn.transaction().map_err(statement_error)?;
    let mut ids = Vec::with_capacity(rows.len());
    {
        let mut stmt = tx.prepare_cached(&sql).map_err(statement_error)?;
        for row in rows {
            let values = row_values(table, row)?;
            let changed = stmt
                .execute(params_from_iter(values.iter()))
                .map_err(statement_error)?;
            ids.push((changed > 0).then(|| tx.last_insert_rowid()));
        }
    }
    tx.commit().map_err(statement_error)?;

    let inserted = ids.iter().flatten().count();
    debug!(
        "Committed {} rows into '{}' ({} ignored)",
        inserted,
        table.name,
        rows.len() - inserted
    );
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ddl::create_table_sql;
    use chrono::NaiveDate;
    use seed_core::{ColumnDefinition, ColumnType};

    fn tags() -> TableDefinition {
        TableDefinition::new(
            "tags",
            vec![
                ColumnDefinition::new("label", ColumnType::Text),
                ColumnDefinition::nullable("pinned", ColumnType::Bool),
            ],
        )
        .with_unique(&["label"])
    }

    fn connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(&create_table_sql(&tags())).unwrap();
        conn
    }

    fn tag(label: &str) -> SeedRow {
        SeedRow::builder("tags", 0)
            .field("label", label)
            .field("pinned", true)
            .build()
    }

    #[test]
    fn test_to_sql_value() {
        assert_eq!(to_sql_value(&SeedValue::Bool(true)), Value::Integer(1));
        assert_eq!(to_sql_value(&SeedValue::Null), Value::Null);
        assert_eq!(
            to_sql_value(&SeedValue::id_list(&[1, 2])),
            Value::Text("[1,2]".to_string())
        );
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(
            to_sql_value(&SeedValue::Date(date)),
            Value::Text("2024-02-29".to_string())
        );
    }

    #[test]
    fn test_insert_returns_rowids() {
        let mut conn = connection();
        let rows = [tag("a"), tag("b")];
        let ids = insert_rows(&mut conn, &tags(), &rows, OnConflict::Abort).unwrap();
        assert_eq!(ids, vec![Some(1), Some(2)]);

        let pinned: i64 = conn
            .query_row("SELECT pinned FROM tags WHERE id = 2", [], |r| r.get(0))
            .unwrap();
        assert_eq!(pinned, 1);
    }

    #[test]
    fn test_insert_or_ignore() {
        let mut conn = connection();
        let rows = [tag("a"), tag("a"), tag("b")];
        let ids = insert_rows(&mut conn, &tags(), &rows, OnConflict::Ignore).unwrap();
        assert_eq!(ids, vec![Some(1), None, Some(2)]);
    }

    #[test]
    fn test_failure_rolls_back_group() {
        let mut conn = connection();
        let rows = [tag("a"), tag("b"), tag("a")];
        let err = insert_rows(&mut conn, &tags(), &rows, OnConflict::Abort).unwrap_err();
        assert!(seed_core::StoreError::from(err).is_constraint_violation());

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM tags", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_unknown_column_rejected() {
        let mut conn = connection();
        let row = SeedRow::builder("tags", 0)
            .field("label", "a")
            .field("colour", "red")
            .build();
        let err = insert_rows(&mut conn, &tags(), &[row], OnConflict::Abort).unwrap_err();
        assert!(matches!(err, SqliteStoreError::UnknownColumn { .. }));
    }
}
