//! SQLite DDL generation from seed-core's `ColumnType`.

use seed_core::schema::PRIMARY_KEY;
use seed_core::{ColumnType, OnConflict, TableDefinition, ToDdl};

/// SQLite DDL generator.
pub struct SqliteDdl;

impl ToDdl for SqliteDdl {
    fn to_ddl(&self, column: &str, column_type: &ColumnType) -> String {
        match column_type {
            // Stored as 0/1
            ColumnType::Bool => "BOOLEAN".to_string(),

            // SQLite integers are 64-bit whatever the declared width
            ColumnType::Int | ColumnType::BigInt => "INTEGER".to_string(),

            ColumnType::Text => "TEXT".to_string(),
            ColumnType::VarChar { length } => format!("VARCHAR({length})"),

            // Serialized JSON text
            ColumnType::Json => "TEXT".to_string(),

            // ISO 8601 text
            ColumnType::Date => "DATE".to_string(),
            ColumnType::DateTime => "DATETIME".to_string(),

            ColumnType::Enum { values } => {
                let allowed: Vec<String> = values.iter().map(|v| quote_literal(v)).collect();
                format!(
                    "TEXT CHECK ({} IN ({}))",
                    quote_ident(column),
                    allowed.join(", ")
                )
            }
        }
    }
}

/// Quote an identifier for SQLite.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Quote a string literal for SQLite.
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Generate a `CREATE TABLE IF NOT EXISTS` statement.
///
/// Every table gets an `id INTEGER PRIMARY KEY AUTOINCREMENT`, so ids are
/// never reused after rows are deleted.
pub fn create_table_sql(table: &TableDefinition) -> String {
    let ddl = SqliteDdl;
    let mut lines = vec![format!(
        "  {} INTEGER PRIMARY KEY AUTOINCREMENT",
        quote_ident(PRIMARY_KEY)
    )];

    for column in &table.columns {
        let null_clause = if column.nullable { "" } else { " NOT NULL" };
        lines.push(format!(
            "  {} {}{}",
            quote_ident(&column.name),
            ddl.to_ddl(&column.name, &column.column_type),
            null_clause
        ));
    }

    for fk in &table.foreign_keys {
        lines.push(format!(
            "  FOREIGN KEY ({}) REFERENCES {} ({})",
            quote_ident(&fk.column),
            quote_ident(&fk.references),
            quote_ident(PRIMARY_KEY)
        ));
    }

    for group in &table.unique {
        let columns: Vec<String> = group.iter().map(|c| quote_ident(c)).collect();
        lines.push(format!("  UNIQUE ({})", columns.join(", ")));
    }

    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n{}\n);",
        quote_ident(&table.name),
        lines.join(",\n")
    )
}

/// Generate the statement that removes every row of a table.
pub fn delete_all_sql(table_name: &str) -> String {
    format!("DELETE FROM {}", quote_ident(table_name))
}

/// Generate a single-row INSERT with positional parameters, one per column.
pub fn insert_sql(table: &TableDefinition, on_conflict: OnConflict) -> String {
    let verb = match on_conflict {
        OnConflict::Abort => "INSERT",
        OnConflict::Ignore => "INSERT OR IGNORE",
    };

    if table.columns.is_empty() {
        return format!("{verb} INTO {} DEFAULT VALUES", quote_ident(&table.name));
    }

    let columns: Vec<String> = table.columns.iter().map(|c| quote_ident(&c.name)).collect();
    let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("?{i}")).collect();
    format!(
        "{verb} INTO {} ({}) VALUES ({})",
        quote_ident(&table.name),
        columns.join(", "),
        placeholders.join(", ")
    )
}
