//! Value representations for generated fixture rows.
//!
//! Generated rows never carry their primary key: the store assigns ids
//! and hands them back from [`crate::FixtureStore::insert_rows`].

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single generated column value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeedValue {
    /// Null value
    Null,

    /// Boolean value
    Bool(bool),

    /// Signed integer (ids, years, counts)
    Int(i64),

    /// String value
    Text(String),

    /// JSON document
    Json(serde_json::Value),

    /// Calendar date
    Date(NaiveDate),

    /// Timestamp without timezone
    DateTime(NaiveDateTime),
}

impl SeedValue {
    /// Create a text value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Create a text value, or null when `value` is `None`.
    pub fn optional_text(value: Option<impl Into<String>>) -> Self {
        value.map_or(Self::Null, |v| Self::Text(v.into()))
    }

    /// Create a JSON array of strings.
    pub fn string_list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Json(serde_json::Value::Array(
            items
                .into_iter()
                .map(|s| serde_json::Value::String(s.into()))
                .collect(),
        ))
    }

    /// Create a JSON array of integer ids.
    pub fn id_list(ids: &[i64]) -> Self {
        Self::Json(serde_json::Value::Array(
            ids.iter().map(|id| serde_json::Value::from(*id)).collect(),
        ))
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as a date.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }
}

impl From<bool> for SeedValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for SeedValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for SeedValue {
    fn from(value: i32) -> Self {
        Self::Int(value as i64)
    }
}

impl From<String> for SeedValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for SeedValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<NaiveDate> for SeedValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl<T: Into<SeedValue>> From<Option<T>> for SeedValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// A generated row waiting to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedRow {
    /// Target table name
    pub table: String,

    /// Position of this row within its entity group
    pub index: u64,

    /// Column values keyed by column name
    pub fields: HashMap<String, SeedValue>,
}

impl SeedRow {
    /// Create a new row.
    pub fn new(table: impl Into<String>, index: u64, fields: HashMap<String, SeedValue>) -> Self {
        Self {
            table: table.into(),
            index,
            fields,
        }
    }

    /// Start building a row for the given table.
    pub fn builder(table: impl Into<String>, index: u64) -> SeedRowBuilder {
        SeedRowBuilder {
            table: table.into(),
            index,
            fields: HashMap::new(),
        }
    }

    /// Get a field value by name.
    pub fn get_field(&self, name: &str) -> Option<&SeedValue> {
        self.fields.get(name)
    }

    /// Get an integer field (foreign keys, counts).
    pub fn get_i64(&self, name: &str) -> Option<i64> {
        self.get_field(name).and_then(SeedValue::as_i64)
    }

    /// Get a text field.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get_field(name).and_then(SeedValue::as_str)
    }
}

/// Builder for [`SeedRow`].
#[derive(Debug)]
pub struct SeedRowBuilder {
    table: String,
    index: u64,
    fields: HashMap<String, SeedValue>,
}

impl SeedRowBuilder {
    /// Set a field value.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<SeedValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Finish the row.
    pub fn build(self) -> SeedRow {
        SeedRow::new(self.table, self.index, self.fields)
    }
}
