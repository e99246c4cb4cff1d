//! Column type definitions.
//!
//! `ColumnType` is the small set of column types the fixture schema needs.
//! Each storage backend turns it into native DDL through [`ToDdl`].
//!
//! # YAML Format
//!
//! Simple types use string format:
//! ```yaml
//! type: text
//! type: int
//! type: json
//! ```
//!
//! Parameterized types use object format:
//! ```yaml
//! type:
//!   type: var_char
//!   length: 255
//! type:
//!   type: enum
//!   values: [student, alumni]
//! ```

use crate::values::SeedValue;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// Column type of a fixture table.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnType {
    /// Boolean value (stored as 0/1 by backends without a native bool)
    Bool,

    /// 32-bit signed integer
    Int,

    /// 64-bit signed integer
    BigInt,

    /// Unlimited text
    Text,

    /// Variable-length character string with max length
    VarChar {
        /// Maximum length
        length: u16,
    },

    /// JSON document (serialized lists such as `team_members`)
    Json,

    /// Date only (YYYY-MM-DD)
    Date,

    /// Timestamp without timezone
    DateTime,

    /// Text restricted to a fixed set of values
    Enum {
        /// Allowed values
        values: Vec<String>,
    },
}

impl ColumnType {
    /// Create a new VarChar type with the given length.
    pub fn varchar(length: u16) -> Self {
        Self::VarChar { length }
    }

    /// Create a new Enum type from the given values.
    pub fn enumeration<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Enum {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Check if this type stores integers.
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Int | Self::BigInt)
    }

    /// Check whether a non-null value is acceptable for this type.
    ///
    /// Null handling is decided by the column's nullability, so `Null`
    /// is always accepted here.
    pub fn allows(&self, value: &SeedValue) -> bool {
        match (self, value) {
            (_, SeedValue::Null) => true,
            (Self::Bool, SeedValue::Bool(_)) => true,
            (Self::Int, SeedValue::Int(i)) => i32::try_from(*i).is_ok(),
            (Self::BigInt, SeedValue::Int(_)) => true,
            (Self::Text, SeedValue::Text(_)) => true,
            (Self::VarChar { length }, SeedValue::Text(s)) => s.chars().count() <= *length as usize,
            (Self::Json, SeedValue::Json(_)) => true,
            (Self::Date, SeedValue::Date(_)) => true,
            (Self::DateTime, SeedValue::DateTime(_)) => true,
            (Self::Enum { values }, SeedValue::Text(s)) => values.iter().any(|v| v == s),
            _ => false,
        }
    }
}

/// Trait for generating DDL statements from `ColumnType`.
///
/// Each storage backend implements this trait to generate
/// appropriate DDL for creating tables with the correct column types.
pub trait ToDdl {
    /// Generate the DDL type definition for the given column.
    fn to_ddl(&self, column: &str, column_type: &ColumnType) -> String;
}

// Supports both simple string format ("text", "int") and object format
// ({"type": "var_char", "length": 255}).

impl Serialize for ColumnType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;

        match self {
            Self::Bool => serializer.serialize_str("bool"),
            Self::Int => serializer.serialize_str("int"),
            Self::BigInt => serializer.serialize_str("big_int"),
            Self::Text => serializer.serialize_str("text"),
            Self::Json => serializer.serialize_str("json"),
            Self::Date => serializer.serialize_str("date"),
            Self::DateTime => serializer.serialize_str("date_time"),
            Self::VarChar { length } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "var_char")?;
                map.serialize_entry("length", length)?;
                map.end()
            }
            Self::Enum { values } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "enum")?;
                map.serialize_entry("values", values)?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for ColumnType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{Error, MapAccess, Visitor};

        struct ColumnTypeVisitor;

        impl<'de> Visitor<'de> for ColumnTypeVisitor {
            type Value = ColumnType;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a string or map representing a ColumnType")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: Error,
            {
                simple_type(value).ok_or_else(|| E::custom(format!("unknown simple type: {value}")))
            }

            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut type_name: Option<String> = None;
                let mut fields: HashMap<String, serde_yaml::Value> = HashMap::new();

                while let Some(key) = map.next_key::<String>()? {
                    if key == "type" {
                        type_name = Some(map.next_value()?);
                    } else {
                        fields.insert(key, map.next_value()?);
                    }
                }

                let type_name = type_name.ok_or_else(|| M::Error::missing_field("type"))?;

                if let Some(simple) = simple_type(&type_name) {
                    return Ok(simple);
                }

                match type_name.as_str() {
                    "var_char" | "varchar" => {
                        let length = get_field_required(&fields, "length")?;
                        Ok(ColumnType::VarChar { length })
                    }
                    "enum" => {
                        let values: Vec<String> = get_field_required(&fields, "values")?;
                        if values.is_empty() {
                            return Err(M::Error::custom("enum type needs at least one value"));
                        }
                        Ok(ColumnType::Enum { values })
                    }
                    _ => Err(M::Error::custom(format!("unknown type: {type_name}"))),
                }
            }
        }

        deserializer.deserialize_any(ColumnTypeVisitor)
    }
}

fn simple_type(name: &str) -> Option<ColumnType> {
    match name {
        "bool" => Some(ColumnType::Bool),
        "int" | "integer" => Some(ColumnType::Int),
        "big_int" | "bigint" => Some(ColumnType::BigInt),
        "text" => Some(ColumnType::Text),
        "json" => Some(ColumnType::Json),
        "date" => Some(ColumnType::Date),
        "date_time" | "datetime" => Some(ColumnType::DateTime),
        _ => None,
    }
}

fn get_field_required<T: for<'de> Deserialize<'de>, E: serde::de::Error>(
    fields: &HashMap<String, serde_yaml::Value>,
    key: &'static str,
) -> Result<T, E> {
    let value = fields.get(key).ok_or_else(|| E::missing_field(key))?;
    serde_yaml::from_value(value.clone())
        .map_err(|e| E::custom(format!("invalid field '{key}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_types() {
        let parsed: ColumnType = serde_yaml::from_str("text").unwrap();
        assert_eq!(parsed, ColumnType::Text);

        let parsed: ColumnType = serde_yaml::from_str("big_int").unwrap();
        assert_eq!(parsed, ColumnType::BigInt);

        let parsed: ColumnType = serde_yaml::from_str("{ type: date }").unwrap();
        assert_eq!(parsed, ColumnType::Date);
    }

    #[test]
    fn test_parse_parameterized_types() {
        let parsed: ColumnType = serde_yaml::from_str("{ type: var_char, length: 64 }").unwrap();
        assert_eq!(parsed, ColumnType::varchar(64));

        let parsed: ColumnType =
            serde_yaml::from_str("{ type: enum, values: [student, alumni] }").unwrap();
        assert_eq!(parsed, ColumnType::enumeration(["student", "alumni"]));
    }

    #[test]
    fn test_reject_unknown_and_empty_enum() {
        assert!(serde_yaml::from_str::<ColumnType>("geometry").is_err());
        assert!(serde_yaml::from_str::<ColumnType>("{ type: enum, values: [] }").is_err());
        assert!(serde_yaml::from_str::<ColumnType>("{ type: var_char }").is_err());
    }

    #[test]
    fn test_serialize_roundtrip_enum() {
        let ty = ColumnType::enumeration(["active", "paused"]);
        let yaml = serde_yaml::to_string(&ty).unwrap();
        let parsed: ColumnType = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(ty, parsed);
    }

    #[test]
    fn test_allows() {
        let role = ColumnType::enumeration(["student", "alumni"]);
        assert!(role.allows(&SeedValue::text("student")));
        assert!(!role.allows(&SeedValue::text("teacher")));
        assert!(role.allows(&SeedValue::Null));

        assert!(ColumnType::Int.allows(&SeedValue::Int(2024)));
        assert!(!ColumnType::Int.allows(&SeedValue::Int(i64::MAX)));
        assert!(!ColumnType::Int.allows(&SeedValue::text("2024")));
        assert!(!ColumnType::varchar(3).allows(&SeedValue::text("four")));
    }
}
