use std::fmt;

use serde_json::{Map, Value};

/// Expected semantic type of a documented homework field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Int,
    Str,
}

impl FieldKind {
    fn matches(self, value: &Value) -> bool {
        match self {
            FieldKind::Int => value.is_i64() || value.is_u64(),
            FieldKind::Str => value.is_string(),
        }
    }

    fn name(self) -> &'static str {
        match self {
            FieldKind::Int => "int",
            FieldKind::Str => "str",
        }
    }
}

/// The six fields the homework API documents for a record.
pub const HOMEWORK_SCHEMA: [(&str, FieldKind); 6] = [
    ("id", FieldKind::Int),
    ("status", FieldKind::Str),
    ("homework_name", FieldKind::Str),
    ("reviewer_comment", FieldKind::Str),
    ("date_updated", FieldKind::Str),
    ("lesson_name", FieldKind::Str),
];

/// A non-fatal disagreement between a record and the documented schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaWarning {
    UnknownField(String),
    WrongType { field: String, expected: &'static str },
}

impl fmt::Display for SchemaWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaWarning::UnknownField(field) => {
                write!(f, "homework record field \"{field}\" is not in the schema")
            }
            SchemaWarning::WrongType { field, expected } => {
                write!(
                    f,
                    "homework record field \"{field}\" does not have the expected type {expected}"
                )
            }
        }
    }
}

/// Checks every present field of a raw record against [`HOMEWORK_SCHEMA`].
/// Purely diagnostic: the caller logs the warnings and keeps the record.
pub fn schema_warnings(record: &Map<String, Value>) -> Vec<SchemaWarning> {
    let mut warnings = Vec::new();
    for (field, value) in record {
        match HOMEWORK_SCHEMA.iter().find(|(name, _)| *name == field.as_str()) {
            None => warnings.push(SchemaWarning::UnknownField(field.clone())),
            Some((_, kind)) if !kind.matches(value) => warnings.push(SchemaWarning::WrongType {
                field: field.clone(),
                expected: kind.name(),
            }),
            Some(_) => {}
        }
    }
    warnings
}
