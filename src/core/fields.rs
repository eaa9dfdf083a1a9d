//! Value field descriptors and input coercion.
//!
//! The set of editable value fields (`base`, `dg`, `ck`, `upg`, `status`) is
//! static configuration: each key maps to a storage column and a value kind.
//! [`coerce`] turns the free-text input from a slash command into the
//! correctly-typed value for its target field. Coercion is pure input
//! validation and never touches the store.

use crate::entities::item;
use std::fmt;

/// How a field's raw input is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Parsed as an integer, then as a decimal
    Numeric,
    /// Stored as trimmed text; empty input clears the field
    Text,
}

/// Maps a short field key to its storage column and value kind.
#[derive(Debug)]
pub struct FieldDescriptor {
    /// Key exposed to callers (always lower-case)
    pub key: &'static str,
    /// Target column on the items table
    pub column: item::Column,
    /// How raw input is coerced for this field
    pub kind: FieldKind,
}

/// All editable value fields. Extend only by adding a descriptor entry.
pub static VALUE_FIELDS: [FieldDescriptor; 5] = [
    FieldDescriptor {
        key: "base",
        column: item::Column::BaseValue,
        kind: FieldKind::Numeric,
    },
    FieldDescriptor {
        key: "dg",
        column: item::Column::DgValue,
        kind: FieldKind::Text,
    },
    FieldDescriptor {
        key: "ck",
        column: item::Column::CkValue,
        kind: FieldKind::Text,
    },
    FieldDescriptor {
        key: "upg",
        column: item::Column::UpgValue,
        kind: FieldKind::Text,
    },
    FieldDescriptor {
        key: "status",
        column: item::Column::Status,
        kind: FieldKind::Text,
    },
];

/// A coerced, correctly-typed value ready to persist.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Whole number input for a numeric field
    Integer(i64),
    /// Decimal input for a numeric field
    Decimal(f64),
    /// Text field content; `None` clears the field to NULL
    Text(Option<String>),
}

impl FieldValue {
    /// Converts the value into the store's value representation.
    /// Numeric values share one double-precision column.
    #[must_use]
    pub fn to_db_value(&self) -> sea_orm::Value {
        match self {
            // Values are skin prices; they stay far below 2^53
            #[allow(clippy::cast_precision_loss)]
            Self::Integer(n) => (*n as f64).into(),
            Self::Decimal(n) => (*n).into(),
            Self::Text(text) => text.clone().into(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Decimal(n) => write!(f, "{n}"),
            Self::Text(Some(text)) => f.write_str(text),
            Self::Text(None) => Ok(()),
        }
    }
}

/// Result of coercing a (field key, raw input) pair.
#[derive(Debug)]
pub enum Coercion {
    /// Input is valid for the field
    Value {
        /// The matched field descriptor
        field: &'static FieldDescriptor,
        /// The coerced value
        value: FieldValue,
    },
    /// The field key matches no descriptor
    InvalidField,
    /// The raw input cannot be coerced for the matched field
    InvalidValue {
        /// The matched field descriptor, for error reporting
        field: &'static FieldDescriptor,
    },
}

/// Looks up a field descriptor by key, case-insensitively.
#[must_use]
pub fn lookup_field(key: &str) -> Option<&'static FieldDescriptor> {
    let key = key.trim().to_lowercase();
    VALUE_FIELDS.iter().find(|field| field.key == key)
}

/// Coerces free-text input into the typed value for the given field.
///
/// Numeric fields try an integer parse first, then a decimal parse. Text
/// fields store the trimmed input; an empty trimmed string becomes an
/// explicit NULL so callers can intentionally clear a field.
#[must_use]
pub fn coerce(field_key: &str, raw_input: &str) -> Coercion {
    let Some(field) = lookup_field(field_key) else {
        return Coercion::InvalidField;
    };

    let trimmed = raw_input.trim();
    match field.kind {
        FieldKind::Numeric => {
            if let Ok(n) = trimmed.parse::<i64>() {
                return Coercion::Value {
                    field,
                    value: FieldValue::Integer(n),
                };
            }
            match trimmed.parse::<f64>() {
                Ok(n) => Coercion::Value {
                    field,
                    value: FieldValue::Decimal(n),
                },
                Err(_) => Coercion::InvalidValue { field },
            }
        }
        FieldKind::Text => {
            let value = if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            };
            Coercion::Value {
                field,
                value: FieldValue::Text(value),
            }
        }
    }
}
