//! The in-memory JSON document tree.

use std::collections::BTreeMap;
use std::fmt;

use crate::json::serializer;

/// A JSON value.
///
/// Exactly one variant is live at a time; a value owns all of its
/// descendants, so clones are fully independent trees and dropping a value
/// frees everything below it. Strings always hold well-formed UTF-8 - the
/// parser builds them exclusively from validated bytes.
///
/// Numbers keep the distinction the source text made: a literal without a
/// fraction or exponent that fits in an `i64` is an [`Int`](Value::Int),
/// everything else is a [`Double`](Value::Double).
///
/// Equality is structural. `Eq` cannot be offered because of the `f64`
/// payload; in particular `Double(f64::NAN)` is not equal to itself.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// JSON null literal.
    #[default]
    Null,
    /// JSON boolean.
    Bool(bool),
    /// JSON number without fraction or exponent, within `i64` range.
    Int(i64),
    /// JSON number with a fraction or exponent, or an integer literal that
    /// overflows `i64`.
    Double(f64),
    /// JSON string.
    String(String),
    /// JSON array; element order is significant.
    Array(Vec<Value>),
    /// JSON object. Keys are unique (a duplicate in the source replaces the
    /// earlier entry) and iterate in the map's sorted order, not the order
    /// they appeared in the document.
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// Returns true if this is the null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this is a boolean.
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns true if this is an integer number.
    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Returns true if this is a floating-point number.
    pub fn is_double(&self) -> bool {
        matches!(self, Value::Double(_))
    }

    /// Returns true if this is a number of either representation.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Double(_))
    }

    /// Returns true if this is a string.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns true if this is an array.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns true if this is an object.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// The boolean payload, if this is a Bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The integer payload, if this is an Int.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The floating-point payload, if this is a Double.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Double(d) => Some(*d),
            _ => None,
        }
    }

    /// The string payload, if this is a String.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The elements, if this is an Array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The members, if this is an Object.
    pub fn as_object(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Object(members) => Some(members),
            _ => None,
        }
    }

    /// Look up an object member by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(members) => members.get(key),
            _ => None,
        }
    }

    /// Look up an array element by index.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Array(items) => items.get(index),
            _ => None,
        }
    }

    /// The value's type name, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Double(_) => "double",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

impl fmt::Display for Value {
    /// Renders the serialized JSON form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serializer::serialize(self))
    }
}
