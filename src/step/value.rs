//! Snapshot value representation
//!
//! This module defines the [`Value`] enum, which represents the values a step
//! can expose in its variable list or carry as its final result. Values are
//! tagged so the viewer can format them without knowing which algorithm
//! produced them.
//!
//! # Value Types
//!
//! - [`Value::Int`]: signed integer (array elements, sums, indices)
//! - [`Value::Bool`]: comparison outcome
//! - [`Value::Array`]: owned copy of an integer sequence
//! - [`Value::Text`]: free-form label (e.g. the combined union/intersection answer)
//! - [`Value::Null`]: no value (e.g. "no pair found")

use std::fmt;

/// Values visible in a step
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Value {
    Int(i64),
    Bool(bool),
    Array(Vec<i64>),
    Text(String),
    #[default]
    Null,
}

impl Value {
    /// Get the integer value, returns None if not an Int
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the array contents, returns None if not an Array
    pub fn as_array(&self) -> Option<&[i64]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Array(items) => {
                write!(f, "[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Text(s) => write!(f, "{}", s),
            Value::Null => write!(f, "null"),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

// Indices are shown as plain integers
impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Int(n as i64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Vec<i64>> for Value {
    fn from(items: Vec<i64>) -> Self {
        Value::Array(items)
    }
}

impl From<&[i64]> for Value {
    fn from(items: &[i64]) -> Self {
        Value::Array(items.to_vec())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_array() {
        assert_eq!(Value::from(vec![1, -2, 3]).to_string(), "[1, -2, 3]");
        assert_eq!(Value::Array(Vec::new()).to_string(), "[]");
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some(4usize)), Value::Int(4));
    }
}
