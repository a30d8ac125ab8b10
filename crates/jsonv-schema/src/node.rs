//! Read-only view over a JSON value
//!
//! Validators never touch `serde_json::Value` directly; they go through the
//! [`Node`] trait so that any document representation can be plugged in.
//!
//! Copyright (c) 2025 jsonv Team
//! Licensed under the Apache-2.0 license

use serde_json::Value;

/// Opaque, read-only handle to a JSON value
pub trait Node: Send + Sync {
    /// Whether an object member named `key` exists
    fn has(&self, key: &str) -> bool;

    /// Look up an object member
    fn get(&self, key: &str) -> Option<&dyn Node>;

    fn is_string(&self) -> bool;

    /// True for integral numbers only; floats and numeric strings are rejected
    fn is_int(&self) -> bool;

    fn is_boolean(&self) -> bool;

    fn is_array(&self) -> bool;

    fn is_object(&self) -> bool;

    /// Text of a string node, `None` for every other kind
    fn as_text(&self) -> Option<&str>;

    /// Array elements in index order, empty for non-arrays
    fn elements(&self) -> Vec<&dyn Node>;

    /// Short name of the node kind, used in error messages
    fn kind(&self) -> &'static str {
        if self.is_string() {
            "string"
        } else if self.is_int() {
            "integer"
        } else if self.is_boolean() {
            "boolean"
        } else if self.is_array() {
            "array"
        } else if self.is_object() {
            "object"
        } else {
            "other"
        }
    }
}

impl Node for Value {
    fn has(&self, key: &str) -> bool {
        self.as_object().is_some_and(|map| map.contains_key(key))
    }

    fn get(&self, key: &str) -> Option<&dyn Node> {
        self.as_object()
            .and_then(|map| map.get(key))
            .map(|value| value as &dyn Node)
    }

    fn is_string(&self) -> bool {
        Value::is_string(self)
    }

    fn is_int(&self) -> bool {
        self.is_i64() || self.is_u64()
    }

    fn is_boolean(&self) -> bool {
        Value::is_boolean(self)
    }

    fn is_array(&self) -> bool {
        Value::is_array(self)
    }

    fn is_object(&self) -> bool {
        Value::is_object(self)
    }

    fn as_text(&self) -> Option<&str> {
        self.as_str()
    }

    fn elements(&self) -> Vec<&dyn Node> {
        match self {
            Value::Array(items) => items.iter().map(|item| item as &dyn Node).collect(),
            _ => Vec::new(),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(n) if n.is_f64() => "number",
            Value::Number(_) => "integer",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}
