//! Base validation traits and the per-pass context
//!
//! Copyright (c) 2025 jsonv Team
//! Licensed under the Apache-2.0 license

use crate::node::Node;
use crate::validation::error::ValidationResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Arguments of a single validate call
///
/// A fresh value is built for every child invocation. `index` is set when the
/// validator runs on an array element; the trace then renders `name[index]`.
#[derive(Clone, Copy)]
pub struct ValidationParams<'a> {
    node: &'a dyn Node,
    name: &'a str,
    index: Option<usize>,
}

impl<'a> ValidationParams<'a> {
    /// Params for an object member (or the root, with an empty name)
    pub fn new(node: &'a dyn Node, name: &'a str) -> Self {
        Self {
            node,
            name,
            index: None,
        }
    }

    /// Params for an element of the array stored under `name`
    pub fn element(node: &'a dyn Node, name: &'a str, index: usize) -> Self {
        Self {
            node,
            name,
            index: Some(index),
        }
    }

    pub fn node(&self) -> &'a dyn Node {
        self.node
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn is_array_element(&self) -> bool {
        self.index.is_some()
    }
}

impl fmt::Debug for ValidationParams<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationParams")
            .field("node", &self.node.kind())
            .field("name", &self.name)
            .field("index", &self.index)
            .finish()
    }
}

/// Side channel shared by every validator during one pass
///
/// Custom checks record derived data here; the caller receives the context
/// once the whole document has validated. A context must never be shared
/// between concurrent passes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationContext {
    entries: HashMap<String, Value>,
}

impl ValidationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Store a value, returning the previous one
    pub fn insert<K: Into<String>>(&mut self, key: K, value: Value) -> Option<Value> {
        self.entries.insert(key.into(), value)
    }

    /// Entry for `key`, created with `default` when absent
    pub fn entry_or_insert<K: Into<String>>(&mut self, key: K, default: Value) -> &mut Value {
        self.entries.entry(key.into()).or_insert(default)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_inner(self) -> HashMap<String, Value> {
        self.entries
    }
}

/// The contract shared by every validator kind
///
/// Validator trees are immutable once built and may be shared across threads;
/// all per-pass state lives in the [`ValidationContext`].
pub trait Validator: fmt::Debug + Send + Sync {
    /// Validate the node in `params`, recording derived data in `context`
    fn validate(&self, params: &ValidationParams<'_>, context: &mut ValidationContext) -> ValidationResult<()>;

    /// DSL type token this validator was created from
    fn type_token(&self) -> String;

    /// Ordered child fields, for object validators
    fn fields(&self) -> Option<&[(String, Box<dyn Validator>)]> {
        None
    }

    /// Wrapped element validator, for array validators
    fn element(&self) -> Option<&dyn Validator> {
        None
    }
}

/// A pluggable predicate used by custom validator kinds
///
/// On leaf kinds it decides acceptance of the node; on object kinds it runs
/// after every declared field has passed. Implementations may write to the
/// context but must not keep state of their own.
pub trait Check: Send + Sync {
    fn ok(&self, node: &dyn Node, context: &mut ValidationContext) -> bool;
}

impl<F> Check for F
where
    F: Fn(&dyn Node, &mut ValidationContext) -> bool + Send + Sync,
{
    fn ok(&self, node: &dyn Node, context: &mut ValidationContext) -> bool {
        self(node, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_params_element_flag() {
        let value = json!(1);
        let member = ValidationParams::new(&value, "size");
        assert!(!member.is_array_element());
        assert_eq!(member.name(), "size");

        let element = ValidationParams::element(&value, "sizes", 4);
        assert!(element.is_array_element());
        assert_eq!(element.index(), Some(4));
    }

    #[test]
    fn test_context_entries() {
        let mut context = ValidationContext::new();
        assert!(context.is_empty());

        context.insert("count", json!(1));
        assert_eq!(context.get("count"), Some(&json!(1)));

        let members = context.entry_or_insert("Members", json!({}));
        members["a"] = json!("b");
        assert_eq!(context.get("Members"), Some(&json!({"a": "b"})));
        assert_eq!(context.len(), 2);
    }

    #[test]
    fn test_closure_check() {
        let check = |node: &dyn Node, context: &mut ValidationContext| {
            context.insert("seen", json!(true));
            node.is_string()
        };
        let mut context = ValidationContext::new();
        assert!(check.ok(&json!("x"), &mut context));
        assert!(context.contains_key("seen"));
    }
}
