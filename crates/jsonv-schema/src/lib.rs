//! jsonv Schema - indentation-based schemas for JSON documents
//!
//! This crate parses a compact text DSL into a tree of validators and checks
//! JSON (or YAML) documents against it:
//! - **Schema DSL**: one `name:Type` per line, nesting by leading tabs
//! - **Validator tree**: object, array and leaf validators behind one trait
//! - **Validation trace**: failures report the exact path to the bad value
//!
//! ## Features
//!
//! - **Built-in types**: `String`, `Boolean`, `Int`, `Object`, `Object[]`, `Regex:<pattern>`
//! - **Custom kinds**: register leaf or object checks in a [`ValidatorFactory`]
//! - **Validation context**: custom checks can record derived data during a pass
//! - **Canonical writer**: serialize a validator tree back to DSL text
//! - **Batch Processing**: fail-fast or capped collection across many documents
//!
//! ## Quick Start
//!
//! ```rust
//! use jsonv_schema::Schema;
//! use serde_json::json;
//!
//! let schema = Schema::parse("model:Object\n\tmembers:Object[]\n\t\tsize:Int\n").unwrap();
//!
//! let document = json!({"model": {"members": [{"size": 1}, {"size": "big"}]}});
//! match schema.validate(&document) {
//!     Ok(_) => println!("Valid document!"),
//!     Err(e) => assert_eq!(e.to_string(), "model.members[1].size"),
//! }
//! ```
//!
//! ## Custom Kinds
//!
//! ```rust
//! use jsonv_schema::{Node, ValidationContext, ValidatorFactory};
//! use serde_json::json;
//!
//! let mut factory = ValidatorFactory::new();
//! factory.register_element("Flag", |node: &dyn Node, _: &mut ValidationContext| {
//!     node.is_boolean() || node.is_int()
//! });
//! factory.register_pattern("Zip", "^[0-9]{5}$").unwrap();
//!
//! let schema = factory.create_from_str("enabled:Flag\nzip:Zip\n").unwrap();
//! assert!(schema.validate(&json!({"enabled": 1, "zip": "12345"})).is_ok());
//! ```
//!
//! Copyright (c) 2025 jsonv Team
//! Licensed under the Apache-2.0 license

pub mod loader;
pub mod node;
pub mod schema;
pub mod validation;

// Re-export commonly used types for convenience
pub use loader::{
    LoaderError, LoaderResult, SchemaError, SchemaLoader, SchemaParser, SchemaResult, SchemaWriter,
    ValidatorFactory,
};
pub use node::Node;
pub use schema::Schema;
pub use validation::{
    ArrayValidator, Check, ElementValidator, FailureReason, ObjectValidator, TraceElement, ValidationConfig,
    ValidationContext, ValidationError, ValidationErrors, ValidationParams, ValidationResult, Validator,
};
