//! Schema parsing, writing and file loading
//!
//! This module turns DSL text into validator trees and back, and reads the
//! JSON/YAML documents they validate:
//! - Indentation-based DSL parser with line-numbered errors
//! - Canonical writer (parse followed by write is an identity)
//! - Registry of custom validator kinds
//! - JSON and YAML document loading
//!
//! # Example Usage
//!
//! ```rust
//! use jsonv_schema::loader::{SchemaParser, SchemaWriter};
//!
//! let root = SchemaParser::new().parse("model:Object\n\tname:String\n")?;
//! assert_eq!(SchemaWriter::new().to_string(&root), "model:Object\n\tname:String\n");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Copyright (c) 2025 jsonv Team
//! Licensed under the Apache-2.0 license

pub mod document;
pub mod error;
pub mod factory;
pub mod parser;
pub mod schema_loader;
pub mod writer;

pub use document::{DocumentParser, Format};
pub use error::{LoaderError, LoaderResult, SchemaError, SchemaResult};
pub use factory::{Constructed, CustomKind, ValidatorFactory, BUILTIN_TOKENS};
pub use parser::SchemaParser;
pub use schema_loader::SchemaLoader;
pub use writer::SchemaWriter;
