//! Registry of custom validator kinds
//!
//! The parser resolves the built-in type tokens itself and asks the factory
//! for anything else. Registering a kind makes its name usable in schemas
//! without touching the parser.
//!
//! Copyright (c) 2025 jsonv Team
//! Licensed under the Apache-2.0 license

use crate::loader::error::{LoaderResult, SchemaResult};
use crate::loader::parser::SchemaParser;
use crate::loader::schema_loader::SchemaLoader;
use crate::node::Node;
use crate::schema::Schema;
use crate::validation::{
    Check, ElementValidator, ObjectValidator, ValidationContext, ARRAY_SUFFIX, REGEX_PREFIX,
};
use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

/// Type tokens the parser handles itself; registrations under these names are ignored
pub const BUILTIN_TOKENS: &[&str] = &["String", "Boolean", "Int", "Object"];

/// How a registered kind is constructed
#[derive(Clone)]
pub enum CustomKind {
    /// A leaf validator accepting nodes for which the check holds
    Element(Arc<dyn Check>),
    /// An object validator; the check runs after its declared fields pass
    Object(Arc<dyn Check>),
}

impl fmt::Debug for CustomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(_) => f.write_str("Element"),
            Self::Object(_) => f.write_str("Object"),
        }
    }
}

/// A validator freshly built for a type token
#[derive(Debug)]
pub enum Constructed {
    Element(ElementValidator),
    Object(ObjectValidator),
}

/// Maps type names to custom validator constructors
#[derive(Debug, Clone, Default)]
pub struct ValidatorFactory {
    kinds: HashMap<String, CustomKind>,
}

impl ValidatorFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `name` can be registered
    pub fn is_reserved(name: &str) -> bool {
        BUILTIN_TOKENS.contains(&name)
            || name.starts_with(REGEX_PREFIX)
            || name.ends_with(ARRAY_SUFFIX)
            || name.is_empty()
            || name.chars().any(char::is_whitespace)
    }

    /// Register a kind under `name`, replacing any previous registration
    ///
    /// Returns `false` (and registers nothing) for names the DSL reserves.
    pub fn register<N: Into<String>>(&mut self, name: N, kind: CustomKind) -> bool {
        let name = name.into();
        if Self::is_reserved(&name) {
            warn!(name = %name, "ignoring registration of reserved type name");
            return false;
        }
        debug!(name = %name, kind = ?kind, "registering custom validator kind");
        self.kinds.insert(name, kind);
        true
    }

    /// Register a custom leaf kind
    pub fn register_element<N, C>(&mut self, name: N, check: C) -> bool
    where
        N: Into<String>,
        C: Check + 'static,
    {
        self.register(name, CustomKind::Element(Arc::new(check)))
    }

    /// Register a custom object kind
    pub fn register_object<N, C>(&mut self, name: N, check: C) -> bool
    where
        N: Into<String>,
        C: Check + 'static,
    {
        self.register(name, CustomKind::Object(Arc::new(check)))
    }

    /// Register a leaf kind accepting strings the pattern matches
    pub fn register_pattern<N: Into<String>>(&mut self, name: N, pattern: &str) -> Result<bool, regex::Error> {
        let regex = Regex::new(pattern)?;
        Ok(self.register_element(name, PatternCheck(regex)))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.kinds.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&CustomKind> {
        self.kinds.get(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.kinds.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Build a fresh validator for a registered name
    pub fn construct(&self, name: &str) -> Option<Constructed> {
        self.kinds.get(name).map(|kind| match kind {
            CustomKind::Element(check) => Constructed::Element(ElementValidator::custom(name, Arc::clone(check))),
            CustomKind::Object(check) => Constructed::Object(ObjectValidator::with_hook(name, Arc::clone(check))),
        })
    }

    /// Parse schema text using the registered kinds
    pub fn create_from_str(&self, text: &str) -> SchemaResult<Schema> {
        SchemaParser::with_factory(self).parse(text).map(Schema::new)
    }

    /// Load a schema file using the registered kinds
    pub fn create_from_path(&self, path: &Path) -> LoaderResult<Schema> {
        SchemaLoader::with_factory(self).load_schema(path)
    }
}

/// Regex-backed leaf check used by [`ValidatorFactory::register_pattern`]
struct PatternCheck(Regex);

impl Check for PatternCheck {
    fn ok(&self, node: &dyn Node, _context: &mut ValidationContext) -> bool {
        node.as_text().is_some_and(|text| self.0.is_match(text))
    }
}
