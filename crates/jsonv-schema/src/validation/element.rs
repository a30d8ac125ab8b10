//! Leaf validators
//!
//! Copyright (c) 2025 jsonv Team
//! Licensed under the Apache-2.0 license

use crate::node::Node;
use crate::validation::base::{Check, ValidationContext, ValidationParams, Validator};
use crate::validation::error::{FailureReason, TraceElement, ValidationError, ValidationResult};
use regex::Regex;
use std::fmt;
use std::sync::Arc;

/// Prefix of the Regex type token in the DSL
pub const REGEX_PREFIX: &str = "Regex:";

/// What a leaf validator checks
#[derive(Clone)]
pub enum ElementKind {
    String,
    Boolean,
    Int,
    /// A string the pattern finds a match in (search, not anchored)
    Regex(Regex),
    /// A registered custom check
    Custom { name: String, check: Arc<dyn Check> },
}

impl fmt::Debug for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("String"),
            Self::Boolean => f.write_str("Boolean"),
            Self::Int => f.write_str("Int"),
            Self::Regex(regex) => f.debug_tuple("Regex").field(&regex.as_str()).finish(),
            Self::Custom { name, .. } => f.debug_struct("Custom").field("name", name).finish_non_exhaustive(),
        }
    }
}

/// Validator for a single non-composite value
#[derive(Debug, Clone)]
pub struct ElementValidator {
    kind: ElementKind,
}

impl ElementValidator {
    pub fn new(kind: ElementKind) -> Self {
        Self { kind }
    }

    pub fn string() -> Self {
        Self::new(ElementKind::String)
    }

    pub fn boolean() -> Self {
        Self::new(ElementKind::Boolean)
    }

    pub fn int() -> Self {
        Self::new(ElementKind::Int)
    }

    /// Compile `pattern` into a Regex validator
    pub fn regex(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self::new(ElementKind::Regex(Regex::new(pattern)?)))
    }

    pub fn custom<N: Into<String>>(name: N, check: Arc<dyn Check>) -> Self {
        Self::new(ElementKind::Custom {
            name: name.into(),
            check,
        })
    }

    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    /// Whether `node` satisfies this validator
    pub fn ok(&self, node: &dyn Node, context: &mut ValidationContext) -> bool {
        match &self.kind {
            ElementKind::String => node.is_string(),
            ElementKind::Boolean => node.is_boolean(),
            ElementKind::Int => node.is_int(),
            ElementKind::Regex(regex) => node.as_text().is_some_and(|text| regex.is_match(text)),
            ElementKind::Custom { check, .. } => check.ok(node, context),
        }
    }
}

impl Validator for ElementValidator {
    fn validate(&self, params: &ValidationParams<'_>, context: &mut ValidationContext) -> ValidationResult<()> {
        if self.ok(params.node(), context) {
            Ok(())
        } else {
            Err(ValidationError::new(TraceElement::new(
                self.type_token(),
                params,
                FailureReason::Rejected,
            )))
        }
    }

    fn type_token(&self) -> String {
        match &self.kind {
            ElementKind::String => "String".to_string(),
            ElementKind::Boolean => "Boolean".to_string(),
            ElementKind::Int => "Int".to_string(),
            ElementKind::Regex(regex) => format!("{}{}", REGEX_PREFIX, regex.as_str()),
            ElementKind::Custom { name, .. } => name.clone(),
        }
    }
}
