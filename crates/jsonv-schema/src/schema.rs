//! A parsed schema and its validation entry points
//!
//! Copyright (c) 2025 jsonv Team
//! Licensed under the Apache-2.0 license

use crate::loader::error::SchemaResult;
use crate::loader::parser::SchemaParser;
use crate::loader::writer::SchemaWriter;
use crate::node::Node;
use crate::validation::{
    ObjectValidator, ValidationConfig, ValidationContext, ValidationErrors, ValidationParams, ValidationResult,
    Validator,
};
use serde_json::Value;
use tracing::{debug, warn};

/// Root of a validator tree
///
/// A schema is immutable once built and can validate any number of documents,
/// concurrently if needed. Each pass gets its own [`ValidationContext`].
#[derive(Debug, Default)]
pub struct Schema {
    root: ObjectValidator,
}

impl Schema {
    pub fn new(root: ObjectValidator) -> Self {
        Self { root }
    }

    /// Parse DSL text using only the built-in type tokens
    ///
    /// Use [`crate::loader::ValidatorFactory::create_from_str`] when the schema
    /// refers to custom kinds.
    pub fn parse(text: &str) -> SchemaResult<Self> {
        SchemaParser::new().parse(text).map(Self::new)
    }

    pub fn root(&self) -> &ObjectValidator {
        &self.root
    }

    /// Validate one document, returning what custom validators recorded
    pub fn validate(&self, node: &dyn Node) -> ValidationResult<ValidationContext> {
        let mut context = ValidationContext::new();
        self.root.validate(&ValidationParams::new(node, ""), &mut context)?;
        debug!(entries = context.len(), "document validated");
        Ok(context)
    }

    /// Validate several documents
    ///
    /// Every document is validated unless `config` asks to stop early. On
    /// success the contexts are returned in document order.
    pub fn validate_batch(
        &self,
        documents: &[Value],
        config: &ValidationConfig,
    ) -> Result<Vec<ValidationContext>, ValidationErrors> {
        let mut contexts = Vec::with_capacity(documents.len());
        let mut errors = ValidationErrors::new();

        for (index, document) in documents.iter().enumerate() {
            match self.validate(document) {
                Ok(context) => contexts.push(context),
                Err(error) => {
                    warn!(document = index, path = %error, "document failed validation");
                    errors.add(index, error);
                    if config.should_stop(errors.len()) {
                        break;
                    }
                }
            }
        }

        errors.into_result().map(|()| contexts)
    }

    /// Canonical DSL text for this schema
    pub fn to_dsl(&self) -> String {
        SchemaWriter::new().to_string(&self.root)
    }
}

impl From<ObjectValidator> for Schema {
    fn from(root: ObjectValidator) -> Self {
        Self::new(root)
    }
}
