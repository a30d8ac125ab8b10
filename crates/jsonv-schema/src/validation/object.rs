//! Object validator: a mapping from required field names to child validators
//!
//! Copyright (c) 2025 jsonv Team
//! Licensed under the Apache-2.0 license

use crate::node::Node;
use crate::validation::base::{Check, ValidationContext, ValidationParams, Validator};
use crate::validation::error::{FailureReason, TraceElement, ValidationError, ValidationResult};
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Type token of a plain object validator
pub const OBJECT_TOKEN: &str = "Object";

/// Custom behaviour attached to an object validator
#[derive(Clone)]
struct Hook {
    name: String,
    check: Arc<dyn Check>,
}

/// Validates that every declared field is present and passes its validator
///
/// Fields are checked in declaration order and the first failure wins. A
/// custom kind may attach a hook that runs once all fields have passed.
#[derive(Default)]
pub struct ObjectValidator {
    fields: Vec<(String, Box<dyn Validator>)>,
    hook: Option<Hook>,
}

impl fmt::Debug for ObjectValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectValidator")
            .field("kind", &self.type_token())
            .field("fields", &self.fields)
            .finish()
    }
}

impl ObjectValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// An object of a custom kind whose `check` runs after the field checks
    pub fn with_hook<N: Into<String>>(name: N, check: Arc<dyn Check>) -> Self {
        Self {
            fields: Vec::new(),
            hook: Some(Hook {
                name: name.into(),
                check,
            }),
        }
    }

    /// Declare a required field
    ///
    /// Redeclaring a name replaces its validator but keeps its position.
    pub fn set<K: Into<String>>(&mut self, key: K, validator: Box<dyn Validator>) {
        let key = key.into();
        match self.fields.iter_mut().find(|(name, _)| *name == key) {
            Some(slot) => slot.1 = validator,
            None => self.fields.push((key, validator)),
        }
    }

    /// Builder form of [`ObjectValidator::set`]
    pub fn field<K: Into<String>, V: Validator + 'static>(mut self, key: K, validator: V) -> Self {
        self.set(key, Box::new(validator));
        self
    }

    pub fn get(&self, key: &str) -> Option<&dyn Validator> {
        self.fields
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, validator)| validator.as_ref())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Whether this object belongs to a registered custom kind
    pub fn is_custom(&self) -> bool {
        self.hook.is_some()
    }

    /// Whole-object check run after every field has passed
    pub fn ok(&self, node: &dyn Node, context: &mut ValidationContext) -> bool {
        match &self.hook {
            Some(hook) => hook.check.ok(node, context),
            None => true,
        }
    }

    fn validate_fields(&self, node: &dyn Node, context: &mut ValidationContext) -> ValidationResult<()> {
        for (name, validator) in &self.fields {
            let member = node
                .get(name)
                .ok_or_else(|| ValidationError::new(TraceElement::missing(validator.type_token(), name.as_str())))?;
            trace!(field = %name, "validating field");
            validator.validate(&ValidationParams::new(member, name), context)?;
        }
        Ok(())
    }
}

impl Validator for ObjectValidator {
    fn validate(&self, params: &ValidationParams<'_>, context: &mut ValidationContext) -> ValidationResult<()> {
        let node = params.node();

        self.validate_fields(node, context)
            .map_err(|error| error.with(TraceElement::new(self.type_token(), params, FailureReason::Nested)))?;

        if self.ok(node, context) {
            Ok(())
        } else {
            Err(ValidationError::new(TraceElement::new(
                self.type_token(),
                params,
                FailureReason::HookRejected,
            )))
        }
    }

    fn type_token(&self) -> String {
        match &self.hook {
            Some(hook) => hook.name.clone(),
            None => OBJECT_TOKEN.to_string(),
        }
    }

    fn fields(&self) -> Option<&[(String, Box<dyn Validator>)]> {
        Some(&self.fields)
    }
}
