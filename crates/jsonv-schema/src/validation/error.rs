//! Validation failures and their path traces
//!
//! A [`ValidationError`] is built at the point a failure is detected and then
//! grows by one [`TraceElement`] per enclosing object validator as it is
//! returned up the tree. Elements are stored innermost first; rendering walks
//! them in reverse to produce a path such as `model.members[1].size`.
//!
//! Copyright (c) 2025 jsonv Team
//! Licensed under the Apache-2.0 license

use crate::validation::base::ValidationParams;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Why a validator rejected its input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    /// A leaf check returned false
    Rejected,
    /// A required object member is absent
    MissingField,
    /// An array validator was given something other than an array
    NotAnArray,
    /// A custom object hook returned false after the structural checks passed
    HookRejected,
    /// An enclosing object forwarding a failure from one of its fields
    Nested,
}

/// One hop of a failure trace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceElement {
    /// Type token of the validator that recorded this element
    pub validator: String,
    /// Field name the validator was invoked for (empty for the root)
    pub field: String,
    /// Element index when invoked on an array element
    pub index: Option<usize>,
    pub reason: FailureReason,
    /// Kind of node that was found, `None` when the member was missing
    pub found: Option<String>,
}

impl TraceElement {
    /// Record a failure for the validator called with `params`
    pub fn new<V: Into<String>>(validator: V, params: &ValidationParams<'_>, reason: FailureReason) -> Self {
        Self {
            validator: validator.into(),
            field: params.name().to_string(),
            index: params.index(),
            reason,
            found: Some(params.node().kind().to_string()),
        }
    }

    /// Record an absent object member
    pub fn missing<V, F>(validator: V, field: F) -> Self
    where
        V: Into<String>,
        F: Into<String>,
    {
        Self {
            validator: validator.into(),
            field: field.into(),
            index: None,
            reason: FailureReason::MissingField,
            found: None,
        }
    }

    /// Whether the validator was invoked on an array element
    pub fn is_array_element(&self) -> bool {
        self.index.is_some()
    }

    /// Path segment for this element, `None` for the unnamed root
    pub fn segment(&self) -> Option<String> {
        if self.field.is_empty() && self.index.is_none() {
            return None;
        }
        Some(match self.index {
            Some(index) => format!("{}[{}]", self.field, index),
            None => self.field.clone(),
        })
    }
}

/// A document failed its schema
///
/// `Display` renders exactly the dotted/bracketed path to the first failure.
/// Use [`ValidationError::describe`] for a sentence suitable for users.
#[derive(Debug, Clone, Default, Error, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    trace: Vec<TraceElement>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl ValidationError {
    /// Start a new error from the element where the failure was detected
    pub fn new(element: TraceElement) -> Self {
        Self {
            trace: vec![element],
        }
    }

    /// Append an element for an enclosing validator
    pub fn add(&mut self, element: TraceElement) {
        self.trace.push(element);
    }

    /// Builder form of [`ValidationError::add`]
    pub fn with(mut self, element: TraceElement) -> Self {
        self.add(element);
        self
    }

    /// Trace elements, innermost first
    pub fn trace(&self) -> &[TraceElement] {
        &self.trace
    }

    /// Element where the failure was detected
    pub fn innermost(&self) -> Option<&TraceElement> {
        self.trace.first()
    }

    pub fn reason(&self) -> Option<FailureReason> {
        self.innermost().map(|element| element.reason)
    }

    /// Render the path outermost to innermost
    pub fn path(&self) -> String {
        self.trace
            .iter()
            .rev()
            .filter_map(TraceElement::segment)
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Human-readable explanation of the failure
    pub fn describe(&self) -> String {
        let path = self.path();
        let location = if path.is_empty() { "<root>" } else { path.as_str() };

        match self.innermost() {
            None => format!("{}: validation failed", location),
            Some(element) => {
                let found = element.found.as_deref().unwrap_or("nothing");
                match element.reason {
                    FailureReason::MissingField => {
                        format!("{}: required field is missing (expected {})", location, element.validator)
                    }
                    FailureReason::NotAnArray => {
                        format!("{}: expected an array, found {}", location, found)
                    }
                    FailureReason::HookRejected => {
                        format!("{}: rejected by {} validator", location, element.validator)
                    }
                    FailureReason::Rejected | FailureReason::Nested => {
                        format!("{}: expected {}, found {}", location, element.validator, found)
                    }
                }
            }
        }
    }
}

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A failure for one document of a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentError {
    /// Position of the document in the batch
    pub document: usize,
    pub error: ValidationError,
}

/// Failures collected while validating several documents
#[derive(Debug, Clone, Default, Error, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    pub errors: Vec<DocumentError>,
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} document(s) failed validation:", self.errors.len())?;
        for failure in &self.errors {
            write!(f, "\n  [{}] {}", failure.document, failure.error.describe())?;
        }
        Ok(())
    }
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, document: usize, error: ValidationError) {
        self.errors.push(DocumentError { document, error });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Convert to result - Ok if no errors, Err if any errors exist
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}
