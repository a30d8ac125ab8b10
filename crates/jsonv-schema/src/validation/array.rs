//! Array validator
//!
//! Copyright (c) 2025 jsonv Team
//! Licensed under the Apache-2.0 license

use crate::validation::base::{ValidationContext, ValidationParams, Validator};
use crate::validation::error::{FailureReason, TraceElement, ValidationError, ValidationResult};

/// Suffix marking an array type token in the DSL
pub const ARRAY_SUFFIX: &str = "[]";

/// Applies one element validator to every element of a JSON array
///
/// Elements are validated in index order and the first failure stops the
/// walk. Each element is validated under the array's own field name with its
/// index, so failures render as `name[index]`.
#[derive(Debug)]
pub struct ArrayValidator {
    element: Box<dyn Validator>,
}

impl ArrayValidator {
    pub fn new<V: Validator + 'static>(element: V) -> Self {
        Self::boxed(Box::new(element))
    }

    pub fn boxed(element: Box<dyn Validator>) -> Self {
        Self { element }
    }
}

impl Validator for ArrayValidator {
    fn validate(&self, params: &ValidationParams<'_>, context: &mut ValidationContext) -> ValidationResult<()> {
        let node = params.node();
        if !node.is_array() {
            return Err(ValidationError::new(TraceElement::new(
                self.type_token(),
                params,
                FailureReason::NotAnArray,
            )));
        }

        for (index, item) in node.elements().into_iter().enumerate() {
            self.element
                .validate(&ValidationParams::element(item, params.name(), index), context)?;
        }
        Ok(())
    }

    fn type_token(&self) -> String {
        format!("{}{}", self.element.type_token(), ARRAY_SUFFIX)
    }

    fn element(&self) -> Option<&dyn Validator> {
        Some(self.element.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::element::ElementValidator;
    use crate::validation::object::ObjectValidator;
    use serde_json::json;

    fn run(validator: &dyn Validator, value: &serde_json::Value) -> ValidationResult<()> {
        let mut context = ValidationContext::new();
        validator.validate(&ValidationParams::new(value, "members"), &mut context)
    }

    fn members() -> ArrayValidator {
        ArrayValidator::new(ObjectValidator::new().field("size", ElementValidator::int()))
    }

    #[test]
    fn test_accepts_empty_and_valid_arrays() {
        assert!(run(&members(), &json!([])).is_ok());
        assert!(run(&members(), &json!([{"size": 1}, {"size": 2}])).is_ok());
    }

    #[test]
    fn test_rejects_non_array() {
        let error = run(&members(), &json!({"size": 1})).unwrap_err();
        assert_eq!(error.to_string(), "members");
        assert_eq!(error.reason(), Some(FailureReason::NotAnArray));
        assert_eq!(error.describe(), "members: expected an array, found object");
    }

    #[test]
    fn test_first_failing_element_is_reported() {
        let error = run(&members(), &json!([{"size": 1}, {"size": "big"}, {"size": "huge"}])).unwrap_err();
        assert_eq!(error.to_string(), "members[1].size");
        assert_eq!(error.trace().len(), 2);
    }

    #[test]
    fn test_leaf_elements() {
        let tags = ArrayValidator::new(ElementValidator::string());
        let error = run(&tags, &json!(["a", "b", 3])).unwrap_err();
        assert_eq!(error.to_string(), "members[2]");
    }

    #[test]
    fn test_type_token() {
        assert_eq!(members().type_token(), "Object[]");
        assert_eq!(members().element().map(|e| e.type_token()).as_deref(), Some("Object"));
    }
}
