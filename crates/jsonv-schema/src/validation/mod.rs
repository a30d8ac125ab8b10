//! Validator tree and validation trace
//!
//! A schema is executed as a tree of [`Validator`]s walked in lock-step with
//! the document:
//!
//! - **ElementValidator**: String, Boolean, Int, Regex and custom leaf checks
//! - **ObjectValidator**: required fields plus an optional custom hook
//! - **ArrayValidator**: one element validator applied to every element
//!
//! Validation is fail-fast. The first failure is returned as a
//! [`ValidationError`] whose trace renders the path to the offending value.
//!
//! Copyright (c) 2025 jsonv Team
//! Licensed under the Apache-2.0 license

pub mod array;
pub mod base;
pub mod element;
pub mod error;
pub mod object;

// Re-export commonly used types
pub use array::{ArrayValidator, ARRAY_SUFFIX};
pub use base::{Check, ValidationContext, ValidationParams, Validator};
pub use element::{ElementKind, ElementValidator, REGEX_PREFIX};
pub use error::{
    DocumentError, FailureReason, TraceElement, ValidationError, ValidationErrors, ValidationResult,
};
pub use object::{ObjectValidator, OBJECT_TOKEN};

/// Validation configuration for batch operations
#[derive(Debug, Clone, Default)]
pub struct ValidationConfig {
    /// Whether to stop on first error or collect all errors
    pub fail_fast: bool,
    /// Maximum number of errors to collect (0 = unlimited)
    pub max_errors: usize,
}

impl ValidationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable fail-fast mode
    pub fn with_fail_fast(mut self) -> Self {
        self.fail_fast = true;
        self
    }

    /// Set maximum number of errors to collect
    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = max_errors;
        self
    }

    /// Whether collection should stop once `collected` failures are recorded
    pub fn should_stop(&self, collected: usize) -> bool {
        collected > 0 && (self.fail_fast || (self.max_errors > 0 && collected >= self.max_errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_config_defaults() {
        let config = ValidationConfig::default();
        assert!(!config.fail_fast);
        assert_eq!(config.max_errors, 0);
        assert!(!config.should_stop(10));
    }

    #[test]
    fn test_validation_config_builders() {
        let config = ValidationConfig::new().with_fail_fast().with_max_errors(5);
        assert!(config.fail_fast);
        assert_eq!(config.max_errors, 5);
        assert!(!config.should_stop(0));
        assert!(config.should_stop(1));

        let capped = ValidationConfig::new().with_max_errors(2);
        assert!(!capped.should_stop(1));
        assert!(capped.should_stop(2));
    }
}
