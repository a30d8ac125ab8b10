//! Parser for the indentation-based schema DSL
//!
//! One field per line, nesting by leading tabs, type after a colon:
//!
//! ```text
//! model:Object
//! 	name:String
//! 	members:Object[]
//! 		size:Int
//! ```
//!
//! The parser keeps a stack of objects still open for children; its height is
//! the depth of the current line. The validator tree it builds is the parse
//! tree, there is no intermediate representation.
//!
//! Copyright (c) 2025 jsonv Team
//! Licensed under the Apache-2.0 license

use crate::loader::error::{SchemaError, SchemaResult};
use crate::loader::factory::{Constructed, ValidatorFactory};
use crate::validation::{
    ArrayValidator, ElementValidator, ObjectValidator, Validator, ARRAY_SUFFIX, OBJECT_TOKEN, REGEX_PREFIX,
};
use regex::Regex;
use std::io::BufRead;
use std::sync::OnceLock;
use tracing::{debug, trace};

static LINE_PATTERN: OnceLock<Regex> = OnceLock::new();

/// `<tabs><name><spaces>:<spaces><type>`
fn line_pattern() -> &'static Regex {
    LINE_PATTERN.get_or_init(|| Regex::new(r"^(\t*)([a-zA-Z0-9 ]*?)\s*:\s*(\S+)$").expect("line pattern compiles"))
}

/// An object still open for deeper lines
struct Frame {
    object: ObjectValidator,
    /// Field of the parent the finished object is stored under
    name: String,
    array: bool,
}

/// What a type token turned into
enum Parsed {
    /// Attached as-is
    Leaf(Box<dyn Validator>),
    /// Becomes the new top of the stack; `array` wraps it on close
    Open { object: ObjectValidator, array: bool },
}

/// Schema DSL parser
#[derive(Debug, Default, Clone, Copy)]
pub struct SchemaParser<'f> {
    factory: Option<&'f ValidatorFactory>,
}

impl<'f> SchemaParser<'f> {
    /// Parser that only knows the built-in type tokens
    pub fn new() -> Self {
        Self { factory: None }
    }

    /// Parser that resolves unknown tokens through `factory`
    pub fn with_factory(factory: &'f ValidatorFactory) -> Self {
        Self {
            factory: Some(factory),
        }
    }

    /// Parse schema text into its root object validator
    pub fn parse(&self, text: &str) -> SchemaResult<ObjectValidator> {
        self.parse_reader(text.as_bytes())
    }

    /// Parse schema lines from a reader
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> SchemaResult<ObjectValidator> {
        let mut root = ObjectValidator::new();
        let mut stack: Vec<Frame> = Vec::new();

        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            self.parse_line(&mut root, &mut stack, number + 1, &line)?;
        }

        while !stack.is_empty() {
            close(&mut root, &mut stack);
        }
        debug!(fields = root.len(), "schema parsed");
        Ok(root)
    }

    fn parse_line(
        &self,
        root: &mut ObjectValidator,
        stack: &mut Vec<Frame>,
        number: usize,
        line: &str,
    ) -> SchemaResult<()> {
        let captures = line_pattern()
            .captures(line)
            .ok_or_else(|| SchemaError::syntax(number, line))?;
        let depth = captures[1].len();
        let name = &captures[2];
        let token = &captures[3];
        trace!(line = number, depth, name, token, "schema line");

        while depth < stack.len() {
            close(root, stack);
        }
        if depth > stack.len() {
            return Err(SchemaError::indentation(number));
        }

        let parsed = self.resolve(token, number)?;
        let parent = match stack.last_mut() {
            Some(frame) => &mut frame.object,
            None => root,
        };
        match parsed {
            Parsed::Leaf(validator) => parent.set(name, validator),
            Parsed::Open { object, array } => {
                // Reserve the declared position; the finished object replaces it on close.
                parent.set(name, Box::new(ObjectValidator::new()));
                stack.push(Frame {
                    object,
                    name: name.to_string(),
                    array,
                });
            }
        }
        Ok(())
    }

    fn resolve(&self, token: &str, number: usize) -> SchemaResult<Parsed> {
        match token {
            "String" => return Ok(Parsed::Leaf(Box::new(ElementValidator::string()))),
            "Boolean" => return Ok(Parsed::Leaf(Box::new(ElementValidator::boolean()))),
            "Int" => return Ok(Parsed::Leaf(Box::new(ElementValidator::int()))),
            _ => {}
        }

        if let Some(pattern) = token.strip_prefix(REGEX_PREFIX) {
            let validator = ElementValidator::regex(pattern)
                .map_err(|source| SchemaError::invalid_regex(number, pattern, source))?;
            return Ok(Parsed::Leaf(Box::new(validator)));
        }

        let (base, array) = match token.strip_suffix(ARRAY_SUFFIX) {
            Some(base) => (base, true),
            None => (token, false),
        };

        if base == OBJECT_TOKEN {
            return Ok(Parsed::Open {
                object: ObjectValidator::new(),
                array,
            });
        }

        match self.factory.and_then(|factory| factory.construct(base)) {
            Some(Constructed::Object(object)) => Ok(Parsed::Open { object, array }),
            Some(Constructed::Element(element)) if array => {
                Ok(Parsed::Leaf(Box::new(ArrayValidator::new(element))))
            }
            Some(Constructed::Element(element)) => Ok(Parsed::Leaf(Box::new(element))),
            None => Err(SchemaError::unknown_type(token, number)),
        }
    }
}

/// Pop the top frame and attach its object to the new top
fn close(root: &mut ObjectValidator, stack: &mut Vec<Frame>) {
    let Some(frame) = stack.pop() else {
        return;
    };
    let validator: Box<dyn Validator> = if frame.array {
        Box::new(ArrayValidator::new(frame.object))
    } else {
        Box::new(frame.object)
    };
    let parent = match stack.last_mut() {
        Some(top) => &mut top.object,
        None => root,
    };
    parent.set(frame.name, validator);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FailureReason;

    fn parse(text: &str) -> SchemaResult<ObjectValidator> {
        SchemaParser::new().parse(text)
    }

    fn tokens(object: &ObjectValidator) -> Vec<(String, String)> {
        object
            .fields()
            .unwrap_or_default()
            .iter()
            .map(|(name, validator)| (name.clone(), validator.type_token()))
            .collect()
    }

    #[test]
    fn test_flat_schema() {
        let root = parse("name:String\nactive:Boolean\ncount:Int\n").unwrap();
        assert_eq!(
            tokens(&root),
            vec![
                ("name".to_string(), "String".to_string()),
                ("active".to_string(), "Boolean".to_string()),
                ("count".to_string(), "Int".to_string()),
            ]
        );
    }

    #[test]
    fn test_nested_objects_and_arrays() {
        let root = parse("model:Object\n\tmembers:Object[]\n\t\tsize:Int\n\ttitle:String\nid:Int").unwrap();
        assert_eq!(root.keys().collect::<Vec<_>>(), vec!["model", "id"]);

        let model = root.get("model").unwrap();
        assert_eq!(model.type_token(), "Object");
        let model_fields: Vec<_> = model.fields().unwrap().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(model_fields, vec!["members", "title"]);

        let members = model.fields().unwrap()[0].1.as_ref();
        assert_eq!(members.type_token(), "Object[]");
        let element = members.element().unwrap();
        assert_eq!(element.fields().unwrap()[0].0, "size");
    }

    #[test]
    fn test_spaces_around_colon() {
        let root = parse("full name :  String").unwrap();
        assert_eq!(root.keys().collect::<Vec<_>>(), vec!["full name"]);
    }

    #[test]
    fn test_regex_token() {
        let root = parse("code:Regex:^[0-9]+$").unwrap();
        assert_eq!(root.get("code").unwrap().type_token(), "Regex:^[0-9]+$");
    }

    #[test]
    fn test_invalid_regex() {
        let err = parse("a:String\ncode:Regex:(").unwrap_err();
        assert!(matches!(err, SchemaError::InvalidRegex { line: 2, .. }));
    }

    #[test]
    fn test_indentation_jump() {
        let err = parse("a:Object\n\t\tb:Int").unwrap_err();
        assert!(matches!(err, SchemaError::Indentation { line: 2 }));
        assert_eq!(err.to_string(), "Unexpected indentation at line 2");
    }

    #[test]
    fn test_children_under_leaf_are_rejected() {
        let err = parse("a:String\n\tb:Int").unwrap_err();
        assert!(matches!(err, SchemaError::Indentation { line: 2 }));
    }

    #[test]
    fn test_unknown_type() {
        let err = parse("a:String\nb:Foo").unwrap_err();
        assert!(matches!(err, SchemaError::UnknownType { ref token, line: 2 } if token == "Foo"));
        assert_eq!(err.to_string(), "Unknown validator type \"Foo\" at line 2");
    }

    #[test]
    fn test_arrays_of_builtin_leaves_are_unknown() {
        let err = parse("tags:String[]").unwrap_err();
        assert!(matches!(err, SchemaError::UnknownType { line: 1, .. }));
    }

    #[test]
    fn test_syntax_errors() {
        let err = parse("a:String\nno colon here").unwrap_err();
        assert!(matches!(err, SchemaError::Syntax { line: 2, ref text } if text == "no colon here"));

        let err = parse("a:String\n\nb:Int").unwrap_err();
        assert!(matches!(err, SchemaError::Syntax { line: 2, .. }));

        let err = parse("bad-name:String").unwrap_err();
        assert!(matches!(err, SchemaError::Syntax { line: 1, .. }));
    }

    #[test]
    fn test_crlf_lines() {
        let root = parse("a:Object\r\n\tb:Int\r\n").unwrap();
        assert_eq!(root.get("a").unwrap().fields().unwrap().len(), 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_field_keeps_position() {
        let root = parse("a:Object\n\tx:Int\nb:Int\na:String").unwrap();
        assert_eq!(root.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(root.get("a").unwrap().type_token(), "String");
    }

    #[test]
    fn test_factory_kinds() {
        let mut factory = ValidatorFactory::new();
        factory.register_object("Member", |_: &dyn crate::node::Node, _: &mut crate::validation::ValidationContext| true);
        factory.register_pattern("Digits", "^[0-9]+$").unwrap();

        let parser = SchemaParser::with_factory(&factory);
        let root = parser
            .parse("lead:Member\n\tname:String\nteam:Member[]\n\tname:String\ncodes:Digits[]\nzip:Digits")
            .unwrap();
        let summary = tokens(&root);
        assert_eq!(summary[0].1, "Member");
        assert_eq!(summary[1].1, "Member[]");
        assert_eq!(summary[2].1, "Digits[]");
        assert_eq!(summary[3].1, "Digits");
        assert_eq!(root.get("team").unwrap().element().unwrap().fields().unwrap().len(), 1);

        // Without the factory the same tokens are unknown.
        assert!(matches!(
            SchemaParser::new().parse("lead:Member"),
            Err(SchemaError::UnknownType { .. })
        ));
    }

    #[test]
    fn test_object_array_on_non_array_is_a_validation_error() {
        use crate::validation::{ValidationContext, ValidationParams};
        let root = parse("items:Object[]\n\tid:Int").unwrap();
        let document = serde_json::json!({"items": {"id": 1}});
        let error = root
            .validate(&ValidationParams::new(&document, ""), &mut ValidationContext::new())
            .unwrap_err();
        assert_eq!(error.to_string(), "items");
        assert_eq!(error.reason(), Some(FailureReason::NotAnArray));
    }
}
