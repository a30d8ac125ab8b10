//! Serialization of validator trees back to the schema DSL
//!
//! Copyright (c) 2025 jsonv Team
//! Licensed under the Apache-2.0 license

use crate::validation::{ObjectValidator, Validator};
use std::io::{self, Write};

/// Writes a validator tree as DSL text
///
/// Output is one `name:type` line per field in declaration order, children
/// indented one tab deeper than their parent. Parsing the output yields a tree
/// with the same shape and type tokens.
#[derive(Debug, Default, Clone, Copy)]
pub struct SchemaWriter;

impl SchemaWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write the fields of `root` to `out`
    pub fn write<W: Write>(&self, root: &ObjectValidator, out: &mut W) -> io::Result<()> {
        write_fields(root, 0, out)
    }

    /// Render the fields of `root` as a string
    pub fn to_string(&self, root: &ObjectValidator) -> String {
        let mut buffer = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write(root, &mut buffer);
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

fn write_fields<W: Write>(validator: &dyn Validator, depth: usize, out: &mut W) -> io::Result<()> {
    let Some(fields) = validator.fields() else {
        return Ok(());
    };
    for (name, child) in fields {
        writeln!(out, "{}{}:{}", "\t".repeat(depth), name, child.type_token())?;
        match child.element() {
            Some(element) => write_fields(element, depth + 1, out)?,
            None => write_fields(child.as_ref(), depth + 1, out)?,
        }
    }
    Ok(())
}
