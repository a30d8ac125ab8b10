//! File-level entry points for schemas and documents
//!
//! Copyright (c) 2025 jsonv Team
//! Licensed under the Apache-2.0 license

use crate::loader::document::DocumentParser;
use crate::loader::error::{LoaderError, LoaderResult};
use crate::loader::factory::ValidatorFactory;
use crate::loader::parser::SchemaParser;
use crate::schema::Schema;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads schema files and the documents validated against them
#[derive(Debug, Default, Clone, Copy)]
pub struct SchemaLoader<'f> {
    parser: SchemaParser<'f>,
    documents: DocumentParser,
}

impl<'f> SchemaLoader<'f> {
    /// Loader that only knows the built-in type tokens
    pub fn new() -> Self {
        Self::default()
    }

    /// Loader whose schemas may use the kinds registered in `factory`
    pub fn with_factory(factory: &'f ValidatorFactory) -> Self {
        Self {
            parser: SchemaParser::with_factory(factory),
            documents: DocumentParser::new(),
        }
    }

    /// Parse a schema file
    pub fn load_schema(&self, path: &Path) -> LoaderResult<Schema> {
        let file = File::open(path).map_err(|e| LoaderError::io_error(path.to_path_buf(), e))?;
        let root = self
            .parser
            .parse_reader(BufReader::new(file))
            .map_err(|e| LoaderError::schema_error(path.to_path_buf(), e))?;
        debug!(path = %path.display(), fields = root.len(), "loaded schema");
        Ok(Schema::new(root))
    }

    /// Read a JSON or YAML document, format chosen by extension
    pub fn load_document(&self, path: &Path) -> LoaderResult<Value> {
        let document = self.documents.parse_file(path)?;
        debug!(path = %path.display(), "loaded document");
        Ok(document)
    }

    /// Read several documents, keeping each outcome
    pub fn load_documents<'p>(&self, paths: &'p [PathBuf]) -> Vec<(&'p Path, LoaderResult<Value>)> {
        paths
            .iter()
            .map(|path| (path.as_path(), self.load_document(path)))
            .collect()
    }
}
