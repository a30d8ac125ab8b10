//! Error types for schema parsing and file loading
//!
//! Copyright (c) 2025 jsonv Team
//! Licensed under the Apache-2.0 license

use std::path::PathBuf;
use thiserror::Error;

/// Result type for schema parsing
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Result type for loader operations
pub type LoaderResult<T> = Result<T, LoaderError>;

/// Malformed schema DSL
///
/// Parsing stops at the first error; line numbers are 1-based.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// Line does not match `<tabs><name>:<type>`
    #[error("Syntax error at line {line} ( \"{text}\" )")]
    Syntax { line: usize, text: String },

    /// Line is nested more than one level below the previous one
    #[error("Unexpected indentation at line {line}")]
    Indentation { line: usize },

    /// Type token is neither built in nor registered
    #[error("Unknown validator type \"{token}\" at line {line}")]
    UnknownType { token: String, line: usize },

    /// `Regex:` pattern failed to compile
    #[error("Invalid regex \"{pattern}\" at line {line}: {source}")]
    InvalidRegex {
        line: usize,
        pattern: String,
        source: regex::Error,
    },

    /// Failure of the underlying reader
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SchemaError {
    pub fn syntax<T: Into<String>>(line: usize, text: T) -> Self {
        Self::Syntax {
            line,
            text: text.into(),
        }
    }

    pub fn indentation(line: usize) -> Self {
        Self::Indentation { line }
    }

    pub fn unknown_type<T: Into<String>>(token: T, line: usize) -> Self {
        Self::UnknownType {
            token: token.into(),
            line,
        }
    }

    pub fn invalid_regex<P: Into<String>>(line: usize, pattern: P, source: regex::Error) -> Self {
        Self::InvalidRegex {
            line,
            pattern: pattern.into(),
            source,
        }
    }

    /// Line the error refers to, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Syntax { line, .. }
            | Self::Indentation { line }
            | Self::UnknownType { line, .. }
            | Self::InvalidRegex { line, .. } => Some(*line),
            Self::Io(_) => None,
        }
    }
}

/// Errors raised while reading schema or document files
#[derive(Error, Debug)]
pub enum LoaderError {
    /// File I/O errors
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// YAML parsing errors
    #[error("Failed to parse YAML file '{path}': {source}")]
    YamlParseError {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// JSON parsing errors
    #[error("Failed to parse JSON file '{path}': {source}")]
    JsonParseError {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Unsupported document format
    #[error("Unsupported file format for '{path}'. Expected .json, .yaml, or .yml")]
    UnsupportedFormat { path: PathBuf },

    /// Schema DSL errors
    #[error("Invalid schema '{path}': {source}")]
    InvalidSchema { path: PathBuf, source: SchemaError },
}

impl LoaderError {
    /// Create an I/O error with path context
    pub fn io_error(path: PathBuf, error: std::io::Error) -> Self {
        Self::IoError { path, source: error }
    }

    /// Create a YAML parsing error with path context
    pub fn yaml_parse_error(path: PathBuf, error: serde_yaml::Error) -> Self {
        Self::YamlParseError { path, source: error }
    }

    /// Create a JSON parsing error with path context
    pub fn json_parse_error(path: PathBuf, error: serde_json::Error) -> Self {
        Self::JsonParseError { path, source: error }
    }

    /// Create an unsupported format error
    pub fn unsupported_format(path: PathBuf) -> Self {
        Self::UnsupportedFormat { path }
    }

    /// Attach a path to a schema error; reader failures become I/O errors
    pub fn schema_error(path: PathBuf, error: SchemaError) -> Self {
        match error {
            SchemaError::Io(source) => Self::IoError { path, source },
            source => Self::InvalidSchema { path, source },
        }
    }

    /// Get the path associated with this error
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::IoError { path, .. }
            | Self::YamlParseError { path, .. }
            | Self::JsonParseError { path, .. }
            | Self::UnsupportedFormat { path }
            | Self::InvalidSchema { path, .. } => path,
        }
    }
}
