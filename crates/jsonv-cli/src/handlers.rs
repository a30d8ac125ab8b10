//! Command handlers for CLI subcommands
//!
//! This module contains the implementation logic for each CLI subcommand.

mod check;
mod completions;
mod fmt;
mod validate;

pub use check::handle_check;
pub use completions::handle_completions;
pub use fmt::handle_fmt;
pub use validate::handle_validate;

use crate::config::Config;
use crate::error::{Error, Result};
use jsonv_schema::{Schema, SchemaLoader};
use std::path::Path;
use tracing::debug;

/// Load a schema file with every type declared in the configuration
pub(crate) fn load_schema(path: &Path, config: &Config) -> Result<Schema> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let factory = config.factory()?;
    debug!(custom_types = factory.names().len(), "Loading schema");
    Ok(SchemaLoader::with_factory(&factory).load_schema(path)?)
}
