//! Fmt command handler

use crate::cli::FmtArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use colored::Colorize;
use serde::Serialize;
use similar::TextDiff;
use std::fs;
use tracing::{debug, instrument};

#[derive(Debug, Serialize)]
struct FmtReport {
    schema: String,
    canonical: bool,
    formatted: String,
}

/// Handle the fmt command
#[instrument(skip(args, config, output), fields(schema = %args.schema.display(), check = args.check))]
pub fn handle_fmt(args: FmtArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let schema = super::load_schema(&args.schema, config)?;
    let original = fs::read_to_string(&args.schema)?;
    let formatted = schema.to_dsl();
    let canonical = original == formatted;
    debug!(canonical, "Formatted schema");

    let report = FmtReport {
        schema: args.schema.display().to_string(),
        canonical,
        formatted,
    };

    if !output.is_human() {
        output.data(&report)?;
    } else if !args.check {
        output.write(&report.formatted)?;
    } else if canonical {
        output.success(&format!("✓ {} is in canonical form", report.schema))?;
    } else {
        let diff = unified_diff(&original, &report.formatted, &report.schema);
        write_diff(&diff, output)?;
    }

    if args.check && !canonical {
        return Err(Error::NotCanonical { path: args.schema });
    }
    Ok(())
}

fn unified_diff(original: &str, formatted: &str, name: &str) -> String {
    TextDiff::from_lines(original, formatted)
        .unified_diff()
        .context_radius(3)
        .header(name, &format!("{} (canonical)", name))
        .to_string()
}

fn write_diff(diff: &str, output: &mut OutputWriter) -> Result<()> {
    if !output.use_color() {
        return output.write(diff);
    }

    for line in diff.lines() {
        let colored = if line.starts_with("+++") || line.starts_with("---") {
            line.bold().to_string()
        } else if line.starts_with('+') {
            line.green().to_string()
        } else if line.starts_with('-') {
            line.red().to_string()
        } else if line.starts_with("@@") {
            line.cyan().to_string()
        } else {
            line.to_string()
        };
        output.writeln(&colored)?;
    }
    Ok(())
}
