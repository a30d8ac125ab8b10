//! Output formatting and writing utilities
//!
//! This module provides utilities for formatting and writing output
//! in various formats (JSON, YAML, human-readable), including validation
//! failures and progress indicators.

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use jsonv_schema::{FailureReason, ValidationError, ValidationErrors};
use serde::Serialize;
use std::io::{self, IsTerminal, Write};
use tracing::{debug, trace};

/// Trait for formatting output with specialized support for validation failures
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format the failures of a batch
    #[allow(dead_code)]
    fn format_validation_errors(&self, errors: &ValidationErrors) -> Result<String>;

    /// Format a single validation failure
    fn format_validation_error(&self, error: &ValidationError) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            // Human output falls back to pretty JSON for arbitrary data
            OutputFormat::Human => Ok(serde_json::to_string_pretty(value)?),
        }
    }

    fn format_validation_errors(&self, errors: &ValidationErrors) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_validation_errors_human(errors)),
            _ => self.format(errors),
        }
    }

    fn format_validation_error(&self, error: &ValidationError) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_validation_error_human(error)),
            _ => self.format(error),
        }
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    show_progress: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a writer on stdout
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool, progress: bool) -> Self {
        Self {
            format,
            use_color,
            show_progress: progress && !quiet && io::stdout().is_terminal(),
            quiet,
            writer: Box::new(io::stdout()),
        }
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(format: OutputFormat, use_color: bool, quiet: bool, writer: Box<dyn Write>) -> Self {
        Self {
            format,
            use_color,
            // No progress bars with custom writers
            show_progress: false,
            quiet,
            writer,
        }
    }

    pub fn is_human(&self) -> bool {
        self.format == OutputFormat::Human
    }

    pub fn use_color(&self) -> bool {
        self.use_color
    }

    /// Write raw output
    pub fn write(&mut self, content: &str) -> Result<()> {
        write!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message
    pub fn info(&mut self, message: &str) -> Result<()> {
        debug!("Output info: {}", message);

        if self.quiet || !self.is_human() {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(&format!("INFO: {}", message))
        }
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || !self.is_human() {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write a warning message
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if !self.is_human() {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.yellow().to_string())
        } else {
            self.writeln(&format!("WARNING: {}", message))
        }
    }

    /// Write an error message
    pub fn error(&mut self, message: &str) -> Result<()> {
        if !self.is_human() {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.red().to_string())
        } else {
            self.writeln(&format!("ERROR: {}", message))
        }
    }

    /// Write a section header
    pub fn section(&mut self, title: &str) -> Result<()> {
        if self.quiet || !self.is_human() {
            return Ok(());
        }

        self.writeln("")?;
        if self.use_color {
            self.writeln(&format!("═══ {} ═══", title).bright_blue().to_string())
        } else {
            self.writeln(&format!("=== {} ===", title))
        }
    }

    /// Write data in the configured format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let formatted = self.format.format(value)?;
        trace!(bytes = formatted.len(), "Outputting data");

        if formatted.ends_with('\n') {
            self.write(&formatted)
        } else {
            self.writeln(&formatted)
        }
    }

    /// Write a single validation failure
    pub fn validation_error(&mut self, error: &ValidationError) -> Result<()> {
        let formatted = self.format.format_validation_error(error)?;
        self.writeln(formatted.trim_end())
    }

    /// Write the failures of a batch
    #[allow(dead_code)]
    pub fn validation_errors(&mut self, errors: &ValidationErrors) -> Result<()> {
        let formatted = self.format.format_validation_errors(errors)?;
        self.writeln(formatted.trim_end())
    }

    /// Create a progress bar for long operations
    pub fn progress_bar(&self, length: u64, message: &str) -> Option<ProgressBar> {
        if !self.show_progress {
            return None;
        }

        let pb = ProgressBar::new(length);
        pb.set_style(default_progress_style());
        pb.set_message(message.to_string());
        Some(pb)
    }

    /// Write a table (for human format)
    pub fn table(&mut self, headers: &[&str], rows: Vec<Vec<String>>) -> Result<()> {
        if self.quiet || !self.is_human() {
            return Ok(());
        }

        // Calculate column widths
        let mut widths = headers.iter().map(|h| h.chars().count()).collect::<Vec<_>>();
        for row in &rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.chars().count());
                }
            }
        }

        let header_row = headers
            .iter()
            .enumerate()
            .map(|(i, h)| format!("{:width$}", h, width = widths[i]))
            .collect::<Vec<_>>()
            .join(" │ ");

        if self.use_color {
            self.writeln(header_row.trim_end().bold().to_string().as_str())?;
        } else {
            self.writeln(header_row.trim_end())?;
        }

        let separator = widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("─┼─");
        self.writeln(&separator)?;

        for row in rows {
            let row_str = row
                .iter()
                .enumerate()
                .map(|(i, cell)| match widths.get(i) {
                    Some(width) => format!("{:width$}", cell, width = *width),
                    None => cell.clone(),
                })
                .collect::<Vec<_>>()
                .join(" │ ");
            self.writeln(row_str.trim_end())?;
        }

        Ok(())
    }
}

/// Helper function to create a progress bar style
pub fn default_progress_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-")
}

/// Format the failures of a batch for human reading
fn format_validation_errors_human(errors: &ValidationErrors) -> String {
    let mut output = format!("{} document(s) failed validation\n", errors.len());

    for failure in &errors.errors {
        output.push_str(&format!(
            "\n[document {}]\n{}",
            failure.document,
            format_validation_error_human(&failure.error)
        ));
    }

    output
}

/// Format a single failure for human reading
fn format_validation_error_human(error: &ValidationError) -> String {
    let path = error.path();
    let mut output = String::new();

    output.push_str(&format!("  Path: {}\n", if path.is_empty() { "<root>" } else { path.as_str() }));
    output.push_str(&format!("  Message: {}\n", error.describe()));

    if let Some(element) = error.innermost() {
        output.push_str(&format!("  Reason: {}\n", reason_label(element.reason)));
        output.push_str(&format!("  Expected: {}\n", element.validator));
        if let Some(found) = &element.found {
            output.push_str(&format!("  Found: {}\n", found));
        }
    }

    output
}

fn reason_label(reason: FailureReason) -> &'static str {
    match reason {
        FailureReason::Rejected => "value rejected",
        FailureReason::MissingField => "missing field",
        FailureReason::NotAnArray => "not an array",
        FailureReason::HookRejected => "rejected by custom check",
        FailureReason::Nested => "nested failure",
    }
}
