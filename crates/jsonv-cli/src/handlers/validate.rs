//! Validate command handler

use crate::cli::ValidateArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use jsonv_schema::{Schema, SchemaLoader, ValidationConfig, ValidationError};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Outcome for one document
#[derive(Debug, Serialize)]
struct DocumentReport {
    path: String,
    valid: bool,
    /// First failure when the document does not match the schema
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ValidationError>,
    /// Set when the document could not be read or parsed
    #[serde(skip_serializing_if = "Option::is_none")]
    load_error: Option<String>,
}

/// Machine-readable summary of a validate run
#[derive(Debug, Serialize)]
struct ValidationReport {
    schema: String,
    checked: usize,
    failed: usize,
    /// Documents never looked at because the run stopped early
    skipped: usize,
    documents: Vec<DocumentReport>,
}

/// Handle the validate command
#[instrument(skip(args, config, output), fields(schema = %args.schema.display(), documents = args.documents.len()))]
pub fn handle_validate(args: ValidateArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details("validate_command", &args.schema.display().to_string());

    let schema = super::load_schema(&args.schema, config)?;
    output.info(&format!("Validating against schema: {}", args.schema.display()))?;

    let mut validation = ValidationConfig::new().with_max_errors(args.max_errors);
    if args.fail_fast {
        validation = validation.with_fail_fast();
    }

    let report = validate_documents(&schema, &args, &validation, output)?;

    if output.is_human() {
        write_human_report(&report, output)?;
    } else {
        output.data(&report)?;
    }

    info!(checked = report.checked, failed = report.failed, "Validation finished");

    if report.failed > 0 {
        return Err(Error::ValidationFailed {
            failed: report.failed,
            checked: report.checked,
        });
    }
    Ok(())
}

fn validate_documents(
    schema: &Schema,
    args: &ValidateArgs,
    validation: &ValidationConfig,
    output: &OutputWriter,
) -> Result<ValidationReport> {
    let loader = SchemaLoader::new();
    let progress = output.progress_bar(args.documents.len() as u64, "validating");

    let mut documents = Vec::with_capacity(args.documents.len());
    let mut failed = 0;

    for path in &args.documents {
        let report = validate_document(schema, &loader, path);
        if !report.valid {
            failed += 1;
        }
        documents.push(report);

        if let Some(pb) = &progress {
            pb.inc(1);
        }
        if validation.should_stop(failed) {
            debug!(failed, "Stopping early");
            break;
        }
    }

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    Ok(ValidationReport {
        schema: args.schema.display().to_string(),
        checked: documents.len(),
        failed,
        skipped: args.documents.len() - documents.len(),
        documents,
    })
}

fn validate_document(schema: &Schema, loader: &SchemaLoader<'_>, path: &Path) -> DocumentReport {
    let mut report = DocumentReport {
        path: path.display().to_string(),
        valid: false,
        error: None,
        load_error: None,
    };

    let document = match loader.load_document(path) {
        Ok(document) => document,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Document could not be loaded");
            report.load_error = Some(e.to_string());
            return report;
        }
    };

    match schema.validate(&document) {
        Ok(_) => report.valid = true,
        Err(error) => {
            warn!(path = %path.display(), failure = %error, "Document failed validation");
            report.error = Some(error);
        }
    }
    report
}

fn write_human_report(report: &ValidationReport, output: &mut OutputWriter) -> Result<()> {
    for document in &report.documents {
        if document.valid {
            output.success(&format!("✓ {}", document.path))?;
        } else if let Some(error) = &document.error {
            output.error(&format!("✗ {}", document.path))?;
            output.validation_error(error)?;
        } else if let Some(message) = &document.load_error {
            output.error(&format!("✗ {}: {}", document.path, message))?;
        }
    }

    if report.skipped > 0 {
        output.warning(&format!("{} document(s) skipped after stopping early", report.skipped))?;
    }

    let summary = format!("{} of {} document(s) valid", report.checked - report.failed, report.checked);
    if report.failed == 0 {
        output.success(&summary)
    } else {
        output.error(&summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::config::ConfigBuilder;
    use crate::handlers::test_support::{write_file, writer, SCHEMA};
    use tempfile::TempDir;

    const VALID: &str = r#"{"model": {"name": "m", "members": [{"size": 1}], "zip": "12345"}}"#;
    const INVALID: &str = r#"{"model": {"name": "m", "members": [{"size": 1}, {"size": "two"}], "zip": "12345"}}"#;

    fn config() -> Config {
        ConfigBuilder::new().add_type("Zip", "^[0-9]{5}$").build()
    }

    fn args(dir: &TempDir, documents: &[(&str, &str)]) -> ValidateArgs {
        ValidateArgs {
            schema: write_file(dir, "model.jsons", SCHEMA),
            documents: documents
                .iter()
                .map(|(name, content)| write_file(dir, name, content))
                .collect(),
            fail_fast: false,
            max_errors: 0,
        }
    }

    #[test]
    fn test_all_valid() {
        let dir = TempDir::new().unwrap();
        let yaml = "model:\n  name: m\n  members:\n    - size: 2\n  zip: '54321'\n";
        let args = args(&dir, &[("a.json", VALID), ("b.yaml", yaml)]);

        let (mut output, buffer) = writer(OutputFormat::Human);
        handle_validate(args, &config(), &mut output).unwrap();

        let text = buffer.contents();
        assert!(text.contains("a.json"));
        assert!(text.contains("b.yaml"));
        assert!(text.contains("2 of 2 document(s) valid"));
    }

    #[test]
    fn test_failure_reports_path() {
        let dir = TempDir::new().unwrap();
        let args = args(&dir, &[("good.json", VALID), ("bad.json", INVALID)]);

        let (mut output, buffer) = writer(OutputFormat::Human);
        let err = handle_validate(args, &config(), &mut output).unwrap_err();

        assert!(matches!(err, Error::ValidationFailed { failed: 1, checked: 2 }));
        let text = buffer.contents();
        assert!(text.contains("ERROR: ✗"));
        assert!(text.contains("Path: model.members[1].size"));
        assert!(text.contains("1 of 2 document(s) valid"));
    }

    #[test]
    fn test_json_report() {
        let dir = TempDir::new().unwrap();
        let args = args(&dir, &[("bad.json", INVALID), ("broken.json", "{"), ("good.json", VALID)]);

        let (mut output, buffer) = writer(OutputFormat::Json);
        let err = handle_validate(args, &config(), &mut output).unwrap_err();
        assert_eq!(err.exit_code(), 2);

        let report: serde_json::Value = serde_json::from_str(&buffer.contents()).unwrap();
        assert_eq!(report["checked"], 3);
        assert_eq!(report["failed"], 2);
        assert_eq!(report["skipped"], 0);
        assert_eq!(report["documents"][0]["error"]["trace"][0]["field"], "size");
        assert!(report["documents"][1]["load_error"].is_string());
        assert_eq!(report["documents"][2]["valid"], true);
        assert!(report["documents"][2].get("error").is_none());
    }

    #[test]
    fn test_fail_fast_skips_rest() {
        let dir = TempDir::new().unwrap();
        let mut args = args(&dir, &[("bad.json", INVALID), ("good.json", VALID), ("other.json", VALID)]);
        args.fail_fast = true;

        let (mut output, buffer) = writer(OutputFormat::Json);
        let err = handle_validate(args, &config(), &mut output).unwrap_err();
        assert!(matches!(err, Error::ValidationFailed { failed: 1, checked: 1 }));

        let report: serde_json::Value = serde_json::from_str(&buffer.contents()).unwrap();
        assert_eq!(report["skipped"], 2);
    }

    #[test]
    fn test_max_errors() {
        let dir = TempDir::new().unwrap();
        let mut args = args(
            &dir,
            &[("a.json", INVALID), ("b.json", VALID), ("c.json", INVALID), ("d.json", INVALID)],
        );
        args.max_errors = 2;

        let (mut output, _) = writer(OutputFormat::Json);
        let err = handle_validate(args, &config(), &mut output).unwrap_err();
        assert!(matches!(err, Error::ValidationFailed { failed: 2, checked: 3 }));
    }

    #[test]
    fn test_unknown_type_without_config() {
        let dir = TempDir::new().unwrap();
        let args = args(&dir, &[("a.json", VALID)]);

        let (mut output, _) = writer(OutputFormat::Human);
        let err = handle_validate(args, &Config::default(), &mut output).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }
}
