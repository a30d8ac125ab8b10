//! Check command handler

use crate::cli::CheckArgs;
use crate::config::Config;
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use jsonv_schema::Validator;
use serde::Serialize;
use tracing::instrument;

/// One declared field, addressed the way failure paths are rendered
#[derive(Debug, Serialize, PartialEq, Eq)]
struct FieldSummary {
    path: String,
    #[serde(rename = "type")]
    token: String,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    schema: String,
    valid: bool,
    fields: Vec<FieldSummary>,
    custom_types: Vec<String>,
}

/// Handle the check command
#[instrument(skip(args, config, output), fields(schema = %args.schema.display()))]
pub fn handle_check(args: CheckArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details("check_command", &args.schema.display().to_string());

    let schema = super::load_schema(&args.schema, config)?;

    let mut fields = Vec::new();
    collect_fields(schema.root(), "", &mut fields);

    let report = CheckReport {
        schema: args.schema.display().to_string(),
        valid: true,
        fields,
        custom_types: config.types.keys().cloned().collect(),
    };

    if !output.is_human() {
        return output.data(&report);
    }

    output.success(&format!("✓ {} is valid ({} fields)", report.schema, report.fields.len()))?;
    output.section("Fields")?;
    output.table(
        &["Path", "Type"],
        report
            .fields
            .iter()
            .map(|field| vec![field.path.clone(), field.token.clone()])
            .collect(),
    )?;

    if !report.custom_types.is_empty() {
        output.section("Custom Types")?;
        for name in &report.custom_types {
            output.info(name)?;
        }
    }
    Ok(())
}

/// Walk the tree depth first in declaration order
///
/// Array elements are addressed with an empty index, e.g. `model.members[].size`.
fn collect_fields(validator: &dyn Validator, prefix: &str, out: &mut Vec<FieldSummary>) {
    let Some(fields) = validator.fields() else {
        return;
    };

    for (name, child) in fields {
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{}.{}", prefix, name)
        };
        out.push(FieldSummary {
            path: path.clone(),
            token: child.type_token(),
        });

        match child.element() {
            Some(element) => collect_fields(element, &format!("{}[]", path), out),
            None => collect_fields(child.as_ref(), &path, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::config::ConfigBuilder;
    use crate::handlers::test_support::{write_file, writer, SCHEMA};
    use jsonv_schema::Schema;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_collect_fields_paths() {
        let schema = Schema::parse("model:Object\n\tname:String\n\tmembers:Object[]\n\t\tsize:Int\nflag:Boolean\n").unwrap();
        let mut fields = Vec::new();
        collect_fields(schema.root(), "", &mut fields);

        let paths = fields
            .iter()
            .map(|f| (f.path.as_str(), f.token.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(
            paths,
            vec![
                ("model", "Object"),
                ("model.name", "String"),
                ("model.members", "Object[]"),
                ("model.members[].size", "Int"),
                ("flag", "Boolean"),
            ]
        );
    }

    #[test]
    fn test_check_json_report() {
        let dir = TempDir::new().unwrap();
        let schema = write_file(&dir, "model.jsons", SCHEMA);
        let config = ConfigBuilder::new().add_type("Zip", "^[0-9]{5}$").build();

        let (mut output, buffer) = writer(OutputFormat::Json);
        handle_check(CheckArgs { schema }, &config, &mut output).unwrap();

        let report: serde_json::Value = serde_json::from_str(&buffer.contents()).unwrap();
        assert_eq!(report["valid"], true);
        assert_eq!(report["fields"][4]["path"], "model.zip");
        assert_eq!(report["fields"][4]["type"], "Zip");
        assert_eq!(report["custom_types"][0], "Zip");
    }

    #[test]
    fn test_check_human_table() {
        let dir = TempDir::new().unwrap();
        let schema = write_file(&dir, "model.jsons", SCHEMA);
        let config = ConfigBuilder::new().add_type("Zip", "^[0-9]{5}$").build();

        let (mut output, buffer) = writer(OutputFormat::Human);
        handle_check(CheckArgs { schema }, &config, &mut output).unwrap();

        let text = buffer.contents();
        assert!(text.contains("is valid (5 fields)"));
        assert!(text.contains("=== Fields ==="));
        assert!(text.contains("model.members[].size │ Int"));
        assert!(text.contains("INFO: Zip"));
    }

    #[test]
    fn test_check_reports_parse_error() {
        let dir = TempDir::new().unwrap();
        let schema = write_file(&dir, "bad.jsons", "model:Object\n\t\tname:String\n");

        let (mut output, _) = writer(OutputFormat::Human);
        let err = handle_check(CheckArgs { schema }, &Config::default(), &mut output).unwrap_err();
        assert!(err.to_string().contains("Unexpected indentation at line 2"));
    }

    #[test]
    fn test_check_missing_schema() {
        let (mut output, _) = writer(OutputFormat::Human);
        let args = CheckArgs {
            schema: PathBuf::from("/nonexistent/model.jsons"),
        };
        assert_eq!(handle_check(args, &Config::default(), &mut output).unwrap_err().exit_code(), 3);
    }
}
