// Tests for output formatting
//
// These tests cover the human and machine renderings of validation
// failures and the writer helpers used by the command handlers.

use super::testing::SharedBuffer;
use super::*;
use jsonv_schema::TraceElement;

fn size_error() -> ValidationError {
    ValidationError::new(TraceElement {
        validator: "Int".to_string(),
        field: "size".to_string(),
        index: None,
        reason: FailureReason::Rejected,
        found: Some("string".to_string()),
    })
    .with(TraceElement {
        validator: "Object".to_string(),
        field: "members".to_string(),
        index: Some(1),
        reason: FailureReason::Nested,
        found: Some("object".to_string()),
    })
    .with(TraceElement {
        validator: "Object".to_string(),
        field: "model".to_string(),
        index: None,
        reason: FailureReason::Nested,
        found: Some("object".to_string()),
    })
}

fn writer(format: OutputFormat) -> (OutputWriter, SharedBuffer) {
    let buffer = SharedBuffer::default();
    let writer = OutputWriter::with_writer(format, false, false, Box::new(buffer.clone()));
    (writer, buffer)
}

#[test]
fn test_validation_error_human() {
    let formatted = OutputFormat::Human.format_validation_error(&size_error()).unwrap();
    assert!(formatted.contains("Path: model.members[1].size"));
    assert!(formatted.contains("Reason: value rejected"));
    assert!(formatted.contains("Expected: Int"));
    assert!(formatted.contains("Found: string"));
}

#[test]
fn test_missing_field_has_no_found_line() {
    let error = ValidationError::new(TraceElement::missing("String", "name"));
    let formatted = OutputFormat::Human.format_validation_error(&error).unwrap();
    assert!(formatted.contains("Reason: missing field"));
    assert!(!formatted.contains("Found:"));
}

#[test]
fn test_validation_error_json_keeps_trace() {
    let formatted = OutputFormat::Json.format_validation_error(&size_error()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&formatted).unwrap();
    assert_eq!(value["trace"][0]["field"], "size");
    assert_eq!(value["trace"][1]["index"], 1);
    assert_eq!(value["trace"][0]["reason"], "rejected");
}

#[test]
fn test_validation_errors_human_lists_documents() {
    let mut errors = ValidationErrors::new();
    errors.add(0, size_error());
    errors.add(3, ValidationError::new(TraceElement::missing("Object", "model")));

    let formatted = OutputFormat::Human.format_validation_errors(&errors).unwrap();
    assert!(formatted.starts_with("2 document(s) failed validation"));
    assert!(formatted.contains("[document 0]"));
    assert!(formatted.contains("[document 3]"));
    assert!(formatted.contains("Path: model\n"));
}

#[test]
fn test_validation_errors_yaml() {
    let mut errors = ValidationErrors::new();
    errors.add(2, size_error());

    let formatted = OutputFormat::Yaml.format_validation_errors(&errors).unwrap();
    assert!(formatted.contains("document: 2"));
    assert!(formatted.contains("validator: Int"));
}

#[test]
fn test_messages_only_in_human_format() {
    let (mut human, human_buffer) = writer(OutputFormat::Human);
    human.info("checking").unwrap();
    human.success("done").unwrap();
    human.warning("careful").unwrap();
    human.error("failed").unwrap();
    assert_eq!(
        human_buffer.contents(),
        "INFO: checking\ndone\nWARNING: careful\nERROR: failed\n"
    );

    let (mut json, json_buffer) = writer(OutputFormat::Json);
    json.info("checking").unwrap();
    json.success("done").unwrap();
    json.error("failed").unwrap();
    assert!(json_buffer.contents().is_empty());
}

#[test]
fn test_quiet_suppresses_info() {
    let buffer = SharedBuffer::default();
    let mut writer = OutputWriter::with_writer(OutputFormat::Human, false, true, Box::new(buffer.clone()));
    writer.info("checking").unwrap();
    writer.section("Fields").unwrap();
    writer.warning("careful").unwrap();
    assert_eq!(buffer.contents(), "WARNING: careful\n");
}

#[test]
fn test_data_formats() {
    let value = serde_json::json!({"valid": true});

    let (mut json, buffer) = writer(OutputFormat::Json);
    json.data(&value).unwrap();
    assert_eq!(buffer.contents(), "{\"valid\":true}\n");

    let (mut yaml, buffer) = writer(OutputFormat::Yaml);
    yaml.data(&value).unwrap();
    assert_eq!(buffer.contents(), "valid: true\n");
}

#[test]
fn test_table_alignment() {
    let (mut writer, buffer) = writer(OutputFormat::Human);
    writer
        .table(
            &["Path", "Type"],
            vec![
                vec!["model".to_string(), "Object".to_string()],
                vec!["model.members[].size".to_string(), "Int".to_string()],
            ],
        )
        .unwrap();

    let lines = buffer.contents().lines().map(str::to_string).collect::<Vec<_>>();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], format!("{:20} │ Type", "Path"));
    assert_eq!(lines[2], format!("{:20} │ Object", "model"));
    assert_eq!(lines[3], "model.members[].size │ Int");
}

#[test]
fn test_no_progress_bar_for_custom_writer() {
    let (writer, _) = writer(OutputFormat::Human);
    assert!(writer.progress_bar(10, "validating").is_none());
}
