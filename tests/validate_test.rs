//! Integration tests for the configuration validation pipeline
//!
//! Covers the validator's observable contract: valid text produces a
//! typed configuration, invalid text produces exactly one diagnostic
//! with the documented message, line number, and hint.

use formsmith::core::config::FieldType;
use formsmith::core::validate::validate;
use proptest::prelude::*;

#[test]
fn test_minimal_config_end_to_end() {
    let config =
        validate(r#"{"items": [{"label":"Count","type":"number"}], "buttons":["Save"]}"#).unwrap();

    assert!(config.title.is_none());
    assert_eq!(config.items.len(), 1);
    assert_eq!(config.items[0].label, "Count");
    assert_eq!(config.items[0].field_type, FieldType::Number);
    assert_eq!(config.buttons, vec!["Save"]);
}

#[test]
fn test_valid_config_matches_parsed_tree() {
    let text = r#"{
      "title": "Survey",
      "items": [
        {"label": "Plan", "type": "enum", "options": ["free", "pro"], "required": true}
      ],
      "buttons": ["Ok"]
    }"#;
    let config = validate(text).unwrap();
    let tree: serde_json::Value = serde_json::from_str(text).unwrap();
    assert_eq!(serde_json::to_value(&config).unwrap(), tree);
}

#[test]
fn test_empty_items_is_a_valid_form() {
    let config = validate(r#"{"items": [], "buttons": ["Close"]}"#).unwrap();
    assert!(config.items.is_empty());
}

#[test]
fn test_trailing_comma_before_bracket() {
    let diag = validate("{\"items\": [\n  {\"label\": \"A\", \"type\": \"string\"},\n], \"buttons\": []}")
        .unwrap_err();
    assert!(diag.message.contains("extra comma before the closing bracket"));
    assert_eq!(diag.line, Some(3));
}

#[test]
fn test_missing_items_has_exact_message_and_no_line() {
    let diag = validate(r#"{"title": "T", "buttons": []}"#).unwrap_err();
    assert_eq!(diag.message, "Configuration must have an items array");
    assert_eq!(diag.line, None);
    assert_eq!(diag.details, None);
}

#[test]
fn test_invalid_field_reports_offending_index() {
    let diag = validate(
        r#"{"items": [
            {"label": "A", "type": "string"},
            {"label": "B", "type": "string"},
            {"type": "string"}
        ], "buttons": []}"#,
    )
    .unwrap_err();
    assert_eq!(diag.message, "Invalid field at index 2");
}

#[test]
fn test_enum_without_options_mentions_label() {
    let diag = validate(
        r#"{"items": [{"label": "Plan", "type": "enum"}], "buttons": ["Ok"]}"#,
    )
    .unwrap_err();
    assert!(diag.message.contains("must have options array"));
    assert!(diag.message.contains("Plan"));
}

#[test]
fn test_semantic_checks_run_in_order() {
    // Both title and items are wrong; the title check fires first.
    let diag = validate(r#"{"title": 1, "items": 2, "buttons": 3}"#).unwrap_err();
    assert_eq!(diag.message, "Configuration title must be a string");
}

#[test]
fn test_syntax_error_after_three_newlines_is_line_four() {
    let diag = validate("{\n\"items\": [\n1,\n],, \"buttons\": []}").unwrap_err();
    assert_eq!(diag.line, Some(4));
}

proptest! {
    #[test]
    fn validate_is_idempotent(text in any::<String>()) {
        prop_assert_eq!(validate(&text), validate(&text));
    }

    #[test]
    fn syntax_error_line_counts_preceding_newlines(newlines in 0usize..8) {
        let text = format!("{}?", "\n".repeat(newlines));
        let diag = validate(&text).unwrap_err();
        prop_assert_eq!(diag.line, Some(newlines + 1));
    }
}
