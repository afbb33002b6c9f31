//! Integration tests for form input state and submit validation
//!
//! Exercises the renderer-facing contract: values collect under field
//! labels, submit blocks on required/numeric failures with one message
//! per failing field, and editing a field clears its error.

use formsmith::core::form::{FieldValue, FormState};
use formsmith::core::validate::validate;
use serde_json::json;

fn form(text: &str) -> FormState {
    FormState::new(validate(text).expect("test configuration must validate"))
}

#[test]
fn test_submit_collects_entered_values() {
    let mut form = form(
        r#"{
            "title": "Signup",
            "items": [
                {"label": "Name", "type": "string", "required": true},
                {"label": "Age", "type": "number"},
                {"label": "Plan", "type": "enum", "options": ["free", "pro"]}
            ],
            "buttons": ["Save"]
        }"#,
    );

    form.set_value("Name", FieldValue::Text("Ada".to_string()));
    form.set_value("Age", FieldValue::Text("36".to_string()));
    form.set_value("Plan", FieldValue::Choice("pro".to_string()));

    let data = form.submit().expect("all fields are valid");
    assert_eq!(data["Name"], json!("Ada"));
    assert_eq!(data["Age"], json!(36.0));
    assert_eq!(data["Plan"], json!("pro"));
}

#[test]
fn test_submit_reports_one_error_per_failing_field() {
    let mut form = form(
        r#"{"items": [
            {"label": "Name", "type": "string", "required": true},
            {"label": "Age", "type": "number"},
            {"label": "Note", "type": "multiline"}
        ], "buttons": ["Save"]}"#,
    );
    form.set_value("Age", FieldValue::Text("not a number".to_string()));

    assert!(form.submit().is_none());
    assert_eq!(form.error("Name"), Some("This field is required"));
    assert_eq!(form.error("Age"), Some("Must be a valid number"));
    assert_eq!(form.error("Note"), None);
    assert_eq!(form.error_count(), 2);
}

#[test]
fn test_errors_do_not_block_other_fields() {
    let mut form = form(
        r#"{"items": [
            {"label": "Name", "type": "string", "required": true},
            {"label": "Caption", "type": "string"}
        ], "buttons": ["Save"]}"#,
    );
    assert!(form.submit().is_none());

    // The failing field does not stop the other one from updating.
    form.set_value("Caption", FieldValue::Text("still editable".to_string()));
    assert_eq!(
        form.value("Caption"),
        Some(&FieldValue::Text("still editable".to_string()))
    );
}

#[test]
fn test_edit_clears_only_that_fields_error() {
    let mut form = form(
        r#"{"items": [
            {"label": "Name", "type": "string", "required": true},
            {"label": "Age", "type": "number"}
        ], "buttons": ["Save"]}"#,
    );
    form.set_value("Age", FieldValue::Text("x".to_string()));
    assert!(form.submit().is_none());

    form.set_value("Age", FieldValue::Text("xy".to_string()));
    assert_eq!(form.error("Age"), None);
    assert_eq!(form.error("Name"), Some("This field is required"));
}

#[test]
fn test_defaults_appear_in_submitted_data() {
    let mut form = form(
        r#"{"items": [
            {"label": "Plan", "type": "enum", "options": ["free", "pro"], "defaultValue": "free"},
            {"label": "Untouched", "type": "string"}
        ], "buttons": ["Save"]}"#,
    );
    let data = form.submit().expect("defaults alone are valid");
    assert_eq!(data["Plan"], json!("free"));
    assert!(!data.contains_key("Untouched"));
}

#[test]
fn test_resubmit_after_fixing_errors_succeeds() {
    let mut form = form(
        r#"{"items": [{"label": "Age", "type": "number", "required": true}], "buttons": ["Save"]}"#,
    );
    assert!(form.submit().is_none());

    form.set_value("Age", FieldValue::Text("7".to_string()));
    let data = form.submit().expect("fixed field submits cleanly");
    assert_eq!(data["Age"], json!(7.0));
    assert_eq!(form.error_count(), 0);
}
