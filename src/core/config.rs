//! Form configuration data model
//!
//! A configuration is authored as JSON text and describes a form's title,
//! fields, and buttons. The typed structures here only ever come out of
//! [`crate::core::validate::validate`]; once produced they are read-only
//! and are replaced wholesale by the next successful validation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The complete validated form description
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormConfig {
    /// Form title shown above the fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Fields in display order (may be empty)
    pub items: Vec<FieldSpec>,

    /// Button labels in display order
    pub buttons: Vec<String>,
}

/// One form field's declarative description
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldSpec {
    /// Field label, used as the key in submitted data
    pub label: String,

    /// Input widget type
    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Selectable values (enum fields only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,

    /// Whether the field must hold a value on submit
    #[serde(default)]
    pub required: bool,

    /// Initial value shown before the user edits the field
    #[serde(
        default,
        rename = "defaultValue",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_value: Option<Value>,
}

/// Supported field input types
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Numeric input with submit-time coercion
    Number,
    /// Single-line text input
    String,
    /// Multi-line text input
    Multiline,
    /// Checkbox
    Boolean,
    /// Date entered as text (YYYY-MM-DD)
    Date,
    /// Radio-style selection from `options`
    Enum,
}

impl FieldType {
    /// Lowercase name as it appears in configuration text
    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::Number => "number",
            FieldType::String => "string",
            FieldType::Multiline => "multiline",
            FieldType::Boolean => "boolean",
            FieldType::Date => "date",
            FieldType::Enum => "enum",
        }
    }
}

/// Sample configuration seeded into the editor on first launch
pub const SAMPLE_CONFIG: &str = r#"{
  "title": "Sample Form",
  "items": [
    {
      "label": "Count",
      "type": "number"
    },
    {
      "label": "Is Editable",
      "type": "boolean"
    },
    {
      "label": "Caption",
      "type": "string"
    },
    {
      "label": "Description",
      "type": "multiline"
    }
  ],
  "buttons": ["Cancel", "Save"]
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_names_are_lowercase() {
        let json = serde_json::to_string(&FieldType::Multiline).unwrap();
        assert_eq!(json, "\"multiline\"");
    }

    #[test]
    fn test_field_spec_defaults() {
        let spec: FieldSpec =
            serde_json::from_str(r#"{"label": "Age", "type": "number"}"#).unwrap();
        assert_eq!(spec.label, "Age");
        assert_eq!(spec.field_type, FieldType::Number);
        assert!(!spec.required);
        assert!(spec.options.is_none());
        assert!(spec.default_value.is_none());
    }

    #[test]
    fn test_default_value_uses_camel_case_key() {
        let spec: FieldSpec = serde_json::from_str(
            r#"{"label": "Caption", "type": "string", "defaultValue": "hello"}"#,
        )
        .unwrap();
        assert_eq!(spec.default_value, Some(Value::String("hello".into())));
    }

    #[test]
    fn test_unknown_field_type_is_rejected() {
        let result = serde_json::from_str::<FieldSpec>(r#"{"label": "X", "type": "color"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_sample_config_parses() {
        let config: FormConfig = serde_json::from_str(SAMPLE_CONFIG).unwrap();
        assert_eq!(config.title.as_deref(), Some("Sample Form"));
        assert_eq!(config.items.len(), 4);
        assert_eq!(config.buttons, vec!["Cancel", "Save"]);
    }
}
