//! Form input state and submit-time validation
//!
//! Owns the in-progress values for a rendered form and performs the
//! lightweight input-level checks (required-ness, numeric coercion)
//! before collected data is handed back to the caller. Presentation
//! lives in [`crate::cli::tui`]; nothing here touches the terminal.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::core::config::{FieldSpec, FieldType, FormConfig};
use crate::error::InputError;

/// Collected form values keyed by field label
pub type FormData = BTreeMap<String, Value>;

/// Raw per-field input before submit-time coercion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Text entered into a number/string/multiline/date input
    Text(String),
    /// Checkbox state
    Flag(bool),
    /// Selected enum option
    Choice(String),
}

impl FieldValue {
    /// Whether the value counts as entered for the required check
    fn is_present(&self) -> bool {
        match self {
            FieldValue::Text(text) => !text.is_empty(),
            FieldValue::Flag(flag) => *flag,
            FieldValue::Choice(choice) => !choice.is_empty(),
        }
    }
}

/// In-progress input state for one rendered form.
///
/// Values start out seeded from each field's `defaultValue`; keys exist
/// only for fields the user has touched or that carry a default.
#[derive(Debug, Clone)]
pub struct FormState {
    config: FormConfig,
    values: BTreeMap<String, FieldValue>,
    errors: BTreeMap<String, String>,
}

impl FormState {
    /// Build input state for a validated configuration
    pub fn new(config: FormConfig) -> Self {
        let mut values = BTreeMap::new();
        for field in &config.items {
            if let Some(default) = &field.default_value {
                if let Some(value) = seed_value(field, default) {
                    values.insert(field.label.clone(), value);
                }
            }
        }
        FormState {
            config,
            values,
            errors: BTreeMap::new(),
        }
    }

    /// The configuration this form renders
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Current raw value for a field, if any
    pub fn value(&self, label: &str) -> Option<&FieldValue> {
        self.values.get(label)
    }

    /// Current validation error for a field, if any
    pub fn error(&self, label: &str) -> Option<&str> {
        self.errors.get(label).map(String::as_str)
    }

    /// Number of fields currently failing validation
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Store a field value, clearing that field's error immediately.
    ///
    /// The clearing is optimistic: the new value is not re-validated
    /// until the next submit.
    pub fn set_value(&mut self, label: &str, value: FieldValue) {
        self.values.insert(label.to_string(), value);
        self.errors.remove(label);
    }

    /// Run the submit checks and collect the entered data.
    ///
    /// Returns the label-keyed data when every field passes. Otherwise
    /// records one error message per failing field (readable through
    /// [`FormState::error`]) and returns `None`.
    pub fn submit(&mut self) -> Option<FormData> {
        let mut errors = BTreeMap::new();

        for field in &self.config.items {
            let value = self.values.get(&field.label);

            if field.required && !value.is_some_and(FieldValue::is_present) {
                errors.insert(field.label.clone(), InputError::Required.to_string());
                continue;
            }

            if field.field_type == FieldType::Number {
                if let Some(FieldValue::Text(text)) = value {
                    if !text.is_empty() && coerce_number(text).is_none() {
                        errors.insert(field.label.clone(), InputError::NotANumber.to_string());
                    }
                }
            }
        }

        self.errors = errors;
        if !self.errors.is_empty() {
            return None;
        }

        let mut data = FormData::new();
        for field in &self.config.items {
            if let Some(value) = self.values.get(&field.label) {
                data.insert(field.label.clone(), collect_value(field, value));
            }
        }
        Some(data)
    }
}

/// Convert a configured default into the matching raw input value
fn seed_value(field: &FieldSpec, default: &Value) -> Option<FieldValue> {
    match field.field_type {
        FieldType::Boolean => default.as_bool().map(FieldValue::Flag),
        FieldType::Enum => {
            let choice = default.as_str()?;
            let options = field.options.as_deref().unwrap_or_default();
            options
                .iter()
                .any(|option| option == choice)
                .then(|| FieldValue::Choice(choice.to_string()))
        }
        _ => match default {
            Value::String(text) => Some(FieldValue::Text(text.clone())),
            Value::Number(number) => Some(FieldValue::Text(number.to_string())),
            _ => None,
        },
    }
}

/// Coerce a raw value into the JSON shape recorded in submitted data
fn collect_value(field: &FieldSpec, value: &FieldValue) -> Value {
    match value {
        FieldValue::Flag(flag) => Value::Bool(*flag),
        FieldValue::Choice(choice) => Value::String(choice.clone()),
        FieldValue::Text(text) => {
            if field.field_type == FieldType::Number {
                if let Some(number) = coerce_number(text) {
                    return Value::Number(number);
                }
            }
            Value::String(text.clone())
        }
    }
}

/// Parse entered text as a finite JSON number
fn coerce_number(text: &str) -> Option<serde_json::Number> {
    let parsed: f64 = text.trim().parse().ok()?;
    serde_json::Number::from_f64(parsed)
}
