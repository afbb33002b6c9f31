//! Configuration validation pipeline
//!
//! Converts raw configuration text into a validated [`FormConfig`] or
//! fails with a single [`Diagnostic`]. Nothing escapes this boundary:
//! parse failures, schema violations, and anything else all come back
//! as the `Err` side of the result.
//!
//! The pipeline runs in three stages: parse the text into an untyped
//! JSON tree, run the ordered schema checks against that tree (stopping
//! at the first failure so the reported message always names the
//! earliest problem), then decode the tree into the typed model. The
//! final decode is total: a tree that passes the checks but does not
//! match the typed shapes (say, a field type outside the supported set)
//! is rejected rather than trusted.

use serde_json::{error::Category, Value};

use crate::core::config::FormConfig;
use crate::core::diagnostic::Diagnostic;
use crate::error::ConfigError;

/// Validate configuration text.
///
/// # Examples
///
/// ```
/// use formsmith::core::validate::validate;
///
/// let config = validate(r#"{"items": [], "buttons": ["Ok"]}"#).unwrap();
/// assert!(config.items.is_empty());
/// assert_eq!(config.buttons, vec!["Ok"]);
/// ```
pub fn validate(text: &str) -> Result<FormConfig, Diagnostic> {
    let tree: Value = match serde_json::from_str(text) {
        Ok(tree) => tree,
        Err(err) => {
            let diagnostic = match err.classify() {
                Category::Syntax | Category::Eof => Diagnostic::syntax(&err, text),
                _ => Diagnostic::unclassified(&err),
            };
            tracing::debug!(message = %diagnostic.message, line = ?diagnostic.line, "parse failed");
            return Err(diagnostic);
        }
    };

    if let Err(err) = check_schema(&tree) {
        tracing::debug!(%err, "schema check failed");
        return Err(Diagnostic::semantic(err));
    }

    serde_json::from_value(tree).map_err(|err| Diagnostic::unclassified(&err))
}

/// Ordered schema checks over the untyped tree
fn check_schema(tree: &Value) -> Result<(), ConfigError> {
    if let Some(title) = tree.get("title") {
        if !title.is_string() {
            return Err(ConfigError::TitleNotString);
        }
    }

    let items = tree
        .get("items")
        .and_then(Value::as_array)
        .ok_or(ConfigError::ItemsNotArray)?;

    if tree.get("buttons").and_then(Value::as_array).is_none() {
        return Err(ConfigError::ButtonsNotArray);
    }

    for (index, item) in items.iter().enumerate() {
        let label = item.get("label").and_then(Value::as_str).unwrap_or("");
        let field_type = item.get("type").and_then(Value::as_str).unwrap_or("");

        if label.is_empty() || field_type.is_empty() {
            return Err(ConfigError::InvalidField { index });
        }

        if field_type == "enum" {
            let has_options = item
                .get("options")
                .and_then(Value::as_array)
                .is_some_and(|options| !options.is_empty());
            if !has_options {
                return Err(ConfigError::EnumWithoutOptions {
                    label: label.to_string(),
                });
            }
        }
    }

    Ok(())
}
