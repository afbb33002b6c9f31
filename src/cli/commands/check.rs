//! Check command implementation
//!
//! Implements `formsmith check` to validate a configuration file and
//! report the diagnostic without opening the editor.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::json;

use crate::cli::output::status;
use crate::core::validate::validate;

/// Execute the check command
pub fn execute(file: &Path, json: bool, quiet: bool) -> Result<()> {
    let text = fs::read_to_string(file)
        .with_context(|| format!("Failed to read configuration at {}", file.display()))?;

    tracing::info!(file = %file.display(), "checking configuration");

    match validate(&text) {
        Ok(config) => {
            if json {
                println!("{}", json!({ "valid": true }));
            } else {
                println!("{} Configuration is valid", status::SUCCESS);
                if !quiet {
                    if let Some(title) = &config.title {
                        println!("  Title: {title}");
                    }
                    println!("  Fields: {}", config.items.len());
                    println!("  Buttons: {}", config.buttons.len());
                }
            }
            Ok(())
        }
        Err(diagnostic) => {
            if json {
                println!(
                    "{}",
                    json!({ "valid": false, "diagnostic": diagnostic })
                );
            } else {
                println!("{} {diagnostic}", status::ERROR);
                if let Some(details) = &diagnostic.details {
                    println!("  hint: {details}");
                }
            }
            bail!("Configuration is invalid");
        }
    }
}
