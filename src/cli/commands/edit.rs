//! Edit command implementation
//!
//! Launches the interactive TUI, seeded either from a configuration
//! file or from the built-in sample, and prints the data collected by
//! the last successful submit once the editor closes.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::json;

use crate::cli::output::status;
use crate::cli::tui::FormTui;
use crate::core::config::SAMPLE_CONFIG;

/// Execute the edit command
pub fn execute(file: Option<&Path>, json: bool) -> Result<()> {
    let text = match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration at {}", path.display()))?,
        None => SAMPLE_CONFIG.to_string(),
    };

    tracing::info!(seeded_from_file = file.is_some(), "starting editor");

    let submission = FormTui::new(&text).run()?;

    if let Some(submission) = submission {
        if json {
            println!(
                "{}",
                json!({ "button": submission.button, "data": submission.data })
            );
        } else {
            println!(
                "{} Submitted via '{}':",
                status::SUCCESS,
                submission.button
            );
            println!("{}", serde_json::to_string_pretty(&submission.data)?);
        }
    }

    Ok(())
}
