//! Command-line interface module
//!
//! This module handles argument parsing, output formatting, and the
//! interactive TUI. It contains no business logic - that belongs in
//! the [`crate::core`] module.

pub mod commands;
pub mod output;
pub mod tui;

use anyhow::Result;
use clap::Parser;

use commands::Commands;

/// Formsmith - Interactive JSON-driven form prototyping for the terminal
///
/// Author a form as JSON, validate it with precise diagnostics, and try
/// the rendered result without leaving the terminal.
#[derive(Parser, Debug)]
#[command(name = "formsmith")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        match self.command {
            Some(cmd) => cmd.run(self.json, self.quiet),
            // No subcommand opens the editor on the sample config.
            None => commands::edit::execute(None, self.json),
        }
    }
}
