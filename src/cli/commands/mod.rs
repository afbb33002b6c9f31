//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod check;
pub mod edit;

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive form editor
    Edit {
        /// Configuration file to load into the editor
        file: Option<PathBuf>,
    },

    /// Validate a configuration file without opening the editor
    Check {
        /// Configuration file to validate
        file: PathBuf,
    },
}

impl Commands {
    /// Execute the command
    pub fn run(self, json: bool, quiet: bool) -> Result<()> {
        match self {
            Commands::Edit { file } => edit::execute(file.as_deref(), json),
            Commands::Check { file } => check::execute(&file, json, quiet),
        }
    }
}
