//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::PathBuf;
use tempfile::TempDir;

/// Test project context
///
/// Creates a temporary directory for configuration files used by
/// binary-level tests.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl TestProject {
    /// Create a new test project in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test project
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        std::fs::write(path, content).expect("Failed to write file");
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Sample configuration JSON for testing
#[allow(dead_code)]
pub const SAMPLE_FORM: &str = r#"{
  "title": "Signup",
  "items": [
    {"label": "Name", "type": "string", "required": true},
    {"label": "Age", "type": "number"},
    {"label": "Plan", "type": "enum", "options": ["free", "pro"]}
  ],
  "buttons": ["Cancel", "Save"]
}
"#;
