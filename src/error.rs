//! Error types for formsmith
//!
//! Domain-specific error types using thiserror.

use thiserror::Error;

/// Semantic configuration errors
///
/// One variant per schema check, in the order the checks run. The
/// `#[error]` string is the exact message surfaced to the user, so
/// validation stops at the first failing variant and reports it verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A `title` key is present but holds a non-string value
    #[error("Configuration title must be a string")]
    TitleNotString,

    /// The `items` key is missing or not an array
    #[error("Configuration must have an items array")]
    ItemsNotArray,

    /// The `buttons` key is missing or not an array
    #[error("Configuration must have a buttons array")]
    ButtonsNotArray,

    /// An items entry without a usable label or type
    #[error("Invalid field at index {index}")]
    InvalidField { index: usize },

    /// An enum field without selectable options
    #[error("Enum field \"{label}\" must have options array")]
    EnumWithoutOptions { label: String },
}

/// Per-field input errors raised when a form is submitted
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// A required field was left empty
    #[error("This field is required")]
    Required,

    /// A number field holds text that does not parse as a number
    #[error("Must be a valid number")]
    NotANumber,
}
