//! Core business logic module
//!
//! This module contains the validation pipeline and form state for
//! formsmith. It has NO I/O operations - those belong in [`crate::cli`].
//!
//! # Submodules
//!
//! - [`config`] - Form configuration data model
//! - [`diagnostic`] - Diagnostic synthesis for failed validation
//! - [`validate`] - Configuration validation pipeline
//! - [`form`] - Form input state and submit-time validation

pub mod config;
pub mod diagnostic;
pub mod form;
pub mod validate;
