//! # Folio Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used by the ambient layers of Folio:
//! configuration loading, custom knowledge bases, theme state and the contact
//! form. The responder itself has no failure modes; every string classifies.
//!
//! ## Architecture
//!
//! - `FolioError`: a `thiserror` enum naming each failure domain
//! - `Result<T>`: a type alias for `anyhow::Result<T>` so callers can attach context
//!
//! ## Examples
//!
//! ```rust,ignore
//! use anyhow::Context;
//!
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read knowledge file: {}", path.display()))?;
//!
//! if form.email.trim().is_empty() {
//!     return Err(FolioError::ContactField { field: "email", reason: "is required".into() })?;
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for the Folio application.
#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid knowledge base: {0}")]
    KnowledgeBase(String),

    #[error("Unknown topic '{name}'.")]
    UnknownTopic { name: String },

    #[error("Unknown theme '{name}'. Expected 'light' or 'dark'.")]
    UnknownTheme { name: String },

    #[error("Theme state error: {0}")]
    ThemeState(String),

    #[error("Contact form field '{field}' {reason}")]
    ContactField { field: &'static str, reason: String },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
