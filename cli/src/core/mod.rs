//! # Folio Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Foundational pieces used across Folio:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and the crate-wide `Result` alias
//!
//! ```rust,ignore
//! use folio::core::config; // For loading configuration
//! use folio::core::error::{FolioError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
