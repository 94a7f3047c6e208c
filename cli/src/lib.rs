//! # Folio Library
//!
//! File: cli/src/lib.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The portfolio assistant as a library. The `folio` binary and the
//! integration tests in `cli/tests/` both build on it.
//!
//! - `responder`: keyword routing from visitor text to a canned reply
//! - `conversation`: the chat log the responder's replies are recorded in
//! - `theme`: persisted light/dark preference
//! - `contact`: contact form validation and acknowledgment
//! - `core`: configuration and error types shared by everything above
//!
pub mod contact;
pub mod conversation;
pub mod core;
pub mod responder;
pub mod theme;
