//! # Folio Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates all top-level commands of the Folio CLI. Each command
//! defines its own Clap arguments struct and an async `handle_*` function that
//! `main.rs` routes to.
//!
//! ## Commands
//!
//! - `chat`: interactive conversation with the assistant
//! - `ask`: a single reply
//! - `classify`: the topic a question routes to
//! - `topics`: the knowledge base in priority order
//! - `theme`: theme preference
//! - `contact`: contact form acknowledgment
//!
use anyhow::Context;
use folio::core::config::Config;
use folio::core::error::Result;
use folio::responder::Responder;

/// Interactive chat loop.
pub mod chat;
/// One-shot reply.
pub mod ask;
/// Topic classification.
pub mod classify;
/// Knowledge base listing.
pub mod topics;
/// Theme preference (`show`, `set`, `toggle`).
pub mod theme;
/// Contact form.
pub mod contact;

/// Builds the responder over the configured knowledge base.
pub(crate) fn build_responder(cfg: &Config) -> Result<Responder> {
    let knowledge = cfg
        .assistant
        .knowledge_base()
        .context("Failed to load knowledge base")?;
    Ok(Responder::new(knowledge))
}

/// Joins positional words into one line of input.
pub(crate) fn join_words(words: &[String]) -> String {
    words.join(" ")
}
