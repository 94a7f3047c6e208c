//! # Folio Classify Command
//!
//! File: cli/src/commands/classify.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `folio classify`, which prints the topic name a piece of text is
//! routed to (`greeting`, `experience`, ..., `default`). Useful for checking a
//! custom knowledge file without reading random replies.
//!
//! ```bash
//! folio classify "How can I reach you?"   # contact
//! ```
//!
use crate::commands::{build_responder, join_words};
use anyhow::Context;
use clap::Parser;
use folio::core::config;
use folio::core::error::Result;
use tracing::info;

#[derive(Parser, Debug)]
pub struct ClassifyArgs {
    /// The text to classify.
    pub text: Vec<String>,
}

pub async fn handle_classify(args: ClassifyArgs) -> Result<()> {
    info!("Handling classify command with args: {:?}", args);

    let cfg = config::load_config().context("Failed to load Folio configuration")?;
    let responder = build_responder(&cfg)?;
    println!("{}", responder.classify(&join_words(&args.text)));
    Ok(())
}
