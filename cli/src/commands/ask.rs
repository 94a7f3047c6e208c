//! # Folio Ask Command
//!
//! File: cli/src/commands/ask.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `folio ask`, which prints one assistant reply for the given text
//! and exits. Words are joined with single spaces before routing.
//!
//! ```bash
//! folio ask "What technologies do you use?"
//! folio ask --seed 1 --show-topic tell me about your degree
//! ```
//!
use crate::commands::{build_responder, join_words};
use anyhow::Context;
use clap::Parser;
use folio::core::config;
use folio::core::error::Result;
use folio::responder::RandomReply;
use tracing::info;

#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The question to ask.
    pub text: Vec<String>,

    /// Seed for reply selection. Overrides the configured seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Prefix the reply with the topic it was routed to.
    #[arg(long)]
    pub show_topic: bool,
}

pub async fn handle_ask(args: AskArgs) -> Result<()> {
    info!("Handling ask command with args: {:?}", args);

    let cfg = config::load_config().context("Failed to load Folio configuration")?;
    let responder = build_responder(&cfg)?;
    let mut selector = RandomReply::new(args.seed.or(cfg.assistant.seed));

    let input = join_words(&args.text);
    let exchange = responder.respond(&input, &mut selector);
    if args.show_topic {
        println!("[{}] {}", exchange.topic, exchange.reply);
    } else {
        println!("{}", exchange.reply);
    }
    Ok(())
}
