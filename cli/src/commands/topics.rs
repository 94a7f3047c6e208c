//! # Folio Topics Command
//!
//! File: cli/src/commands/topics.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `folio topics`, which prints the active knowledge base in the
//! order triggers are tested.
//!
//! Example output:
//!
//! ```text
//! #  | Topic      | Replies | Triggers
//! ---+------------+---------+------------------------------
//! 1  | greeting   | 2       | hello, hi, hey
//! 2  | experience | 2       | experience, work, job
//! ...
//! -  | default    | 3       | (fallback)
//! ```
//!
use crate::commands::build_responder;
use anyhow::Context;
use clap::Parser;
use folio::core::config;
use folio::core::error::Result;
use folio::responder::{KnowledgeBase, Topic};
use tracing::info;

#[derive(Parser, Debug)]
pub struct TopicsArgs {}

pub async fn handle_topics(_args: TopicsArgs) -> Result<()> {
    info!("Handling topics command...");

    let cfg = config::load_config().context("Failed to load Folio configuration")?;
    let responder = build_responder(&cfg)?;
    for line in topic_table(responder.knowledge()) {
        println!("{}", line);
    }
    Ok(())
}

fn topic_table(knowledge: &KnowledgeBase) -> Vec<String> {
    let mut lines = vec![
        format!("{:<2} | {:<10} | {:<7} | Triggers", "#", "Topic", "Replies"),
        format!("{}+{}+{}+{}", "-".repeat(3), "-".repeat(12), "-".repeat(9), "-".repeat(30)),
    ];
    let rows = Topic::PRIORITY
        .into_iter()
        .enumerate()
        .map(|(i, topic)| ((i + 1).to_string(), topic, knowledge.triggers(topic).join(", ")))
        .chain(std::iter::once((
            "-".to_string(),
            Topic::Default,
            "(fallback)".to_string(),
        )));
    for (rank, topic, triggers) in rows {
        lines.push(format!(
            "{:<2} | {:<10} | {:<7} | {}",
            rank,
            topic.as_str(),
            knowledge.replies(topic).len(),
            triggers
        ));
    }
    lines
}
